//! # Frequency-Balanced Classing
//!
//! Povey-style classes: each word is weighted by ``sqrt(count / total)``,
//! and class boundaries are placed at equal shares of the cumulative
//! weight. Very frequent words end up in early, small classes; rare
//! words are spread over the later ones.

use crate::{
    errors::{VocabError, VocabResult},
    types::{ClassIndex, CountType},
};

/// Compute the cumulative square-root-weighted share of each entry.
///
/// ``share[i] = sum_{j<=i} sqrt(c_j / B) / sum_k sqrt(c_k / B)``,
/// clipped to at most `1.0`, where ``B = sum_k c_k``.
///
/// ## Arguments
/// * `counts` - word counts, in vocabulary order.
///
/// ## Returns
/// A monotonically non-decreasing vector of shares, one per entry.
pub fn cumulative_sqrt_shares<C: CountType>(counts: &[C]) -> VocabResult<Vec<f64>> {
    let total: f64 = counts.iter().map(|c| c.to_f64().unwrap_or(0.0)).sum();
    if total <= 0.0 {
        return Err(VocabError::invalid_argument(
            "counts",
            "total word count must be positive",
        ));
    }

    let weights: Vec<f64> = counts
        .iter()
        .map(|c| (c.to_f64().unwrap_or(0.0) / total).sqrt())
        .collect();
    let norm: f64 = weights.iter().sum();

    let mut acc = 0.0;
    Ok(weights
        .into_iter()
        .map(|w| {
            acc += w / norm;
            if acc > 1.0 {
                acc = 1.0;
            }
            acc
        })
        .collect())
}

/// Assign frequency-balanced classes.
///
/// Entry `i` gets the current class `a`; `a` then advances (up to
/// ``num_classes - 1``) when ``share[i]`` exceeds ``(a + 1) / num_classes``.
/// A class may end up empty when the vocabulary is too small for the
/// requested count; that is detected when the classes are grouped.
///
/// ## Arguments
/// * `counts` - word counts, in frequency-sorted vocabulary order.
/// * `num_classes` - the number of classes.
///
/// ## Returns
/// One class per entry.
pub fn frequency_balanced_classes<C: CountType>(
    counts: &[C],
    num_classes: usize,
) -> VocabResult<Vec<ClassIndex>> {
    if num_classes == 0 {
        return Err(VocabError::invalid_argument(
            "num_classes",
            "must be at least 1",
        ));
    }

    let shares = cumulative_sqrt_shares(counts)?;
    let mut current: ClassIndex = 0;
    let mut classes = Vec::with_capacity(shares.len());
    for share in shares {
        classes.push(current);
        if share > (current + 1) as f64 / num_classes as f64 && current < num_classes - 1 {
            current += 1;
        }
    }
    Ok(classes)
}
