//! # Feature-Label Slot
//!
//! The part of a recurrent state that carries the current token's
//! dependency label as a one-hot feature.

/// A recurrent state exposing its feature-label slot.
pub trait FeatureLabelState {
    /// The feature-label slot; one entry per label.
    fn feature_labels_mut(&mut self) -> &mut [f64];
}

/// A dense feature-label slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureLabelVector {
    values: Vec<f64>,
}

impl FeatureLabelVector {
    /// Create a zeroed slot for `num_labels` labels.
    pub fn new(num_labels: usize) -> Self {
        Self {
            values: vec![0.0; num_labels],
        }
    }

    /// The slot values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The set label, if exactly one entry is non-zero.
    pub fn active_label(&self) -> Option<usize> {
        let mut active = self
            .values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0.0)
            .map(|(i, _)| i);
        match (active.next(), active.next()) {
            (Some(label), None) => Some(label),
            _ => None,
        }
    }
}

impl FeatureLabelState for FeatureLabelVector {
    fn feature_labels_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

/// Reset the feature-label slot to all zeros.
pub fn reset_feature_labels<S: FeatureLabelState + ?Sized>(state: &mut S) {
    state.feature_labels_mut().fill(0.0);
}

/// Set the slot to the one-hot encoding of `label`.
///
/// An out-of-range label leaves the slot zeroed.
pub fn update_feature_labels<S: FeatureLabelState + ?Sized>(
    label: usize,
    state: &mut S,
) {
    let slot = state.feature_labels_mut();
    slot.fill(0.0);
    if let Some(v) = slot.get_mut(label) {
        *v = 1.0;
    }
}
