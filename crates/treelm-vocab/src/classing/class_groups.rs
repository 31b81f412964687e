//! # Class Renumbering and Grouping

use crate::{
    errors::{VocabError, VocabResult},
    types::{ClassIndex, WordIndex},
};

/// Collapse an arbitrary class numbering into dense ids.
///
/// Walking in order, a new id is allocated each time the class differs
/// from the previous entry's. Runs of equal classes share one dense id.
///
/// ## Arguments
/// * `classes` - external class ids, in vocabulary order.
///
/// ## Returns
/// Dense ids ``0..K``, non-decreasing along the input.
pub fn contiguous_class_ids<I>(classes: I) -> Vec<ClassIndex>
where
    I: IntoIterator<Item = ClassIndex>,
{
    let mut last: Option<ClassIndex> = None;
    let mut next: ClassIndex = 0;
    classes
        .into_iter()
        .map(|class| {
            match last {
                Some(prev) if prev == class => {}
                Some(_) => next += 1,
                None => {}
            }
            last = Some(class);
            next
        })
        .collect()
}

/// Group word indices by class.
///
/// ## Arguments
/// * `classes` - the class of each word, in vocabulary order.
/// * `num_classes` - the number of classes.
///
/// ## Returns
/// ``groups[class]`` holds the indices of the words in `class`, ascending.
///
/// ## Errors
/// * [`VocabError::InvalidArgument`] if a class is ``>= num_classes``.
/// * [`VocabError::EmptyClass`] for the first class with no words.
pub fn group_words_by_class(
    classes: &[ClassIndex],
    num_classes: usize,
) -> VocabResult<Vec<Vec<WordIndex>>> {
    let mut groups: Vec<Vec<WordIndex>> = vec![Vec::new(); num_classes];
    for (index, &class) in classes.iter().enumerate() {
        let Some(group) = groups.get_mut(class) else {
            return Err(VocabError::invalid_argument(
                "class_index",
                format!("word {index} has class {class} >= {num_classes}"),
            ));
        };
        group.push(index);
    }

    if let Some(class) = groups.iter().position(|g| g.is_empty()) {
        return Err(VocabError::EmptyClass { class });
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_class_ids() {
        assert_eq!(
            contiguous_class_ids([7, 7, 3, 3, 3, 9, 0, 0]),
            vec![0, 0, 1, 1, 1, 2, 3, 3]
        );
        assert_eq!(contiguous_class_ids([4]), vec![0]);
        assert!(contiguous_class_ids([]).is_empty());
    }

    #[test]
    fn test_contiguous_class_ids_reused_external_id() {
        // A class id that reappears after a different one opens a new run.
        assert_eq!(contiguous_class_ids([1, 2, 1]), vec![0, 1, 2]);
    }

    #[test]
    fn test_group_words_by_class() {
        let groups = group_words_by_class(&[0, 0, 1, 2, 2, 2], 3).unwrap();
        assert_eq!(groups, vec![vec![0, 1], vec![2], vec![3, 4, 5]]);
    }

    #[test]
    fn test_group_words_by_class_empty_class() {
        let err = group_words_by_class(&[0, 0, 2], 3).unwrap_err();
        assert!(matches!(err, VocabError::EmptyClass { class: 1 }));

        let err = group_words_by_class(&[0, 1], 3).unwrap_err();
        assert!(matches!(err, VocabError::EmptyClass { class: 2 }));
    }

    #[test]
    fn test_group_words_by_class_out_of_range() {
        let err = group_words_by_class(&[0, 3], 2).unwrap_err();
        assert!(matches!(err, VocabError::InvalidArgument { .. }));
    }
}
