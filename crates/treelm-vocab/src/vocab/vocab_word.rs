//! # Vocabulary Entry

use crate::types::{ClassIndex, CountType};

/// One vocabulary entry.
///
/// The entry's identity is its position in the owning
/// [`crate::vocab::Vocabulary`]; it carries no index of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabWord<C: CountType = u64> {
    /// The token string.
    pub word: String,

    /// Occurrence count.
    pub count: C,

    /// Hierarchical-softmax class; `0` until classing runs.
    pub class_index: ClassIndex,

    /// Reserved; always `0.0` under the current classing algorithms.
    pub probability: f64,
}

impl<C: CountType> VocabWord<C> {
    /// Create an entry with the given count and class `0`.
    pub fn new<S: Into<String>>(
        word: S,
        count: C,
    ) -> Self {
        Self {
            word: word.into(),
            count,
            class_index: 0,
            probability: 0.0,
        }
    }

    /// Builder-style class assignment.
    pub fn with_class(
        self,
        class_index: ClassIndex,
    ) -> Self {
        Self {
            class_index,
            ..self
        }
    }
}
