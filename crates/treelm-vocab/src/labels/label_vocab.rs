//! # Dependency Label Vocabulary

use crate::types::VocabHashMap;

/// An accumulate-and-lookup ``{ label -> index }`` map.
///
/// Labels are numbered in first-seen order; there is no sentinel,
/// sorting or classing.
#[derive(Default, Debug, Clone)]
pub struct LabelVocab {
    label_index: VocabHashMap<String, usize>,
    labels: Vec<String>,
}

impl LabelVocab {
    /// Create an empty label vocab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a label, returning its index.
    pub fn add_label(
        &mut self,
        label: &str,
    ) -> usize {
        if let Some(&index) = self.label_index.get(label) {
            return index;
        }
        let index = self.labels.len();
        self.labels.push(label.to_string());
        self.label_index.insert(label.to_string(), index);
        index
    }

    /// Return the index of a label; `None` if unknown.
    pub fn search_label(
        &self,
        label: &str,
    ) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    /// Get the label at `index`.
    pub fn label_at(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// The labels, in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
