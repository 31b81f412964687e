//! # Book Corpus Registry

use std::path::{Path, PathBuf};

/// The list of "book" files making up one corpus.
///
/// Reading the books is the caller's job; this only records which files
/// belong to the corpus and its rare-word threshold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookCorpus {
    books: Vec<PathBuf>,
    min_word_occurrence: u64,
}

impl BookCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a book file.
    pub fn add_book_filename<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) {
        self.books.push(path.as_ref().to_path_buf());
    }

    /// The registered book files, in registration order.
    pub fn books(&self) -> &[PathBuf] {
        &self.books
    }

    /// Set the minimum number of occurrences for a word to be kept.
    pub fn set_min_word_occurrence(
        &mut self,
        min_word_occurrence: u64,
    ) {
        self.min_word_occurrence = min_word_occurrence;
    }

    /// The minimum number of occurrences for a word to be kept.
    pub fn min_word_occurrence(&self) -> u64 {
        self.min_word_occurrence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_corpus() {
        let mut corpus = BookCorpus::new();
        assert!(corpus.books().is_empty());
        assert_eq!(corpus.min_word_occurrence(), 0);

        corpus.add_book_filename("a.json");
        corpus.add_book_filename(PathBuf::from("b.json"));
        corpus.set_min_word_occurrence(3);

        assert_eq!(
            corpus.books(),
            &[PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
        assert_eq!(corpus.min_word_occurrence(), 3);
    }
}
