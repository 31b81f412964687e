//! # Word Vocabulary

use core::cmp::Reverse;
use std::path::Path;

use crate::{
    classing::{
        ExternalClasses,
        contiguous_class_ids,
        frequency_balanced_classes,
        group_words_by_class,
        load_classes_path,
    },
    errors::{VocabError, VocabResult},
    types::{
        ClassIndex,
        CountType,
        END_OF_SENTENCE,
        VocabHashMap,
        WordIndex,
        hash_map_with_capacity,
    },
    vocab::VocabWord,
};

/// Lifecycle phase of a [`Vocabulary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabPhase {
    /// Words are being counted; indices follow insertion order.
    Counting,

    /// Frozen in frequency order; no classes yet.
    Sorted,

    /// Frozen and partitioned into classes.
    Classed,
}

/// The word vocabulary of a language model.
///
/// Owns the entries, the `word -> index` map, the optional external class
/// map and the `class -> [index]` grouping. Every mutation rebuilds the
/// lookup map before returning, so `word -> index` and `index -> word`
/// stay inverse bijections over the entries.
///
/// Words are counted in [`VocabPhase::Counting`], frozen by
/// [`Vocabulary::sort_by_frequency`], then partitioned by
/// [`Vocabulary::assign_words_to_classes`]. Operations invoked out of
/// phase return [`VocabError::OutOfPhase`].
#[derive(Debug, Clone)]
pub struct Vocabulary<C: CountType = u64> {
    words: Vec<VocabWord<C>>,
    word_index: VocabHashMap<String, WordIndex>,
    external_classes: Option<ExternalClasses>,
    class_words: Vec<Vec<WordIndex>>,
    phase: VocabPhase,
}

impl<C: CountType> Default for Vocabulary<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CountType> Vocabulary<C> {
    /// Create an empty vocabulary in the counting phase.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            word_index: hash_map_with_capacity(1024),
            external_classes: None,
            class_words: Vec::new(),
            phase: VocabPhase::Counting,
        }
    }

    /// Build a classed vocabulary from entries whose classes are already set.
    ///
    /// The number of classes is one more than the largest class index.
    ///
    /// ## Errors
    /// * [`VocabError::Parse`] on a duplicate word.
    /// * [`VocabError::EmptyClass`] if a class below the largest has no words.
    pub fn from_classed_words(words: Vec<VocabWord<C>>) -> VocabResult<Self> {
        let mut vocab = Self {
            words,
            word_index: VocabHashMap::default(),
            external_classes: None,
            class_words: Vec::new(),
            phase: VocabPhase::Classed,
        };
        vocab.rebuild_index();
        if vocab.word_index.len() != vocab.words.len() {
            return Err(VocabError::Parse(
                "duplicate word in vocabulary".to_string(),
            ));
        }

        let num_classes = vocab
            .words
            .iter()
            .map(|w| w.class_index + 1)
            .max()
            .unwrap_or(0);
        vocab.class_words = group_words_by_class(&vocab.class_indices(), num_classes)?;
        Ok(vocab)
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> VocabPhase {
        self.phase
    }

    /// The number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entries, in index order.
    pub fn words(&self) -> &[VocabWord<C>] {
        &self.words
    }

    /// Iterate ``(index, entry)`` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (WordIndex, &VocabWord<C>)> {
        self.words.iter().enumerate()
    }

    /// Get the entry at `index`.
    pub fn get(
        &self,
        index: WordIndex,
    ) -> Option<&VocabWord<C>> {
        self.words.get(index)
    }

    /// Get the word at `index`.
    pub fn word_at(
        &self,
        index: WordIndex,
    ) -> Option<&str> {
        self.words.get(index).map(|w| w.word.as_str())
    }

    /// Return the index of a word; `None` if out of vocabulary.
    pub fn search_word(
        &self,
        word: &str,
    ) -> Option<WordIndex> {
        self.word_index.get(word).copied()
    }

    /// Return the count of a word; `None` if out of vocabulary.
    pub fn count_of(
        &self,
        word: &str,
    ) -> Option<C> {
        self.search_word(word).map(|i| self.words[i].count)
    }

    /// The sum of all word counts.
    pub fn total_count(&self) -> u128 {
        self.words
            .iter()
            .map(|w| w.count.to_u128().unwrap_or(0))
            .sum()
    }

    /// Add one occurrence of `word`.
    ///
    /// Unknown words are appended with count `1` at the next index;
    /// known words have their count incremented (saturating).
    ///
    /// ## Returns
    /// The word's index.
    pub fn add_word(
        &mut self,
        word: &str,
    ) -> VocabResult<WordIndex> {
        self.require_phase("add_word", VocabPhase::Counting)?;

        if let Some(index) = self.search_word(word) {
            let entry = &mut self.words[index];
            entry.count = entry.count.saturating_add(C::one());
            return Ok(index);
        }

        let index = self.words.len();
        self.words.push(VocabWord::new(word, C::one()));
        self.word_index.insert(word.to_string(), index);
        Ok(index)
    }

    /// Overwrite the count of a known word.
    ///
    /// Legal in any phase. After [`VocabPhase::Sorted`], a re-sort must be
    /// followed by re-classing.
    ///
    /// ## Returns
    /// `false` (and no change) if the word is unknown.
    pub fn set_word_count(
        &mut self,
        word: &str,
        count: C,
    ) -> bool {
        match self.search_word(word) {
            Some(index) => {
                self.words[index].count = count;
                true
            }
            None => false,
        }
    }

    /// Drop every word, except `</s>`, seen fewer than `min_count` times.
    ///
    /// Remaining words keep their relative order.
    ///
    /// ## Returns
    /// The number of dropped words.
    pub fn retain_min_count(
        &mut self,
        min_count: C,
    ) -> VocabResult<usize> {
        self.require_phase("retain_min_count", VocabPhase::Counting)?;

        let before = self.words.len();
        self.words
            .retain(|w| w.word == END_OF_SENTENCE || w.count >= min_count);
        self.rebuild_index();

        let dropped = before - self.words.len();
        if dropped > 0 {
            log::info!("Dropped {dropped} words seen fewer than {min_count} times");
        }
        Ok(dropped)
    }

    /// Read external classes from a `word class` file.
    ///
    /// On failure the vocabulary is left unchanged.
    pub fn read_classes<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> VocabResult<()> {
        self.require_phase("read_classes", VocabPhase::Counting)?;
        let classes = load_classes_path(path)?;
        self.set_external_classes(classes)
    }

    /// Install an external class map.
    pub fn set_external_classes(
        &mut self,
        classes: ExternalClasses,
    ) -> VocabResult<()> {
        self.require_phase("set_external_classes", VocabPhase::Counting)?;
        self.external_classes = Some(classes);
        Ok(())
    }

    /// The external class map, if classes were read from a file.
    pub fn external_classes(&self) -> Option<&ExternalClasses> {
        self.external_classes.as_ref()
    }

    /// Sort by decreasing count, with `</s>` always at index 0.
    ///
    /// With an external class map the order is by decreasing external class
    /// first, so each class is a contiguous run. Ties keep their previous
    /// relative order (the sort is stable).
    ///
    /// Legal in any phase; the vocabulary becomes [`VocabPhase::Sorted`]
    /// and any previous class grouping is discarded.
    ///
    /// ## Errors
    /// * [`VocabError::MissingSentinel`] if `</s>` was never added.
    /// * [`VocabError::MissingWordClass`] if a word has no external class.
    pub fn sort_by_frequency(&mut self) -> VocabResult<()> {
        if self.search_word(END_OF_SENTENCE).is_none() {
            return Err(VocabError::MissingSentinel);
        }

        let external = self.external_classes.as_ref();
        if let Some(ext) = external
            && let Some(w) = self.words.iter().find(|w| ext.class_of(&w.word).is_none())
        {
            return Err(VocabError::MissingWordClass {
                word: w.word.clone(),
            });
        }

        self.words.sort_by_cached_key(|w| {
            (
                w.word != END_OF_SENTENCE,
                Reverse(external.and_then(|ext| ext.class_of(&w.word))),
                Reverse(w.count),
            )
        });
        self.rebuild_index();

        self.class_words.clear();
        self.phase = VocabPhase::Sorted;

        log::info!("Sorted {} words by frequency", self.words.len());
        Ok(())
    }

    /// Partition the sorted vocabulary into hierarchical-softmax classes.
    ///
    /// With an external class map, the external ids are renumbered densely
    /// in vocabulary order and `num_classes` is only checked against the
    /// result. Otherwise `num_classes` frequency-balanced classes are built.
    ///
    /// On failure the vocabulary is left unchanged.
    ///
    /// ## Errors
    /// * [`VocabError::OutOfPhase`] unless [`VocabPhase::Sorted`].
    /// * [`VocabError::EmptyClass`] if a class received no words; usually
    ///   `num_classes` is too large for the vocabulary.
    pub fn assign_words_to_classes(
        &mut self,
        num_classes: usize,
    ) -> VocabResult<()> {
        self.require_phase("assign_words_to_classes", VocabPhase::Sorted)?;

        let (classes, num_classes) = match &self.external_classes {
            Some(ext) => {
                let external = self
                    .words
                    .iter()
                    .map(|w| {
                        ext.class_of(&w.word)
                            .ok_or_else(|| VocabError::MissingWordClass {
                                word: w.word.clone(),
                            })
                    })
                    .collect::<VocabResult<Vec<_>>>()?;
                let classes = contiguous_class_ids(external);
                let found = classes.last().map_or(0, |&c| c + 1);
                if found != num_classes {
                    log::warn!(
                        "class file yields {found} classes; ignoring requested {num_classes}"
                    );
                }
                (classes, found)
            }
            None => {
                let counts: Vec<C> = self.words.iter().map(|w| w.count).collect();
                (frequency_balanced_classes(&counts, num_classes)?, num_classes)
            }
        };

        let groups = group_words_by_class(&classes, num_classes)?;

        for (word, class) in self.words.iter_mut().zip(classes) {
            word.class_index = class;
            word.probability = 0.0;
        }
        self.class_words = groups;
        self.phase = VocabPhase::Classed;

        log::info!(
            "Assigned {} words to {} classes",
            self.words.len(),
            self.class_words.len()
        );
        for (class, members) in self.class_words.iter().enumerate() {
            log::debug!("class {class}: {} words", members.len());
        }
        Ok(())
    }

    /// The number of classes; `0` before classing.
    pub fn num_classes(&self) -> usize {
        self.class_words.len()
    }

    /// The class of the word at `index`, once classed.
    pub fn class_of(
        &self,
        index: WordIndex,
    ) -> Option<ClassIndex> {
        if self.phase != VocabPhase::Classed {
            return None;
        }
        self.words.get(index).map(|w| w.class_index)
    }

    /// The word indices in `class`, ascending.
    pub fn class_words(
        &self,
        class: ClassIndex,
    ) -> Option<&[WordIndex]> {
        self.class_words.get(class).map(Vec::as_slice)
    }

    /// Recompute the `class -> [index]` grouping from the per-word classes.
    pub fn regroup_classes(&self) -> VocabResult<Vec<Vec<WordIndex>>> {
        self.require_phase("regroup_classes", VocabPhase::Classed)?;
        group_words_by_class(&self.class_indices(), self.num_classes())
    }

    fn class_indices(&self) -> Vec<ClassIndex> {
        self.words.iter().map(|w| w.class_index).collect()
    }

    fn require_phase(
        &self,
        operation: &'static str,
        phase: VocabPhase,
    ) -> VocabResult<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(VocabError::out_of_phase(operation, self.phase))
        }
    }

    fn rebuild_index(&mut self) {
        self.word_index.clear();
        for (index, w) in self.words.iter().enumerate() {
            self.word_index.insert(w.word.clone(), index);
        }
    }
}
