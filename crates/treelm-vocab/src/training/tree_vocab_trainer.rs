//! # Tree-LM Vocabulary Trainer

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::{VocabError, VocabResult},
    labels::{
        DependencyLabelMode,
        FeatureLabelState,
        LabelVocab,
        reset_feature_labels,
        update_feature_labels,
    },
    training::{BookCorpus, DepToken},
    types::{END_OF_SENTENCE, WordIndex},
    vocab::{VocabPhase, Vocabulary},
};

/// The default number of hierarchical-softmax classes.
pub const DEFAULT_NUM_CLASSES: usize = 100;

/// Options for [`TreeVocabTrainer`].
#[derive(Debug, Clone)]
pub struct TreeVocabOptions {
    /// The number of frequency-balanced classes.
    ///
    /// Ignored when a class file is given.
    pub num_classes: usize,

    /// Words seen fewer times are dropped from the vocabulary.
    pub min_word_occurrence: u64,

    /// How dependency labels are encoded.
    pub label_mode: DependencyLabelMode,

    /// An external `word class` file.
    pub class_file: Option<PathBuf>,
}

impl Default for TreeVocabOptions {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_CLASSES)
    }
}

impl TreeVocabOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `num_classes` - The number of frequency-balanced classes.
    pub fn new(num_classes: usize) -> Self {
        Self {
            num_classes,
            min_word_occurrence: 0,
            label_mode: DependencyLabelMode::default(),
            class_file: None,
        }
    }

    /// Sets the number of frequency-balanced classes.
    pub fn with_num_classes(
        self,
        num_classes: usize,
    ) -> Self {
        Self {
            num_classes,
            ..self
        }
    }

    /// Sets the minimum word occurrence.
    pub fn with_min_word_occurrence(
        self,
        min_word_occurrence: u64,
    ) -> Self {
        Self {
            min_word_occurrence,
            ..self
        }
    }

    /// Sets the dependency label mode.
    pub fn with_label_mode(
        self,
        label_mode: DependencyLabelMode,
    ) -> Self {
        Self { label_mode, ..self }
    }

    /// Sets the external class file.
    pub fn with_class_file<P: Into<PathBuf>>(
        self,
        class_file: Option<P>,
    ) -> Self {
        Self {
            class_file: class_file.map(Into::into),
            ..self
        }
    }

    /// Initializes a [`TreeVocabTrainer`] from these options.
    ///
    /// ## Errors
    /// Any error from reading the class file.
    pub fn init(self) -> VocabResult<TreeVocabTrainer> {
        TreeVocabTrainer::new(self)
    }
}

/// The vocabulary side of a tree-LM trainer.
///
/// Owns the word [`Vocabulary`], the dependency [`LabelVocab`] and the three
/// corpora (vocabulary-building, training, validation/test). Corpus
/// reading and tree unrolling happen elsewhere; sentences arrive here as
/// [`DepToken`] sequences.
#[derive(Debug, Clone)]
pub struct TreeVocabTrainer {
    num_classes: usize,
    label_mode: DependencyLabelMode,
    vocabulary: Vocabulary,
    labels: LabelVocab,
    corpus_vocabulary: BookCorpus,
    corpus_train: BookCorpus,
    corpus_valid_test: BookCorpus,
}

impl TreeVocabTrainer {
    /// Create a trainer; reads the class file if one is configured.
    pub fn new(options: TreeVocabOptions) -> VocabResult<Self> {
        let mut trainer = Self {
            num_classes: options.num_classes,
            label_mode: options.label_mode,
            vocabulary: Vocabulary::new(),
            labels: LabelVocab::new(),
            corpus_vocabulary: BookCorpus::new(),
            corpus_train: BookCorpus::new(),
            corpus_valid_test: BookCorpus::new(),
        };
        trainer.set_min_word_occurrence(options.min_word_occurrence);
        if let Some(path) = &options.class_file {
            trainer.read_classes(path)?;
        }
        Ok(trainer)
    }

    /// The word vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The dependency label vocabulary.
    pub fn labels(&self) -> &LabelVocab {
        &self.labels
    }

    /// The number of words in the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The number of dependency labels used as features.
    pub fn label_size(&self) -> usize {
        self.labels.len()
    }

    /// The dependency label mode.
    pub fn label_mode(&self) -> DependencyLabelMode {
        self.label_mode
    }

    /// Select how dependency labels are encoded.
    ///
    /// Must happen before any word is counted, since
    /// [`DependencyLabelMode::ConcatenatedToWord`] changes the word keys.
    pub fn set_dependency_label_type(
        &mut self,
        label_mode: DependencyLabelMode,
    ) -> VocabResult<()> {
        if !self.vocabulary.is_empty() {
            return Err(VocabError::invalid_argument(
                "label_mode",
                "must be set before any word is counted",
            ));
        }
        self.label_mode = label_mode;
        Ok(())
    }

    /// Set the minimum word occurrence on all three corpora.
    pub fn set_min_word_occurrence(
        &mut self,
        min_word_occurrence: u64,
    ) {
        self.corpus_vocabulary
            .set_min_word_occurrence(min_word_occurrence);
        self.corpus_train
            .set_min_word_occurrence(min_word_occurrence);
        self.corpus_valid_test
            .set_min_word_occurrence(min_word_occurrence);
    }

    /// Add a book to the vocabulary and training corpora.
    pub fn add_book_train<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) {
        self.corpus_vocabulary.add_book_filename(&path);
        self.corpus_train.add_book_filename(&path);
    }

    /// Add a book to the validation/test corpus.
    pub fn add_book_test_valid<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) {
        self.corpus_valid_test.add_book_filename(path);
    }

    /// The vocabulary-building corpus.
    pub fn vocabulary_corpus(&self) -> &BookCorpus {
        &self.corpus_vocabulary
    }

    /// The training corpus.
    pub fn train_corpus(&self) -> &BookCorpus {
        &self.corpus_train
    }

    /// The validation/test corpus.
    pub fn valid_test_corpus(&self) -> &BookCorpus {
        &self.corpus_valid_test
    }

    /// Read external word classes; see [`Vocabulary::read_classes`].
    pub fn read_classes<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> VocabResult<()> {
        log::info!("Reading classes from {}", path.as_ref().display());
        self.vocabulary.read_classes(path)
    }

    /// Count one unrolled sentence, followed by one `</s>`.
    ///
    /// ## Errors
    /// [`VocabError::OutOfPhase`] once the vocabulary is frozen; neither the
    /// words nor the labels are touched.
    pub fn count_sentence(
        &mut self,
        sentence: &[DepToken],
    ) -> VocabResult<()> {
        let phase = self.vocabulary.phase();
        if phase != VocabPhase::Counting {
            return Err(VocabError::out_of_phase("count_sentence", phase));
        }

        for token in sentence {
            if self.label_mode.uses_labels() && !token.label.is_empty() {
                self.labels.add_label(&token.label);
            }
            let key = self.label_mode.word_key(&token.word, &token.label);
            self.vocabulary.add_word(&key)?;
        }
        self.vocabulary.add_word(END_OF_SENTENCE)?;
        Ok(())
    }

    /// Freeze the counted vocabulary.
    ///
    /// Drops rare words, sorts by frequency and assigns classes
    /// (external classes when a class file was read).
    pub fn finish_vocabulary(&mut self) -> VocabResult<()> {
        let min = self.corpus_vocabulary.min_word_occurrence();
        if min > 1 {
            self.vocabulary.retain_min_count(min)?;
        }
        self.vocabulary.sort_by_frequency()?;
        self.vocabulary.assign_words_to_classes(self.num_classes)?;

        log::info!(
            "Vocabulary: {} words, {} classes, {} labels",
            self.vocabulary.len(),
            self.vocabulary.num_classes(),
            self.labels.len()
        );
        Ok(())
    }

    /// Count every sentence, then freeze the vocabulary.
    pub fn learn_vocabulary<I, S>(
        &mut self,
        sentences: I,
    ) -> VocabResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[DepToken]>,
    {
        for sentence in sentences {
            self.count_sentence(sentence.as_ref())?;
        }
        self.finish_vocabulary()
    }

    /// The vocabulary index of a word carrying `label`, under the label mode.
    pub fn word_index(
        &self,
        word: &str,
        label: &str,
    ) -> Option<WordIndex> {
        self.vocabulary
            .search_word(&self.label_mode.word_key(word, label))
    }

    /// The index of a dependency label; `None` if unknown.
    pub fn label_index(
        &self,
        label: &str,
    ) -> Option<usize> {
        self.labels.search_label(label)
    }

    /// Reset the feature-label slot of `state`.
    pub fn reset_feature_label_vector<S: FeatureLabelState + ?Sized>(
        &self,
        state: &mut S,
    ) {
        reset_feature_labels(state);
    }

    /// Set the feature-label slot of `state` to `label`.
    pub fn update_feature_label_vector<S: FeatureLabelState + ?Sized>(
        &self,
        label: usize,
        state: &mut S,
    ) {
        update_feature_labels(label, state);
    }

    /// Save the vocabulary table.
    pub fn save_vocabulary<W: Write>(
        &self,
        writer: &mut W,
    ) -> VocabResult<()> {
        self.vocabulary.save(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::FeatureLabelVector;

    fn sentences() -> Vec<Vec<DepToken>> {
        vec![
            vec![
                DepToken::new("the", "det"),
                DepToken::new("dog", "nsubj"),
                DepToken::new("ran", "root"),
            ],
            vec![
                DepToken::new("the", "det"),
                DepToken::new("cat", "nsubj"),
                DepToken::new("ran", "root"),
            ],
            vec![
                DepToken::new("a", "det"),
                DepToken::new("dog", "nsubj"),
                DepToken::new("sat", "root"),
            ],
        ]
    }

    #[test]
    fn test_corpus_registration() {
        let mut trainer = TreeVocabOptions::new(2).init().unwrap();
        trainer.add_book_train("train.json");
        trainer.add_book_test_valid("valid.json");
        trainer.set_min_word_occurrence(4);

        assert_eq!(trainer.vocabulary_corpus().books(), &[PathBuf::from("train.json")]);
        assert_eq!(trainer.train_corpus().books(), &[PathBuf::from("train.json")]);
        assert_eq!(trainer.valid_test_corpus().books(), &[PathBuf::from("valid.json")]);
        for corpus in [
            trainer.vocabulary_corpus(),
            trainer.train_corpus(),
            trainer.valid_test_corpus(),
        ] {
            assert_eq!(corpus.min_word_occurrence(), 4);
        }
    }

    #[test]
    fn test_learn_vocabulary_without_labels() {
        let mut trainer = TreeVocabOptions::new(2).init().unwrap();
        trainer.learn_vocabulary(sentences()).unwrap();

        let vocab = trainer.vocabulary();
        assert_eq!(vocab.phase(), VocabPhase::Classed);
        assert_eq!(vocab.word_at(0), Some(END_OF_SENTENCE));
        assert_eq!(vocab.count_of(END_OF_SENTENCE), Some(3));
        assert_eq!(trainer.vocabulary_size(), 7);
        assert_eq!(trainer.label_size(), 0);
        assert_eq!(vocab.num_classes(), 2);
        assert!(trainer.word_index("dog", "nsubj").is_some());
        assert_eq!(trainer.word_index("dog", "nsubj"), vocab.search_word("dog"));
    }

    #[test]
    fn test_learn_vocabulary_concatenated_labels() {
        let mut trainer = TreeVocabOptions::new(1)
            .with_label_mode(DependencyLabelMode::ConcatenatedToWord)
            .init()
            .unwrap();
        trainer.learn_vocabulary(sentences()).unwrap();

        let vocab = trainer.vocabulary();
        assert!(vocab.search_word("dog:nsubj").is_some());
        assert_eq!(vocab.search_word("dog"), None);
        assert_eq!(trainer.word_index("dog", "nsubj"), vocab.search_word("dog:nsubj"));
        assert_eq!(trainer.label_size(), 3);
    }

    #[test]
    fn test_learn_vocabulary_feature_labels() {
        let mut trainer = TreeVocabOptions::new(1).init().unwrap();
        trainer
            .set_dependency_label_type(DependencyLabelMode::SeparateFeature)
            .unwrap();
        trainer.learn_vocabulary(sentences()).unwrap();

        assert_eq!(trainer.label_size(), 3);
        assert_eq!(trainer.label_index("det"), Some(0));
        assert_eq!(trainer.label_index("root"), Some(2));
        assert!(trainer.vocabulary().search_word("dog").is_some());

        let mut state = FeatureLabelVector::new(trainer.label_size());
        trainer.update_feature_label_vector(trainer.label_index("nsubj").unwrap(), &mut state);
        assert_eq!(state.active_label(), Some(1));
        trainer.reset_feature_label_vector(&mut state);
        assert_eq!(state.active_label(), None);
    }

    #[test]
    fn test_count_after_finish_leaves_labels_unchanged() {
        let mut trainer = TreeVocabOptions::new(1)
            .with_label_mode(DependencyLabelMode::SeparateFeature)
            .init()
            .unwrap();
        trainer.learn_vocabulary(sentences()).unwrap();
        let label_size = trainer.label_size();
        let vocabulary_size = trainer.vocabulary_size();

        assert!(matches!(
            trainer.count_sentence(&[DepToken::new("cat", "amod")]),
            Err(VocabError::OutOfPhase {
                phase: VocabPhase::Classed,
                ..
            })
        ));
        assert_eq!(trainer.label_size(), label_size);
        assert_eq!(trainer.label_index("amod"), None);
        assert_eq!(trainer.vocabulary_size(), vocabulary_size);
    }

    #[test]
    fn test_label_mode_must_precede_counting() {
        let mut trainer = TreeVocabOptions::new(1).init().unwrap();
        trainer.count_sentence(&[DepToken::unlabeled("dog")]).unwrap();
        assert!(
            trainer
                .set_dependency_label_type(DependencyLabelMode::ConcatenatedToWord)
                .is_err()
        );
        assert_eq!(trainer.label_mode(), DependencyLabelMode::Unused);
    }

    #[test]
    fn test_min_word_occurrence() {
        let mut trainer = TreeVocabOptions::new(1)
            .with_min_word_occurrence(2)
            .init()
            .unwrap();
        trainer.learn_vocabulary(sentences()).unwrap();

        let vocab = trainer.vocabulary();
        let mut words: Vec<&str> = vocab.words().iter().map(|w| w.word.as_str()).collect();
        words.sort();
        assert_eq!(words, vec!["</s>", "dog", "ran", "the"]);
    }

    #[test]
    fn test_learn_vocabulary_with_class_file() {
        tempdir::TempDir::new("tree_vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("classes.txt");
                std::fs::write(
                    &path,
                    "</s> 0\nthe 1\na 1\ndog 2\ncat 2\nran 3\nsat 3\n",
                )?;

                let mut trainer = TreeVocabOptions::new(100)
                    .with_class_file(Some(&path))
                    .init()
                    .expect("failed to read classes");
                trainer.learn_vocabulary(sentences()).unwrap();

                let vocab = trainer.vocabulary();
                assert_eq!(vocab.num_classes(), 4);
                assert_eq!(vocab.word_at(0), Some(END_OF_SENTENCE));
                assert_eq!(vocab.class_of(0), Some(0));

                let mut buf: Vec<u8> = Vec::new();
                trainer.save_vocabulary(&mut buf).unwrap();
                let loaded: Vocabulary = Vocabulary::load(buf.as_slice(), Some(7)).unwrap();
                assert_eq!(loaded.words(), vocab.words());

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_missing_class_file() {
        let err = TreeVocabOptions::new(2)
            .with_class_file(Some("/nonexistent/classes.txt"))
            .init()
            .unwrap_err();
        assert!(matches!(err, VocabError::Io(_)));
    }
}
