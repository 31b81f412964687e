//! # Vocabulary Learning
//!
//! [`TreeVocabTrainer`] counts unrolled dependency sentences into a
//! [`crate::vocab::Vocabulary`] and a [`crate::labels::LabelVocab`], then
//! freezes the vocabulary (prune, sort, class).
//!
//! ## Example
//!
//! ```rust
//! use treelm_vocab::training::{DepToken, TreeVocabOptions};
//! use treelm_vocab::labels::DependencyLabelMode;
//!
//! let mut trainer = TreeVocabOptions::new(1)
//!     .with_label_mode(DependencyLabelMode::SeparateFeature)
//!     .init()?;
//!
//! let sentence = vec![DepToken::new("dogs", "nsubj"), DepToken::new("bark", "root")];
//! trainer.learn_vocabulary([sentence])?;
//!
//! assert_eq!(trainer.vocabulary_size(), 3);
//! assert_eq!(trainer.label_index("root"), Some(1));
//! # Ok::<(), treelm_vocab::VocabError>(())
//! ```

mod book_corpus;
mod dep_token;
mod tree_vocab_trainer;

#[doc(inline)]
pub use book_corpus::BookCorpus;
#[doc(inline)]
pub use dep_token::DepToken;
#[doc(inline)]
pub use tree_vocab_trainer::{DEFAULT_NUM_CLASSES, TreeVocabOptions, TreeVocabTrainer};
