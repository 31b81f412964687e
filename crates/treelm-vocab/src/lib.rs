//! # `treelm-vocab` Tree-LM Vocabulary Suite
//!
//! Vocabulary, word-class and dependency-label management for recurrent
//! language models over unrolled dependency trees.
//!
//! See:
//! * [`vocab`] for the word [`Vocabulary`] and its table io.
//! * [`classing`] for external and frequency-balanced word classes.
//! * [`labels`] for dependency label modes and the label vocabulary.
//! * [`training`] to learn a vocabulary from unrolled sentences.
//!
//! ## Lifecycle
//!
//! A [`Vocabulary`] is built in three phases:
//! 1. counting, by repeated [`Vocabulary::add_word`];
//! 2. sorting, by [`Vocabulary::sort_by_frequency`], which puts `</s>` at
//!    index `0` and orders the rest by descending count;
//! 3. classing, by [`Vocabulary::assign_words_to_classes`].
//!
//! ```rust
//! use treelm_vocab::Vocabulary;
//!
//! let mut vocab: Vocabulary = Vocabulary::new();
//! for word in ["the", "dog", "the", "</s>"] {
//!     vocab.add_word(word)?;
//! }
//! vocab.sort_by_frequency()?;
//! vocab.assign_words_to_classes(2)?;
//!
//! assert_eq!(vocab.word_at(0), Some("</s>"));
//! assert_eq!(vocab.search_word("the"), Some(1));
//! assert_eq!(vocab.num_classes(), 2);
//! # Ok::<(), treelm_vocab::VocabError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod classing;
pub mod errors;
pub mod labels;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{ClassFileError, VocabError, VocabResult};
#[doc(inline)]
pub use labels::DependencyLabelMode;
#[doc(inline)]
pub use training::{DepToken, TreeVocabOptions, TreeVocabTrainer};
#[doc(inline)]
pub use vocab::{VocabPhase, VocabWord, Vocabulary};
