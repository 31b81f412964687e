//! # Vocabulary
//!
//! This module provides the word vocabulary and its table io.
//!
//! The primary type is [`Vocabulary`], which contains:
//! * the [`VocabWord`] entries, whose positions are the word indices;
//! * the ``{ word -> index }`` lookup map;
//! * the optional external ``{ word -> class }`` map;
//! * the ``{ class -> [index] }`` grouping used by hierarchical softmax.
pub mod io;

mod vocab_word;
mod vocabulary;

#[doc(inline)]
pub use vocab_word::VocabWord;
#[doc(inline)]
pub use vocabulary::{VocabPhase, Vocabulary};
