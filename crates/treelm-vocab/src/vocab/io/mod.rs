//! # Vocabulary IO
//!
//! ## Saving and Loading A Vocab
//!
//! ```rust,no_run
//! use treelm_vocab::vocab::{
//!     Vocabulary,
//!     io::{load_vocab_table_path, save_vocab_table_path},
//! };
//!
//! fn example(vocab: &Vocabulary) -> treelm_vocab::VocabResult<Vocabulary> {
//!     save_vocab_table_path(vocab, "vocab.txt")?;
//!     load_vocab_table_path("vocab.txt")
//! }
//! ```

mod vocab_table;

#[doc(inline)]
pub use vocab_table::*;
