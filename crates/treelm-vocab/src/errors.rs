//! # Error Types

use crate::vocab::VocabPhase;

/// Problems found while reading an external word-class file.
#[derive(Debug, thiserror::Error)]
pub enum ClassFileError {
    /// The sentence-start token was given an explicit class.
    #[error("<s> should not be in the class file (line {line})")]
    ForbiddenStartToken {
        /// The 1-based line number.
        line: usize,
    },

    /// The end-of-sentence token never received a class.
    #[error("</s> must be present in the class file")]
    MissingEndToken,

    /// The file contained no `word class` pairs.
    #[error("empty class file")]
    Empty,

    /// A line was not a `word class` pair.
    #[error("line {line}: {msg}")]
    Malformed {
        /// The 1-based line number.
        line: usize,

        /// What was wrong with the line.
        msg: String,
    },
}

/// Errors from vocabulary operations.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    /// The operation is not legal in the vocabulary's current phase.
    #[error("{operation} is not allowed while the vocabulary is {phase:?}")]
    OutOfPhase {
        /// The rejected operation.
        operation: &'static str,

        /// The phase the vocabulary was in.
        phase: VocabPhase,
    },

    /// The end-of-sentence token is not in the vocabulary.
    #[error("</s> must be present in the vocabulary")]
    MissingSentinel,

    /// The external class file is malformed.
    #[error("class file: {0}")]
    ClassFile(#[from] ClassFileError),

    /// A vocabulary word has no class in the external class map.
    #[error("word {word:?} has no class in the class file")]
    MissingWordClass {
        /// The unclassed word.
        word: String,
    },

    /// A class received no words.
    #[error("class {class} is empty")]
    EmptyClass {
        /// The empty class id.
        class: usize,
    },

    /// An argument is out of range.
    #[error("invalid argument {arg}: {msg}")]
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,

        /// Error message.
        msg: String,
    },

    /// A vocabulary table row declares an index that differs from its position.
    #[error("vocabulary table index mismatch: expected {expected}, found {found}")]
    TableIndexMismatch {
        /// The row position.
        expected: usize,

        /// The declared index.
        found: usize,
    },

    /// A word cannot be written as a single vocabulary table field.
    #[error("word {word:?} at index {index} is empty or contains whitespace")]
    UnsavableWord {
        /// The word's index.
        index: usize,

        /// The offending word.
        word: String,
    },

    /// Parse error (integer, missing field, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl VocabError {
    pub(crate) fn out_of_phase(
        operation: &'static str,
        phase: VocabPhase,
    ) -> Self {
        Self::OutOfPhase { operation, phase }
    }

    pub(crate) fn invalid_argument<S: Into<String>>(
        arg: &'static str,
        msg: S,
    ) -> Self {
        Self::InvalidArgument {
            arg,
            msg: msg.into(),
        }
    }
}

/// Result type for vocabulary operations.
pub type VocabResult<T> = core::result::Result<T, VocabError>;
