//! # Dependency Tokens

/// One node of an unrolled dependency tree: a word and its relation label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepToken {
    /// The word.
    pub word: String,

    /// The dependency label; empty when the token is unlabeled.
    pub label: String,
}

impl DepToken {
    /// Create a labeled token.
    pub fn new<W, L>(
        word: W,
        label: L,
    ) -> Self
    where
        W: Into<String>,
        L: Into<String>,
    {
        Self {
            word: word.into(),
            label: label.into(),
        }
    }

    /// Create a token with no label.
    pub fn unlabeled<W: Into<String>>(word: W) -> Self {
        Self::new(word, String::new())
    }

    /// Split ``word{delimiter}label`` at the last delimiter.
    ///
    /// Without a delimiter, or when either side would be empty, the whole
    /// text is the word.
    pub fn parse(
        text: &str,
        delimiter: Option<char>,
    ) -> Self {
        match delimiter.and_then(|d| text.rsplit_once(d)) {
            Some((word, label)) if !word.is_empty() && !label.is_empty() => {
                Self::new(word, label)
            }
            _ => Self::unlabeled(text),
        }
    }
}
