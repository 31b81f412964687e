//! # Dependency Label Modes

use std::{borrow::Cow, str::FromStr};

use crate::errors::VocabError;

/// Joins a word and its label in [`DependencyLabelMode::ConcatenatedToWord`].
pub const LABEL_SEPARATOR: &str = ":";

/// How the trainer encodes a token's dependency label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DependencyLabelMode {
    /// Labels are ignored.
    #[default]
    Unused = 0,

    /// Labels are fused into the word token before vocabulary lookup.
    ConcatenatedToWord = 1,

    /// Labels are a separate feature in the per-step feature vector.
    SeparateFeature = 2,
}

impl DependencyLabelMode {
    /// The vocabulary key for a word carrying `label`.
    ///
    /// Only [`DependencyLabelMode::ConcatenatedToWord`] changes the word,
    /// and only when the label is non-empty.
    pub fn word_key<'a>(
        &self,
        word: &'a str,
        label: &str,
    ) -> Cow<'a, str> {
        match self {
            Self::ConcatenatedToWord if !label.is_empty() => {
                Cow::Owned(format!("{word}{LABEL_SEPARATOR}{label}"))
            }
            _ => Cow::Borrowed(word),
        }
    }

    /// Whether labels are collected into the label vocabulary.
    pub fn uses_labels(&self) -> bool {
        *self != Self::Unused
    }

    /// Whether labels feed the feature-label slot of the recurrent state.
    pub fn uses_label_feature(&self) -> bool {
        *self == Self::SeparateFeature
    }
}

impl TryFrom<u8> for DependencyLabelMode {
    type Error = VocabError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unused),
            1 => Ok(Self::ConcatenatedToWord),
            2 => Ok(Self::SeparateFeature),
            _ => Err(VocabError::invalid_argument(
                "label_mode",
                format!("unknown dependency label mode {value}"),
            )),
        }
    }
}

impl FromStr for DependencyLabelMode {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "none" => Ok(Self::Unused),
            "1" | "concat" => Ok(Self::ConcatenatedToWord),
            "2" | "feature" => Ok(Self::SeparateFeature),
            _ => Err(VocabError::invalid_argument(
                "label_mode",
                format!("unknown dependency label mode {s:?}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_key() {
        assert_eq!(DependencyLabelMode::Unused.word_key("dog", "nsubj"), "dog");
        assert_eq!(
            DependencyLabelMode::ConcatenatedToWord.word_key("dog", "nsubj"),
            "dog:nsubj"
        );
        assert_eq!(
            DependencyLabelMode::ConcatenatedToWord.word_key("</s>", ""),
            "</s>"
        );
        assert_eq!(
            DependencyLabelMode::SeparateFeature.word_key("dog", "nsubj"),
            "dog"
        );
    }

    #[test]
    fn test_mode_codes() {
        for (code, mode) in [
            (0u8, DependencyLabelMode::Unused),
            (1, DependencyLabelMode::ConcatenatedToWord),
            (2, DependencyLabelMode::SeparateFeature),
        ] {
            assert_eq!(DependencyLabelMode::try_from(code).unwrap(), mode);
            assert_eq!(mode as u8, code);
            assert_eq!(code.to_string().parse::<DependencyLabelMode>().unwrap(), mode);
        }
        assert!(DependencyLabelMode::try_from(3).is_err());
        assert_eq!(
            "feature".parse::<DependencyLabelMode>().unwrap(),
            DependencyLabelMode::SeparateFeature
        );
        assert!("bogus".parse::<DependencyLabelMode>().is_err());
        assert_eq!(DependencyLabelMode::default(), DependencyLabelMode::Unused);
    }

    #[test]
    fn test_mode_flags() {
        assert!(!DependencyLabelMode::Unused.uses_labels());
        assert!(DependencyLabelMode::ConcatenatedToWord.uses_labels());
        assert!(!DependencyLabelMode::ConcatenatedToWord.uses_label_feature());
        assert!(DependencyLabelMode::SeparateFeature.uses_label_feature());
    }
}
