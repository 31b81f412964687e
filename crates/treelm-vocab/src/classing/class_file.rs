//! # External Class File IO

use std::{
    collections::BTreeSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{ClassFileError, VocabResult},
    types::{ClassIndex, END_OF_SENTENCE, START_OF_SENTENCE, VocabHashMap},
};

/// A `word -> class` map read from an external class file.
///
/// The class ids are the file's own, arbitrary numbering; they are
/// made dense by [`super::contiguous_class_ids`] once the vocabulary is
/// sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalClasses {
    word_classes: VocabHashMap<String, ClassIndex>,
    classes: BTreeSet<ClassIndex>,
}

impl ExternalClasses {
    /// Get the external class of a word, if any.
    pub fn class_of(
        &self,
        word: &str,
    ) -> Option<ClassIndex> {
        self.word_classes.get(word).copied()
    }

    /// The set of distinct class ids.
    pub fn classes(&self) -> &BTreeSet<ClassIndex> {
        &self.classes
    }

    /// The number of distinct class ids.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// The largest class id.
    pub fn max_class(&self) -> Option<ClassIndex> {
        self.classes.last().copied()
    }

    /// The number of classified words.
    pub fn len(&self) -> usize {
        self.word_classes.len()
    }

    /// Check if no word is classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over ``(word, class)`` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ClassIndex)> {
        self.word_classes.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

/// Load [`ExternalClasses`] from a class file.
///
/// Lines are:
/// ```terminaloutput
/// {WORD} {CLASS}
/// ```
///
/// ## Arguments
/// * `path` - the path to the class file.
pub fn load_classes_path<P: AsRef<Path>>(path: P) -> VocabResult<ExternalClasses> {
    let reader = BufReader::new(File::open(path)?);
    read_classes(reader)
}

/// Read [`ExternalClasses`] from a line reader.
///
/// After reading, the class of `</s>` and the largest class id seen on any
/// line are swapped for every word holding either of them, so `</s>`
/// always owns the highest class.
///
/// ## Arguments
/// * `reader` - the line reader.
///
/// ## Errors
/// * [`ClassFileError::ForbiddenStartToken`] if `<s>` is classified.
/// * [`ClassFileError::Empty`] if there are no pairs.
/// * [`ClassFileError::MissingEndToken`] if `</s>` is not classified.
/// * [`ClassFileError::Malformed`] if a line is not a `word class` pair.
pub fn read_classes<R: BufRead>(reader: R) -> VocabResult<ExternalClasses> {
    let mut word_classes: VocabHashMap<String, ClassIndex> = VocabHashMap::default();
    // Over every line read, including ones later overridden for the same word.
    let mut max_class: Option<ClassIndex> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        let class = match (fields.next(), fields.next()) {
            (Some(class), None) => class,
            _ => {
                return Err(ClassFileError::Malformed {
                    line: line_no,
                    msg: "expected `word class`".to_string(),
                }
                .into());
            }
        };
        let class: ClassIndex = class.parse().map_err(|e| ClassFileError::Malformed {
            line: line_no,
            msg: format!("bad class id {class:?}: {e}"),
        })?;

        if word == START_OF_SENTENCE {
            return Err(ClassFileError::ForbiddenStartToken { line: line_no }.into());
        }

        max_class = max_class.max(Some(class));
        word_classes.insert(word.to_string(), class);
    }

    if word_classes.is_empty() {
        return Err(ClassFileError::Empty.into());
    }
    let Some(&eos_class) = word_classes.get(END_OF_SENTENCE) else {
        return Err(ClassFileError::MissingEndToken.into());
    };
    let max_class = max_class.unwrap_or(eos_class);

    for class in word_classes.values_mut() {
        if *class == eos_class {
            *class = max_class;
        } else if *class == max_class {
            *class = eos_class;
        }
    }

    let classes: BTreeSet<ClassIndex> = word_classes.values().copied().collect();
    log::info!(
        "Read {} classified words in {} classes",
        word_classes.len(),
        classes.len()
    );

    Ok(ExternalClasses {
        word_classes,
        classes,
    })
}
