//! # Vocabulary Table IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{VocabError, VocabResult},
    types::{ClassIndex, CountType},
    vocab::{VocabPhase, VocabWord, Vocabulary},
};

/// Save a classed [`Vocabulary`] to a table file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the table to.
pub fn save_vocab_table_path<C, P>(
    vocab: &Vocabulary<C>,
    path: P,
) -> VocabResult<()>
where
    C: CountType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab_table(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a classed [`Vocabulary`] to a [`Write`] writer.
///
/// Lines are, in index order:
/// ```terminaloutput
/// {INDEX:6}\t{COUNT:10}\t{WORD}\t{CLASS}
/// ```
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
///
/// ## Errors
/// * [`VocabError::OutOfPhase`] unless the vocabulary is classed.
/// * [`VocabError::UnsavableWord`] if a word is empty or contains
///   whitespace; nothing is written.
pub fn write_vocab_table<C, W>(
    vocab: &Vocabulary<C>,
    writer: &mut W,
) -> VocabResult<()>
where
    C: CountType,
    W: Write,
{
    if vocab.phase() != VocabPhase::Classed {
        return Err(VocabError::out_of_phase("save", vocab.phase()));
    }
    if let Some((index, w)) = vocab
        .iter()
        .find(|(_, w)| w.word.is_empty() || w.word.contains(char::is_whitespace))
    {
        return Err(VocabError::UnsavableWord {
            index,
            word: w.word.clone(),
        });
    }

    for (index, w) in vocab.words().iter().enumerate() {
        writeln!(
            writer,
            "{:6}\t{:10}\t{}\t{}",
            index, w.count, w.word, w.class_index
        )?;
    }

    log::info!("Saved {} vocabulary entries", vocab.len());
    Ok(())
}

/// Load a [`Vocabulary`] from a table file.
///
/// ## Arguments
/// * `path` - the path to the table file.
pub fn load_vocab_table_path<C, P>(path: P) -> VocabResult<Vocabulary<C>>
where
    C: CountType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_vocab_table(reader, None)
}

/// Read a [`Vocabulary`] from a table line reader.
///
/// Each non-blank line holds four whitespace-separated fields:
/// index, count, word, class. Rows must appear in index order from `0`.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `expected_len` - the number of rows the table must hold, if known.
///
/// ## Errors
/// * [`VocabError::TableIndexMismatch`] if a row's index is not its position.
/// * [`VocabError::Parse`] on a malformed row or a row-count mismatch.
pub fn read_vocab_table<C, R>(
    reader: R,
    expected_len: Option<usize>,
) -> VocabResult<Vocabulary<C>>
where
    C: CountType,
    R: BufRead,
{
    let mut words: Vec<VocabWord<C>> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let fields = line.split_whitespace().collect::<Vec<&str>>();
        if fields.is_empty() {
            continue;
        }
        let [index, count, word, class] = fields[..] else {
            return Err(VocabError::Parse(format!(
                "expected `index count word class`, found {line:?}"
            )));
        };

        let index: usize = index
            .parse()
            .map_err(|e| VocabError::Parse(format!("bad index {index:?}: {e}")))?;
        if index != words.len() {
            return Err(VocabError::TableIndexMismatch {
                expected: words.len(),
                found: index,
            });
        }
        let count = C::from_str_radix(count, 10)
            .map_err(|_| VocabError::Parse(format!("bad count {count:?}")))?;
        let class: ClassIndex = class
            .parse()
            .map_err(|e| VocabError::Parse(format!("bad class {class:?}: {e}")))?;

        words.push(VocabWord::new(word, count).with_class(class));
    }

    if let Some(expected) = expected_len
        && expected != words.len()
    {
        return Err(VocabError::Parse(format!(
            "expected {expected} vocabulary entries, found {}",
            words.len()
        )));
    }

    let vocab = Vocabulary::from_classed_words(words)?;
    log::info!(
        "Loaded {} vocabulary entries in {} classes",
        vocab.len(),
        vocab.num_classes()
    );
    Ok(vocab)
}

impl<C: CountType> Vocabulary<C> {
    /// Save the vocabulary table; see [`write_vocab_table`].
    pub fn save<W: Write>(
        &self,
        writer: &mut W,
    ) -> VocabResult<()> {
        write_vocab_table(self, writer)
    }

    /// Load a vocabulary table; see [`read_vocab_table`].
    pub fn load<R: BufRead>(
        reader: R,
        expected_len: Option<usize>,
    ) -> VocabResult<Self> {
        read_vocab_table(reader, expected_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classed_vocab() -> Vocabulary<u64> {
        let mut vocab = Vocabulary::new();
        for (word, n) in [("the", 40), ("dog", 12), ("</s>", 9), ("ran", 5), ("far", 2)] {
            for _ in 0..n {
                vocab.add_word(word).unwrap();
            }
        }
        vocab.sort_by_frequency().unwrap();
        vocab.assign_words_to_classes(2).unwrap();
        vocab
    }

    #[test]
    fn test_write_layout() {
        let vocab = classed_vocab();
        let mut buf: Vec<u8> = Vec::new();
        vocab.save(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first, format!("{:6}\t{:10}\t</s>\t0", 0, 9));
        assert_eq!(text.lines().count(), vocab.len());
    }

    #[test]
    fn test_write_requires_classes() {
        let mut vocab: Vocabulary = Vocabulary::new();
        vocab.add_word("</s>").unwrap();
        let mut buf: Vec<u8> = Vec::new();
        assert!(matches!(
            write_vocab_table(&vocab, &mut buf),
            Err(VocabError::OutOfPhase { .. })
        ));
    }

    #[test]
    fn test_write_rejects_unsavable_words() {
        for bad in ["new york", "", "tab\tword"] {
            let mut vocab: Vocabulary = Vocabulary::new();
            for word in ["</s>", "the", "the", bad] {
                vocab.add_word(word).unwrap();
            }
            vocab.sort_by_frequency().unwrap();
            vocab.assign_words_to_classes(1).unwrap();

            let mut buf: Vec<u8> = Vec::new();
            match write_vocab_table(&vocab, &mut buf) {
                Err(VocabError::UnsavableWord { index, word }) => {
                    assert_eq!(index, 2);
                    assert_eq!(word, bad);
                }
                other => panic!("expected UnsavableWord for {bad:?}, got {other:?}"),
            }
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let vocab = classed_vocab();

        tempdir::TempDir::new("vocab_table_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_vocab_table_path(&vocab, &path).expect("failed to save vocab");
                let loaded: Vocabulary<u64> =
                    load_vocab_table_path(&path).expect("failed to load vocab");

                assert_eq!(loaded.words(), vocab.words());
                assert_eq!(loaded.num_classes(), vocab.num_classes());
                for index in 0..loaded.len() {
                    let word = loaded.word_at(index).unwrap();
                    assert_eq!(loaded.search_word(word), Some(index));
                }

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_read_expected_len() {
        let table = "0 3 </s> 0\n1 2 the 0\n";
        assert!(Vocabulary::<u64>::load(table.as_bytes(), Some(2)).is_ok());
        assert!(matches!(
            Vocabulary::<u64>::load(table.as_bytes(), Some(3)),
            Err(VocabError::Parse(_))
        ));
    }

    #[test]
    fn test_read_index_mismatch() {
        let table = "0 3 </s> 0\n2 2 the 0\n";
        assert!(matches!(
            read_vocab_table::<u64, _>(table.as_bytes(), None),
            Err(VocabError::TableIndexMismatch {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_read_malformed_rows() {
        for table in [
            "0 3 </s>\n",
            "0 3 </s> 0 extra\n",
            "x 3 </s> 0\n",
            "0 -3 </s> 0\n",
            "0 3 </s> c\n",
        ] {
            assert!(
                matches!(
                    read_vocab_table::<u32, _>(table.as_bytes(), None),
                    Err(VocabError::Parse(_))
                ),
                "{table:?}"
            );
        }
    }
}
