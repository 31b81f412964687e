use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use treelm_vocab::{
    DepToken,
    DependencyLabelMode,
    TreeVocabOptions,
    TreeVocabTrainer,
    training::DEFAULT_NUM_CLASSES,
};

use crate::{LogArgs, input_output::OutputArgs};

/// Dependency label modes for the build command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelModeArg {
    /// Ignore labels.
    None,

    /// Fuse labels into words as `word:label`.
    Concat,

    /// Keep labels as a separate feature.
    Feature,
}

impl From<LabelModeArg> for DependencyLabelMode {
    fn from(value: LabelModeArg) -> Self {
        match value {
            LabelModeArg::None => DependencyLabelMode::Unused,
            LabelModeArg::Concat => DependencyLabelMode::ConcatenatedToWord,
            LabelModeArg::Feature => DependencyLabelMode::SeparateFeature,
        }
    }
}

/// Args for the build command.
///
/// Input files hold one unrolled sentence per line, as whitespace
/// separated tokens, each optionally `word{delimiter}label`.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Training sentence files.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Validation/test sentence files.
    #[arg(long, num_args = 1..)]
    valid: Vec<PathBuf>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of frequency-balanced word classes.
    #[arg(long, default_value_t = DEFAULT_NUM_CLASSES)]
    num_classes: usize,

    /// External `word class` file; overrides `--num-classes`.
    #[arg(long)]
    class_file: Option<PathBuf>,

    /// Drop words seen fewer times than this.
    #[arg(long, default_value_t = 0)]
    min_word_occurrence: u64,

    /// How dependency labels are encoded.
    #[arg(long, value_enum, default_value_t = LabelModeArg::None)]
    label_mode: LabelModeArg,

    /// Separates a word from its label within a token.
    #[arg(long)]
    label_delimiter: Option<char>,

    #[command(flatten)]
    output: OutputArgs,
}

impl BuildArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut trainer = TreeVocabOptions::new(self.num_classes)
            .with_min_word_occurrence(self.min_word_occurrence)
            .with_label_mode(self.label_mode.into())
            .with_class_file(self.class_file.as_ref())
            .init()?;

        for path in &self.files {
            trainer.add_book_train(path);
        }
        for path in &self.valid {
            trainer.add_book_test_valid(path);
        }

        log::info!("Reading books:");
        let books = trainer.vocabulary_corpus().books().to_vec();
        for (idx, path) in books.iter().enumerate() {
            log::info!("{idx}: {}", path.display());
            self.count_book(&mut trainer, path)?;
        }

        trainer.finish_vocabulary()?;

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        trainer.save_vocabulary(&mut writer)?;
        writer.flush()?;

        Ok(())
    }

    fn count_book(
        &self,
        trainer: &mut TreeVocabTrainer,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            let sentence = parse_sentence(&line, self.label_delimiter);
            if sentence.is_empty() {
                continue;
            }
            trainer.count_sentence(&sentence)?;
        }
        Ok(())
    }
}

fn parse_sentence(
    line: &str,
    delimiter: Option<char>,
) -> Vec<DepToken> {
    line.split_whitespace()
        .map(|token| DepToken::parse(token, delimiter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentence() {
        assert_eq!(
            parse_sentence("the/det dog/nsubj  barks/root", Some('/')),
            vec![
                DepToken::new("the", "det"),
                DepToken::new("dog", "nsubj"),
                DepToken::new("barks", "root"),
            ]
        );
        assert_eq!(
            parse_sentence("the/det dog", None),
            vec![DepToken::unlabeled("the/det"), DepToken::unlabeled("dog")]
        );
        assert!(parse_sentence("   ", Some('/')).is_empty());
    }

    #[test]
    fn test_label_mode_arg() {
        assert_eq!(
            DependencyLabelMode::from(LabelModeArg::Concat),
            DependencyLabelMode::ConcatenatedToWord
        );
        assert_eq!(
            DependencyLabelMode::from(LabelModeArg::Feature),
            DependencyLabelMode::SeparateFeature
        );
        assert_eq!(DependencyLabelMode::from(LabelModeArg::None), DependencyLabelMode::Unused);
    }
}
