use treelm_vocab::{Vocabulary, vocab::io::read_vocab_table};

use crate::{LogArgs, input_output::InputArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    input: InputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of leading entries to print.
    #[arg(long, default_value_t = 10)]
    top: usize,
}

impl InspectArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let reader = self.input.open_reader()?;
        let vocab: Vocabulary = read_vocab_table(reader, None)?;

        for line in summarize(&vocab, self.top) {
            println!("{line}");
        }
        Ok(())
    }
}

fn summarize(
    vocab: &Vocabulary,
    top: usize,
) -> Vec<String> {
    let mut lines = vec![
        format!("words: {}", vocab.len()),
        format!("total count: {}", vocab.total_count()),
        format!("classes: {}", vocab.num_classes()),
    ];
    for class in 0..vocab.num_classes() {
        let size = vocab.class_words(class).map_or(0, <[usize]>::len);
        lines.push(format!("class {class}: {size} words"));
    }
    for (index, entry) in vocab.iter().take(top) {
        lines.push(format!(
            "{:6}\t{:10}\t{}\t{}",
            index, entry.count, entry.word, entry.class_index
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use treelm_vocab::VocabWord;

    use super::*;

    #[test]
    fn test_summarize() {
        let vocab: Vocabulary = Vocabulary::from_classed_words(vec![
            VocabWord::new("</s>", 4).with_class(0),
            VocabWord::new("the", 3).with_class(0),
            VocabWord::new("dog", 1).with_class(1),
        ])
        .unwrap();

        let lines = summarize(&vocab, 1);
        assert_eq!(
            lines,
            vec![
                "words: 3".to_string(),
                "total count: 8".to_string(),
                "classes: 2".to_string(),
                "class 0: 2 words".to_string(),
                "class 1: 1 words".to_string(),
                format!("{:6}\t{:10}\t</s>\t0", 0, 4),
            ]
        );
    }
}
