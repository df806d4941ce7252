use crate::{common::CorpusArgs, logging::LogArgs};

/// Args for the stats command.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    pub corpus: CorpusArgs,

    /// Also print the full (key, values) tag layout.
    #[arg(long)]
    pub layout: bool,
}

impl StatsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.init_logging()?;

        let vocab = self.corpus.build_vocab()?;
        let char_vocab = vocab.char_vocab();
        let tag_vocab = vocab.tag_vocab();

        println!("characters: {}", char_vocab.character_set().len());
        println!("tag characters: {}", char_vocab.tag_character_set().len());
        println!("max word length: {}", char_vocab.max_word_length());
        println!("tag keys: {}", tag_vocab.all_tag_values().len());
        println!("vector length: {}", tag_vocab.vector_length());

        if self.layout {
            for (key, values) in tag_vocab.all_tag_values() {
                let values = values
                    .iter()
                    .map(|value| value.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{key}: {values}");
            }
        }

        Ok(())
    }
}
