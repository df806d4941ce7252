use inflekt::{InflectionRecord, TagVectorEncoder};

use crate::{common::CorpusArgs, logging::LogArgs};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    pub corpus: CorpusArgs,

    /// Raw semicolon-delimited tag string, e.g. "V;IND;PRS".
    #[arg(long)]
    pub tags: String,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.init_logging()?;

        let vocab = self.corpus.build_vocab()?;
        let encoder: TagVectorEncoder = vocab.into();

        let annotated = InflectionRecord::annotate_raw_tags(&self.tags)?;
        let tag_map = InflectionRecord::parse_tag_map(&annotated)?;
        log::debug!("annotated tags: {annotated}");

        let vector = encoder
            .encode(&tag_map)
            .iter()
            .map(|slot| slot.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{vector}");

        Ok(())
    }
}
