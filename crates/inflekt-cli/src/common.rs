use inflekt::{CorpusSource, DatasetVocab, InflektResult};

/// Corpus selection arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Dataset directory.
    #[arg(long)]
    data_dir: String,

    /// Language code, e.g. "german".
    #[arg(long)]
    language: String,

    /// Training-size variant of the train file.
    #[arg(long, default_value = inflekt::corpus::DEFAULT_TRAIN_SIZE)]
    train_size: String,
}

impl CorpusArgs {
    /// Build the corpus source.
    pub fn to_source(&self) -> CorpusSource {
        CorpusSource::new(self.data_dir.clone(), self.language.clone())
            .with_train_size(self.train_size.clone())
    }

    /// Load the full corpus and build the vocabulary over it.
    pub fn build_vocab(&self) -> InflektResult<DatasetVocab> {
        let records = self.to_source().load_corpus()?;
        log::info!("building vocabulary over {} records", records.len());
        DatasetVocab::from_records(&records)
    }
}
