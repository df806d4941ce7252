//! # Corpus Loading
//!
//! Dataset files hold one record per line, UTF-8 encoded, named by language,
//! split, and (for the train split) a training-size variant:
//!
//! ```text
//! {data_dir}/{language}-train-{train_size}
//! {data_dir}/{language}-dev
//! ```
//!
//! [`CorpusSource`] owns the file selection; [`read_records`] parses raw
//! lines from any reader. The first malformed row aborts the whole load;
//! silently dropping rows would corrupt vocabulary statistics downstream.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{errors::InflektResult, record::InflectionRecord};

/// Dataset splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Split {
    /// The training split; file names carry the training-size variant.
    Train,

    /// The development split.
    Dev,
}

/// The default training-size variant.
pub static DEFAULT_TRAIN_SIZE: &str = "high";

/// Corpus source configuration.
///
/// Selects the dataset directory, language, and training-size variant; the
/// core only ever consumes "a list of lines" per split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    /// The dataset directory.
    data_dir: PathBuf,

    /// The language code, e.g. `"german"`.
    language: String,

    /// The training-size variant, e.g. `"low"` / `"medium"` / `"high"`.
    train_size: String,
}

impl CorpusSource {
    /// Create a new corpus source with the default training size.
    ///
    /// ## Arguments
    /// * `data_dir` - The dataset directory.
    /// * `language` - The language code.
    ///
    /// ## Returns
    /// A new `CorpusSource` instance.
    pub fn new<D, L>(
        data_dir: D,
        language: L,
    ) -> Self
    where
        D: Into<PathBuf>,
        L: Into<String>,
    {
        Self {
            data_dir: data_dir.into(),
            language: language.into(),
            train_size: DEFAULT_TRAIN_SIZE.to_string(),
        }
    }

    /// Sets the training-size variant.
    ///
    /// ## Arguments
    /// * `train_size` - The training-size variant.
    ///
    /// ## Returns
    /// The updated `CorpusSource` instance.
    pub fn with_train_size<S: Into<String>>(
        self,
        train_size: S,
    ) -> Self {
        Self {
            train_size: train_size.into(),
            ..self
        }
    }

    /// The dataset directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The training-size variant.
    pub fn train_size(&self) -> &str {
        &self.train_size
    }

    /// Construct a split filename.
    ///
    /// Only the train split carries the training-size suffix.
    pub fn format_split_filename(
        &self,
        split: Split,
    ) -> String {
        match split {
            Split::Train => format!("{}-{split}-{}", self.language, self.train_size),
            _ => format!("{}-{split}", self.language),
        }
    }

    /// Construct a split path.
    pub fn split_path(
        &self,
        split: Split,
    ) -> PathBuf {
        self.data_dir.join(self.format_split_filename(split))
    }

    /// Load all records of one split.
    ///
    /// ## Arguments
    /// * `split` - The split to load.
    ///
    /// ## Returns
    /// A `Result<Vec<InflectionRecord>>`; I/O errors and malformed rows
    /// abort the load.
    pub fn load_split(
        &self,
        split: Split,
    ) -> InflektResult<Vec<InflectionRecord>> {
        let path = self.split_path(split);
        log::info!("loading {split} split: {}", path.display());

        let reader = BufReader::new(File::open(&path)?);
        let records = read_records(reader)?;

        log::info!("loaded {} {split} records", records.len());
        Ok(records)
    }

    /// Load the full corpus: train ∪ dev, in that order.
    ///
    /// ## Returns
    /// A `Result<Vec<InflectionRecord>>` over both splits.
    pub fn load_corpus(&self) -> InflektResult<Vec<InflectionRecord>> {
        let mut records = self.load_split(Split::Train)?;
        records.extend(self.load_split(Split::Dev)?);
        Ok(records)
    }
}

/// Parse records from raw dataset lines.
///
/// Every line must parse; the first malformed row aborts the load with its
/// error, rather than skipping the row.
///
/// ## Arguments
/// * `reader` - A buffered reader over dataset lines.
///
/// ## Returns
/// A `Result<Vec<InflectionRecord>>` of all parsed rows.
pub fn read_records<R: BufRead>(reader: R) -> InflektResult<Vec<InflectionRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        records.push(InflectionRecord::parse_line(&line?)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;
    use std::{fs, io::Cursor};

    use tempdir::TempDir;

    use super::*;
    use crate::errors::InflektError;

    #[test]
    fn test_split_names() {
        assert_eq!(Split::Train.to_string(), "train");
        assert_eq!(Split::Dev.to_string(), "dev");

        assert_eq!(Split::from_str("train").unwrap(), Split::Train);
        assert_eq!(Split::from_str("dev").unwrap(), Split::Dev);
    }

    #[test]
    fn test_corpus_source_filenames() {
        let source = CorpusSource::new("/data", "german");
        assert_eq!(source.train_size(), DEFAULT_TRAIN_SIZE);
        assert_eq!(source.format_split_filename(Split::Train), "german-train-high");
        assert_eq!(source.format_split_filename(Split::Dev), "german-dev");

        let source = source.with_train_size("low");
        assert_eq!(source.format_split_filename(Split::Train), "german-train-low");
        assert_eq!(
            source.split_path(Split::Train),
            PathBuf::from("/data/german-train-low")
        );
    }

    #[test]
    fn test_read_records() {
        let lines = "walk\twalked\tV;PST\ngeben\tgibt\tV;IND;PRS\n";
        let records = read_records(Cursor::new(lines)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].morphed_word(), "walked");
        assert_eq!(records[1].annotated_tags(), "v=V,ind=IND,prs=PRS");
    }

    #[test]
    fn test_read_records_aborts_on_malformed_row() {
        let lines = "walk\twalked\tV;PST\nbroken-line\n";
        let err = read_records(Cursor::new(lines)).unwrap_err();
        assert!(matches!(err, InflektError::MalformedRow { .. }));
    }

    #[test]
    fn test_load_corpus_from_files() -> InflektResult<()> {
        let tmpdir = TempDir::new("inflekt-corpus-test")?;
        let source = CorpusSource::new(tmpdir.path(), "english").with_train_size("low");

        fs::write(
            source.split_path(Split::Train),
            "walk\twalked\tV;PST\ntalk\ttalks\tV;3;SG\n",
        )?;
        fs::write(source.split_path(Split::Dev), "run\tran\tV;PST\n")?;

        let train = source.load_split(Split::Train)?;
        assert_eq!(train.len(), 2);

        let corpus = source.load_corpus()?;
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus[2].root_word(), "run");

        Ok(())
    }

    #[test]
    fn test_load_split_missing_file() {
        let tmpdir = TempDir::new("inflekt-corpus-test").unwrap();
        let source = CorpusSource::new(tmpdir.path(), "english");

        let err = source.load_split(Split::Dev).unwrap_err();
        assert!(matches!(err, InflektError::Io(_)));
    }
}
