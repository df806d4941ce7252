//! # Unified Dataset Vocabulary

use crate::{
    errors::InflektResult,
    record::{InflectionRecord, TagMap},
    types::VectorElement,
    vocab::{CharVocab, TagVocab},
};

/// Unified dataset vocabulary.
///
/// Owns the [`CharVocab`] and [`TagVocab`] built together over one corpus.
/// Built once, frozen afterwards; rebuilding over a different corpus yields a
/// different vector layout, invalidating previously produced vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetVocab {
    /// Character sets and word-length bounds.
    char_vocab: CharVocab,

    /// Tag-value layout and encoding.
    tag_vocab: TagVocab,
}

impl DatasetVocab {
    /// Build a dataset vocabulary from a corpus.
    ///
    /// A pure function of the record multiset; record order does not affect
    /// the result.
    ///
    /// ## Arguments
    /// * `records` - The full corpus (train ∪ dev).
    ///
    /// ## Returns
    /// A `Result<DatasetVocab>`, with [`crate::InflektError::EmptyCorpus`] on
    /// zero records.
    pub fn from_records(records: &[InflectionRecord]) -> InflektResult<Self> {
        Ok(Self {
            char_vocab: CharVocab::from_records(records)?,
            tag_vocab: TagVocab::from_records(records)?,
        })
    }

    /// Get the [`CharVocab`].
    pub fn char_vocab(&self) -> &CharVocab {
        &self.char_vocab
    }

    /// Get the [`TagVocab`].
    pub fn tag_vocab(&self) -> &TagVocab {
        &self.tag_vocab
    }

    /// The fixed width of every encoded tag vector.
    pub fn vector_length(&self) -> usize {
        self.tag_vocab.vector_length()
    }

    /// The maximum char-count over all root/inflected words.
    pub fn max_word_length(&self) -> usize {
        self.char_vocab.max_word_length()
    }

    /// Encode a tag map against the frozen tag-value layout.
    ///
    /// See [`TagVocab::encode`].
    pub fn encode<E: VectorElement>(
        &self,
        tag_map: &TagMap,
    ) -> Vec<E> {
        self.tag_vocab.encode(tag_map)
    }
}
