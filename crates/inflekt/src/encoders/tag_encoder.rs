//! # Tag Vector Encoder

use core::marker::PhantomData;
use std::sync::Arc;

use crate::{
    record::{InflectionRecord, TagMap},
    types::VectorElement,
    vocab::DatasetVocab,
};

/// Fixed-width tag-vector encoder over a frozen [`DatasetVocab`].
///
/// The vocabulary is read-only after construction, so clones of this encoder
/// may encode concurrently from any number of threads without locking.
///
/// # Parameters
/// * `E` - the element type of produced vectors.
#[derive(Debug, Clone)]
pub struct TagVectorEncoder<E = u8>
where
    E: VectorElement,
{
    /// The frozen vocabulary.
    vocab: Arc<DatasetVocab>,

    _marker: PhantomData<E>,
}

impl<E: VectorElement> From<DatasetVocab> for TagVectorEncoder<E> {
    fn from(vocab: DatasetVocab) -> Self {
        Self::new(vocab.into())
    }
}

impl<E: VectorElement> TagVectorEncoder<E> {
    /// Create a new encoder over a frozen vocabulary.
    ///
    /// ## Arguments
    /// * `vocab` - The shared dataset vocabulary.
    ///
    /// ## Returns
    /// A new `TagVectorEncoder` instance.
    pub fn new(vocab: Arc<DatasetVocab>) -> Self {
        Self {
            vocab,
            _marker: PhantomData,
        }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<DatasetVocab> {
        &self.vocab
    }

    /// The fixed width of every produced vector.
    pub fn vector_length(&self) -> usize {
        self.vocab.vector_length()
    }

    /// Encode a tag map into a fixed-length binary vector.
    ///
    /// See [`crate::vocab::TagVocab::encode`].
    pub fn encode(
        &self,
        tag_map: &TagMap,
    ) -> Vec<E> {
        self.vocab.encode(tag_map)
    }

    /// Encode one record's tag map.
    pub fn encode_record(
        &self,
        record: &InflectionRecord,
    ) -> Vec<E> {
        self.encode(record.tag_map())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type E = u8;

    fn records(lines: &[&str]) -> Vec<InflectionRecord> {
        lines
            .iter()
            .map(|line| InflectionRecord::parse_line(line).unwrap())
            .collect()
    }

    #[test]
    fn test_encode_record() {
        let records = records(&["walk\twalked\tV;PST", "talk\ttalks\tV;PRS"]);
        let vocab = DatasetVocab::from_records(&records).unwrap();
        let encoder: TagVectorEncoder<E> = vocab.clone().into();

        assert_eq!(encoder.vector_length(), vocab.vector_length());

        for record in &records {
            let vector = encoder.encode_record(record);
            assert_eq!(vector.len(), encoder.vector_length());
            assert_eq!(vector, vocab.encode::<E>(record.tag_map()));
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let records = records(&["walk\twalked\tV;PST"]);
        let vocab = DatasetVocab::from_records(&records).unwrap();
        let encoder: TagVectorEncoder<E> = vocab.into();

        let expected = encoder.encode_record(&records[0]);

        let handles = (0..4)
            .map(|_| {
                let encoder = encoder.clone();
                let record = records[0].clone();
                std::thread::spawn(move || encoder.encode_record(&record))
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
