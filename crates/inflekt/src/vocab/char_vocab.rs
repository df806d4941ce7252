//! # Character Vocabulary

use crate::{
    errors::{InflektError, InflektResult},
    record::InflectionRecord,
    types::IkHashSet,
    vocab::vocab_types::CharIndexMap,
};

/// Character-level vocabulary over a corpus.
///
/// Holds the sorted character sets of all word forms and annotated tag
/// strings, plus the maximum word length; consumers use these for building
/// input/output alphabets and sizing padded sequence buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct CharVocab {
    /// Sorted set of every char in any root/inflected word.
    character_set: Vec<char>,

    /// Sorted set of every char in any annotated tag string.
    tag_character_set: Vec<char>,

    /// `{ char -> index }` over `tag_character_set`.
    tag_char_index_map: CharIndexMap,

    /// Maximum char-count over all root/inflected words.
    max_word_length: usize,
}

impl CharVocab {
    /// Build a character vocabulary from a corpus.
    ///
    /// The result is sorted, so iteration order of the input records does not
    /// affect the output.
    ///
    /// ## Arguments
    /// * `records` - The full corpus (train ∪ dev).
    ///
    /// ## Returns
    /// A `Result<CharVocab>`, with [`InflektError::EmptyCorpus`] on zero
    /// records.
    pub fn from_records(records: &[InflectionRecord]) -> InflektResult<Self> {
        if records.is_empty() {
            return Err(InflektError::EmptyCorpus);
        }

        let mut character_set = IkHashSet::default();
        let mut tag_character_set = IkHashSet::default();
        let mut max_word_length = 0;

        for record in records {
            for word in record.words() {
                character_set.extend(word.chars());
                max_word_length = max_word_length.max(word.chars().count());
            }
            tag_character_set.extend(record.annotated_tags().chars());
        }

        let mut character_set = character_set.into_iter().collect::<Vec<_>>();
        character_set.sort_unstable();

        let mut tag_character_set = tag_character_set.into_iter().collect::<Vec<_>>();
        tag_character_set.sort_unstable();

        let tag_char_index_map = tag_character_set
            .iter()
            .enumerate()
            .map(|(index, &ch)| (ch, index))
            .collect();

        Ok(Self {
            character_set,
            tag_character_set,
            tag_char_index_map,
            max_word_length,
        })
    }

    /// The sorted set of every char in any root/inflected word.
    pub fn character_set(&self) -> &[char] {
        &self.character_set
    }

    /// The sorted set of every char in any annotated tag string.
    pub fn tag_character_set(&self) -> &[char] {
        &self.tag_character_set
    }

    /// The `{ char -> index }` map over the tag character set.
    pub fn tag_char_index_map(&self) -> &CharIndexMap {
        &self.tag_char_index_map
    }

    /// The maximum char-count over all root/inflected words.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }
}
