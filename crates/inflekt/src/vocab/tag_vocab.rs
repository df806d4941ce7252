//! # Tag Vocabulary
//!
//! [`TagVocab`] freezes the `(tag-key, sorted values)` layout observed over a
//! corpus, and encodes any tag map into a fixed-length binary vector in that
//! layout. Each key owns a contiguous block of slots, one per observed value;
//! a tag map lights at most one slot per block.

use compact_str::CompactString;

use crate::{
    errors::{InflektError, InflektResult},
    record::{InflectionRecord, TagMap},
    types::{IkHashMap, IkHashSet, VectorElement},
    vocab::vocab_types::{TagIndexMap, TagValueIndexMap, TagValueLayout},
};

/// Tag-value vocabulary and vector layout over a corpus.
///
/// The layout is sorted lexicographically on key, then lexicographically on
/// value within each key. That two-level sort is a versioned format contract:
/// changing it silently changes the meaning of every produced vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TagVocab {
    /// The frozen `(key, sorted values)` layout.
    all_tag_values: TagValueLayout,

    /// `{ key -> layout position }`; inspection/debugging only.
    tag_index_map: TagIndexMap,

    /// `{ key -> { value -> in-block position } }`; inspection/debugging only.
    tag_value_index_map: TagValueIndexMap,

    /// The fixed width of every encoded tag vector.
    vector_length: usize,
}

impl TagVocab {
    /// Build a tag vocabulary from a corpus.
    ///
    /// A pure function of the record multiset: record order does not affect
    /// the result, and building twice over the same corpus yields identical
    /// layouts.
    ///
    /// ## Arguments
    /// * `records` - The full corpus (train ∪ dev).
    ///
    /// ## Returns
    /// A `Result<TagVocab>`, with [`InflektError::EmptyCorpus`] on zero
    /// records.
    pub fn from_records(records: &[InflectionRecord]) -> InflektResult<Self> {
        if records.is_empty() {
            return Err(InflektError::EmptyCorpus);
        }

        let mut value_sets: IkHashMap<CompactString, IkHashSet<CompactString>> =
            IkHashMap::default();
        for record in records {
            for (key, value) in record.tag_map() {
                value_sets.entry(key.clone()).or_default().insert(value.clone());
            }
        }

        let mut all_tag_values = value_sets
            .into_iter()
            .map(|(key, values)| {
                let mut values = values.into_iter().collect::<Vec<_>>();
                values.sort_unstable();
                (key, values)
            })
            .collect::<TagValueLayout>();
        all_tag_values.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        Ok(Self::from_layout(all_tag_values))
    }

    /// Derive the index maps and vector length from a sorted layout.
    fn from_layout(all_tag_values: TagValueLayout) -> Self {
        let tag_index_map = all_tag_values
            .iter()
            .enumerate()
            .map(|(index, (key, _))| (key.clone(), index))
            .collect();

        let tag_value_index_map = all_tag_values
            .iter()
            .map(|(key, values)| {
                let value_index_map = values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (value.clone(), index))
                    .collect::<TagIndexMap>();
                (key.clone(), value_index_map)
            })
            .collect();

        let vector_length = all_tag_values.iter().map(|(_, values)| values.len()).sum();

        Self {
            all_tag_values,
            tag_index_map,
            tag_value_index_map,
            vector_length,
        }
    }

    /// Encode a tag map into a fixed-length binary vector.
    ///
    /// Slots follow the frozen `(key, sorted values)` layout; a slot is one
    /// iff the tag map holds exactly that value for that key. An absent key
    /// and a key held with an unseen value both contribute zeros; encoding is
    /// total over any input map.
    ///
    /// ## Arguments
    /// * `tag_map` - Any `{ key -> value }` mapping; it need not come from a
    ///   record seen during the build.
    ///
    /// ## Returns
    /// A vector of exactly [`Self::vector_length`] zeros and ones.
    pub fn encode<E: VectorElement>(
        &self,
        tag_map: &TagMap,
    ) -> Vec<E> {
        let mut vector = Vec::with_capacity(self.vector_length);

        for (key, values) in &self.all_tag_values {
            let held = tag_map.get(key);
            for value in values {
                let slot = match held {
                    Some(held_value) => held_value == value,
                    None => false,
                };
                vector.push(if slot { E::one() } else { E::zero() });
            }
        }

        vector
    }

    /// Iterate all `(key, value)` slots in frozen layout order.
    pub fn iter_slots(&self) -> impl Iterator<Item = (&str, &str)> {
        self.all_tag_values.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// The frozen `(key, sorted values)` layout.
    pub fn all_tag_values(&self) -> &TagValueLayout {
        &self.all_tag_values
    }

    /// The `{ key -> layout position }` map.
    pub fn tag_index_map(&self) -> &TagIndexMap {
        &self.tag_index_map
    }

    /// The `{ key -> { value -> in-block position } }` map.
    pub fn tag_value_index_map(&self) -> &TagValueIndexMap {
        &self.tag_value_index_map
    }

    /// The fixed width of every encoded tag vector.
    pub fn vector_length(&self) -> usize {
        self.vector_length
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

    fn tag_map(annotated_tags: &str) -> TagMap {
        InflectionRecord::parse_tag_map(annotated_tags).unwrap()
    }

    #[test]
    fn test_layout_and_vector_length() {
        // Tag maps: {pos: POS, sg: SG} and {pos: POS, pl: PL}.
        let vocab = TagVocab::from_records(&records(&[
            "walk\twalks\tPOS;SG",
            "walk\twalk\tPOS;PL",
        ]))
        .unwrap();

        // Keys sorted lexicographically; values sorted within each key.
        let expected: TagValueLayout = vec![
            ("pl".into(), vec!["PL".into()]),
            ("pos".into(), vec!["POS".into()]),
            ("sg".into(), vec!["SG".into()]),
        ];
        assert_eq!(vocab.all_tag_values(), &expected);
        assert_eq!(vocab.vector_length(), 3);

        assert_eq!(
            vocab.vector_length(),
            vocab
                .all_tag_values()
                .iter()
                .map(|(_, values)| values.len())
                .sum::<usize>()
        );
    }

    #[test]
    fn test_encode_worked_example() {
        // Corpus tag maps {pos: V, num: SG} / {pos: V, num: PL} freeze to
        // [(num, [PL, SG]), (pos, [V])]: num=PL at 0, num=SG at 1, pos=V at 2.
        let vocab = TagVocab::from_layout(vec![
            ("num".into(), vec!["PL".into(), "SG".into()]),
            ("pos".into(), vec!["V".into()]),
        ]);

        assert_eq!(vocab.vector_length(), 3);
        assert_eq!(vocab.encode::<E>(&tag_map("pos=V,num=PL")), vec![1, 0, 1]);
        assert_eq!(vocab.encode::<E>(&tag_map("pos=V,num=SG")), vec![0, 1, 1]);
    }

    #[test]
    fn test_encode_length_and_one_hot_blocks() {
        let vocab = TagVocab::from_records(&records(&[
            "geben\tgibt\tV;IND;PRS",
            "geben\tgab\tV;IND;PST",
            "sehen\tsah\tV;SBJV;PST",
        ]))
        .unwrap();

        // Keys: ind, prs, pst, sbjv, v; every key holds a single value.
        assert_eq!(vocab.vector_length(), 5);

        let vector = vocab.encode::<E>(records(&["geben\tgab\tV;IND;PST"])[0].tag_map());
        assert_eq!(vector, vec![1, 0, 1, 0, 1]);
        assert_eq!(vector.len(), vocab.vector_length());
        assert_eq!(vector.iter().filter(|&&slot| slot == 1).count(), 3);

        // Each key block holds at most one hot slot.
        let mut offset = 0;
        for (_, values) in vocab.all_tag_values() {
            let block = &vector[offset..offset + values.len()];
            assert!(block.iter().filter(|&&slot| slot == 1).count() <= 1);
            offset += values.len();
        }
        assert_eq!(offset, vocab.vector_length());
    }

    #[test]
    fn test_encode_is_total_and_idempotent() {
        let vocab = TagVocab::from_records(&records(&["walk\twalked\tV;PST"])).unwrap();

        // Unseen keys and unseen values both degrade to all-zero.
        let unseen = tag_map("unseen_key=x");
        assert_eq!(vocab.encode::<E>(&unseen), vec![0; vocab.vector_length()]);

        let unseen_value = tag_map("v=NOUN");
        assert_eq!(
            vocab.encode::<E>(&unseen_value),
            vec![0; vocab.vector_length()]
        );

        let seen = tag_map("v=V,pst=PST");
        assert_eq!(vocab.encode::<E>(&seen), vocab.encode::<E>(&seen));
        assert_eq!(vocab.encode::<E>(&seen), vec![1, 1]);
    }

    #[test]
    fn test_build_order_independence() {
        let mut rows = records(&[
            "geben\tgibt\tV;IND;PRS",
            "geben\tgab\tV;IND;PST",
            "sehen\tsah\tV;SBJV;PST",
        ]);
        let vocab = TagVocab::from_records(&rows).unwrap();

        rows.reverse();
        let reversed = TagVocab::from_records(&rows).unwrap();

        assert_eq!(reversed, vocab);
        assert_eq!(reversed.all_tag_values(), vocab.all_tag_values());
    }

    #[test]
    fn test_index_maps() {
        let vocab = TagVocab::from_layout(vec![
            ("num".into(), vec!["PL".into(), "SG".into()]),
            ("pos".into(), vec!["V".into()]),
        ]);

        assert_eq!(vocab.tag_index_map().get("num"), Some(&0));
        assert_eq!(vocab.tag_index_map().get("pos"), Some(&1));

        let num_values = vocab.tag_value_index_map().get("num").unwrap();
        assert_eq!(num_values.get("PL"), Some(&0));
        assert_eq!(num_values.get("SG"), Some(&1));

        assert_eq!(
            vocab.iter_slots().collect::<Vec<_>>(),
            vec![("num", "PL"), ("num", "SG"), ("pos", "V")]
        );
    }

    #[test]
    fn test_empty_corpus() {
        let err = TagVocab::from_records(&[]).unwrap_err();
        assert!(matches!(err, InflektError::EmptyCorpus));
    }
}
