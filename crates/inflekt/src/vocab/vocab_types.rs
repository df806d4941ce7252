//! # Vocabulary Types

use compact_str::CompactString;

use crate::types::IkHashMap;

/// `[(key, sorted values)]` layout, sorted lexicographically on key.
///
/// This two-level sort order is the contract that fixes the tag-vector
/// layout; it must not drift between builds over the same corpus.
///
/// ## Style Hints
/// Instance names should prefer `all_tag_values`.
pub type TagValueLayout = Vec<(CompactString, Vec<CompactString>)>;

/// `{ key -> usize }` map.
///
/// ## Style Hints
/// Instance names should prefer `tag_index_map`.
pub type TagIndexMap = IkHashMap<CompactString, usize>;

/// `{ key -> { value -> usize } }` map.
///
/// ## Style Hints
/// Instance names should prefer `tag_value_index_map`.
pub type TagValueIndexMap = IkHashMap<CompactString, TagIndexMap>;

/// `{ char -> usize }` map.
///
/// ## Style Hints
/// Instance names should prefer `char_index_map`, or `tag_char_index_map`.
pub type CharIndexMap = IkHashMap<char, usize>;
