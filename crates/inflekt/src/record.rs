//! # Dataset Rows
//!
//! One row of a morphological-inflection dataset is a tab-separated triple of
//! root word, inflected word, and a semicolon-delimited grammatical tag
//! string:
//!
//! ```text
//! walk<TAB>walked<TAB>V;PST
//! ```
//!
//! [`InflectionRecord::parse_line`] turns one raw line into an immutable
//! record, annotating the raw tag string into `key=value` form and parsing it
//! into a [`TagMap`].

use core::fmt;

use compact_str::CompactString;

use crate::{
    errors::{InflektError, InflektResult},
    types::IkHashMap,
};

/// `{ tag-key -> tag-value }` map for one record.
///
/// ## Style Hints
/// Instance names should prefer `tag_map`.
pub type TagMap = IkHashMap<CompactString, CompactString>;

/// One training/dev example.
///
/// Records are constructed once by [`InflectionRecord::parse_line`] and are
/// immutable thereafter; all fields are reachable through accessors only.
#[derive(Debug, Clone, PartialEq)]
pub struct InflectionRecord {
    /// The lemma/base form.
    root_word: String,

    /// The inflected surface form.
    morphed_word: String,

    /// The raw semicolon-delimited tag string, as read from input.
    raw_tags: String,

    /// The derived comma-delimited `key=value` tag string.
    annotated_tags: String,

    /// The parsed tag map.
    tag_map: TagMap,
}

impl InflectionRecord {
    /// Parse one raw dataset line into a record.
    ///
    /// The line is trimmed, then split on tab characters; it must contain at
    /// least three fields (root word, inflected word, raw tag string).
    /// Trailing fields are ignored.
    ///
    /// ## Arguments
    /// * `line` - The raw input line.
    ///
    /// ## Returns
    /// A `Result<InflectionRecord>`, with [`InflektError::MalformedRow`] on
    /// too few fields, an empty tag string, or a malformed tag token.
    pub fn parse_line(line: &str) -> InflektResult<Self> {
        let line = line.trim();
        let mut fields = line.split('\t');

        let (Some(root_word), Some(morphed_word), Some(raw_tags)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(InflektError::malformed_row(
                line,
                "expected at least 3 tab-separated fields",
            ));
        };

        let annotated_tags = Self::annotate_raw_tags(raw_tags)?;
        let tag_map = Self::parse_tag_map(&annotated_tags)?;

        Ok(Self {
            root_word: root_word.to_string(),
            morphed_word: morphed_word.to_string(),
            raw_tags: raw_tags.to_string(),
            annotated_tags,
            tag_map,
        })
    }

    /// Annotate a raw semicolon-delimited tag string into `key=value` form.
    ///
    /// Each `;`-delimited token becomes `lowercase(token)=token`; tokens are
    /// joined with `,`. Tokens are assumed to be bare values containing no
    /// `=` or `,` of their own; a token violating that surfaces as a
    /// malformed-pair error when the annotated string is parsed back.
    ///
    /// ## Arguments
    /// * `raw_tags` - The raw tag string, e.g. `"V;IND;PRS"`.
    ///
    /// ## Returns
    /// The annotated tag string, e.g. `"v=V,ind=IND,prs=PRS"`; or
    /// [`InflektError::MalformedRow`] if the raw tag string is empty.
    pub fn annotate_raw_tags(raw_tags: &str) -> InflektResult<String> {
        if raw_tags.is_empty() {
            return Err(InflektError::malformed_row(raw_tags, "empty tag string"));
        }

        let annotated = raw_tags
            .split(';')
            .map(|tag| format!("{}={tag}", tag.to_lowercase()))
            .collect::<Vec<_>>()
            .join(",");

        Ok(annotated)
    }

    /// Parse an annotated `key=value` tag string into a [`TagMap`].
    ///
    /// Duplicate keys resolve last-token-wins, in insertion order.
    ///
    /// ## Arguments
    /// * `annotated_tags` - A comma-delimited `key=value` string.
    ///
    /// ## Returns
    /// A `Result<TagMap>`, with [`InflektError::MalformedRow`] for any token
    /// lacking exactly one `=`.
    pub fn parse_tag_map(annotated_tags: &str) -> InflektResult<TagMap> {
        let mut tag_map = TagMap::default();

        for pair in annotated_tags.split(',') {
            let parts = pair.split('=').collect::<Vec<_>>();
            let [key, value] = parts.as_slice() else {
                return Err(InflektError::malformed_row(
                    annotated_tags,
                    format!("tag token {pair:?} must have exactly one '='"),
                ));
            };

            tag_map.insert(CompactString::from(*key), CompactString::from(*value));
        }

        Ok(tag_map)
    }

    /// The lemma/base form.
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// The inflected surface form.
    pub fn morphed_word(&self) -> &str {
        &self.morphed_word
    }

    /// The raw semicolon-delimited tag string.
    pub fn raw_tags(&self) -> &str {
        &self.raw_tags
    }

    /// The derived comma-delimited `key=value` tag string.
    pub fn annotated_tags(&self) -> &str {
        &self.annotated_tags
    }

    /// The parsed tag map.
    pub fn tag_map(&self) -> &TagMap {
        &self.tag_map
    }

    /// Both word forms, root first.
    pub fn words(&self) -> [&str; 2] {
        [&self.root_word, &self.morphed_word]
    }
}

impl fmt::Display for InflectionRecord {
    /// Renders the record as its tab-joined input line.
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.root_word, self.morphed_word, self.raw_tags
        )
    }
}
