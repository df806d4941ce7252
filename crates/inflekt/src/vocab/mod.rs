//! # Vocabulary
//!
//! This module provides the frozen, corpus-derived vocabularies.
//!
//! ## Character Vocabulary
//!
//! Character sets and word-length bounds for sizing model alphabets and
//! padded sequence buffers are provided by:
//! * [`CharVocab`].
//!
//! ## Tag Vocabulary
//!
//! The `(tag-key, sorted values)` layout that fixes the tag-vector format,
//! and the encoding operation over it, are provided by:
//! * [`TagVocab`].
//!
//! ## Dataset Vocabulary
//!
//! The primary user-oriented vocabulary is [`DatasetVocab`], which contains:
//! * `char_vocab` - a [`CharVocab`] over all word forms,
//! * `tag_vocab` - a [`TagVocab`] over all tag maps.
//!
//! All vocabularies are built exactly once, by a pure function of the record
//! multiset, and are immutable afterwards. Rebuilding over a different corpus
//! yields a different layout, invalidating previously produced vectors.

pub mod char_vocab;
pub mod dataset_vocab;
pub mod tag_vocab;
pub mod vocab_types;

#[doc(inline)]
pub use char_vocab::CharVocab;
#[doc(inline)]
pub use dataset_vocab::DatasetVocab;
#[doc(inline)]
pub use tag_vocab::TagVocab;
#[doc(inline)]
pub use vocab_types::{CharIndexMap, TagIndexMap, TagValueIndexMap, TagValueLayout};
