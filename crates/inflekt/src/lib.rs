//! # `inflekt` Morphological Inflection Data Suite
//!
//! This library loads morphological-inflection datasets (root word /
//! inflected word / grammatical tag triples) from flat tab-separated files,
//! derives frozen vocabulary statistics from them, and encodes grammatical
//! tag sets into fixed-length binary vectors for downstream model training.
//!
//! See:
//! * [`record`] to parse raw dataset lines into [`record::InflectionRecord`]s.
//! * [`corpus`] to select and read train/dev split files.
//! * [`vocab`] to build a [`vocab::DatasetVocab`] from a corpus.
//! * [`encoders`] to encode tag maps into fixed-length vectors.
//!
//! The vocabulary is built exactly once over the full corpus (train ∪ dev)
//! and is immutable afterwards; encoding is a pure per-row operation over the
//! frozen vocabulary, so a built vocabulary may be shared freely across
//! threads.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a
//! performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::IkHash{*}`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod encoders;
pub mod errors;
pub mod record;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use corpus::{CorpusSource, Split};
#[doc(inline)]
pub use encoders::TagVectorEncoder;
#[doc(inline)]
pub use errors::{InflektError, InflektResult};
#[doc(inline)]
pub use record::{InflectionRecord, TagMap};
#[doc(inline)]
pub use vocab::{CharVocab, DatasetVocab, TagVocab};
