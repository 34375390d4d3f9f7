#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Constants used across validation, indexing, and relevance scoring.
pub mod constants;
/// Normalization engine and query/result types.
pub mod engine;
/// Manifest index construction and candidate lookup.
pub mod index;
/// Manifest row, record, and lookup key types.
pub mod manifest;
/// Batch outcome metrics helpers.
pub mod metrics;
/// Relevance scoring used to disambiguate colliding manifest entries.
pub mod relevance;
/// Manifest source interfaces and built-in sources.
pub mod source;
/// Raw label validation and token extraction.
pub mod token;
/// Shared type aliases.
pub mod types;

mod errors;

pub use engine::{NormalizationQuery, NormalizationResult, Normalizer};
pub use errors::NormalizerError;
pub use index::ManifestIndex;
pub use manifest::{ManifestRecord, ManifestRow, NameKey};
pub use metrics::{validity_summary, ValiditySummary};
pub use relevance::{letter_frequencies, most_relevant};
pub use source::{FileManifestSource, InMemoryManifestSource, ManifestSource};
pub use token::{row_token, section_token, strip_to_letters, Token};
pub use types::{RawLabel, RowCode, SectionCode, TokenText};
