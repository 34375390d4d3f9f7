use std::io;

use thiserror::Error;

/// Error type for manifest loading and index construction failures.
///
/// Per-query failures (no manifest match, rejected disambiguation, invalid
/// tokens) are never errors; they surface as invalid results.
#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("manifest source '{path}' is unavailable: {reason}")]
    ManifestUnavailable { path: String, reason: String },
    #[error("manifest row {ordinal} is malformed: expected 2 or 4 fields, found {field_count}")]
    MalformedRow { ordinal: u64, field_count: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}
