//! Manifest source interfaces and built-in sources.
//!
//! The index never reads a backing store itself; it consumes an
//! already-parsed sequence of field tuples through [`ManifestSource`].
//! Sources are read exactly once, before any query is served.

use crate::errors::NormalizerError;
use crate::manifest::ManifestRow;

/// File-backed manifest source implementation.
pub mod file;

pub use file::FileManifestSource;

/// Index-facing manifest source interface.
pub trait ManifestSource: Send + Sync {
    /// Stable source identifier, used in load diagnostics.
    fn id(&self) -> &str;

    /// Produce every manifest row, in source order.
    ///
    /// A source that cannot be read at all fails here with a fatal error;
    /// there is no per-row recovery.
    fn rows(&self) -> Result<Vec<ManifestRow>, NormalizerError>;
}

/// Manifest source over prebuilt field tuples.
pub struct InMemoryManifestSource {
    id: String,
    rows: Vec<Vec<String>>,
}

impl InMemoryManifestSource {
    /// Create an in-memory source from raw field tuples, ordinals assigned by
    /// position.
    pub fn new(id: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            id: id.into(),
            rows,
        }
    }
}

impl ManifestSource for InMemoryManifestSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn rows(&self) -> Result<Vec<ManifestRow>, NormalizerError> {
        Ok(self
            .rows
            .iter()
            .enumerate()
            .map(|(ordinal, fields)| ManifestRow::new(ordinal as u64, fields.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_rows_keep_order_and_ordinals() {
        let source = InMemoryManifestSource::new(
            "venue",
            vec![
                vec!["1".into(), "100 Main".into()],
                vec!["2".into(), "200 Mezz".into()],
            ],
        );
        let rows = source.rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ordinal, 0);
        assert_eq!(rows[1].ordinal, 1);
        assert_eq!(rows[1].fields[1], "200 Mezz");
    }
}
