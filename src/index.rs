//! Manifest index construction and candidate lookup.

use indexmap::IndexMap;
use tracing::debug;

use crate::errors::NormalizerError;
use crate::manifest::{ManifestRecord, ManifestRow, NameKey};
use crate::source::ManifestSource;

/// Build-once mapping from a [`NameKey`] to the manifest records sharing it.
///
/// Duplicate keys accumulate candidates in row-read order rather than
/// overwriting; disambiguation among them happens at query time. The index is
/// never mutated after construction, so it is safe to share read-only across
/// threads.
#[derive(Clone, Debug, Default)]
pub struct ManifestIndex {
    entries: IndexMap<NameKey, Vec<ManifestRecord>>,
}

impl ManifestIndex {
    /// Build an index from an already-parsed sequence of manifest rows.
    ///
    /// A row with a field count other than 2 or 4 fails the WHOLE build; a
    /// partially indexed manifest is never returned.
    pub fn from_rows<I>(rows: I) -> Result<Self, NormalizerError>
    where
        I: IntoIterator<Item = ManifestRow>,
    {
        let mut entries: IndexMap<NameKey, Vec<ManifestRecord>> = IndexMap::new();
        let mut total = 0u64;
        for row in rows {
            let record = ManifestRecord::from_row(&row)?;
            entries.entry(record.key()).or_default().push(record);
            total += 1;
        }
        debug!(rows = total, keys = entries.len(), "manifest index built");
        Ok(Self { entries })
    }

    /// Pull all rows from a manifest source and build the index.
    ///
    /// Source unavailability surfaces as the source's fatal error; it is
    /// reported once here, at load time.
    pub fn load(source: &dyn ManifestSource) -> Result<Self, NormalizerError> {
        let rows = source.rows()?;
        debug!(source = source.id(), rows = rows.len(), "manifest rows read");
        Self::from_rows(rows)
    }

    /// Candidates indexed under `key`, in row-read order. `None` on a miss;
    /// a returned slice is never empty.
    pub fn candidates(&self, key: &NameKey) -> Option<&[ManifestRecord]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &NameKey> {
        self.entries.keys()
    }
}
