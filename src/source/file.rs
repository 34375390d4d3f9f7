use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::manifest::FIELD_DELIMITER;
use crate::errors::NormalizerError;
use crate::manifest::ManifestRow;
use crate::source::ManifestSource;

/// Manifest source reading a delimiter-separated text file.
///
/// One manifest row per line, fields split on [`FIELD_DELIMITER`]. Field
/// values are plain text; there is no quoting or escaping, so a delimiter
/// embedded in a value cannot be represented. A file that cannot be opened is
/// a fatal configuration error, reported once at load time.
pub struct FileManifestSource {
    id: String,
    path: PathBuf,
}

impl FileManifestSource {
    /// Create a file source with a stable id and a manifest path.
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }

    /// The manifest file path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileManifestSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn rows(&self) -> Result<Vec<ManifestRow>, NormalizerError> {
        debug!(source = %self.id, path = %self.path.display(), "reading manifest file");
        let file = File::open(&self.path).map_err(|err| NormalizerError::ManifestUnavailable {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        })?;
        let reader = BufReader::new(file);

        let mut rows = Vec::new();
        for (ordinal, line) in reader.lines().enumerate() {
            let line = line?;
            let fields = line
                .split(FIELD_DELIMITER)
                .map(str::to_string)
                .collect::<Vec<_>>();
            rows.push(ManifestRow::new(ordinal as u64, fields));
        }
        Ok(rows)
    }
}
