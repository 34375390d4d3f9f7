/// Constants used by the relevance scoring heuristic.
pub mod relevance {
    /// Maximum number of supplied letters left unaccounted for by the best
    /// candidate before the match is rejected as untrustworthy.
    pub const LEFTOVER_LIMIT: usize = 100;
}

/// Constants describing the manifest row contract.
pub mod manifest {
    /// Field delimiter used by delimiter-separated manifest files.
    /// Embedded delimiters cannot be escaped; see the crate README.
    pub const FIELD_DELIMITER: char = ',';
}
