/// Opaque manifest section identifier (often, but not always, numeric).
/// Examples: `10`, `MEZZ-2`
pub type SectionCode = String;
/// Opaque manifest row identifier (often, but not always, numeric).
/// Examples: `1`, `B`
pub type RowCode = String;
/// Raw vendor-supplied label text, unvalidated.
/// Examples: `100 Main`, `Sec 4 Fl 2`
pub type RawLabel = String;
/// Canonical token text extracted from a raw label.
/// Examples: `100`, `AB`
pub type TokenText = String;
