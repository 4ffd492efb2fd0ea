//! Local checks run before a panel is allowed to submit.
//!
//! These never parse the document itself: syntax and schema validation
//! belong to the remote service.

use std::path::PathBuf;

use crate::catalog::{SCHEMAS, YEARS};

/// True iff `raw` is a base-10 integer naming a supported year.
pub fn valid_year(raw: &str) -> bool {
    match raw.parse::<i64>() {
        Ok(year) => YEARS.iter().any(|&y| i64::from(y) == year),
        Err(_) => false,
    }
}

/// True iff `raw` is exactly one of the schema identifiers.
pub fn valid_schema(raw: &str) -> bool {
    SCHEMAS.iter().any(|s| s.value == raw)
}

/// True iff at least one file is selected.
pub fn valid_file(files: &[PathBuf]) -> bool {
    !files.is_empty()
}

/// True iff the pasted text is non-empty.
pub fn valid_json(text: &str) -> bool {
    !text.is_empty()
}
