//! Entitlement source adapter: read the CSV export into domain records.
//!
//! This crate is allowed to do filesystem IO. It does not decide anything; malformed rows are
//! reported as errors with their row number so the caller can abort the run.

#![forbid(unsafe_code)]

mod parse;

use camino::{Utf8Path, Utf8PathBuf};
pub use parse::{REQUIRED_COLUMNS, SourceTable, parse_entitlements};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("row {row}: `{column}` must be {expected}, got {value:?}")]
    InvalidField {
        row: u64,
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Read the header and every record from a CSV file. Fails on the first malformed row.
pub fn read_entitlements(path: &Utf8Path) -> Result<SourceTable, SourceError> {
    let file = std::fs::File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_entitlements(std::io::BufReader::new(file))
}
