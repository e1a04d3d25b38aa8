use std::io;

use thiserror::Error;

/// A destination name that is not in the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown country: {0} (expected one of Sweden, China, Brazil, Australia)")]
pub struct UnknownCountry(pub String);

/// Failures of the persisted slot backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("slot {key} could not be read: {source}")]
    Read { key: String, source: io::Error },
    #[error("slot {key} could not be written: {source}")]
    Write { key: String, source: io::Error },
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    /// JSON has no representation for infinite or NaN numbers.
    #[error("{count} box(es) with a non-finite weight or cost were left out of the saved list")]
    NonFinite { count: usize },
}

/// Raised when text does not name a known option (sort field, order, route...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseOptionError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
