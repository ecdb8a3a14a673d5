use std::time::Duration;

use thiserror::Error;

use crate::version::types::Branch;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timed out after {:.1}s waiting for package listings", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("Package index returned status {status} for branch {branch}")]
    Status {
        branch: Branch,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Malformed package #{index} in {branch} listing: {source}")]
    MalformedListing {
        branch: Branch,
        index: usize,
        #[source]
        source: RecordError,
    },
}
