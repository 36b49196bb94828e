use std::io;

use thiserror::Error;

/// Fatal failure categories for a report run.
///
/// Every variant aborts the run: no partial report is written and nothing is
/// retried. Absent optional fields in violation payloads are not errors and
/// never surface here.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("authentication failed for user '{user}': {reason}")]
    Auth { user: String, reason: String },

    #[error("malformed response from '{url}': {reason}")]
    MalformedResponse { url: String, reason: String },

    #[error("malformed violations export '{path}': {reason}")]
    MalformedExport { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to write report: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
