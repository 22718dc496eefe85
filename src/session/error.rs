//! Session errors.

use thiserror::Error;

/// Failures of the surrounding I/O. Robot commands themselves never fail.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read command input")]
    Read(#[source] std::io::Error),

    #[error("failed to write report")]
    Write(#[source] std::io::Error),

    #[error("failed to encode report")]
    Encode(#[from] serde_json::Error),
}
