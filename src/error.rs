//! Error kinds raised while resolving and fetching a badge.

use thiserror::Error;

/// Errors produced by badge resolution and fetching.
///
/// Each variant is a distinct failure a caller can branch on; the command
/// layer wraps these in `anyhow` so they can still be recovered with
/// `downcast_ref::<BadgeError>()`.
#[derive(Debug, Error)]
pub enum BadgeError {
    /// A flag value that cannot be used to build a badge request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Workflow status that has no entry in the outcome table.
    #[error("Invalid status: {0:?} (expected one of: success, failure, cancelled, skipped)")]
    UnknownStatus(String),

    /// Percentage status that is not an integer in `0..=100`.
    #[error("Invalid percentage: {0:?} (expected an integer between 0 and 100)")]
    InvalidPercentage(String),

    /// Badge type name that is not `workflow`, `percentage` or `custom`.
    #[error("Invalid type: {0:?} (expected one of: workflow, percentage, custom)")]
    UnknownType(String),

    /// The request to the badge service could not be completed.
    #[error("Failed to fetch badge from {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
