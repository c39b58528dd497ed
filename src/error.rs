// Error taxonomy for the GitHub operations. Every variant is terminal for
// the action that raised it; `Delete` is the one per-item case that the
// deletion loop collects instead of aborting on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The identity endpoint answered with something other than 200.
    #[error("Failed to fetch user info. HTTP Status: {0}")]
    Auth(u16),

    /// The repository listing answered with something other than 200.
    #[error("Error fetching repositories. HTTP Status: {0}")]
    Fetch(u16),

    /// One repository's DELETE answered with something other than 204.
    #[error("Failed to delete {repo}. HTTP Status: {status}")]
    Delete { repo: String, status: u16 },

    /// An operation was started with a blank token.
    #[error("Please provide a GitHub token.")]
    MissingToken,

    /// Delete was requested with nothing checked.
    #[error("Please select at least one repository to delete.")]
    NoSelection,

    /// Connection-level failure before any status code arrived.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The HTTP status carried by the error, if it got as far as a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth(s) | ApiError::Fetch(s) => Some(*s),
            ApiError::Delete { status, .. } => Some(*status),
            _ => None,
        }
    }
}
