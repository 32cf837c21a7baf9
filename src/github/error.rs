//! Failures a search can end in, and the sentence shown for each.

/// Result type for GitHub API calls
pub type FetchResult<T> = Result<T, FetchError>;

/// Why a search failed.
///
/// The first four variants come from the profile request, `RepositoriesFetch`
/// from the repository list request. `Unexpected` covers everything that never
/// produced a usable HTTP status (transport errors, bad JSON, bad base URL).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("User not found")]
    NotFound { status: u16 },

    #[error("API rate limit exceeded")]
    RateLimited { status: u16 },

    #[error("GitHub API is currently unavailable")]
    ServiceUnavailable { status: u16 },

    #[error("GitHub API error: {status}")]
    UnknownApi { status: u16 },

    #[error("Repositories fetch error: {status}")]
    RepositoriesFetch { status: u16 },

    #[error("{0}")]
    Unexpected(String),
}

const UNEXPECTED_FALLBACK: &str = "An unexpected error occurred";

impl FetchError {
    /// The HTTP status behind this failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status }
            | Self::RateLimited { status }
            | Self::ServiceUnavailable { status }
            | Self::UnknownApi { status }
            | Self::RepositoriesFetch { status } => Some(*status),
            Self::Unexpected(_) => None,
        }
    }

    /// One human-readable sentence for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { .. } => {
                "User not found. Please check the username and try again.".to_string()
            }
            Self::RateLimited { .. } => {
                "GitHub API rate limit exceeded. Please try again later.".to_string()
            }
            Self::ServiceUnavailable { .. } => {
                "GitHub services are currently unavailable. Please try again later.".to_string()
            }
            Self::Unexpected(description) if description.trim().is_empty() => {
                UNEXPECTED_FALLBACK.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}
