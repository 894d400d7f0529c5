use std::fmt;

use thiserror::Error;

/// Failure while looking up the replies to a post.
///
/// The `Display` text carries provider detail and is meant for logs. What the
/// user sees comes from [`FetchError::kind`].
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no bearer token configured")]
    MissingCredentials,

    #[error("credentials rejected (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("rate limited")]
    RateLimited,

    #[error("query rejected: {0}")]
    InvalidQuery(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("API returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::MissingCredentials | FetchError::Unauthorized { .. } => {
                FetchErrorKind::Authentication
            }
            FetchError::RateLimited => FetchErrorKind::RateLimited,
            FetchError::InvalidQuery(_) => FetchErrorKind::InvalidPost,
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::MalformedResponse(_) | FetchError::Upstream { .. } => {
                FetchErrorKind::Upstream
            }
        }
    }
}

/// Coarse classification of a [`FetchError`], safe to show to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Authentication,
    RateLimited,
    InvalidPost,
    Network,
    Upstream,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FetchErrorKind::Authentication => "authentication failed",
            FetchErrorKind::RateLimited => "rate limited",
            FetchErrorKind::InvalidPost => "invalid post reference",
            FetchErrorKind::Network => "network failure",
            FetchErrorKind::Upstream => "unexpected response",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_auth_failures() {
        assert_eq!(
            FetchError::MissingCredentials.kind(),
            FetchErrorKind::Authentication
        );
        assert_eq!(
            FetchError::Unauthorized { status: 403 }.kind(),
            FetchErrorKind::Authentication
        );
    }

    #[test]
    fn test_kind_hides_provider_detail() {
        let err = FetchError::Upstream {
            status: 503,
            body: "internal trace id abc".to_string(),
        };
        assert!(err.to_string().contains("abc"));
        assert_eq!(err.kind().to_string(), "unexpected response");
    }

    #[test]
    fn test_rate_limited_kind_text() {
        assert_eq!(FetchError::RateLimited.kind().to_string(), "rate limited");
    }
}
