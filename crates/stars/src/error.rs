use std::fmt;

/// Why a star lookup failed. Absorbed by [`crate::fetch_star_count`].
#[derive(Debug)]
pub enum FetchError {
    Transport(reqwest::Error),
    Status(u16),
    MalformedBody(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "request failed: {}", err),
            FetchError::Status(code) => write!(f, "GitHub API returned status code {}", code),
            FetchError::MalformedBody(msg) => write!(f, "invalid response structure: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err)
    }
}
