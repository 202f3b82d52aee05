use reqwest::{StatusCode, Url};
use thiserror::Error;

/// Failure of a single fetch against the rental API
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, reset while reading the body
    #[error("transport error while requesting {url}: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    Status { url: Url, status: StatusCode },

    /// Body was not the expected JSON array of properties
    #[error("malformed response body from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Protocol,
    Decode,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Status { .. } => FetchErrorKind::Protocol,
            FetchError::Decode { .. } => FetchErrorKind::Decode,
        }
    }

    pub fn url(&self) -> &Url {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}
