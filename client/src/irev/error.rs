//! Errors raised by the IReV client.

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

/// Which part of the response contract an upstream reply broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFailure {
    /// Non-2xx status
    Status,
    /// Body was not JSON
    InvalidJson,
    /// Envelope `success` flag was missing or falsy
    Unsuccessful,
    /// `data` did not decode into the expected shape
    UnexpectedShape,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Status => "unexpected status",
            Self::InvalidJson => "body is not valid JSON",
            Self::Unsuccessful => "envelope reported failure",
            Self::UnexpectedShape => "unexpected data shape",
        };
        f.write_str(text)
    }
}

/// The upstream reply as received, kept for caller-side diagnostics.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Errors that can occur when using the IReV API client.
#[derive(Debug, Error)]
pub enum IrevApiError {
    /// Client configuration is unusable (e.g. no auth tokens)
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// A caller-supplied argument failed a local precondition
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered, but not with a successful envelope
    #[error("An error occurred while accessing the IReV API: {reason} (HTTP {})", .response.status.as_u16())]
    Api {
        reason: ApiFailure,
        response: Box<RawResponse>,
    },
}

impl IrevApiError {
    pub(crate) fn api(reason: ApiFailure, response: RawResponse) -> Self {
        Self::Api {
            reason,
            response: Box::new(response),
        }
    }

    /// True for failures of the network round-trip or envelope contract.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Request(_))
    }

    /// The raw upstream reply, when there was one.
    #[must_use]
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::Api { response, .. } => Some(response.as_ref()),
            _ => None,
        }
    }
}
