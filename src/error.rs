//! Crate error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpResponseError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// A classified REST failure: the envelope's message plus its status code.
///
/// This is what the pipeline rejects with in throw mode, for every
/// non-success outcome including unauthorized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    pub code: u16,
    pub message: String,
}

impl HttpResponseError {
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

/// A failure before a status code exists: network or payload decoding.
///
/// The pipeline folds these into an application-error envelope carrying
/// [`HttpConfig::default_error_code`](crate::config::HttpConfig).
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
