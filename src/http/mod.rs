//! HTTP layer: the request pipeline, the response envelope, and the
//! transport seam the actual I/O is delegated to.

pub mod envelope;
pub mod request;
#[cfg(feature = "http")]
pub mod reqwest_transport;
pub mod transport;

pub use envelope::HttpResponse;
pub use request::{ErrorCallback, Http};
#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{RequestConfig, Transport};

/// Header key for content-type negotiation.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Request method. The backend is POST-centric; GET covers the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request body content types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentType {
    #[default]
    Json,
    FormUrlencoded,
    Plain,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlencoded => "application/x-www-form-urlencoded",
            Self::Plain => "text/plain",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
