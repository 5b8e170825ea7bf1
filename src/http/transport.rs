//! The transport seam.
//!
//! The pipeline never performs I/O itself. It hands a [`RequestConfig`] and
//! an optional JSON body to an injected [`Transport`], which must produce a
//! response envelope or fail with a [`TransportError`]. The bundled
//! implementation is [`ReqwestTransport`](crate::http::ReqwestTransport)
//! (feature `http`).

use crate::error::TransportError;
use crate::http::envelope::HttpResponse;
use crate::http::HttpMethod;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Everything a transport needs to perform one attempt. Built fluently by
/// the pipeline, consumed once, never reused across requests.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: HttpMethod,
    /// Fully resolved target URL.
    pub url: String,
    /// Timeout hint. The transport enforces it; the pipeline cannot abort
    /// an in-flight attempt.
    pub timeout: Duration,
    pub headers: HashMap<String, String>,
    /// Whether to send credentials (cookies) with the request. Advisory for
    /// transports whose cookie handling is connection-level.
    pub send_cookies: bool,
}

/// Capability interface the pipeline delegates to.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Current access token, injected into the authorization header at
    /// pipeline construction when non-empty.
    fn access_token(&self) -> Option<String>;

    /// Perform one attempt. This is the pipeline's single suspension point.
    async fn request(
        &self,
        config: &RequestConfig,
        body: Option<&Value>,
    ) -> Result<HttpResponse, TransportError>;

    /// Called once before the attempt.
    fn start_loading(&self) {}

    /// Called once after classification and dispatch, on every path.
    fn stop_loading(&self) {}
}
