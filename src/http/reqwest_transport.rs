//! Bundled reqwest-backed transport.

use crate::error::TransportError;
use crate::http::envelope::HttpResponse;
use crate::http::transport::{RequestConfig, Transport};
use crate::http::HttpMethod;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::RwLock;

/// [`Transport`] implementation over a shared `reqwest::Client`.
///
/// The backend is expected to wrap every reply in a `{code, message, data}`
/// envelope. Replies that are not an envelope are mapped by HTTP status: a
/// non-success status becomes an envelope carrying that status and the body
/// text, a success status with an undecodable body is a payload error.
///
/// Cookie handling in reqwest is client-level, so the per-request
/// `send_cookies` flag is honored by constructing the transport with
/// [`with_cookie_jar`](Self::with_cookie_jar).
pub struct ReqwestTransport {
    client: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    /// A transport that persists cookies across requests.
    pub fn with_cookie_jar() -> Self {
        Self {
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("failed to build HTTP client"),
            token: RwLock::new(None),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("token lock poisoned") = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn access_token(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    async fn request(
        &self,
        config: &RequestConfig,
        body: Option<&Value>,
    ) -> Result<HttpResponse, TransportError> {
        let method = match config.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut request = self
            .client
            .request(method, &config.url)
            .timeout(config.timeout);
        for (key, value) in &config.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<HttpResponse>(&text) {
            Ok(envelope) => Ok(envelope),
            Err(e) if status.is_success() => Err(TransportError::Payload(e)),
            Err(_) => {
                let message = if text.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("HTTP error")
                        .to_string()
                } else {
                    text
                };
                Ok(HttpResponse::new(status.as_u16(), message))
            }
        }
    }
}
