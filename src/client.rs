//! High-level client — `RestClient` with a per-request pipeline factory.

use crate::config::HttpConfig;
use crate::error::SdkError;
use crate::events::EventBus;
use crate::http::request::{ErrorCallback, Http};
use crate::http::Transport;
use std::sync::Arc;
use std::time::Duration;

/// Shared state every pipeline instance reads: configuration, the injected
/// transport, and the application's event channel.
pub struct ClientContext {
    pub config: HttpConfig,
    pub transport: Arc<dyn Transport>,
    pub events: EventBus,
}

/// The primary entry point.
///
/// Cheap to clone; clones share the context. Each call to [`api`](Self::api)
/// yields an independent single-use pipeline, so callers may issue many
/// requests concurrently with no coordination.
#[derive(Clone)]
pub struct RestClient {
    ctx: Arc<ClientContext>,
}

impl RestClient {
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::default()
    }

    /// A pipeline for one request against the given target.
    pub fn api(&self, url: &str) -> Http {
        Http::create(self.ctx.clone(), url, None)
    }

    /// Like [`api`](Self::api), with a per-call error callback.
    pub fn api_with(&self, url: &str, on_error: ErrorCallback) -> Http {
        Http::create(self.ctx.clone(), url, Some(on_error))
    }

    pub fn events(&self) -> &EventBus {
        &self.ctx.events
    }

    pub fn config(&self) -> &HttpConfig {
        &self.ctx.config
    }

    pub fn context(&self) -> Arc<ClientContext> {
        self.ctx.clone()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct RestClientBuilder {
    config: HttpConfig,
    transport: Option<Arc<dyn Transport>>,
    event_capacity: usize,
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self {
            config: HttpConfig::default(),
            transport: None,
            event_capacity: 64,
        }
    }
}

impl RestClientBuilder {
    /// API root for relative targets. A trailing `/` is appended when
    /// missing.
    pub fn api_url(mut self, url: &str) -> Self {
        self.config.api_url = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{}/", url)
        };
        self
    }

    pub fn authorization_header(mut self, header: &str) -> Self {
        self.config.authorization_header = header.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn success_code(mut self, code: u16) -> Self {
        self.config.success_code = code;
        self
    }

    pub fn unauthorized_code(mut self, code: u16) -> Self {
        self.config.unauthorized_code = code;
        self
    }

    pub fn default_error_code(mut self, code: u16) -> Self {
        self.config.default_error_code = code;
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    pub fn build(self) -> Result<RestClient, SdkError> {
        #[cfg(feature = "http")]
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(crate::http::ReqwestTransport::new()));
        #[cfg(not(feature = "http"))]
        let transport = self.transport.ok_or_else(|| {
            SdkError::Other("no transport configured and the http feature is disabled".to_string())
        })?;

        Ok(RestClient {
            ctx: Arc::new(ClientContext {
                config: self.config,
                transport,
                events: EventBus::new(self.event_capacity),
            }),
        })
    }
}
