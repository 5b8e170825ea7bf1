//! The request pipeline — `Http`.
//!
//! One instance per outbound call: created by the client's `api()` factory,
//! configured fluently, consumed by `post`/`get`, then discarded. Failure
//! dispatch is caller-selected per instance:
//!
//! - **throw mode** (`throw_error()`): every non-success outcome comes back
//!   as `Err(HttpResponseError)`.
//! - **callback mode** (the default): the failing envelope is handed to the
//!   per-call error callback, or broadcast as
//!   [`CoreEvent::NeedLogin`]/[`CoreEvent::HttpError`] when no callback is
//!   registered. The call returns `Ok(None)`. With neither a callback nor a
//!   bus listener, the pipeline falls back to throw mode for that call.

use crate::client::ClientContext;
use crate::entity::transform;
use crate::error::{HttpResponseError, SdkError, TransportError};
use crate::events::CoreEvent;
use crate::http::envelope::HttpResponse;
use crate::http::transport::RequestConfig;
use crate::http::{ContentType, HttpMethod, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Per-call error callback, receiving the failing envelope.
pub type ErrorCallback = Arc<dyn Fn(&HttpResponse) + Send + Sync>;

/// Which broadcast channel a failure belongs on.
enum FailureChannel {
    NeedLogin,
    HttpError,
}

/// A single-use request pipeline.
pub struct Http {
    ctx: Arc<ClientContext>,
    request: RequestConfig,
    error_callback: Option<ErrorCallback>,
    throw_error: bool,
}

impl Http {
    /// Create a pipeline for one request.
    ///
    /// A target starting with an HTTP(S) scheme is used verbatim; anything
    /// else is prefixed with the configured API root. The default headers
    /// carry `Content-Type: application/json` plus the access token under
    /// the configured authorization key when the transport reports a
    /// non-empty one. No I/O happens here.
    pub fn create(
        ctx: Arc<ClientContext>,
        url: &str,
        error_callback: Option<ErrorCallback>,
    ) -> Self {
        let url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", ctx.config.api_url, url)
        };

        let mut headers = HashMap::new();
        headers.insert(CONTENT_TYPE.to_string(), ContentType::Json.to_string());
        match ctx.transport.access_token() {
            Some(token) if !token.is_empty() => {
                headers.insert(ctx.config.authorization_header.clone(), token);
            }
            _ => {}
        }

        let request = RequestConfig {
            method: HttpMethod::default(),
            url,
            timeout: ctx.config.timeout,
            headers,
            send_cookies: false,
        };

        Self {
            ctx,
            request,
            error_callback,
            throw_error: false,
        }
    }

    // ── Fluent configuration ─────────────────────────────────────────────

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = timeout;
        self
    }

    /// Replace the whole header map, defaults included.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.request.headers = headers;
        self
    }

    /// Upsert one header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_cookies(mut self) -> Self {
        self.request.send_cookies = true;
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.request.method = method;
        self
    }

    /// Sugar over [`header`](Self::header) for content-type negotiation.
    pub fn content_type(self, content_type: ContentType) -> Self {
        self.header(CONTENT_TYPE, content_type.to_string())
    }

    /// Reject every non-success outcome instead of routing it to the
    /// callback/event channel.
    pub fn throw_error(mut self) -> Self {
        self.throw_error = true;
        self
    }

    /// Route non-success outcomes to the callback/event channel (the
    /// default).
    pub fn callback_error(mut self) -> Self {
        self.throw_error = false;
        self
    }

    /// The request as the transport will see it.
    pub fn request(&self) -> &RequestConfig {
        &self.request
    }

    // ── Sending ──────────────────────────────────────────────────────────

    /// Send as POST with a serialized body. A single model or a slice of
    /// models both work; arrays serialize element-wise, order preserved.
    pub async fn post<B: Serialize + ?Sized>(
        mut self,
        body: &B,
    ) -> Result<Option<Value>, HttpResponseError> {
        self.request.method = HttpMethod::Post;
        match serde_json::to_value(body) {
            Ok(value) => self.send(Some(value)).await,
            Err(e) => self.dispatch(Err(TransportError::Payload(e))),
        }
    }

    /// Send as POST with an empty object body.
    pub async fn post_empty(mut self) -> Result<Option<Value>, HttpResponseError> {
        self.request.method = HttpMethod::Post;
        self.send(Some(json!({}))).await
    }

    /// Send as GET with no body.
    pub async fn get(mut self) -> Result<Option<Value>, HttpResponseError> {
        self.request.method = HttpMethod::Get;
        self.send(None).await
    }

    /// `post` then deserialize the payload into a typed model.
    pub async fn post_get<B, T>(self, body: &B) -> Result<Option<T>, SdkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.post(body).await? {
            Some(value) => Ok(Some(transform::parse(value)?)),
            None => Ok(None),
        }
    }

    /// `post` then deserialize the payload into an ordered sequence of
    /// typed models.
    pub async fn post_get_array<B, T>(self, body: &B) -> Result<Option<Vec<T>>, SdkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.post(body).await? {
            Some(value) => Ok(Some(transform::parse_array(value)?)),
            None => Ok(None),
        }
    }

    // ── Pipeline core ────────────────────────────────────────────────────

    /// One attempt, no internal retries. Loading hooks bracket the attempt
    /// and its dispatch, exactly once per call on every path.
    async fn send(self, body: Option<Value>) -> Result<Option<Value>, HttpResponseError> {
        let transport = self.ctx.transport.clone();
        transport.start_loading();
        tracing::debug!(method = %self.request.method, url = %self.request.url, "sending request");
        let result = transport.request(&self.request, body.as_ref()).await;
        let outcome = self.dispatch(result);
        transport.stop_loading();
        outcome
    }

    /// Classify the (real or synthesized) envelope and dispatch the outcome.
    fn dispatch(
        self,
        result: Result<HttpResponse, TransportError>,
    ) -> Result<Option<Value>, HttpResponseError> {
        let config = &self.ctx.config;
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %self.request.url, error = %e, "transport failure");
                HttpResponse::new(config.default_error_code, e.to_string())
            }
        };

        if response.code == config.unauthorized_code {
            return self.fail(response, FailureChannel::NeedLogin);
        }
        if response.code != config.success_code {
            return self.fail(response, FailureChannel::HttpError);
        }
        Ok(Some(response.data))
    }

    /// Deliver a non-success envelope on exactly one channel.
    fn fail(
        self,
        response: HttpResponse,
        channel: FailureChannel,
    ) -> Result<Option<Value>, HttpResponseError> {
        let handled = self.error_callback.is_some() || self.ctx.events.has_listeners();
        if self.throw_error || !handled {
            return Err(HttpResponseError::new(&response.message, response.code));
        }
        if let Some(callback) = &self.error_callback {
            callback(&response);
            return Ok(None);
        }
        match channel {
            FailureChannel::NeedLogin => self.ctx.events.emit(CoreEvent::NeedLogin(response)),
            FailureChannel::HttpError => self.ctx.events.emit(CoreEvent::HttpError(response)),
        }
        Ok(None)
    }
}
