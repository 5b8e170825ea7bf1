//! # restcore
//!
//! A client-side data access core for JSON REST backends.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — configuration, errors, events, entity/model seams, query DTOs
//! 2. **Pipeline** — `Http` request pipeline over an injected `Transport`
//! 3. **Transport** — bundled `ReqwestTransport` (feature `http`) or a caller-supplied one
//! 4. **High-Level Client** — `RestClient` with per-request pipeline factory
//! 5. **Services** — `Service`/`EntityService` CRUD helpers over the pipeline
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restcore::prelude::*;
//!
//! let client = RestClient::builder()
//!     .api_url("https://backend.example.com/api/")
//!     .build()?;
//!
//! let detail: User = client
//!     .api("user/getDetail")
//!     .throw_error()
//!     .post_get(&User::with_id(1))
//!     .await?
//!     .expect("throw mode always carries a payload on success");
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Process-wide HTTP configuration values.
pub mod config;

/// Model and entity seams over serde.
pub mod entity;

/// Crate error types.
pub mod error;

/// Broadcast event channel owned by the application shell.
pub mod events;

/// Pagination and sorting DTOs.
pub mod query;

// ── Layers 2–3: Pipeline + Transport ─────────────────────────────────────────

/// Request pipeline, envelope, and transport seam.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `RestClient` — the primary entry point.
pub mod client;

// ── Layer 5: Services ────────────────────────────────────────────────────────

/// CRUD service helpers.
pub mod service;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::client::{ClientContext, RestClient, RestClientBuilder};
    pub use crate::config::HttpConfig;
    pub use crate::entity::{transform, Entity, Model};
    pub use crate::error::{HttpResponseError, SdkError, TransportError};
    pub use crate::events::{CoreEvent, EventBus};
    pub use crate::http::{
        ContentType, ErrorCallback, Http, HttpMethod, HttpResponse, RequestConfig, Transport,
    };
    pub use crate::query::{
        Page, QueryPageRequest, QueryPageResponse, QueryRequest, QuerySort, SortDirection,
    };
    pub use crate::service::{EntityService, Service};

    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
}
