//! CRUD service helpers over the request pipeline.

mod entity;

pub use entity::EntityService;

use crate::client::RestClient;
use crate::http::Http;

/// An API service bound to one backend controller directory.
pub trait Service: Send + Sync {
    fn client(&self) -> &RestClient;

    /// The controller directory, e.g. `"user"`.
    fn base_url(&self) -> &str;

    /// A pipeline for one request under this service's directory.
    fn api(&self, url: &str) -> Http {
        self.client().api(&format!("{}/{}", self.base_url(), url))
    }

    /// Like [`api`](Self::api), against a different directory.
    fn api_at(&self, url: &str, base_url: &str) -> Http {
        self.client().api(&format!("{}/{}", base_url, url))
    }
}
