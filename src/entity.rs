//! Model and entity seams.
//!
//! Serialization is delegated to serde: a [`Model`] is any serde-capable
//! type with a `Default`, and an [`Entity`] additionally carries a numeric
//! primary key. The [`transform`] helpers are the deserialization
//! collaborator used by the typed pipeline getters.

use crate::error::SdkError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A data model that can cross the wire.
pub trait Model: Serialize + DeserializeOwned + Default + Send + Sync {
    /// Serialize into a JSON value.
    fn to_json(&self) -> Result<Value, SdkError> {
        serde_json::to_value(self).map_err(SdkError::Serde)
    }
}

/// A model with a numeric primary key.
pub trait Entity: Model {
    fn id(&self) -> u64;

    fn set_id(&mut self, id: u64);

    /// A fresh instance carrying only the given id, as sent by the
    /// detail/delete/enable/disable service helpers.
    fn with_id(id: u64) -> Self
    where
        Self: Sized,
    {
        let mut entity = Self::default();
        entity.set_id(id);
        entity
    }
}

/// Conversion between raw JSON payloads and typed models.
pub mod transform {
    use super::*;

    /// Deserialize a JSON value into a typed model.
    pub fn parse<T: DeserializeOwned>(value: Value) -> Result<T, SdkError> {
        serde_json::from_value(value).map_err(SdkError::Serde)
    }

    /// Deserialize a JSON array into an ordered sequence of typed models.
    pub fn parse_array<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, SdkError> {
        serde_json::from_value(value).map_err(SdkError::Serde)
    }
}
