//! Entity CRUD service.

use crate::entity::Entity;
use crate::error::SdkError;
use crate::events::CoreEvent;
use crate::query::{QueryPageRequest, QueryPageResponse, QueryRequest};
use crate::service::Service;
use async_trait::async_trait;

/// CRUD helpers for one entity type.
///
/// All helpers run the pipeline in throw mode so failures surface as `Err`;
/// success notifications are broadcast on the client's event bus. The
/// `url_for_*` methods carry the backend's default URL legs and can be
/// overridden per service.
#[async_trait]
pub trait EntityService: Service {
    type Entity: Entity;

    fn url_for_get_page(&self) -> &str {
        "getPage"
    }

    fn url_for_get_list(&self) -> &str {
        "getList"
    }

    fn url_for_get_tree_list(&self) -> &str {
        "getTreeList"
    }

    fn url_for_get_detail(&self) -> &str {
        "getDetail"
    }

    fn url_for_add(&self) -> &str {
        "add"
    }

    fn url_for_update(&self) -> &str {
        "update"
    }

    fn url_for_delete(&self) -> &str {
        "delete"
    }

    fn url_for_disable(&self) -> &str {
        "disable"
    }

    fn url_for_enable(&self) -> &str {
        "enable"
    }

    /// Query one page of entities.
    async fn get_page(
        &self,
        request: &QueryPageRequest<Self::Entity>,
    ) -> Result<QueryPageResponse<Self::Entity>, SdkError> {
        self.api(self.url_for_get_page())
            .throw_error()
            .post_get(request)
            .await?
            .ok_or_else(missing_payload)
    }

    /// Query an unpaginated list.
    async fn get_list(
        &self,
        request: &QueryRequest<Self::Entity>,
    ) -> Result<Vec<Self::Entity>, SdkError> {
        self.api(self.url_for_get_list())
            .throw_error()
            .post_get_array(request)
            .await?
            .ok_or_else(missing_payload)
    }

    /// Query an unpaginated tree, flattened by the backend.
    async fn get_tree_list(
        &self,
        request: &QueryRequest<Self::Entity>,
    ) -> Result<Vec<Self::Entity>, SdkError> {
        self.api(self.url_for_get_tree_list())
            .throw_error()
            .post_get_array(request)
            .await?
            .ok_or_else(missing_payload)
    }

    /// Fetch one entity by id.
    async fn get_detail(&self, id: u64) -> Result<Self::Entity, SdkError> {
        let instance = Self::Entity::with_id(id);
        self.api(self.url_for_get_detail())
            .throw_error()
            .post_get(&instance)
            .await?
            .ok_or_else(missing_payload)
    }

    /// Create an entity, returning the backend-assigned id.
    async fn add(&self, data: &Self::Entity) -> Result<u64, SdkError> {
        let saved: Self::Entity = self
            .api(self.url_for_add())
            .throw_error()
            .post_get(data)
            .await?
            .ok_or_else(missing_payload)?;
        let id = saved.id();
        self.client().events().emit(CoreEvent::AddSuccess { id });
        Ok(id)
    }

    /// Update an existing entity.
    async fn update(&self, data: &Self::Entity) -> Result<(), SdkError> {
        self.api(self.url_for_update())
            .throw_error()
            .post(data)
            .await?;
        self.client().events().emit(CoreEvent::UpdateSuccess);
        Ok(())
    }

    /// Update when the entity carries an id, create otherwise.
    async fn save(&self, data: &Self::Entity) -> Result<u64, SdkError> {
        if data.id() != 0 {
            self.update(data).await?;
            Ok(data.id())
        } else {
            self.add(data).await
        }
    }

    /// Delete by id.
    async fn delete(&self, id: u64) -> Result<(), SdkError> {
        let instance = Self::Entity::with_id(id);
        match self
            .api(self.url_for_delete())
            .throw_error()
            .post(&instance)
            .await
        {
            Ok(_) => {
                self.client().events().emit(CoreEvent::DeleteSuccess);
                Ok(())
            }
            Err(e) => {
                self.client().events().emit(CoreEvent::DeleteFail {
                    message: e.message.clone(),
                });
                Err(e.into())
            }
        }
    }

    /// Disable by id.
    async fn disable(&self, id: u64) -> Result<(), SdkError> {
        let instance = Self::Entity::with_id(id);
        self.api(self.url_for_disable())
            .throw_error()
            .post(&instance)
            .await?;
        self.client().events().emit(CoreEvent::DisableSuccess);
        Ok(())
    }

    /// Enable by id.
    async fn enable(&self, id: u64) -> Result<(), SdkError> {
        let instance = Self::Entity::with_id(id);
        match self
            .api(self.url_for_enable())
            .throw_error()
            .post(&instance)
            .await
        {
            Ok(_) => {
                self.client().events().emit(CoreEvent::EnableSuccess);
                Ok(())
            }
            Err(e) => {
                self.client().events().emit(CoreEvent::EnableFail {
                    message: e.message.clone(),
                });
                Err(e.into())
            }
        }
    }
}

// Throw mode never yields `Ok(None)`; that arm still needs an error value.
fn missing_payload() -> SdkError {
    SdkError::Other("missing response payload".to_string())
}
