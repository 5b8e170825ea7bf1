//! Pagination and sorting DTOs.
//!
//! Wire shapes use camelCase field names to match the backend
//! (`pageNum`, `pageSize`, `pageCount`).

use crate::entity::Model;
use serde::{Deserialize, Serialize};

// ─── Page ────────────────────────────────────────────────────────────────────

/// One page of a paginated query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page {
    pub page_num: u32,
    pub page_size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: 20,
        }
    }
}

impl Page {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.page_num == 1
    }
}

// ─── Sort ────────────────────────────────────────────────────────────────────

/// Sort direction, serialized as `"asc"`/`"desc"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Sort clause: field name plus direction. Defaults to `id` descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySort {
    pub field: String,
    pub direction: SortDirection,
}

impl Default for QuerySort {
    fn default() -> Self {
        Self {
            field: "id".to_string(),
            direction: SortDirection::default(),
        }
    }
}

impl QuerySort {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// A filtered query. The filter is an entity whose set fields narrow the
/// result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(serialize = "E: Serialize", deserialize = "E: serde::de::DeserializeOwned")
)]
pub struct QueryRequest<E: Model> {
    pub filter: E,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<QuerySort>,
}

impl<E: Model> QueryRequest<E> {
    pub fn new() -> Self {
        Self {
            filter: E::default(),
            sort: None,
        }
    }

    pub fn filter(mut self, filter: E) -> Self {
        self.filter = filter;
        self
    }

    pub fn sort(mut self, sort: QuerySort) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl<E: Model> Default for QueryRequest<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A filtered query plus pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(serialize = "E: Serialize", deserialize = "E: serde::de::DeserializeOwned")
)]
pub struct QueryPageRequest<E: Model> {
    #[serde(flatten)]
    pub query: QueryRequest<E>,
    #[serde(default)]
    pub page: Page,
}

impl<E: Model> QueryPageRequest<E> {
    pub fn new() -> Self {
        Self {
            query: QueryRequest::new(),
            page: Page::default(),
        }
    }

    pub fn filter(mut self, filter: E) -> Self {
        self.query.filter = filter;
        self
    }

    pub fn sort(mut self, sort: QuerySort) -> Self {
        self.query.sort = Some(sort);
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

impl<E: Model> Default for QueryPageRequest<E> {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Response ────────────────────────────────────────────────────────────────

/// One page of results. Every field defaults so partial backend envelopes
/// still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(serialize = "E: Serialize", deserialize = "E: serde::de::DeserializeOwned")
)]
pub struct QueryPageResponse<E: Model> {
    #[serde(default)]
    pub list: Vec<E>,
    #[serde(default)]
    pub page: Page,
    #[serde(default)]
    pub sort: QuerySort,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page_count: u64,
}
