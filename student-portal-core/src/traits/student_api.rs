//! Remote collection contract

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Student, StudentId, StudentPayload};

/// The remote student collection.
///
/// Implementations perform exactly one request per call: no retry,
/// no caching, no local validation.
#[async_trait]
pub trait StudentApi: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> CoreResult<Vec<Student>>;

    /// Create a record; the server assigns `id` and `created_at`
    async fn create(&self, payload: &StudentPayload) -> CoreResult<()>;

    /// Replace the name of an existing record
    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> CoreResult<()>;

    /// Remove a record
    async fn delete(&self, id: &StudentId) -> CoreResult<()>;
}
