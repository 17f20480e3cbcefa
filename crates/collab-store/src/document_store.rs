use crate::Result as StoreErrorResult;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Minimal contract of the managed document store the product runs on.
///
/// Documents are JSON objects addressed by (collection, key). The store
/// provides no ordering and no cross-document transactions; multi-step
/// operations built on top must tolerate partial completion.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create or overwrite a document.
    async fn put(&self, collection: &str, key: &str, document: Value) -> StoreErrorResult<()>;

    /// Fetch a document, `None` when absent.
    async fn get(&self, collection: &str, key: &str) -> StoreErrorResult<Option<Value>>;

    /// Merge top-level fields into an existing document. Fails with
    /// `MissingDocument` when the target does not exist.
    async fn update(
        &self,
        collection: &str,
        key: &str,
        fields: Map<String, Value>,
    ) -> StoreErrorResult<()>;

    /// Delete a document. Deleting an absent document is not an error.
    async fn delete(&self, collection: &str, key: &str) -> StoreErrorResult<()>;

    /// Equality-only query: every document whose fields match all
    /// `filters`. No ordering guarantee.
    async fn query_equals(
        &self,
        collection: &str,
        filters: &[(&str, Value)],
    ) -> StoreErrorResult<Vec<Value>>;

    /// Add `value` to an array field of one document, set-like (a value
    /// already present is not duplicated).
    async fn array_add(
        &self,
        collection: &str,
        key: &str,
        field: &str,
        value: Value,
    ) -> StoreErrorResult<()>;

    /// Remove every occurrence of `value` from an array field.
    async fn array_remove(
        &self,
        collection: &str,
        key: &str,
        field: &str,
        value: Value,
    ) -> StoreErrorResult<()>;
}
