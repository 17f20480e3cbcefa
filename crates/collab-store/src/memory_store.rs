//! In-memory `DocumentStore` with the same observable semantics as the
//! managed store: merge updates, set-like array mutation, unordered
//! equality queries. Backs the test suites and local tooling.

use crate::{DocumentStore, Result as StoreErrorResult, StoreError};

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn put(&self, collection: &str, key: &str, document: Value) -> StoreErrorResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
        Ok(())
    }

    async fn get(&self, collection: &str, key: &str) -> StoreErrorResult<Option<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(key))
            .cloned())
    }

    async fn update(
        &self,
        collection: &str,
        key: &str,
        fields: Map<String, Value>,
    ) -> StoreErrorResult<()> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(key))
            .ok_or_else(|| StoreError::missing_document(collection, key))?;

        let Value::Object(existing) = document else {
            return Err(StoreError::transport(
                "update",
                format!("{collection}/{key} is not an object"),
            ));
        };
        for (field, value) in fields {
            existing.insert(field, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> StoreErrorResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(documents) = collections.get_mut(collection) {
            documents.remove(key);
        }
        Ok(())
    }

    async fn query_equals(
        &self,
        collection: &str,
        filters: &[(&str, Value)],
    ) -> StoreErrorResult<Vec<Value>> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(documents
            .values()
            .filter(|document| {
                filters
                    .iter()
                    .all(|(field, expected)| document.get(*field) == Some(expected))
            })
            .cloned()
            .collect())
    }

    async fn array_add(
        &self,
        collection: &str,
        key: &str,
        field: &str,
        value: Value,
    ) -> StoreErrorResult<()> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(key))
            .ok_or_else(|| StoreError::missing_document(collection, key))?;

        let Value::Object(existing) = document else {
            return Err(StoreError::transport(
                "array_add",
                format!("{collection}/{key} is not an object"),
            ));
        };
        let entry = existing
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(items) = entry else {
            return Err(StoreError::transport(
                "array_add",
                format!("{collection}/{key}.{field} is not an array"),
            ));
        };
        if !items.contains(&value) {
            items.push(value);
        }
        Ok(())
    }

    async fn array_remove(
        &self,
        collection: &str,
        key: &str,
        field: &str,
        value: Value,
    ) -> StoreErrorResult<()> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(key))
            .ok_or_else(|| StoreError::missing_document(collection, key))?;

        let Value::Object(existing) = document else {
            return Err(StoreError::transport(
                "array_remove",
                format!("{collection}/{key} is not an object"),
            ));
        };
        match existing.get_mut(field) {
            Some(Value::Array(items)) => {
                items.retain(|item| item != &value);
                Ok(())
            }
            Some(_) => Err(StoreError::transport(
                "array_remove",
                format!("{collection}/{key}.{field} is not an array"),
            )),
            // removing from a field that was never written is a no-op
            None => Ok(()),
        }
    }
}
