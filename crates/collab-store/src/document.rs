use crate::Result as StoreErrorResult;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Serialize a model into a store document.
pub fn to_document<T: Serialize>(model: &T) -> StoreErrorResult<Value> {
    Ok(serde_json::to_value(model)?)
}

/// Deserialize a store document into a model.
pub fn from_document<T: DeserializeOwned>(document: Value) -> StoreErrorResult<T> {
    Ok(serde_json::from_value(document)?)
}
