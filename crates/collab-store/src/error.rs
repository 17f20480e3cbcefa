use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store transport error during {operation}: {message} {location}")]
    Transport {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Document serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Document not found: {collection}/{key} {location}")]
    MissingDocument {
        collection: String,
        key: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_document(collection: &str, key: &str) -> Self {
        Self::MissingDocument {
            collection: collection.to_string(),
            key: key.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
