pub mod document;
pub mod document_store;
pub mod error;
pub mod memory_store;

pub use document::{from_document, to_document};
pub use document_store::DocumentStore;
pub use error::{Result, StoreError};
pub use memory_store::MemoryStore;
