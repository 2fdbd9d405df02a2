// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Block builders take these traits so tests can swap in mocks.
//
// Naming convention: Base* for trait names (e.g., BaseDocumentStore)

use async_trait::async_trait;
use thiserror::Error;

/// Field map of a stored document
pub type Document = serde_json::Map<String, serde_json::Value>;

#[derive(Error, Debug)]
pub enum DocumentStoreError {
    #[error("Document store unavailable reading {collection}/{id}: {reason}")]
    Unavailable {
        collection: String,
        id: String,
        reason: String,
    },

    #[error("Failed to decode document {collection}/{id}: {source}")]
    Decode {
        collection: String,
        id: String,
        source: serde_json::Error,
    },
}

impl DocumentStoreError {
    pub fn unavailable(collection: &str, id: &str, reason: impl Into<String>) -> Self {
        DocumentStoreError::Unavailable {
            collection: collection.to_string(),
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Document Store Trait (Infrastructure - keyed document reads)
// =============================================================================

#[async_trait]
pub trait BaseDocumentStore: Send + Sync {
    /// Fetch one document by collection and id.
    ///
    /// `Ok(None)` means the read succeeded and no such document exists.
    /// Transport or backend failures are `Err` and must reach the caller.
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError>;
}
