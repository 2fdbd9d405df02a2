//! Process-local document store, seeded from a JSON snapshot.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, warn};

use super::{BaseDocumentStore, Document, DocumentStoreError};

/// Snapshot layout: `{ "<collection>": { "<id>": { ...fields } } }`
pub type Snapshot = HashMap<String, HashMap<String, Document>>;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<(String, String), Document>>,
    failure: RwLock<Option<String>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        for (collection, docs) in snapshot {
            for (id, fields) in docs {
                store.insert(&collection, &id, fields);
            }
        }
        store
    }

    /// Insert or replace a document
    pub fn insert(&self, collection: &str, id: &str, fields: Document) {
        self.documents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert((collection.to_string(), id.to_string()), fields);
    }

    /// Make every read fail with `reason` until cleared with `None`
    pub fn fail_reads(&self, reason: Option<&str>) {
        *self
            .failure
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = reason.map(str::to_string);
    }

    pub fn with_failure(self, reason: &str) -> Self {
        self.fail_reads(Some(reason));
        self
    }

    pub fn len(&self) -> usize {
        self.documents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BaseDocumentStore for InMemoryDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let failure = self
            .failure
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        if let Some(reason) = failure {
            warn!(collection, id, %reason, "Document read failed");
            return Err(DocumentStoreError::unavailable(collection, id, reason));
        }

        let documents = self
            .documents
            .read()
            .map_err(|_| DocumentStoreError::unavailable(collection, id, "store lock poisoned"))?;

        let found = documents
            .get(&(collection.to_string(), id.to_string()))
            .cloned();
        debug!(collection, id, found = found.is_some(), "Read document");
        Ok(found)
    }
}
