// TestDependencies - mock implementations for testing
//
// Provides a mock document store that can be injected into BotDeps for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseDocumentStore, BotDeps, Document, DocumentStoreError};
use crate::config::Config;

// =============================================================================
// Mock Document Store
// =============================================================================

/// Arguments captured from a get_document call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDocumentCall {
    pub collection: String,
    pub id: String,
}

pub struct MockDocumentStore {
    documents: Arc<Mutex<Vec<(GetDocumentCall, Document)>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<GetDocumentCall>>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a document that reads will return
    pub fn with_document(self, collection: &str, id: &str, fields: serde_json::Value) -> Self {
        let fields = match fields {
            serde_json::Value::Object(map) => map,
            other => panic!("mock documents must be JSON objects, got {}", other),
        };
        let key = GetDocumentCall {
            collection: collection.to_string(),
            id: id.to_string(),
        };
        self.documents.lock().unwrap().push((key, fields));
        self
    }

    /// Make every read fail with the given reason
    pub fn with_failure(self, reason: &str) -> Self {
        *self.failure.lock().unwrap() = Some(reason.to_string());
        self
    }

    /// Get all reads that were made
    pub fn calls(&self) -> Vec<GetDocumentCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of reads made
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseDocumentStore for MockDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let call = GetDocumentCall {
            collection: collection.to_string(),
            id: id.to_string(),
        };
        // Record the call
        self.calls.lock().unwrap().push(call.clone());

        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(DocumentStoreError::unavailable(collection, id, reason));
        }

        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|(key, _)| *key == call)
            .map(|(_, fields)| fields.clone()))
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for BotDeps backed by mocks
pub struct TestDependencies {
    pub store: Arc<MockDocumentStore>,
    pub config: Config,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MockDocumentStore::new()),
            config: Config::default(),
        }
    }

    pub fn with_store(mut self, store: MockDocumentStore) -> Self {
        self.store = Arc::new(store);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build deps; the returned store handle stays usable for assertions
    pub fn into_deps(self) -> (BotDeps, Arc<MockDocumentStore>) {
        let deps = BotDeps::new(self.store.clone(), self.config);
        (deps, self.store)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
