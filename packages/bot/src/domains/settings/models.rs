use serde::{Deserialize, Serialize};

use crate::kernel::{BaseDocumentStore, Document, DocumentStoreError};

/// Per-user bot preferences, stored one document per user id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub new_item_notification_enabled: Option<bool>,
}

impl UserPreferences {
    /// Unset and null both mean notifications are off
    pub fn notifications_enabled(&self) -> bool {
        self.new_item_notification_enabled.unwrap_or(false)
    }

    pub fn from_document(
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<Self, DocumentStoreError> {
        serde_json::from_value(serde_json::Value::Object(fields)).map_err(|source| {
            DocumentStoreError::Decode {
                collection: collection.to_string(),
                id: id.to_string(),
                source,
            }
        })
    }

    /// Read a user's preferences. A missing document yields the defaults;
    /// a failed read is returned as an error.
    pub async fn find(
        store: &dyn BaseDocumentStore,
        collection: &str,
        user_id: &str,
    ) -> Result<Self, DocumentStoreError> {
        match store.get_document(collection, user_id).await? {
            Some(fields) => Self::from_document(collection, user_id, fields),
            None => Ok(Self::default()),
        }
    }
}
