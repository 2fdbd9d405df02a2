use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::common::Timestamp;

/// Listing - an item a member has put up for sale
///
/// Mirrors the stored post document. Read-only here: builders project it
/// into blocks and never write it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct Listing {
    pub display_name: String,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub date_posted: Timestamp,
    /// Public URL of the item photo
    pub image: String,
    #[serde(default)]
    #[builder(default)]
    pub sold: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub deleted_at: Option<Timestamp>,
}

impl Listing {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A listing together with the store id it was read under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDoc {
    pub id: String,
    #[serde(flatten)]
    pub data: Listing,
}

impl ListingDoc {
    pub fn new(id: impl Into<String>, data: Listing) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}
