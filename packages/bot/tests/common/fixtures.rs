//! Test fixtures for creating listing documents.

use bot_core::common::Timestamp;
use bot_core::domains::listings::{Listing, ListingDoc};

/// The desk listing used throughout the block layout examples
pub fn desk_listing() -> Listing {
    Listing::builder()
        .display_name("Amy")
        .title("Desk")
        .description("sturdy")
        .price(125000)
        .date_posted(Timestamp::from_seconds(1_700_000_000))
        .image("http://x/img.png")
        .build()
}

pub fn listing_doc(id: &str, sold: bool, deleted_at: Option<i64>) -> ListingDoc {
    let mut listing = desk_listing();
    listing.sold = sold;
    listing.deleted_at = deleted_at.map(Timestamp::from_seconds);
    ListingDoc::new(id, listing)
}

/// Every sold/deleted combination a listing can be in
pub fn all_listing_states() -> Vec<ListingDoc> {
    let mut docs = Vec::new();
    for sold in [false, true] {
        for deleted_at in [None, Some(1_700_100_000)] {
            docs.push(listing_doc("post-1", sold, deleted_at));
        }
    }
    docs
}
