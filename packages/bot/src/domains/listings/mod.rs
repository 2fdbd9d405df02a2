pub mod blocks;
pub mod models;

pub use blocks::{
    buyer_actions, buyer_listing_blocks, listing_block, owner_actions, owner_listing_blocks,
};
pub use models::{Listing, ListingDoc};
