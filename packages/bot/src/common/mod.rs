// Common types and utilities shared across the bot

pub mod action_ids;
pub mod types;
pub mod utils;

pub use action_ids::ActionId;
pub use types::*;
