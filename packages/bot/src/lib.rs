// Marketplace Bot - Block Builder
//
// Builds the block payloads the marketplace bot posts: listings, buyer and
// seller actions, onboarding prompts, and the home tab settings panel.
//
// Builders live per-domain in domains/*/blocks.rs

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
