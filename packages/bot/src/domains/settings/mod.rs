pub mod blocks;
pub mod models;

pub use blocks::settings_block;
pub use models::UserPreferences;
