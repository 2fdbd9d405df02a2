pub mod blocks;

pub use blocks::home_view;
