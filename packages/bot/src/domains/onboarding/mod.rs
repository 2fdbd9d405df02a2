pub mod blocks;

pub use blocks::{permission_request, permission_request_at, sell_prompt};
