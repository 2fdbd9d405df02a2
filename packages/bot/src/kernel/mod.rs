//! Kernel module - infrastructure seams and dependencies.

pub mod deps;
pub mod memory_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::BotDeps;
pub use memory_store::{InMemoryDocumentStore, Snapshot};
pub use test_dependencies::{GetDocumentCall, MockDocumentStore, TestDependencies};
pub use traits::*;
