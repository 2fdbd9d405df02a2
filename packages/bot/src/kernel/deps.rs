//! Bot dependencies for block builders (using traits for testability)

use std::sync::Arc;

use crate::config::Config;
use crate::kernel::BaseDocumentStore;

/// Dependencies shared by the builders that read external state
#[derive(Clone)]
pub struct BotDeps {
    pub store: Arc<dyn BaseDocumentStore>,
    pub config: Config,
}

impl BotDeps {
    pub fn new(store: Arc<dyn BaseDocumentStore>, config: Config) -> Self {
        Self { store, config }
    }
}
