use crate::blockchain::Indexer;
use std::sync::Arc;

pub struct AppState {
    pub indexer: Arc<dyn Indexer>,
}

impl AppState {
    pub fn new(indexer: Arc<dyn Indexer>) -> Self {
        Self { indexer }
    }
}
