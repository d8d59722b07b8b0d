use crate::aggregate::Aggregator;
use crate::config::{Capabilities, Config};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub capabilities: Capabilities,
    pub data: Arc<Mutex<Aggregator>>,
}

impl AppState {
    pub fn new(capabilities: Capabilities, data: Aggregator) -> Self {
        Self {
            capabilities,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let data = Aggregator::new(config.categories.clone(), config.met_table.clone());
        Self::new(config.capabilities, data)
    }
}
