use std::sync::Arc;

use crate::{
    assistant::{ProductAssistant, SimulatedScanner},
    config::AppConfig,
    db::kv::Storage,
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: Storage,
    pub assistant: Arc<dyn ProductAssistant>,
    pub scanner: SimulatedScanner,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Storage,
        assistant: Arc<dyn ProductAssistant>,
    ) -> Arc<Self> {
        let scanner = SimulatedScanner::new(config.scanner.delay());
        Arc::new(Self {
            config,
            storage,
            assistant,
            scanner,
        })
    }
}
