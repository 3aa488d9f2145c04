use std::sync::Arc;

use crate::{
    assistant::{DisabledAssistant, ProductAssistant},
    db::{dao::DaoContext, kv::Storage},
    services::{
        assistant_service::AssistantService, catalog_service::CatalogService,
        history_service::HistoryService, session_service::SessionService,
        shopping_service::ShoppingService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    assistant: Arc<dyn ProductAssistant>,
}

impl ServiceContext {
    pub fn new(storage: &Storage) -> Self {
        Self {
            daos: DaoContext::new(storage),
            assistant: Arc::new(DisabledAssistant),
        }
    }

    pub fn with_assistant(mut self, assistant: Arc<dyn ProductAssistant>) -> Self {
        self.assistant = assistant;
        self
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.storage).with_assistant(Arc::clone(&state.assistant))
    }

    pub fn session(&self) -> SessionService {
        SessionService::new(self.daos.session())
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.daos.storage(), self.daos.product())
    }

    pub fn shopping(&self) -> ShoppingService {
        ShoppingService::new(
            self.daos.storage(),
            self.daos.list(),
            self.daos.item(),
            self.catalog(),
        )
    }

    pub fn history(&self) -> HistoryService {
        HistoryService::new(self.daos.list(), self.daos.item())
    }

    pub fn assistant(&self) -> AssistantService {
        AssistantService::new(Arc::clone(&self.assistant), self.catalog())
    }
}
