use std::sync::Arc;

use serde::Serialize;

use crate::{
    assistant::ProductAssistant,
    error::AppError,
    services::catalog_service::CatalogService,
};

const MIN_NAME_CHARS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftSource {
    Catalog,
    Assistant,
}

/// Prefill for the add-item form after a barcode is scanned.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub barcode: String,
    pub name: String,
    pub category: String,
    pub estimated_price: f64,
    pub source: DraftSource,
}

/// Best-effort wrapper around the product assistant. Failures are logged and turn
/// into empty answers so callers fall back to manual input.
#[derive(Clone)]
pub struct AssistantService {
    assistant: Arc<dyn ProductAssistant>,
    catalog: CatalogService,
}

impl AssistantService {
    pub fn new(assistant: Arc<dyn ProductAssistant>, catalog: CatalogService) -> Self {
        Self { assistant, catalog }
    }

    /// Empty string when the name is too short or the assistant fails.
    pub async fn suggest_category(&self, item_name: &str) -> String {
        let name = item_name.trim();
        if name.chars().count() < MIN_NAME_CHARS {
            return String::new();
        }
        match self.assistant.suggest_category(name).await {
            Ok(category) => category,
            Err(err) => {
                tracing::warn!(error = %err, "category suggestion unavailable");
                String::new()
            }
        }
    }

    /// Catalog first, then the assistant.
    pub async fn resolve_barcode(&self, barcode: &str) -> Result<Option<ProductDraft>, AppError> {
        if let Some(product) = self.catalog.lookup_by_barcode(barcode).await? {
            return Ok(Some(ProductDraft {
                barcode: product.barcode,
                name: product.name,
                category: product.category,
                estimated_price: product.average_price,
                source: DraftSource::Catalog,
            }));
        }

        let guess = match self.assistant.lookup_barcode(barcode).await {
            Ok(guess) => guess,
            Err(err) => {
                tracing::warn!(error = %err, barcode, "barcode lookup unavailable");
                None
            }
        };
        Ok(guess.map(|guess| ProductDraft {
            barcode: barcode.to_string(),
            name: guess.name,
            category: guess.category,
            estimated_price: guess.price,
            source: DraftSource::Assistant,
        }))
    }
}
