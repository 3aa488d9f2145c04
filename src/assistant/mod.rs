//! External helpers used while adding items: a generative-text product assistant and
//! a simulated barcode scanner.

mod gemini;
mod scanner;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use gemini::GeminiAssistant;
pub use scanner::SimulatedScanner;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("product assistant is not configured")]
    Disabled,
    #[error("assistant request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("assistant returned status {0}")]
    Status(u16),
    #[error("assistant returned no content")]
    EmptyResponse,
    #[error("assistant returned malformed json: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// What the assistant believes a barcode refers to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductGuess {
    pub name: String,
    pub category: String,
    pub price: f64,
}

#[async_trait]
pub trait ProductAssistant: Send + Sync {
    async fn suggest_category(&self, item_name: &str) -> Result<String, AssistantError>;
    async fn lookup_barcode(&self, barcode: &str)
    -> Result<Option<ProductGuess>, AssistantError>;
}

/// Stand-in used when no API key is configured; every call fails with
/// [`AssistantError::Disabled`].
pub struct DisabledAssistant;

#[async_trait]
impl ProductAssistant for DisabledAssistant {
    async fn suggest_category(&self, _item_name: &str) -> Result<String, AssistantError> {
        Err(AssistantError::Disabled)
    }

    async fn lookup_barcode(
        &self,
        _barcode: &str,
    ) -> Result<Option<ProductGuess>, AssistantError> {
        Err(AssistantError::Disabled)
    }
}
