use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};

use super::{AssistantError, ProductAssistant, ProductGuess};
use crate::{config::AssistantConfig, models::product::DEFAULT_CATEGORY};

const CATEGORY_INSTRUCTION: &str = "You are a shopping assistant helping to categorize grocery items in Portuguese (Brazil). Return only the category name.";

/// Client for the Generative Language `generateContent` endpoint. Each call asks for a
/// JSON answer constrained by a response schema.
#[derive(Clone)]
pub struct GeminiAssistant {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiAssistant {
    pub fn new(cfg: &AssistantConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate<T: DeserializeOwned>(&self, body: Value) -> Result<T, AssistantError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status.as_u16()));
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload
            .candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .find_map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AssistantError::EmptyResponse)?;

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ProductAssistant for GeminiAssistant {
    async fn suggest_category(&self, item_name: &str) -> Result<String, AssistantError> {
        let prompt = format!(
            "Categorize this item: \"{item_name}\". Return a single, short category name (e.g., Hortifruti, Carnes, Limpeza, Padaria). If unsure, return \"Outros\"."
        );
        let body = json!({
            "systemInstruction": { "parts": [{ "text": CATEGORY_INSTRUCTION }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": { "category": { "type": "STRING" } }
                }
            }
        });

        let answer: CategoryAnswer = self.generate(body).await?;
        Ok(answer
            .category
            .filter(|category| !category.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()))
    }

    async fn lookup_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<ProductGuess>, AssistantError> {
        let prompt = format!(
            "I have a product with barcode \"{barcode}\". Simulate a database lookup. Provide a realistic product name (in Portuguese), a likely category, and an estimated price in BRL."
        );
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "Product name" },
                        "category": { "type": "STRING", "description": "Product category" },
                        "price": { "type": "NUMBER", "description": "Estimated price in Reais" }
                    },
                    "required": ["name", "category", "price"]
                }
            }
        });

        let answer: BarcodeAnswer = self.generate(body).await?;
        let Some(name) = answer.name.filter(|name| !name.trim().is_empty()) else {
            return Ok(None);
        };
        Ok(Some(ProductGuess {
            name,
            category: answer
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            price: answer.price.unwrap_or(0.0),
        }))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryAnswer {
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BarcodeAnswer {
    name: Option<String>,
    category: Option<String>,
    price: Option<f64>,
}
