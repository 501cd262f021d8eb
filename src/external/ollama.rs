use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{malformed_provider_response_error, provider_unavailable_error, Error};
use crate::external::ItineraryGenerator;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2";

/// Local-model generator talking to an Ollama daemon.
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_OLLAMA_URL.into()),
            model: model.unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.into()),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequestBody<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[async_trait]
impl ItineraryGenerator for OllamaClient {
    #[tracing::instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let url = format!("{}/api/generate", self.base_url);

        let res = self
            .client
            .post(url)
            .json(&GenerateRequestBody {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(provider_unavailable_error());
        }

        let payload: Value = res.json().await?;

        let data: GenerateResponse = serde_json::from_value(payload.clone())
            .map_err(|_| malformed_provider_response_error(payload))?;

        Ok(data.response)
    }
}
