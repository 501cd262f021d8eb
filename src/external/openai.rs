use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{
    malformed_provider_response_error, provider_unavailable_error, provider_unconfigured_error,
    Error,
};
use crate::external::ItineraryGenerator;

pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Hosted-model generator talking to the OpenAI chat completions API.
pub struct OpenAiClient {
    api_key: Option<String>,
    url: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            url: OPENAI_CHAT_COMPLETIONS_URL.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl ItineraryGenerator for OpenAiClient {
    #[tracing::instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| provider_unconfigured_error())?;

        let body = ChatRequestBody {
            model: OPENAI_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.8,
            max_tokens: 2000,
        };

        let res = self
            .client
            .post(&self.url)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(provider_unavailable_error());
        }

        let payload: Value = res.json().await?;

        let data: ChatResponse = serde_json::from_value(payload.clone())
            .map_err(|_| malformed_provider_response_error(payload.clone()))?;

        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| malformed_provider_response_error(payload.clone()))?;

        choice
            .message
            .content
            .ok_or_else(|| malformed_provider_response_error(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn missing_key_fails_before_any_request() {
        let client = OpenAiClient::new(None);

        let err = block_on(client.generate("plan a trip")).unwrap_err();

        assert_eq!(err.code, provider_unconfigured_error().code);
    }
}
