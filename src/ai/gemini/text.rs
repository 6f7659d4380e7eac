use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::TextGenerationService;
use crate::models::ResponseMode;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct TextRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<TextGenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextGenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "googleSearch")]
    google_search: serde_json::Value,
}

impl Tool {
    fn google_search() -> Self {
        Self {
            google_search: serde_json::json!({}),
        }
    }
}

pub struct GeminiTextClient {
    http: GeminiHttpClient,
}

impl GeminiTextClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        // Blog-post generation returns several thousand characters of HTML,
        // so the timeout is sized for long completions.
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(120),
                client,
            ),
        }
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiTextClient);

#[async_trait]
impl TextGenerationService for GeminiTextClient {
    async fn generate(&self, prompt: &str, mode: &ResponseMode) -> Result<String> {
        let (generation_config, tools) = match mode {
            ResponseMode::FreeText => (None, None),
            ResponseMode::JsonSchema(schema) => (
                Some(TextGenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema: schema.clone(),
                }),
                None,
            ),
            ResponseMode::SearchGrounded => (None, Some(vec![Tool::google_search()])),
        };

        let request = TextRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config,
            tools,
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        response
            .first_candidate_text()
            .ok_or_else(|| Error::AiProvider("No text in Gemini response".to_string()))
    }
}
