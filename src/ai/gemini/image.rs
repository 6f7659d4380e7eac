use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::ImageGenerationService;
use crate::models::AspectRatio;
use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ImageRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: ImageGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageGenerationConfig {
    response_modalities: Vec<String>,
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
    image_size: String,
}

pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
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
super::impl_with_gemini_base_url!(GeminiImageClient);

#[async_trait]
impl ImageGenerationService for GeminiImageClient {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Option<String>> {
        let request = ImageRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: ImageGenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: aspect_ratio.as_str().to_string(),
                    image_size: "1K".to_string(),
                },
            },
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        match response.first_inline_data() {
            Some(inline_data) => {
                tracing::debug!(
                    "Gemini returned image with mime_type: {}",
                    inline_data.mime_type
                );
                Ok(Some(inline_data.data.clone()))
            }
            None => {
                tracing::warn!("Gemini image response carried no inline data");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use crate::Error;
    use wiremock::{MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

    fn make_client(server: &MockServer, api_key: &str, model: &str) -> GeminiImageClient {
        GeminiImageClient::new(api_key.to_string(), model.to_string()).with_base_url(server.uri())
    }

    fn inline_image_response(b64: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{
                        "inlineData": { "mimeType": "image/png", "data": b64 }
                    }]
                }
            }]
        }))
    }

    #[tokio::test]
    async fn test_generate_image_returns_inline_payload() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(inline_image_response("iVBORw0KGgo="))
            .mount(&server)
            .await;

        let client = make_client(&server, "key", DEFAULT_MODEL);
        let result = client
            .generate_image("autumn foliage", AspectRatio::Wide)
            .await
            .unwrap();
        assert_eq!(result, Some("iVBORw0KGgo=".to_string()));
    }

    #[tokio::test]
    async fn test_request_carries_aspect_ratio_and_size() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(wiremock::matchers::body_string_contains(
                "\"aspectRatio\":\"1:1\"",
            ))
            .and(wiremock::matchers::body_string_contains(
                "\"imageSize\":\"1K\"",
            ))
            .respond_with(inline_image_response("aGk="))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "key", DEFAULT_MODEL);
        client
            .generate_image("thumbnail", AspectRatio::Square)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_text_only_response_yields_none() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "no image here" }] }
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "key", DEFAULT_MODEL);
        let result = client
            .generate_image("prompt", AspectRatio::Wide)
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_api_error_returns_ai_provider_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = make_client(&server, "key", DEFAULT_MODEL);
        let err = client
            .generate_image("prompt", AspectRatio::Wide)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}
