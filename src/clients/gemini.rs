use anyhow::Result;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;

use crate::clients::TextGenerator;
use crate::clients::models::requests::{
    Content, GenerateContentRequest, GenerationConfig, InlineData, Part,
};
use crate::clients::models::responses::GenerateContentResponse;
use crate::config::Config;
use crate::services::ai_prompt::FILE_EXTRACTION_PROMPT;

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    extraction_model: String,
}

impl GeminiClient {
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        let Some(api_key) = config.gemini_api_key.clone() else {
            return Ok(None);
        };

        Ok(Some(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            base_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.gemini_model.clone(),
            extraction_model: config.gemini_extraction_model.clone(),
        }))
    }

    async fn generate_content(&self, model: &str, request: GenerateContentRequest) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(anyhow::anyhow!(
                "Gemini request failed with status {}: {}",
                status,
                body
            ));
        }

        let body = response.text().await?;
        let api_response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| anyhow::anyhow!("Failed to parse Gemini response: {}", e))?;

        if let Some(error) = &api_response.error {
            return Err(anyhow::anyhow!("Gemini API error: {}", error.message));
        }

        if api_response.candidates.is_empty() {
            return Err(anyhow::anyhow!("Invalid response from Gemini"));
        }

        match api_response.text() {
            Some(text) => Ok(text),
            None => {
                tracing::warn!(
                    finish_reason = api_response.finish_reason().unwrap_or("unknown"),
                    "gemini.empty_candidate"
                );
                Err(anyhow::anyhow!("No text content in Gemini response"))
            }
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig::default()),
        };

        tracing::debug!(model = %self.model, "gemini.generate_text");
        self.generate_content(&self.model, request).await
    }

    async fn extract_text(&self, data: &[u8], mime_type: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: STANDARD.encode(data),
                        },
                    },
                    Part::Text {
                        text: FILE_EXTRACTION_PROMPT.to_string(),
                    },
                ],
            }],
            generation_config: None,
        };

        tracing::debug!(
            model = %self.extraction_model,
            mime_type = %mime_type,
            size = data.len(),
            "gemini.extract_text"
        );
        self.generate_content(&self.extraction_model, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GeminiClient {
        let config = Config::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("test-key".to_string()),
            "GEMINI_API_URL" => Some(server.uri()),
            _ => None,
        })
        .unwrap();
        GeminiClient::from_config(&config).unwrap().unwrap()
    }

    fn text_response(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[test]
    fn test_no_client_without_api_key() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert!(GeminiClient::from_config(&config).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_generate_text_posts_prompt_to_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "text": "make a plan" }] }],
                "generationConfig": { "maxOutputTokens": 8192 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("{\"day1\":{}}")))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).generate_text("make a plan").await.unwrap();
        assert_eq!(text, "{\"day1\":{}}");
    }

    #[tokio::test]
    async fn test_extract_text_sends_inline_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-pro:generateContent"))
            .and(body_partial_json(json!({
                "contents": [{
                    "parts": [
                        { "inlineData": { "mimeType": "application/pdf", "data": "JVBERi0=" } },
                        { "text": FILE_EXTRACTION_PROMPT }
                    ]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Squat 5x5")))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server)
            .extract_text(b"%PDF-", "application/pdf")
            .await
            .unwrap();
        assert_eq!(text, "Squat 5x5");
    }

    #[tokio::test]
    async fn test_reply_with_thought_signature_part_still_yields_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [
                            { "text": "{\"day1\":{}}" },
                            { "thoughtSignature": "abc" }
                        ]
                    },
                    "finishReason": "STOP"
                }]
            })))
            .mount(&server)
            .await;

        let text = client_for(&server).generate_text("x").await.unwrap();
        assert_eq!(text, "{\"day1\":{}}");
    }

    #[tokio::test]
    async fn test_error_status_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let error = client_for(&server).generate_text("x").await.unwrap_err();
        let message = error.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("overloaded"));
    }

    #[tokio::test]
    async fn test_empty_candidates_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let error = client_for(&server).generate_text("x").await.unwrap_err();
        assert_eq!(error.to_string(), "Invalid response from Gemini");
    }

    #[tokio::test]
    async fn test_candidate_without_text_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "candidates": [{ "finishReason": "SAFETY" }] })),
            )
            .mount(&server)
            .await;

        let error = client_for(&server).generate_text("x").await.unwrap_err();
        assert_eq!(error.to_string(), "No text content in Gemini response");
    }
}
