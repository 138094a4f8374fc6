// file: src/summarizer/gemini.rs
// description: Gemini API integration for bill summary generation
// reference: https://ai.google.dev/api/generate-content

use crate::config::SummarizerConfig;
use crate::error::{AnalyzerError, Result};
use crate::summarizer::TextGenerator;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_config(config: &SummarizerConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    fn url(&self) -> String {
        let model = self.model.trim_start_matches("models/");
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            model
        )
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AnalyzerError::UpstreamService(
                "No text returned from Gemini API".to_string(),
            ));
        }

        Ok(text)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(
            "Requesting summary from Gemini model {} for {} chars",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AnalyzerError::UpstreamService(format!("Failed to send Gemini API request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalyzerError::UpstreamService(format!(
                "Gemini API request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            AnalyzerError::UpstreamService(format!("Failed to parse Gemini API response: {}", e))
        })?;

        let text = Self::extract_text(body)?;
        debug!("Received summary of {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(model: &str, endpoint: &str) -> GeminiClient {
        let config = SummarizerConfig {
            model: model.to_string(),
            endpoint: endpoint.to_string(),
            timeout_secs: 5,
            ..SummarizerConfig::default()
        };
        GeminiClient::from_config(&config, "key".to_string()).unwrap()
    }

    #[test]
    fn test_url_strips_models_prefix() {
        let client = client("models/gemini-1.5-flash", "https://example.test/v1beta/");
        assert_eq!(
            client.url(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"1. Title"},{"text":"\n2. Summary"}],"role":"model"},"finishReason":"STOP"}]}"#,
        )
        .unwrap();

        assert_eq!(
            GeminiClient::extract_text(response).unwrap(),
            "1. Title\n2. Summary"
        );
    }

    #[test]
    fn test_extract_text_without_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();

        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(AnalyzerError::UpstreamService(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_upstream_failure() {
        let client = client("gemini-1.5-flash", "http://127.0.0.1:1");

        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(AnalyzerError::UpstreamService(_))));
    }
}
