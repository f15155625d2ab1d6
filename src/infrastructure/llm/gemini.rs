use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Completion requests cover a full prompt + generation round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// Client for the Gemini `generateContent` REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(GEMINI_API_BASE.to_string(), api_key, model)
    }

    /// Point the client at a different API root. Used by tests.
    pub fn with_base_url(base_url: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    /// Request a completion for `prompt` and return the generated text.
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .context("Gemini API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            bail!("Gemini API returned {status}: {detail}");
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode Gemini API response")?;

        let text = completion
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text);

        match text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => bail!("Gemini API returned an empty completion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> GeminiClient {
        GeminiClient::with_base_url(
            server.uri(),
            "test-key".to_string(),
            "gemini-2.0-flash".to_string(),
        )
    }

    #[tokio::test]
    async fn extracts_generated_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [
                    { "content": { "parts": [{ "text": "from manim import *" }] } }
                ]
            })))
            .mount(&server)
            .await;

        let code = test_client(&server)
            .generate_content("visualize bubble sort")
            .await
            .unwrap();
        assert_eq!(code, "from manim import *");
    }

    #[tokio::test]
    async fn surfaces_provider_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .generate_content("anything")
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("500"), "unexpected error: {msg}");
        assert!(msg.contains("quota exceeded"), "unexpected error: {msg}");
    }

    #[tokio::test]
    async fn rejects_empty_completion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": []
            })))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .generate_content("anything")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty completion"));
    }
}
