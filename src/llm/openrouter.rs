//! Live adapter for the `CompletionClient` capability using the OpenRouter
//! chat-completions API.

use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::llm::{CompletionClient, CompletionFuture, LlmError};

/// Live client that posts completion requests to OpenRouter.
pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    base_url: String,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    /// Creates a client from the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            referer: config.referer.clone(),
            title: config.title.clone(),
        }
    }
}

/// Error body returned by the API.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

/// Detail inside an API error body.
#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl CompletionClient for OpenRouterClient {
    fn complete(&self, request: &crate::llm::ChatRequest) -> CompletionFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let response = self
                .http
                .post(format!("{}/chat/completions", self.base_url))
                .bearer_auth(&self.api_key)
                .header("HTTP-Referer", &self.referer)
                .header("X-Title", &self.title)
                .json(&request)
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                let status = status.as_u16();
                return Err(match status {
                    // Invalid key, insufficient credits, or forbidden model.
                    401 | 402 | 403 => LlmError::Auth { status, message },
                    _ => LlmError::Api { status, message },
                });
            }

            serde_json::from_str(&body).map_err(|e| LlmError::Malformed(e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiErrorBody, OpenRouterClient};
    use crate::config::Config;

    fn test_config() -> Config {
        Config {
            api_key: "sk-test".into(),
            base_url: "http://127.0.0.1:9".into(),
            referer: "http://localhost:8080".into(),
            title: "orq".into(),
        }
    }

    #[test]
    fn error_body_parses_nested_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": {"message": "invalid key", "code": 401}}"#).unwrap();
        assert_eq!(body.error.message, "invalid key");
    }

    #[test]
    fn client_construction_copies_config() {
        let config = test_config();
        let client = OpenRouterClient::new(&config);
        assert_eq!(client.base_url, config.base_url);
        assert_eq!(client.api_key, config.api_key);
    }
}
