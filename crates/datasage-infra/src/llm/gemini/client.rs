//! GeminiProvider -- concrete [`CompletionProvider`] for the Google
//! Generative Language API.
//!
//! Sends non-streaming requests to `models/{model}:generateContent` with
//! the API key in the `x-goog-api-key` header. The key is wrapped in
//! [`secrecy::SecretString`] and is never logged or included in `Debug`
//! output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use datasage_core::provider::CompletionProvider;
use datasage_types::chat::TurnRole;
use datasage_types::config::GlobalConfig;
use datasage_types::error::UpstreamError;
use datasage_types::llm::ChatPrompt;

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    SystemInstruction,
};

/// Gemini completion provider.
///
/// The request timeout comes from [`GlobalConfig::request_timeout_secs`];
/// expiry surfaces as [`UpstreamError::Timeout`]. No automatic retry.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    temperature: Option<f64>,
    max_output_tokens: Option<u32>,
}

impl GeminiProvider {
    /// Create a new Gemini provider from the global config.
    pub fn new(api_key: SecretString, config: &GlobalConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// The model this provider targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Convert a [`ChatPrompt`] into the wire request.
    ///
    /// The upstream API names the assistant role "model".
    fn to_request(&self, prompt: &ChatPrompt) -> GenerateContentRequest {
        let contents = prompt
            .messages
            .iter()
            .map(|m| Content {
                role: match m.role {
                    TurnRole::User => "user".to_string(),
                    TurnRole::Assistant => "model".to_string(),
                },
                parts: vec![Part {
                    text: m.content.clone(),
                }],
            })
            .collect();

        let generation_config = if self.temperature.is_some() || self.max_output_tokens.is_some() {
            Some(GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            })
        } else {
            None
        };

        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: prompt.system.clone(),
                }],
            },
            contents,
            generation_config,
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug so the internal state
// (and any accident around the key) never reaches logs.

impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, UpstreamError> {
        let body = self.to_request(prompt);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout
                } else {
                    UpstreamError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => UpstreamError::AuthenticationFailed,
                code => UpstreamError::Provider {
                    status: code,
                    message: error_body,
                },
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Deserialization(format!("failed to parse response: {e}")))?;

        // Join the text parts of the first candidate; anything else in the
        // envelope is stripped.
        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(UpstreamError::Provider {
                status: status.as_u16(),
                message: "response contained no text candidates".to_string(),
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datasage_types::llm::Message;

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(
            SecretString::from("test-key-not-real"),
            &GlobalConfig::default(),
        )
    }

    fn make_prompt() -> ChatPrompt {
        ChatPrompt {
            system: "Tutor persona".to_string(),
            messages: vec![
                Message::new(TurnRole::User, "What is k-means?"),
                Message::new(TurnRole::Assistant, "A clustering algorithm."),
                Message::new(TurnRole::User, "Show code"),
            ],
        }
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = make_provider();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-1.5-pro");
    }

    #[test]
    fn test_url_building() {
        let provider = make_provider().with_base_url("http://localhost:9090".to_string());
        assert_eq!(
            provider.url(),
            "http://localhost:9090/v1beta/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn test_to_request_maps_assistant_to_model_role() {
        let provider = make_provider();
        let request = provider.to_request(&make_prompt());

        assert_eq!(request.system_instruction.parts[0].text, "Tutor persona");
        assert_eq!(request.contents.len(), 3);
        assert_eq!(request.contents[0].role, "user");
        assert_eq!(request.contents[1].role, "model");
        assert_eq!(request.contents[2].role, "user");
        assert_eq!(request.contents[2].parts[0].text, "Show code");
    }

    #[test]
    fn test_generation_config_omitted_by_default() {
        let provider = make_provider();
        let request = provider.to_request(&make_prompt());
        assert!(request.generation_config.is_none());

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("generationConfig").is_none());
        assert!(json.get("systemInstruction").is_some());
    }

    #[test]
    fn test_generation_config_from_config() {
        let config = GlobalConfig {
            temperature: Some(0.4),
            max_output_tokens: Some(2048),
            ..GlobalConfig::default()
        };
        let provider = GeminiProvider::new(SecretString::from("k"), &config);
        let request = provider.to_request(&make_prompt());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["temperature"], 0.4);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_response_text_extraction() {
        let payload = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Use "}, {"text": "sklearn."}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4}
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(payload).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Use sklearn.");
    }

    #[test]
    fn test_response_without_candidates_parses() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
