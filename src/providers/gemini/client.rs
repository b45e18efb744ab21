use std::time::Duration;

use reqwest::Client;

use super::types::*;
use crate::provider::ModelProvider;
use crate::types::Role;
use crate::{Error, GenerationRequest};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider implementation against the Generative Language API,
/// authenticated with a single static API key.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new Gemini provider with custom base URL (for testing).
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Convert internal request to Gemini format.
    fn convert_request(&self, request: &GenerationRequest) -> GeminiRequest {
        let mut contents = Vec::new();
        let mut system_instruction = if request.system_instructions.is_empty() {
            None
        } else {
            Some(GeminiContent {
                role: "user".to_string(), // system instructions are carried as user content
                parts: vec![GeminiPart {
                    text: request.system_instructions.clone(),
                }],
            })
        };

        for message in &request.messages {
            match message.role {
                Role::System => {
                    // Gemini uses the system_instruction field for system messages
                    system_instruction = Some(GeminiContent {
                        role: "user".to_string(),
                        parts: vec![GeminiPart {
                            text: message.content.clone(),
                        }],
                    });
                }
                Role::User => {
                    contents.push(GeminiContent {
                        role: "user".to_string(),
                        parts: vec![GeminiPart {
                            text: message.content.clone(),
                        }],
                    });
                }
                Role::Assistant => {
                    contents.push(GeminiContent {
                        role: "model".to_string(),
                        parts: vec![GeminiPart {
                            text: message.content.clone(),
                        }],
                    });
                }
            }
        }

        let generation_config = Some(GeminiGenerationConfig {
            temperature: request.config.temperature,
            top_p: request.config.top_p,
            top_k: request.config.top_k,
            max_output_tokens: request.config.max_output_tokens,
            response_mime_type: request.config.response_mime_type.as_str().to_string(),
        });

        GeminiRequest {
            contents,
            generation_config,
            system_instruction,
        }
    }

    /// Endpoint for a generateContent call. Model ids from the listing come
    /// prefixed with `models/`; bare ids are accepted too.
    fn generate_endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn models_endpoint(&self) -> String {
        format!("{}/models", self.base_url)
    }
}

#[async_trait::async_trait]
impl ModelProvider for GeminiProvider {
    async fn list_models(&self) -> Result<Vec<String>, Error> {
        let response = self
            .client
            .get(self.models_endpoint())
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(Error::provider(
                "Gemini",
                format!("API error: {error_text}"),
            ));
        }

        let listing: GeminiModelsResponse = response.json().await?;
        Ok(listing.models.into_iter().map(|m| m.name).collect())
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, Error> {
        let gemini_request = self.convert_request(request);

        let response = self
            .client
            .post(self.generate_endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(Error::provider(
                "Gemini",
                format!("API error: {error_text}"),
            ));
        }

        let gemini_response: GeminiResponse = response.json().await?;

        if let Some(usage) = &gemini_response.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                candidates_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "generation usage"
            );
        }

        let candidate = gemini_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::provider("Gemini", "response contained no candidates"))?;

        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();

        if text.is_empty() {
            return Err(Error::provider("Gemini", "response contained no text"));
        }

        Ok(text)
    }
}
