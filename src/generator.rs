use crate::filename::{canvas_file_name, CANVAS_MIME_TYPE};
use crate::provider::ModelProvider;
use crate::settings::Settings;
use crate::types::{GenerationConfig, GenerationRequest};
use crate::{extract_json, Error};

/// Model used when enumeration fails.
pub const FALLBACK_MODEL: &str = "models/learnlm-1.5-pro-experimental";

/// Model preselected when the listing offers it.
pub const PREFERRED_MODEL: &str = "models/gemini-2.0-pro-exp";

/// The output of one generation cycle: the cleaned canvas JSON and the
/// download name derived from the input text. Nothing here persists beyond
/// the cycle that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasArtifact {
    pub file_name: String,
    pub content: String,
}

impl CanvasArtifact {
    /// MIME type to declare when offering the artifact for download.
    pub fn mime_type(&self) -> &'static str {
        CANVAS_MIME_TYPE
    }
}

/// Runs one generation cycle at a time: build the request, call the provider,
/// clean the response, derive the file name.
pub struct CanvasGenerator {
    provider: Box<dyn ModelProvider>,
    settings: Settings,
}

impl CanvasGenerator {
    pub fn new(provider: Box<dyn ModelProvider>, settings: Settings) -> Self {
        Self { provider, settings }
    }

    /// Models offered for selection. Enumeration failure is reported and
    /// replaced with a one-entry fallback list; it never blocks generation.
    pub async fn available_models(&self) -> Vec<String> {
        match self.provider.list_models().await {
            Ok(models) if !models.is_empty() => models,
            Ok(_) => {
                tracing::warn!("model listing was empty, falling back to {FALLBACK_MODEL}");
                vec![FALLBACK_MODEL.to_string()]
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to list models, falling back to {FALLBACK_MODEL}");
                vec![FALLBACK_MODEL.to_string()]
            }
        }
    }

    /// Pick the model to preselect from a listing: the preferred model when
    /// present, otherwise the first entry.
    pub fn default_model(models: &[String]) -> Option<&str> {
        models
            .iter()
            .find(|m| m.as_str() == PREFERRED_MODEL)
            .or_else(|| models.first())
            .map(String::as_str)
    }

    /// Run one generation cycle.
    ///
    /// Any provider failure surfaces as a single error and aborts only this
    /// cycle; the generator carries no state between calls, so the caller can
    /// simply retry.
    pub async fn generate(
        &self,
        model: &str,
        config: GenerationConfig,
        input_text: &str,
    ) -> Result<CanvasArtifact, Error> {
        if input_text.is_empty() {
            return Err(Error::config("input text is empty"));
        }

        let request = GenerationRequest::for_canvas(
            model,
            config,
            self.settings.system_instructions.clone(),
            input_text,
        );

        let raw = self.provider.generate(&request).await?;
        let content = extract_json(&raw).to_string();

        Ok(CanvasArtifact {
            file_name: canvas_file_name(input_text),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FakeProvider {
        models: Result<Vec<String>, ()>,
        response: Result<String, ()>,
        generate_calls: Arc<AtomicUsize>,
    }

    impl FakeProvider {
        fn returning(response: &str) -> Self {
            Self {
                models: Ok(vec![PREFERRED_MODEL.to_string()]),
                response: Ok(response.to_string()),
                generate_calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                models: Err(()),
                response: Err(()),
                generate_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait::async_trait]
    impl ModelProvider for FakeProvider {
        async fn list_models(&self) -> Result<Vec<String>, Error> {
            self.models
                .clone()
                .map_err(|_| Error::provider("Fake", "listing unavailable"))
        }

        async fn generate(&self, _request: &GenerationRequest) -> Result<String, Error> {
            self.generate_calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .clone()
                .map_err(|_| Error::provider("Fake", "generation unavailable"))
        }
    }

    fn settings() -> Settings {
        Settings {
            api_key: "test-key".to_string(),
            system_instructions: "You build canvases.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_cycle_extracts_and_names_artifact() {
        let generator = CanvasGenerator::new(
            Box::new(FakeProvider::returning("```json\n{\"nodes\":[]}\n```")),
            settings(),
        );

        let artifact = generator
            .generate(PREFERRED_MODEL, GenerationConfig::default(), "Hello World! 123")
            .await
            .unwrap();

        assert_eq!(artifact.content, "{\"nodes\":[]}");
        assert_eq!(artifact.file_name, "Hello_World__123.canvas");
        assert_eq!(artifact.mime_type(), "application/json");
    }

    #[tokio::test]
    async fn test_unfenced_response_used_verbatim() {
        let generator = CanvasGenerator::new(
            Box::new(FakeProvider::returning("{\"nodes\":[]}")),
            settings(),
        );

        let artifact = generator
            .generate(PREFERRED_MODEL, GenerationConfig::default(), "notes")
            .await
            .unwrap();

        assert_eq!(artifact.content, "{\"nodes\":[]}");
    }

    #[tokio::test]
    async fn test_empty_input_refused_before_provider_call() {
        let provider = FakeProvider::returning("{}");
        let calls = provider.generate_calls.clone();
        let generator = CanvasGenerator::new(Box::new(provider), settings());

        let result = generator
            .generate(PREFERRED_MODEL, GenerationConfig::default(), "")
            .await;

        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_one_error_and_cycle_is_disposable() {
        let generator = CanvasGenerator::new(Box::new(FakeProvider::failing()), settings());
        let result = generator
            .generate(PREFERRED_MODEL, GenerationConfig::default(), "notes")
            .await;
        assert!(matches!(result, Err(Error::Provider { .. })));

        // A fresh trigger on a working provider starts a clean cycle.
        let generator = CanvasGenerator::new(
            Box::new(FakeProvider::returning("{\"nodes\":[]}")),
            settings(),
        );
        assert!(generator
            .generate(PREFERRED_MODEL, GenerationConfig::default(), "notes")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_listing_failure_falls_back_to_hardcoded_model() {
        let generator = CanvasGenerator::new(Box::new(FakeProvider::failing()), settings());
        let models = generator.available_models().await;
        assert_eq!(models, vec![FALLBACK_MODEL.to_string()]);
    }

    #[test]
    fn test_default_model_prefers_known_model() {
        let models = vec![
            "models/gemini-1.5-flash".to_string(),
            PREFERRED_MODEL.to_string(),
        ];
        assert_eq!(CanvasGenerator::default_model(&models), Some(PREFERRED_MODEL));

        let models = vec!["models/gemini-1.5-flash".to_string()];
        assert_eq!(
            CanvasGenerator::default_model(&models),
            Some("models/gemini-1.5-flash")
        );

        assert_eq!(CanvasGenerator::default_model(&[]), None);
    }
}
