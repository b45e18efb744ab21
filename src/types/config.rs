use serde::{Deserialize, Serialize};

use super::message::Message;
use super::prompt::Prompt;

/// The fixed follow-up message that triggers canvas generation. The user's raw
/// text sits in the conversation as a prior turn; this constant instruction
/// drives the actual generation so the caller never restates the task.
pub const TRIGGER_MESSAGE: &str =
    "Generate a canvas for the note-taking tool based on the supplied text.";

/// MIME type requested for the model's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseMimeType {
    #[serde(rename = "text/plain")]
    TextPlain,
    #[serde(rename = "application/json")]
    ApplicationJson,
}

impl ResponseMimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMimeType::TextPlain => "text/plain",
            ResponseMimeType::ApplicationJson => "application/json",
        }
    }
}

/// Sampling configuration for one generation request.
///
/// Setters clamp to the valid ranges rather than erroring, mirroring the
/// bounded controls that produce these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: ResponseMimeType,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: ResponseMimeType::TextPlain,
        }
    }
}

impl GenerationConfig {
    /// Set the temperature, clamped to `[0.0, 2.0]`.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set top-p, clamped to `[0.0, 1.0]`.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p.clamp(0.0, 1.0);
        self
    }

    /// Set top-k, clamped to `[1, 100]`.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k.clamp(1, 100);
        self
    }

    /// Set the output token limit, clamped to `[1000, 8192]`.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens.clamp(1000, 8192);
        self
    }

    /// Set the response MIME type.
    pub fn with_response_mime_type(mut self, mime_type: ResponseMimeType) -> Self {
        self.response_mime_type = mime_type;
        self
    }
}

/// A fully assembled generation request: model, sampling configuration,
/// system instruction, and the conversation to send. Immutable once built.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub config: GenerationConfig,
    pub system_instructions: String,
    pub messages: Vec<Message>,
}

impl GenerationRequest {
    /// Build a request from an explicit prompt.
    pub fn new(
        model: impl Into<String>,
        config: GenerationConfig,
        system_instructions: impl Into<String>,
        prompt: Prompt,
    ) -> Self {
        Self {
            model: model.into(),
            config,
            system_instructions: system_instructions.into(),
            messages: prompt.into_messages(),
        }
    }

    /// Build the canvas-generation request shape: the input text as a seed
    /// user turn, followed by the fixed trigger message.
    pub fn for_canvas(
        model: impl Into<String>,
        config: GenerationConfig,
        system_instructions: impl Into<String>,
        input_text: impl Into<String>,
    ) -> Self {
        let prompt = Prompt::user(input_text).with_user(TRIGGER_MESSAGE);
        Self::new(model, config, system_instructions, prompt)
    }
}
