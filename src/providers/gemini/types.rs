use serde::{Deserialize, Serialize};

/// Gemini generateContent request format.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
}

/// Gemini content (message) format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    pub role: String, // "user", "model"
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A text part of a Gemini content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

/// Gemini generation configuration.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiGenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

/// Gemini API response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<GeminiUsageMetadata>,
}

/// Gemini response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Gemini usage metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiUsageMetadata {
    #[serde(rename = "promptTokenCount")]
    pub prompt_token_count: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    pub candidates_token_count: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    pub total_token_count: Option<u32>,
}

/// Gemini model listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiModelsResponse {
    #[serde(default)]
    pub models: Vec<GeminiModelInfo>,
}

/// One entry from the model listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiModelInfo {
    pub name: String,
}
