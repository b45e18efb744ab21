//! Canvas generation for Obsidian via a generative-language API.
//!
//! This library turns free-form text into the content of an Obsidian `.canvas`
//! file: it sends the text to the Gemini API with a fixed system instruction,
//! strips any markdown code fencing from the response, and derives a safe file
//! name for the downloadable artifact.

pub mod error;
pub mod types;
pub mod extract;
pub mod filename;
pub mod provider;
pub mod providers;
pub mod settings;
pub mod generator;

// Re-export core types for easy usage
pub use error::Error;
pub use types::*;
pub use extract::extract_json;
pub use filename::{canvas_file_name, sanitize_filename};
pub use provider::ModelProvider;
pub use providers::gemini::GeminiProvider;
pub use settings::Settings;
pub use generator::{CanvasArtifact, CanvasGenerator};
