pub mod config;
pub mod message;
pub mod prompt;

pub use config::{GenerationConfig, GenerationRequest, ResponseMimeType};
pub use message::{Message, Role};
pub use prompt::Prompt;
