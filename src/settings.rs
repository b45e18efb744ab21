use std::path::Path;

use crate::Error;

/// Default location of the system instruction file.
pub const DEFAULT_INSTRUCTIONS_PATH: &str = "system_instruction.txt";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Process-wide configuration: the API key and the system instruction string,
/// both resolved once at startup. Explicit and immutable rather than ambient,
/// so the generation pipeline stays testable with a fake provider.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub system_instructions: String,
}

impl Settings {
    /// Build settings from an explicit key and instruction file path.
    pub fn load(api_key: impl Into<String>, instructions_path: impl AsRef<Path>) -> Self {
        Self {
            api_key: api_key.into(),
            system_instructions: load_system_instructions(instructions_path),
        }
    }

    /// Build settings from the environment: `GEMINI_API_KEY` plus the default
    /// instruction file. A missing key is an error; there is no degraded mode
    /// without one.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| Error::config(format!("{API_KEY_VAR} environment variable is required")))?;
        Ok(Self::load(api_key, DEFAULT_INSTRUCTIONS_PATH))
    }
}

/// Read the system instruction file. An unreadable file is reported and
/// replaced with an empty string; it never halts the process.
pub fn load_system_instructions(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(instructions) => instructions,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read system instruction file, continuing with empty instructions"
            );
            String::new()
        }
    }
}
