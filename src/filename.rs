/// Extension for generated canvas files.
pub const CANVAS_EXTENSION: &str = ".canvas";

/// MIME type declared for the downloadable artifact.
pub const CANVAS_MIME_TYPE: &str = "application/json";

/// Derive a safe file base name from input text.
///
/// Takes at most the first 30 characters and replaces everything outside
/// `[A-Za-z0-9_-]` with an underscore. Truncation counts Unicode scalar
/// values, so the result is valid UTF-8 by construction (and after
/// substitution, plain ASCII).
pub fn sanitize_filename(input_text: &str) -> String {
    input_text
        .chars()
        .take(30)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Full download name for a canvas derived from `input_text`.
///
/// Empty input yields a file named exactly `.canvas`.
pub fn canvas_file_name(input_text: &str) -> String {
    format!("{}{}", sanitize_filename(input_text), CANVAS_EXTENSION)
}
