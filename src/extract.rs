use std::sync::LazyLock;

use regex::Regex;

// First fenced block, non-greedy, tag optional. (?s) lets `.` span lines.
static FENCED_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.+?)\s*```").unwrap());

/// Extract the payload from a markdown fenced code block.
///
/// Returns the inner content of the first triple-backtick block (optionally
/// tagged `json`), with the match boundaries absorbing surrounding whitespace.
/// Text without any fenced block is returned unchanged; an unfenced response
/// is a valid shape from the provider, not an error.
pub fn extract_json(text: &str) -> &str {
    match FENCED_BLOCK_REGEX.captures(text) {
        Some(captures) => captures.get(1).map_or(text, |m| m.as_str()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_json_tagged_block() {
        let raw = "```json\n{\"nodes\":[]}\n```";
        assert_eq!(extract_json(raw), "{\"nodes\":[]}");
    }

    #[test]
    fn test_extracts_untagged_block() {
        let raw = "```\n{\"nodes\":[],\"edges\":[]}\n```";
        assert_eq!(extract_json(raw), "{\"nodes\":[],\"edges\":[]}");
    }

    #[test]
    fn test_unfenced_text_passes_through() {
        let raw = "{\"nodes\":[]}";
        assert_eq!(extract_json(raw), raw);
    }

    #[test]
    fn test_idempotent_on_plain_text() {
        let raw = "```json\n{\"nodes\":[]}\n```";
        let once = extract_json(raw);
        assert_eq!(extract_json(once), once);
    }

    #[test]
    fn test_only_first_block_is_considered() {
        let raw = "```json\nfirst\n```\nsome prose\n```json\nsecond\n```";
        assert_eq!(extract_json(raw), "first");
    }

    #[test]
    fn test_block_embedded_in_prose() {
        let raw = "Here is your canvas:\n```json\n{\"nodes\":[]}\n```\nEnjoy!";
        assert_eq!(extract_json(raw), "{\"nodes\":[]}");
    }

    #[test]
    fn test_multiline_payload_preserved() {
        let raw = "```json\n{\n  \"nodes\": [],\n  \"edges\": []\n}\n```";
        assert_eq!(extract_json(raw), "{\n  \"nodes\": [],\n  \"edges\": []\n}");
    }

    #[test]
    fn test_other_fence_tag_keeps_tag_word_in_capture() {
        // The tag is optional and unvalidated: a non-json tag is simply part
        // of the captured content.
        let raw = "```yaml\nnodes: []\n```";
        assert_eq!(extract_json(raw), "yaml\nnodes: []");
    }

    #[test]
    fn test_empty_input_passes_through() {
        assert_eq!(extract_json(""), "");
    }
}
