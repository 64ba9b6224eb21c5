//! Markdown fence stripping for raw model output.
//!
//! Models asked for JSON frequently wrap it in a ```json fence anyway.
//! [`strip_code_fence`] removes one such wrapper (with or without the
//! language tag) and trims whitespace; text without a fence passes
//! through unchanged. Applying it twice yields the same result as once.

/// Strips a single leading/trailing markdown code fence, if present.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the optional language tag: everything up to the first newline.
    let body = match rest.split_once('\n') {
        Some((lang, body)) if lang.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body,
        _ => rest,
    };

    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);

    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_code_fence(r#"{"a": 1}"#), r#"{"a": 1}"#);
    }

    #[test]
    fn test_json_fence_stripped() {
        let input = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(input), r#"{"a": 1}"#);
    }

    #[test]
    fn test_bare_fence_stripped() {
        let input = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(input), r#"{"a": 1}"#);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(strip_code_fence("  \n{\"a\": 1}\n  "), r#"{"a": 1}"#);
    }

    #[test]
    fn test_idempotent_on_fenced_input() {
        let input = "```json\n{\"a\": 1}\n```";
        let once = strip_code_fence(input);
        assert_eq!(strip_code_fence(once), once);
    }

    #[test]
    fn test_idempotent_on_plain_input() {
        let once = strip_code_fence(r#"{"a": 1}"#);
        assert_eq!(strip_code_fence(once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip_code_fence(""), "");
    }

    #[test]
    fn test_fence_without_trailing_newline() {
        let input = "```json\n{\"a\": 1}```";
        assert_eq!(strip_code_fence(input), r#"{"a": 1}"#);
    }
}
