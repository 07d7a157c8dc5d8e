//! Payload normalization before URI classification
//!
//! Some encoders write the non-standard `URL:` marker in front of the link,
//! and scanned payloads frequently pick up stray whitespace or control
//! characters at either end. Both are removed here before the candidate is
//! handed to the validator.

/// Strip the odd `URL:` prefix (exact, case-sensitive) and trim both ends
/// of every character at or below the space code point (0x20).
///
/// Never allocates; the result is a subslice of the input. Idempotent on
/// already-normalized input.
pub fn normalize(raw: &str) -> &str {
    let stripped = raw.strip_prefix("URL:").unwrap_or(raw);
    // str::trim would stop at Unicode whitespace; payloads also carry
    // arbitrary control bytes, so trim everything <= ' '
    stripped.trim_matches(|c: char| c <= ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_url_prefix() {
        assert_eq!(normalize("URL:http://x.co"), "http://x.co");
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(normalize("url:http://x.co"), "url:http://x.co");
    }

    #[test]
    fn test_prefix_only_at_start() {
        assert_eq!(normalize("see URL:http://x.co"), "see URL:http://x.co");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  example.org  "), "example.org");
    }

    #[test]
    fn test_trims_control_characters() {
        assert_eq!(normalize("\x01\texample.org\n\x00"), "example.org");
    }

    #[test]
    fn test_prefix_then_trim() {
        assert_eq!(normalize("URL: http://x.co "), "http://x.co");
    }

    #[test]
    fn test_idempotent_on_normalized_input() {
        let once = normalize("URL:  http://example.com/a b  ");
        assert_eq!(normalize(once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("URL:"), "");
        assert_eq!(normalize("   "), "");
    }
}
