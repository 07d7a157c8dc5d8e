//! URI result parsing pipeline
//!
//! This module turns a raw decoded payload into a URI result:
//! - Normalization: strip the non-standard `URL:` marker, trim noise
//! - Heuristic validation: a single-pass "looks like a link" check

/// Payload normalization (prefix stripping, trimming)
pub mod normalizer;
/// Heuristic single-pass URI validation
pub mod validator;

use crate::models::ParsedUri;
use normalizer::normalize;
use validator::is_basically_valid_uri;

/// Parser that tries to interpret a decoded payload as a URI
///
/// One of the result parsers a scanner dispatches decoded payloads to;
/// when it declines, the caller tries the next parser.
pub struct UriResultParser;

impl UriResultParser {
    /// Parse a decoded payload as a URI result
    ///
    /// Returns `None` when the payload does not look like a URI. On
    /// success the result carries the normalized candidate verbatim and
    /// no title.
    pub fn parse(raw_text: &str) -> Option<ParsedUri> {
        let candidate = normalize(raw_text);
        if !is_basically_valid_uri(Some(candidate)) {
            return None;
        }
        Some(ParsedUri::new(candidate.to_owned(), None))
    }
}
