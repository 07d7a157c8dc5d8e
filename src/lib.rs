//! qr_uri_result - URI result parsing for decoded QR code payloads
//!
//! A pure Rust result-interpretation layer with zero dependencies: given
//! the decoded text content of a scanned code, decide whether it is
//! basically a URI and, if so, produce a normalized URI result. The checks
//! are deliberately crude; the payload comes from a barcode, so the only
//! job is to know when a string is obviously not a URI.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Result data structures (ParsedUri)
pub mod models;
/// Normalization and heuristic validation pipeline
pub mod parser;

pub use models::ParsedUri;
pub use parser::UriResultParser;

/// Try to parse a decoded payload as a URI
///
/// # Arguments
/// * `raw_text` - Decoded text content from a scanned code
///
/// # Returns
/// The URI result, or `None` when the payload does not look like a URI
/// (the caller is expected to try other result parsers).
///
/// # Example
/// ```
/// let result = qr_uri_result::parse("URL:http://example.com").unwrap();
/// assert_eq!(result.uri, "http://example.com");
/// assert!(qr_uri_result::parse("not a uri").is_none());
/// ```
pub fn parse(raw_text: &str) -> Option<ParsedUri> {
    UriResultParser::parse(raw_text)
}
