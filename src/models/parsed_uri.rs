/// Parsed URI result produced from a decoded QR payload
///
/// Holds the normalized URI text exactly as it appeared in the payload
/// (after prefix stripping and trimming) and an optional human-readable
/// title. The heuristic parser never supplies a title; the field exists
/// for renderers that attach one from another source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUri {
    /// The normalized URI text, verbatim from the payload
    pub uri: String,
    /// Optional display title (always `None` from the heuristic parser)
    pub title: Option<String>,
}

impl ParsedUri {
    /// Create a new parsed URI result
    pub fn new(uri: String, title: Option<String>) -> Self {
        Self { uri, title }
    }

    /// Human-readable display text: the title when present, else the URI
    pub fn display_text(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.uri)
    }
}
