pub mod parsed_uri;

pub use parsed_uri::ParsedUri;
