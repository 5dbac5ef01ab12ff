//! Error types for the specification parse boundary.
//!
//! Validation itself never raises; every structural or semantic violation is
//! accumulated as a diagnostic string on the owning [`ConfigSpec`]. Only
//! turning source text into a document can fail.
//!
//! [`ConfigSpec`]: crate::ConfigSpec

use thiserror::Error;

/// Error raised while parsing specification source text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Source text is not well-formed YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for document parsing.
pub type Result<T> = std::result::Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = crate::document::parse("[unclosed").unwrap_err();
        assert!(err.to_string().starts_with("YAML error: "));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let source = serde_yaml::from_str::<serde_yaml::Value>(": :").unwrap_err();
        let err: DocumentError = source.into();
        assert!(matches!(err, DocumentError::Yaml(_)));
    }
}
