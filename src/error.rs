//! Error types for document conversion

use thiserror::Error;

/// The document parsed, but its shape is not an MEI header we can work with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("The provided document doesn't look like an MEI document (root element <{root}>)")]
    NotMei { root: String },

    #[error("<meiHead> element not found, is the document valid MEI?")]
    HeaderMissing,
}

/// Errors that can occur while converting one document
#[derive(Debug, Error)]
pub enum ProvError {
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl ProvError {
    /// True for the domain-structural failures this crate detects itself.
    pub fn is_structure(&self) -> bool {
        matches!(self, ProvError::Structure(_))
    }

    /// True when the input could not be parsed into a tree at all.
    pub fn is_parse(&self) -> bool {
        matches!(self, ProvError::Xml(_) | ProvError::Malformed(_))
    }
}

/// Result type for conversion operations
pub type ProvResult<T> = Result<T, ProvError>;
