//! Error types for PowerPoint to Markdown conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during conversion.
///
/// Parts that are allowed to be missing are not errors; readers return
/// `Ok(None)` for them. Every variant here aborts the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read a file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// A package part is not well-formed XML.
    #[error("XML parsing error in '{path}': {message}")]
    XmlError { path: String, message: String },

    /// A slide contains pictures but its relationship part does not exist.
    #[error("Slide '{slide}' contains pictures but relationship part '{rels}' is missing")]
    MissingRelationships { slide: String, rels: String },

    /// A picture references a relationship id the manifest does not define.
    #[error("Relationship '{id}' is not defined in '{rels}'")]
    UnknownRelationship { rels: String, id: String },

    /// A picture carries no embedded image reference.
    #[error("Slide '{slide}' contains a picture without an embedded image reference")]
    MissingImageReference { slide: String },

    /// Invalid or corrupted file.
    #[error("Invalid or corrupted file: {0}")]
    CorruptedFile(String),
}

impl Error {
    /// Build an XML error for the given part.
    pub fn xml(path: impl Into<String>, message: impl ToString) -> Self {
        Self::XmlError {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
