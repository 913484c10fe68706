//! Error types for the landing page.

use thiserror::Error;

/// Errors raised while parsing or validating the bundled content document.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document is not valid JSON or does not match the expected shape
    #[error("content document is malformed: {0}")]
    Json(#[from] serde_json::Error),

    /// A required text field is empty (or whitespace only)
    #[error("{collection}[{index}].{field} must not be empty")]
    EmptyField {
        collection: &'static str,
        index: usize,
        field: &'static str,
    },

    /// A plan price is not a non-negative decimal number
    #[error("plan '{plan}' has invalid price '{price}'")]
    InvalidPrice { plan: String, price: String },
}

/// Errors raised by deferred section loads.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The loader finished without producing content
    #[error("section '{section}' is unavailable")]
    Unavailable { section: &'static str },

    /// A browser API rejected while waiting for the section
    #[error("section '{section}' failed in the browser: {message}")]
    Js {
        section: &'static str,
        message: String,
    },
}

impl LoadError {
    /// Name of the section that failed to load.
    pub fn section(&self) -> &'static str {
        match self {
            LoadError::Unavailable { section } | LoadError::Js { section, .. } => section,
        }
    }
}
