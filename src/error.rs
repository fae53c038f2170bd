//! Error types for draft-vdom.
//!
//! Only loading can fail. The layout pass itself has no error of its own:
//! it returns whatever error type the caller's renderer uses, untouched.

use thiserror::Error;

/// Errors raised while loading content state or layout options.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The content state JSON did not match the raw Draft.js shape
    #[error("invalid content state: {0}")]
    InvalidContent(#[source] serde_json::Error),

    /// The layout options JSON was malformed
    #[error("invalid layout options: {0}")]
    InvalidOptions(#[source] serde_json::Error),
}

/// Result type alias for loading operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

impl LayoutError {
    /// Whether the failure came from the content state rather than options.
    pub fn is_content(&self) -> bool {
        matches!(self, Self::InvalidContent(_))
    }

    /// Line of the offending JSON input.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidContent(e) | Self::InvalidOptions(e) => e.line(),
        }
    }
}
