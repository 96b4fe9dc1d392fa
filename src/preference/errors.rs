//! # Screen Errors

use thiserror::Error;

/// Result type for screen construction
pub type ScreenResult<T> = Result<T, ScreenError>;

/// Screen construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// The layout lacks a row the screen populates unconditionally
    #[error("Layout {layout} has no preference '{key}'")]
    MissingPreference { layout: String, key: String },
}
