//! Error types for the gradient service

use thiserror::Error;

/// Result type alias for gradient operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building palettes or serving gradients
#[derive(Error, Debug)]
pub enum Error {
    /// Palette construction rejected the input
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    /// A query parameter failed strict validation
    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    /// The HTTP shell failed to bind or serve
    #[error("Server error: {0}")]
    ServerError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
