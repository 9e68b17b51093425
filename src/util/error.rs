//! Error types for armorpair.

use thiserror::Error;

/// Result alias for armorpair operations.
pub type ArmorResult<T> = std::result::Result<T, ArmorError>;

/// Errors that can occur at the fallible edges of the crate.
///
/// Geometry and pair matching are total and never produce these; they come
/// from configuration validation and image I/O.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ArmorError {
    /// A configuration value is out of its accepted range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
    /// Image dimensions are zero or otherwise unusable.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    /// Loading or saving an image failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
