//! Error types for geometric construction.

use thiserror::Error;

/// Errors raised by validating constructors.
///
/// The intersection routines themselves never fail; these only come from
/// `try_new`-style constructors that reject inputs the kernel would turn
/// into non-finite results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Plane normal has zero length.
    #[error("plane normal must be non-zero")]
    DegenerateNormal,

    /// An input coordinate or length is NaN or infinite.
    #[error("non-finite value in {0}")]
    NonFinite(String),
}

/// Result type for geometric construction.
pub type Result<T> = std::result::Result<T, GeomError>;
