//! Defines [`ConstructiveError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConstructiveError {
    /// A parameter restricted to scalar use was given an array.
    #[error("{0} only accepts scalar values")]
    ScalarOnly(&'static str),

    /// Array arguments of one call do not share a length.
    #[error("Cannot broadcast {parameter} of length {found} against length {expected}")]
    ShapeMismatch {
        parameter: &'static str,
        expected: usize,
        found: usize,
    },

    /// A symbolic style name did not match any known name.
    #[error("Invalid value for {parameter}: {value:?}")]
    InvalidEnumValue {
        parameter: &'static str,
        value: String,
    },

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    /// A resolved parameter the kernel cannot interpret, such as an unknown style code.
    #[error("Invalid parameter for operation: {0}")]
    InvalidParameter(String),

    /// Numerical or structural failure inside a kernel algorithm.
    #[error("Geometry kernel error: {0}")]
    Kernel(String),

    /// [geos::Error]
    #[cfg(feature = "geos")]
    #[error(transparent)]
    Geos(#[from] geos::Error),
}

impl ConstructiveError {
    /// Whether this error was raised by the geometry kernel rather than by parameter validation.
    pub fn is_kernel_error(&self) -> bool {
        match self {
            ConstructiveError::ScalarOnly(_)
            | ConstructiveError::ShapeMismatch { .. }
            | ConstructiveError::InvalidEnumValue { .. } => false,
            ConstructiveError::IncorrectGeometryType(_)
            | ConstructiveError::InvalidParameter(_)
            | ConstructiveError::Kernel(_) => true,
            #[cfg(feature = "geos")]
            ConstructiveError::Geos(_) => true,
        }
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, ConstructiveError>;
