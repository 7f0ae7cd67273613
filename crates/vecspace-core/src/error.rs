//! Error types for vecspace operations.
//!
//! Every fallible vector operation reports one of a small, closed set of
//! failures. All of them are deterministic and derived from the inputs, so
//! none is worth retrying: the caller either fixes the arguments or gives up.
//!
//! # Overview
//!
//! The [`Error`] enum covers:
//! - Operations on a vector with no backing components
//! - Binary operations between vectors of different component counts
//! - Operations only defined for 3-component vectors, and negative ratios
//! - External ratio division with ratio `1`
//! - Narrowing an N-component vector to a 3-component one
//!
//! # Usage
//!
//! ```rust
//! use vecspace_core::{Error, Result};
//!
//! fn require_same_len(a: &[f64], b: &[f64]) -> Result<()> {
//!     if a.len() != b.len() {
//!         return Err(Error::dimension_mismatch(a.len(), b.len()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_same_len(&[1.0, 2.0], &[1.0]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during vector arithmetic.
///
/// # Categories
///
/// - **State errors**: [`Uninitialized`](Error::Uninitialized)
/// - **Shape errors**: [`DimensionMismatch`](Error::DimensionMismatch),
///   [`InvalidCast`](Error::InvalidCast)
/// - **Domain errors**: [`InvalidOperation`](Error::InvalidOperation),
///   [`ZeroExternalDivision`](Error::ZeroExternalDivision)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The vector has no backing components.
    ///
    /// Checked before any other validation by every operation, for the
    /// receiver first and then for the operand.
    #[error("vector is not initialized")]
    Uninitialized,

    /// Two vectors with different component counts met in an operation
    /// that needs equal counts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecspace_core::Error;
    ///
    /// let err = Error::dimension_mismatch(3, 4);
    /// assert!(err.to_string().contains("expected 3"));
    /// ```
    #[error("vector spaces do not match: expected {expected} components, got {got}")]
    DimensionMismatch {
        /// Component count of the receiver
        expected: usize,
        /// Component count of the operand
        got: usize,
    },

    /// The operation is not defined for the given input.
    ///
    /// Raised for 3D-only operations given a non-3D operand and for
    /// negative division ratios.
    #[error("invalid vector operation: {reason}")]
    InvalidOperation {
        /// What made the operation invalid
        reason: String,
    },

    /// External division with ratio `1` divides by zero.
    #[error("cannot perform 1:1 external vector division")]
    ZeroExternalDivision,

    /// Narrowing conversion to a fixed-size vector with the wrong count.
    #[error("invalid vector conversion: expected {expected} components, got {got}")]
    InvalidCast {
        /// Component count of the target type
        expected: usize,
        /// Component count of the source vector
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Creates an [`Error::InvalidOperation`] error.
    #[inline]
    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidOperation`] for a 3D-only operation
    /// given an operand with `got` components.
    #[inline]
    pub fn requires_3d(op: &str, got: usize) -> Self {
        Self::invalid_operation(format!(
            "{op} is only defined for 3-dimensional vectors, got {got} components"
        ))
    }

    /// Creates an [`Error::InvalidCast`] error.
    #[inline]
    pub fn invalid_cast(expected: usize, got: usize) -> Self {
        Self::InvalidCast { expected, got }
    }

    /// Returns `true` if this is an [`Error::Uninitialized`] error.
    #[inline]
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    /// Returns `true` if this is a shape-related error.
    #[inline]
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. } | Self::InvalidCast { .. })
    }

    /// Returns `true` if the operation itself was rejected for its arguments.
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOperation { .. } | Self::ZeroExternalDivision
        )
    }
}
