//! # vecspace-core
//!
//! Core types for vector arithmetic.
//!
//! This crate provides the foundational types used throughout vecspace:
//!
//! - [`Error`], [`Result`] - The error taxonomy shared by every operation
//! - [`AngleUnit`] - Output unit for angles between vectors
//! - [`DivisionMode`] - Internal or external ratio division
//! - [`round_half_even`], [`format_row`], [`format_basis_sum`] - Component
//!   rounding and text rendering
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The vector types live in
//! `vecspace-math`:
//!
//! ```text
//! vecspace-core (this crate)
//!    ^
//!    |
//!    +-- vecspace-math (Vector trait, Vector3D, VectorND)
//!    +-- vecspace-tests, vecspace-bench
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod mode;

// Re-exports for convenience
pub use error::*;
pub use format::*;
pub use mode::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use vecspace_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::DEFAULT_PRECISION;
    pub use crate::mode::{AngleUnit, DivisionMode};
}
