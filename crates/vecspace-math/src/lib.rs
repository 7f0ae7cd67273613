//! # vecspace-math
//!
//! Vector arithmetic over fixed 3-component and arbitrary N-component real
//! vectors.
//!
//! - [`Vector`] - The shared operation set: magnitude, effective dimension,
//!   unit vector, addition, subtraction, dot product, scaling, angles,
//!   projections, negation, ratio division
//! - [`Vector3D`] - Adds cross product, endpoint distance, `i`/`j`/`k` printing
//! - [`VectorND`] - Any length; narrows to [`Vector3D`] when it has three components
//!
//! # Design
//!
//! Both kinds are immutable values. Every operation returns a new vector or
//! a scalar inside [`Result`]; nothing mutates an existing instance, so
//! vectors can be shared across threads freely.
//!
//! A vector may be *uninitialized* (the [`Default`] value). Operations on it
//! fail with [`Error::Uninitialized`] instead of treating it as empty.
//!
//! # Usage
//!
//! ```rust
//! use vecspace_math::{AngleUnit, DivisionMode, Vector, Vector3D, VectorND};
//!
//! let a = Vector3D::new(1.0, 0.0, 0.0);
//! let b = Vector3D::new(0.0, 1.0, 0.0);
//!
//! let angle = a.angle_with(&b, AngleUnit::Degree).unwrap();
//! assert!((angle - 90.0).abs() < 1e-9);
//!
//! let mid = VectorND::from([2.0, 4.0, 6.0, 8.0])
//!     .divide_into(1.0, DivisionMode::Internal)
//!     .unwrap();
//! assert_eq!(mid.print(1).unwrap(), "[ 1.0, 2.0, 3.0, 4.0 ]");
//! ```
//!
//! # Dependencies
//!
//! - [`vecspace_core`] - Errors, enums, rounding
//! - [`glam`] - `DVec3` interop for [`Vector3D`]
//! - [`tracing`] - Operation-level trace and edge-case debug events

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vector;
mod vector3d;
mod vector_nd;

pub use vector::Vector;
pub use vector3d::Vector3D;
pub use vector_nd::VectorND;

pub use vecspace_core::{AngleUnit, DEFAULT_PRECISION, DivisionMode, Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use vecspace_math::prelude::*;
///
/// let v = Vector3D::new(3.0, 4.0, 0.0);
/// assert_eq!(v.magnitude().unwrap(), 5.0);
/// ```
pub mod prelude {
    pub use crate::{Vector, Vector3D, VectorND};
    pub use vecspace_core::prelude::*;
}
