//! The operation set shared by every vector kind.
//!
//! [`Vector`] is implemented by [`Vector3D`](crate::Vector3D) and
//! [`VectorND`](crate::VectorND). An implementor supplies two things: access
//! to its backing components and a way to build a new value of its own kind
//! from a component list. Everything else is provided here, so both kinds
//! validate and compute identically.
//!
//! # Validation order
//!
//! Every operation checks, in order:
//!
//! 1. the receiver has backing components ([`Error::Uninitialized`])
//! 2. the operand, if any, has backing components ([`Error::Uninitialized`])
//! 3. component counts agree ([`Error::DimensionMismatch`])
//! 4. argument checks specific to the operation
//!
//! # Numeric edge cases
//!
//! Division by a zero magnitude and arccosine arguments outside `[-1, 1]`
//! are not rejected. They yield IEEE results (`inf`, `NaN`) and are logged
//! at `debug` level.
//!
//! # Example
//!
//! ```rust
//! use vecspace_math::{Vector, Vector3D, VectorND};
//!
//! fn total_length<V: Vector>(items: &[V]) -> vecspace_core::Result<f64> {
//!     items.iter().map(|v| v.magnitude()).sum()
//! }
//!
//! let a = Vector3D::new(3.0, 4.0, 0.0);
//! let b = VectorND::from([0.0, 5.0, 0.0, 12.0]);
//! assert_eq!(total_length(&[a]).unwrap(), 5.0);
//! assert_eq!(total_length(&[b]).unwrap(), 13.0);
//! ```

use tracing::{debug, trace};
use vecspace_core::{AngleUnit, DivisionMode, Error, Result, format_row};

/// Common arithmetic over vectors of any dimensionality.
///
/// Values are immutable: every transformation returns a new vector.
pub trait Vector: Sized {
    /// Backing components, or `None` when the vector is uninitialized.
    fn components(&self) -> Option<&[f64]>;

    /// Builds a vector of this kind from owned components.
    ///
    /// Fails with [`Error::InvalidCast`] if the kind has a fixed component
    /// count that `components` does not match.
    fn from_components(components: Vec<f64>) -> Result<Self>;

    /// Returns `true` if the vector has backing components.
    #[inline]
    fn is_initialized(&self) -> bool {
        self.components().is_some()
    }

    /// Returns the live component slice.
    #[inline]
    fn to_array(&self) -> Result<&[f64]> {
        self.components().ok_or(Error::Uninitialized)
    }

    /// Structural number of components, zeros included.
    #[inline]
    fn component_count(&self) -> Result<usize> {
        Ok(self.to_array()?.len())
    }

    /// Euclidean (L2) norm.
    fn magnitude(&self) -> Result<f64> {
        let c = self.to_array()?;
        Ok(c.iter().map(|x| x * x).sum::<f64>().sqrt())
    }

    /// Effective dimension: the number of non-zero components.
    ///
    /// This is not the structural length; see [`component_count`](Self::component_count).
    ///
    /// ```rust
    /// use vecspace_math::{Vector, VectorND};
    ///
    /// let v = VectorND::from([0.0, 5.0, 0.0, 3.0]);
    /// assert_eq!(v.dimension().unwrap(), 2);
    /// assert_eq!(v.component_count().unwrap(), 4);
    /// ```
    fn dimension(&self) -> Result<usize> {
        Ok(self.to_array()?.iter().filter(|&&c| c != 0.0).count())
    }

    /// Vector of magnitude 1 along this one.
    ///
    /// A zero vector produces `NaN` components.
    fn unit_vector(&self) -> Result<Self> {
        let c = self.to_array()?;
        let magnitude = self.magnitude()?;
        if magnitude == 0.0 {
            debug!(len = c.len(), "unit vector of a zero-magnitude vector");
        }
        Self::from_components(c.iter().map(|x| x / magnitude).collect())
    }

    /// Row-matrix rendering `[ c0, c1, ..., cn ]`, each component rounded
    /// half-to-even to `precision` fractional digits. Precisions above
    /// [`MAX_PRECISION`](vecspace_core::MAX_PRECISION) are clamped.
    fn print(&self, precision: usize) -> Result<String> {
        Ok(format_row(self.to_array()?, precision))
    }

    /// Componentwise `self + other`, as the receiver's kind.
    fn add_to<V: Vector>(&self, other: &V) -> Result<Self> {
        let (a, b) = paired(self, other)?;
        trace!(len = a.len(), "add_to");
        Self::from_components(a.iter().zip(b).map(|(x, y)| x + y).collect())
    }

    /// Componentwise `other - self`, as the receiver's kind.
    ///
    /// The receiver is subtracted *from* the operand:
    ///
    /// ```rust
    /// use vecspace_math::{Vector, Vector3D};
    ///
    /// let v = Vector3D::new(1.0, 2.0, 3.0);
    /// let w = Vector3D::new(4.0, 5.0, 6.0);
    /// assert_eq!(v.subtract_from(&w).unwrap(), Vector3D::new(3.0, 3.0, 3.0));
    /// ```
    fn subtract_from<V: Vector>(&self, other: &V) -> Result<Self> {
        let (a, b) = paired(self, other)?;
        trace!(len = a.len(), "subtract_from");
        Self::from_components(a.iter().zip(b).map(|(x, y)| y - x).collect())
    }

    /// Scalar (dot) product.
    fn dot_product<V: Vector>(&self, other: &V) -> Result<f64> {
        let (a, b) = paired(self, other)?;
        Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
    }

    /// Scales every component by `scalar`. Any scalar is accepted.
    fn multiply_by_scalar(&self, scalar: f64) -> Result<Self> {
        let c = self.to_array()?;
        Self::from_components(c.iter().map(|x| x * scalar).collect())
    }

    /// Angle between the vectors, `acos(a·b / (|a||b|))`, in `unit`.
    ///
    /// The cosine is not clamped; rounding that pushes it past `±1`
    /// yields `NaN`.
    fn angle_with<V: Vector>(&self, other: &V, unit: AngleUnit) -> Result<f64> {
        paired(self, other)?;
        let cos = self.dot_product(other)? / (self.magnitude()? * other.magnitude()?);
        if !(-1.0..=1.0).contains(&cos) {
            debug!(cos, "angle cosine outside [-1, 1]");
        }
        Ok(unit.convert(cos.acos()))
    }

    /// Signed length of this vector resolved along `other`: `a·b / |b|`.
    fn scalar_projection_on<V: Vector>(&self, other: &V) -> Result<f64> {
        paired(self, other)?;
        Ok(self.dot_product(other)? / other.magnitude()?)
    }

    /// Component of this vector along `other`, as `other`'s kind.
    ///
    /// Computed as `other * (scalar_projection_on(other) / |other|)`.
    fn vector_projection_on<V: Vector>(&self, other: &V) -> Result<V> {
        paired(self, other)?;
        let factor = self.scalar_projection_on(other)? / other.magnitude()?;
        other.multiply_by_scalar(factor)
    }

    /// Componentwise sign flip.
    fn negate(&self) -> Result<Self> {
        let c = self.to_array()?;
        Self::from_components(c.iter().map(|x| -x).collect())
    }

    /// Divides the segment from the origin to this point in `ratio`.
    ///
    /// - [`DivisionMode::Internal`]: `(zero + self * ratio) * (1 / (1 + ratio))`
    /// - [`DivisionMode::External`]: `(zero - self * ratio) * (1 / (1 - ratio))`,
    ///   the point `self * ratio / (ratio - 1)` beyond the segment
    ///
    /// Fails with [`Error::InvalidOperation`] for a negative ratio and with
    /// [`Error::ZeroExternalDivision`] for external division with ratio `1`.
    fn divide_into(&self, ratio: f64, mode: DivisionMode) -> Result<Self> {
        let c = self.to_array()?;
        if ratio < 0.0 {
            return Err(Error::invalid_operation(format!(
                "division ratio cannot be negative, got {ratio}"
            )));
        }
        trace!(len = c.len(), ratio, %mode, "divide_into");

        let zero = Self::from_components(vec![0.0; c.len()])?;
        match mode {
            DivisionMode::Internal => zero
                .add_to(&self.multiply_by_scalar(ratio)?)?
                .multiply_by_scalar(1.0 / (1.0 + ratio)),
            DivisionMode::External => {
                if ratio == 1.0 {
                    return Err(Error::ZeroExternalDivision);
                }
                // subtract_from yields operand - receiver
                self.multiply_by_scalar(ratio)?
                    .subtract_from(&zero)?
                    .multiply_by_scalar(1.0 / (1.0 - ratio))
            }
        }
    }
}

/// Borrows both component slices after the shared binary-operation checks.
pub(crate) fn paired<'a, A: Vector, B: Vector>(
    a: &'a A,
    b: &'a B,
) -> Result<(&'a [f64], &'a [f64])> {
    let lhs = a.to_array()?;
    let rhs = b.to_array()?;
    if lhs.len() != rhs.len() {
        return Err(Error::dimension_mismatch(lhs.len(), rhs.len()));
    }
    Ok((lhs, rhs))
}
