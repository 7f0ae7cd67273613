//! Fixed 3-component vector.
//!
//! [`Vector3D`] carries the shared [`Vector`] operations plus those that only
//! make sense in three dimensions: the cross product, Euclidean distance
//! between endpoints, and cartesian `i`/`j`/`k` printing.
//!
//! # Usage
//!
//! ```rust
//! use vecspace_math::{Vector, Vector3D};
//!
//! let n = Vector3D::I.cross_product(&Vector3D::J).unwrap();
//! assert_eq!(n, Vector3D::K);
//! assert_eq!(Vector3D::new(1.0, -2.0, 0.0).print_formatted(2).unwrap(), "i - 2.00j");
//! ```

use std::fmt;

use tracing::trace;
use vecspace_core::{DEFAULT_PRECISION, Error, Result, format_basis_sum};

use crate::VectorND;
use crate::vector::Vector;

/// Cartesian basis names, in component order.
const BASIS: [&str; 3] = ["i", "j", "k"];

/// A vector with exactly three components `i`, `j`, `k`.
///
/// [`Default`] yields an uninitialized vector; every operation on it fails
/// with [`Error::Uninitialized`].
///
/// # Example
///
/// ```rust
/// use vecspace_math::{Vector, Vector3D};
///
/// let v = Vector3D::new(1.0, 2.0, 2.0);
/// assert_eq!(v.magnitude().unwrap(), 3.0);
/// assert_eq!(v.j().unwrap(), 2.0);
/// assert!(Vector3D::default().magnitude().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    components: Option<[f64; 3]>,
}

impl Vector3D {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector along `i` (1, 0, 0).
    pub const I: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along `j` (0, 1, 0).
    pub const J: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along `k` (0, 0, 1).
    pub const K: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(i: f64, j: f64, k: f64) -> Self {
        Self {
            components: Some([i, j, k]),
        }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self { components: Some(a) }
    }

    /// Components as an owned array.
    #[inline]
    pub fn to_array3(&self) -> Result<[f64; 3]> {
        self.components.ok_or(Error::Uninitialized)
    }

    /// The `i` component.
    #[inline]
    pub fn i(&self) -> Result<f64> {
        Ok(self.to_array3()?[0])
    }

    /// The `j` component.
    #[inline]
    pub fn j(&self) -> Result<f64> {
        Ok(self.to_array3()?[1])
    }

    /// The `k` component.
    #[inline]
    pub fn k(&self) -> Result<f64> {
        Ok(self.to_array3()?[2])
    }

    /// Cross product `self × other`.
    ///
    /// `other` may be any vector kind but must have exactly three components,
    /// otherwise [`Error::InvalidOperation`] is returned.
    pub fn cross_product<V: Vector>(&self, other: &V) -> Result<Self> {
        let [i, j, k] = self.to_array3()?;
        let [bi, bj, bk] = operand_3d(other, "cross product")?;
        trace!("cross_product");

        Ok(Self::new(j * bk - k * bj, k * bi - i * bk, i * bj - j * bi))
    }

    /// Euclidean distance between the endpoints of the two vectors.
    ///
    /// `other` must have exactly three components, otherwise
    /// [`Error::InvalidOperation`] is returned.
    ///
    /// ```rust
    /// use vecspace_math::Vector3D;
    ///
    /// let a = Vector3D::new(1.0, 1.0, 1.0);
    /// let b = Vector3D::new(4.0, 5.0, 1.0);
    /// assert_eq!(a.distance_with(&b).unwrap(), 5.0);
    /// ```
    pub fn distance_with<V: Vector>(&self, other: &V) -> Result<f64> {
        let [i, j, k] = self.to_array3()?;
        let [bi, bj, bk] = operand_3d(other, "distance")?;

        let (dx, dy, dz) = (i - bi, j - bj, k - bk);
        Ok((dx * dx + dy * dy + dz * dz).sqrt())
    }

    /// Lossless widening conversion.
    #[inline]
    pub fn to_vector_nd(&self) -> Result<VectorND> {
        Ok(VectorND::new(self.to_array3()?.to_vec()))
    }

    /// Renders as a signed sum of basis terms, e.g. `2.00i - j + 0.50k`.
    ///
    /// Zero components are omitted, coefficients of exactly `±1` are
    /// dropped, and the zero vector prints as `0`. A coefficient that only
    /// rounds to one keeps its digits: `0.999` at two digits prints `1.00i`.
    pub fn print_formatted(&self, precision: usize) -> Result<String> {
        Ok(format_basis_sum(&self.to_array3()?, &BASIS, precision))
    }

    /// Converts to glam `DVec3`.
    #[inline]
    pub fn to_glam(&self) -> Result<glam::DVec3> {
        Ok(glam::DVec3::from_array(self.to_array3()?))
    }

    /// Creates from glam `DVec3`.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Vector for Vector3D {
    #[inline]
    fn components(&self) -> Option<&[f64]> {
        self.components.as_ref().map(|c| c.as_slice())
    }

    fn from_components(components: Vec<f64>) -> Result<Self> {
        let a: [f64; 3] = components
            .try_into()
            .map_err(|c: Vec<f64>| Error::invalid_cast(3, c.len()))?;
        Ok(Self::from_array(a))
    }

    /// Componentwise sign flip.
    ///
    /// Unlike the N-component version this also re-checks the fixed
    /// three-component shape and reports [`Error::DimensionMismatch`].
    fn negate(&self) -> Result<Self> {
        let c = self.to_array()?;
        if c.len() != 3 {
            return Err(Error::dimension_mismatch(3, c.len()));
        }
        Ok(Self::new(-c[0], -c[1], -c[2]))
    }
}

/// Checks that a 3D-only operation's operand is initialized and has three
/// components.
fn operand_3d<V: Vector>(other: &V, op: &str) -> Result<[f64; 3]> {
    let c = other.to_array()?;
    match *c {
        [i, j, k] => Ok([i, j, k]),
        _ => Err(Error::requires_3d(op, c.len())),
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.print(DEFAULT_PRECISION) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str("[ uninitialized ]"),
        }
    }
}

impl From<[f64; 3]> for Vector3D {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<glam::DVec3> for Vector3D {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl TryFrom<VectorND> for Vector3D {
    type Error = Error;

    #[inline]
    fn try_from(v: VectorND) -> Result<Self> {
        v.to_vector_3d()
    }
}

impl TryFrom<&VectorND> for Vector3D {
    type Error = Error;

    #[inline]
    fn try_from(v: &VectorND) -> Result<Self> {
        v.to_vector_3d()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vecspace_core::DivisionMode;

    #[test]
    fn test_accessors() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(v.i().unwrap(), 1.0);
        assert_eq!(v.j().unwrap(), 2.0);
        assert_eq!(v.k().unwrap(), 3.0);
        assert_eq!(v.to_array().unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(Vector3D::default().i().unwrap_err(), Error::Uninitialized);
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(Vector3D::I.cross_product(&Vector3D::J).unwrap(), Vector3D::K);
        assert_eq!(Vector3D::J.cross_product(&Vector3D::K).unwrap(), Vector3D::I);
        assert_eq!(Vector3D::K.cross_product(&Vector3D::I).unwrap(), Vector3D::J);
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = Vector3D::new(1.5, -2.0, 3.0);
        let b = Vector3D::new(-4.0, 0.5, 2.0);
        let ab = a.cross_product(&b).unwrap();
        let ba = b.cross_product(&a).unwrap();
        assert_eq!(ab, ba.negate().unwrap());
    }

    #[test]
    fn test_cross_with_nd_operand() {
        let b = VectorND::from([0.0, 1.0, 0.0]);
        assert_eq!(Vector3D::I.cross_product(&b).unwrap(), Vector3D::K);

        let four = VectorND::from([0.0, 1.0, 0.0, 0.0]);
        let err = Vector3D::I.cross_product(&four).unwrap_err();
        assert!(matches!(err, Error::InvalidOperation { .. }));
        assert_eq!(
            Vector3D::I.cross_product(&VectorND::default()).unwrap_err(),
            Error::Uninitialized
        );
    }

    #[test]
    fn test_distance() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(3.0, 4.0, 4.0);
        assert_relative_eq!(a.distance_with(&b).unwrap(), 3.0);
        assert_relative_eq!(a.distance_with(&a).unwrap(), 0.0);

        let err = a.distance_with(&VectorND::from([1.0, 2.0])).unwrap_err();
        assert!(matches!(err, Error::InvalidOperation { .. }));
    }

    #[test]
    fn test_negate() {
        let v = Vector3D::new(1.0, -2.0, 3.0);
        assert_eq!(v.negate().unwrap(), Vector3D::new(-1.0, 2.0, -3.0));
        assert_eq!(Vector3D::default().negate().unwrap_err(), Error::Uninitialized);
    }

    #[test]
    fn test_from_components_wrong_len() {
        let err = Vector3D::from_components(vec![1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::invalid_cast(3, 2));
    }

    #[test]
    fn test_unit_vector() {
        let u = Vector3D::new(0.0, 3.0, 4.0).unit_vector().unwrap();
        assert_relative_eq!(u.magnitude().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(u.k().unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_divide_into() {
        let v = Vector3D::new(4.0, 8.0, -12.0);
        let d = v.divide_into(3.0, DivisionMode::Internal).unwrap();
        assert_relative_eq!(d.i().unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(d.j().unwrap(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(d.k().unwrap(), -9.0, epsilon = 1e-12);

        let e = v.divide_into(0.5, DivisionMode::External).unwrap();
        assert_eq!(e, v.negate().unwrap());
        assert_eq!(
            v.divide_into(1.0, DivisionMode::External).unwrap_err(),
            Error::ZeroExternalDivision
        );
    }

    #[test]
    fn test_external_division_splits_in_ratio() {
        let p = Vector3D::new(2.0, -1.0, 2.0);
        for ratio in [3.0, 2.0, 0.25] {
            let q = p.divide_into(ratio, DivisionMode::External).unwrap();
            let from_origin = q.distance_with(&Vector3D::ZERO).unwrap();
            let from_end = q.distance_with(&p).unwrap();
            assert_relative_eq!(from_origin / from_end, ratio, epsilon = 1e-12);
        }

        let q = p.divide_into(3.0, DivisionMode::External).unwrap();
        assert_eq!(q, Vector3D::new(3.0, -1.5, 3.0));
    }

    #[test]
    fn test_print_formatted() {
        assert_eq!(
            Vector3D::new(2.0, -1.0, 0.5).print_formatted(2).unwrap(),
            "2.00i - j + 0.50k"
        );
        assert_eq!(Vector3D::new(0.0, 0.0, -1.0).print_formatted(2).unwrap(), "-k");
        assert_eq!(Vector3D::ZERO.print_formatted(2).unwrap(), "0");
        assert_eq!(Vector3D::new(1.125, 0.0, 1.0).print_formatted(2).unwrap(), "1.12i + k");
        assert_eq!(Vector3D::new(0.999, -1.0, 0.0).print_formatted(2).unwrap(), "1.00i - j");
        assert!(Vector3D::default().print_formatted(2).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3D::new(1.0, 2.5, -3.0).to_string(), "[ 1.00, 2.50, -3.00 ]");
        assert_eq!(Vector3D::default().to_string(), "[ uninitialized ]");
    }

    #[test]
    fn test_nd_roundtrip() {
        let v = Vector3D::new(0.1, -7.25, 1e-9);
        let back = v.to_vector_nd().unwrap().to_vector_3d().unwrap();
        assert_eq!(back, v);
        assert_eq!(Vector3D::try_from(VectorND::from(v)).unwrap(), v);
    }

    #[test]
    fn test_glam_interop() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let g = v.to_glam().unwrap();
        assert_eq!(g, glam::DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3D::from(g), v);
        let n = Vector3D::from(g.cross(glam::DVec3::Z));
        assert_eq!(n, v.cross_product(&Vector3D::K).unwrap());
    }
}
