//! Arbitrary-length vector.
//!
//! [`VectorND`] holds any number of components and supports the full shared
//! [`Vector`] operation set. It narrows to [`Vector3D`] when it has exactly
//! three components.

use std::fmt;

use vecspace_core::{DEFAULT_PRECISION, Error, Result};

use crate::Vector3D;
use crate::vector::Vector;

/// A vector with any number of components.
///
/// [`Default`] yields an uninitialized vector, distinct from a vector with
/// zero components.
///
/// # Example
///
/// ```rust
/// use vecspace_math::{Vector, VectorND};
///
/// let v: VectorND = [1.0, 2.0, 3.0, 4.0].into_iter().collect();
/// assert_eq!(v.component_count().unwrap(), 4);
/// assert_eq!(v.dot_product(&v).unwrap(), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorND {
    components: Option<Vec<f64>>,
}

impl VectorND {
    /// Creates a vector owning `components`.
    #[inline]
    pub fn new(components: Vec<f64>) -> Self {
        Self {
            components: Some(components),
        }
    }

    /// Creates a vector by copying a slice.
    #[inline]
    pub fn from_slice(components: &[f64]) -> Self {
        Self::new(components.to_vec())
    }

    /// Zero vector with `len` components.
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// Narrowing conversion.
    ///
    /// Fails with [`Error::InvalidCast`] unless there are exactly three
    /// components.
    pub fn to_vector_3d(&self) -> Result<Vector3D> {
        let c = self.to_array()?;
        match *c {
            [i, j, k] => Ok(Vector3D::new(i, j, k)),
            _ => Err(Error::invalid_cast(3, c.len())),
        }
    }

    /// Consumes the vector, returning its components.
    #[inline]
    pub fn into_vec(self) -> Result<Vec<f64>> {
        self.components.ok_or(Error::Uninitialized)
    }
}

impl Vector for VectorND {
    #[inline]
    fn components(&self) -> Option<&[f64]> {
        self.components.as_deref()
    }

    #[inline]
    fn from_components(components: Vec<f64>) -> Result<Self> {
        Ok(Self::new(components))
    }
}

impl fmt::Display for VectorND {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.print(DEFAULT_PRECISION) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str("[ uninitialized ]"),
        }
    }
}

impl From<Vec<f64>> for VectorND {
    #[inline]
    fn from(v: Vec<f64>) -> Self {
        Self::new(v)
    }
}

impl From<&[f64]> for VectorND {
    #[inline]
    fn from(v: &[f64]) -> Self {
        Self::from_slice(v)
    }
}

impl<const N: usize> From<[f64; N]> for VectorND {
    #[inline]
    fn from(a: [f64; N]) -> Self {
        Self::new(a.to_vec())
    }
}

impl FromIterator<f64> for VectorND {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Widening conversion; an uninitialized 3D vector stays uninitialized.
impl From<Vector3D> for VectorND {
    #[inline]
    fn from(v: Vector3D) -> Self {
        Self {
            components: v.components().map(<[f64]>::to_vec),
        }
    }
}
