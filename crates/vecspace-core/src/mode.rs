//! Input selectors for angle and ratio-division operations.
//!
//! - [`AngleUnit`] picks the unit an angle is reported in.
//! - [`DivisionMode`] picks the ratio-division formula.
//!
//! Both default to the variant the operations use when the caller does not
//! choose: [`AngleUnit::Radian`] and [`DivisionMode::Internal`].

use std::f64::consts::PI;
use std::fmt;

/// Unit of an angle between two vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// Radians (θ rad).
    #[default]
    Radian,
    /// Degrees (θ°).
    Degree,
}

impl AngleUnit {
    /// Converts an angle in radians to this unit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecspace_core::AngleUnit;
    ///
    /// let half_turn = AngleUnit::Degree.convert(std::f64::consts::PI);
    /// assert!((half_turn - 180.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn convert(self, radians: f64) -> f64 {
        match self {
            Self::Radian => radians,
            Self::Degree => radians * 180.0 / PI,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radian => write!(f, "radian"),
            Self::Degree => write!(f, "degree"),
        }
    }
}

/// Ratio-division method used by vector point division.
///
/// Treating a vector as the position of a point `P` relative to the origin
/// `O`, division by ratio `m` finds the point splitting `OP`:
///
/// - [`Internal`](Self::Internal): between the endpoints, `P * m / (1 + m)`
/// - [`External`](Self::External): outside the segment, `P * m / (m - 1)`,
///   undefined for `m == 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DivisionMode {
    /// Internal ratio division.
    #[default]
    Internal,
    /// External ratio division.
    External,
}

impl fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::External => write!(f, "external"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        assert_eq!(AngleUnit::default(), AngleUnit::Radian);
        assert_eq!(DivisionMode::default(), DivisionMode::Internal);
    }

    #[test]
    fn test_angle_convert() {
        assert_relative_eq!(AngleUnit::Radian.convert(1.25), 1.25);
        assert_relative_eq!(AngleUnit::Degree.convert(PI / 2.0), 90.0, epsilon = 1e-12);
        assert_relative_eq!(AngleUnit::Degree.convert(0.0), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(AngleUnit::Degree.to_string(), "degree");
        assert_eq!(DivisionMode::External.to_string(), "external");
    }
}
