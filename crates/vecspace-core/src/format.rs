//! Component rounding and text rendering.
//!
//! Components are rounded half-to-even (banker's rounding) before printing,
//! so `0.125` at two digits prints as `0.12` and `0.375` as `0.38`. Rounding
//! happens on the binary `f64` value: `1.005` is stored as
//! `1.00499999999999989...` and therefore prints as `1.00`.

/// Default number of fractional digits used when printing vectors.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest precision honoured when printing.
///
/// The exact decimal expansion of any finite `f64` has at most 1074
/// fractional digits, so larger requests only add trailing zeros and are
/// clamped to this value.
pub const MAX_PRECISION: usize = 1074;

/// Rounds `value` to `precision` fractional digits, ties to even.
///
/// Values whose scaled form is not finite (huge precision, huge value,
/// NaN, infinity) are returned unchanged.
///
/// # Example
///
/// ```rust
/// use vecspace_core::round_half_even;
///
/// assert_eq!(round_half_even(2.5, 0), 2.0);
/// assert_eq!(round_half_even(3.5, 0), 4.0);
/// assert_eq!(round_half_even(0.125, 2), 0.12);
/// ```
pub fn round_half_even(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(i32::MAX as usize) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round_ties_even() / factor;
    // -0.0 prints as "-0.00"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a single component with exactly `precision` fractional digits,
/// `precision` being clamped to [`MAX_PRECISION`].
///
/// ```rust
/// use vecspace_core::format_component;
///
/// assert_eq!(format_component(2.0, 2), "2.00");
/// assert_eq!(format_component(-0.001, 2), "0.00");
/// ```
pub fn format_component(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    format!("{:.*}", precision, round_half_even(value, precision))
}

/// Renders components in row-matrix notation: `[ c0, c1, ..., cn ]`.
///
/// An empty slice renders as `[ ]`.
///
/// ```rust
/// use vecspace_core::format_row;
///
/// assert_eq!(format_row(&[1.0, 2.5, -3.0], 1), "[ 1.0, 2.5, -3.0 ]");
/// ```
pub fn format_row(components: &[f64], precision: usize) -> String {
    let body = components
        .iter()
        .map(|&c| format_component(c, precision))
        .collect::<Vec<_>>()
        .join(", ");
    if body.is_empty() {
        "[ ]".to_string()
    } else {
        format!("[ {body} ]")
    }
}

/// Renders components as a signed sum of basis terms, e.g. `2.00i - j + 0.50k`.
///
/// Zero components are skipped, coefficients of exactly `1` or `-1` are
/// written as the bare basis name, and a vector with no non-zero component
/// renders as `0`. `basis` supplies one name per component.
///
/// The `±1` test looks at the stored value, not the rounded one: `0.999`
/// at two digits prints as `1.00i`, only an exact `1.0` prints as `i`.
///
/// ```rust
/// use vecspace_core::format_basis_sum;
///
/// let s = format_basis_sum(&[1.0, -2.0, 0.0], &["i", "j", "k"], 2);
/// assert_eq!(s, "i - 2.00j");
/// ```
pub fn format_basis_sum(components: &[f64], basis: &[&str], precision: usize) -> String {
    let mut out = String::new();

    for (&c, name) in components.iter().zip(basis) {
        if c == 0.0 {
            continue;
        }
        let negative = c < 0.0;
        let magnitude = c.abs();
        let term = if magnitude == 1.0 {
            (*name).to_string()
        } else {
            format!("{}{name}", format_component(magnitude, precision))
        };

        match (out.is_empty(), negative) {
            (true, false) => out.push_str(&term),
            (true, true) => {
                out.push('-');
                out.push_str(&term);
            }
            (false, false) => {
                out.push_str(" + ");
                out.push_str(&term);
            }
            (false, true) => {
                out.push_str(" - ");
                out.push_str(&term);
            }
        }
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}
