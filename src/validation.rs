use crate::math::numeric::parse_float;

/// Returns `true` when `input` reads as a number strictly greater than zero.
///
/// Non-numeric text, zero and negative values are rejected. There is no upper bound, so very
/// large values and `Infinity` are accepted.
///
/// ```
/// use chemxplore::validate_number;
///
/// assert!(validate_number("0.001"));
/// assert!(!validate_number("0"));
/// assert!(!validate_number("abc"));
/// ```
pub fn validate_number(input: &str) -> bool {
    is_positive(parse_float(input))
}

/// Returns `true` when `value` is a number strictly greater than zero.
pub fn is_positive(value: f64) -> bool {
    !value.is_nan() && value > 0.0
}
