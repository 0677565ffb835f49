use crate::utils::Float;
use std::cmp::Ordering;

/// An absolute tolerance used when comparing accumulated cost values.
pub const DIFF_TOLERANCE: Float = 0.01;

/// Compares floating point numbers, NaN is considered greater than any other value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Checks whether two values are equal within [`DIFF_TOLERANCE`].
#[inline]
pub fn is_approx_eq(a: Float, b: Float) -> bool {
    (a - b).abs() < DIFF_TOLERANCE
}

/// Checks whether two optional values are equal within [`DIFF_TOLERANCE`]: two absent values are
/// equal, a present value never equals an absent one.
#[inline]
pub fn is_approx_eq_option(a: Option<Float>, b: Option<Float>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => is_approx_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
