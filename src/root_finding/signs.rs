//! Sign utilities for bracketing algorithms.
//! - `opposite_sign` : `true` if the product of the values is negative

/// Returns `true` if `x * y < 0`, i.e. both are non-zero and of opposite
/// sign. The product itself is never formed (it can underflow to zero).
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x != 0.0 && y != 0.0 && x.is_sign_positive() != y.is_sign_positive()
}
