//! Directed rounding for `f64` operations.
//!
//! Every helper returns a `(lower, upper)` pair enclosing the exact real
//! result of the operation. Exact results come back unchanged; inexact ones
//! are moved one ulp outward in the direction of the rounding error, which is
//! recovered with error-free transformations (TwoSum for addition, fused
//! multiply-add residuals for multiplication, division and square root).

/// Number of ulps elementary function results are widened by.
///
/// The standard library does not promise correctly rounded `sin`, `exp` or
/// `ln`; common libm implementations stay within one ulp.
const LIBM_ULPS: u32 = 2;

/// Rounds `a + b` in both directions.
pub(crate) fn add(a: f64, b: f64) -> (f64, f64) {
    let sum = a + b;
    if !sum.is_finite() {
        return non_finite(sum);
    }
    let b_virtual = sum - a;
    let err = (a - (sum - b_virtual)) + (b - b_virtual);
    directed(sum, err)
}

/// Rounds `a - b` in both directions.
pub(crate) fn sub(a: f64, b: f64) -> (f64, f64) {
    add(a, -b)
}

/// Rounds `a * b` in both directions, with `0 * ±inf = 0`.
pub(crate) fn mul(a: f64, b: f64) -> (f64, f64) {
    if a == 0.0 || b == 0.0 {
        return (0.0, 0.0);
    }
    let product = a * b;
    if !product.is_finite() {
        return non_finite(product);
    }
    if product.abs() < f64::MIN_POSITIVE {
        // The residual is not representable below the normal range.
        return (product.next_down(), product.next_up());
    }
    let err = a.mul_add(b, -product);
    directed(product, err)
}

/// Rounds `a / b` in both directions.
///
/// The divisor must be non-zero. A finite numerator over an infinite divisor
/// is the exact limit zero.
pub(crate) fn div(a: f64, b: f64) -> (f64, f64) {
    debug_assert!(b != 0.0, "division by zero reached directed rounding");
    if a == 0.0 || (a.is_finite() && b.is_infinite()) {
        return (0.0, 0.0);
    }
    let quotient = a / b;
    if !quotient.is_finite() {
        return non_finite(quotient);
    }
    if quotient.abs() < f64::MIN_POSITIVE {
        return (quotient.next_down(), quotient.next_up());
    }
    let remainder = (-quotient).mul_add(b, a);
    let err = if b > 0.0 { remainder } else { -remainder };
    directed(quotient, err)
}

/// Rounds `sqrt(x)` in both directions for `x >= 0`.
pub(crate) fn sqrt(x: f64) -> (f64, f64) {
    let root = x.sqrt();
    if !root.is_finite() || root == 0.0 {
        return (root, root);
    }
    if root < f64::MIN_POSITIVE {
        return (root.next_down().max(0.0), root.next_up());
    }
    let remainder = (-root).mul_add(root, x);
    directed(root, remainder)
}

/// Widens an elementary function result downward.
pub(crate) fn libm_down(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (0..LIBM_ULPS).fold(value, |v, _| v.next_down())
}

/// Widens an elementary function result upward.
pub(crate) fn libm_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (0..LIBM_ULPS).fold(value, |v, _| v.next_up())
}

/// Bounds for a rounded `value` whose exact error has the sign of `err`.
fn directed(value: f64, err: f64) -> (f64, f64) {
    if err.is_nan() {
        (value.next_down(), value.next_up())
    } else if err < 0.0 {
        (value.next_down(), value)
    } else if err > 0.0 {
        (value, value.next_up())
    } else {
        (value, value)
    }
}

/// Bounds for an infinite or NaN result.
///
/// An infinity may stand for a finite overflow, so the opposite bound stops
/// at the largest finite magnitude. NaN carries no information at all.
fn non_finite(value: f64) -> (f64, f64) {
    if value == f64::INFINITY {
        (f64::MAX, f64::INFINITY)
    } else if value == f64::NEG_INFINITY {
        (f64::NEG_INFINITY, f64::MIN)
    } else {
        (f64::NEG_INFINITY, f64::INFINITY)
    }
}
