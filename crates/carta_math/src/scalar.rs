//! Scalar helpers shared by every value type.

use crate::Real;

/// Check if 2 scalars are approximately equal, using the default epsilon of the type
#[inline]
#[must_use]
pub fn approx_eq<T: Real>(a: T, b: T) -> bool {
    approx_eq_thresh(a, b, T::APPROX_EPSILON)
}

/// Check if 2 scalars are approximately equal, using a given `epsilon`
///
/// `a` and `b` are considered equal when:
/// - they are bitwise equal, or
/// - either is 0 (or their difference is subnormal) and `|a - b| < epsilon^2`, or
/// - `|a - b| / (|a| + |b|) < epsilon`
#[must_use]
pub fn approx_eq_thresh<T: Real>(a: T, b: T, epsilon: T) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    if a * b == T::zero() || diff < T::MIN_NORMAL {
        return diff < epsilon * epsilon;
    }

    diff / (a.abs() + b.abs()) < epsilon
}

/// Create a comparator which checks approximate equality with a fixed `epsilon`
#[inline]
#[must_use]
pub fn approx_func_eq<T: Real>(epsilon: T) -> impl Fn(T, T) -> bool {
    move |a, b| approx_eq_thresh(a, b, epsilon)
}

/// Clamp `a` to the closed range `[low, high]`
#[inline]
#[must_use]
pub fn clamp<T: Real>(a: T, low: T, high: T) -> T {
    if a < low {
        low
    } else if a > high {
        high
    } else {
        a
    }
}

/// Create a function clamping its input to `[low, high]`
#[inline]
#[must_use]
pub fn clamp_func<T: Real>(low: T, high: T) -> impl Fn(T) -> T {
    move |a| clamp(a, low, high)
}

/// Check if `a` lies within the closed range `[low, high]`, i.e. `clamp` would return `a` unchanged
#[inline]
#[must_use]
pub fn is_clamped<T: Real>(a: T, low: T, high: T) -> bool {
    a >= low && a <= high
}

/// Create a predicate checking whether its input lies within `[low, high]`
#[inline]
#[must_use]
pub fn is_clamped_func<T: Real>(low: T, high: T) -> impl Fn(T) -> bool {
    move |a| is_clamped(a, low, high)
}

/// Get the smaller of 2 values
#[inline]
#[must_use]
pub fn min<T: Real>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Get the larger of 2 values
#[inline]
#[must_use]
pub fn max<T: Real>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Set `a` to `b` if `b` is smaller
#[inline]
pub fn set_min<T: Real>(a: &mut T, b: T) {
    if b < *a {
        *a = b;
    }
}

/// Set `a` to `b` if `b` is larger
#[inline]
pub fn set_max<T: Real>(a: &mut T, b: T) {
    if b > *a {
        *a = b;
    }
}

/// Absolute value
#[inline]
#[must_use]
pub fn abs<T: Real>(a: T) -> T {
    a.abs()
}

/// Convert degrees to radians
#[inline]
#[must_use]
pub fn deg_to_rad<T: Real>(angle: T) -> T {
    angle * T::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
#[must_use]
pub fn rad_to_deg<T: Real>(angle: T) -> T {
    angle * T::RAD_TO_DEG
}

/// Round `v` to `precision` decimal places, rounding halves away from zero
#[must_use]
pub fn round<T: Real>(v: T, precision: i32) -> T {
    let scale = 10f64.powi(precision);
    T::from_f64((v.to_f64() * scale).round() / scale)
}

/// Four-quadrant arctangent of `y / x`, in the range `[0, 2pi)`, counter-clockwise from +x
///
/// Axis aligned inputs are resolved exactly: `x == 0` gives `pi/2` or `3pi/2` depending on the sign of `y`,
/// `y == 0` gives `0` or `pi` depending on the sign of `x`. `atan2(0, 0)` is `0`.
#[must_use]
pub fn atan2<T: Real>(y: T, x: T) -> T {
    let zero = T::zero();
    if x == zero {
        if y > zero {
            return T::HALF_PI;
        } else if y < zero {
            return T::THREE_OVER_TWO_PI;
        }
        return zero;
    }
    if y == zero {
        return if x > zero { zero } else { T::PI };
    }

    let angle = T::atan2(y, x);
    if angle >= zero {
        return angle;
    }
    // Tiny negative angles round up to a full turn
    let angle = angle + T::TWO_PI;
    if angle >= T::TWO_PI { zero } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MathConsts, ApproxEq};

    #[test]
    fn approx_eq_edges() {
        assert!(approx_eq(0.0f64, 0.0));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(approx_eq(0.0f64, 1.0e-31));
        assert!(!approx_eq(0.0f64, 1.0e-20));
        assert!(approx_eq_thresh(100.0f32, 100.01, 1.0e-3));
        assert!(!approx_eq_thresh(100.0f32, 101.0, 1.0e-3));

        let eq = approx_func_eq(0.1f32);
        assert!(eq(1.0, 1.1));
        assert!(!eq(1.0, 2.0));
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp(5.0f32, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0f32, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5f32, 0.0, 1.0), 0.5);
        assert!(is_clamped(clamp(7.0f64, -1.0, 1.0), -1.0, 1.0));
        assert!(is_clamped(1.0f64, -1.0, 1.0));
        assert!(!is_clamped(1.5f64, -1.0, 1.0));

        let unit = clamp_func(0.0f32, 1.0);
        assert_eq!(unit(2.0), 1.0);
        let in_unit = is_clamped_func(0.0f32, 1.0);
        assert!(in_unit(0.25));
        assert!(!in_unit(-0.25));
    }

    #[test]
    fn min_max() {
        let mut a = 3.0f32;
        set_min(&mut a, 1.0);
        assert_eq!(a, 1.0);
        set_max(&mut a, 4.0);
        assert_eq!(a, 4.0);
        set_max(&mut a, 2.0);
        assert_eq!(a, 4.0);
        assert_eq!(min(2.0f64, -2.0), -2.0);
        assert_eq!(max(2.0f64, -2.0), 2.0);
    }

    #[test]
    fn angle_conversions() {
        assert_eq!(deg_to_rad(180.0f64), 180.0 * (f64::PI / 180.0));
        assert!(deg_to_rad(90.0f32).is_approx_eq(f32::HALF_PI));
        assert!(rad_to_deg(f64::PI).is_approx_eq(180.0));
    }

    #[test]
    fn rounding() {
        assert_eq!(round(1.23456f64, 2), 1.23);
        assert_eq!(round(1.235f64, 1), 1.2);
        assert_eq!(round(2.5f64, 0), 3.0);
        assert_eq!(round(-1.5f64, 0), -2.0);
        assert_eq!(round(-1.25f64, 1), -1.3);
    }

    #[test]
    fn atan2_full_circle() {
        assert_eq!(atan2(1.0f64, 0.0), f64::HALF_PI);
        assert_eq!(atan2(-1.0f64, 0.0), f64::THREE_OVER_TWO_PI);
        assert_eq!(atan2(0.0f64, 1.0), 0.0);
        assert_eq!(atan2(0.0f64, -1.0), f64::PI);
        assert!(atan2(1.0f64, 1.0).is_approx_eq(f64::QUARTER_PI));
        assert!(atan2(-1.0f64, 1.0).is_approx_eq(7.0 * f64::QUARTER_PI));
        assert!(atan2(-1.0f64, -1.0).is_approx_eq(5.0 * f64::QUARTER_PI));
        assert_eq!(atan2(-1e-20f64, 1.0), 0.0);
        assert!(atan2(-1e-20f32, 1.0) < f32::TWO_PI);
    }

}
