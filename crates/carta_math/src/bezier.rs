//! Bézier curves and surfaces.
//!
//! All evaluators take a parameter in `[0, 1]` and panic on anything outside of it, callers are expected to clamp.

use core::ops::{Add, Mul};
use crate::*;

/// Calculate the binomial coefficient `n choose k`
///
/// Intermediate results never exceed the result itself, so this only overflows when `n choose k` does not fit in a `u64`
/// (first at `n = 68`).
#[must_use]
pub fn choose(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // `acc * (n - k + i)` is divisible by `i`, dividing out the common factor first keeps the product exact and small
    (1..=k).fold(1, |acc, i| {
        let g = gcd(acc, i);
        (acc / g) * ((n - k + i) / (i / g))
    })
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn check_param<T: Real>(t: T, name: &str) {
    assert!(t >= T::zero() && t <= T::one(), "Bézier parameter `{name}` must be in [0, 1], got {t}");
}

/// Bernstein basis polynomial `b(n, k)` at `t`
fn bernstein<T: Real>(n: usize, k: usize, t: T) -> T {
    T::from_usize(choose(n as u64, k as u64) as usize) * (T::one() - t).powi((n - k) as i32) * t.powi(k as i32)
}

/// Evaluate a quadratic Bézier curve in 2D
#[must_use]
pub fn quadratic_bezier_curve_2d<T: Real>(t: T, p0: Vec2<T>, p1: Vec2<T>, p2: Vec2<T>) -> Vec2<T> {
    quadratic(t, p0, p1, p2)
}

/// Evaluate a quadratic Bézier curve in 3D
#[must_use]
pub fn quadratic_bezier_curve_3d<T: Real>(t: T, p0: Vec3<T>, p1: Vec3<T>, p2: Vec3<T>) -> Vec3<T> {
    quadratic(t, p0, p1, p2)
}

/// Evaluate a cubic Bézier curve in 2D
#[must_use]
pub fn cubic_bezier_curve_2d<T: Real>(t: T, p0: Vec2<T>, p1: Vec2<T>, p2: Vec2<T>, p3: Vec2<T>) -> Vec2<T> {
    cubic(t, p0, p1, p2, p3)
}

/// Evaluate a cubic Bézier curve in 3D
#[must_use]
pub fn cubic_bezier_curve_3d<T: Real>(t: T, p0: Vec3<T>, p1: Vec3<T>, p2: Vec3<T>, p3: Vec3<T>) -> Vec3<T> {
    cubic(t, p0, p1, p2, p3)
}

fn quadratic<T: Real, P>(t: T, p0: P, p1: P, p2: P) -> P where
    P: Add<Output = P> + Mul<T, Output = P>
{
    check_param(t, "t");
    let s = T::one() - t;
    p0 * (s * s) + p1 * (T::from_i32(2) * s * t) + p2 * (t * t)
}

fn cubic<T: Real, P>(t: T, p0: P, p1: P, p2: P, p3: P) -> P where
    P: Add<Output = P> + Mul<T, Output = P>
{
    check_param(t, "t");
    let s = T::one() - t;
    let three = T::from_i32(3);
    p0 * (s * s * s) + p1 * (three * s * s * t) + p2 * (three * s * t * t) + p3 * (t * t * t)
}

/// Evaluate a Bézier curve of any degree, defined by its control `points`
///
/// # Panics
///
/// Panics if `t` is outside of `[0, 1]` or there are no control points.
#[must_use]
pub fn bezier_curve<T: Real, P>(t: T, points: &[P]) -> P where
    P: Copy + Zero + Add<Output = P> + Mul<T, Output = P>
{
    check_param(t, "t");
    assert!(!points.is_empty(), "A Bézier curve needs at least 1 control point");

    let n = points.len() - 1;
    points.iter()
        .enumerate()
        .fold(P::zero(), |acc, (k, &p)| acc + p * bernstein(n, k, t))
}

/// Sample `num_points` evenly spaced points along a Bézier curve, including both end points
///
/// # Panics
///
/// Panics if `num_points` is less than 2 or there are no control points.
#[must_use]
pub fn make_bezier_curve<T: Real, P>(num_points: usize, points: &[P]) -> Vec<P> where
    P: Copy + Zero + Add<Output = P> + Mul<T, Output = P>
{
    assert!(num_points >= 2, "Sampling a Bézier curve needs at least 2 points, got {num_points}");
    assert!(!points.is_empty(), "A Bézier curve needs at least 1 control point");

    let step = T::one() / T::from_usize(num_points - 1);
    let mut line = Vec::with_capacity(num_points);
    line.push(points[0]);
    for idx in 1..num_points - 1 {
        line.push(bezier_curve(step * T::from_usize(idx), points));
    }
    line.push(points[points.len() - 1]);
    line
}

/// Evaluate a Bézier surface at `(u, v)`, defined by a rectangular mesh of control points
///
/// `mesh[i][j]` is weighted by the `i`-th basis along `u` and the `j`-th basis along `v`.
///
/// # Panics
///
/// Panics if `u` or `v` is outside of `[0, 1]`, or if the mesh is empty or not rectangular.
#[must_use]
pub fn bezier_surface<T: Real, R: AsRef<[Vec3<T>]>>(u: T, v: T, mesh: &[R]) -> Vec3<T> {
    check_param(u, "u");
    check_param(v, "v");
    assert!(!mesh.is_empty() && !mesh[0].as_ref().is_empty(), "A Bézier surface needs at least 1 control point");

    let cols = mesh[0].as_ref().len();
    let n = mesh.len() - 1;
    let m = cols - 1;

    let mut point = Vec3::zero();
    for (i, row) in mesh.iter().enumerate() {
        let row = row.as_ref();
        assert_eq!(row.len(), cols, "The control mesh of a Bézier surface must be rectangular");

        let bu = bernstein(n, i, u);
        for (j, &p) in row.iter().enumerate() {
            point += p * (bu * bernstein(m, j, v));
        }
    }
    point
}

/// Evaluate a spline made out of Bézier curves, where curve `i` covers the parameter range `ranges[i]`
///
/// `t` is remapped to `[0, 1]` over the first range containing it.
///
/// # Panics
///
/// Panics if `ranges` and `curves` differ in length, or if no range contains `t`.
#[must_use]
pub fn bezier_spline_interpolate<T: Real, P, C: AsRef<[P]>>(t: T, ranges: &[(T, T)], curves: &[C]) -> P where
    P: Copy + Zero + Add<Output = P> + Mul<T, Output = P>
{
    assert_eq!(ranges.len(), curves.len(), "Each Bézier curve in a spline needs a range");

    let (range, curve) = ranges.iter()
        .zip(curves)
        .find(|((start, end), _)| t >= *start && t <= *end)
        .unwrap_or_else(|| panic!("{t} is outside of the range of all curves in the spline"));

    let (start, end) = *range;
    let local_t = if end == start { T::zero() } else { (t - start) / (end - start) };
    bezier_curve(local_t, curve.as_ref())
}
