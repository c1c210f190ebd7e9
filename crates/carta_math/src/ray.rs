use core::fmt::Display;
use crate::*;

/// 3D ray, starting at `orig` and extending infinitely along `dir`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray<T: Real> {
    pub orig : Vec3<T>,
    pub dir  : Vec3<T>,
}

impl<T: Real> Ray<T> {
    /// Create a new ray
    #[inline]
    #[must_use]
    pub fn new(orig: Vec3<T>, dir: Vec3<T>) -> Self {
        Self { orig, dir }
    }

    /// Create a ray starting at `from` and going through `to`, with a normalized direction
    #[inline]
    #[must_use]
    pub fn between(from: Vec3<T>, to: Vec3<T>) -> Self {
        Self { orig: from, dir: (to - from).normalize() }
    }

    /// Get the point at a given distance on the ray
    #[inline]
    #[must_use]
    pub fn point_at(self, dist: T) -> Vec3<T> {
        self.orig + self.dir * dist
    }

    /// Calculate the distance of the projection of `point` on the ray, in units of `dir`
    #[inline]
    #[must_use]
    pub fn dist(self, point: Vec3<T>) -> T {
        self.dir.dot(point - self.orig) / self.dir.len_sq()
    }

    /// Get the ray transformed by an affine matrix
    #[must_use]
    pub fn transform(self, mat: Mat4<T>) -> Self {
        Self { orig: mat.transform_coordinate(self.orig), dir: mat.transform_normal(self.dir) }
    }
}

impl<T: Real> ApproxEq for Ray<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.orig.is_close_to(rhs.orig, epsilon) && self.dir.is_close_to(rhs.dir, epsilon)
    }

    fn is_approx_eq_thresh(self, rhs: Self, epsilon: T) -> bool {
        self.orig.is_approx_eq_thresh(rhs.orig, epsilon) && self.dir.is_approx_eq_thresh(rhs.dir, epsilon)
    }

    fn is_approx_eq_func<F: Fn(T, T) -> bool>(self, rhs: Self, eq: F) -> bool {
        self.orig.is_approx_eq_func(rhs.orig, &eq) && self.dir.is_approx_eq_func(rhs.dir, &eq)
    }
}

impl<T: Real + Display> Display for Ray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ orig: {}, dir: {} }}", self.orig, self.dir))
    }
}
