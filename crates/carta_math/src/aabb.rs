use core::fmt::Display;
use crate::*;

/// 3D axis aligned bounding box
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Aabb<T: Real> {
    pub min : Vec3<T>,
    pub max : Vec3<T>,
}

/// Result of a ray-aabb intersection
///
/// `t_min` and `t_max` are the distances along the ray where it enters and exits the aabb, they are returned even when the intersection lies behind the ray's origin.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayHit<T: Real> {
    pub hit   : bool,
    pub t_min : T,
    pub t_max : T,
}

impl<T: Real> Aabb<T> {
    /// Create a new aabb
    #[inline]
    #[must_use]
    pub fn new(min: Vec3<T>, max: Vec3<T>) -> Self {
        Self { min, max }
    }

    /// Create an empty aabb, which any point or aabb merged into it fully replaces
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self { min: Vec3::set(T::MAX), max: Vec3::set(T::MIN) }
    }

    /// Create the smallest aabb containing all points, an empty slice results in an empty aabb
    #[must_use]
    pub fn from_points(points: &[Vec3<T>]) -> Self {
        points.iter().fold(Self::empty(), |aabb, &point| Self { min: aabb.min.min(point), max: aabb.max.max(point) })
    }

    /// Check if the aabb contains no points, i.e. `min > max` on any axis
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Get the size of the aabb
    #[inline]
    #[must_use]
    pub fn size(self) -> Vec3<T> {
        self.max - self.min
    }

    /// Get the half of the size of the aabb
    #[inline]
    #[must_use]
    pub fn half_extent(self) -> Vec3<T> {
        self.size() * T::from_f64(0.5)
    }

    /// Get the center of the aabb
    #[inline]
    #[must_use]
    pub fn center(self) -> Vec3<T> {
        (self.min + self.max) * T::from_f64(0.5)
    }

    /// Create the smallest aabb fitting both aabbs
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Check if the aabb contains a point, points on the boundary are contained
    #[inline]
    #[must_use]
    pub fn contains_point(self, point: Vec3<T>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if 2 aabbs overlap, touching aabbs overlap
    #[inline]
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Check if a triangle might overlap the aabb
    ///
    /// Only the bounds of the triangle are tested, so this can report an overlap for a triangle that passes diagonally next to the aabb.
    /// An exact test needs to follow up with a separating axis test.
    #[must_use]
    pub fn overlaps_triangle(self, v0: Vec3<T>, v1: Vec3<T>, v2: Vec3<T>) -> bool {
        let tri_min = v0.min(v1).min(v2);
        let tri_max = v0.max(v1).max(v2);
        self.overlaps(Self { min: tri_min, max: tri_max })
    }

    /// Intersect a ray with the aabb, using the slab method
    ///
    /// The ray is treated as an infinite line, callers distinguish intersections in front of and behind the origin by the sign of `t_min` and `t_max`.
    ///
    /// A ray parallel to a slab only constrains the hit by whether its origin lies within that slab, boundaries included.
    #[must_use]
    pub fn intersect_ray(self, ray: Ray<T>) -> RayHit<T> {
        let mut t_min = T::MIN;
        let mut t_max = T::MAX;
        let mut inside_parallel = true;

        for axis in 0..3 {
            let (orig, dir) = (ray.orig[axis], ray.dir[axis]);
            let (min, max) = (self.min[axis], self.max[axis]);
            if dir == T::zero() {
                inside_parallel &= orig >= min && orig <= max;
                continue;
            }

            let inv_dir = T::one() / dir;
            let t0 = (min - orig) * inv_dir;
            let t1 = (max - orig) * inv_dir;
            scalar::set_max(&mut t_min, scalar::min(t0, t1));
            scalar::set_min(&mut t_max, scalar::max(t0, t1));
        }

        RayHit { hit: inside_parallel && t_max >= t_min, t_min, t_max }
    }

    /// Transform the aabb by an affine matrix, by transforming its 8 corners
    #[must_use]
    pub fn transform(self, mat: Mat4<T>) -> Self {
        let Self { min, max } = self;
        let corners = [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ];

        let corners = corners.map(|corner| (mat * corner.extend(T::one())).shrink());
        Self::from_points(&corners)
    }

    /// Transform the aabb by an affine matrix, using Arvo's method
    ///
    /// Gives the same result as [`Aabb::transform`] (up to rounding), without transforming every corner.
    #[must_use]
    pub fn transform_arvo(self, mat: Mat4<T>) -> Self {
        let center = (mat * self.center().extend(T::one())).shrink();
        let extent = self.half_extent();

        let mut new_extent = Vec3::zero();
        for row in 0..3 {
            new_extent[row] = (0..3).fold(T::zero(), |acc, col| acc + mat.at(row, col).abs() * extent[col]);
        }
        Self { min: center - new_extent, max: center + new_extent }
    }
}

impl<T: Real> ApproxEq for Aabb<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.min.is_close_to(rhs.min, epsilon) && self.max.is_close_to(rhs.max, epsilon)
    }

    fn is_approx_eq_thresh(self, rhs: Self, epsilon: T) -> bool {
        self.min.is_approx_eq_thresh(rhs.min, epsilon) && self.max.is_approx_eq_thresh(rhs.max, epsilon)
    }

    fn is_approx_eq_func<F: Fn(T, T) -> bool>(self, rhs: Self, eq: F) -> bool {
        self.min.is_approx_eq_func(rhs.min, &eq) && self.max.is_approx_eq_func(rhs.max, &eq)
    }
}

impl<T: Real + NumericCast<U>, U: Real> NumericCast<Aabb<U>> for Aabb<T> {
    fn cast(self) -> Aabb<U> {
        Aabb { min: self.min.cast(), max: self.max.cast() }
    }
}

impl<T: Real + Display> Display for Aabb<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{{ min: {}, max: {} }}", self.min, self.max))
    }
}

#[allow(non_camel_case_types)] pub type f32aabb = Aabb<f32>;
#[allow(non_camel_case_types)] pub type f64aabb = Aabb<f64>;
