use core::fmt::Display;
use crate::*;

impl<T: Copy> Vec2<T> {
    /// Extend a `Vec2` to a `Vec3`, filling the added component with `z`
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z }
    }

    /// Extend a `Vec2` to a `Vec4`, filling the added components with `z` and `w`
    #[inline]
    #[must_use]
    pub fn extend_4(self, z: T, w: T) -> Vec4<T> {
        Vec4 { x: self.x, y: self.y, z, w }
    }
}

impl<T: Real> Vec2<T> {
    /// Calculate the 2D cross product, i.e. the z-component of the 3D cross product of both vectors with `z == 0`
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Get the vector rotated by 90 degrees counter-clockwise
    #[inline]
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }
}

impl<T: Real> Display for Vec2<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.x, self.y))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn create_convert() {
        let vec = Vec2::new(1.0f32, 2.0);
        assert_eq!(vec.x, 1.0);
        assert_eq!(vec.y, 2.0);
        assert_eq!(vec[1], 2.0);

        let vec : f32v2 = [3.0, 4.0].into();
        assert_eq!(vec, Vec2::new(3.0, 4.0));
        let arr : [f32; 2] = vec.into();
        assert_eq!(arr, [3.0, 4.0]);

        assert_eq!(vec.extend(5.0), Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(vec.extend_4(5.0, 6.0), Vec4::new(3.0, 4.0, 5.0, 6.0));
    }

    #[test]
    fn cross_and_perpendicular() {
        let a = Vec2::new(1.0f64, 0.0);
        let b = Vec2::new(0.0f64, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.perpendicular(), b);
        assert_eq!(a.dot(a.perpendicular()), 0.0);
    }

    #[test]
    fn length() {
        let vec = Vec2::new(3.0f32, 4.0);
        assert_eq!(vec.len(), 5.0);
        assert_eq!(vec.len_sq(), 25.0);
        assert_eq!(vec.dist(Vec2::zero()), 5.0);
        assert!(vec.normalize().is_normalized());
        assert_eq!(f32v2::zero().normalize(), f32v2::zero());
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let vec = Vec2::new(1.0f32, 2.0);
        let _ = vec[2];
    }
}
