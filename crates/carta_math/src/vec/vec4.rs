use core::fmt::Display;
use crate::*;

impl<T: Copy> Vec4<T> {
    /// Shrink a `Vec4` to a `Vec3`, dropping `w`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    /// Shrink a `Vec4` to a `Vec2`, dropping `z` and `w`
    #[inline]
    #[must_use]
    pub fn shrink_2(self) -> Vec2<T> {
        Vec2 { x: self.x, y: self.y }
    }
}

impl<T: Real> Display for Vec4<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {}, {})", self.x, self.y, self.z, self.w))
    }
}
