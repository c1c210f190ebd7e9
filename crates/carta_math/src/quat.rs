use core::{
    ops::*,
    fmt::Display,
};
use crate::*;

/// Quaternion, stored as a real part `w` followed by the imaginary part `v`
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Quat<T: Real> {
    pub w : T,
    pub v : Vec3<T>,
}

impl<T: Real> Quat<T> {
    /// Create a new quaternion
    #[inline]
    #[must_use]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, v: Vec3 { x, y, z } }
    }

    /// Create a new quaternion from a `real` and `imaginary` part
    #[inline]
    #[must_use]
    pub fn from_real_and_imaginary(real: T, imaginary: Vec3<T>) -> Self {
        Self { w: real, v: imaginary }
    }

    /// Create a quaternion from an array in `(w, x, y, z)` order
    #[inline(always)]
    #[must_use]
    pub fn from_array(arr: [T; 4]) -> Self {
        let [w, x, y, z] = arr;
        Self::new(w, x, y, z)
    }

    /// Get the content of the quaternion as an array in `(w, x, y, z)` order
    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [T; 4] {
        [self.w, self.v.x, self.v.y, self.v.z]
    }

    /// Create an identity quaternion
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self { w: T::one(), v: Vec3::zero() }
    }

    /// Get the x component of the imaginary part
    #[inline(always)]
    #[must_use]
    pub fn x(self) -> T {
        self.v.x
    }

    /// Get the y component of the imaginary part
    #[inline(always)]
    #[must_use]
    pub fn y(self) -> T {
        self.v.y
    }

    /// Get the z component of the imaginary part
    #[inline(always)]
    #[must_use]
    pub fn z(self) -> T {
        self.v.z
    }

    /// Create a quaternion rotating `angle` around `axis`
    ///
    /// The axis is normalized before use.
    #[must_use]
    pub fn from_axis_angle(angle: impl Into<Radians<T>>, axis: Vec3<T>) -> Self {
        let (sin, cos) = (angle.into() * T::from_f64(0.5)).sin_cos();
        Self { w: cos, v: axis.normalize() * sin }
    }

    /// Create a quaternion from 3 euler angles, composed in the given `order`
    ///
    /// The angles are applied as `q_axis1(first) * q_axis2(second) * q_axis3(third)`.
    #[must_use]
    pub fn from_angles(first: impl Into<Radians<T>>, second: impl Into<Radians<T>>, third: impl Into<Radians<T>>, order: RotationOrder) -> Self {
        let half = T::from_f64(0.5);
        let (s1, c1) = (first.into() * half).sin_cos();
        let (s2, c2) = (second.into() * half).sin_cos();
        let (s3, c3) = (third.into() * half).sin_cos();

        match order {
            RotationOrder::XYX => Self::new(
                c1 * c2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * c2 * c3,
                c1 * s2 * c3 + s1 * s2 * s3,
                s1 * s2 * c3 - c1 * s2 * s3,
            ),
            RotationOrder::XYZ => Self::new(
                c1 * c2 * c3 - s1 * s2 * s3,
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
            ),
            RotationOrder::XZX => Self::new(
                c1 * c2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * c2 * c3,
                c1 * s2 * s3 - s1 * s2 * c3,
                c1 * s2 * c3 + s1 * s2 * s3,
            ),
            RotationOrder::XZY => Self::new(
                c1 * c2 * c3 + s1 * s2 * s3,
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * s2 * c3 + s1 * c2 * s3,
            ),
            RotationOrder::YXY => Self::new(
                c1 * c2 * c3 - s1 * c2 * s3,
                c1 * s2 * c3 + s1 * s2 * s3,
                c1 * c2 * s3 + s1 * c2 * c3,
                c1 * s2 * s3 - s1 * s2 * c3,
            ),
            RotationOrder::YXZ => Self::new(
                c1 * c2 * c3 + s1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
            ),
            RotationOrder::YZX => Self::new(
                c1 * c2 * c3 - s1 * s2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
            ),
            RotationOrder::YZY => Self::new(
                c1 * c2 * c3 - s1 * c2 * s3,
                s1 * s2 * c3 - c1 * s2 * s3,
                c1 * c2 * s3 + s1 * c2 * c3,
                c1 * s2 * c3 + s1 * s2 * s3,
            ),
            RotationOrder::ZXY => Self::new(
                c1 * c2 * c3 - s1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                s1 * c2 * c3 + c1 * s2 * s3,
            ),
            RotationOrder::ZXZ => Self::new(
                c1 * c2 * c3 - s1 * c2 * s3,
                c1 * s2 * c3 + s1 * s2 * s3,
                s1 * s2 * c3 - c1 * s2 * s3,
                c1 * c2 * s3 + s1 * c2 * c3,
            ),
            RotationOrder::ZYX => Self::new(
                c1 * c2 * c3 + s1 * s2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * s2 * c3 + s1 * c2 * s3,
                s1 * c2 * c3 - c1 * s2 * s3,
            ),
            RotationOrder::ZYZ => Self::new(
                c1 * c2 * c3 - s1 * c2 * s3,
                c1 * s2 * s3 - s1 * s2 * c3,
                c1 * s2 * c3 + s1 * s2 * s3,
                c1 * c2 * s3 + s1 * c2 * c3,
            ),
        }
    }

    /// Create a unit quaternion from the rotation part of a 4x4 matrix
    #[must_use]
    pub fn from_mat4(mat: Mat4<T>) -> Self {
        let m = mat.to_array();
        let (m00, m11, m22) = (m[0], m[5], m[10]);
        let quarter = T::from_f64(0.25);
        let two = T::from_i32(2);

        let trace = m00 + m11 + m22;
        let quat = if trace > T::zero() {
            let s = T::from_f64(0.5) / (trace + T::one()).sqrt();
            Self::new(quarter / s,
                      (m[6] - m[9]) * s,
                      (m[8] - m[2]) * s,
                      (m[1] - m[4]) * s)
        } else if m00 > m11 && m00 > m22 {
            let s = two * (T::one() + m00 - m11 - m22).sqrt();
            Self::new((m[6] - m[9]) / s,
                      quarter * s,
                      (m[4] + m[1]) / s,
                      (m[8] + m[2]) / s)
        } else if m11 > m22 {
            let s = two * (T::one() + m11 - m00 - m22).sqrt();
            Self::new((m[8] - m[2]) / s,
                      (m[4] + m[1]) / s,
                      quarter * s,
                      (m[9] + m[6]) / s)
        } else {
            let s = two * (T::one() + m22 - m00 - m11).sqrt();
            Self::new((m[1] - m[4]) / s,
                      (m[8] + m[2]) / s,
                      (m[9] + m[6]) / s,
                      quarter * s)
        };
        quat.normalize()
    }

    /// Convert the quaternion to a homogeneous 4x4 rotation matrix
    ///
    /// The quaternion is expected to have a unit norm.
    #[must_use]
    pub fn to_mat4(self) -> Mat4<T> {
        let one = T::one();
        let two = T::from_i32(2);
        let zero = T::zero();
        let Self { w, v: Vec3 { x, y, z } } = self;

        Mat4::from_array([
            one - two * y * y - two * z * z, two * x * y + two * w * z      , two * x * z - two * w * y      , zero,
            two * x * y - two * w * z      , one - two * x * x - two * z * z, two * y * z + two * w * x      , zero,
            two * x * z + two * w * y      , two * y * z - two * w * x      , one - two * x * x - two * y * y, zero,
            zero                           , zero                           , zero                           , one,
        ])
    }

    /// Convert the quaternion to a 3x3 rotation matrix
    #[inline]
    #[must_use]
    pub fn to_mat3(self) -> Mat3<T> {
        self.to_mat4().mat3()
    }

    /// Calculate the dot product of 2 quaternions
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.w * other.w + self.v.dot(other.v)
    }

    /// Get the square norm of the quaternion
    #[inline]
    #[must_use]
    pub fn norm_sq(self) -> T {
        self.dot(self)
    }

    /// Get the norm of the quaternion
    #[inline]
    #[must_use]
    pub fn norm(self) -> T {
        self.norm_sq().sqrt()
    }

    /// Normalize the quaternion, a quaternion with a norm of 0 results in the identity quaternion
    #[must_use]
    pub fn normalize(self) -> Self {
        let norm = self.norm();
        if norm == T::zero() {
            Self::identity()
        } else {
            self * norm.rcp()
        }
    }

    /// Check if the quaternion is close to being normalized, using a given epsilon
    #[inline]
    #[must_use]
    pub fn is_close_to_normalized(self, epsilon: T) -> bool {
        (self.norm_sq() - T::one()).abs() <= epsilon
    }

    /// Check if the quaternion is normalized, using the default epsilon
    #[inline]
    #[must_use]
    pub fn is_normalized(self) -> bool {
        scalar::approx_eq(self.norm_sq(), T::one())
    }

    /// Get the conjugate of the quaternion
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self { w: self.w, v: -self.v }
    }

    /// Get the inverse of the quaternion
    #[must_use]
    pub fn inverse(self) -> Self {
        self.conjugate() * self.norm_sq().rcp()
    }

    /// Rotate a point by the quaternion
    ///
    /// # Panics
    ///
    /// Panics if the quaternion does not have a unit norm.
    #[must_use]
    pub fn rotate(self, point: Vec3<T>) -> Vec3<T> {
        assert!(self.is_close_to_normalized(T::from_f64(1e-4)), "Only unit quaternions can rotate a point, norm^2 is {}", self.norm_sq());

        // p + 2v x (v x p + wp)
        let two = T::from_i32(2);
        point + self.v.cross(self.v.cross(point) + point * self.w) * two
    }

    /// Linearly interpolate between 2 quaternions
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// Linearly interpolate between 2 quaternions and normalize the result
    #[inline]
    #[must_use]
    pub fn nlerp(self, other: Self, t: T) -> Self {
        self.lerp(other, t).normalize()
    }

    /// Spherical linear interpolation between 2 quaternions
    ///
    /// Both quaternions are normalized first and the shortest arc is taken, so `other` may be flipped to `-other`.
    /// Nearly identical orientations fall back to `nlerp`.
    #[must_use]
    pub fn slerp(self, other: Self, t: T) -> Self {
        let from = self.normalize();
        let to = other.normalize();

        let (to, dot) = match from.dot(to) {
            dot if dot < T::zero() => (-to, -dot),
            dot => (to, dot),
        };
        if dot > T::from_f64(0.9995) {
            return from.nlerp(to, t);
        }

        // Rounding can push the dot product out of the domain of acos
        let dot = scalar::clamp(dot, -T::one(), T::one());
        let theta = dot.acos() * t;
        let (sin, cos) = theta.sin_cos();

        let rel = (to - from * dot).normalize();
        from * cos + rel * sin
    }

    /// Check if 2 quaternions represent the same orientation (`q` and `-q` are equivalent), using a given epsilon
    #[must_use]
    pub fn orientation_eq_thresh(self, other: Self, epsilon: T) -> bool {
        self.normalize().dot(other.normalize()).abs() > T::one() - epsilon
    }

    /// Check if 2 quaternions represent the same orientation (`q` and `-q` are equivalent)
    #[must_use]
    pub fn orientation_eq(self, other: Self) -> bool {
        scalar::approx_eq(self.normalize().dot(other.normalize()).abs(), T::one())
    }

    /// Create the shortest rotation from the direction of `start` to the direction of `dest`
    #[must_use]
    pub fn between_vectors(start: Vec3<T>, dest: Vec3<T>) -> Self {
        let start = start.normalize();
        let dest = dest.normalize();
        let epsilon = T::from_f64(0.001);

        let cos_theta = start.dot(dest);
        if cos_theta < epsilon - T::one() {
            // Opposite directions, any perpendicular axis will do
            let mut axis = Vec3::new(T::one(), T::zero(), T::zero()).cross(start);
            if axis.len_sq() < epsilon {
                axis = Vec3::new(T::zero(), T::one(), T::zero()).cross(start);
            }
            return Self::from_axis_angle(Radians(T::PI), axis);
        }

        let axis = start.cross(dest);
        let ang = ((T::one() + cos_theta) * T::from_i32(2)).sqrt();
        Self { w: ang * T::from_f64(0.5), v: axis * ang.rcp() }
    }

    /// Create the rotation of a viewer at `eye` looking at `center`, with `up` as the approximate up direction
    ///
    /// The result transforms world directions into view space, matching the rotation part of [`Mat4::create_look_at`].
    #[must_use]
    pub fn look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
        let zero = T::zero();
        let dir = (center - eye).normalize();
        let rot_dir = Self::between_vectors(Vec3::new(zero, zero, -T::one()), dir);

        let right = dir.cross(up);
        let up = right.cross(dir);

        let cur_up = rot_dir.rotate(Vec3::new(zero, T::one(), zero));
        let rot_up = Self::between_vectors(cur_up, up);

        (rot_up * rot_dir).inverse()
    }
}

impl<T: Real> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { w: -self.w, v: -self.v }
    }
}

impl<T: Real> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { w: self.w + rhs.w, v: self.v + rhs.v }
    }
}

impl<T: Real> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { w: self.w - rhs.w, v: self.v - rhs.v }
    }
}

impl<T: Real> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self { w: self.w * rhs, v: self.v * rhs }
    }
}

impl<T: Real> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul for Quat<T> {
    type Output = Self;

    /// Hamilton product
    fn mul(self, rhs: Self) -> Self::Output {
        Self { w: self.w * rhs.w - self.v.dot(rhs.v),
               v: self.v.cross(rhs.v) + rhs.v * self.w + self.v * rhs.w }
    }
}

impl<T: Real> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> ApproxEq for Quat<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        (self.w - rhs.w).abs() <= epsilon && self.v.is_close_to(rhs.v, epsilon)
    }

    fn is_approx_eq_thresh(self, rhs: Self, epsilon: T) -> bool {
        scalar::approx_eq_thresh(self.w, rhs.w, epsilon) && self.v.is_approx_eq_thresh(rhs.v, epsilon)
    }

    fn is_approx_eq_func<F: Fn(T, T) -> bool>(self, rhs: Self, eq: F) -> bool {
        eq(self.w, rhs.w) && eq(self.v.x, rhs.v.x) && eq(self.v.y, rhs.v.y) && eq(self.v.z, rhs.v.z)
    }
}

impl<T: Real, U: Real> NumericCast<Quat<U>> for Quat<T> where
    T: NumericCast<U>
{
    fn cast(self) -> Quat<U> {
        Quat { w: self.w.cast(), v: self.v.cast() }
    }
}

impl<T: Real + Display> Display for Quat<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("({}, ({}, {}, {}))", self.w, self.v.x, self.v.y, self.v.z))
    }
}

#[allow(non_camel_case_types)] pub type f32quat = Quat<f32>;
#[allow(non_camel_case_types)] pub type f64quat = Quat<f64>;

static_assertions::assert_eq_size!(Quat<f32>, [f32; 4]);
static_assertions::assert_eq_size!(Quat<f64>, [f64; 4]);
