use crate::*;

impl<T: Real> Mat4<T> {
    /// Create a new matrix with the given values, in row order
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m03: T,
               m10: T, m11: T, m12: T, m13: T,
               m20: T, m21: T, m22: T, m23: T,
               m30: T, m31: T, m32: T, m33: T) -> Self {
        Self { vals: [m00, m10, m20, m30,
                      m01, m11, m21, m31,
                      m02, m12, m22, m32,
                      m03, m13, m23, m33] }
    }

    /// Get the identity matrix
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self::diag(Vec4::set(T::one()))
    }

    /// Create a diagonal matrix
    #[must_use]
    pub fn diag(diag: Vec4<T>) -> Self {
        let mut mat = Self::zero();
        mat.vals[ 0] = diag.x;
        mat.vals[ 5] = diag.y;
        mat.vals[10] = diag.z;
        mat.vals[15] = diag.w;
        mat
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec4<T> {
        Vec4 { x: self.vals[0], y: self.vals[5], z: self.vals[10], w: self.vals[15] }
    }

    /// Calculate the trace
    #[inline]
    #[must_use]
    pub fn trace(self) -> T {
        self.vals[0] + self.vals[5] + self.vals[10] + self.vals[15]
    }

    /// 2x2 sub-determinants of the top 2 rows (`s`) and bottom 2 rows (`c`)
    fn sub_factors(&self) -> ([T; 6], [T; 6]) {
        let [a00, a10, a20, a30,
             a01, a11, a21, a31,
             a02, a12, a22, a32,
             a03, a13, a23, a33] = self.vals;

        let s = [
            a00 * a11 - a10 * a01,
            a00 * a12 - a10 * a02,
            a00 * a13 - a10 * a03,
            a01 * a12 - a11 * a02,
            a01 * a13 - a11 * a03,
            a02 * a13 - a12 * a03,
        ];
        let c = [
            a20 * a31 - a30 * a21,
            a20 * a32 - a30 * a22,
            a20 * a33 - a30 * a23,
            a21 * a32 - a31 * a22,
            a21 * a33 - a31 * a23,
            a22 * a33 - a32 * a23,
        ];
        (s, c)
    }

    /// Calculate the determinant
    #[must_use]
    pub fn determinant(self) -> T {
        let (s, c) = self.sub_factors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Calculate the adjugate (transposed cofactor matrix)
    #[must_use]
    pub fn adjugate(self) -> Self {
        let (s, c) = self.sub_factors();
        let [a00, a10, a20, a30,
             a01, a11, a21, a31,
             a02, a12, a22, a32,
             a03, a13, a23, a33] = self.vals;

        Self { vals: [
             a11 * c[5] - a12 * c[4] + a13 * c[3],
            -a10 * c[5] + a12 * c[2] - a13 * c[1],
             a10 * c[4] - a11 * c[2] + a13 * c[0],
            -a10 * c[3] + a11 * c[1] - a12 * c[0],

            -a01 * c[5] + a02 * c[4] - a03 * c[3],
             a00 * c[5] - a02 * c[2] + a03 * c[1],
            -a00 * c[4] + a01 * c[2] - a03 * c[0],
             a00 * c[3] - a01 * c[1] + a02 * c[0],

             a31 * s[5] - a32 * s[4] + a33 * s[3],
            -a30 * s[5] + a32 * s[2] - a33 * s[1],
             a30 * s[4] - a31 * s[2] + a33 * s[0],
            -a30 * s[3] + a31 * s[1] - a32 * s[0],

            -a21 * s[5] + a22 * s[4] - a23 * s[3],
             a20 * s[5] - a22 * s[2] + a23 * s[1],
            -a20 * s[4] + a21 * s[2] - a23 * s[0],
             a20 * s[3] - a21 * s[1] + a22 * s[0],
        ] }
    }

    /// Calculate the inverse, or `None` when the determinant is approximately 0
    #[must_use]
    pub fn try_inverse(self) -> Option<Self> {
        let det = self.determinant();
        if scalar::approx_eq(det, T::zero()) {
            None
        } else {
            Some(self.adjugate() * det.rcp())
        }
    }

    /// Calculate the inverse
    ///
    /// A singular matrix (determinant approximately 0) results in the zero matrix.
    #[must_use]
    pub fn inverse(self) -> Self {
        self.try_inverse().unwrap_or_else(Self::zero)
    }

    /// Get the upper-left 3x3 part of the matrix
    #[must_use]
    pub fn mat3(self) -> Mat3<T> {
        Mat3::from_array([self.vals[0], self.vals[1], self.vals[ 2],
                          self.vals[4], self.vals[5], self.vals[ 6],
                          self.vals[8], self.vals[9], self.vals[10]])
    }

    /// Extract the scale along each axis, i.e. the lengths of the first 3 basis vectors
    #[must_use]
    pub fn extract_3d_scale(self) -> Vec3<T> {
        Vec3 {
            x: self.column(0).shrink().len(),
            y: self.column(1).shrink().len(),
            z: self.column(2).shrink().len(),
        }
    }

    /// Extract the largest scale of the 3 axes
    #[must_use]
    pub fn extract_max_scale(self) -> T {
        let scale = self.extract_3d_scale();
        scalar::max(scalar::max(scale.x, scale.y), scale.z)
    }

    /// Transform a point (implicit w-coord of 1), including the perspective divide when the resulting w is not 0
    #[must_use]
    pub fn transform_coordinate(self, point: Vec3<T>) -> Vec3<T> {
        let res = self * point.extend(T::one());
        if res.w == T::zero() {
            res.shrink()
        } else {
            res.shrink() / res.w
        }
    }

    /// Transform a direction (implicit w-coord of 0), ignoring the translation
    #[must_use]
    pub fn transform_normal(self, normal: Vec3<T>) -> Vec3<T> {
        (self * normal.extend(T::zero())).shrink()
    }

    //--------------------------------------------------------------
    // Affine transforms

    /// Create a translation matrix
    #[must_use]
    pub fn create_translation(trans: Vec3<T>) -> Self {
        let mut mat = Self::identity();
        mat.vals[12] = trans.x;
        mat.vals[13] = trans.y;
        mat.vals[14] = trans.z;
        mat
    }

    /// Create a scale matrix
    #[inline]
    #[must_use]
    pub fn create_scale(scale: Vec3<T>) -> Self {
        Self::diag(scale.extend(T::one()))
    }

    /// Create a shear of the y and z coordinates along x: `y' = y + y_shear * x`, `z' = z + z_shear * x`
    #[must_use]
    pub fn create_shear_x(y_shear: T, z_shear: T) -> Self {
        let mut mat = Self::identity();
        mat.vals[1] = y_shear;
        mat.vals[2] = z_shear;
        mat
    }

    /// Create a shear of the x and z coordinates along y: `x' = x + x_shear * y`, `z' = z + z_shear * y`
    #[must_use]
    pub fn create_shear_y(x_shear: T, z_shear: T) -> Self {
        let mut mat = Self::identity();
        mat.vals[4] = x_shear;
        mat.vals[6] = z_shear;
        mat
    }

    /// Create a shear of the x and y coordinates along z: `x' = x + x_shear * z`, `y' = y + y_shear * z`
    #[must_use]
    pub fn create_shear_z(x_shear: T, y_shear: T) -> Self {
        let mut mat = Self::identity();
        mat.vals[8] = x_shear;
        mat.vals[9] = y_shear;
        mat
    }

    /// Create a rotation around the x-axis
    #[inline]
    #[must_use]
    pub fn create_rotation_x(angle: impl Into<Radians<T>>) -> Self {
        Mat3::create_rotation_x(angle).mat4()
    }

    /// Create a rotation around the y-axis
    #[inline]
    #[must_use]
    pub fn create_rotation_y(angle: impl Into<Radians<T>>) -> Self {
        Mat3::create_rotation_y(angle).mat4()
    }

    /// Create a rotation around the z-axis
    #[inline]
    #[must_use]
    pub fn create_rotation_z(angle: impl Into<Radians<T>>) -> Self {
        Mat3::create_rotation_z(angle).mat4()
    }

    /// Create a rotation of `angle` around an arbitrary `axis` (Rodrigues' rotation formula)
    ///
    /// The axis is normalized before use.
    #[must_use]
    pub fn create_rotation_axis(angle: impl Into<Radians<T>>, axis: Vec3<T>) -> Self {
        let (s, c) = angle.into().sin_cos();
        let k = T::one() - c;
        let Vec3 { x, y, z } = axis.normalize();
        let zero = T::zero();

        Self { vals: [x * x * k + c    , x * y * k + z * s, x * z * k - y * s, zero,
                      x * y * k - z * s, y * y * k + c    , y * z * k + x * s, zero,
                      x * z * k + y * s, y * z * k - x * s, z * z * k + c    , zero,
                      zero             , zero             , zero             , T::one()] }
    }

    //--------------------------------------------------------------
    // Projections and views

    /// Create an orthographic projection, mapping the box `[left, right] x [bottom, top] x [-near, -far]` to the NDC cube
    #[must_use]
    pub fn create_ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let zero = T::zero();
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self { vals: [two / rml            , zero                 , zero                 , zero,
                      zero                 , two / tmb            , zero                 , zero,
                      zero                 , zero                 , -two / fmn           , zero,
                      -(right + left) / rml, -(top + bottom) / tmb, -(far + near) / fmn, T::one()] }
    }

    /// Create an orthographic projection for 2D rendering, with a depth range of `[-1, 1]`
    ///
    /// Passing `bottom > top` creates a y-down projection, as used for screen coordinates.
    #[inline]
    #[must_use]
    pub fn create_ortho_2d(left: T, right: T, bottom: T, top: T) -> Self {
        Self::create_ortho(left, right, bottom, top, -T::one(), T::one())
    }

    /// Create a perspective projection with a vertical field of view
    #[must_use]
    pub fn create_perspective(fov_y: impl Into<Radians<T>>, aspect: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let zero = T::zero();
        let f = (fov_y.into().0 / two).tan().rcp();
        let nmf = near - far;

        Self { vals: [f / aspect, zero, zero                 , zero,
                      zero      , f   , zero                 , zero,
                      zero      , zero, (near + far) / nmf   , -T::one(),
                      zero      , zero, two * far * near / nmf, zero] }
    }

    /// Create a perspective projection from the frustum planes at the near plane
    #[must_use]
    pub fn create_frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let zero = T::zero();
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self { vals: [two * near / rml    , zero               , zero                      , zero,
                      zero                , two * near / tmb   , zero                      , zero,
                      (right + left) / rml, (top + bottom) / tmb, -(far + near) / fmn      , -T::one(),
                      zero                , zero               , -two * far * near / fmn   , zero] }
    }

    /// Create a right-handed view matrix, looking from `eye` towards `center`
    ///
    /// The side vector is normalized, so `up` does not need to be perpendicular to the view direction.
    #[must_use]
    pub fn create_look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
        let forward = (center - eye).normalize();
        let side = forward.cross(up.normalize()).normalize();
        let up = side.cross(forward);
        let zero = T::zero();

        Self { vals: [side.x        , up.x        , -forward.x      , zero,
                      side.y        , up.y        , -forward.y      , zero,
                      side.z        , up.z        , -forward.z      , zero,
                      -side.dot(eye), -up.dot(eye), forward.dot(eye), T::one()] }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn identity_is_exact() {
        let ident = Mat4::<f32>::identity();
        assert_eq!(ident * ident, ident);
        assert_eq!(ident.determinant(), 1.0);
        assert_eq!(ident.inverse(), ident);
    }

    #[test]
    fn affine_inverse() {
        let mat = Mat4::new(2.0f64, 0.0, 0.0, 1.0,
                            0.0, 3.0, 0.0, 2.0,
                            0.0, 0.0, 4.0, 3.0,
                            0.0, 0.0, 0.0, 1.0);
        assert_eq!(mat.determinant(), 24.0);

        let expected = Mat4::new(0.5, 0.0, 0.0, -0.5,
                                 0.0, 1.0 / 3.0, 0.0, -2.0 / 3.0,
                                 0.0, 0.0, 0.25, -0.75,
                                 0.0, 0.0, 0.0, 1.0);
        assert!(mat.inverse().is_close_to(expected, 1e-15));
    }

    #[test]
    fn general_inverse() {
        let mat = Mat4::new(1.0f64, 2.0, 0.0, -1.0,
                            3.0, 1.0, 4.0, 2.0,
                            0.0, -2.0, 1.0, 5.0,
                            2.0, 0.0, 3.0, 1.0);
        let det = mat.determinant();
        assert!(det.abs() > 1.0);
        assert!((mat.adjugate() * mat).is_close_to(Mat4::identity() * det, 1e-12));
        assert!((mat * mat.inverse()).is_close_to(Mat4::identity(), 1e-13));
        assert!((mat.inverse() * mat).is_close_to(Mat4::identity(), 1e-13));
    }

    #[test]
    fn singular_inverse_is_zero() {
        let mut mat = Mat4::<f32>::identity();
        mat.set_row(2, Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert!(mat.try_inverse().is_none());
        assert_eq!(mat.inverse(), Mat4::zero());
    }

    #[test]
    fn translation_scale_shear() {
        let p = Vec4::new(1.0f32, 1.0, 1.0, 1.0);
        assert_eq!(Mat4::create_translation(Vec3::new(1.0, 2.0, 3.0)) * p, Vec4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(Mat4::create_scale(Vec3::new(1.0, 2.0, 3.0)) * p, Vec4::new(1.0, 2.0, 3.0, 1.0));

        let p = Vec4::new(1.0f32, 2.0, 3.0, 1.0);
        assert_eq!(Mat4::create_shear_x(2.0, 3.0) * p, Vec4::new(1.0, 4.0, 6.0, 1.0));
        assert_eq!(Mat4::create_shear_y(2.0, 3.0) * p, Vec4::new(5.0, 2.0, 9.0, 1.0));
        assert_eq!(Mat4::create_shear_z(2.0, 3.0) * p, Vec4::new(7.0, 11.0, 3.0, 1.0));
    }

    #[test]
    fn axis_rotation_matches_basis_rotations() {
        let angle = Radians(0.7f64);
        assert!(Mat4::create_rotation_axis(angle, Vec3::new(1.0, 0.0, 0.0)).is_close_to(Mat4::create_rotation_x(angle), 1e-15));
        assert!(Mat4::create_rotation_axis(angle, Vec3::new(0.0, 1.0, 0.0)).is_close_to(Mat4::create_rotation_y(angle), 1e-15));
        assert!(Mat4::create_rotation_axis(angle, Vec3::new(0.0, 0.0, 2.0)).is_close_to(Mat4::create_rotation_z(angle), 1e-15));

        let rot = Mat4::create_rotation_axis(Radians(1.3f64), Vec3::new(1.0, 2.0, 3.0));
        assert!((rot * rot.transpose()).is_close_to(Mat4::identity(), 1e-14));
        assert!(rot.determinant().is_close_to(1.0, 1e-14));
    }

    #[test]
    fn perspective() {
        let proj = Mat4::create_perspective(Radians(f64::HALF_PI), 2.0, 1.0, 3.0);
        assert!(proj[0].is_close_to(0.5, 1e-15));
        assert!(proj[5].is_close_to(1.0, 1e-15));
        assert_eq!(proj[10], -2.0);
        assert_eq!(proj[11], -1.0);
        assert_eq!(proj[14], -3.0);
        assert_eq!(proj[15], 0.0);

        // The near and far plane map to -1 and 1
        assert!(proj.transform_coordinate(Vec3::new(0.0, 0.0, -1.0)).z.is_close_to(-1.0, 1e-15));
        assert!(proj.transform_coordinate(Vec3::new(0.0, 0.0, -3.0)).z.is_close_to(1.0, 1e-15));
    }

    #[test]
    fn frustum_generalizes_perspective() {
        let fov = Degrees(60.0f64);
        let (aspect, near, far) = (1.5, 0.5, 50.0);
        let top = near * (fov.to_radians().0 / 2.0).tan();
        let right = top * aspect;

        let frustum = Mat4::create_frustum(-right, right, -top, top, near, far);
        let perspective = Mat4::create_perspective(fov, aspect, near, far);
        assert!(frustum.is_close_to(perspective, 1e-12));
    }

    #[test]
    fn ortho() {
        let proj = Mat4::create_ortho(0.0f32, 2.0, 0.0, 2.0, -1.0, 1.0);
        assert_eq!(proj.to_array(), [1.0, 0.0, 0.0, 0.0,
                                     0.0, 1.0, 0.0, 0.0,
                                     0.0, 0.0, -1.0, 0.0,
                                     -1.0, -1.0, 0.0, 1.0]);
        assert_eq!(Mat4::create_ortho_2d(0.0f32, 2.0, 0.0, 2.0), proj);
    }

    #[test]
    fn look_at() {
        let view = Mat4::create_look_at(Vec3::new(0.0f64, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(view.transform_coordinate(Vec3::new(1.0, 2.0, 3.0)).is_close_to(Vec3::new(3.0, 2.0, -1.0), 1e-15));

        // The eye maps to the origin, the center lies on -z
        let eye = Vec3::new(4.0f64, 3.0, 3.0);
        let view = Mat4::create_look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        assert!(view.transform_coordinate(eye).is_close_to(Vec3::zero(), 1e-14));
        let center = view.transform_coordinate(Vec3::zero());
        assert!(center.x.is_close_to(0.0, 1e-14));
        assert!(center.y.is_close_to(0.0, 1e-14));
        assert!(center.z.is_close_to(-eye.len(), 1e-14));
        assert!((view.mat3() * view.mat3().transpose()).is_close_to(Mat3::identity(), 1e-14));
    }

    #[test]
    fn scale_extraction() {
        let mat = Mat4::create_translation(Vec3::new(5.0f64, 6.0, 7.0)) *
                  Mat4::create_rotation_y(Radians(0.4)) *
                  Mat4::create_scale(Vec3::new(2.0, 3.0, 4.0));
        assert!(mat.extract_3d_scale().is_close_to(Vec3::new(2.0, 3.0, 4.0), 1e-14));
        assert!(mat.extract_max_scale().is_close_to(4.0, 1e-14));
        assert!(mat.transform_normal(Vec3::new(0.0, 1.0, 0.0)).is_close_to(Vec3::new(0.0, 3.0, 0.0), 1e-14));
    }
}
