use crate::*;

impl<T: Real> Mat3<T> {
    /// Create a new matrix with the given values, in row order
    #[inline]
    #[must_use]
    pub fn new(m00: T, m01: T, m02: T,
               m10: T, m11: T, m12: T,
               m20: T, m21: T, m22: T) -> Self {
        Self { vals: [m00, m10, m20,
                      m01, m11, m21,
                      m02, m12, m22] }
    }

    /// Get the identity matrix
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self::diag(Vec3::set(T::one()))
    }

    /// Create a diagonal matrix
    #[inline]
    #[must_use]
    pub fn diag(diag: Vec3<T>) -> Self {
        let zero = T::zero();
        Self { vals: [diag.x, zero  , zero,
                      zero  , diag.y, zero,
                      zero  , zero  , diag.z] }
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec3<T> {
        Vec3 { x: self.vals[0], y: self.vals[4], z: self.vals[8] }
    }

    /// Calculate the trace
    #[inline]
    #[must_use]
    pub fn trace(self) -> T {
        self.vals[0] + self.vals[4] + self.vals[8]
    }

    /// Calculate the determinant
    #[must_use]
    pub fn determinant(self) -> T {
        let [a00, a10, a20, a01, a11, a21, a02, a12, a22] = self.vals;
        a00 * (a11 * a22 - a12 * a21) - a01 * (a10 * a22 - a12 * a20) + a02 * (a10 * a21 - a11 * a20)
    }

    /// Calculate the adjugate (transposed cofactor matrix)
    #[must_use]
    pub fn adjugate(self) -> Self {
        let [a00, a10, a20, a01, a11, a21, a02, a12, a22] = self.vals;
        Self { vals: [
            a11 * a22 - a12 * a21, a12 * a20 - a10 * a22, a10 * a21 - a11 * a20,
            a02 * a21 - a01 * a22, a00 * a22 - a02 * a20, a01 * a20 - a00 * a21,
            a01 * a12 - a02 * a11, a02 * a10 - a00 * a12, a00 * a11 - a01 * a10,
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

    /// Get the upper-left 2x2 part of the matrix
    #[must_use]
    pub fn mat2(self) -> Mat2<T> {
        Mat2::from_array([self.vals[0], self.vals[1],
                          self.vals[3], self.vals[4]])
    }

    /// Extend the matrix to a `Mat4`, with the added row and column taken from the identity
    #[must_use]
    pub fn mat4(self) -> Mat4<T> {
        let zero = T::zero();
        Mat4::from_array([self.vals[0], self.vals[1], self.vals[2], zero,
                          self.vals[3], self.vals[4], self.vals[5], zero,
                          self.vals[6], self.vals[7], self.vals[8], zero,
                          zero        , zero        , zero        , T::one()])
    }

    //--------------------------------------------------------------
    // 3D linear transforms

    /// Create a scale matrix
    #[inline]
    #[must_use]
    pub fn create_scale(scale: Vec3<T>) -> Self {
        Self::diag(scale)
    }

    /// Create a rotation around the x-axis
    #[must_use]
    pub fn create_rotation_x(angle: impl Into<Radians<T>>) -> Self {
        let (sin, cos) = angle.into().sin_cos();
        let zero = T::zero();
        Self { vals: [T::one(), zero, zero,
                      zero    , cos , sin,
                      zero    , -sin, cos] }
    }

    /// Create a rotation around the y-axis
    #[must_use]
    pub fn create_rotation_y(angle: impl Into<Radians<T>>) -> Self {
        let (sin, cos) = angle.into().sin_cos();
        let zero = T::zero();
        Self { vals: [cos , zero    , -sin,
                      zero, T::one(), zero,
                      sin , zero    , cos] }
    }

    /// Create a rotation around the z-axis
    #[must_use]
    pub fn create_rotation_z(angle: impl Into<Radians<T>>) -> Self {
        let (sin, cos) = angle.into().sin_cos();
        let zero = T::zero();
        Self { vals: [cos , sin , zero,
                      -sin, cos , zero,
                      zero, zero, T::one()] }
    }

    //--------------------------------------------------------------
    // 2D homogeneous transforms

    /// Create a 2D rotation, rotating counter-clockwise
    #[inline]
    #[must_use]
    pub fn create_rotation_2d(angle: impl Into<Radians<T>>) -> Self {
        Self::create_rotation_z(angle)
    }

    /// Create a 2D translation
    #[must_use]
    pub fn create_translation_2d(trans: Vec2<T>) -> Self {
        let mut mat = Self::identity();
        mat.vals[6] = trans.x;
        mat.vals[7] = trans.y;
        mat
    }

    /// Create a 2D scale
    #[inline]
    #[must_use]
    pub fn create_scale_2d(scale: Vec2<T>) -> Self {
        Self::diag(scale.extend(T::one()))
    }

    /// Create a 2D shear along the x-axis: `x' = x + shear * y`
    #[must_use]
    pub fn create_shear_x_2d(shear: T) -> Self {
        let mut mat = Self::identity();
        mat.vals[3] = shear;
        mat
    }

    /// Create a 2D shear along the y-axis: `y' = y + shear * x`
    #[must_use]
    pub fn create_shear_y_2d(shear: T) -> Self {
        let mut mat = Self::identity();
        mat.vals[1] = shear;
        mat
    }
}
