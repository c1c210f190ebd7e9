use crate::*;

impl<T: Real> Mat2<T> {
    /// Create a new matrix with the given values, in row order
    #[inline]
    #[must_use]
    pub fn new(m00: T, m01: T,
               m10: T, m11: T) -> Self {
        Self { vals: [m00, m10,
                      m01, m11] }
    }

    /// Get the identity matrix
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        Self::diag(Vec2::set(T::one()))
    }

    /// Create a diagonal matrix
    #[inline]
    #[must_use]
    pub fn diag(diag: Vec2<T>) -> Self {
        let zero = T::zero();
        Self { vals: [diag.x, zero,
                      zero  , diag.y] }
    }

    /// Get the diagonal
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> Vec2<T> {
        Vec2 { x: self.vals[0], y: self.vals[3] }
    }

    /// Calculate the trace
    #[inline]
    #[must_use]
    pub fn trace(self) -> T {
        self.vals[0] + self.vals[3]
    }

    /// Calculate the determinant
    #[inline]
    #[must_use]
    pub fn determinant(self) -> T {
        self.vals[0] * self.vals[3] - self.vals[2] * self.vals[1]
    }

    /// Calculate the adjugate (transposed cofactor matrix)
    #[must_use]
    pub fn adjugate(self) -> Self {
        Self { vals: [ self.vals[3], -self.vals[1],
                      -self.vals[2],  self.vals[0]] }
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

    /// Extend the matrix to a `Mat3`, with the added row and column taken from the identity
    #[must_use]
    pub fn mat3(self) -> Mat3<T> {
        let zero = T::zero();
        Mat3::from_array([self.vals[0], self.vals[1], zero,
                          self.vals[2], self.vals[3], zero,
                          zero        , zero        , T::one()])
    }

    /// Create a 2D rotation matrix, rotating counter-clockwise
    #[must_use]
    pub fn create_rotation(angle: impl Into<Radians<T>>) -> Self {
        let (sin, cos) = angle.into().sin_cos();
        Self { vals: [ cos, sin,
                      -sin, cos] }
    }

    /// Create a 2D scale matrix
    #[inline]
    #[must_use]
    pub fn create_scale(scale: Vec2<T>) -> Self {
        Self::diag(scale)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn determinant_and_inverse() {
        let mat = Mat2::new(4.0f64, 7.0,
                            2.0, 6.0);
        assert_eq!(mat.to_array(), [4.0, 2.0, 7.0, 6.0]);
        assert_eq!(mat.determinant(), 10.0);
        assert_eq!(mat.trace(), 10.0);
        assert_eq!(mat.diagonal(), Vec2::new(4.0, 6.0));

        let inv = mat.inverse();
        assert!(inv.is_close_to(Mat2::new(0.6, -0.7, -0.2, 0.4), 1e-14));
        assert!((mat * inv).is_close_to(Mat2::identity(), 1e-14));
    }

    #[test]
    fn singular_inverse_is_zero() {
        let mat = Mat2::new(1.0f32, 2.0,
                            2.0, 4.0);
        assert!(mat.try_inverse().is_none());
        assert_eq!(mat.inverse(), Mat2::zero());
    }

    #[test]
    fn rotation() {
        let rot = Mat2::create_rotation(Radians(f64::HALF_PI));
        assert!((rot * Vec2::new(1.0, 0.0)).is_close_to(Vec2::new(0.0, 1.0), 1e-15));

        let rot = Mat2::create_rotation(Degrees(180.0f64));
        assert!((rot * Vec2::new(1.0, 0.0)).is_close_to(Vec2::new(-1.0, 0.0), 1e-15));
    }

    #[test]
    fn widen() {
        let mat = Mat2::create_scale(Vec2::new(2.0f32, 3.0)).mat3();
        assert_eq!(mat.diagonal(), Vec3::new(2.0, 3.0, 1.0));
        assert_eq!(mat.mat2(), Mat2::create_scale(Vec2::new(2.0, 3.0)));
    }
}
