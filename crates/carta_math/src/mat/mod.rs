use core::{
    fmt::Display,
    ops::*,
};
use crate::{Real, Zero, ApproxEq, ApproxZero, NumericCast, Vec2, Vec3, Vec4, scalar};

mod mat2;
pub use mat2::*;

mod mat3;
pub use mat3::*;

mod mat4;
pub use mat4::*;

macro_rules! matrix_pre_multiplication {
    {$name:ident, $($ty:ty),*} => {
        $(
            impl Mul<$name<$ty>> for $ty {
                type Output = $name<$ty>;

                #[inline]
                fn mul(self, rhs: $name<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

/// Generate a column-major matrix with `$m` rows and `$n` columns.
///
/// `$col` is the vector type of a column (`$m` elements), `$row` the vector type of a row (`$n` elements).
macro_rules! generic_matrix {
    {
        $docs:meta;
        $name:ident, $m:literal, $n:literal, $col:ident, $row:ident, $transpose:ident;
        $($alias_ty:ident => $base_ty:ty),*
    } => {
        #[$docs]
        ///
        /// Element (`row`, `column`) is stored at index `column * ROWS + row`.
        #[repr(C)]
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T: Real> {
            vals : [T; $m * $n]
        }

        impl<T: Real> $name<T> {
            /// Number of rows
            pub const ROWS : usize = $m;
            /// Number of columns
            pub const COLUMNS : usize = $n;

            /// Create a matrix from an array in column-major order
            #[inline(always)]
            #[must_use]
            pub fn from_array(vals: [T; $m * $n]) -> Self {
                Self { vals }
            }

            /// Get the content of the matrix as an array in column-major order
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $m * $n] {
                self.vals
            }

            /// Get a reference to the column-major content of the matrix
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $m * $n] {
                &self.vals
            }

            /// Get a mutable reference to the column-major content of the matrix
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $m * $n] {
                &mut self.vals
            }

            /// Create a matrix from its columns
            #[must_use]
            pub fn from_columns(columns: [$col<T>; $n]) -> Self {
                let mut vals = [T::zero(); $m * $n];
                for (c, column) in columns.iter().enumerate() {
                    vals[c * $m..(c + 1) * $m].copy_from_slice(column.as_array());
                }
                Self { vals }
            }

            /// Create a matrix from its rows
            #[must_use]
            pub fn from_rows(rows: [$row<T>; $m]) -> Self {
                let mut vals = [T::zero(); $m * $n];
                for (r, row) in rows.iter().enumerate() {
                    for c in 0..$n {
                        vals[c * $m + r] = row[c];
                    }
                }
                Self { vals }
            }

            /// Get the element at (`row`, `column`)
            #[inline]
            #[must_use]
            pub fn at(&self, row: usize, column: usize) -> T {
                Self::check_bounds(row, column);
                self.vals[column * $m + row]
            }

            /// Set the element at (`row`, `column`)
            #[inline]
            pub fn set(&mut self, row: usize, column: usize, val: T) {
                Self::check_bounds(row, column);
                self.vals[column * $m + row] = val;
            }

            /// Get a row of the matrix
            #[must_use]
            pub fn row(&self, row: usize) -> $row<T> {
                assert!(row < $m, "row {row} out of range for a {}x{} matrix", $m, $n);
                let mut arr = [T::zero(); $n];
                for (c, val) in arr.iter_mut().enumerate() {
                    *val = self.vals[c * $m + row];
                }
                $row::from_array(arr)
            }

            /// Set a row of the matrix
            pub fn set_row(&mut self, row: usize, vals: $row<T>) {
                assert!(row < $m, "row {row} out of range for a {}x{} matrix", $m, $n);
                for (c, val) in vals.to_array().into_iter().enumerate() {
                    self.vals[c * $m + row] = val;
                }
            }

            /// Get a column of the matrix
            #[must_use]
            pub fn column(&self, column: usize) -> $col<T> {
                assert!(column < $n, "column {column} out of range for a {}x{} matrix", $m, $n);
                let mut arr = [T::zero(); $m];
                arr.copy_from_slice(&self.vals[column * $m..(column + 1) * $m]);
                $col::from_array(arr)
            }

            /// Set a column of the matrix
            pub fn set_column(&mut self, column: usize, vals: $col<T>) {
                assert!(column < $n, "column {column} out of range for a {}x{} matrix", $m, $n);
                self.vals[column * $m..(column + 1) * $m].copy_from_slice(vals.as_array());
            }

            /// Get the transpose of the matrix
            #[must_use]
            pub fn transpose(self) -> $transpose<T> {
                let mut vals = [T::zero(); $m * $n];
                for r in 0..$m {
                    for c in 0..$n {
                        vals[r * $n + c] = self.vals[c * $m + r];
                    }
                }
                $transpose::from_array(vals)
            }

            #[inline(always)]
            fn check_bounds(row: usize, column: usize) {
                assert!(row < $m && column < $n, "element ({row}, {column}) out of range for a {}x{} matrix", $m, $n);
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                &self.vals[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.vals[index]
            }
        }

        impl<T: Real> Index<(usize, usize)> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
                Self::check_bounds(row, column);
                &self.vals[column * $m + row]
            }
        }

        impl<T: Real> IndexMut<(usize, usize)> for $name<T> {
            #[inline]
            fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
                Self::check_bounds(row, column);
                &mut self.vals[column * $m + row]
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { vals: self.vals.map(|val| -val) }
            }
        }

        impl<T: Real> Add for $name<T> {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self::Output {
                self += rhs;
                self
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                for (val, rhs) in self.vals.iter_mut().zip(rhs.vals) {
                    *val += rhs;
                }
            }
        }

        impl<T: Real> Sub for $name<T> {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self::Output {
                self -= rhs;
                self
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                for (val, rhs) in self.vals.iter_mut().zip(rhs.vals) {
                    *val -= rhs;
                }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self { vals: self.vals.map(|val| val * rhs) }
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                for val in &mut self.vals {
                    *val *= rhs;
                }
            }
        }

        impl<T: Real> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self { vals: self.vals.map(|val| val / rhs) }
            }
        }

        impl<T: Real> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                for val in &mut self.vals {
                    *val /= rhs;
                }
            }
        }

        matrix_pre_multiplication!{$name, f32, f64}

        //--------------------------------------------------------------

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self { vals: [T::zero(); $m * $n] }
            }
        }

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                self.vals.iter().zip(rhs.vals).all(|(&a, b)| (a - b).abs() <= epsilon)
            }

            fn is_approx_eq_thresh(self, rhs: Self, epsilon: T) -> bool {
                self.vals.iter().zip(rhs.vals).all(|(&a, b)| scalar::approx_eq_thresh(a, b, epsilon))
            }

            fn is_approx_eq_func<F: Fn(T, T) -> bool>(self, rhs: Self, eq: F) -> bool {
                self.vals.iter().zip(rhs.vals).all(|(&a, b)| eq(a, b))
            }
        }

        impl<T: Real> ApproxZero for $name<T> {
            type Epsilon = T;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                self.vals.iter().all(|val| val.abs() <= epsilon)
            }

            fn is_zero(self) -> bool {
                self.vals.iter().all(|&val| scalar::approx_eq(val, T::zero()))
            }
        }

        impl<T: Real + NumericCast<U>, U: Real> NumericCast<$name<U>> for $name<T> {
            fn cast(self) -> $name<U> {
                $name::<U>::from_array(self.vals.map(|val| val.cast()))
            }
        }

        impl<T: Real> From<[T; $m * $n]> for $name<T> {
            fn from(vals: [T; $m * $n]) -> Self {
                Self { vals }
            }
        }

        /// Displays the matrix one row per line
        impl<T: Real> Display for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                for r in 0..$m {
                    if r != 0 {
                        f.write_str("\n")?;
                    }
                    f.write_str("[")?;
                    for c in 0..$n {
                        if c != 0 {
                            f.write_str(", ")?;
                        }
                        f.write_fmt(format_args!("{}", self.vals[c * $m + r]))?;
                    }
                    f.write_str("]")?;
                }
                Ok(())
            }
        }

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}

generic_matrix!{ doc = "2x2 matrix (column-major order)"; Mat2,   2, 2, Vec2, Vec2, Mat2;   f32m2 => f32, f64m2 => f64 }
generic_matrix!{ doc = "2x3 matrix (column-major order)"; Mat2x3, 2, 3, Vec2, Vec3, Mat3x2; f32m2x3 => f32, f64m2x3 => f64 }
generic_matrix!{ doc = "2x4 matrix (column-major order)"; Mat2x4, 2, 4, Vec2, Vec4, Mat4x2; f32m2x4 => f32, f64m2x4 => f64 }
generic_matrix!{ doc = "3x2 matrix (column-major order)"; Mat3x2, 3, 2, Vec3, Vec2, Mat2x3; f32m3x2 => f32, f64m3x2 => f64 }
generic_matrix!{ doc = "3x3 matrix (column-major order)"; Mat3,   3, 3, Vec3, Vec3, Mat3;   f32m3 => f32, f64m3 => f64 }
generic_matrix!{ doc = "3x4 matrix (column-major order)"; Mat3x4, 3, 4, Vec3, Vec4, Mat4x3; f32m3x4 => f32, f64m3x4 => f64 }
generic_matrix!{ doc = "4x2 matrix (column-major order)"; Mat4x2, 4, 2, Vec4, Vec2, Mat2x4; f32m4x2 => f32, f64m4x2 => f64 }
generic_matrix!{ doc = "4x3 matrix (column-major order)"; Mat4x3, 4, 3, Vec4, Vec3, Mat3x4; f32m4x3 => f32, f64m4x3 => f64 }
generic_matrix!{ doc = "4x4 matrix (column-major order)"; Mat4,   4, 4, Vec4, Vec4, Mat4;   f32m4 => f32, f64m4 => f64 }

// Every `MatMxN * MatNxO` and `MatMxN * VecN`
carta_macros::matrix_products!();

static_assertions::assert_eq_size!(Mat2<f32>, [f32; 4]);
static_assertions::assert_eq_size!(Mat3<f32>, [f32; 9]);
static_assertions::assert_eq_size!(Mat4<f32>, [u8; 64]);
static_assertions::assert_eq_size!(Mat4x3<f64>, [f64; 12]);

#[cfg(test)]
mod tests {
    use crate::*;

    fn mat2x3() -> Mat2x3<f64> {
        // [1 3 5]
        // [2 4 6]
        Mat2x3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    }

    #[test]
    fn column_major_access() {
        let mat = mat2x3();
        assert_eq!(mat.at(0, 0), 1.0);
        assert_eq!(mat.at(1, 0), 2.0);
        assert_eq!(mat.at(0, 2), 5.0);
        assert_eq!(mat[(1, 2)], 6.0);
        assert_eq!(mat[3], 4.0);
        assert_eq!(mat.row(0), Vec3::new(1.0, 3.0, 5.0));
        assert_eq!(mat.column(1), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn rows_and_columns() {
        let from_rows = Mat2x3::from_rows([Vec3::new(1.0, 3.0, 5.0), Vec3::new(2.0, 4.0, 6.0)]);
        let from_cols = Mat2x3::from_columns([Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Vec2::new(5.0, 6.0)]);
        assert_eq!(from_rows, mat2x3());
        assert_eq!(from_cols, mat2x3());

        let mut mat = mat2x3();
        mat.set_row(1, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(mat.to_array(), [1.0, -1.0, 3.0, -2.0, 5.0, -3.0]);
        mat.set_column(0, Vec2::new(7.0, 8.0));
        assert_eq!(mat.column(0), Vec2::new(7.0, 8.0));
        mat.set(0, 2, 9.0);
        assert_eq!(mat[4], 9.0);
    }

    #[test]
    fn transpose() {
        let t = mat2x3().transpose();
        assert_eq!(t.to_array(), [1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
        assert_eq!(t.at(2, 1), 6.0);
        assert_eq!(t.transpose(), mat2x3());
    }

    #[test]
    fn products() {
        // [1 3 5]   [1 4]   [22 49]
        // [2 4 6] * [2 5] = [28 64]
        //           [3 6]
        let rhs = Mat3x2::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let res : Mat2<f64> = mat2x3() * rhs;
        assert_eq!(res.to_array(), [22.0, 28.0, 49.0, 64.0]);

        let v = mat2x3() * Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec2::new(9.0, 12.0));

        let mut sq = Mat2::from_array([1.0f32, 2.0, 3.0, 4.0]);
        sq *= Mat2::identity();
        assert_eq!(sq.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn elementwise() {
        let a = mat2x3();
        assert_eq!((a + a).to_array(), (2.0f64 * a).to_array());
        assert_eq!(a - a, Mat2x3::zero());
        assert_eq!((-a)[0], -1.0);
        assert_eq!((a / 2.0)[1], 1.0);
        assert!(a.is_approx_eq(a * (1.0 + 1e-16)));
    }

    #[test]
    #[should_panic]
    fn element_out_of_range() {
        let mut mat = mat2x3();
        mat.set(2, 0, 1.0);
    }

    #[test]
    fn display() {
        assert_eq!(mat2x3().to_string(), "[1, 3, 5]\n[2, 4, 6]");
    }
}
