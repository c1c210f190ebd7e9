use core::{
    ops::*,
    fmt,
    mem,
};
use crate::*;
use super::{pool::{self, PoolScalar}, VecX};

/// Matrix with dimensions chosen at runtime, stored in column-major order
///
/// Like [`VecX`], the backing buffer comes from the buffer pool of `T`. Operations on mismatched dimensions panic.
pub struct MatMN<T: PoolScalar> {
    rows : usize,
    cols : usize,
    buf  : Vec<T>,
}

impl<T: PoolScalar> MatMN<T> {
    /// Create a zeroed `rows` x `cols` matrix
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, buf: pool::alloc(rows * cols) }
    }

    /// Create a `size` x `size` identity matrix
    #[must_use]
    pub fn identity(size: usize) -> Self {
        let mut mat = Self::zeros(size, size);
        for idx in 0..size {
            mat.buf[idx * size + idx] = T::one();
        }
        mat
    }

    /// Create a matrix from values in column-major order
    #[must_use]
    pub fn from_column_major(rows: usize, cols: usize, vals: &[T]) -> Self {
        assert_eq!(vals.len(), rows * cols, "A {rows}x{cols} matrix needs {} values", rows * cols);
        let mut buf = T::buffer_pool().acquire(vals.len());
        buf.extend_from_slice(vals);
        Self { rows, cols, buf }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Get the values in column-major order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Get the number of elements the matrix can hold without growing
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Change the dimensions of the matrix
    ///
    /// If the new element count fits in the current buffer, it is reused and the content is left as is, otherwise the matrix moves to a new, zeroed buffer.
    pub fn reshape(&mut self, rows: usize, cols: usize) {
        let len = rows * cols;
        if len > self.buf.capacity() {
            pool::release(mem::replace(&mut self.buf, pool::alloc(len)));
        } else {
            self.buf.resize(len, T::zero());
        }
        self.rows = rows;
        self.cols = cols;
    }

    /// Set all elements to 0
    pub fn zero(&mut self) {
        self.buf.fill(T::zero());
    }

    /// Destroy the matrix, releasing its buffer
    pub fn destroy(self) {}

    /// Get the element at the given row and column
    #[inline]
    #[must_use]
    pub fn at(&self, row: usize, column: usize) -> T {
        self.buf[self.elem_idx(row, column)]
    }

    /// Set the element at the given row and column
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, val: T) {
        let idx = self.elem_idx(row, column);
        self.buf[idx] = val;
    }

    /// Get a row
    #[must_use]
    pub fn row(&self, row: usize) -> VecX<T> {
        assert!(row < self.rows, "Row {row} is out of range for a {}x{} matrix", self.rows, self.cols);
        let mut vec = VecX::with_len(self.cols);
        for col in 0..self.cols {
            vec[col] = self.buf[col * self.rows + row];
        }
        vec
    }

    /// Get a column
    #[must_use]
    pub fn column(&self, column: usize) -> VecX<T> {
        assert!(column < self.cols, "Column {column} is out of range for a {}x{} matrix", self.rows, self.cols);
        let start = column * self.rows;
        VecX::from_slice(&self.buf[start..start + self.rows])
    }

    /// Calculate the trace of a square matrix
    #[must_use]
    pub fn trace(&self) -> T {
        assert_eq!(self.rows, self.cols, "The trace is only defined for square matrices");
        (0..self.rows).fold(T::zero(), |acc, idx| acc + self.buf[idx * self.rows + idx])
    }

    /// Get the transposed matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut res = Self::zeros(self.cols, self.rows);
        for col in 0..self.cols {
            for row in 0..self.rows {
                res.buf[row * self.cols + col] = self.buf[col * self.rows + row];
            }
        }
        res
    }

    /// Calculate the matrix product `self * rhs`
    #[must_use]
    pub fn mul_mxn(&self, rhs: &Self) -> Self {
        let mut res = Self::zeros(self.rows, rhs.cols);
        self.mul_mxn_into(rhs, &mut res);
        res
    }

    /// Calculate the matrix product `self * rhs` and store it in `dst`, which is reshaped to fit the result
    pub fn mul_mxn_into(&self, rhs: &Self, dst: &mut Self) {
        self.check_inner_dims(rhs);
        dst.reshape(self.rows, rhs.cols);
        mul_raw(&self.buf, self.rows, self.cols, &rhs.buf, rhs.cols, &mut dst.buf);
    }

    /// Replace `self` with the matrix product `self * rhs`
    pub fn mul_assign_mxn(&mut self, rhs: &Self) {
        self.check_inner_dims(rhs);

        let mut tmp = scopeguard::guard(pool::alloc::<T>(self.rows * rhs.cols), pool::release::<T>);
        mul_raw(&self.buf, self.rows, self.cols, &rhs.buf, rhs.cols, &mut tmp);

        let rows = self.rows;
        self.reshape(rows, rhs.cols);
        self.buf.copy_from_slice(&tmp);
    }

    /// Multiply the matrix with a column vector
    #[must_use]
    pub fn mul_nx1(&self, vec: &VecX<T>) -> VecX<T> {
        assert_eq!(self.cols, vec.len(), "Cannot multiply a {}x{} matrix with a vector of length {}", self.rows, self.cols, vec.len());
        let mut res = VecX::with_len(self.rows);
        mul_raw(&self.buf, self.rows, self.cols, vec.as_slice(), 1, res.as_mut_slice());
        res
    }

    fn elem_idx(&self, row: usize, column: usize) -> usize {
        assert!(row < self.rows && column < self.cols, "Element ({row}, {column}) is out of range for a {}x{} matrix", self.rows, self.cols);
        column * self.rows + row
    }

    fn check_dims(&self, other: &Self, op: &str) {
        assert!(self.rows == other.rows && self.cols == other.cols,
            "Mismatched matrix dimensions for `{op}`: {}x{} and {}x{}", self.rows, self.cols, other.rows, other.cols);
    }

    fn check_inner_dims(&self, rhs: &Self) {
        assert_eq!(self.cols, rhs.rows, "Cannot multiply a {}x{} matrix with a {}x{} matrix", self.rows, self.cols, rhs.rows, rhs.cols);
    }
}

/// `out (m x n) = lhs (m x k) * rhs (k x n)`, all column-major
fn mul_raw<T: Real>(lhs: &[T], m: usize, k: usize, rhs: &[T], n: usize, out: &mut [T]) {
    for col in 0..n {
        for row in 0..m {
            out[col * m + row] = (0..k).fold(T::zero(), |acc, i| acc + lhs[i * m + row] * rhs[col * k + i]);
        }
    }
}

macro_rules! fixed_mat_conversion {
    {$($fn_name:ident => $ty:ident);* $(;)?} => {
        impl<T: PoolScalar> MatMN<T> {
            $(
                #[doc = concat!("Convert to a `", stringify!($ty), "`, panics if the dimensions don't match")]
                #[must_use]
                pub fn $fn_name(&self) -> $ty<T> {
                    assert!(self.rows == $ty::<T>::ROWS && self.cols == $ty::<T>::COLUMNS,
                        concat!("A {}x{} matrix can't be converted to a `", stringify!($ty), "`"), self.rows, self.cols);
                    $ty::from_array(core::array::from_fn(|idx| self.buf[idx]))
                }
            )*
        }

        $(
            impl<T: PoolScalar> From<$ty<T>> for MatMN<T> {
                fn from(mat: $ty<T>) -> Self {
                    Self::from_column_major($ty::<T>::ROWS, $ty::<T>::COLUMNS, mat.as_array())
                }
            }
        )*
    };
}
fixed_mat_conversion!{
    mat2   => Mat2;
    mat2x3 => Mat2x3;
    mat2x4 => Mat2x4;
    mat3x2 => Mat3x2;
    mat3   => Mat3;
    mat3x4 => Mat3x4;
    mat4x2 => Mat4x2;
    mat4x3 => Mat4x3;
    mat4   => Mat4;
}

impl<T: PoolScalar> Drop for MatMN<T> {
    fn drop(&mut self) {
        pool::release(mem::take(&mut self.buf));
    }
}

impl<T: PoolScalar> Clone for MatMN<T> {
    fn clone(&self) -> Self {
        Self::from_column_major(self.rows, self.cols, &self.buf)
    }
}

impl<T: PoolScalar> PartialEq for MatMN<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.buf == other.buf
    }
}

impl<T: PoolScalar> fmt::Debug for MatMN<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatMN")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("vals", &self.buf)
            .finish()
    }
}

impl<T: PoolScalar> fmt::Display for MatMN<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row != 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for col in 0..self.cols {
                if col != 0 {
                    f.write_str(", ")?;
                }
                f.write_fmt(format_args!("{}", self.buf[col * self.rows + row]))?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl<T: PoolScalar> Index<(usize, usize)> for MatMN<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.buf[self.elem_idx(row, column)]
    }
}

impl<T: PoolScalar> IndexMut<(usize, usize)> for MatMN<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        let idx = self.elem_idx(row, column);
        &mut self.buf[idx]
    }
}

macro_rules! matmn_binop {
    {$trait:ident, $fn_name:ident, $assign_trait:ident, $assign_fn:ident, $op:tt} => {
        impl<T: PoolScalar> $trait for &MatMN<T> {
            type Output = MatMN<T>;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                self.check_dims(rhs, stringify!($fn_name));
                let mut buf = T::buffer_pool().acquire(self.buf.len());
                buf.extend(self.buf.iter().zip(&rhs.buf).map(|(&a, &b)| a $op b));
                MatMN { rows: self.rows, cols: self.cols, buf }
            }
        }

        impl<T: PoolScalar> $assign_trait<&MatMN<T>> for MatMN<T> {
            fn $assign_fn(&mut self, rhs: &MatMN<T>) {
                self.check_dims(rhs, stringify!($assign_fn));
                for (a, &b) in self.buf.iter_mut().zip(&rhs.buf) {
                    *a = *a $op b;
                }
            }
        }
    };
}
matmn_binop!{ Add, add, AddAssign, add_assign, + }
matmn_binop!{ Sub, sub, SubAssign, sub_assign, - }

impl<T: PoolScalar> Mul<T> for &MatMN<T> {
    type Output = MatMN<T>;

    fn mul(self, rhs: T) -> Self::Output {
        let mut buf = T::buffer_pool().acquire(self.buf.len());
        buf.extend(self.buf.iter().map(|&a| a * rhs));
        MatMN { rows: self.rows, cols: self.cols, buf }
    }
}

impl<T: PoolScalar> MulAssign<T> for MatMN<T> {
    fn mul_assign(&mut self, rhs: T) {
        for a in &mut self.buf {
            *a *= rhs;
        }
    }
}

impl<T: PoolScalar> Mul for &MatMN<T> {
    type Output = MatMN<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_mxn(rhs)
    }
}

impl<T: PoolScalar> Mul<&VecX<T>> for &MatMN<T> {
    type Output = VecX<T>;

    fn mul(self, rhs: &VecX<T>) -> Self::Output {
        self.mul_nx1(rhs)
    }
}

impl<T: PoolScalar> ApproxEq for &MatMN<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.is_approx_eq_func(rhs, |a, b| (a - b).abs() <= epsilon)
    }

    fn is_approx_eq_thresh(self, rhs: Self, epsilon: T) -> bool {
        self.is_approx_eq_func(rhs, scalar::approx_func_eq(epsilon))
    }

    fn is_approx_eq_func<F: Fn(T, T) -> bool>(self, rhs: Self, eq: F) -> bool {
        self.check_dims(rhs, "approx_eq");
        self.buf.iter().zip(&rhs.buf).all(|(&a, &b)| eq(a, b))
    }
}

impl<T: PoolScalar> ApproxZero for &MatMN<T> {
    type Epsilon = T;

    fn is_close_to_zero(self, epsilon: T) -> bool {
        self.buf.iter().all(|a| a.abs() <= epsilon)
    }

    fn is_zero(self) -> bool {
        self.buf.iter().all(|&a| scalar::approx_eq(a, T::zero()))
    }
}
