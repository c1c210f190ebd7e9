use core::{
    ops::*,
    fmt,
    mem,
};
use crate::*;
use super::{pool::{self, PoolScalar}, MatMN};

/// Vector with a length chosen at runtime
///
/// The backing buffer is taken from the buffer pool of `T`, and handed to the realloc callback when the vector grows or is dropped.
/// Operations between vectors of different lengths panic.
pub struct VecX<T: PoolScalar> {
    buf : Vec<T>,
}

impl<T: PoolScalar> VecX<T> {
    /// Create a zeroed vector with `len` elements
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self { buf: pool::alloc(len) }
    }

    /// Create a vector from a slice
    #[must_use]
    pub fn from_slice(vals: &[T]) -> Self {
        let mut buf = T::buffer_pool().acquire(vals.len());
        buf.extend_from_slice(vals);
        Self { buf }
    }

    /// Get the number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if the vector has no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get the number of elements the vector can hold without growing
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Change the number of elements
    ///
    /// Existing elements are kept and added elements are 0. When the capacity is exceeded, the vector moves to a new buffer and the old one is released.
    pub fn resize(&mut self, len: usize) {
        if len > self.buf.capacity() {
            let mut buf = T::buffer_pool().acquire(len);
            buf.extend_from_slice(&self.buf);
            pool::release(mem::replace(&mut self.buf, buf));
        }
        self.buf.resize(len, T::zero());
    }

    /// Set all elements to 0
    pub fn zero(&mut self) {
        self.buf.fill(T::zero());
    }

    /// Destroy the vector, releasing its buffer
    pub fn destroy(self) {}

    /// Get the element at `idx`
    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> T {
        self.buf[idx]
    }

    /// Set the element at `idx`
    #[inline]
    pub fn set(&mut self, idx: usize, val: T) {
        self.buf[idx] = val;
    }

    /// Calculate the dot product
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.check_len(other, "dot");
        self.buf.iter().zip(&other.buf).fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Calculate the square length of the vector
    #[inline]
    #[must_use]
    pub fn len_sq(&self) -> T {
        self.dot(self)
    }

    /// Calculate the length of the vector
    #[inline]
    #[must_use]
    pub fn norm(&self) -> T {
        self.len_sq().sqrt()
    }

    /// Get a normalized copy of the vector, a vector with a length of 0 is returned as is
    #[must_use]
    pub fn normalize(&self) -> Self {
        let norm = self.norm();
        if norm == T::zero() {
            self.clone()
        } else {
            self * norm.rcp()
        }
    }

    /// Calculate the cross product of 2 vectors with 3 elements
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        assert!(self.len() == 3 && other.len() == 3, "Cross product is only defined for vectors with 3 elements, got {} and {}", self.len(), other.len());
        Self::from(self.vec3().cross(other.vec3()))
    }

    /// Calculate the outer product `self * other^T`
    #[must_use]
    pub fn outer(&self, other: &Self) -> MatMN<T> {
        let mut mat = MatMN::zeros(self.len(), other.len());
        for (col, &b) in other.buf.iter().enumerate() {
            for (row, &a) in self.buf.iter().enumerate() {
                mat.set(row, col, a * b);
            }
        }
        mat
    }

    fn check_len(&self, other: &Self, op: &str) {
        assert_eq!(self.len(), other.len(), "Mismatched vector lengths for `{op}`");
    }
}

macro_rules! fixed_vec_conversion {
    {$($fn_name:ident => $ty:ident, $len:literal);*} => {
        impl<T: PoolScalar> VecX<T> {
            $(
                #[doc = concat!("Convert to a `", stringify!($ty), "`")]
                ///
                /// # Panics
                ///
                #[doc = concat!("Panics if the vector does not have ", stringify!($len), " elements.")]
                #[must_use]
                pub fn $fn_name(&self) -> $ty<T> {
                    assert_eq!(self.len(), $len, concat!("Only a vector with ", stringify!($len), " elements converts to a `", stringify!($ty), "`"));
                    $ty::from_array(core::array::from_fn(|idx| self.buf[idx]))
                }
            )*
        }

        $(
            impl<T: PoolScalar> From<$ty<T>> for VecX<T> {
                fn from(vec: $ty<T>) -> Self {
                    Self::from_slice(vec.as_array())
                }
            }
        )*
    };
}
fixed_vec_conversion!{
    vec2 => Vec2, 2;
    vec3 => Vec3, 3;
    vec4 => Vec4, 4
}

impl<T: PoolScalar> Drop for VecX<T> {
    fn drop(&mut self) {
        pool::release(mem::take(&mut self.buf));
    }
}

impl<T: PoolScalar> Clone for VecX<T> {
    fn clone(&self) -> Self {
        Self::from_slice(&self.buf)
    }
}

impl<T: PoolScalar> PartialEq for VecX<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: PoolScalar> fmt::Debug for VecX<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.buf).finish()
    }
}

impl<T: PoolScalar> fmt::Display for VecX<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (idx, val) in self.buf.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!("{val}"))?;
        }
        f.write_str(")")
    }
}

impl<T: PoolScalar> Index<usize> for VecX<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buf[index]
    }
}

impl<T: PoolScalar> IndexMut<usize> for VecX<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buf[index]
    }
}

macro_rules! vecx_binop {
    {$trait:ident, $fn_name:ident, $assign_trait:ident, $assign_fn:ident, $op:tt} => {
        impl<T: PoolScalar> $trait for &VecX<T> {
            type Output = VecX<T>;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                self.check_len(rhs, stringify!($fn_name));
                let mut buf = T::buffer_pool().acquire(self.len());
                buf.extend(self.buf.iter().zip(&rhs.buf).map(|(&a, &b)| a $op b));
                VecX { buf }
            }
        }

        impl<T: PoolScalar> $assign_trait<&VecX<T>> for VecX<T> {
            fn $assign_fn(&mut self, rhs: &VecX<T>) {
                self.check_len(rhs, stringify!($assign_fn));
                for (a, &b) in self.buf.iter_mut().zip(&rhs.buf) {
                    *a = *a $op b;
                }
            }
        }
    };
}
vecx_binop!{ Add, add, AddAssign, add_assign, + }
vecx_binop!{ Sub, sub, SubAssign, sub_assign, - }

impl<T: PoolScalar> Mul<T> for &VecX<T> {
    type Output = VecX<T>;

    fn mul(self, rhs: T) -> Self::Output {
        let mut buf = T::buffer_pool().acquire(self.len());
        buf.extend(self.buf.iter().map(|&a| a * rhs));
        VecX { buf }
    }
}

impl<T: PoolScalar> MulAssign<T> for VecX<T> {
    fn mul_assign(&mut self, rhs: T) {
        for a in &mut self.buf {
            *a *= rhs;
        }
    }
}

impl<T: PoolScalar> Neg for &VecX<T> {
    type Output = VecX<T>;

    fn neg(self) -> Self::Output {
        self * -T::one()
    }
}

impl<T: PoolScalar> ApproxEq for &VecX<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.is_approx_eq_func(rhs, |a, b| (a - b).abs() <= epsilon)
    }

    fn is_approx_eq_thresh(self, rhs: Self, epsilon: T) -> bool {
        self.is_approx_eq_func(rhs, scalar::approx_func_eq(epsilon))
    }

    fn is_approx_eq_func<F: Fn(T, T) -> bool>(self, rhs: Self, eq: F) -> bool {
        self.check_len(rhs, "approx_eq");
        self.buf.iter().zip(&rhs.buf).all(|(&a, &b)| eq(a, b))
    }
}

impl<T: PoolScalar> ApproxZero for &VecX<T> {
    type Epsilon = T;

    fn is_close_to_zero(self, epsilon: T) -> bool {
        self.buf.iter().all(|a| a.abs() <= epsilon)
    }

    fn is_zero(self) -> bool {
        self.buf.iter().all(|&a| scalar::approx_eq(a, T::zero()))
    }
}
