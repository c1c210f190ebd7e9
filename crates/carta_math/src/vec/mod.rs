use core::ops::*;
use crate::{Real, Zero, One, ApproxEq, ApproxZero, NumericCast, scalar};

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;

mod vec4;
pub use vec4::*;

/// Component-wise operator and its assigning variant, with either a vector or a scalar on the right hand side
macro_rules! componentwise_op {
    (vector $name:ident [$($comp:ident),+] $op:ident $op_fn:ident $op_tok:tt, $assign:ident $assign_fn:ident $assign_tok:tt) => {
        impl<T: Real> $op for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp $op_tok rhs.$comp),+ }
            }
        }

        impl<T: Real> $assign for $name<T> {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Self) {
                $(self.$comp $assign_tok rhs.$comp;)+
            }
        }
    };
    (scalar $name:ident [$($comp:ident),+] $op:ident $op_fn:ident $op_tok:tt, $assign:ident $assign_fn:ident $assign_tok:tt) => {
        impl<T: Real> $op<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp $op_tok rhs),+ }
            }
        }

        impl<T: Real> $assign<T> for $name<T> {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: T) {
                $(self.$comp $assign_tok rhs;)+
            }
        }
    };
}

macro_rules! generic_vec {
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $($comp:ident),+;
        $($alias_ty:ident => $base_ty:ty),*
    } => {
        #[$docs]
        #[repr(C)]
        #[derive(Clone, Copy, PartialEq, Debug, Default)]
        pub struct $name<T: Copy> {
            $(pub $comp: T,)+
        }

        impl<T: Copy> $name<T> {
            /// Create a new vector
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                Self{ $($comp),+ }
            }

            /// Create a vector with all components set to `val`
            #[inline(always)]
            #[must_use]
            pub fn set(val: T) -> Self {
                Self{ $($comp: val),+ }
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $elem_cnt]) -> Self {
                let [$($comp),+] = arr;
                Self{ $($comp),+ }
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),+]
            }

            /// Interpret a reference to a vector as a reference to an array
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $elem_cnt] {
                // SAFETY: `#[repr(C)]` with only `T` fields has the same layout as `[T; N]`
                unsafe { &*(self as *const Self as *const [T; $elem_cnt]) }
            }

            /// Interpret a mutable reference to a vector as a mutable reference to an array
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $elem_cnt] {
                // SAFETY: see `as_array`
                unsafe { &mut *(self as *mut Self as *mut [T; $elem_cnt]) }
            }
        }

        impl<T: Real> $name<T> {
            /// Calculate the dot product of 2 vectors
            #[inline]
            #[must_use]
            pub fn dot(self, rhs: Self) -> T {
                crate::utils::strip_plus!($(+ self.$comp * rhs.$comp)+)
            }

            /// Calculate the square length of the vector
            #[inline]
            #[must_use]
            pub fn len_sq(self) -> T {
                self.dot(self)
            }

            /// Calculate the length of the vector
            ///
            /// The square root is always taken in `f64`.
            #[inline]
            #[must_use]
            pub fn len(self) -> T {
                T::from_f64(self.len_sq().to_f64().sqrt())
            }

            /// Calculate the square distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn dist_sq(self, other: Self) -> T {
                (other - self).len_sq()
            }

            /// Calculate the distance between 2 vectors
            #[inline]
            #[must_use]
            pub fn dist(self, other: Self) -> T {
                (other - self).len()
            }

            /// Normalize the vector
            ///
            /// A vector with a length of 0 is returned unchanged.
            #[must_use]
            pub fn normalize(self) -> Self {
                let len = self.len();
                if len == T::zero() {
                    self
                } else {
                    self * len.rcp()
                }
            }

            /// Normalize the vector if the length is not 0, return `or` otherwise
            #[must_use]
            pub fn normalize_or(self, or: Self) -> Self {
                let len = self.len();
                if len == T::zero() {
                    or
                } else {
                    self * len.rcp()
                }
            }

            /// Check if the vector is close to being normalized, using a given epsilon, which defines the max difference `len_sq` can be relative to 1
            #[must_use]
            pub fn is_close_to_normalized(self, epsilon: T) -> bool {
                (self.len_sq() - T::one()).abs() <= epsilon
            }

            /// Ckeck if the vector is normalized, using the default epsilon
            #[must_use]
            pub fn is_normalized(self) -> bool {
                scalar::approx_eq(self.len_sq(), T::one())
            }

            /// Get the component-wise minimum of 2 vectors
            #[inline]
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                Self{ $($comp: scalar::min(self.$comp, rhs.$comp)),+ }
            }

            /// Get the component-wise maximum of 2 vectors
            #[inline]
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                Self{ $($comp: scalar::max(self.$comp, rhs.$comp)),+ }
            }

            /// Component-wise clamp of the vector
            #[inline]
            #[must_use]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self{ $($comp: scalar::clamp(self.$comp, min.$comp, max.$comp)),+ }
            }

            /// Get the component-wise absolute value of the vector
            #[inline]
            #[must_use]
            pub fn abs(self) -> Self {
                Self{ $($comp: self.$comp.abs()),+ }
            }

            /// Linearly interpolate between `self` (`t == 0`) and `other` (`t == 1`)
            #[inline]
            #[must_use]
            pub fn lerp(self, other: Self, t: T) -> Self {
                self + (other - self) * t
            }

            /// Check if all components are finite
            #[inline]
            #[must_use]
            pub fn is_finite(self) -> bool {
                $(self.$comp.is_finite())&&+
            }
        }

        impl<T: Copy> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                assert!(index < $elem_cnt, "vector index {index} out of range for {}", stringify!($name));
                &self.as_array()[index]
            }
        }

        impl<T: Copy> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                assert!(index < $elem_cnt, "vector index {index} out of range for {}", stringify!($name));
                &mut self.as_mut_array()[index]
            }
        }

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self{ $($comp: T::zero()),+ }
            }
        }

        impl<T: Real> One for $name<T> {
            fn one() -> Self {
                Self{ $($comp: T::one()),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        componentwise_op!{ vector $name [$($comp),+] Add add +, AddAssign add_assign += }
        componentwise_op!{ vector $name [$($comp),+] Sub sub -, SubAssign sub_assign -= }
        componentwise_op!{ vector $name [$($comp),+] Mul mul *, MulAssign mul_assign *= }
        componentwise_op!{ vector $name [$($comp),+] Div div /, DivAssign div_assign /= }
        componentwise_op!{ scalar $name [$($comp),+] Mul mul *, MulAssign mul_assign *= }
        componentwise_op!{ scalar $name [$($comp),+] Div div /, DivAssign div_assign /= }

        // Scalar pre-multiplication can't be implemented generically, see `impl_vec_premul`

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self{ $($comp: -self.$comp),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $((self.$comp - rhs.$comp).abs() <= epsilon)&&+
            }

            fn is_approx_eq_thresh(self, rhs: Self, epsilon: T) -> bool {
                $(scalar::approx_eq_thresh(self.$comp, rhs.$comp, epsilon))&&+
            }

            fn is_approx_eq_func<F: Fn(T, T) -> bool>(self, rhs: Self, eq: F) -> bool {
                $(eq(self.$comp, rhs.$comp))&&+
            }
        }

        impl<T: Real> ApproxZero for $name<T> {
            type Epsilon = T;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                $(self.$comp.abs() <= epsilon)&&+
            }

            fn is_zero(self) -> bool {
                $(scalar::approx_eq(self.$comp, T::zero()))&&+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Copy> From<[T; $elem_cnt]> for $name<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Copy> From<$name<T>> for [T; $elem_cnt] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: Real + NumericCast<U>, U: Real> NumericCast<$name<U>> for $name<T> {
            fn cast(self) -> $name<U> {
                $name{ $($comp: self.$comp.cast()),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}

generic_vec!{ doc = "2D vector"; Vec2, 2, x, y; f32v2 => f32, f64v2 => f64 }
generic_vec!{ doc = "3D vector"; Vec3, 3, x, y, z; f32v3 => f32, f64v3 => f64 }
generic_vec!{ doc = "4D vector"; Vec4, 4, x, y, z, w; f32v4 => f32, f64v4 => f64 }

macro_rules! impl_vec_premul {
    ($iden:ident, $($ty:ty)*) => {
        $(
            impl Mul<$iden<$ty>> for $ty {
                type Output = $iden<$ty>;

                #[inline(always)]
                fn mul(self, rhs: $iden<$ty>) -> $iden<$ty> {
                    rhs * self
                }
            }
        )*
    };
}
impl_vec_premul!{ Vec2, f32 f64 }
impl_vec_premul!{ Vec3, f32 f64 }
impl_vec_premul!{ Vec4, f32 f64 }

static_assertions::assert_eq_size!(Vec2<f32>, [f32; 2]);
static_assertions::assert_eq_size!(Vec3<f32>, [f32; 3]);
static_assertions::assert_eq_size!(Vec4<f32>, [f32; 4]);
static_assertions::assert_eq_size!(Vec4<f64>, [f64; 4]);
