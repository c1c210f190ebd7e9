use core::{
    fmt::{Debug, Display},
    ops::*,
};
use crate::{MathConsts, scalar};

/// Additive identity
pub trait Zero {
    fn zero() -> Self;
}

/// Multiplicative identity
pub trait One {
    fn one() -> Self;
}

macro_rules! impl_identities {
    {$($ty:ty),*} => {
        $(
            impl Zero for $ty {
                #[inline(always)]
                fn zero() -> Self { 0.0 }
            }

            impl One for $ty {
                #[inline(always)]
                fn one() -> Self { 1.0 }
            }
        )*
    };
}
impl_identities!{ f32, f64 }

/// Arithmetic type representing a real number, the scalar of every carta value type.
///
/// Implemented for `f32` and `f64`. Operations never mix precisions implicitly, use [`NumericCast`] to convert.
pub trait Real : Sized + Copy + PartialEq + PartialOrd + Debug + Display + Default + Send + Sync + 'static +
                 Zero + One + MathConsts +
                 Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Neg<Output = Self> +
                 AddAssign + SubAssign + MulAssign + DivAssign
{
    /// Default epsilon used by approximate comparisons
    const APPROX_EPSILON : Self;
    /// Smallest positive normal value
    const MIN_NORMAL : Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    /// `1 / self`
    #[inline(always)]
    fn rcp(self) -> Self {
        Self::one() / self
    }

    fn min(self, rhs: Self) -> Self;
    fn max(self, rhs: Self) -> Self;
    fn ceil(self) -> Self;
    fn floor(self) -> Self;
    fn powi(self, n: i32) -> Self;

    // Trigonometry, angles in radians
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    /// `(sin, cos)` in a single call
    fn sin_cos(self) -> (Self, Self);
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Standard four-quadrant arctangent of `y / x`, in `[-pi, pi]`
    ///
    /// See [`scalar::atan2`] for the `[0, 2pi)` variant.
    fn atan2(y: Self, x: Self) -> Self;

    /// Neither infinite nor NaN
    fn is_finite(self) -> bool;

    fn from_f64(val: f64) -> Self;
    fn to_f64(self) -> f64;
    fn from_i32(val: i32) -> Self;
    fn from_usize(val: usize) -> Self;
}

/// Forward `Real` methods to the inherent methods of the same name on a float type
macro_rules! forward_to_inherent {
    ($ty:ty; $(fn $name:ident(self $(, $arg:ident: $arg_ty:ty)*) -> $ret:ty;)*) => {
        $(
            #[inline(always)]
            fn $name(self $(, $arg: $arg_ty)*) -> $ret {
                <$ty>::$name(self $(, $arg)*)
            }
        )*
    };
}

macro_rules! impl_real {
    {$ty:ty, $eps:expr} => {
        impl Real for $ty {
            const APPROX_EPSILON : Self = $eps;
            const MIN_NORMAL : Self = <$ty>::MIN_POSITIVE;

            forward_to_inherent!{ $ty;
                fn abs(self) -> Self;
                fn sqrt(self) -> Self;
                fn min(self, rhs: Self) -> Self;
                fn max(self, rhs: Self) -> Self;
                fn ceil(self) -> Self;
                fn floor(self) -> Self;
                fn powi(self, n: i32) -> Self;
                fn sin(self) -> Self;
                fn cos(self) -> Self;
                fn sin_cos(self) -> (Self, Self);
                fn tan(self) -> Self;
                fn asin(self) -> Self;
                fn acos(self) -> Self;
                fn atan(self) -> Self;
                fn is_finite(self) -> bool;
            }

            #[inline(always)]
            fn atan2(y: Self, x: Self) -> Self {
                y.atan2(x)
            }

            // Plain `as` casts: the float conversions round to nearest, integers beyond 2^24 (f32) or 2^53 (f64) lose precision
            #[inline(always)]
            fn from_f64(val: f64) -> Self { val as $ty }
            #[inline(always)]
            fn to_f64(self) -> f64 { self as f64 }
            #[inline(always)]
            fn from_i32(val: i32) -> Self { val as $ty }
            #[inline(always)]
            fn from_usize(val: usize) -> Self { val as $ty }
        }
    };
}
impl_real!{ f32, 1e-6 }
impl_real!{ f64, 1e-15 }

//------------------------------------------------------------------------------------------------------------------------------

/// Approximate comparison, element-wise for compound types
pub trait ApproxEq : Sized {
    type Epsilon : Real;

    /// Check if `self` is within an absolute distance `epsilon` of `rhs`, per element
    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to `rhs` using a relative threshold `epsilon`, per element.
    ///
    /// See [`scalar::approx_eq_thresh`] for the exact rule.
    fn is_approx_eq_thresh(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to `rhs`, using the default epsilon of the scalar type
    #[inline]
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_approx_eq_thresh(rhs, Self::Epsilon::APPROX_EPSILON)
    }

    /// Check if every element of `self` compares equal to the matching element of `rhs`, according to `eq`
    fn is_approx_eq_func<F: Fn(Self::Epsilon, Self::Epsilon) -> bool>(self, rhs: Self, eq: F) -> bool;
}

/// Approximate comparison against zero, element-wise for compound types
pub trait ApproxZero : Sized {
    type Epsilon : Real;

    /// Check if all elements are within an absolute distance `epsilon` of 0
    fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool;

    /// Check if all elements are approximately 0, using the default epsilon (`|x| < epsilon^2`)
    fn is_zero(self) -> bool;
}

macro_rules! impl_approx {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                #[inline]
                fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    (self - rhs).abs() <= epsilon
                }

                #[inline]
                fn is_approx_eq_thresh(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    scalar::approx_eq_thresh(self, rhs, epsilon)
                }

                #[inline]
                fn is_approx_eq_func<F: Fn(Self::Epsilon, Self::Epsilon) -> bool>(self, rhs: Self, eq: F) -> bool {
                    eq(self, rhs)
                }
            }

            impl ApproxZero for $ty {
                type Epsilon = $ty;

                #[inline]
                fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool {
                    self.abs() <= epsilon
                }

                #[inline]
                fn is_zero(self) -> bool {
                    scalar::approx_eq(self, 0 as $ty)
                }
            }
        )*
    };
}
impl_approx!{ f32, f64 }

//------------------------------------------------------------------------------------------------------------------------------

/// Explicit conversion between precisions
pub trait NumericCast<T> {
    /// Convert `self` to `T`
    fn cast(self) -> T;
}

macro_rules! impl_numeric_cast {
    {$($from:ty => $to:ty),*} => {
        $(
            impl NumericCast<$to> for $from {
                #[inline(always)]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )*
    };
}
impl_numeric_cast!{ f32 => f32, f32 => f64, f64 => f32, f64 => f64 }
