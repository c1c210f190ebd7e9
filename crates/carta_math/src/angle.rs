use core::{
    fmt::Display,
    ops::*,
};
use crate::{Real, ApproxEq, ApproxZero, Zero, NumericCast, scalar};

/// Arithmetic on the wrapped value, `$rhs` is either `Self` (`.0` is taken) or the scalar itself
macro_rules! angle_op {
    ($name:ident, $op:ident $op_fn:ident $op_tok:tt, $assign:ident $assign_fn:ident $assign_tok:tt, angle) => {
        impl<T: Real> $op for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                Self(self.0 $op_tok rhs.0)
            }
        }

        impl<T: Real> $assign for $name<T> {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Self) {
                self.0 $assign_tok rhs.0;
            }
        }
    };
    ($name:ident, $op:ident $op_fn:ident $op_tok:tt, $assign:ident $assign_fn:ident $assign_tok:tt, scalar) => {
        impl<T: Real> $op<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: T) -> Self {
                Self(self.0 $op_tok rhs)
            }
        }

        impl<T: Real> $assign<T> for $name<T> {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: T) {
                self.0 $assign_tok rhs;
            }
        }
    };
}

macro_rules! angle_common {
    {$name:ident} => {
        angle_op!{ $name, Add add +, AddAssign add_assign +=, angle }
        angle_op!{ $name, Sub sub -, SubAssign sub_assign -=, angle }
        angle_op!{ $name, Mul mul *, MulAssign mul_assign *=, scalar }
        angle_op!{ $name, Div div /, DivAssign div_assign /=, scalar }

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                (self.0 - rhs.0).abs() <= epsilon
            }

            fn is_approx_eq_thresh(self, rhs: Self, epsilon: T) -> bool {
                scalar::approx_eq_thresh(self.0, rhs.0, epsilon)
            }

            fn is_approx_eq_func<F: Fn(T, T) -> bool>(self, rhs: Self, eq: F) -> bool {
                eq(self.0, rhs.0)
            }
        }

        impl<T: Real> ApproxZero for $name<T> {
            type Epsilon = T;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                self.0.abs() <= epsilon
            }

            fn is_zero(self) -> bool {
                scalar::approx_eq(self.0, T::zero())
            }
        }

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self(T::zero())
            }
        }

        impl<T: Real + NumericCast<U>, U: Real> NumericCast<$name<U>> for $name<T> {
            fn cast(self) -> $name<U> {
                $name(self.0.cast())
            }
        }
    };
}

macro_rules! angle_pre_multiplication {
    {$name:ident, $($ty:ty),*} => {
        $(
            impl Mul<$name<$ty>> for $ty {
                type Output = $name<$ty>;

                fn mul(self, rhs: $name<$ty>) -> Self::Output {
                    $name(self * rhs.0)
                }
            }
        )*
    };
}

//------------------------------------------------------------------------------------------------------------------------------

/// An angle represented as degrees
///
/// Only used at API boundaries, every angle is converted to [`Radians`] before it is used.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Degrees<T: Copy>(pub T);
angle_common!{Degrees}
angle_pre_multiplication!{Degrees, f32, f64}

impl<T: Real> Degrees<T> {
    #[inline]
    #[must_use]
    pub fn new(val: T) -> Self {
        Self(val)
    }

    /// Convert to radians, through the exact `pi/180` factor
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians<T> {
        Radians(scalar::deg_to_rad(self.0))
    }
}

impl<T: Real> From<Radians<T>> for Degrees<T> {
    fn from(rads: Radians<T>) -> Self {
        rads.to_degrees()
    }
}

impl<T: Real> Display for Degrees<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{}°", self.0))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// An angle in radians, the unit every angle parameter in carta is given in
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Radians<T: Copy>(pub T);
angle_common!{Radians}
angle_pre_multiplication!{Radians, f32, f64}

impl<T: Real> Radians<T> {
    #[inline]
    #[must_use]
    pub fn new(val: T) -> Self {
        Self(val)
    }

    /// Convert to degrees, through the exact `180/pi` factor
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees<T> {
        Degrees(scalar::rad_to_deg(self.0))
    }

    /// Remove whole turns from the angle, the result is in `(-2pi, 2pi)` and keeps the sign
    #[inline]
    #[must_use]
    pub fn wrap(self) -> Self {
        let turns = (self.0 / T::TWO_PI).to_f64().trunc();
        Self(self.0 - T::from_f64(turns) * T::TWO_PI)
    }

    #[inline(always)]
    #[must_use]
    pub fn sin(self) -> T { self.0.sin() }

    #[inline(always)]
    #[must_use]
    pub fn cos(self) -> T { self.0.cos() }

    /// Sine and cosine of the angle, in that order
    #[inline(always)]
    #[must_use]
    pub fn sin_cos(self) -> (T, T) { self.0.sin_cos() }

    #[inline(always)]
    #[must_use]
    pub fn tan(self) -> T { self.0.tan() }
}

impl<T: Real> From<Degrees<T>> for Radians<T> {
    fn from(degs: Degrees<T>) -> Self {
        degs.to_radians()
    }
}

impl<T: Real> Display for Radians<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("{}rad", self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MathConsts;

    #[test]
    fn degrees_to_radians() {
        let rads : Radians<f64> = Degrees(90.0).into();
        assert_eq!(rads.0, scalar::deg_to_rad(90.0));
        assert!(rads.is_approx_eq(Radians(f64::HALF_PI)));

        let degs : Degrees<f32> = Radians(f32::PI).into();
        assert!(degs.is_close_to(Degrees(180.0), 1e-4));
    }

    #[test]
    fn arithmetic() {
        let a = Radians(1.0f32) + Radians(0.5);
        assert_eq!(a, Radians(1.5));
        assert_eq!(2.0f32 * a, Radians(3.0));
        assert_eq!(-a / 3.0, Radians(-0.5));
    }

    #[test]
    fn wrap() {
        let wrapped = Radians(5.0 * f64::PI).wrap();
        assert!(wrapped.is_close_to(Radians(f64::PI), 1e-12));
        let wrapped = Radians(-3.0 * f64::PI).wrap();
        assert!(wrapped.is_close_to(Radians(-f64::PI), 1e-12));
    }
}
