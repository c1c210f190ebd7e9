/// Constants shared by both precisions, so generic code can name them through `T::`
pub trait MathConsts {
    const MIN : Self;
    const MAX : Self;

    const PI : Self;
    /// `2pi`, a full turn
    const TWO_PI : Self;
    /// `pi/2`, a quarter turn
    const HALF_PI : Self;
    /// `3pi/2`, returned by [`scalar::atan2`](crate::scalar::atan2) for the negative y-axis
    const THREE_OVER_TWO_PI : Self;
    const QUARTER_PI : Self;
    const ONE_OVER_PI : Self;

    const ROOT_TWO : Self;
    const ONE_OVER_ROOT_TWO : Self;

    /// Factor converting degrees to radians
    const DEG_TO_RAD : Self;
    /// Factor converting radians to degrees
    const RAD_TO_DEG : Self;
}

macro_rules! impl_math_constants {
    {$($ty:ident),*} => {
        $(
            impl MathConsts for $ty {
                const MIN               : $ty = $ty::MIN;
                const MAX               : $ty = $ty::MAX;

                const PI                : $ty = core::$ty::consts::PI;
                const TWO_PI            : $ty = core::$ty::consts::TAU;
                const HALF_PI           : $ty = core::$ty::consts::FRAC_PI_2;
                // Rounded once from the f64 value, instead of accumulating the rounding of `PI + HALF_PI`
                const THREE_OVER_TWO_PI : $ty = (3.0 * core::f64::consts::FRAC_PI_2) as $ty;
                const QUARTER_PI        : $ty = core::$ty::consts::FRAC_PI_4;
                const ONE_OVER_PI       : $ty = core::$ty::consts::FRAC_1_PI;

                const ROOT_TWO          : $ty = core::$ty::consts::SQRT_2;
                const ONE_OVER_ROOT_TWO : $ty = core::$ty::consts::FRAC_1_SQRT_2;

                const DEG_TO_RAD        : $ty = (core::f64::consts::PI / 180.0) as $ty;
                const RAD_TO_DEG        : $ty = (180.0 / core::f64::consts::PI) as $ty;
            }
        )*
    };
}
impl_math_constants!{ f32, f64 }
