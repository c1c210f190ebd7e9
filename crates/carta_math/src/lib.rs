//! Statically sized linear algebra for real-time 3D graphics.
//! 
//! All matrices are stored column-major, so they can be uploaded to GPU uniform blocks as is, and compose right-to-left:
//! a model-view-projection transform is `proj * view * model`, applied to a column vector on the right.
//! 
//! Every value type is generic over the scalar precision (`f32` or `f64`), precisions never mix implicitly,
//! use [`NumericCast`] to convert between them.

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

pub mod scalar;

mod utils;
mod logging;

mod result;
pub use result::*;

mod angle;
pub use angle::*;

mod vec;
pub use vec::*;

mod mat;
pub use mat::*;

mod rotation;
pub use rotation::*;

mod quat;
pub use quat::*;

mod project;
pub use project::*;

pub mod dynamic;

mod shapes;
pub use shapes::*;

pub mod bezier;

mod ray;
pub use ray::*;

mod aabb;
pub use aabb::*;
