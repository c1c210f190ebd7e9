//! Statically sized linear algebra for 3D graphics.
//!
//! Thin façade over the workspace crates, see [`math`] for the kernel and [`logging`] for the logger it reports to.

pub use carta_math as math;
pub use carta_logging as logging;
