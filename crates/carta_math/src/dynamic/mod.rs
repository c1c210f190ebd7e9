//! Vectors and matrices with dimensions chosen at runtime.
//!
//! Backing buffers are taken from a per-precision [`BufferPool`], binned by power-of-two capacity.
//! When a value grows or is dropped, its old buffer is handed to the realloc callback registered with [`set_realloc_callback`],
//! [`enable_pooling`] registers a callback returning the buffers to the pool.
//!
//! Individual values are not thread-safe, access to the callback and the pools is serialized.

mod pool;
pub use pool::*;

mod vecx;
pub use vecx::*;

mod matmn;
pub use matmn::*;
