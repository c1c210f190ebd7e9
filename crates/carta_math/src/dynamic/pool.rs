use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use parking_lot::{Mutex, RwLock};
use crate::{
    Real,
    logging::{math_debug, math_verbose},
};

/// Callback receiving the backing buffer of a dynamic value when it is resized or dropped
pub type ReallocCallback<T> = Arc<dyn Fn(Vec<T>) + Send + Sync>;

/// Scalar types that have a process-wide realloc callback and buffer pool
pub trait PoolScalar : Real {
    /// Get the process-wide realloc callback slot
    fn realloc_callback() -> &'static RwLock<Option<ReallocCallback<Self>>>;

    /// Get the process-wide buffer pool
    fn buffer_pool() -> &'static BufferPool<Self>;
}

macro_rules! impl_pool_scalar {
    {$($ty:ty),*} => {
        $(
            impl PoolScalar for $ty {
                fn realloc_callback() -> &'static RwLock<Option<ReallocCallback<Self>>> {
                    static CALLBACK : RwLock<Option<ReallocCallback<$ty>>> = parking_lot::const_rwlock(None);
                    &CALLBACK
                }

                fn buffer_pool() -> &'static BufferPool<Self> {
                    static POOL : BufferPool<$ty> = BufferPool::new();
                    &POOL
                }
            }
        )*
    };
}
impl_pool_scalar!{ f32, f64 }

//------------------------------------------------------------------------------------------------------------------------------

/// Pool of buffers, binned by power-of-two capacity
pub struct BufferPool<T> {
    bins        : Mutex<Vec<Vec<Vec<T>>>>,
    max_per_bin : AtomicUsize,
}

impl<T> BufferPool<T> {
    /// Default maximum number of buffers kept per capacity bin
    pub const MAX_BUFFERS_PER_BIN : usize = 16;

    /// Create an empty pool
    pub const fn new() -> Self {
        Self {
            bins: parking_lot::const_mutex(Vec::new()),
            max_per_bin: AtomicUsize::new(Self::MAX_BUFFERS_PER_BIN),
        }
    }

    /// Set the maximum number of buffers kept per capacity bin, bins holding more are trimmed
    pub fn set_max_buffers_per_bin(&self, max: usize) {
        self.max_per_bin.store(max, Ordering::Relaxed);
        for bin in self.bins.lock().iter_mut() {
            bin.truncate(max);
        }
    }

    /// Get the maximum number of buffers kept per capacity bin
    #[must_use]
    pub fn max_buffers_per_bin(&self) -> usize {
        self.max_per_bin.load(Ordering::Relaxed)
    }

    /// Capacity of the bin that a buffer holding `len` elements comes from
    #[inline]
    #[must_use]
    pub fn bin_capacity(len: usize) -> usize {
        len.max(1).next_power_of_two()
    }

    /// Get an empty buffer with a capacity of at least `len`, reusing a pooled buffer when one is available
    #[must_use]
    pub fn acquire(&self, len: usize) -> Vec<T> {
        let capacity = Self::bin_capacity(len);
        let bin = capacity.trailing_zeros() as usize;

        let pooled = self.bins.lock().get_mut(bin).and_then(Vec::pop);
        pooled.unwrap_or_else(|| Vec::with_capacity(capacity))
    }

    /// Return a buffer to the pool
    ///
    /// Only buffers with an exact power-of-two capacity are kept, any other buffer, or one landing in a full bin, is dropped.
    pub fn release(&self, mut buf: Vec<T>) {
        let capacity = buf.capacity();
        if !capacity.is_power_of_two() {
            if capacity != 0 {
                math_verbose!(LOG_POOL_CAT, "Dropping buffer with a capacity of {capacity}, which is not a power of 2");
            }
            return;
        }

        buf.clear();
        let bin = capacity.trailing_zeros() as usize;

        let mut bins = self.bins.lock();
        if bins.len() <= bin {
            bins.resize_with(bin + 1, Vec::new);
        }
        if bins[bin].len() < self.max_buffers_per_bin() {
            bins[bin].push(buf);
        }
    }

    /// Get the number of buffers in the pool with the given capacity
    #[must_use]
    pub fn pooled_count(&self, capacity: usize) -> usize {
        if !capacity.is_power_of_two() {
            return 0;
        }
        let bin = capacity.trailing_zeros() as usize;
        self.bins.lock().get(bin).map_or(0, Vec::len)
    }

    /// Drop all pooled buffers
    pub fn clear(&self) {
        self.bins.lock().clear();
    }
}

impl<T> Default for BufferPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// Register the realloc callback for a scalar type, returning the previously registered callback
///
/// Only the most recently registered callback is called.
pub fn set_realloc_callback<T: PoolScalar>(callback: Option<ReallocCallback<T>>) -> Option<ReallocCallback<T>> {
    core::mem::replace(&mut *T::realloc_callback().write(), callback)
}

/// Route released buffers of a scalar type into its buffer pool
pub fn enable_pooling<T: PoolScalar>() {
    math_debug!(LOG_POOL_CAT, "Enabled buffer pooling for {}", core::any::type_name::<T>());
    let callback : ReallocCallback<T> = Arc::new(|buf: Vec<T>| T::buffer_pool().release(buf));
    set_realloc_callback(Some(callback));
}

/// Unregister the realloc callback of a scalar type and drop all of its pooled buffers
pub fn disable_pooling<T: PoolScalar>() {
    math_debug!(LOG_POOL_CAT, "Disabled buffer pooling for {}", core::any::type_name::<T>());
    set_realloc_callback::<T>(None);
    T::buffer_pool().clear();
}

/// Get a zeroed buffer of `len` elements
pub(crate) fn alloc<T: PoolScalar>(len: usize) -> Vec<T> {
    let mut buf = T::buffer_pool().acquire(len);
    buf.resize(len, T::zero());
    buf
}

/// Hand a buffer that is no longer needed to the realloc callback, or drop it when there is none
pub(crate) fn release<T: PoolScalar>(buf: Vec<T>) {
    if buf.capacity() == 0 {
        return;
    }

    // Don't hold the lock while running the callback, so it may register a new one
    let callback = T::realloc_callback().read().clone();
    if let Some(callback) = callback {
        callback(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_are_powers_of_two() {
        assert_eq!(BufferPool::<f32>::bin_capacity(0), 1);
        assert_eq!(BufferPool::<f32>::bin_capacity(1), 1);
        assert_eq!(BufferPool::<f32>::bin_capacity(3), 4);
        assert_eq!(BufferPool::<f32>::bin_capacity(16), 16);
        assert_eq!(BufferPool::<f32>::bin_capacity(17), 32);
    }

    #[test]
    fn acquire_reuses_released_buffers() {
        let pool = BufferPool::<f64>::new();
        let buf = pool.acquire(5);
        assert!(buf.capacity() >= 8);
        assert!(buf.is_empty());

        let mut exact = Vec::with_capacity(8);
        exact.extend_from_slice(&[1.0, 2.0]);
        let ptr = exact.as_ptr();
        pool.release(exact);
        assert_eq!(pool.pooled_count(8), 1);

        let reused = pool.acquire(7);
        assert_eq!(reused.as_ptr(), ptr);
        assert!(reused.is_empty());
        assert_eq!(pool.pooled_count(8), 0);
    }

    #[test]
    fn release_rejects_odd_capacities() {
        let pool = BufferPool::<f32>::new();
        let mut buf = Vec::<f32>::with_capacity(3);
        buf.shrink_to_fit();
        if !buf.capacity().is_power_of_two() {
            pool.release(buf);
            assert_eq!(pool.pooled_count(3), 0);
            assert_eq!(pool.pooled_count(4), 0);
        }
    }

    #[test]
    fn bins_are_bounded() {
        let pool = BufferPool::<f32>::new();
        for _ in 0..BufferPool::<f32>::MAX_BUFFERS_PER_BIN + 4 {
            pool.release(Vec::with_capacity(4));
        }
        assert_eq!(pool.pooled_count(4), BufferPool::<f32>::MAX_BUFFERS_PER_BIN);

        pool.set_max_buffers_per_bin(2);
        assert_eq!(pool.pooled_count(4), 2);
        pool.release(Vec::with_capacity(4));
        assert_eq!(pool.pooled_count(4), 2);

        pool.clear();
        assert_eq!(pool.pooled_count(4), 0);
    }
}
