//! Traits implemented by the carta derive macros

/// Number of variants of a fieldless enum, see `#[derive(EnumCount)]`
pub trait EnumCountT {
    const COUNT : usize;
}

/// Lookup of a fieldless enum variant by its declaration index, see `#[derive(EnumFromIndex)]`
pub trait EnumFromIndexT: Sized {
    /// Get the variant declared at `idx`, or `None` if there are not enough variants
    fn from_idx(idx: usize) -> Option<Self>;
}
