//! Shared helpers for the carta crates: the traits behind the enum derives, and `func_name!`
#![no_std]

mod macro_traits;
pub use macro_traits::*;

mod helper_macros;
pub use helper_macros::*;
