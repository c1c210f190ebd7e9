mod derive;
mod products;

use proc_macro::TokenStream;

#[proc_macro_derive(EnumCount)]
pub fn enum_count(item: TokenStream) -> TokenStream {
    derive::enum_count(item.into()).into()
}

#[proc_macro_derive(EnumFromIndex)]
pub fn enum_from_index(item: TokenStream) -> TokenStream {
    derive::enum_from_index(item.into()).into()
}

#[proc_macro_derive(EnumDisplay, attributes(display))]
pub fn enum_display(item: TokenStream) -> TokenStream {
    derive::enum_display(item.into()).into()
}

/// Generate the full fixed-size matrix product family.
/// 
/// Expands to `Mul` implementations for every `MatMxN * MatNxO` with `M, N, O` in `2..=4`, every
/// `MatMxN * VecN`, and `MulAssign<MatN>` for every `MatMxN`. Must be invoked inside the module that
/// declares the matrix and vector types, with `Real` in scope.
#[proc_macro]
pub fn matrix_products(input: TokenStream) -> TokenStream {
    products::matrix_products(input.into()).into()
}
