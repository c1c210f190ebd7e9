use proc_macro2::*;
use quote::{quote, format_ident};

const DIMS: [usize; 3] = [2, 3, 4];
const COMPONENTS: [&str; 4] = ["x", "y", "z", "w"];

fn mat_ident(rows: usize, columns: usize) -> Ident {
    if rows == columns {
        format_ident!("Mat{}", rows)
    } else {
        format_ident!("Mat{}x{}", rows, columns)
    }
}

fn index(idx: usize) -> Literal {
    Literal::usize_unsuffixed(idx)
}

/// Row `row` of the left-hand side (column-major, `rows` high) dotted with the right-hand terms, summed left to right
fn dot_expr(rows: usize, inner: usize, row: usize, rhs_elem: impl Fn(usize) -> TokenStream) -> TokenStream {
    let terms = (0..inner).map(|k| {
        let lhs_idx = index(k * rows + row);
        let rhs = rhs_elem(k);
        quote!(self.vals[#lhs_idx] * #rhs)
    });
    quote!(#(#terms)+*)
}

fn mat_mat(m: usize, n: usize, o: usize) -> TokenStream {
    let lhs = mat_ident(m, n);
    let rhs = mat_ident(n, o);
    let out = mat_ident(m, o);

    // Output is emitted in column-major order: all rows of column 0, then column 1, ...
    let mut elems = Vec::with_capacity(m * o);
    for column in 0..o {
        for row in 0..m {
            elems.push(dot_expr(m, n, row, |k| {
                let rhs_idx = index(column * n + k);
                quote!(rhs.vals[#rhs_idx])
            }));
        }
    }

    let mul_assign = if n == o {
        quote!{
            impl<T: Real> core::ops::MulAssign<#rhs<T>> for #lhs<T> {
                #[inline]
                fn mul_assign(&mut self, rhs: #rhs<T>) {
                    *self = *self * rhs;
                }
            }
        }
    } else {
        TokenStream::new()
    };

    quote!{
        impl<T: Real> core::ops::Mul<#rhs<T>> for #lhs<T> {
            type Output = #out<T>;

            #[inline]
            fn mul(self, rhs: #rhs<T>) -> Self::Output {
                #out { vals: [#(#elems),*] }
            }
        }

        #mul_assign
    }
}

fn mat_vec(m: usize, n: usize) -> TokenStream {
    let lhs = mat_ident(m, n);
    let rhs = format_ident!("Vec{}", n);
    let out = format_ident!("Vec{}", m);

    let elems = (0..m).map(|row| dot_expr(m, n, row, |k| {
        let comp = format_ident!("{}", COMPONENTS[k]);
        quote!(rhs.#comp)
    }));

    quote!{
        impl<T: Real> core::ops::Mul<#rhs<T>> for #lhs<T> {
            type Output = #out<T>;

            #[inline]
            fn mul(self, rhs: #rhs<T>) -> Self::Output {
                #out::new(#(#elems),*)
            }
        }
    }
}

pub fn matrix_products(input: TokenStream) -> TokenStream {
    if !input.is_empty() {
        return quote!( compile_error!("matrix_products!() does not take any arguments"); );
    }

    let mut impls = TokenStream::new();
    for m in DIMS {
        for n in DIMS {
            impls.extend(mat_vec(m, n));
            for o in DIMS {
                impls.extend(mat_mat(m, n, o));
            }
        }
    }
    impls
}
