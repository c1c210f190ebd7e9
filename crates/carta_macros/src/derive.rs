use proc_macro2::*;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

/// Fieldless enum, the only kind of enum the derives in this crate accept
struct UnitEnum {
    ident    : Ident,
    variants : Vec<syn::Variant>,
}

impl UnitEnum {
    fn parse(item: TokenStream) -> syn::Result<Self> {
        let input = syn::parse2::<DeriveInput>(item)?;
        let Data::Enum(data) = input.data else {
            return Err(syn::Error::new_spanned(&input.ident, "Only enums can be derived"));
        };

        if let Some(variant) = data.variants.iter().find(|variant| !matches!(variant.fields, Fields::Unit)) {
            return Err(syn::Error::new_spanned(&variant.ident, "Only enums without fields can be derived"));
        }

        Ok(Self { ident: input.ident, variants: data.variants.into_iter().collect() })
    }

    fn variant_idents(&self) -> impl Iterator<Item = &Ident> {
        self.variants.iter().map(|variant| &variant.ident)
    }
}

fn derive_with(item: TokenStream, gen: impl FnOnce(UnitEnum) -> syn::Result<TokenStream>) -> TokenStream {
    UnitEnum::parse(item)
        .and_then(gen)
        .unwrap_or_else(syn::Error::into_compile_error)
}

pub fn enum_count(item: TokenStream) -> TokenStream {
    derive_with(item, |parsed| {
        let ident = &parsed.ident;
        let count = parsed.variants.len();
        Ok(quote!{
            impl ::carta_base::EnumCountT for #ident {
                const COUNT: usize = #count;
            }
        })
    })
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
    derive_with(item, |parsed| {
        let ident = &parsed.ident;
        let variants = parsed.variant_idents();
        let indices = 0..parsed.variants.len();
        Ok(quote!{
            impl ::carta_base::EnumFromIndexT for #ident {
                fn from_idx(idx: usize) -> Option<Self> {
                    match idx {
                        #(#indices => Some(Self::#variants),)*
                        _ => None,
                    }
                }
            }
        })
    })
}

/// Variants are displayed by name, unless they carry a `#[display("...")]` attribute
pub fn enum_display(item: TokenStream) -> TokenStream {
    derive_with(item, |parsed| {
        let ident = &parsed.ident;
        let variants = parsed.variant_idents();

        let mut names = Vec::with_capacity(parsed.variants.len());
        for variant in &parsed.variants {
            let custom = variant.attrs.iter().find(|attr| attr.path.is_ident("display"));
            let name = match custom {
                Some(attr) => attr.parse_args::<LitStr>()?.value(),
                None => variant.ident.to_string(),
            };
            names.push(name);
        }

        Ok(quote!{
            impl core::fmt::Display for #ident {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(match self {
                        #(Self::#variants => #names,)*
                    })
                }
            }
        })
    })
}
