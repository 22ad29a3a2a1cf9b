//! Procedural macros for the flowblock runtime.
//!
//! - `#[derive(Label)]`: Implements `flowblock::Label` for your type, preserving generics and bounds.
//!   For enums, `label()` returns the variant name; for structs, the type name.
//!
//! Usage:
//! ```rust,ignore
//! use flowblock::Label;
//!
//! #[derive(Label)]
//! enum Signal { Start, Data(u32), Stop { reason: String } }
//!
//! assert_eq!(Signal::Data(1).label(), "Data");
//! ```
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

#[proc_macro_derive(Label)]
pub fn derive_label(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = input.ident.clone();
    let generics = input.generics.clone();

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body: TokenStream2 = match &input.data {
        Data::Enum(data_enum) => {
            let match_arms = data_enum.variants.iter().map(|variant| {
                let variant_ident = &variant.ident;
                let variant_name = variant_ident.to_string();

                let pattern = match &variant.fields {
                    Fields::Unit => quote! { Self::#variant_ident },
                    Fields::Unnamed(_) => quote! { Self::#variant_ident(..) },
                    Fields::Named(_) => quote! { Self::#variant_ident { .. } },
                };

                quote! {
                    #pattern => ::std::borrow::Cow::Borrowed(#variant_name)
                }
            });

            quote! {
                match self {
                    #(#match_arms),*
                }
            }
        }
        _ => {
            let type_name = ident.to_string();
            quote! { ::std::borrow::Cow::Borrowed(#type_name) }
        }
    };

    let expanded = quote! {
        impl #impl_generics flowblock::Label for #ident #ty_generics #where_clause {
            fn label(&self) -> ::std::borrow::Cow<'static, str> {
                #body
            }
        }
    };
    TokenStream::from(expanded)
}
