use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derives `Display` and `FromStr` for a fieldless enum through its serde
/// representation, so `rename_all` applies to topics and map keys alike.
///
/// The deriving module must have `serde::Serialize` and `serde::Deserialize`
/// in scope.
#[proc_macro_derive(Str)]
pub fn str_macro_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match &ast.data {
        syn::Data::Enum(data) => {
            if let Some(variant) = data
                .variants
                .iter()
                .find(|variant| !matches!(variant.fields, syn::Fields::Unit))
            {
                return syn::Error::new_spanned(variant, "Str supports only unit variants")
                    .to_compile_error()
                    .into();
            }

            expand(&ast.ident).into()
        }
        _ => syn::Error::new_spanned(&ast.ident, "Str supports only enums")
            .to_compile_error()
            .into(),
    }
}

fn expand(name: &syn::Ident) -> proc_macro2::TokenStream {
    quote! {
        impl std::fmt::Display for #name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.serialize(f)
            }
        }

        impl std::str::FromStr for #name {
            type Err = serde::de::value::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                use serde::de::IntoDeserializer;

                Self::deserialize(s.into_deserializer())
            }
        }
    }
}
