//! Derive macro implementation for `WireEnum`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::attrs::FabricAttrs;

pub fn derive_wire_enum_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "WireEnum cannot be derived for generic enums",
        ));
    }

    let attrs = FabricAttrs::parse(&input.attrs)?;
    let type_name = attrs.type_name.unwrap_or_else(|| name.to_string());

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "WireEnum can only be derived for enums",
            ))
        }
    };

    let mut unknown = None;
    let mut table = Vec::new();
    let mut display_arms = Vec::new();

    for variant in variants {
        let ident = &variant.ident;
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "WireEnum members cannot carry data",
            ));
        }

        let variant_attrs = FabricAttrs::parse(&variant.attrs)?;
        if variant_attrs.unknown {
            if unknown.is_some() {
                return Err(syn::Error::new_spanned(
                    variant,
                    "only one member may be marked #[fabric(unknown)]",
                ));
            }
            unknown = Some(ident);
            let text = ident.to_string();
            display_arms.push(quote! { Self::#ident => #text, });
            continue;
        }

        let wire = variant_attrs.rename.unwrap_or_else(|| ident.to_string());
        display_arms.push(quote! { Self::#ident => #wire, });
        if !variant_attrs.skip {
            table.push(quote! { (#wire, Self::#ident) });
        }
    }

    let unknown = unknown.ok_or_else(|| {
        syn::Error::new_spanned(name, "WireEnum requires one member marked #[fabric(unknown)]")
    })?;

    Ok(quote! {
        impl ::servicefabric_core::codec::DtoType for #name {
            const TYPE_NAME: &'static str = #type_name;
        }

        impl ::servicefabric_core::codec::WireEnum for #name {
            const UNKNOWN: Self = Self::#unknown;
            const WIRE_TABLE: &'static [(&'static str, Self)] = &[#(#table),*];
        }

        impl ::servicefabric_core::codec::JsonDecode for #name {
            fn decode(
                reader: &mut dyn ::servicefabric_core::codec::JsonRead,
            ) -> ::servicefabric_core::Result<Self> {
                ::servicefabric_core::codec::decode_enum(reader)
            }
        }

        impl ::servicefabric_core::codec::JsonEncode for #name {
            fn encode(
                &self,
                writer: &mut dyn ::servicefabric_core::codec::JsonWrite,
            ) -> ::servicefabric_core::Result<()> {
                ::servicefabric_core::codec::encode_enum(*self, writer)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(match self {
                    #(#display_arms)*
                })
            }
        }
    })
}
