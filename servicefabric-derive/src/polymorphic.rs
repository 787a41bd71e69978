//! Derive macro implementation for `Polymorphic`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::attrs::FabricAttrs;

pub fn derive_polymorphic_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    // The variant table is a `static`, which cannot name generic parameters.
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Polymorphic cannot be derived for generic enums",
        ));
    }

    let attrs = FabricAttrs::parse(&input.attrs)?;
    let type_name = attrs.type_name.unwrap_or_else(|| name.to_string());
    let discriminator = attrs.discriminator.ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "Polymorphic requires #[fabric(discriminator = \"...\")]",
        )
    })?;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Polymorphic can only be derived for enums",
            ))
        }
    };

    let mut decoders = Vec::new();
    let mut entries = Vec::new();
    let mut tag_arms = Vec::new();
    let mut write_arms = Vec::new();
    let mut checks = Vec::new();

    for (index, variant) in variants.iter().enumerate() {
        let ident = &variant.ident;
        let inner = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "Polymorphic variants must wrap exactly one family member struct",
                ))
            }
        };
        let variant_attrs = FabricAttrs::parse(&variant.attrs)?;

        let message = format!(
            "{name}::{ident} wraps a member whose discriminator is not `{discriminator}`"
        );
        checks.push(quote! {
            const _: () = ::core::assert!(
                ::servicefabric_core::codec::same_discriminator(
                    <#inner as ::servicefabric_core::codec::FamilyMember>::DISCRIMINATOR,
                    #discriminator,
                ),
                #message
            );
        });

        let tag = quote! { <#inner as ::servicefabric_core::codec::FamilyMember>::TAG };
        tag_arms.push(quote! { Self::#ident(_) => #tag, });
        write_arms.push(quote! {
            Self::#ident(inner) => ::servicefabric_core::codec::write_object(inner, writer),
        });

        // Skipped members stay encodable in the enum but are never registered.
        if variant_attrs.skip {
            continue;
        }

        let decoder = format_ident!("__decode_{}", index);
        decoders.push(quote! {
            fn #decoder(
                reader: &mut dyn ::servicefabric_core::codec::JsonRead,
            ) -> ::servicefabric_core::Result<#name> {
                <#inner as ::servicefabric_core::codec::JsonObject>::read_fields(reader)
                    .map(#name::#ident)
            }
        });
        entries.push(quote! {
            ::servicefabric_core::codec::Variant::new(#tag, #decoder)
        });
    }

    Ok(quote! {
        #(#checks)*

        impl ::servicefabric_core::codec::DtoType for #name {
            const TYPE_NAME: &'static str = #type_name;
        }

        impl ::servicefabric_core::codec::Polymorphic for #name {
            fn variant_table() -> &'static ::servicefabric_core::codec::VariantTable<Self> {
                #(#decoders)*

                static VARIANTS: ::servicefabric_core::codec::VariantTable<#name> =
                    ::servicefabric_core::codec::VariantTable::new(
                        #type_name,
                        #discriminator,
                        &[#(#entries),*],
                    );
                &VARIANTS
            }

            fn tag(&self) -> &'static str {
                match self {
                    #(#tag_arms)*
                }
            }

            fn write_variant(
                &self,
                writer: &mut dyn ::servicefabric_core::codec::JsonWrite,
            ) -> ::servicefabric_core::Result<()> {
                match self {
                    #(#write_arms)*
                }
            }
        }

        impl ::servicefabric_core::codec::JsonDecode for #name {
            fn decode(
                reader: &mut dyn ::servicefabric_core::codec::JsonRead,
            ) -> ::servicefabric_core::Result<Self> {
                ::servicefabric_core::codec::decode_polymorphic(reader)
            }
        }

        impl ::servicefabric_core::codec::JsonEncode for #name {
            fn encode(
                &self,
                writer: &mut dyn ::servicefabric_core::codec::JsonWrite,
            ) -> ::servicefabric_core::Result<()> {
                ::servicefabric_core::codec::encode_polymorphic(self, writer)
            }
        }
    })
}
