//! Derive macro implementation for `JsonObject`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields};

use crate::attrs::{is_option, pascal_case, FabricAttrs};

pub fn derive_object_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attrs = FabricAttrs::parse(&input.attrs)?;
    let type_name = attrs.type_name.clone().unwrap_or_else(|| name.to_string());

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "JsonObject only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "JsonObject can only be derived for structs",
            ))
        }
    };

    let family = match (&attrs.discriminator, &attrs.tag) {
        (Some(discriminator), Some(tag)) => Some((discriminator.clone(), tag.clone())),
        (None, None) => None,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "#[fabric(discriminator = ..)] and #[fabric(tag = ..)] must be given together",
            ))
        }
    };

    let mut slots = Vec::new();
    let mut arms = Vec::new();
    let mut inits = Vec::new();
    let mut writes = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let field_attrs = FabricAttrs::parse(&field.attrs)?;

        if field_attrs.skip {
            inits.push(quote! { #ident: ::core::default::Default::default() });
            continue;
        }

        let wire_name = field_attrs
            .rename
            .clone()
            .unwrap_or_else(|| pascal_case(&ident.to_string()));
        let slot = format_ident!("__field_{}", index);

        slots.push(quote! {
            let mut #slot: ::core::option::Option<#ty> = ::core::option::Option::None;
        });
        arms.push(quote! {
            #wire_name => #slot = ::servicefabric_core::codec::read_field(reader)?,
        });
        inits.push(quote! { #ident: #slot.unwrap_or_default() });

        let write = if is_option(ty) {
            if field_attrs.nullable {
                quote! { ::servicefabric_core::codec::write_nullable_field(writer, #wire_name, &self.#ident)?; }
            } else {
                quote! { ::servicefabric_core::codec::write_optional_field(writer, #wire_name, &self.#ident)?; }
            }
        } else if field_attrs.nullable {
            return Err(syn::Error::new_spanned(
                ty,
                "#[fabric(nullable)] requires an Option<T> field",
            ));
        } else {
            quote! { ::servicefabric_core::codec::write_field(writer, #wire_name, &self.#ident)?; }
        };
        writes.push(write);
    }

    let (discriminator_arm, discriminator_write, member_impl) = match &family {
        Some((discriminator, tag)) => (
            quote! { #discriminator => ::servicefabric_core::codec::read_discriminator::<Self>(reader)?, },
            quote! {
                ::servicefabric_core::codec::write_discriminator(
                    writer,
                    <Self as ::servicefabric_core::codec::FamilyMember>::DISCRIMINATOR,
                    <Self as ::servicefabric_core::codec::FamilyMember>::TAG,
                )?;
            },
            quote! {
                impl #impl_generics ::servicefabric_core::codec::FamilyMember for #name #ty_generics #where_clause {
                    const DISCRIMINATOR: &'static str = #discriminator;
                    const TAG: &'static str = #tag;
                }
            },
        ),
        None => (quote! {}, quote! {}, quote! {}),
    };

    Ok(quote! {
        impl #impl_generics ::servicefabric_core::codec::DtoType for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
        }

        impl #impl_generics ::servicefabric_core::codec::JsonObject for #name #ty_generics #where_clause {
            fn read_fields(
                reader: &mut dyn ::servicefabric_core::codec::JsonRead,
            ) -> ::servicefabric_core::Result<Self> {
                #(#slots)*
                while let ::core::option::Option::Some(__name) = reader.next_property()? {
                    match __name.as_str() {
                        #discriminator_arm
                        #(#arms)*
                        _ => ::servicefabric_core::codec::skip_unknown_property(
                            reader,
                            <Self as ::servicefabric_core::codec::DtoType>::TYPE_NAME,
                            &__name,
                        )?,
                    }
                }
                ::core::result::Result::Ok(Self {
                    #(#inits,)*
                })
            }

            fn write_fields(
                &self,
                writer: &mut dyn ::servicefabric_core::codec::JsonWrite,
            ) -> ::servicefabric_core::Result<()> {
                #discriminator_write
                #(#writes)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::servicefabric_core::codec::JsonDecode for #name #ty_generics #where_clause {
            fn decode(
                reader: &mut dyn ::servicefabric_core::codec::JsonRead,
            ) -> ::servicefabric_core::Result<Self> {
                ::servicefabric_core::codec::read_object(reader)
            }
        }

        impl #impl_generics ::servicefabric_core::codec::JsonEncode for #name #ty_generics #where_clause {
            fn encode(
                &self,
                writer: &mut dyn ::servicefabric_core::codec::JsonWrite,
            ) -> ::servicefabric_core::Result<()> {
                ::servicefabric_core::codec::write_object(self, writer)
            }
        }

        #member_impl
    })
}
