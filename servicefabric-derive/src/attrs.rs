//! Parsing of `#[fabric(...)]` attributes.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

/// Every key the `fabric` attribute accepts. Each derive checks which ones apply.
#[derive(Default)]
pub struct FabricAttrs {
    pub type_name: Option<String>,
    pub discriminator: Option<String>,
    pub tag: Option<String>,
    pub rename: Option<String>,
    pub nullable: bool,
    pub skip: bool,
    pub unknown: bool,
}

impl FabricAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs {
            if !attr.path().is_ident("fabric") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_name") {
                    out.type_name = Some(parse_str(&meta)?);
                } else if meta.path.is_ident("discriminator") {
                    out.discriminator = Some(parse_str(&meta)?);
                } else if meta.path.is_ident("tag") {
                    out.tag = Some(parse_str(&meta)?);
                } else if meta.path.is_ident("rename") {
                    out.rename = Some(parse_str(&meta)?);
                } else if meta.path.is_ident("nullable") {
                    out.nullable = true;
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                } else if meta.path.is_ident("unknown") {
                    out.unknown = true;
                } else {
                    return Err(meta.error("unsupported fabric attribute"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

fn parse_str(meta: &ParseNestedMeta) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

/// `backup_policy_name` -> `BackupPolicyName`.
pub fn pascal_case(ident: &str) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let mut out = String::with_capacity(ident.len());
    for segment in ident.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Returns `true` for `Option<T>`, however the path is spelled.
pub fn is_option(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}
