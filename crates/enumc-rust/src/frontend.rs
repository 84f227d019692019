//! Enum extraction from Rust source

use enumc_core::ast::{EnumDef, EnumVariant, Field, RustType, VariantPayload};
use enumc_core::{Error, Result};
use eyre::{eyre, Context};
use itertools::Itertools;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extracts convertible enums from Rust source
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RustFrontend {}

impl RustFrontend {
    pub fn new() -> Self {
        RustFrontend {}
    }

    /// Extract every enum declared in `source`, including ones inside inline
    /// modules. A source with no enums yields an empty vector.
    pub fn extract_str(&self, source: &str) -> Result<Vec<EnumDef>> {
        let file = syn::parse_file(source).map_err(|e| Error::Parse(e.to_string()))?;
        let mut enums = Vec::new();
        collect_items(&file.items, &mut enums)?;
        Ok(enums)
    }

    /// Read `path` and extract its enums
    pub fn extract_file(&self, path: &Path) -> Result<Vec<EnumDef>> {
        if !path.is_file() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        debug!("Extracting enums from {}", path.display());
        let source = fs::read_to_string(path)
            .with_context(|| format!("Could not read file: {}", path.display()))?;
        self.extract_str(&source)
    }
}

fn collect_items(items: &[syn::Item], out: &mut Vec<EnumDef>) -> Result<()> {
    for item in items {
        match item {
            syn::Item::Enum(item_enum) => out.push(parse_enum(item_enum)?),
            syn::Item::Mod(module) => {
                if let Some((_, items)) = &module.content {
                    collect_items(items, out)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Convert one `syn::ItemEnum` into the IR, rejecting shapes with no C
/// mapping.
pub fn parse_enum(item: &syn::ItemEnum) -> Result<EnumDef> {
    let name = item.ident.to_string();
    if !item.generics.params.is_empty() {
        return Err(Error::unsupported(&name, "generic parameters"));
    }
    let variants = item
        .variants
        .iter()
        .map(|v| parse_variant(&name, v))
        .try_collect()?;
    Ok(EnumDef { name, variants })
}

fn parse_variant(enum_name: &str, variant: &syn::Variant) -> Result<EnumVariant> {
    if variant.discriminant.is_some() {
        return Err(Error::unsupported(enum_name, "explicit discriminants"));
    }
    let payload = match &variant.fields {
        syn::Fields::Unit => VariantPayload::Unit,
        syn::Fields::Unnamed(fields) => VariantPayload::Tuple(
            fields
                .unnamed
                .iter()
                .map(|f| parse_type(enum_name, &f.ty))
                .try_collect()?,
        ),
        syn::Fields::Named(fields) => VariantPayload::Struct(
            fields
                .named
                .iter()
                .map(|f| parse_field(enum_name, f))
                .try_collect()?,
        ),
    };
    Ok(EnumVariant {
        name: variant.ident.to_string(),
        payload,
    })
}

fn parse_field(enum_name: &str, field: &syn::Field) -> Result<Field> {
    let name = field
        .ident
        .as_ref()
        .map(|i| i.to_string())
        .ok_or_else(|| eyre!("struct variant field without a name"))?;
    Ok(Field {
        name,
        ty: parse_type(enum_name, &field.ty)?,
    })
}

fn parse_type(enum_name: &str, ty: &syn::Type) -> Result<RustType> {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => {
            let spelling = path
                .path
                .segments
                .iter()
                .map(|s| s.ident.to_string())
                .join("::");
            if spelling == "i128" || spelling == "u128" {
                return Err(Error::unsupported(
                    enum_name,
                    "128-bit integers have no portable C representation",
                ));
            }
            RustType::from_name(&spelling)
                .ok_or_else(|| Error::unsupported(enum_name, format!("payload type {spelling}")))
        }
        syn::Type::Reference(reference) => {
            if let syn::Type::Path(path) = &*reference.elem {
                if path.path.is_ident("str") {
                    return Ok(RustType::Str);
                }
            }
            Err(Error::unsupported(
                enum_name,
                "references other than &str",
            ))
        }
        _ => Err(Error::unsupported(enum_name, "non-path payload type")),
    }
}
