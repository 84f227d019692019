//! Lowering from enum IR to C declarations
//!
//! # Mapping
//! ## Unit variant
//! Lowered to the `empty` typedef in the union.
//!
//! ## Tuple variant
//! A single payload collapses to a bare union member; two or more payloads
//! become an anonymous struct with fields `t_0, t_1, ...`.
//!
//! ## Struct variant
//! An anonymous struct in the union, keeping the field names.
//!
//! # Naming
//! A variant named `EnumVariant` gets the name `enum_variant` in the union;
//! tag enumerators are prefixed with the enum name (`SUM_A`).

use crate::ast::{EnumDef, EnumVariant, Field, RustType, VariantPayload};
use crate::cdecl::{CEnum, CField, CMemberPayload, CTaggedUnion, CType, CUnionMember};
use tracing::debug;

/// Lower one extracted enum to its C tagged-union form.
///
/// Lowering is total: every IR shape the frontend admits has a C rendering.
pub fn lower_enum(def: &EnumDef) -> CTaggedUnion {
    debug!("Lowering enum {} ({} variants)", def.name, def.variants.len());
    let tag = CEnum {
        name: format!("{}Tag", def.name),
        enumerators: def
            .variants
            .iter()
            .map(|v| tag_enumerator(&def.name, &v.name))
            .collect(),
    };
    let members = def.variants.iter().map(lower_variant).collect();
    CTaggedUnion {
        name: def.name.clone(),
        tag,
        members,
    }
}

fn lower_variant(variant: &EnumVariant) -> CUnionMember {
    let payload = match &variant.payload {
        VariantPayload::Unit => CMemberPayload::Empty,
        VariantPayload::Tuple(types) if types.len() == 1 => {
            CMemberPayload::Single(map_type(types[0]))
        }
        VariantPayload::Tuple(types) => CMemberPayload::Struct(
            types
                .iter()
                .enumerate()
                .map(|(i, ty)| CField {
                    name: format!("t_{i}"),
                    ty: map_type(*ty),
                })
                .collect(),
        ),
        VariantPayload::Struct(fields) => {
            CMemberPayload::Struct(fields.iter().map(lower_field).collect())
        }
    };
    CUnionMember {
        name: snake_case(&variant.name),
        payload,
    }
}

fn lower_field(field: &Field) -> CField {
    CField {
        name: field.name.clone(),
        ty: map_type(field.ty),
    }
}

/// Map a convertible Rust primitive to its C type
pub fn map_type(ty: RustType) -> CType {
    match ty {
        RustType::Bool => CType::Bool,
        RustType::Char => CType::Char32,
        RustType::I8 => CType::Int8,
        RustType::I16 => CType::Int16,
        RustType::I32 => CType::Int,
        RustType::I64 => CType::Int64,
        RustType::U8 => CType::UInt8,
        RustType::U16 => CType::UInt16,
        RustType::U32 => CType::UInt,
        RustType::U64 => CType::UInt64,
        RustType::Isize => CType::PtrDiff,
        RustType::Usize => CType::Size,
        RustType::F32 => CType::Float,
        RustType::F64 => CType::Double,
        RustType::Str => CType::CharPtr,
    }
}

/// `EnumVariant` -> `enum_variant`
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
            out.push(ch);
        }
    }
    out
}

fn tag_enumerator(enum_name: &str, variant_name: &str) -> String {
    format!(
        "{}_{}",
        snake_case(enum_name).to_uppercase(),
        snake_case(variant_name).to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn variant(name: &str, payload: VariantPayload) -> EnumVariant {
        EnumVariant {
            name: name.to_string(),
            payload,
        }
    }

    #[test]
    fn snake_case_names() {
        assert_eq!(snake_case("A"), "a");
        assert_eq!(snake_case("EnumVariant"), "enum_variant");
        assert_eq!(snake_case("Utf8"), "utf8");
        assert_eq!(snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn tag_enumerators_are_prefixed() {
        let def = EnumDef {
            name: "Sum".to_string(),
            variants: vec![
                variant("A", VariantPayload::Tuple(vec![RustType::Str])),
                variant("B", VariantPayload::Tuple(vec![RustType::I32])),
            ],
        };
        let decl = lower_enum(&def);
        assert_eq!(decl.tag.name, "SumTag");
        assert_eq!(decl.tag.enumerators, vec!["SUM_A", "SUM_B"]);
    }

    #[test]
    fn unit_variant_lowers_to_empty() {
        let def = EnumDef {
            name: "Named".to_string(),
            variants: vec![variant("B", VariantPayload::Unit)],
        };
        let decl = lower_enum(&def);
        assert_eq!(decl.members[0].name, "b");
        assert_eq!(decl.members[0].payload, CMemberPayload::Empty);
        assert!(decl.has_empty_member());
    }

    #[test]
    fn single_payload_collapses_to_bare_member() {
        let def = EnumDef {
            name: "Sum".to_string(),
            variants: vec![variant("A", VariantPayload::Tuple(vec![RustType::Str]))],
        };
        let decl = lower_enum(&def);
        assert_eq!(decl.members[0].payload, CMemberPayload::Single(CType::CharPtr));
    }

    #[test]
    fn tuple_payloads_get_temp_names() {
        let def = EnumDef {
            name: "Variant".to_string(),
            variants: vec![variant(
                "A",
                VariantPayload::Tuple(vec![RustType::Str, RustType::I32]),
            )],
        };
        let decl = lower_enum(&def);
        let CMemberPayload::Struct(fields) = &decl.members[0].payload else {
            panic!("expected anonymous struct payload");
        };
        assert_eq!(fields[0].name, "t_0");
        assert_eq!(fields[0].ty, CType::CharPtr);
        assert_eq!(fields[1].name, "t_1");
        assert_eq!(fields[1].ty, CType::Int);
    }

    #[test]
    fn struct_variant_keeps_field_names() {
        let def = EnumDef {
            name: "Named".to_string(),
            variants: vec![variant(
                "A",
                VariantPayload::Struct(vec![
                    Field {
                        name: "x".to_string(),
                        ty: RustType::Str,
                    },
                    Field {
                        name: "y".to_string(),
                        ty: RustType::I32,
                    },
                ]),
            )],
        };
        let decl = lower_enum(&def);
        let CMemberPayload::Struct(fields) = &decl.members[0].payload else {
            panic!("expected anonymous struct payload");
        };
        assert_eq!(fields[0].name, "x");
        assert_eq!(fields[1].name, "y");
    }

    #[test]
    fn primitive_mapping() {
        assert_eq!(map_type(RustType::I32), CType::Int);
        assert_eq!(map_type(RustType::I64), CType::Int64);
        assert_eq!(map_type(RustType::Str), CType::CharPtr);
        assert_eq!(map_type(RustType::Usize), CType::Size);
        assert_eq!(map_type(RustType::Char), CType::Char32);
    }
}
