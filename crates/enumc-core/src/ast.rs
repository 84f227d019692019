//! Intermediate representation of extracted Rust enums
//!
//! This module provides the source-side types the frontend produces and the
//! lowering pass consumes. Only shapes with a C mapping are representable.

use serde::{Deserialize, Serialize};

/// A Rust enum captured for conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    pub variants: Vec<EnumVariant>,
}

/// One variant of a captured enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumVariant {
    pub name: String,
    pub payload: VariantPayload,
}

/// The payload shape of a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantPayload {
    Unit,
    Tuple(Vec<RustType>),
    Struct(Vec<Field>),
}

/// Named field of a struct variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: RustType,
}

/// Payload types the converter knows how to map to C.
///
/// `String` and `&str` both collapse to [`RustType::Str`]; 128-bit integers
/// are rejected by the frontend before an IR value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RustType {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Isize,
    Usize,
    F32,
    F64,
    Str,
}

impl RustType {
    /// Look up a primitive by its Rust spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(RustType::Bool),
            "char" => Some(RustType::Char),
            "i8" => Some(RustType::I8),
            "i16" => Some(RustType::I16),
            "i32" => Some(RustType::I32),
            "i64" => Some(RustType::I64),
            "u8" => Some(RustType::U8),
            "u16" => Some(RustType::U16),
            "u32" => Some(RustType::U32),
            "u64" => Some(RustType::U64),
            "isize" => Some(RustType::Isize),
            "usize" => Some(RustType::Usize),
            "f32" => Some(RustType::F32),
            "f64" => Some(RustType::F64),
            "String" | "str" => Some(RustType::Str),
            _ => None,
        }
    }
}

impl VariantPayload {
    /// Check if this is a unit (payload-free) variant
    pub fn is_unit(&self) -> bool {
        matches!(self, VariantPayload::Unit)
    }
}
