//! C declaration model for generated tagged unions
//!
//! The lowering pass produces these types; the printer renders them. One
//! [`CTaggedUnion`] corresponds to one Rust enum: a tag enum plus a struct
//! wrapping the discriminant and an anonymous union.

use serde::{Deserialize, Serialize};

/// A complete tagged-union rendering of one Rust enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CTaggedUnion {
    pub name: String,
    pub tag: CEnum,
    pub members: Vec<CUnionMember>,
}

/// The discriminant enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CEnum {
    pub name: String,
    pub enumerators: Vec<String>,
}

/// One member of the payload union
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CUnionMember {
    pub name: String,
    pub payload: CMemberPayload,
}

/// Shape of a union member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CMemberPayload {
    /// Payload-free variant; rendered as the `empty` typedef
    Empty,
    /// Single-payload variant collapsed to a bare member
    Single(CType),
    /// Anonymous struct with one field per payload element
    Struct(Vec<CField>),
}

/// Field of an anonymous payload struct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CField {
    pub name: String,
    pub ty: CType,
}

/// C types the converter emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CType {
    Bool,
    Char32,
    Int,
    UInt,
    Int8,
    Int16,
    Int64,
    UInt8,
    UInt16,
    UInt64,
    Size,
    PtrDiff,
    Float,
    Double,
    CharPtr,
}

impl CType {
    /// C spelling of this type
    pub fn spelling(&self) -> &'static str {
        match self {
            CType::Bool => "bool",
            CType::Char32 => "uint32_t",
            CType::Int => "int",
            CType::UInt => "unsigned int",
            CType::Int8 => "int8_t",
            CType::Int16 => "int16_t",
            CType::Int64 => "long long",
            CType::UInt8 => "uint8_t",
            CType::UInt16 => "uint16_t",
            CType::UInt64 => "unsigned long long",
            CType::Size => "size_t",
            CType::PtrDiff => "ptrdiff_t",
            CType::Float => "float",
            CType::Double => "double",
            CType::CharPtr => "char *",
        }
    }

    /// Check if this is a pointer type
    pub fn is_pointer(&self) -> bool {
        matches!(self, CType::CharPtr)
    }

    /// Render a member declaration without the trailing semicolon
    pub fn declare(&self, name: &str) -> String {
        if self.is_pointer() {
            format!("{}{}", self.spelling(), name)
        } else {
            format!("{} {}", self.spelling(), name)
        }
    }

    pub fn needs_stdint(&self) -> bool {
        matches!(
            self,
            CType::Char32
                | CType::Int8
                | CType::Int16
                | CType::UInt8
                | CType::UInt16
        )
    }

    pub fn needs_stdbool(&self) -> bool {
        matches!(self, CType::Bool)
    }

    pub fn needs_stddef(&self) -> bool {
        matches!(self, CType::Size | CType::PtrDiff)
    }
}

impl CTaggedUnion {
    /// Check whether any member uses the `empty` typedef
    pub fn has_empty_member(&self) -> bool {
        self.members
            .iter()
            .any(|m| matches!(m.payload, CMemberPayload::Empty))
    }

    /// Every concrete C type appearing in this declaration
    pub fn payload_types(&self) -> Vec<CType> {
        let mut types = Vec::new();
        for member in &self.members {
            match &member.payload {
                CMemberPayload::Empty => {}
                CMemberPayload::Single(ty) => types.push(*ty),
                CMemberPayload::Struct(fields) => types.extend(fields.iter().map(|f| f.ty)),
            }
        }
        types
    }
}
