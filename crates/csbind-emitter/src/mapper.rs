//! Type Mapper - C types to C# type expressions
//!
//! Every classified C type is spelled differently depending on where the
//! spelling lands:
//!
//! | C type            | Interop       | Surface        | Field          |
//! |-------------------|---------------|----------------|----------------|
//! | `uint32_t`        | `uint`        | `uint`         | `uint`         |
//! | `const char *`    | `byte*`       | `string` (*)   | `string` (*)   |
//! | `const sg_desc *` | `Desc*`       | `in Desc`      | `Desc*`        |
//! | `float *`         | `float*`      | `ref float`    | `float*`       |
//! | `const float *`   | `float*`      | `in float`     | `float*`       |
//! | `void (*)(int)`   | `delegate* unmanaged<int, void>` (all roles)   |
//!
//! (*) with a UTF-8 string marshaling attribute.
//!
//! Primitives keep their exact width in every role. Function pointer
//! signatures always use the interop spelling. Inline arrays only exist as
//! struct fields and are mapped by [`TypeMapper::map_field`].

use rustc_hash::FxHashSet;
use std::fmt;

use csbind_common::names::to_type_name;
use csbind_ir::{CType, Primitive, TypeKind, TypeRegistry};

/// Largest element count of an inline array field.
pub const MAX_INLINE_ARRAY_LEN: usize = 4096;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeRole {
    /// Raw native-call signatures: flat pointers and primitives only.
    Interop,
    /// Idiomatic P/Invoke signatures: `in`/`ref` parameters, marshaled strings.
    Surface,
    /// Struct field storage. Fields cannot be references, so the surface
    /// by-reference conventions fall back to raw pointers.
    Field,
}

/// Marshaling the P/Invoke layer applies at the call boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marshal {
    Utf8String,
    /// One-byte C `bool` (the default C# marshaling is a 4-byte BOOL).
    Bool,
}

impl Marshal {
    pub fn attribute(self) -> &'static str {
        match self {
            Marshal::Utf8String => "M(U.LPUTF8Str)",
            Marshal::Bool => "M(U.I1)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetType {
    pub text: String,
    pub marshal: Option<Marshal>,
}

impl TargetType {
    fn plain(text: impl Into<String>) -> Self {
        TargetType {
            text: text.into(),
            marshal: None,
        }
    }

    /// `[M(U.I1)] ` style attribute prefix, or nothing.
    pub fn attribute_prefix(&self) -> String {
        match self.marshal {
            Some(marshal) => format!("[{}] ", marshal.attribute()),
            None => String::new(),
        }
    }
}

/// Fixed-size inline storage for a C array field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineArray {
    pub element: String,
    pub rows: usize,
    /// Second dimension of a 2D array.
    pub cols: Option<usize>,
}

impl InlineArray {
    pub fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols.unwrap_or(1))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    Plain(TargetType),
    InlineArray(InlineArray),
}

/// No mapping rule applies to a C type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unmapped {
    pub c_type: String,
}

impl Unmapped {
    fn new(ty: &CType) -> Self {
        Unmapped {
            c_type: ty.to_string(),
        }
    }
}

impl fmt::Display for Unmapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no C# mapping for C type '{}'", self.c_type)
    }
}

impl std::error::Error for Unmapped {}

pub struct TypeMapper<'a> {
    registry: &'a TypeRegistry,
    /// Structs with reference-type fields; C# cannot point at them.
    managed: &'a FxHashSet<String>,
    prefix: &'a str,
    dep_prefixes: &'a [String],
}

impl<'a> TypeMapper<'a> {
    pub fn new(
        registry: &'a TypeRegistry,
        managed: &'a FxHashSet<String>,
        prefix: &'a str,
        dep_prefixes: &'a [String],
    ) -> Self {
        TypeMapper {
            registry,
            managed,
            prefix,
            dep_prefixes,
        }
    }

    /// C# name of a struct or enum, qualified when owned by a dependency.
    pub fn type_name(&self, c_name: &str) -> String {
        to_type_name(c_name, self.prefix, self.dep_prefixes)
    }

    pub fn map(&self, ty: &CType, role: TypeRole) -> Result<TargetType, Unmapped> {
        let target = match self.registry.classify(ty) {
            TypeKind::Void => match role {
                TypeRole::Field => return Err(Unmapped::new(ty)),
                TypeRole::Interop | TypeRole::Surface => TargetType::plain("void"),
            },
            TypeKind::Primitive(prim) => primitive(prim),
            TypeKind::Struct(name) | TypeKind::Enum(name) => TargetType::plain(self.type_name(name)),
            TypeKind::VoidPtr | TypeKind::ConstVoidPtr => TargetType::plain("void*"),
            TypeKind::StringPtr => match role {
                TypeRole::Interop => TargetType::plain("byte*"),
                TypeRole::Surface | TypeRole::Field => TargetType {
                    text: "string".to_string(),
                    marshal: Some(Marshal::Utf8String),
                },
            },
            TypeKind::ConstStructPtr(name) => {
                if role != TypeRole::Surface && self.managed.contains(name) {
                    return Err(Unmapped::new(ty));
                }
                by_reference("in", &self.type_name(name), role)
            }
            TypeKind::PrimPtr(prim) => by_reference("ref", prim.cs_name(), role),
            TypeKind::ConstPrimPtr(prim) => by_reference("in", prim.cs_name(), role),
            TypeKind::FuncPtr { result, params } => {
                TargetType::plain(self.func_ptr(ty, result, params)?)
            }
            TypeKind::Array1D { .. } | TypeKind::Array2D { .. } | TypeKind::Unmapped => {
                return Err(Unmapped::new(ty));
            }
        };
        Ok(target)
    }

    /// Map a function result. Return values cannot be `in`/`ref`, so the
    /// surface role spells results like fields.
    pub fn map_result(&self, ty: &CType, role: TypeRole) -> Result<TargetType, Unmapped> {
        match role {
            TypeRole::Surface if !ty.is_void() => self.map(ty, TypeRole::Field),
            _ => self.map(ty, role),
        }
    }

    /// Map a struct field, including inline arrays.
    pub fn map_field(&self, ty: &CType) -> Result<FieldType, Unmapped> {
        match self.registry.classify(ty) {
            TypeKind::Array1D { .. } | TypeKind::Array2D { .. } => {
                self.map_inline_array(ty).map(FieldType::InlineArray)
            }
            _ => self.map(ty, TypeRole::Field).map(FieldType::Plain),
        }
    }

    /// Element spelling and dimensions of a fixed 1D/2D array.
    ///
    /// Elements must be unmanaged and have the same size in C and C#:
    /// primitives other than `bool`, enums, unmanaged structs, and void
    /// pointers (as `IntPtr`).
    pub fn map_inline_array(&self, ty: &CType) -> Result<InlineArray, Unmapped> {
        let (element, rows, cols) = match self.registry.classify(ty) {
            TypeKind::Array1D { element, len } => (element, len, None),
            TypeKind::Array2D {
                element,
                rows,
                cols,
            } => (element, rows, Some(cols)),
            _ => return Err(Unmapped::new(ty)),
        };

        let element = match self.registry.classify(element) {
            TypeKind::Primitive(Primitive::Bool) => return Err(Unmapped::new(ty)),
            TypeKind::Primitive(prim) => prim.cs_name().to_string(),
            TypeKind::Struct(name) if !self.managed.contains(name) => self.type_name(name),
            TypeKind::Enum(name) => self.type_name(name),
            TypeKind::VoidPtr | TypeKind::ConstVoidPtr => "IntPtr".to_string(),
            _ => return Err(Unmapped::new(ty)),
        };

        // Every element becomes a private field of the collection struct.
        match rows.checked_mul(cols.unwrap_or(1)) {
            Some(len) if (1..=MAX_INLINE_ARRAY_LEN).contains(&len) => Ok(InlineArray {
                element,
                rows,
                cols,
            }),
            _ => Err(Unmapped::new(ty)),
        }
    }

    /// Default value expression for primitives and enums.
    pub fn default_value(&self, ty: &CType) -> Result<String, Unmapped> {
        match self.registry.classify(ty) {
            TypeKind::Primitive(prim) => Ok(prim.default_value().to_string()),
            TypeKind::Enum(name) => self
                .registry
                .enum_default_item(name)
                .map(|item| format!("{}.{item}", self.type_name(name)))
                .ok_or_else(|| Unmapped::new(ty)),
            _ => Err(Unmapped::new(ty)),
        }
    }

    fn func_ptr(&self, ty: &CType, result: &CType, params: &[CType]) -> Result<String, Unmapped> {
        let mut args = Vec::with_capacity(params.len() + 1);
        for param in params {
            let mapped = self
                .map(param, TypeRole::Interop)
                .map_err(|_| Unmapped::new(ty))?;
            args.push(mapped.text);
        }
        let result = self
            .map(result, TypeRole::Interop)
            .map_err(|_| Unmapped::new(ty))?;
        args.push(result.text);
        Ok(format!("delegate* unmanaged<{}>", args.join(", ")))
    }
}

fn primitive(prim: Primitive) -> TargetType {
    TargetType {
        text: prim.cs_name().to_string(),
        marshal: (prim == Primitive::Bool).then_some(Marshal::Bool),
    }
}

fn by_reference(keyword: &str, target: &str, role: TypeRole) -> TargetType {
    match role {
        TypeRole::Surface => TargetType::plain(format!("{keyword} {target}")),
        TypeRole::Interop | TypeRole::Field => TargetType::plain(format!("{target}*")),
    }
}

#[cfg(test)]
#[path = "tests/mapper_tests.rs"]
mod mapper_tests;
