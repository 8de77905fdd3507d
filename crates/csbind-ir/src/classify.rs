//! Type Classification
//!
//! Sorts a parsed C type into exactly one [`TypeKind`]. The checks run in a
//! fixed order and the first match wins:
//!
//! void, primitive, struct, enum, `void *`, `const void *`, `const char *`,
//! const struct pointer, primitive pointer, const primitive pointer,
//! function pointer, 1D array, 2D array.
//!
//! Anything else is [`TypeKind::Unmapped`]. There is no fallback to a
//! plausible type: a wrong guess here corrupts memory at the native boundary.

use crate::ctype::CType;
use crate::primitives::Primitive;
use crate::registry::TypeRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind<'t> {
    Void,
    Primitive(Primitive),
    Struct(&'t str),
    Enum(&'t str),
    VoidPtr,
    ConstVoidPtr,
    StringPtr,
    ConstStructPtr(&'t str),
    PrimPtr(Primitive),
    ConstPrimPtr(Primitive),
    FuncPtr {
        result: &'t CType,
        params: &'t [CType],
    },
    Array1D {
        element: &'t CType,
        len: usize,
    },
    Array2D {
        element: &'t CType,
        rows: usize,
        cols: usize,
    },
    Unmapped,
}

impl TypeRegistry {
    pub fn classify<'t>(&self, ty: &'t CType) -> TypeKind<'t> {
        match ty {
            CType::Named {
                name,
                is_const: false,
            } => self.classify_named(name),
            CType::Pointer { pointee } => self.classify_pointer(pointee),
            CType::FuncPtr { result, params } => TypeKind::FuncPtr { result, params },
            CType::Array { element, dims } => match dims.as_slice() {
                &[len] => TypeKind::Array1D { element, len },
                &[rows, cols] => TypeKind::Array2D {
                    element,
                    rows,
                    cols,
                },
                _ => TypeKind::Unmapped,
            },
            CType::Named { is_const: true, .. } | CType::Unparsed(_) => TypeKind::Unmapped,
        }
    }

    fn classify_named<'t>(&self, name: &'t str) -> TypeKind<'t> {
        if name == "void" {
            TypeKind::Void
        } else if let Some(prim) = Primitive::from_c(name) {
            TypeKind::Primitive(prim)
        } else if self.is_struct(name) {
            TypeKind::Struct(name)
        } else if self.is_enum(name) {
            TypeKind::Enum(name)
        } else {
            TypeKind::Unmapped
        }
    }

    fn classify_pointer<'t>(&self, pointee: &'t CType) -> TypeKind<'t> {
        let CType::Named { name, is_const } = pointee else {
            return TypeKind::Unmapped;
        };
        let name = name.as_str();

        match (name, *is_const) {
            ("void", false) => TypeKind::VoidPtr,
            ("void", true) => TypeKind::ConstVoidPtr,
            ("char", true) => TypeKind::StringPtr,
            (_, true) if self.is_struct(name) => TypeKind::ConstStructPtr(name),
            _ => match (Primitive::from_c(name), *is_const) {
                (Some(prim), false) => TypeKind::PrimPtr(prim),
                (Some(prim), true) => TypeKind::ConstPrimPtr(prim),
                (None, _) => TypeKind::Unmapped,
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod classify_tests;
