//! The fixed set of C primitive types.
//!
//! Every primitive maps to the C# type of exactly the same width and
//! signedness. `char` is an 8-bit byte on every supported ABI.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Int,
    Bool,
    Char,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    Uintptr,
    Intptr,
    Size,
}

impl Primitive {
    pub const ALL: [Primitive; 16] = [
        Primitive::Int,
        Primitive::Bool,
        Primitive::Char,
        Primitive::Int8,
        Primitive::Uint8,
        Primitive::Int16,
        Primitive::Uint16,
        Primitive::Int32,
        Primitive::Uint32,
        Primitive::Int64,
        Primitive::Uint64,
        Primitive::Float,
        Primitive::Double,
        Primitive::Uintptr,
        Primitive::Intptr,
        Primitive::Size,
    ];

    pub fn from_c(name: &str) -> Option<Self> {
        Some(match name {
            "int" => Primitive::Int,
            "bool" => Primitive::Bool,
            "char" => Primitive::Char,
            "int8_t" => Primitive::Int8,
            "uint8_t" => Primitive::Uint8,
            "int16_t" => Primitive::Int16,
            "uint16_t" => Primitive::Uint16,
            "int32_t" => Primitive::Int32,
            "uint32_t" => Primitive::Uint32,
            "int64_t" => Primitive::Int64,
            "uint64_t" => Primitive::Uint64,
            "float" => Primitive::Float,
            "double" => Primitive::Double,
            "uintptr_t" => Primitive::Uintptr,
            "intptr_t" => Primitive::Intptr,
            "size_t" => Primitive::Size,
            _ => return None,
        })
    }

    pub fn c_name(self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Bool => "bool",
            Primitive::Char => "char",
            Primitive::Int8 => "int8_t",
            Primitive::Uint8 => "uint8_t",
            Primitive::Int16 => "int16_t",
            Primitive::Uint16 => "uint16_t",
            Primitive::Int32 => "int32_t",
            Primitive::Uint32 => "uint32_t",
            Primitive::Int64 => "int64_t",
            Primitive::Uint64 => "uint64_t",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Uintptr => "uintptr_t",
            Primitive::Intptr => "intptr_t",
            Primitive::Size => "size_t",
        }
    }

    pub fn cs_name(self) -> &'static str {
        match self {
            Primitive::Int | Primitive::Int32 => "int",
            Primitive::Bool => "bool",
            Primitive::Char | Primitive::Uint8 => "byte",
            Primitive::Int8 => "sbyte",
            Primitive::Int16 => "short",
            Primitive::Uint16 => "ushort",
            Primitive::Uint32 => "uint",
            Primitive::Int64 => "long",
            Primitive::Uint64 => "ulong",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Uintptr | Primitive::Size => "nuint",
            Primitive::Intptr => "nint",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Primitive::Bool => "false",
            Primitive::Float => "0.0f",
            Primitive::Double => "0.0",
            _ => "0",
        }
    }
}
