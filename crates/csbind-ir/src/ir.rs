//! IR Document Model
//!
//! The IR is produced by an external parser from a C header and consumed
//! here as JSON:
//!
//! ```json
//! {
//!   "module": "Shape",
//!   "prefix": "sshape_",
//!   "dep_prefixes": ["sg_"],
//!   "decls": [
//!     { "kind": "struct", "name": "sshape_range", "is_dep": false,
//!       "fields": [ { "name": "ptr", "type": "const void *" } ] },
//!     { "kind": "func", "name": "sshape_build", "is_dep": false,
//!       "type": "sshape_buffer (const sshape_buffer *)",
//!       "params": [ { "name": "buf", "type": "const sshape_buffer *" } ] }
//!   ]
//! }
//! ```
//!
//! Declarations keep input order; emission follows it exactly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrModule {
    pub module: String,
    pub prefix: String,
    #[serde(default)]
    pub dep_prefixes: Vec<String>,
    pub decls: Vec<Decl>,
}

impl IrModule {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Decl {
    Struct(StructDecl),
    Enum(EnumDecl),
    Consts(ConstsDecl),
    Func(FuncDecl),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Struct(decl) => &decl.name,
            Decl::Enum(decl) => &decl.name,
            Decl::Consts(decl) => &decl.name,
            Decl::Func(decl) => &decl.name,
        }
    }

    /// Declared by a dependency module; present only so this module can
    /// reference its types.
    pub fn is_dep(&self) -> bool {
        match self {
            Decl::Struct(decl) => decl.is_dep,
            Decl::Enum(decl) => decl.is_dep,
            Decl::Consts(decl) => decl.is_dep,
            Decl::Func(decl) => decl.is_dep,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            Decl::Struct(decl) => decl.comment.as_deref(),
            Decl::Enum(decl) => decl.comment.as_deref(),
            Decl::Consts(decl) => decl.comment.as_deref(),
            Decl::Func(decl) => decl.comment.as_deref(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Decl::Struct(_) => "struct",
            Decl::Enum(_) => "enum",
            Decl::Consts(_) => "consts",
            Decl::Func(_) => "func",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDecl {
    pub name: String,
    #[serde(default)]
    pub is_dep: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(default)]
    pub is_dep: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub items: Vec<EnumItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstsDecl {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_dep: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub items: Vec<ConstItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    #[serde(default)]
    pub is_dep: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Full C function type, e.g. `sg_buffer (const sg_buffer_desc *)`.
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub params: Vec<Param>,
}

impl FuncDecl {
    /// The C result type: everything before the parameter list.
    pub fn result_type(&self) -> &str {
        match self.ty.find('(') {
            Some(idx) => self.ty[..idx].trim(),
            None => self.ty.trim(),
        }
    }
}

/// A struct field or function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

pub type Param = Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ItemValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstItem {
    pub name: String,
    pub value: ItemValue,
}

/// Verbatim value text of an enum or constant item.
///
/// Header parsers emit either a JSON string (`"0x10"`, `"1<<3"`) or a plain
/// integer; both are kept as the text to copy into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemValue(pub String);

impl ItemValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ItemValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IntOrString {
            Int(i64),
            Uint(u64),
            String(String),
        }

        Ok(match IntOrString::deserialize(deserializer)? {
            IntOrString::Int(n) => ItemValue(n.to_string()),
            IntOrString::Uint(n) => ItemValue(n.to_string()),
            IntOrString::String(s) => ItemValue(s.trim().to_string()),
        })
    }
}

impl Serialize for ItemValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
#[path = "tests/ir_tests.rs"]
mod ir_tests;
