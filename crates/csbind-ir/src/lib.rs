//! Declaration IR and C type analysis for csbind.
//!
//! - `ir`: the declaration list produced by the external header parser
//! - `primitives`: the fixed set of C primitive types and their C# spellings
//! - `ctype`: parsing raw C type strings into structured descriptors
//! - `registry`: struct/enum names known to one module generation
//! - `classify`: mapping a descriptor to the `TypeKind` that drives emission

pub mod ir;
pub use ir::{Decl, EnumItem, Field, IrModule, ItemValue, Param};

pub mod primitives;
pub use primitives::Primitive;

pub mod ctype;
pub use ctype::CType;

pub mod registry;
pub use registry::TypeRegistry;

pub mod classify;
pub use classify::TypeKind;
