//! Type Registry
//!
//! The struct and enum names declared in one IR document. Bare identifiers
//! in C type strings can only be classified once the whole declaration list
//! has been registered, so the registry is built in one pass by its
//! constructor and is immutable afterwards.
//!
//! Ignored declarations are never emitted, so they are not registered
//! either: a reference to one classifies as unmapped instead of naming a
//! C# type that does not exist.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use csbind_common::Overrides;
use csbind_common::names::{is_force_width_sentinel, to_enum_item_name};

use crate::ir::{Decl, IrModule};

#[derive(Debug, Clone)]
pub struct TypeRegistry {
    structs: FxHashSet<String>,
    /// Enum name -> derived name of its default (first non-sentinel) item.
    enums: FxHashMap<String, Option<String>>,
}

impl TypeRegistry {
    /// Register every struct and enum of `ir` that is not ignored,
    /// dependency declarations included.
    pub fn new(ir: &IrModule, overrides: &Overrides) -> Self {
        let mut structs = FxHashSet::default();
        let mut enums = FxHashMap::default();

        for decl in &ir.decls {
            if overrides.is_ignored(decl.name()) {
                continue;
            }
            match decl {
                Decl::Struct(decl) => {
                    structs.insert(decl.name.clone());
                }
                Decl::Enum(decl) => {
                    let default_item = decl
                        .items
                        .iter()
                        .map(|item| to_enum_item_name(&item.name, &decl.name))
                        .find(|name| !is_force_width_sentinel(name));
                    enums.insert(decl.name.clone(), default_item);
                }
                Decl::Consts(_) | Decl::Func(_) => {}
            }
        }

        debug!(
            module = %ir.module,
            structs = structs.len(),
            enums = enums.len(),
            "type registry populated"
        );

        TypeRegistry { structs, enums }
    }

    pub fn is_struct(&self, name: &str) -> bool {
        self.structs.contains(name)
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    pub fn enum_default_item(&self, name: &str) -> Option<&str> {
        self.enums.get(name).and_then(|item| item.as_deref())
    }
}
