//! Common types and utilities for the csbind binding generator.
//!
//! This crate provides the pieces shared by every other csbind crate:
//! - Identifier case conversion from C naming to C# naming (`names`)
//! - Maintainer-edited override tables (`overrides`)
//! - The binding configuration model and its built-in defaults (`config`)

// C identifier -> C# identifier conversion
pub mod names;
pub use names::{import_alias, to_enum_item_name, to_pascal_case, to_type_name};

// Name/type overrides and the ignore list
pub mod overrides;
pub use overrides::{Overrides, RESULT_MEMBER};

// Binding configuration (namespace, library, module names, overrides)
pub mod config;
pub use config::BindingConfig;
