//! C# binding emitter for csbind.
//!
//! Turns one IR document into one C# source file:
//!
//! ```text
//! IrModule ──► TypeRegistry ──► BindingEmitter ──► GeneratedModule
//!                   │                 │
//!                   └── TypeMapper ◄──┘
//! ```
//!
//! - `source_writer`: the per-module output buffer
//! - `mapper`: C type -> C# type for the interop, surface and field roles
//! - `emitter`: struct/enum/consts/func declaration emitters
//! - `module`: the module driver (`generate_module`)

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod mapper;
pub use mapper::{FieldType, InlineArray, Marshal, TargetType, TypeMapper, TypeRole, Unmapped};

pub mod emitter;
pub use emitter::{BindingEmitter, Placeholder};

pub mod module;
pub use module::{GenerateError, GeneratedModule, generate_module};
