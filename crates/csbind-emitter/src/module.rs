//! Module Driver
//!
//! Produces the complete C# file for one IR document:
//!
//! ```text
//! // machine generated, do not edit
//! using ...;                        fixed header
//! using sg = Sokol.Gfx;             one alias per dependency module
//! namespace Sokol
//! {
//! public static unsafe partial class Shape
//! {
//! ...                               declarations in input order
//! }
//! }
//! ```
//!
//! Every call starts from a fresh registry and buffer, so generating the
//! same IR twice yields byte-identical text.

use std::fmt;

use tracing::{debug, info, info_span};

use csbind_common::{BindingConfig, import_alias};
use csbind_ir::{Decl, IrModule};

use crate::emitter::{BindingEmitter, Placeholder};

const FILE_HEADER: &[&str] = &[
    "// machine generated, do not edit",
    "using System;",
    "using System.Runtime.InteropServices;",
    "using M = System.Runtime.InteropServices.MarshalAsAttribute;",
    "using U = System.Runtime.InteropServices.UnmanagedType;",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A dependency prefix with no configured module name.
    UnknownDependency { module: String, prefix: String },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnknownDependency { module, prefix } => write!(
                f,
                "module '{module}' depends on prefix '{prefix}', which has no module name"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub name: String,
    pub text: String,
    pub placeholders: Vec<Placeholder>,
}

impl GeneratedModule {
    pub fn file_name(&self) -> String {
        format!("{}.cs", self.name)
    }
}

pub fn generate_module(
    ir: &IrModule,
    config: &BindingConfig,
) -> Result<GeneratedModule, GenerateError> {
    let _span = info_span!("generate_module", module = %ir.module, prefix = %ir.prefix).entered();

    let imports = ir
        .dep_prefixes
        .iter()
        .map(|prefix| match config.module_name(prefix) {
            Some(name) => Ok(format!(
                "using {} = {}.{name};",
                import_alias(prefix),
                config.namespace
            )),
            None => Err(GenerateError::UnknownDependency {
                module: ir.module.clone(),
                prefix: prefix.clone(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut emitter = BindingEmitter::new(ir, config);

    let writer = emitter.writer_mut();
    for line in FILE_HEADER {
        writer.line(line);
    }
    writer.blank_line();
    if !imports.is_empty() {
        for import in &imports {
            writer.line(import);
        }
        writer.blank_line();
    }
    writer.line(&format!("namespace {}", config.namespace));
    writer.line("{");
    writer.line(&format!("public static unsafe partial class {}", ir.module));
    writer.line("{");

    let mut emitted = 0usize;
    for decl in &ir.decls {
        if decl.is_dep() {
            continue;
        }
        if !matches!(decl, Decl::Consts(_)) && config.overrides.is_ignored(decl.name()) {
            debug!(name = decl.name(), "ignored");
            continue;
        }
        if emitted > 0 {
            emitter.writer_mut().blank_line();
        }
        emitter.emit_decl(decl);
        emitted += 1;
    }

    let writer = emitter.writer_mut();
    writer.line("}");
    writer.line("}");

    let (text, placeholders) = emitter.finish();
    info!(
        declarations = emitted,
        placeholders = placeholders.len(),
        bytes = text.len(),
        "module generated"
    );

    Ok(GeneratedModule {
        name: ir.module.clone(),
        text,
        placeholders,
    })
}

#[cfg(test)]
#[path = "tests/module_tests.rs"]
mod module_tests;
