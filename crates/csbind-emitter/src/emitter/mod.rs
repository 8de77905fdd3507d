//! Declaration Emitters
//!
//! One `BindingEmitter` exists per generated module. It owns the type
//! registry, the output buffer and the placeholder list, so nothing leaks
//! between two generations.
//!
//! Emission is split by declaration kind:
//! - `structs.rs`: value-type structs, inline array collections
//! - `enums.rs`: enums (width sentinel dropped)
//! - `consts.rs`: integer constants
//! - `functions.rs`: raw and idiomatic `[DllImport]` declarations
//!
//! A member whose C type has no mapping is never guessed at: it becomes a
//! `// FIXME:` line in the output and a [`Placeholder`] for the caller.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use csbind_common::BindingConfig;
use csbind_ir::ir::{Decl, StructDecl};
use csbind_ir::{CType, IrModule, TypeKind, TypeRegistry};

use crate::mapper::{TypeMapper, Unmapped};
use crate::source_writer::SourceWriter;

mod consts;
mod enums;
mod functions;
mod structs;

/// A member emitted as a FIXME marker instead of a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    /// C name of the owning struct or function.
    pub owner: String,
    /// C name of the field or parameter, `RESULT` for a function result.
    pub member: String,
    /// The C type that could not be mapped.
    pub c_type: String,
}

pub struct BindingEmitter<'a> {
    ir: &'a IrModule,
    config: &'a BindingConfig,
    registry: TypeRegistry,
    /// Structs holding reference-type data; never addressed by pointer.
    managed: FxHashSet<String>,
    writer: SourceWriter,
    placeholders: Vec<Placeholder>,
}

impl<'a> BindingEmitter<'a> {
    pub fn new(ir: &'a IrModule, config: &'a BindingConfig) -> Self {
        let registry = TypeRegistry::new(ir, &config.overrides);
        let managed = managed_structs(ir, config, &registry);
        BindingEmitter {
            ir,
            config,
            registry,
            managed,
            writer: SourceWriter::with_capacity(ir.decls.len() * 256),
            placeholders: Vec::new(),
        }
    }

    pub fn writer_mut(&mut self) -> &mut SourceWriter {
        &mut self.writer
    }

    pub fn finish(self) -> (String, Vec<Placeholder>) {
        (self.writer.finish(), self.placeholders)
    }

    /// Emit one non-dependency declaration.
    pub fn emit_decl(&mut self, decl: &Decl) {
        debug!(kind = decl.kind_name(), name = decl.name(), "emit declaration");
        self.emit_comment(decl.comment());
        match decl {
            Decl::Struct(decl) => self.emit_struct(decl),
            Decl::Enum(decl) => self.emit_enum(decl),
            Decl::Consts(decl) => self.emit_consts(decl),
            Decl::Func(decl) => self.emit_func(decl),
        }
    }

    // =========================================================================
    // Shared helpers for the per-kind emitters
    // =========================================================================

    pub(super) fn mapper(&self) -> TypeMapper<'_> {
        TypeMapper::new(
            &self.registry,
            &self.managed,
            &self.ir.prefix,
            &self.ir.dep_prefixes,
        )
    }

    /// The C type of `owner.member` after type overrides.
    pub(super) fn resolve_member_type(&self, owner: &str, member: &str, raw: &str) -> CType {
        resolve_member_type(self.config, owner, member, raw)
    }

    pub(super) fn record_placeholder(&mut self, owner: &str, member: &str, unmapped: Unmapped) {
        warn!(
            module = %self.ir.module,
            owner,
            member,
            c_type = %unmapped.c_type,
            "no C# mapping, emitting placeholder"
        );
        self.placeholders.push(Placeholder {
            owner: owner.to_string(),
            member: member.to_string(),
            c_type: unmapped.c_type,
        });
    }

    fn emit_comment(&mut self, comment: Option<&str>) {
        let Some(comment) = comment else {
            return;
        };
        for line in comment.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.writer.line("//");
            } else {
                self.writer.line(&format!("// {line}"));
            }
        }
    }
}

fn resolve_member_type(config: &BindingConfig, owner: &str, member: &str, raw: &str) -> CType {
    let text = config
        .overrides
        .member_type(owner, member)
        .unwrap_or(raw);
    CType::parse(text)
}

/// Structs that contain a marshaled string, directly or through a by-value
/// struct field. Grown to a fixed point since fields may name structs
/// declared later.
fn managed_structs(
    ir: &IrModule,
    config: &BindingConfig,
    registry: &TypeRegistry,
) -> FxHashSet<String> {
    let structs: Vec<&StructDecl> = ir
        .decls
        .iter()
        .filter_map(|decl| match decl {
            Decl::Struct(decl) => Some(decl),
            _ => None,
        })
        .collect();

    let mut managed = FxHashSet::default();
    loop {
        let mut changed = false;
        for decl in &structs {
            if managed.contains(&decl.name) {
                continue;
            }
            let is_managed = decl.fields.iter().any(|field| {
                let ty = resolve_member_type(config, &decl.name, &field.name, &field.ty);
                match registry.classify(&ty) {
                    TypeKind::StringPtr => true,
                    TypeKind::Struct(name) => managed.contains(name),
                    _ => false,
                }
            });
            if is_managed {
                managed.insert(decl.name.clone());
                changed = true;
            }
        }
        if !changed {
            return managed;
        }
    }
}

#[cfg(test)]
#[path = "../tests/emitter_tests.rs"]
mod emitter_tests;
