//! Function emission.
//!
//! Every function gets two `[DllImport]` declarations bound to the same
//! entry point:
//!
//! ```text
//! [DllImport("sokol", EntryPoint = "sg_setup")]
//! public static extern void sg_setup(Desc* desc);          // raw, interop types
//!
//! [DllImport("sokol", EntryPoint = "sg_setup")]
//! public static extern void Setup(in Desc desc);           // idiomatic
//! ```
//!
//! The raw declaration is left out when only the idiomatic one can be
//! expressed (e.g. pointers to managed structs). When the idiomatic one
//! cannot be expressed either, the function becomes a single FIXME line.

use csbind_common::{RESULT_MEMBER, to_pascal_case};
use csbind_ir::ir::FuncDecl;

use super::BindingEmitter;
use crate::mapper::{TargetType, TypeRole, Unmapped};

struct Signature {
    result: TargetType,
    /// Mapped type and output name per parameter.
    params: Vec<(TargetType, String)>,
}

impl<'a> BindingEmitter<'a> {
    pub(super) fn emit_func(&mut self, decl: &FuncDecl) {
        let surface = match self.signature(decl, TypeRole::Surface) {
            Ok(signature) => signature,
            Err((member, unmapped)) => {
                self.writer.line(&format!(
                    "// FIXME: {}({member}): {};",
                    decl.name, unmapped.c_type
                ));
                self.record_placeholder(&decl.name, &member, unmapped);
                return;
            }
        };

        if let Ok(raw) = self.signature(decl, TypeRole::Interop) {
            self.emit_extern(&decl.name, &decl.name, &raw);
            self.writer.blank_line();
        }

        let overrides = &self.config.overrides;
        let name = to_pascal_case(overrides.rename(&decl.name), &self.ir.prefix);
        self.emit_extern(&decl.name, &name, &surface);
    }

    /// Map the result and every parameter, stopping at the first member
    /// without a mapping. The error names that member.
    fn signature(
        &self,
        decl: &FuncDecl,
        role: TypeRole,
    ) -> Result<Signature, (String, Unmapped)> {
        let mapper = self.mapper();
        let overrides = &self.config.overrides;

        let result_ty = self.resolve_member_type(&decl.name, RESULT_MEMBER, decl.result_type());
        let result = mapper
            .map_result(&result_ty, role)
            .map_err(|unmapped| (RESULT_MEMBER.to_string(), unmapped))?;

        let mut params = Vec::with_capacity(decl.params.len());
        for param in &decl.params {
            let ty = self.resolve_member_type(&decl.name, &param.name, &param.ty);
            let mapped = if ty.is_void() {
                Err(Unmapped {
                    c_type: ty.to_string(),
                })
            } else {
                mapper.map(&ty, role)
            };
            let mapped = mapped.map_err(|unmapped| (param.name.clone(), unmapped))?;
            params.push((mapped, overrides.rename(&param.name).to_string()));
        }

        Ok(Signature { result, params })
    }

    fn emit_extern(&mut self, entry_point: &str, name: &str, signature: &Signature) {
        let library = &self.config.library;
        self.writer.line(&format!(
            "[DllImport(\"{library}\", EntryPoint = \"{entry_point}\")]"
        ));
        if let Some(marshal) = signature.result.marshal {
            self.writer.line(&format!("[return:{}]", marshal.attribute()));
        }

        let params = signature
            .params
            .iter()
            .map(|(ty, name)| format!("{}{} {name}", ty.attribute_prefix(), ty.text))
            .collect::<Vec<_>>()
            .join(", ");
        self.writer.line(&format!(
            "public static extern {} {name}({params});",
            signature.result.text
        ));
    }
}
