use csbind_common::to_pascal_case;
use csbind_ir::ir::ConstsDecl;

use super::BindingEmitter;

impl<'a> BindingEmitter<'a> {
    /// Constants are always `int`; values are copied verbatim.
    pub(super) fn emit_consts(&mut self, decl: &ConstsDecl) {
        for item in &decl.items {
            let name = to_pascal_case(&item.name, &self.ir.prefix);
            self.writer
                .line(&format!("public const int {name} = {};", item.value.as_str()));
        }
    }
}
