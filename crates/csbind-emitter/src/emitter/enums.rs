use csbind_common::names::{is_force_width_sentinel, to_enum_item_name};
use csbind_ir::ir::EnumDecl;

use super::BindingEmitter;

impl<'a> BindingEmitter<'a> {
    pub(super) fn emit_enum(&mut self, decl: &EnumDecl) {
        let name = self.mapper().type_name(&decl.name);
        self.writer.line(&format!("public enum {name}"));
        self.writer.line("{");
        self.writer.increase_indent();
        for item in &decl.items {
            let item_name = to_enum_item_name(&item.name, &decl.name);
            if is_force_width_sentinel(&item_name) {
                continue;
            }
            match &item.value {
                Some(value) => self
                    .writer
                    .line(&format!("{item_name} = {},", value.as_str())),
                None => self.writer.line(&format!("{item_name},")),
            }
        }
        self.writer.decrease_indent();
        self.writer.line("}");
    }
}
