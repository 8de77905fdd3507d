use csbind_common::to_pascal_case;
use csbind_ir::Field;
use csbind_ir::ir::StructDecl;

use super::BindingEmitter;
use crate::mapper::{FieldType, InlineArray};

impl<'a> BindingEmitter<'a> {
    pub(super) fn emit_struct(&mut self, decl: &StructDecl) {
        let name = self.mapper().type_name(&decl.name);
        self.writer.line(&format!("public struct {name}"));
        self.writer.line("{");
        self.writer.increase_indent();
        for field in &decl.fields {
            self.emit_field(&decl.name, field);
        }
        self.writer.decrease_indent();
        self.writer.line("}");
    }

    fn emit_field(&mut self, owner: &str, field: &Field) {
        let name = to_pascal_case(&field.name, "");
        let ty = self.resolve_member_type(owner, &field.name, &field.ty);

        let mapped = self.mapper().map_field(&ty);
        match mapped {
            Ok(FieldType::Plain(target)) => {
                let attribute = target.attribute_prefix();
                self.writer
                    .line(&format!("{attribute}public {} {name};", target.text));
            }
            Ok(FieldType::InlineArray(array)) => self.emit_inline_array(&name, &array),
            Err(unmapped) => {
                self.writer
                    .line(&format!("// FIXME: {name}: {};", unmapped.c_type));
                self.record_placeholder(owner, &field.name, unmapped);
            }
        }
    }

    /// A nested struct with one private slot per element and a by-ref
    /// indexer over them, followed by the field itself.
    fn emit_inline_array(&mut self, name: &str, array: &InlineArray) {
        let element = &array.element;
        let (params, offset) = match array.cols {
            Some(cols) => ("int x, int y".to_string(), format!("(x * {cols}) + y")),
            None => ("int index".to_string(), "index".to_string()),
        };

        self.writer.line("#pragma warning disable 169");
        self.writer.line(&format!("public struct {name}Collection"));
        self.writer.line("{");
        self.writer.increase_indent();
        self.writer.line(&format!(
            "public ref {element} this[{params}] {{ get {{ fixed ({element}* p = &_item0) {{ return ref *(p + {offset}); }} }} }}"
        ));
        for i in 0..array.len() {
            self.writer.line(&format!("private {element} _item{i};"));
        }
        self.writer.decrease_indent();
        self.writer.line("}");
        self.writer.line("#pragma warning restore 169");
        self.writer
            .line(&format!("public {name}Collection {name};"));
    }
}
