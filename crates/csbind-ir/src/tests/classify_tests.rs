use super::*;
use crate::ir::IrModule;
use csbind_common::Overrides;

fn registry() -> TypeRegistry {
    let ir = IrModule::from_json(
        r#"{
            "module": "Gfx",
            "prefix": "sg_",
            "decls": [
                { "kind": "struct", "name": "sg_desc", "fields": [] },
                { "kind": "struct", "name": "sg_color", "fields": [] },
                { "kind": "struct", "name": "sg_range", "is_dep": true, "fields": [] },
                { "kind": "enum", "name": "sg_backend",
                  "items": [ { "name": "_SG_BACKEND_DEFAULT" },
                             { "name": "SG_BACKEND_GLCORE33" } ] },
                { "kind": "enum", "name": "sg_action",
                  "items": [ { "name": "_SG_ACTION_FORCE_U32" },
                             { "name": "SG_ACTION_CLEAR" } ] }
            ]
        }"#,
    )
    .unwrap();
    TypeRegistry::new(&ir, &Overrides::builtin())
}

fn classify(text: &str) -> String {
    format!("{:?}", registry().classify(&CType::parse(text)))
}

#[test]
fn classify_void_and_primitives() {
    let registry = registry();
    assert_eq!(registry.classify(&CType::parse("void")), TypeKind::Void);
    for prim in Primitive::ALL {
        assert_eq!(
            registry.classify(&CType::parse(prim.c_name())),
            TypeKind::Primitive(prim)
        );
    }
}

#[test]
fn classify_registered_names() {
    let registry = registry();
    let desc = CType::parse("sg_desc");
    let range = CType::parse("sg_range");
    let backend = CType::parse("sg_backend");
    assert_eq!(registry.classify(&desc), TypeKind::Struct("sg_desc"));
    assert_eq!(registry.classify(&range), TypeKind::Struct("sg_range"));
    assert_eq!(registry.classify(&backend), TypeKind::Enum("sg_backend"));
}

#[test]
fn classify_unknown_name_is_unmapped() {
    assert_eq!(classify("sg_unknown"), "Unmapped");
    assert_eq!(classify("const int"), "Unmapped");
}

#[test]
fn classify_pointers() {
    assert_eq!(classify("void *"), "VoidPtr");
    assert_eq!(classify("const void *"), "ConstVoidPtr");
    assert_eq!(classify("const char *"), "StringPtr");
    assert_eq!(classify("const sg_desc *"), "ConstStructPtr(\"sg_desc\")");
    assert_eq!(classify("float *"), "PrimPtr(Float)");
    assert_eq!(classify("const float *"), "ConstPrimPtr(Float)");
    assert_eq!(classify("char *"), "PrimPtr(Char)");
}

#[test]
fn classify_unsupported_pointers_are_unmapped() {
    assert_eq!(classify("sg_desc *"), "Unmapped");
    assert_eq!(classify("const sg_backend *"), "Unmapped");
    assert_eq!(classify("char **"), "Unmapped");
    assert_eq!(classify("const unknown_t *"), "Unmapped");
}

#[test]
fn classify_function_pointer() {
    let registry = registry();
    let ty = CType::parse("void (*)(const sg_desc *, int)");
    let TypeKind::FuncPtr { result, params } = registry.classify(&ty) else {
        panic!("expected function pointer");
    };
    assert!(result.is_void());
    assert_eq!(params.len(), 2);
}

#[test]
fn classify_arrays() {
    let registry = registry();
    let one = CType::parse("sg_color [4]");
    let two = CType::parse("float [4][3]");
    let three = CType::parse("float [2][2][2]");

    assert!(matches!(
        registry.classify(&one),
        TypeKind::Array1D { len: 4, .. }
    ));
    assert!(matches!(
        registry.classify(&two),
        TypeKind::Array2D {
            rows: 4,
            cols: 3,
            ..
        }
    ));
    assert_eq!(registry.classify(&three), TypeKind::Unmapped);
}

#[test]
fn classify_unparsed_is_unmapped() {
    assert_eq!(classify("unsigned int"), "Unmapped");
    assert_eq!(classify("float []"), "Unmapped");
}

#[test]
fn registered_names_never_unmapped() {
    let registry = registry();
    for name in ["sg_desc", "sg_color", "sg_range", "sg_backend", "sg_action"] {
        let ty = CType::parse(name);
        assert_ne!(registry.classify(&ty), TypeKind::Unmapped, "{name}");
    }
}

#[test]
fn enum_default_item_skips_sentinel() {
    let registry = registry();
    assert_eq!(registry.enum_default_item("sg_backend"), Some("Default"));
    assert_eq!(registry.enum_default_item("sg_action"), Some("Clear"));
    assert_eq!(registry.enum_default_item("sg_desc"), None);
}

#[test]
fn ignored_declarations_are_not_registered() {
    let ir = IrModule::from_json(
        r#"{ "module": "Gfx", "prefix": "sg_", "decls": [
            { "kind": "struct", "name": "sg_trace_hooks", "fields": [] },
            { "kind": "enum", "name": "sg_hidden", "items": [ { "name": "SG_HIDDEN_A" } ] },
            { "kind": "struct", "name": "sg_desc", "fields": [] }
        ] }"#,
    )
    .unwrap();
    let mut overrides = Overrides::builtin();
    overrides.ignores.insert("sg_hidden".to_string());
    let registry = TypeRegistry::new(&ir, &overrides);

    assert!(!registry.is_struct("sg_trace_hooks"));
    assert!(!registry.is_enum("sg_hidden"));
    assert!(registry.is_struct("sg_desc"));
    for text in ["sg_trace_hooks", "const sg_trace_hooks *", "sg_hidden", "sg_trace_hooks [2]"] {
        let ty = CType::parse(text);
        let kind = registry.classify(&ty);
        let element_unmapped = match kind {
            TypeKind::Array1D { element, .. } => registry.classify(element) == TypeKind::Unmapped,
            other => other == TypeKind::Unmapped,
        };
        assert!(element_unmapped, "{text}");
    }
}
