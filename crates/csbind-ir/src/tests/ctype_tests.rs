use super::*;
use smallvec::smallvec;

fn named(name: &str, is_const: bool) -> CType {
    CType::Named {
        name: name.to_string(),
        is_const,
    }
}

fn ptr(pointee: CType) -> CType {
    CType::Pointer {
        pointee: Box::new(pointee),
    }
}

#[test]
fn parse_plain_names() {
    assert_eq!(CType::parse("int"), named("int", false));
    assert_eq!(CType::parse("  sg_desc "), named("sg_desc", false));
    assert!(CType::parse("void").is_void());
}

#[test]
fn parse_pointers() {
    assert_eq!(CType::parse("const char *"), ptr(named("char", true)));
    assert_eq!(CType::parse("void *"), ptr(named("void", false)));
    assert_eq!(CType::parse("void*"), ptr(named("void", false)));
    assert_eq!(CType::parse("char **"), ptr(ptr(named("char", false))));
}

#[test]
fn parse_arrays() {
    assert_eq!(
        CType::parse("float [4]"),
        CType::Array {
            element: Box::new(named("float", false)),
            dims: smallvec![4],
        }
    );
    assert_eq!(
        CType::parse("float [4][3]"),
        CType::Array {
            element: Box::new(named("float", false)),
            dims: smallvec![4, 3],
        }
    );
    assert_eq!(
        CType::parse("const void * [8]"),
        CType::Array {
            element: Box::new(ptr(named("void", true))),
            dims: smallvec![8],
        }
    );
}

#[test]
fn parse_function_pointers() {
    assert_eq!(
        CType::parse("void (*)(void)"),
        CType::FuncPtr {
            result: Box::new(named("void", false)),
            params: vec![],
        }
    );
    assert_eq!(
        CType::parse("void (*)(const sapp_event *, void *)"),
        CType::FuncPtr {
            result: Box::new(named("void", false)),
            params: vec![ptr(named("sapp_event", true)), ptr(named("void", false))],
        }
    );
}

#[test]
fn unsupported_syntax_is_unparsed() {
    for text in [
        "float []",
        "float [N]",
        "unsigned int",
        "const",
        "*",
        "void (*)(void (*)(void))",
        "struct { int x; }",
        "",
    ] {
        assert!(
            matches!(CType::parse(text), CType::Unparsed(_)),
            "{text:?} should be unparsed"
        );
    }
}

#[test]
fn display_uses_c_spelling() {
    for text in [
        "int",
        "const char *",
        "char **",
        "float [4][4]",
        "void (*)(void)",
        "void (*)(const sapp_event *, void *)",
    ] {
        assert_eq!(CType::parse(text).to_string(), text);
    }
}
