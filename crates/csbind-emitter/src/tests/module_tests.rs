use super::*;

const TIME_IR: &str = r#"{
    "module": "Time",
    "prefix": "stm_",
    "decls": [
        { "kind": "func", "name": "stm_setup", "type": "void (void)", "params": [] },
        { "kind": "func", "name": "stm_now", "type": "uint64_t (void)", "params": [] }
    ]
}"#;

fn time_module() -> GeneratedModule {
    let ir = IrModule::from_json(TIME_IR).unwrap();
    generate_module(&ir, &BindingConfig::default()).unwrap()
}

#[test]
fn test_full_module_layout() {
    let module = time_module();
    let expected = "\
// machine generated, do not edit
using System;
using System.Runtime.InteropServices;
using M = System.Runtime.InteropServices.MarshalAsAttribute;
using U = System.Runtime.InteropServices.UnmanagedType;

namespace Sokol
{
public static unsafe partial class Time
{
[DllImport(\"sokol\", EntryPoint = \"stm_setup\")]
public static extern void stm_setup();

[DllImport(\"sokol\", EntryPoint = \"stm_setup\")]
public static extern void Setup();

[DllImport(\"sokol\", EntryPoint = \"stm_now\")]
public static extern ulong stm_now();

[DllImport(\"sokol\", EntryPoint = \"stm_now\")]
public static extern ulong Now();
}
}
";
    assert_eq!(module.text, expected);
    assert_eq!(module.name, "Time");
    assert_eq!(module.file_name(), "Time.cs");
    assert!(module.placeholders.is_empty());
}

#[test]
fn test_generation_is_idempotent() {
    assert_eq!(time_module(), time_module());
}

#[test]
fn test_empty_module() {
    let ir = IrModule::from_json(r#"{ "module": "Audio", "prefix": "saudio_", "decls": [] }"#)
        .unwrap();
    let module = generate_module(&ir, &BindingConfig::default()).unwrap();
    assert!(
        module
            .text
            .ends_with("public static unsafe partial class Audio\n{\n}\n}\n")
    );
}

#[test]
fn test_dependency_import_and_qualified_types() {
    let ir = IrModule::from_json(
        r#"{
            "module": "Shape",
            "prefix": "sshape_",
            "dep_prefixes": ["sg_"],
            "decls": [
                { "kind": "struct", "name": "sg_range", "is_dep": true,
                  "fields": [ { "name": "ptr", "type": "const void *" } ] },
                { "kind": "struct", "name": "sshape_buffer_item_t",
                  "fields": [ { "name": "data", "type": "sg_range" } ] }
            ]
        }"#,
    )
    .unwrap();
    let module = generate_module(&ir, &BindingConfig::default()).unwrap();

    assert!(module.text.contains(
        "using U = System.Runtime.InteropServices.UnmanagedType;\n\nusing sg = Sokol.Gfx;\n\nnamespace Sokol\n"
    ));
    assert!(module.text.contains("    public sg.Range Data;\n"));
    // dependency declarations are never re-emitted
    assert!(!module.text.contains("public struct Range"));
}

#[test]
fn test_unknown_dependency_is_an_error() {
    let ir = IrModule::from_json(
        r#"{ "module": "Shape", "prefix": "sshape_", "dep_prefixes": ["zz_"], "decls": [] }"#,
    )
    .unwrap();
    let err = generate_module(&ir, &BindingConfig::default()).unwrap_err();
    assert_eq!(
        err,
        GenerateError::UnknownDependency {
            module: "Shape".to_string(),
            prefix: "zz_".to_string(),
        }
    );
    assert!(err.to_string().contains("'zz_'"));
}

#[test]
fn test_ignored_declarations_are_skipped() {
    let ir = IrModule::from_json(
        r#"{ "module": "Gfx", "prefix": "sg_", "decls": [
            { "kind": "func", "name": "sg_install_trace_hooks", "type": "void (void)", "params": [] },
            { "kind": "struct", "name": "sg_trace_hooks", "fields": [] },
            { "kind": "func", "name": "sg_shutdown", "type": "void (void)", "params": [] }
        ] }"#,
    )
    .unwrap();
    let module = generate_module(&ir, &BindingConfig::default()).unwrap();
    assert!(!module.text.contains("TraceHooks"));
    assert!(module.text.contains("public static extern void Shutdown();"));
    assert!(module.text.contains(
        "public static unsafe partial class Gfx\n{\n[DllImport(\"sokol\", EntryPoint = \"sg_shutdown\")]\n"
    ));
}

#[test]
fn test_references_to_ignored_types_become_placeholders() {
    let ir = IrModule::from_json(
        r#"{ "module": "Gfx", "prefix": "sg_", "decls": [
            { "kind": "struct", "name": "sg_trace_hooks", "fields": [] },
            { "kind": "struct", "name": "sg_desc", "fields": [
                { "name": "hooks", "type": "sg_trace_hooks" },
                { "name": "count", "type": "int" } ] },
            { "kind": "func", "name": "sg_set_hooks", "type": "void (const sg_trace_hooks *)",
              "params": [ { "name": "hooks", "type": "const sg_trace_hooks *" } ] }
        ] }"#,
    )
    .unwrap();
    let module = generate_module(&ir, &BindingConfig::default()).unwrap();
    assert!(!module.text.contains("TraceHooks"));
    assert!(module.text.contains("    // FIXME: Hooks: sg_trace_hooks;\n"));
    assert!(module.text.contains("    public int Count;\n"));
    assert!(module.text.contains("// FIXME: sg_set_hooks(hooks): const sg_trace_hooks *;\n"));
    let members: Vec<_> = module
        .placeholders
        .iter()
        .map(|p| (p.owner.as_str(), p.member.as_str()))
        .collect();
    assert_eq!(members, vec![("sg_desc", "hooks"), ("sg_set_hooks", "hooks")]);
}

#[test]
fn test_namespace_from_config() {
    let ir = IrModule::from_json(TIME_IR).unwrap();
    let mut config = BindingConfig::default();
    config.namespace = "Native".to_string();
    let module = generate_module(&ir, &config).unwrap();
    assert!(module.text.contains("namespace Native\n{\n"));
}

#[test]
fn test_placeholders_are_collected() {
    let ir = IrModule::from_json(
        r#"{ "module": "Gfx", "prefix": "sg_", "decls": [
            { "kind": "struct", "name": "sg_a", "fields": [ { "name": "x", "type": "float [2][2][2]" } ] },
            { "kind": "func", "name": "sg_b", "type": "void (sg_a *)",
              "params": [ { "name": "a", "type": "sg_a *" } ] }
        ] }"#,
    )
    .unwrap();
    let module = generate_module(&ir, &BindingConfig::default()).unwrap();
    let members: Vec<_> = module
        .placeholders
        .iter()
        .map(|p| format!("{}.{}", p.owner, p.member))
        .collect();
    assert_eq!(members, ["sg_a.x", "sg_b.a"]);
}
