/* Clang Header Generation Tests
 *
 * These tests drive the whole pipeline from inline YAML manifests and check
 * the structure of the generated header: include guard, import block,
 * language conditionals and the placement of declaration bodies.
 */

use header_gen::cmds;
use header_gen::codegen::clang::print_as_clang_header;
use header_gen::codegen::clang_gen::{
    plan_imports, DeclarationPrinter, GraphDeclarationPrinter, ImportKind, ImportSet, ModuleContext,
};
use header_loader::header_types::{ForeignModuleId, ImportModule, ModuleGraph, ModuleId};
use header_loader::{ManifestFile, ManifestResolver};
use std::fs;

/* Helper to resolve a module graph from manifest YAML */
fn graph_from_yaml(yaml: &str) -> ModuleGraph {
    let manifest = ManifestFile::from_yaml_str(yaml).expect("manifest should parse");
    ManifestResolver::resolve(&manifest)
        .expect("manifest should resolve")
        .graph
}

/* Helper to generate a header straight from manifest YAML */
fn generate(yaml: &str, bridging_header: Option<&str>, expose_public_decls: bool) -> String {
    let graph = graph_from_yaml(yaml);
    let printer = GraphDeclarationPrinter::new(&graph);
    let mut header = String::new();
    print_as_clang_header(
        &mut header,
        &graph,
        &printer,
        graph.main_module(),
        bridging_header,
        expose_public_decls,
    )
    .unwrap();
    header
}

/* Check that every `#else`/`#endif` closes an open conditional and that all
   conditionals are closed at the end */
fn assert_balanced(header: &str) {
    let mut depth: i64 = 0;
    for (number, line) in header.lines().enumerate() {
        let Some(rest) = line.trim_start().strip_prefix('#') else {
            continue;
        };
        let directive: String = rest
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();
        match directive.as_str() {
            "if" | "ifdef" | "ifndef" => depth += 1,
            "else" | "elif" => assert!(depth > 0, "dangling #{} on line {}", directive, number + 1),
            "endif" => {
                depth -= 1;
                assert!(depth >= 0, "unmatched #endif on line {}", number + 1);
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "unclosed conditionals");
}

/* The `@import` lines and the underlying include, in document order */
fn import_lines(header: &str) -> Vec<&str> {
    header
        .lines()
        .filter(|line| line.starts_with("@import ") || line.starts_with("#import "))
        .collect()
}

fn position(header: &str, needle: &str) -> usize {
    header
        .find(needle)
        .unwrap_or_else(|| panic!("missing {:?} in header:\n{}", needle, header))
}

const FOO_MANIFEST: &str = r#"
module:
  name: Foo
toolchain-version: "Test toolchain 1.0"
modules:
  - name: Bar
  - name: Foo
    id: foo-clang
objc-declarations:
  - text: |
      SWIFT_CLASS("_TtC3Foo6Widget")
      @interface Widget : Gadget
      @end
    uses: [Bar, foo-clang, Baz.Sub, Foo]
cxx-declarations:
  - text: "namespace Foo { class Widget; }"
    uses: [Bar]
"#;

#[test]
fn test_underlying_module_example() {
    let header = generate(FOO_MANIFEST, None, false);

    assert_eq!(
        import_lines(&header),
        vec!["@import Bar;", "@import Baz.Sub;", "#import <Foo/Foo.h>"]
    );
    assert!(!header.contains("@import Foo;"));
    assert_eq!(header.matches("#import <Foo/Foo.h>").count(), 1);
}

#[test]
fn test_header_structure() {
    let header = generate(FOO_MANIFEST, None, true);
    assert_balanced(&header);

    assert!(header.starts_with(
        "// Generated by Test toolchain 1.0\n#ifndef FOO_SWIFT_H\n#define FOO_SWIFT_H\n"
    ));
    assert!(header.ends_with(
        "#if __has_attribute(external_source_symbol)\n\
         # pragma clang attribute pop\n\
         #endif\n\
         #pragma clang diagnostic pop\n\
         #endif\n"
    ));

    /* Imports sit inside an Objective-C block, after the prologue macros */
    let imports = position(&header, "#if defined(__OBJC__)\n#if __has_feature(modules)\n");
    assert!(position(&header, "define SWIFT_INLINE_THUNK") < imports);
    assert!(imports < position(&header, "-Wproperty-attribute-mismatch"));
    assert!(position(&header, "#import <Foo/Foo.h>") < position(&header, "-Wproperty-attribute-mismatch"));
}

#[test]
fn test_objc_body_precedes_cxx_body() {
    let header = generate(FOO_MANIFEST, None, true);

    let objc_body = position(&header, "@interface Widget : Gadget");
    let cxx_body = position(&header, "namespace Foo { class Widget; }");
    assert!(position(&header, "defined_in=\"Foo\"") < objc_body);
    assert!(objc_body < cxx_body);
    assert!(
        header.contains("#if defined(__cplusplus)\nnamespace Foo { class Widget; }\n\n#endif\n")
    );
    assert!(header.contains("#if defined(__OBJC__)\nSWIFT_CLASS(\"_TtC3Foo6Widget\")\n"));
}

#[test]
fn test_hidden_cxx_declarations_leave_empty_block() {
    let header = generate(FOO_MANIFEST, None, false);

    assert!(!header.contains("namespace Foo"));
    assert!(header.contains(
        "#if defined(__cplusplus)\n#endif\n#if __has_attribute(external_source_symbol)\n# pragma clang attribute pop\n"
    ));
    assert_balanced(&header);
}

#[test]
fn test_bridging_header_include() {
    let yaml = r#"
module:
  name: App
imported-header-module: objc-header
modules:
  - name: __ObjC
    id: objc-header
  - name: UIKit
objc-declarations:
  - text: "@interface AppDelegate : UIResponder\n@end"
    uses: [objc-header, UIKit]
"#;
    let header = generate(yaml, Some("App-Bridging-Header.h"), false);

    assert_eq!(
        import_lines(&header),
        vec!["@import UIKit;", "#import \"App-Bridging-Header.h\""]
    );
    assert!(!header.contains("@import __ObjC;"));
    assert!(!header.contains("<App/App.h>"));
    assert_balanced(&header);
}

#[test]
fn test_imported_header_module_without_bridging_header() {
    let yaml = r#"
module:
  name: App
imported-header-module: objc-header
modules:
  - name: __ObjC
    id: objc-header
objc-declarations:
  - text: "@class Legacy;"
    uses: [objc-header]
"#;
    /* Without a bridging header the imported header module is an ordinary import */
    let header = generate(yaml, None, false);
    assert_eq!(import_lines(&header), vec!["@import __ObjC;"]);
}

#[test]
fn test_same_named_modules_are_imported_once() {
    let yaml = r#"
module:
  name: App
modules:
  - name: Dispatch
    id: dispatch-overlay
  - name: Dispatch
    id: dispatch-native
  - name: Foundation
objc-declarations:
  - text: "@class Queue;"
    uses: [dispatch-native, Foundation]
  - text: "@class Group;"
    uses: [dispatch-overlay]
"#;
    let header = generate(yaml, None, false);
    assert_eq!(header.matches("@import Dispatch;").count(), 1);
    assert_eq!(
        import_lines(&header),
        vec!["@import Dispatch;", "@import Foundation;"]
    );
}

#[test]
fn test_import_order_is_independent_of_insertion_order() {
    let orders = [
        "[Foundation, Darwin.C.stdio, Darwin.C, Foundation.NSString, CoreGraphics, foo-clang]",
        "[foo-clang, Foundation.NSString, CoreGraphics, Darwin.C, Foundation, Darwin.C.stdio]",
        "[Darwin.C.stdio, CoreGraphics, foo-clang, Foundation, Darwin.C, Foundation.NSString]",
    ];
    let headers: Vec<String> = orders
        .iter()
        .map(|uses| {
            let yaml = format!(
                r#"
module:
  name: Foo
toolchain-version: "Test toolchain 1.0"
modules:
  - name: Foundation
  - name: CoreGraphics
  - name: Foo
    id: foo-clang
objc-declarations:
  - text: "@class Thing;"
    uses: {}
"#,
                uses
            );
            generate(&yaml, None, false)
        })
        .collect();

    assert_eq!(headers[0], headers[1]);
    assert_eq!(headers[1], headers[2]);
    assert_eq!(
        import_lines(&headers[0]),
        vec![
            "@import CoreGraphics;",
            "@import Darwin.C;",
            "@import Darwin.C.stdio;",
            "@import Foundation;",
            "@import Foundation.NSString;",
            "#import <Foo/Foo.h>",
        ]
    );
}

#[test]
fn test_source_symbol_attribute_uses_module_name() {
    let yaml = r#"
module:
  name: FooCore
  exported-name: Foo
"#;
    let header = generate(yaml, None, false);
    assert!(header.contains("#ifndef FOOCORE_SWIFT_H\n"));
    assert!(header.contains("defined_in=\"FooCore\",generated_declaration"));
    assert!(!header.contains("defined_in=\"Foo\""));
    assert!(import_lines(&header).is_empty());
    assert_balanced(&header);
}

/* Collaborators supplied by a caller instead of a manifest */
struct FixedContext {
    graph: ModuleGraph,
}

impl ModuleContext for FixedContext {
    fn module_name(&self, module: ModuleId) -> &str {
        &self.graph.module(module).name
    }

    fn exported_module_name(&self, module: ModuleId) -> &str {
        self.module_name(module)
    }

    fn foreign_module_path(&self, module: ForeignModuleId) -> Vec<&str> {
        self.graph.foreign_full_path(module)
    }

    fn imported_header_module(&self) -> Option<ModuleId> {
        None
    }

    fn toolchain_version(&self) -> String {
        "Fixed toolchain".to_string()
    }
}

struct RecordingPrinter {
    objc_uses: Vec<ImportModule>,
    cxx_uses: Vec<ImportModule>,
}

impl DeclarationPrinter for RecordingPrinter {
    fn print_objc_contents(&self, out: &mut String, imports: &mut ImportSet, _module: ModuleId) {
        out.push_str("// objc contents\n");
        imports.extend(self.objc_uses.iter().copied());
    }

    fn print_cxx_contents(&self, out: &mut String, imports: &mut ImportSet, _module: ModuleId) {
        out.push_str("// cxx contents\n");
        imports.extend(self.cxx_uses.iter().copied());
    }
}

#[test]
fn test_custom_collaborators() {
    let graph = graph_from_yaml(
        r#"
module:
  name: Kit
modules:
  - name: Alpha
  - name: Omega
"#,
    );
    let alpha = graph.modules().find(|(_, m)| m.name == "Alpha").unwrap().0;
    let omega = graph.modules().find(|(_, m)| m.name == "Omega").unwrap().0;
    let main = graph.main_module();
    let ctx = FixedContext { graph };
    let printer = RecordingPrinter {
        objc_uses: vec![ImportModule::Host(omega)],
        cxx_uses: vec![ImportModule::Host(alpha)],
    };

    let mut header = String::new();
    print_as_clang_header(&mut header, &ctx, &printer, main, None, true).unwrap();

    assert!(header.starts_with("// Generated by Fixed toolchain\n#ifndef KIT_SWIFT_H\n"));
    /* Only the Objective-C contents contribute imports */
    assert_eq!(import_lines(&header), vec!["@import Omega;"]);
    assert!(position(&header, "// objc contents") < position(&header, "// cxx contents"));
    assert_balanced(&header);
}

#[test]
fn test_generate_command_writes_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let manifest_path = temp_dir.path().join("Foo.yaml");
    fs::write(&manifest_path, FOO_MANIFEST).unwrap();
    let output = temp_dir.path().join("include").join("Foo-Swift.h");

    cmds::generate::run(
        manifest_path.clone(),
        Some("Foo-Bridging-Header.h".to_string()),
        false,
        Some(output.clone()),
    )
    .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let expected = cmds::generate::generate_header(
        &manifest_path,
        Some("Foo-Bridging-Header.h".to_string()),
        false,
    )
    .unwrap();
    assert_eq!(written, expected);
    /* No imported header module in this manifest, so nothing is underlying */
    assert_eq!(import_lines(&written), vec!["@import Bar;", "@import Baz.Sub;"]);
}

#[test]
fn test_imports_command_plan() {
    let temp_dir = tempfile::tempdir().unwrap();
    let manifest_path = temp_dir.path().join("Foo.yaml");
    fs::write(&manifest_path, FOO_MANIFEST).unwrap();

    let plan = cmds::imports::collect_import_plan(&manifest_path, None).unwrap();
    assert_eq!(plan.imports.len(), 2);
    assert_eq!(plan.imports[1].kind, ImportKind::ForeignSubmodule);

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["imports"][0]["name"], "Bar");
    assert_eq!(json["imports"][1]["kind"], "foreign-submodule");
    assert_eq!(json["underlying"]["kind"], "framework");
    assert_eq!(json["underlying"]["module"], "Foo");
}

#[test]
fn test_plan_matches_manual_import_set() {
    let graph = graph_from_yaml(FOO_MANIFEST);
    let mut imports = ImportSet::new();
    let mut contents = String::new();
    GraphDeclarationPrinter::new(&graph).print_objc_contents(
        &mut contents,
        &mut imports,
        graph.main_module(),
    );
    assert_eq!(imports.len(), 4);

    let plan = plan_imports(&graph, &imports, graph.main_module(), None);
    let names: Vec<&str> = plan.imports.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Bar", "Baz.Sub"]);
}
