use super::context::{DeclarationPrinter, ModuleContext};
use super::imports::ImportSet;
use header_types::{Declaration, ForeignModuleId, ModuleGraph, ModuleId};

/* Banner text used when a graph does not name its toolchain */
pub fn default_toolchain_version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl ModuleContext for ModuleGraph {
    fn module_name(&self, module: ModuleId) -> &str {
        &self.module(module).name
    }

    fn exported_module_name(&self, module: ModuleId) -> &str {
        self.module(module).exported_name()
    }

    fn foreign_module_path(&self, module: ForeignModuleId) -> Vec<&str> {
        self.foreign_full_path(module)
    }

    fn imported_header_module(&self) -> Option<ModuleId> {
        ModuleGraph::imported_header_module(self)
    }

    fn toolchain_version(&self) -> String {
        ModuleGraph::toolchain_version(self)
            .map(str::to_string)
            .unwrap_or_else(default_toolchain_version)
    }
}

/* Prints the pre-rendered declarations stored in a ModuleGraph */
pub struct GraphDeclarationPrinter<'a> {
    graph: &'a ModuleGraph,
}

impl<'a> GraphDeclarationPrinter<'a> {
    pub fn new(graph: &'a ModuleGraph) -> Self {
        Self { graph }
    }

    fn print_declarations(out: &mut String, imports: &mut ImportSet, declarations: &[Declaration]) {
        for declaration in declarations {
            out.push_str(&declaration.text);
            if !declaration.text.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
            imports.extend(declaration.uses.iter().copied());
        }
    }
}

impl DeclarationPrinter for GraphDeclarationPrinter<'_> {
    fn print_objc_contents(&self, out: &mut String, imports: &mut ImportSet, module: ModuleId) {
        Self::print_declarations(out, imports, &self.graph.module(module).objc_declarations);
    }

    fn print_cxx_contents(&self, out: &mut String, imports: &mut ImportSet, module: ModuleId) {
        Self::print_declarations(out, imports, &self.graph.module(module).cxx_declarations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use header_types::{HostModule, ImportModule};

    #[test]
    fn test_printer_records_uses() {
        let mut graph = ModuleGraph::new(HostModule::new("Foo"));
        let bar = graph.add_module(HostModule::new("Bar"));
        let main = graph.main_module();
        graph.module_mut(main).objc_declarations = vec![
            Declaration::new("@class Bar;").with_uses([ImportModule::Host(bar)]),
            Declaration::new("@interface Foo\n@end\n"),
        ];

        let printer = GraphDeclarationPrinter::new(&graph);
        let mut out = String::new();
        let mut imports = ImportSet::new();
        printer.print_objc_contents(&mut out, &mut imports, main);

        assert_eq!(out, "@class Bar;\n\n@interface Foo\n@end\n\n");
        assert_eq!(imports.len(), 1);
        assert!(imports.contains(bar));
    }

    #[test]
    fn test_toolchain_version_default() {
        let mut graph = ModuleGraph::new(HostModule::new("Foo"));
        assert!(ModuleContext::toolchain_version(&graph).starts_with("clang-header-gen "));
        graph.set_toolchain_version(Some("Test toolchain 1.0".to_string()));
        assert_eq!(ModuleContext::toolchain_version(&graph), "Test toolchain 1.0");
    }
}
