use super::imports::ImportSet;
use header_types::{ForeignModuleId, ModuleId};

/* Queries the header generator needs answered about the module graph */
pub trait ModuleContext {
    /* Name used for imports, includes and the include guard */
    fn module_name(&self, module: ModuleId) -> &str;

    /* Name clients see the module's declarations under */
    fn exported_module_name(&self, module: ModuleId) -> &str;

    /* Full name of a foreign module, root first */
    fn foreign_module_path(&self, module: ForeignModuleId) -> Vec<&str>;

    /* The module standing for the contents of the bridging header, if any */
    fn imported_header_module(&self) -> Option<ModuleId>;

    /* Text for the "Generated by" banner */
    fn toolchain_version(&self) -> String;
}

/* Renders a module's exported declarations.

   Printing is also how imports are discovered: every module referenced by the
   printed text must be added to `imports`. */
pub trait DeclarationPrinter {
    /* Declarations visible to Objective-C */
    fn print_objc_contents(&self, out: &mut String, imports: &mut ImportSet, module: ModuleId);

    /* Declarations visible to C++ */
    fn print_cxx_contents(&self, out: &mut String, imports: &mut ImportSet, module: ModuleId);
}
