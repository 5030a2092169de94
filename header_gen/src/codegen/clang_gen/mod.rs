pub mod conditional;
pub mod contents;
pub mod context;
pub mod imports;
pub mod macros;
pub mod prologue;

// Re-export main public functions
pub use conditional::{
    emit_conditional, emit_cxx_conditional, emit_cxx_conditional_else, emit_objc_conditional,
    emit_objc_conditional_else, LanguageTag,
};
pub use contents::{default_toolchain_version, GraphDeclarationPrinter};
pub use context::{DeclarationPrinter, ModuleContext};
pub use imports::{
    compare_import_modules, plan_imports, write_import_plan, write_imports, ImportKind, ImportPlan, ImportSet,
    ModuleImport, UnderlyingInclude,
};
pub use macros::{emit_macro, emit_macros, MacroDef, MacroForm, CLANG_MACROS};
pub use prologue::{
    compute_macro_guard, write_epilogue, write_post_import_prologue, write_prologue,
};
