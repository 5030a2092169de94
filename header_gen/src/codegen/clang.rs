use crate::codegen::clang_gen::{
    compute_macro_guard, emit_cxx_conditional, emit_objc_conditional, write_epilogue, write_imports,
    write_post_import_prologue, write_prologue, DeclarationPrinter, ImportSet, ModuleContext,
};
use header_types::ModuleId;
use std::fmt;
use tracing::debug;

/* Sections of a generated header, in the order they are written */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSection {
    Prologue,
    Imports,
    PostImportPrologue,
    ObjcBody,
    CxxBody,
    Epilogue,
}

impl HeaderSection {
    pub const ORDER: [HeaderSection; 6] = [
        HeaderSection::Prologue,
        HeaderSection::Imports,
        HeaderSection::PostImportPrologue,
        HeaderSection::ObjcBody,
        HeaderSection::CxxBody,
        HeaderSection::Epilogue,
    ];
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClangHeaderOptions<'a> {
    /* Hand-written header to include in place of the underlying module */
    pub bridging_header: Option<&'a str>,
    /* Emit declarations that are only visible to C++ */
    pub expose_public_decls: bool,
}

pub struct ClangHeaderGenerator<'a, C: ?Sized, P: ?Sized> {
    ctx: &'a C,
    printer: &'a P,
    options: ClangHeaderOptions<'a>,
}

impl<'a, C, P> ClangHeaderGenerator<'a, C, P>
where
    C: ModuleContext + ?Sized,
    P: DeclarationPrinter + ?Sized,
{
    pub fn new(ctx: &'a C, printer: &'a P, options: ClangHeaderOptions<'a>) -> Self {
        Self {
            ctx,
            printer,
            options,
        }
    }

    /* Render the complete header for `module` */
    pub fn emit_header(&self, module: ModuleId) -> String {
        /* Printing the Objective-C contents is what discovers the imports, so it
           has to happen before anything else is written */
        let mut imports = ImportSet::new();
        let mut objc_contents = String::new();
        self.printer
            .print_objc_contents(&mut objc_contents, &mut imports, module);

        let module_name = self.ctx.module_name(module);
        let mut out = String::new();
        for section in HeaderSection::ORDER {
            debug!(module = module_name, ?section, "writing header section");
            match section {
                HeaderSection::Prologue => write_prologue(
                    &mut out,
                    &self.ctx.toolchain_version(),
                    &compute_macro_guard(module_name),
                ),
                HeaderSection::Imports => emit_objc_conditional(&mut out, |out| {
                    write_imports(out, self.ctx, &imports, module, self.options.bridging_header)
                }),
                HeaderSection::PostImportPrologue => {
                    write_post_import_prologue(&mut out, module_name)
                }
                HeaderSection::ObjcBody => {
                    emit_objc_conditional(&mut out, |out| out.push_str(&objc_contents))
                }
                HeaderSection::CxxBody => emit_cxx_conditional(&mut out, |out| {
                    if self.options.expose_public_decls {
                        out.push_str(&self.cxx_contents(module));
                    }
                }),
                HeaderSection::Epilogue => write_epilogue(&mut out),
            }
        }
        out
    }

    fn cxx_contents(&self, module: ModuleId) -> String {
        /* Imports found while printing C++ declarations are not emitted */
        let mut imports = ImportSet::new();
        let mut contents = String::new();
        self.printer
            .print_cxx_contents(&mut contents, &mut imports, module);
        contents
    }
}

/* Write the Clang-compatible header for `module` to `out`.

   Generation itself cannot fail; the result only reports errors from `out`. */
pub fn print_as_clang_header<C, P>(
    out: &mut dyn fmt::Write,
    ctx: &C,
    printer: &P,
    module: ModuleId,
    bridging_header: Option<&str>,
    expose_public_decls: bool,
) -> fmt::Result
where
    C: ModuleContext + ?Sized,
    P: DeclarationPrinter + ?Sized,
{
    let options = ClangHeaderOptions {
        bridging_header,
        expose_public_decls,
    };
    let header = ClangHeaderGenerator::new(ctx, printer, options).emit_header(module);
    out.write_str(&header)
}
