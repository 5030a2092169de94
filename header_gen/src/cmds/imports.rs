/* Imports command - show how a module's imports are sorted and folded */

use super::common::{effective_bridging_header, load_module_graph};
use crate::codegen::clang_gen::{
    plan_imports, write_import_plan, DeclarationPrinter, GraphDeclarationPrinter, ImportPlan,
    ImportSet,
};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ImportsOutputFormat {
    /* The import block exactly as it appears in the header */
    Text,
    Json,
}

/* Collect the imports of a manifest's module the way header generation does */
pub fn collect_import_plan(
    manifest_path: &Path,
    bridging_header: Option<String>,
) -> anyhow::Result<ImportPlan> {
    let loaded = load_module_graph(manifest_path)?;
    let bridging_header = effective_bridging_header(bridging_header, &loaded);
    let graph = &loaded.graph;
    let module = graph.main_module();

    let mut imports = ImportSet::new();
    let mut objc_contents = String::new();
    GraphDeclarationPrinter::new(graph).print_objc_contents(&mut objc_contents, &mut imports, module);

    Ok(plan_imports(graph, &imports, module, bridging_header.as_deref()))
}

/* Execute the imports command */
pub fn run(
    manifest_path: PathBuf,
    bridging_header: Option<String>,
    format: ImportsOutputFormat,
) -> anyhow::Result<()> {
    let plan = collect_import_plan(&manifest_path, bridging_header)?;

    match format {
        ImportsOutputFormat::Text => {
            let mut out = String::new();
            write_import_plan(&mut out, &plan);
            print!("{}", out);
        }
        ImportsOutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }
    Ok(())
}
