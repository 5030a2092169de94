/* Generate command - write the Clang header for a module manifest */

use super::common::{effective_bridging_header, load_module_graph};
use crate::codegen::clang::print_as_clang_header;
use crate::codegen::clang_gen::GraphDeclarationPrinter;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/* Render the header described by a manifest */
pub fn generate_header(
    manifest_path: &Path,
    bridging_header: Option<String>,
    expose_public_decls: bool,
) -> anyhow::Result<String> {
    let loaded = load_module_graph(manifest_path)?;
    let bridging_header = effective_bridging_header(bridging_header, &loaded);
    let graph = &loaded.graph;
    let printer = GraphDeclarationPrinter::new(graph);

    let mut header = String::new();
    print_as_clang_header(
        &mut header,
        graph,
        &printer,
        graph.main_module(),
        bridging_header.as_deref(),
        expose_public_decls,
    )
    .context("Failed to format header")?;
    Ok(header)
}

/* Execute the generate command */
pub fn run(
    manifest_path: PathBuf,
    bridging_header: Option<String>,
    expose_public_decls: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let header = generate_header(&manifest_path, bridging_header, expose_public_decls)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, &header)
                .with_context(|| format!("Failed to write header to {}", path.display()))?;
            info!(path = %path.display(), bytes = header.len(), "wrote header");
        }
        None => print!("{}", header),
    }
    Ok(())
}
