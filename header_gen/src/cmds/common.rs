/* Shared helpers for the header commands */

use anyhow::Context;
use header_loader::{load_manifest, LoadedManifest, ManifestResolver};
use std::path::Path;
use tracing::info;

/* Load a manifest and resolve it into a module graph */
pub fn load_module_graph(manifest_path: &Path) -> anyhow::Result<LoadedManifest> {
    let manifest = load_manifest(manifest_path)?;
    let loaded = ManifestResolver::resolve(&manifest)
        .with_context(|| format!("Failed to resolve manifest {}", manifest_path.display()))?;
    info!(
        manifest = %manifest_path.display(),
        module = %manifest.module.name,
        "loaded module manifest"
    );
    Ok(loaded)
}

/* A bridging header given on the command line wins over the manifest's */
pub fn effective_bridging_header(
    command_line: Option<String>,
    loaded: &LoadedManifest,
) -> Option<String> {
    command_line.or_else(|| loaded.bridging_header.clone())
}
