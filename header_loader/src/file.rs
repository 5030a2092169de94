use anyhow::Context;
use header_types::{DeclarationDef, ModuleDef};
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/* ============================================================================
   Manifest File Schema
   ============================================================================ */

/* Top-level manifest describing one module to generate a header for */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestFile {
    /* The module the header is generated for */
    pub module: ModuleDef,

    /* Text embedded in the "Generated by" banner */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolchain_version: Option<String>,

    /* Hand-written header folded in as the underlying module */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridging_header: Option<String>,

    /* Key of the module standing for the bridging header's contents */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported_header_module: Option<String>,

    /* Every other host module the declarations may refer to */
    #[serde(default)]
    pub modules: Vec<ModuleDef>,

    #[serde(default)]
    pub objc_declarations: Vec<DeclarationDef>,

    #[serde(default)]
    pub cxx_declarations: Vec<DeclarationDef>,
}

impl ManifestFile {
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        serde_yml::from_str(content).context("Failed to parse manifest YAML")
    }
}

/* Read and parse a manifest from disk */
pub fn load_manifest(path: &Path) -> anyhow::Result<ManifestFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    ManifestFile::from_yaml_str(&content)
        .with_context(|| format!("Invalid manifest {}", path.display()))
}
