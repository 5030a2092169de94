use crate::error::LoadError;
use crate::file::ManifestFile;
use header_types::{
    Declaration, DeclarationDef, HostModule, ImportModule, ModuleDef, ModuleGraph, ModuleId,
    ModuleRef,
};
use std::collections::HashMap;
use tracing::{debug, trace};

/* A manifest turned into a module graph */
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub graph: ModuleGraph,
    pub bridging_header: Option<String>,
}

/* Resolver turning manifest entries into graph handles */
pub struct ManifestResolver {
    /* Graph being populated; the manifest's own module comes first */
    graph: ModuleGraph,

    /* Map from module key to its handle */
    keys: HashMap<String, ModuleId>,
}

impl ManifestResolver {
    /* Resolve every module and declaration of a manifest */
    pub fn resolve(manifest: &ManifestFile) -> Result<LoadedManifest, LoadError> {
        validate_module_def(&manifest.module)?;

        let mut resolver = ManifestResolver {
            graph: ModuleGraph::new(host_module_from_def(&manifest.module)),
            keys: HashMap::new(),
        };
        let main_module = resolver.graph.main_module();
        resolver
            .keys
            .insert(manifest.module.key().to_string(), main_module);

        for module_def in &manifest.modules {
            resolver.add_module(module_def)?;
        }

        if let Some(key) = &manifest.imported_header_module {
            let id = resolver
                .keys
                .get(key)
                .copied()
                .ok_or_else(|| LoadError::UnknownImportedHeaderModule(key.clone()))?;
            resolver.graph.set_imported_header_module(Some(id));
        }

        let objc_declarations =
            resolver.resolve_declarations(&manifest.objc_declarations, "objc declaration")?;
        let cxx_declarations =
            resolver.resolve_declarations(&manifest.cxx_declarations, "cxx declaration")?;

        let module = resolver.graph.module_mut(main_module);
        module.objc_declarations = objc_declarations;
        module.cxx_declarations = cxx_declarations;

        resolver
            .graph
            .set_toolchain_version(manifest.toolchain_version.clone());

        debug!(
            module = %manifest.module.name,
            modules = resolver.graph.module_count(),
            foreign_modules = resolver.graph.foreign_module_count(),
            "resolved manifest"
        );

        Ok(LoadedManifest {
            graph: resolver.graph,
            bridging_header: manifest.bridging_header.clone(),
        })
    }

    fn add_module(&mut self, module_def: &ModuleDef) -> Result<ModuleId, LoadError> {
        validate_module_def(module_def)?;
        let key = module_def.key();
        if self.keys.contains_key(key) {
            return Err(LoadError::DuplicateModuleKey(key.to_string()));
        }
        let id = self.graph.add_module(host_module_from_def(module_def));
        self.keys.insert(key.to_string(), id);
        trace!(key, name = %module_def.name, "registered module");
        Ok(id)
    }

    fn resolve_declarations(
        &mut self,
        defs: &[DeclarationDef],
        kind: &str,
    ) -> Result<Vec<Declaration>, LoadError> {
        let mut declarations = Vec::with_capacity(defs.len());
        for (index, def) in defs.iter().enumerate() {
            let context = format!("{} #{}", kind, index);
            let mut uses = Vec::with_capacity(def.uses.len());
            for raw in &def.uses {
                uses.push(self.resolve_reference(raw, &context)?);
            }
            declarations.push(Declaration {
                text: def.text.clone(),
                uses,
            });
        }
        Ok(declarations)
    }

    /* Resolve a `uses` entry to a host module or a foreign submodule */
    fn resolve_reference(&mut self, raw: &str, context: &str) -> Result<ImportModule, LoadError> {
        match ModuleRef::parse(raw) {
            ModuleRef::Key(key) => self
                .keys
                .get(key)
                .map(|id| ImportModule::Host(*id))
                .ok_or_else(|| LoadError::UnknownModule {
                    reference: key.to_string(),
                    context: context.to_string(),
                }),
            ModuleRef::ForeignPath(path) => {
                let segments: Vec<&str> = path.split('.').collect();
                if segments.iter().any(|segment| segment.is_empty()) {
                    return Err(LoadError::MalformedForeignPath(path.to_string()));
                }
                /* A dotted path has at least two segments, so this is always a submodule */
                self.graph
                    .intern_foreign_path(&segments)
                    .map(ImportModule::Foreign)
                    .ok_or_else(|| LoadError::MalformedForeignPath(path.to_string()))
            }
        }
    }
}

fn validate_module_def(module_def: &ModuleDef) -> Result<(), LoadError> {
    if module_def.name.is_empty() {
        return Err(LoadError::EmptyModuleName {
            key: module_def.key().to_string(),
        });
    }
    if !is_identifier(&module_def.name) {
        return Err(LoadError::InvalidModuleName(module_def.name.clone()));
    }
    let key = module_def.key();
    if key.is_empty() || key.contains('.') {
        return Err(LoadError::InvalidModuleKey(key.to_string()));
    }
    Ok(())
}

/* Host module names are printed verbatim in `@import` lines */
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

fn host_module_from_def(module_def: &ModuleDef) -> HostModule {
    let mut module = HostModule::new(module_def.name.clone());
    module.exported_name = module_def.exported_name.clone();
    module
}
