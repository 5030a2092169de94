/* ============================================================================
   Module Identities
   ============================================================================ */

/* Handle of a host module inside a ModuleGraph. Two handles are equal only when
   they name the same module object, even if the modules share a name. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u32);

/* Handle of a foreign (native module system) module inside a ModuleGraph */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForeignModuleId(u32);

impl ModuleId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl ForeignModuleId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/* A module referenced from exported declarations.

   Top-level foreign modules are always represented through their host module
   wrapper, so `Foreign` only ever holds submodules. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportModule {
    Host(ModuleId),
    Foreign(ForeignModuleId),
}

impl From<ModuleId> for ImportModule {
    fn from(id: ModuleId) -> Self {
        ImportModule::Host(id)
    }
}

impl From<ForeignModuleId> for ImportModule {
    fn from(id: ForeignModuleId) -> Self {
        ImportModule::Foreign(id)
    }
}

/* ============================================================================
   Module Records
   ============================================================================ */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostModule {
    pub name: String,
    /* Name the module is exported as, when it differs from `name` */
    pub exported_name: Option<String>,
    pub objc_declarations: Vec<crate::Declaration>,
    pub cxx_declarations: Vec<crate::Declaration>,
}

impl HostModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported_name: None,
            objc_declarations: Vec::new(),
            cxx_declarations: Vec::new(),
        }
    }

    pub fn exported_name(&self) -> &str {
        self.exported_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignModule {
    pub name: String,
    pub parent: Option<ForeignModuleId>,
}

impl ForeignModule {
    pub fn is_submodule(&self) -> bool {
        self.parent.is_some()
    }
}

/* ============================================================================
   Module Graph
   ============================================================================ */

/* Arena owning every module known to one header generation run */
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    modules: Vec<HostModule>,
    foreign_modules: Vec<ForeignModule>,
    imported_header_module: Option<ModuleId>,
    toolchain_version: Option<String>,
}

impl ModuleGraph {
    /* Create a graph whose first module is the one headers get generated for */
    pub fn new(main_module: HostModule) -> Self {
        Self {
            modules: vec![main_module],
            foreign_modules: Vec::new(),
            imported_header_module: None,
            toolchain_version: None,
        }
    }

    pub fn main_module(&self) -> ModuleId {
        ModuleId(0)
    }

    pub fn add_module(&mut self, module: HostModule) -> ModuleId {
        let id = ModuleId(self.modules.len() as u32);
        self.modules.push(module);
        id
    }

    pub fn module(&self, id: ModuleId) -> &HostModule {
        &self.modules[id.index()]
    }

    pub fn module_mut(&mut self, id: ModuleId) -> &mut HostModule {
        &mut self.modules[id.index()]
    }

    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, &HostModule)> {
        self.modules
            .iter()
            .enumerate()
            .map(|(index, module)| (ModuleId(index as u32), module))
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn foreign_module(&self, id: ForeignModuleId) -> &ForeignModule {
        &self.foreign_modules[id.index()]
    }

    pub fn foreign_module_count(&self) -> usize {
        self.foreign_modules.len()
    }

    /* Find or create the foreign module at `path` (root first), creating every
       missing ancestor on the way. Equal paths always yield the same handle. */
    pub fn intern_foreign_path<S: AsRef<str>>(&mut self, path: &[S]) -> Option<ForeignModuleId> {
        let mut parent: Option<ForeignModuleId> = None;
        for segment in path {
            let segment = segment.as_ref();
            let existing = self
                .foreign_modules
                .iter()
                .position(|module| module.parent == parent && module.name == segment);
            let id = match existing {
                Some(index) => ForeignModuleId(index as u32),
                None => {
                    let id = ForeignModuleId(self.foreign_modules.len() as u32);
                    self.foreign_modules.push(ForeignModule {
                        name: segment.to_string(),
                        parent,
                    });
                    id
                }
            };
            parent = Some(id);
        }
        parent
    }

    /* Full name of a foreign module from its root down to itself */
    pub fn foreign_full_path(&self, id: ForeignModuleId) -> Vec<&str> {
        let mut reverse_path = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let module = self.foreign_module(id);
            reverse_path.push(module.name.as_str());
            current = module.parent;
        }
        reverse_path.reverse();
        reverse_path
    }

    pub fn imported_header_module(&self) -> Option<ModuleId> {
        self.imported_header_module
    }

    pub fn set_imported_header_module(&mut self, id: Option<ModuleId>) {
        self.imported_header_module = id;
    }

    pub fn toolchain_version(&self) -> Option<&str> {
        self.toolchain_version.as_deref()
    }

    pub fn set_toolchain_version(&mut self, version: Option<String>) {
        self.toolchain_version = version;
    }
}
