use super::conditional::emit_conditional;
use super::context::ModuleContext;
use header_types::{ForeignModuleId, ImportModule, ModuleId};
use indexmap::IndexSet;
use serde_derive::Serialize;
use std::cmp::Ordering;
use tracing::{debug, trace};

/* ============================================================================
   Import Set
   ============================================================================ */

/* Modules referenced by printed declarations, keyed by module identity */
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    modules: IndexSet<ImportModule>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /* Returns false when the module was already present */
    pub fn insert(&mut self, module: impl Into<ImportModule>) -> bool {
        self.modules.insert(module.into())
    }

    pub fn contains(&self, module: impl Into<ImportModule>) -> bool {
        self.modules.contains(&module.into())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportModule> {
        self.modules.iter()
    }
}

impl Extend<ImportModule> for ImportSet {
    fn extend<T: IntoIterator<Item = ImportModule>>(&mut self, iter: T) {
        self.modules.extend(iter);
    }
}

impl FromIterator<ImportModule> for ImportSet {
    fn from_iter<T: IntoIterator<Item = ImportModule>>(iter: T) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

/* ============================================================================
   Ordering
   ============================================================================ */

fn foreign_submodule_path<C: ModuleContext + ?Sized>(ctx: &C, module: ForeignModuleId) -> Vec<&str> {
    let path = ctx.foreign_module_path(module);
    assert!(
        path.len() > 1,
        "top-level foreign modules should be imported through their host module"
    );
    path
}

/* Total order over import references.

   Host modules compare by name. A foreign submodule sorts before a host module
   only when its top-level name is smaller; a submodule's full name is never
   equal to a host module's name, so on a shared top-level name it comes after.
   Foreign submodules compare by full name, root first. */
pub fn compare_import_modules<C: ModuleContext + ?Sized>(
    ctx: &C,
    left: &ImportModule,
    right: &ImportModule,
) -> Ordering {
    match (left, right) {
        (ImportModule::Host(left), ImportModule::Host(right)) => {
            ctx.module_name(*left).cmp(ctx.module_name(*right))
        }
        (ImportModule::Host(_), ImportModule::Foreign(_)) => {
            compare_import_modules(ctx, right, left).reverse()
        }
        (ImportModule::Foreign(left), ImportModule::Host(right)) => {
            let left_path = foreign_submodule_path(ctx, *left);
            /* A tie on the top-level name is ordered host first, not asserted */
            if left_path[0] < ctx.module_name(*right) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (ImportModule::Foreign(left), ImportModule::Foreign(right)) => {
            if left == right {
                return Ordering::Equal;
            }
            let left_path = foreign_submodule_path(ctx, *left);
            let right_path = foreign_submodule_path(ctx, *right);
            assert!(
                left_path != right_path,
                "distinct foreign modules should not have the same full name"
            );
            left_path.cmp(&right_path)
        }
    }
}

/* ============================================================================
   Import Plan
   ============================================================================ */

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ImportKind {
    Host,
    ForeignSubmodule,
}

/* One `@import` statement */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleImport {
    pub name: String,
    pub kind: ImportKind,
}

impl ModuleImport {
    pub fn statement(&self) -> String {
        format!("@import {};", self.name)
    }
}

/* How the module's own hand-written header is pulled in */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum UnderlyingInclude {
    Framework { module: String },
    BridgingHeader { path: String },
}

impl UnderlyingInclude {
    pub fn directive(&self) -> String {
        match self {
            UnderlyingInclude::Framework { module } => format!("#import <{}/{}.h>", module, module),
            UnderlyingInclude::BridgingHeader { path } => format!("#import \"{}\"", path),
        }
    }
}

/* The import section of a header, sorted and deduplicated */
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPlan {
    pub imports: Vec<ModuleImport>,
    pub underlying: Option<UnderlyingInclude>,
}

/* Sort the collected imports and decide what each of them becomes */
pub fn plan_imports<C: ModuleContext + ?Sized>(
    ctx: &C,
    imports: &ImportSet,
    module: ModuleId,
    bridging_header: Option<&str>,
) -> ImportPlan {
    let bridging_header = bridging_header.filter(|header| !header.is_empty());
    let module_name = ctx.module_name(module);

    /* Sort alphabetically for determinism and consistency */
    let mut sorted_imports: Vec<ImportModule> = imports.iter().copied().collect();
    sorted_imports.sort_by(|left, right| compare_import_modules(ctx, left, right));

    let is_underlying_module = |import: ModuleId| -> bool {
        match bridging_header {
            None => import != module && ctx.module_name(import) == module_name,
            Some(_) => ctx.imported_header_module() == Some(import),
        }
    };

    /* Track printed names to handle overlay modules */
    let mut seen_imports: IndexSet<&str> = IndexSet::new();
    let mut include_underlying = false;
    let mut plan = ImportPlan::default();

    for import in sorted_imports {
        match import {
            ImportModule::Host(host_module) => {
                if host_module == module {
                    trace!(module = module_name, "dropping self import");
                    continue;
                }
                if is_underlying_module(host_module) {
                    include_underlying = true;
                    continue;
                }
                let name = ctx.module_name(host_module);
                if name == module_name {
                    trace!(module = module_name, "dropping import of the module's own name");
                    continue;
                }
                if seen_imports.insert(name) {
                    plan.imports.push(ModuleImport {
                        name: name.to_string(),
                        kind: ImportKind::Host,
                    });
                } else {
                    trace!(name, "dropping duplicate import");
                }
            }
            ImportModule::Foreign(foreign_module) => {
                let path = foreign_submodule_path(ctx, foreign_module);
                plan.imports.push(ModuleImport {
                    name: path.join("."),
                    kind: ImportKind::ForeignSubmodule,
                });
            }
        }
    }

    if include_underlying {
        plan.underlying = Some(match bridging_header {
            None => UnderlyingInclude::Framework {
                module: module_name.to_string(),
            },
            Some(path) => UnderlyingInclude::BridgingHeader {
                path: path.to_string(),
            },
        });
    }

    debug!(
        collected = imports.len(),
        emitted = plan.imports.len(),
        underlying = plan.underlying.is_some(),
        "planned imports"
    );
    plan
}

/* ============================================================================
   Emission
   ============================================================================ */

pub fn write_import_plan(out: &mut String, plan: &ImportPlan) {
    emit_conditional(
        out,
        "__has_feature(modules)",
        |out| {
            emit_conditional(
                out,
                "__has_warning(\"-Watimport-in-framework-header\")",
                |out| {
                    out.push_str(
                        "#pragma clang diagnostic ignored \"-Watimport-in-framework-header\"\n",
                    )
                },
                None::<fn(&mut String)>,
            );
            for import in &plan.imports {
                out.push_str(&import.statement());
                out.push('\n');
            }
        },
        None::<fn(&mut String)>,
    );
    out.push('\n');

    if let Some(underlying) = &plan.underlying {
        out.push_str(&underlying.directive());
        out.push_str("\n\n");
    }
}

pub fn write_imports<C: ModuleContext + ?Sized>(
    out: &mut String,
    ctx: &C,
    imports: &ImportSet,
    module: ModuleId,
    bridging_header: Option<&str>,
) {
    let plan = plan_imports(ctx, imports, module, bridging_header);
    write_import_plan(out, &plan);
}
