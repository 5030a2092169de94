use serde_derive::{Deserialize, Serialize};

/* Module definition as written in a manifest */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleDef {
    pub name: String,
    /* Key other entries use to refer to this module; defaults to `name` */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_name: Option<String>,
}

impl ModuleDef {
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/* Declaration text as written in a manifest.

   Each `uses` entry is either a host module key (`Foundation`, `foo-clang`)
   or a dotted foreign submodule path (`Darwin.C.stdio`). */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DeclarationDef {
    pub text: String,
    #[serde(default)]
    pub uses: Vec<String>,
}

/* How a `uses` entry should be interpreted */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRef<'a> {
    Key(&'a str),
    ForeignPath(&'a str),
}

impl<'a> ModuleRef<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if raw.contains('.') {
            ModuleRef::ForeignPath(raw)
        } else {
            ModuleRef::Key(raw)
        }
    }
}
