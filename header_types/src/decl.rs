use crate::module::ImportModule;

/* A declaration already rendered to header text, together with every module
   its text refers to */
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declaration {
    pub text: String,
    pub uses: Vec<ImportModule>,
}

impl Declaration {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            uses: Vec::new(),
        }
    }

    pub fn with_uses(mut self, uses: impl IntoIterator<Item = ImportModule>) -> Self {
        self.uses.extend(uses);
        self
    }
}
