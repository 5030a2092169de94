//! Error types for manifest resolution

use thiserror::Error;

/// Errors found while turning a manifest into a module graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A module entry with an empty name
    #[error("Module '{key}' has an empty name")]
    EmptyModuleName { key: String },

    /// Two module entries share the same key
    #[error("Duplicate module key '{0}' (give one of the modules an explicit id)")]
    DuplicateModuleKey(String),

    /// A module name that is not an identifier
    #[error("Invalid module name '{0}': module names must be identifiers")]
    InvalidModuleName(String),

    /// A module key that could be mistaken for a foreign path
    #[error("Invalid module key '{0}': keys must be non-empty and must not contain '.'")]
    InvalidModuleKey(String),

    /// A `uses` entry naming a module that was never declared
    #[error("Unknown module '{reference}' referenced from {context}")]
    UnknownModule { reference: String, context: String },

    /// The imported header module key does not name a declared module
    #[error("Unknown imported header module '{0}'")]
    UnknownImportedHeaderModule(String),

    /// A dotted foreign path with empty segments
    #[error("Malformed foreign module path '{0}'")]
    MalformedForeignPath(String),
}
