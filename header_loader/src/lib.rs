//! Manifest Loading and Module Resolution
//!
//! This crate loads module manifests from disk, validates the references
//! between the modules they describe and turns them into a `ModuleGraph`
//! ready for header generation.

pub mod error;
pub mod file;
pub mod resolver;

// Re-export commonly used types at the crate root
pub use error::LoadError;
pub use file::{load_manifest, ManifestFile};
pub use resolver::{LoadedManifest, ManifestResolver};

// Re-export header_types for convenience
pub use header_types;
