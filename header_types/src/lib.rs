//! Module Model Definitions
//!
//! This crate contains the data structures describing a compiled module as
//! seen by the header generator: host modules, foreign submodules, the
//! declarations exported by a module and the references between them.
//! It carries no file I/O or code generation logic.

pub mod decl;
pub mod defs;
pub mod module;

// Re-export commonly used types at the crate root
pub use decl::*;
pub use defs::*;
pub use module::*;
