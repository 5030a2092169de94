//! Clang Header Generation
//!
//! Turns the exported declarations of a compiled module into a single header
//! usable from C, Objective-C and C++. The document is assembled by
//! `codegen::clang`; the pieces it is built from live in `codegen::clang_gen`.

pub mod cmds;
pub mod codegen;
