pub mod clang;
pub mod clang_gen;

pub use clang::{print_as_clang_header, ClangHeaderGenerator, ClangHeaderOptions, HeaderSection};
