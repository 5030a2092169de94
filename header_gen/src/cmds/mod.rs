pub mod common;
pub mod generate;
pub mod guard;
pub mod imports;
