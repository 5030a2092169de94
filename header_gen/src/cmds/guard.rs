/* Guard command - print the include guard macro for a module name */

use crate::codegen::clang_gen::compute_macro_guard;

pub fn run(module_name: &str) -> anyhow::Result<()> {
    anyhow::ensure!(!module_name.is_empty(), "Module name must not be empty");
    println!("{}", compute_macro_guard(module_name));
    Ok(())
}
