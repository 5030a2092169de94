use super::conditional::{emit_cxx_conditional_else, emit_objc_conditional};
use super::macros::emit_macros;

/* Appended to the upper-cased module name to form the include guard */
pub const MACRO_GUARD_SUFFIX: &str = "_SWIFT_H";

/* Widest SIMD vector the importer maps to a native vector type */
pub const MAX_IMPORTED_SIMD_ELEMENTS: usize = 4;

/* Vector widths a typedef is emitted for */
pub const SIMD_WIDTHS: [usize; 3] = [2, 3, 4];

const _: () = assert!(
    SIMD_WIDTHS[SIMD_WIDTHS.len() - 1] == MAX_IMPORTED_SIMD_ELEMENTS,
    "need to add SIMD typedefs here if max elements is increased"
);

/* Scalar types with a SIMD vector mapping: typedef name stem and C scalar */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimdMappedType {
    pub c_type: &'static str,
    pub scalar_type: &'static str,
}

pub const SIMD_MAPPED_TYPES: &[SimdMappedType] = &[
    SimdMappedType {
        c_type: "float",
        scalar_type: "float",
    },
    SimdMappedType {
        c_type: "double",
        scalar_type: "double",
    },
    SimdMappedType {
        c_type: "int",
        scalar_type: "int",
    },
    SimdMappedType {
        c_type: "uint",
        scalar_type: "unsigned int",
    },
];

pub const SIMD_TYPEDEF_COUNT: usize = SIMD_MAPPED_TYPES.len() * SIMD_WIDTHS.len();

/* Include guard macro for a module, e.g. `Foo` -> `FOO_SWIFT_H` */
pub fn compute_macro_guard(module_name: &str) -> String {
    format!("{}{}", module_name.to_ascii_uppercase(), MACRO_GUARD_SUFFIX)
}

fn write_simd_typedefs(out: &mut String) {
    for mapped in SIMD_MAPPED_TYPES {
        for width in SIMD_WIDTHS {
            out.push_str(&format!(
                "typedef {} swift_{}{}  __attribute__((__ext_vector_type__({})));\n",
                mapped.scalar_type, mapped.c_type, width, width
            ));
        }
    }
}

pub fn write_prologue(out: &mut String, toolchain_version: &str, macro_guard: &str) {
    out.push_str(&format!("// Generated by {}\n", toolchain_version));
    /* Guard against recursive definition */
    out.push_str(&format!("#ifndef {}\n#define {}\n", macro_guard, macro_guard));
    out.push_str(
        "#pragma clang diagnostic push\n\
         #pragma clang diagnostic ignored \"-Wgcc-compat\"\n\
         \n\
         #if !defined(__has_include)\n\
         # define __has_include(x) 0\n\
         #endif\n\
         #if !defined(__has_attribute)\n\
         # define __has_attribute(x) 0\n\
         #endif\n\
         #if !defined(__has_feature)\n\
         # define __has_feature(x) 0\n\
         #endif\n\
         #if !defined(__has_warning)\n\
         # define __has_warning(x) 0\n\
         #endif\n\
         \n\
         #if __has_include(<swift/objc-prologue.h>)\n\
         # include <swift/objc-prologue.h>\n\
         #endif\n\
         \n\
         #pragma clang diagnostic ignored \"-Wauto-import\"\n",
    );
    emit_objc_conditional(out, |out| out.push_str("#include <Foundation/Foundation.h>\n"));
    emit_cxx_conditional_else(
        out,
        |out| {
            out.push_str(
                "#include <cstdint>\n\
                 #include <cstddef>\n\
                 #include <cstdbool>\n",
            )
        },
        |out| {
            out.push_str(
                "#include <stdint.h>\n\
                 #include <stddef.h>\n\
                 #include <stdbool.h>\n",
            )
        },
    );
    out.push_str(
        "\n\
         #if !defined(SWIFT_TYPEDEFS)\n\
         # define SWIFT_TYPEDEFS 1\n\
         # if __has_include(<uchar.h>)\n\
         #  include <uchar.h>\n\
         # elif !defined(__cplusplus)\n\
         typedef uint_least16_t char16_t;\n\
         typedef uint_least32_t char32_t;\n\
         # endif\n",
    );
    write_simd_typedefs(out);
    out.push_str("#endif\n\n");

    emit_macros(out);
}

pub fn write_post_import_prologue(out: &mut String, module_name: &str) {
    out.push_str(
        "#pragma clang diagnostic ignored \"-Wproperty-attribute-mismatch\"\n\
         #pragma clang diagnostic ignored \"-Wduplicate-method-arg\"\n\
         #if __has_warning(\"-Wpragma-clang-attribute\")\n\
         # pragma clang diagnostic ignored \"-Wpragma-clang-attribute\"\n\
         #endif\n\
         #pragma clang diagnostic ignored \"-Wunknown-pragmas\"\n\
         #pragma clang diagnostic ignored \"-Wnullability\"\n\
         #pragma clang diagnostic ignored \"-Wdollar-in-identifier-extension\"\n\
         \n\
         #if __has_attribute(external_source_symbol)\n\
         # pragma push_macro(\"any\")\n\
         # undef any\n",
    );
    out.push_str(&format!(
        "# pragma clang attribute push(__attribute__((external_source_symbol(language=\"Swift\", \
         defined_in=\"{}\",generated_declaration))), \
         apply_to=any(function,enum,objc_interface,objc_category,objc_protocol))\n",
        module_name
    ));
    out.push_str(
        "# pragma pop_macro(\"any\")\n\
         #endif\n\n",
    );
}

pub fn write_epilogue(out: &mut String) {
    out.push_str(
        "#if __has_attribute(external_source_symbol)\n\
         # pragma clang attribute pop\n\
         #endif\n\
         #pragma clang diagnostic pop\n",
    );
    /* For the macro guard against recursive definition */
    out.push_str("#endif\n");
}
