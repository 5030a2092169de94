use super::conditional::{emit_conditional, emit_cxx_conditional, emit_cxx_conditional_else, emit_objc_conditional};

/* How a macro from the table is defined */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroForm {
    /* `# define NAME ARGS VALUE` */
    Value(&'static str),
    /* VALUE when CONDITION holds, ALTERNATIVE otherwise */
    Alternative {
        condition: &'static str,
        value: &'static str,
        alternative: &'static str,
    },
    /* Preprocessor text written as is */
    Body(&'static str),
    /* Only defined for Objective-C */
    ObjcValue(&'static str),
    /* VALUE for C++, ALTERNATIVE for everything else */
    CxxValue {
        value: &'static str,
        alternative: &'static str,
    },
    /* Preprocessor text written as is, C++ only */
    CxxBody(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroDef {
    pub name: &'static str,
    /* Parameter list including parentheses, empty for object-like macros */
    pub args: &'static str,
    pub form: MacroForm,
}

const fn value(name: &'static str, args: &'static str, value: &'static str) -> MacroDef {
    MacroDef {
        name,
        args,
        form: MacroForm::Value(value),
    }
}

const fn alternative(
    name: &'static str,
    args: &'static str,
    condition: &'static str,
    value: &'static str,
    alternative: &'static str,
) -> MacroDef {
    MacroDef {
        name,
        args,
        form: MacroForm::Alternative {
            condition,
            value,
            alternative,
        },
    }
}

const fn body(name: &'static str, body: &'static str) -> MacroDef {
    MacroDef {
        name,
        args: "",
        form: MacroForm::Body(body),
    }
}

/* Macros every generated header defines unless the includer already did */
pub const CLANG_MACROS: &[MacroDef] = &[
    body(
        "SWIFT_PASTE",
        "# define SWIFT_PASTE_HELPER(x, y) x##y\n\
         # define SWIFT_PASTE(x, y) SWIFT_PASTE_HELPER(x, y)",
    ),
    value("SWIFT_METATYPE", "(X)", "Class"),
    alternative(
        "SWIFT_CLASS_PROPERTY",
        "(...)",
        "__has_feature(objc_class_property)",
        "__VA_ARGS__",
        "",
    ),
    alternative(
        "SWIFT_RUNTIME_NAME",
        "(X)",
        "__has_attribute(objc_runtime_name)",
        "__attribute__((objc_runtime_name(X)))",
        "",
    ),
    alternative(
        "SWIFT_COMPILE_NAME",
        "(X)",
        "__has_attribute(swift_name)",
        "__attribute__((swift_name(X)))",
        "",
    ),
    alternative(
        "SWIFT_METHOD_FAMILY",
        "(X)",
        "__has_attribute(objc_method_family)",
        "__attribute__((objc_method_family(X)))",
        "",
    ),
    alternative(
        "SWIFT_NOESCAPE",
        "",
        "__has_attribute(noescape)",
        "__attribute__((noescape))",
        "",
    ),
    alternative(
        "SWIFT_RELEASES_ARGUMENT",
        "",
        "__has_attribute(ns_consumed)",
        "__attribute__((ns_consumed))",
        "",
    ),
    alternative(
        "SWIFT_WARN_UNUSED_RESULT",
        "",
        "__has_attribute(warn_unused_result)",
        "__attribute__((warn_unused_result))",
        "",
    ),
    alternative(
        "SWIFT_NORETURN",
        "",
        "__has_attribute(noreturn)",
        "__attribute__((noreturn))",
        "",
    ),
    value("SWIFT_CLASS_EXTRA", "", ""),
    value("SWIFT_PROTOCOL_EXTRA", "", ""),
    value("SWIFT_ENUM_EXTRA", "", ""),
    alternative(
        "SWIFT_CLASS",
        "(SWIFT_NAME)",
        "__has_attribute(objc_subclassing_restricted)",
        "SWIFT_RUNTIME_NAME(SWIFT_NAME) __attribute__((objc_subclassing_restricted)) SWIFT_CLASS_EXTRA",
        "SWIFT_RUNTIME_NAME(SWIFT_NAME) SWIFT_CLASS_EXTRA",
    ),
    alternative(
        "SWIFT_CLASS_NAMED",
        "(SWIFT_NAME)",
        "__has_attribute(objc_subclassing_restricted)",
        "__attribute__((objc_subclassing_restricted)) SWIFT_COMPILE_NAME(SWIFT_NAME) SWIFT_CLASS_EXTRA",
        "SWIFT_COMPILE_NAME(SWIFT_NAME) SWIFT_CLASS_EXTRA",
    ),
    alternative(
        "SWIFT_RESILIENT_CLASS",
        "(SWIFT_NAME)",
        "__has_attribute(objc_class_stub)",
        "SWIFT_CLASS(SWIFT_NAME) __attribute__((objc_class_stub))",
        "SWIFT_CLASS(SWIFT_NAME)",
    ),
    value(
        "SWIFT_PROTOCOL",
        "(SWIFT_NAME)",
        "SWIFT_RUNTIME_NAME(SWIFT_NAME) SWIFT_PROTOCOL_EXTRA",
    ),
    value(
        "SWIFT_PROTOCOL_NAMED",
        "(SWIFT_NAME)",
        "SWIFT_COMPILE_NAME(SWIFT_NAME) SWIFT_PROTOCOL_EXTRA",
    ),
    value("SWIFT_EXTENSION", "(M)", "SWIFT_PASTE(M##_Swift_, __LINE__)"),
    alternative(
        "OBJC_DESIGNATED_INITIALIZER",
        "",
        "__has_attribute(objc_designated_initializer)",
        "__attribute__((objc_designated_initializer))",
        "",
    ),
    alternative(
        "SWIFT_ENUM_ATTR",
        "(_extensibility)",
        "__has_attribute(enum_extensibility)",
        "__attribute__((enum_extensibility(_extensibility)))",
        "",
    ),
    body(
        "SWIFT_ENUM",
        "# define SWIFT_ENUM(_type, _name, _extensibility) enum _name : _type _name; enum SWIFT_ENUM_ATTR(_extensibility) SWIFT_ENUM_EXTRA _name : _type\n\
         # if __has_feature(generalized_swift_name)\n\
         #  define SWIFT_ENUM_NAMED(_type, _name, SWIFT_NAME, _extensibility) enum _name : _type _name SWIFT_COMPILE_NAME(SWIFT_NAME); enum SWIFT_COMPILE_NAME(SWIFT_NAME) SWIFT_ENUM_ATTR(_extensibility) SWIFT_ENUM_EXTRA _name : _type\n\
         # else\n\
         #  define SWIFT_ENUM_NAMED(_type, _name, SWIFT_NAME, _extensibility) SWIFT_ENUM(_type, _name, _extensibility)\n\
         # endif",
    ),
    value("SWIFT_UNAVAILABLE", "", "__attribute__((unavailable))"),
    value("SWIFT_UNAVAILABLE_MSG", "(msg)", "__attribute__((unavailable(msg)))"),
    value(
        "SWIFT_AVAILABILITY",
        "(plat, ...)",
        "__attribute__((availability(plat, __VA_ARGS__)))",
    ),
    value("SWIFT_WEAK_IMPORT", "", "__attribute__((weak_import))"),
    value("SWIFT_DEPRECATED", "", "__attribute__((deprecated))"),
    value(
        "SWIFT_DEPRECATED_MSG",
        "(...)",
        "__attribute__((deprecated(__VA_ARGS__)))",
    ),
    alternative(
        "SWIFT_DEPRECATED_OBJC",
        "(Msg)",
        "__has_feature(attribute_diagnose_if_objc)",
        "__attribute__((diagnose_if(1, Msg, \"warning\")))",
        "SWIFT_DEPRECATED_MSG(Msg)",
    ),
    MacroDef {
        name: "IBSegueAction",
        args: "",
        form: MacroForm::ObjcValue(""),
    },
    body(
        "SWIFT_EXTERN",
        "# if defined(__cplusplus)\n\
         #  define SWIFT_EXTERN extern \"C\"\n\
         # else\n\
         #  define SWIFT_EXTERN extern\n\
         # endif",
    ),
    value("SWIFT_CALL", "", "__attribute__((swiftcall))"),
    value("SWIFT_INDIRECT_RESULT", "", "__attribute__((swift_indirect_result))"),
    value("SWIFT_CONTEXT", "", "__attribute__((swift_context))"),
    value("SWIFT_ERROR_RESULT", "", "__attribute__((swift_error_result))"),
    MacroDef {
        name: "SWIFT_NOEXCEPT",
        args: "",
        form: MacroForm::CxxValue {
            value: "noexcept",
            alternative: "",
        },
    },
    alternative(
        "SWIFT_C_INLINE_THUNK",
        "",
        "__has_attribute(always_inline) && __has_attribute(nodebug)",
        "__attribute__((always_inline)) __attribute__((nodebug))",
        "",
    ),
    MacroDef {
        name: "SWIFT_INLINE_THUNK",
        args: "",
        form: MacroForm::CxxBody(
            "# if !defined(SWIFT_INLINE_THUNK)\n\
             #  define SWIFT_INLINE_THUNK inline SWIFT_C_INLINE_THUNK\n\
             # endif",
        ),
    },
];

fn define_line(def: &MacroDef, indent: &str, value: &str) -> String {
    format!("#{}define {}{} {}\n", indent, def.name, def.args, value)
}

/* Wrap `case` so it only runs when `name` is not defined yet */
fn emit_undefined_guard(out: &mut String, name: &str, case: impl FnOnce(&mut String)) {
    emit_conditional(out, &format!("!defined({})", name), case, None::<fn(&mut String)>);
}

/* Emit one table entry as a self-guarded definition */
pub fn emit_macro(out: &mut String, def: &MacroDef) {
    match def.form {
        MacroForm::Value(value) => {
            emit_undefined_guard(out, def.name, |out| {
                out.push_str(&define_line(def, " ", value))
            });
        }
        MacroForm::Alternative {
            condition,
            value,
            alternative,
        } => {
            emit_undefined_guard(out, def.name, |out| {
                out.push_str("# if ");
                out.push_str(condition);
                out.push('\n');
                out.push_str(&define_line(def, "  ", value));
                out.push_str("# else\n");
                out.push_str(&define_line(def, "  ", alternative));
                out.push_str("# endif\n");
            });
        }
        MacroForm::Body(body) => {
            emit_undefined_guard(out, def.name, |out| {
                out.push_str(body);
                out.push('\n');
            });
        }
        MacroForm::ObjcValue(value) => {
            emit_objc_conditional(out, |out| {
                emit_undefined_guard(out, def.name, |out| {
                    out.push_str(&define_line(def, " ", value))
                });
            });
        }
        MacroForm::CxxValue { value, alternative } => {
            emit_undefined_guard(out, def.name, |out| {
                emit_cxx_conditional_else(
                    out,
                    |out| out.push_str(&define_line(def, " ", value)),
                    |out| out.push_str(&define_line(def, " ", alternative)),
                );
            });
        }
        MacroForm::CxxBody(body) => {
            emit_cxx_conditional(out, |out| {
                out.push_str(body);
                out.push('\n');
            });
        }
    }
}

pub fn emit_macros(out: &mut String) {
    for def in CLANG_MACROS {
        emit_macro(out, def);
    }
}
