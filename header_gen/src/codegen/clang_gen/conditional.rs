/* Preprocessor conditionals wrapped around generated content.

   Every case receives the output buffer it should append to, so cases can be
   nested freely and each emitted block is balanced on its own. */

/* Language modes a header consumer may be compiled in */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageTag {
    Cxx,
    ObjC,
}

impl LanguageTag {
    pub fn predicate(self) -> &'static str {
        match self {
            LanguageTag::Cxx => "defined(__cplusplus)",
            LanguageTag::ObjC => "defined(__OBJC__)",
        }
    }
}

/* Write `#if <predicate>`, the primary case, an optional `#else` case and `#endif` */
pub fn emit_conditional<F, G>(out: &mut String, predicate: &str, primary: F, alternate: Option<G>)
where
    F: FnOnce(&mut String),
    G: FnOnce(&mut String),
{
    out.push_str("#if ");
    out.push_str(predicate);
    out.push('\n');
    primary(out);
    if let Some(alternate) = alternate {
        out.push_str("#else\n");
        alternate(out);
    }
    out.push_str("#endif\n");
}

pub fn emit_cxx_conditional(out: &mut String, cxx_case: impl FnOnce(&mut String)) {
    emit_conditional(out, LanguageTag::Cxx.predicate(), cxx_case, None::<fn(&mut String)>);
}

pub fn emit_cxx_conditional_else(
    out: &mut String,
    cxx_case: impl FnOnce(&mut String),
    c_case: impl FnOnce(&mut String),
) {
    emit_conditional(out, LanguageTag::Cxx.predicate(), cxx_case, Some(c_case));
}

pub fn emit_objc_conditional(out: &mut String, objc_case: impl FnOnce(&mut String)) {
    emit_conditional(out, LanguageTag::ObjC.predicate(), objc_case, None::<fn(&mut String)>);
}

pub fn emit_objc_conditional_else(
    out: &mut String,
    objc_case: impl FnOnce(&mut String),
    non_objc_case: impl FnOnce(&mut String),
) {
    emit_conditional(out, LanguageTag::ObjC.predicate(), objc_case, Some(non_objc_case));
}

/* Depth of `#if`-family nesting after scanning `text`, or None when an
   `#else`/`#endif` appears without an open conditional */
#[cfg(test)]
pub(crate) fn conditional_depth(text: &str) -> Option<usize> {
    let mut depth: usize = 0;
    for line in text.lines() {
        let directive: String = line
            .trim_start()
            .strip_prefix('#')
            .map(|rest| rest.trim_start().chars().take_while(|c| c.is_ascii_alphabetic()).collect())
            .unwrap_or_default();
        match directive.as_str() {
            "if" | "ifdef" | "ifndef" => depth += 1,
            "elif" | "else" if depth == 0 => return None,
            "endif" => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    Some(depth)
}
