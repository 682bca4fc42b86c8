//! Union-type expression grammar for inline `@var` annotations.
//!
//! The accepted language is deliberately small: one or more `|`-separated
//! atomic tokens, each made of word characters and namespace separators
//! (`\`), each optionally followed by any number of `[]` array suffixes.
//!
//! ```text
//! union  := atom ( '|' atom )*
//! atom   := [A-Za-z0-9_\\]+ ( '[]' )*
//! ```
//!
//! [`scan_union_type`] measures how much of a string matches `union` (used
//! by the annotation extractor), and [`parse_union_type`] turns a complete
//! union string into classified [`TypeReference`]s.

use crate::types::TypeReference;

/// Built-in type names that never refer to a class.  Compared
/// case-insensitively.
pub(crate) const NATIVE_TYPES: &[&str] = &[
    "int", "integer", "float", "double", "string", "bool", "boolean", "array", "list",
    "iterable", "callable", "object", "mixed", "null", "void", "never", "resource", "scalar",
    "numeric", "true", "false",
];

/// ASCII word character, i.e. `[A-Za-z0-9_]`.
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_atom_byte(b: u8) -> bool {
    is_word_byte(b) || b == b'\\'
}

/// Check whether a type name is a built-in (never a class).
pub fn is_native_type(name: &str) -> bool {
    NATIVE_TYPES.iter().any(|n| n.eq_ignore_ascii_case(name))
}

/// Check whether a type name is `self` or `static`.
pub fn is_self_or_static(name: &str) -> bool {
    name.eq_ignore_ascii_case("self") || name.eq_ignore_ascii_case("static")
}

/// Return the byte length of the longest prefix of `s` that is a valid
/// union-type expression, or `0` when `s` does not start with one.
///
/// A trailing `|` that is not followed by another atom is not part of the
/// match (`Foo| $x` matches only `Foo`).
pub fn scan_union_type(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    loop {
        let atom_start = i;
        while i < bytes.len() && is_atom_byte(bytes[i]) {
            i += 1;
        }
        if i == atom_start {
            // Only reachable for the very first atom; later atoms are
            // guarded by the look-ahead below.
            return 0;
        }
        while bytes[i..].starts_with(b"[]") {
            i += 2;
        }
        if bytes.get(i) == Some(&b'|') && bytes.get(i + 1).copied().is_some_and(is_atom_byte) {
            i += 1;
            continue;
        }
        return i;
    }
}

/// One atomic member of a union type, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomicType<'a> {
    /// The token as written, including any `[]` suffixes.
    pub raw: &'a str,
}

impl<'a> AtomicType<'a> {
    /// The element type of an array atom (`Foo[][]` → `Foo[]`), or `None`
    /// when the atom is not an array.
    pub fn element_type(&self) -> Option<AtomicType<'a>> {
        self.raw
            .strip_suffix("[]")
            .map(|raw| AtomicType { raw })
    }

    /// Unwrap every array level, returning the innermost atom and the
    /// number of levels that were removed.
    pub fn innermost(self) -> (AtomicType<'a>, usize) {
        let mut atom = self;
        let mut depth = 0;
        while let Some(inner) = atom.element_type() {
            atom = inner;
            depth += 1;
        }
        (atom, depth)
    }
}

/// Split a union-type string into its atomic members.
///
/// Returns an empty list when `s` is empty or is not entirely a valid
/// union-type expression.  Duplicate atoms are kept only once, in order of
/// first appearance.
pub fn split_union_type(s: &str) -> Vec<AtomicType<'_>> {
    if s.is_empty() || scan_union_type(s) != s.len() {
        return Vec::new();
    }

    let mut atoms: Vec<AtomicType<'_>> = Vec::new();
    for raw in s.split('|') {
        if !atoms.iter().any(|a| a.raw == raw) {
            atoms.push(AtomicType { raw });
        }
    }
    atoms
}

/// Classify a single innermost type name.
///
/// A leading `\` does not change the meaning of a native or `self` /
/// `static` name (`\int` is `int`).  Returns `None` for names that cannot
/// denote anything (a bare `\`).
pub fn classify_type_name(name: &str, template_params: &[String]) -> Option<TypeReference> {
    let bare = name.trim_start_matches('\\');
    if bare.is_empty() {
        return None;
    }
    if is_native_type(bare) {
        return Some(TypeReference::Native(bare.to_ascii_lowercase()));
    }
    if is_self_or_static(bare) {
        return Some(TypeReference::SelfOrStatic);
    }
    // Templates are never namespaced; `\T` always names a class.
    if template_params.iter().any(|t| t == name) {
        return Some(TypeReference::TemplateParameter(name.to_string()));
    }
    Some(TypeReference::ClassLike(name.to_string()))
}

/// Parse a union-type string into classified references, one per distinct
/// atomic token, with array nesting unwrapped.
///
/// Malformed input yields an empty list.
pub fn parse_union_type(s: &str, template_params: &[String]) -> Vec<TypeReference> {
    split_union_type(s)
        .into_iter()
        .filter_map(|atom| {
            let (inner, _) = atom.innermost();
            classify_type_name(inner.raw, template_params)
        })
        .collect()
}
