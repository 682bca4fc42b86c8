//! PHPDoc tag extraction.
//!
//! This submodule handles the two tags the checker cares about:
//!
//! - inline `@var` / `@phan-var` annotations that name a variable
//!   (`/** @var \App\Thing $thing */`), extracted from any comment text by
//!   [`extract_var_annotations`];
//! - `@template` declarations on class-like docblocks, extracted by
//!   [`extract_template_params`] so that template names are never mistaken
//!   for class names.
//!
//! It also provides [`get_docblock_text_for_node`] to locate the docblock
//! attached to an AST node through the program's trivia.

use mago_span::HasSpan;
use mago_syntax::ast::*;

use crate::types::AnnotationMatch;

use super::types::{is_word_byte, scan_union_type};

// ─── Inline @var annotations ────────────────────────────────────────────────

/// Extract every `@var` / `@phan-var` annotation from a comment.
///
/// The grammar, applied left to right without overlapping matches, is:
///
/// ```text
/// '@' 'phan-'? 'var' <word boundary> <ws>+ <union type> <ws>+ '$' <word>+
/// ```
///
/// Both the type and the variable name are mandatory:
///   - `/** @var \App\Thing $x */` → one match (`\App\Thing`, `x`)
///   - `/** @var $x */`            → no match
///   - `/** @var \App\Thing */`    → no match
///
/// The pattern does not care about comment markers, so it can also be run
/// over raw source text.  Every match is tagged with `line`.
pub fn extract_var_annotations(text: &str, line: u32) -> Vec<AnnotationMatch> {
    let bytes = text.as_bytes();
    let mut results = Vec::new();
    let mut pos = 0;

    while let Some(found) = memchr::memchr(b'@', &bytes[pos..]) {
        let at = pos + found;
        match match_var_annotation(text, at) {
            Some((end, type_text, variable)) => {
                results.push(AnnotationMatch {
                    type_text: type_text.to_string(),
                    variable: variable.to_string(),
                    line,
                });
                pos = end;
            }
            None => pos = at + 1,
        }
    }

    results
}

/// Try to match a single annotation starting at the `@` at byte `at`.
///
/// Returns `(end_offset, type_text, variable_name)`.
fn match_var_annotation(text: &str, at: usize) -> Option<(usize, &str, &str)> {
    let rest = &text[at + 1..];
    let rest = rest.strip_prefix("phan-").unwrap_or(rest);
    let rest = rest.strip_prefix("var")?;

    // `\b` after `var`: `@variable` is a different tag.
    if rest.as_bytes().first().copied().is_some_and(is_word_byte) {
        return None;
    }

    let rest = skip_whitespace(rest)?;

    let type_len = scan_union_type(rest);
    if type_len == 0 {
        return None;
    }
    let (type_text, rest) = rest.split_at(type_len);

    let rest = skip_whitespace(rest)?;
    let rest = rest.strip_prefix('$')?;

    let name_len = rest.bytes().take_while(|&b| is_word_byte(b)).count();
    if name_len == 0 {
        return None;
    }
    let variable = &rest[..name_len];

    let end = text.len() - rest.len() + name_len;
    Some((end, type_text, variable))
}

/// Skip one or more whitespace bytes; `None` when there are none.
///
/// Vertical tab counts as whitespace here, unlike `char::is_ascii_whitespace`.
fn skip_whitespace(s: &str) -> Option<&str> {
    let trimmed = s.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    if trimmed.len() == s.len() {
        None
    } else {
        Some(trimmed)
    }
}

// ─── Docblock lookup ────────────────────────────────────────────────────────

/// Raw text of the `/** */` docblock attached to `node`, if any.
///
/// Walks the trivia before the node backwards.  Whitespace and ordinary
/// comments may sit between the docblock and the node; code may not.
pub fn get_docblock_text_for_node<'a>(
    trivia: &'a [Trivia<'a>],
    content: &str,
    node: &impl HasSpan,
) -> Option<&'a str> {
    let node_start = node.span().start.offset;
    let preceding = &trivia[..trivia.partition_point(|t| t.span.start.offset < node_start)];
    let bytes = content.as_bytes();
    let mut boundary = node_start as usize;

    for t in preceding.iter().rev() {
        let between = bytes
            .get(t.span.end.offset as usize..boundary)
            .unwrap_or_default();
        if !between.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        if matches!(t.kind, TriviaKind::DocBlockComment) {
            return Some(t.value);
        }
        boundary = t.span.start.offset as usize;
    }

    None
}

// ─── Templates ──────────────────────────────────────────────────────────────

/// Extract template parameter names from `@template` tags in a docblock.
///
/// Recognises `@template`, `@template-covariant`, `@template-contravariant`
/// and the `@phpstan-`, `@psalm-` and `@phan-` prefixed spellings.
pub fn extract_template_params(docblock: &str) -> Vec<String> {
    let inner = docblock
        .trim()
        .strip_prefix("/**")
        .unwrap_or(docblock)
        .strip_suffix("*/")
        .unwrap_or(docblock);

    let mut results = Vec::new();

    for line in inner.lines() {
        let trimmed = line.trim().trim_start_matches('*').trim();

        let Some(tag) = trimmed.strip_prefix('@') else {
            continue;
        };
        let tag = ["phpstan-", "psalm-", "phan-"]
            .iter()
            .find_map(|p| tag.strip_prefix(*p))
            .unwrap_or(tag);
        let Some(rest) = tag.strip_prefix("template") else {
            continue;
        };
        let rest = rest
            .strip_prefix("-covariant")
            .or_else(|| rest.strip_prefix("-contravariant"))
            .unwrap_or(rest);

        // Must be followed by whitespace (`@templateFoo` is not a tag).
        if !rest.starts_with(|c: char| c.is_whitespace()) {
            continue;
        }

        if let Some(name) = rest.split_whitespace().next()
            && name
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        {
            results.push(name.to_string());
        }
    }

    results
}
