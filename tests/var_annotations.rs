//! Accepted and rejected inputs of the inline `@var` annotation grammar.
//!
//! The grammar is intentionally stricter than a general `@var` tag: the
//! type and the `$name` are both mandatory.

use phpantom_inline_var::docblock::{extract_var_annotations, scan_union_type};

fn extract(text: &str) -> Vec<(String, String)> {
    extract_var_annotations(text, 1)
        .into_iter()
        .map(|m| (m.type_text, m.variable))
        .collect()
}

fn pair(ty: &str, var: &str) -> (String, String) {
    (ty.to_string(), var.to_string())
}

// ─── Accepted ───────────────────────────────────────────────────────

#[test]
fn fully_qualified_type_and_name() {
    assert_eq!(
        extract("/** @var \\App\\Thing $x */"),
        vec![pair("\\App\\Thing", "x")]
    );
}

#[test]
fn phan_prefixed_tag() {
    assert_eq!(
        extract("/** @phan-var int|Foo[] $list */"),
        vec![pair("int|Foo[]", "list")]
    );
}

#[test]
fn line_comment_with_nested_arrays() {
    assert_eq!(extract("// @var Foo[][] $grid"), vec![pair("Foo[][]", "grid")]);
}

#[test]
fn hash_comment() {
    assert_eq!(extract("# @var Foo $a"), vec![pair("Foo", "a")]);
}

#[test]
fn tabs_count_as_whitespace() {
    assert_eq!(extract("/**\t@var\tFoo\t$x */"), vec![pair("Foo", "x")]);
}

#[test]
fn vertical_tab_counts_as_whitespace() {
    assert_eq!(extract("// @var \\G2\x0b$b"), vec![pair("\\G2", "b")]);
    assert_eq!(extract("/** @var\x0bFoo $x */"), vec![pair("Foo", "x")]);
}

#[test]
fn several_annotations_in_one_docblock() {
    let doc = "/**\n * @var Foo $a\n * @var \\Bar\\Baz|null $b\n */";
    assert_eq!(
        extract(doc),
        vec![pair("Foo", "a"), pair("\\Bar\\Baz|null", "b")]
    );
}

#[test]
fn several_comments_in_raw_source() {
    let source = "<?php\n/* @var Foo $a */\n$a = x();\n/** @var Bar $b */\n$b = y();\n";
    assert_eq!(extract(source), vec![pair("Foo", "a"), pair("Bar", "b")]);
}

#[test]
fn description_after_name_is_ignored() {
    assert_eq!(
        extract("/** @var Foo $foo the foo instance */"),
        vec![pair("Foo", "foo")]
    );
}

#[test]
fn name_stops_at_first_non_word_character() {
    assert_eq!(extract("/** @var Foo $x*/"), vec![pair("Foo", "x")]);
}

#[test]
fn match_carries_line() {
    let found = extract_var_annotations("/** @var Foo $x */", 42);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, 42);
}

// ─── Rejected ───────────────────────────────────────────────────────

#[test]
fn missing_type_is_rejected() {
    assert!(extract("/** @var $x */").is_empty());
}

#[test]
fn missing_name_is_rejected() {
    assert!(extract("/** @var \\App\\Thing */").is_empty());
}

#[test]
fn name_without_dollar_is_rejected() {
    assert!(extract("/** @var Foo x */").is_empty());
}

#[test]
fn longer_tag_is_rejected() {
    assert!(extract("/** @variable Foo $x */").is_empty());
    assert!(extract("/** @vars Foo $x */").is_empty());
}

#[test]
fn other_tool_prefixes_are_rejected() {
    assert!(extract("/** @psalm-var Foo $x */").is_empty());
    assert!(extract("/** @phpstan-var Foo $x */").is_empty());
}

#[test]
fn whitespace_is_mandatory() {
    assert!(extract("/** @varFoo $x */").is_empty());
    assert!(extract("/** @var Foo$x */").is_empty());
}

#[test]
fn dangling_pipe_is_rejected() {
    assert!(extract("/** @var Foo| $x */").is_empty());
    assert!(extract("/** @var Foo|$x */").is_empty());
}

#[test]
fn types_outside_the_grammar_are_rejected() {
    assert!(extract("/** @var ?Foo $x */").is_empty());
    assert!(extract("/** @var array<int, Foo> $x */").is_empty());
    assert!(extract("/** @var Foo[ $x */").is_empty());
    assert!(extract("/** @var array{a: Foo} $x */").is_empty());
}

#[test]
fn docblock_continuation_marker_breaks_the_match() {
    assert!(extract("/**\n * @var Foo\n * $x\n */").is_empty());
}

#[test]
fn a_rejected_annotation_does_not_hide_a_later_one() {
    assert_eq!(
        extract("/** @var $oops */ /** @var Real $x */"),
        vec![pair("Real", "x")]
    );
}

// ─── Union-type prefix length ───────────────────────────────────────

#[test]
fn union_prefix_lengths() {
    assert_eq!(scan_union_type("Foo|Bar $x"), 7);
    assert_eq!(scan_union_type("Foo| $x"), 3);
    assert_eq!(scan_union_type("Foo[][]|int rest"), 11);
    assert_eq!(scan_union_type("\\A\\B"), 4);
    assert_eq!(scan_union_type("$x"), 0);
    assert_eq!(scan_union_type(""), 0);
}
