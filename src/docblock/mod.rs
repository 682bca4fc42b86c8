//! PHPDoc annotation parsing.
//!
//! This module owns the annotation grammar of the checker: how an inline
//! `@var` tag is recognised inside a comment, and how the union-type
//! expression it carries is split into atomic, classified type references.
//!
//! # Submodules
//!
//! - [`tags`]: `@var` / `@phan-var` extraction, `@template` extraction and
//!   docblock lookup for AST nodes.
//! - [`types`]: the union-type grammar (`Foo|\Bar\Baz[]|int`) and the
//!   native / `self` / template / class-like classification.

mod tags;
pub(crate) mod types;

// Tags
pub use tags::{extract_template_params, extract_var_annotations, get_docblock_text_for_node};

// Type grammar
pub use types::{
    AtomicType, classify_type_name, is_native_type, is_self_or_static, parse_union_type,
    scan_union_type, split_union_type,
};
