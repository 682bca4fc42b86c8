/// Class, interface, trait, and enum extraction.
use mago_span::HasSpan;
use mago_syntax::ast::*;

use crate::docblock;
use crate::util::offset_to_line;

use super::{DeclaredClass, DocblockCtx};

/// Extract a class-like declaration from a top-level (or namespace-level)
/// statement.  Returns `None` for every other kind of statement.
pub(super) fn extract_class_like<'a>(
    statement: &Statement<'a>,
    namespace: Option<&str>,
    doc_ctx: &DocblockCtx<'a>,
) -> Option<DeclaredClass> {
    let declared = match statement {
        Statement::Class(class) => declared_class(class.name.value, class, namespace, doc_ctx),
        Statement::Interface(iface) => declared_class(iface.name.value, iface, namespace, doc_ctx),
        Statement::Trait(trait_def) => {
            declared_class(trait_def.name.value, trait_def, namespace, doc_ctx)
        }
        Statement::Enum(enum_def) => {
            declared_class(enum_def.name.value, enum_def, namespace, doc_ctx)
        }
        _ => return None,
    };
    Some(declared)
}

fn declared_class<'a>(
    name: &str,
    node: &impl HasSpan,
    namespace: Option<&str>,
    doc_ctx: &DocblockCtx<'a>,
) -> DeclaredClass {
    let fqsen = match namespace {
        Some(ns) => format!("\\{}\\{}", ns, name),
        None => format!("\\{}", name),
    };

    let template_params =
        docblock::get_docblock_text_for_node(doc_ctx.trivias, doc_ctx.content, node)
            .map(docblock::extract_template_params)
            .unwrap_or_default();

    DeclaredClass {
        fqsen,
        line: offset_to_line(doc_ctx.content, node.span().start.offset as usize),
        template_params,
    }
}
