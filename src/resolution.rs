/// Class-name resolution for inline `@var` types.
///
/// Turns the class-like members of a union type into fully-qualified names
/// and asks the host's symbol table whether each one exists.
///
/// # Name resolution
///
/// Names follow PHP's class-name rules, relative to the enclosing
/// declaration's file:
///
///   - Fully-qualified names (`\PDO`, `\App\User`) are taken as-is.
///   - Unqualified and qualified names whose first segment matches a `use`
///     import are expanded through that import (`Carbon` → `\Carbon\Carbon`,
///     `Models\User` with `use App\Models;` → `\App\Models\User`).
///   - Everything else is prefixed with the file's namespace.  Class names
///     do NOT fall back to the global namespace.
use crate::docblock::parse_union_type;
use crate::types::{ResolutionContext, TypeReference};

/// Answers "does a class-like with this fully-qualified name exist?".
///
/// Names are passed in the canonical `\A\B` form.  PHP class names are
/// case-insensitive, so implementations should compare accordingly.
pub trait SymbolTable {
    fn has_class(&self, fqsen: &str) -> bool;
}

/// Resolve a class name as written in an annotation to its canonical
/// fully-qualified `\A\B` form.
pub fn resolve_class_name(name: &str, context: &ResolutionContext) -> String {
    if let Some(stripped) = name.strip_prefix('\\') {
        return format!("\\{}", stripped);
    }

    let (first_segment, rest) = match name.split_once('\\') {
        Some((first, rest)) => (first, Some(rest)),
        None => (name, None),
    };

    if let Some(imported) = lookup_import(context, first_segment) {
        return match rest {
            Some(rest) => format!("\\{}\\{}", imported, rest),
            None => format!("\\{}", imported),
        };
    }

    match &context.namespace {
        Some(ns) => format!("\\{}\\{}", ns, name),
        None => format!("\\{}", name),
    }
}

/// Look up an import alias; aliases are case-insensitive like class names.
fn lookup_import<'c>(context: &'c ResolutionContext, alias: &str) -> Option<&'c str> {
    if let Some(fqn) = context.imports.get(alias) {
        return Some(fqn);
    }
    context
        .imports
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(alias))
        .map(|(_, fqn)| fqn.as_str())
}

/// Resolve one classified reference.
///
/// Returns the fully-qualified name when the reference is a class-like
/// that the symbol table does not know, `None` otherwise.
pub fn unresolved_reference<S>(
    reference: &TypeReference,
    context: &ResolutionContext,
    symbols: &S,
) -> Option<String>
where
    S: SymbolTable + ?Sized,
{
    match reference {
        TypeReference::ClassLike(name) => {
            let fqsen = resolve_class_name(name, context);
            (!symbols.has_class(&fqsen)).then_some(fqsen)
        }
        TypeReference::Native(_)
        | TypeReference::SelfOrStatic
        | TypeReference::TemplateParameter(_) => None,
    }
}

/// Yield the fully-qualified names of every class-like in `union_type`
/// that the symbol table does not know, in the order they were written.
///
/// An empty or malformed union type yields nothing.
pub fn missing_classes<S>(union_type: &str, context: &ResolutionContext, symbols: &S) -> Vec<String>
where
    S: SymbolTable + ?Sized,
{
    parse_union_type(union_type, &context.template_params)
        .iter()
        .filter_map(|reference| unresolved_reference(reference, context, symbols))
        .collect()
}
