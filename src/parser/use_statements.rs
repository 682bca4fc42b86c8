/// `use` imports and namespace names.
///
/// Annotation types only ever name classes, so `use function` and
/// `use const` imports are ignored.
use std::collections::HashMap;

use mago_syntax::ast::*;

use crate::util::short_name;

/// Record the class imports of one `use` statement in `imports`, keyed by
/// the name the file refers to them by.
pub(super) fn extract_use_items(items: &UseItems, imports: &mut HashMap<String, String>) {
    match items {
        // `use A\B;`, `use A\B as C, D\E;`
        UseItems::Sequence(seq) => {
            for item in seq.items.iter() {
                import_class(item, None, imports);
            }
        }
        // `use A\{B, function c, const D};`
        UseItems::MixedList(list) => {
            let group = list.namespace.value();
            for entry in list.items.iter().filter(|entry| entry.r#type.is_none()) {
                import_class(&entry.item, Some(group), imports);
            }
        }
        // `use function ...` / `use const ...`, in either form.
        UseItems::TypedSequence(_) | UseItems::TypedList(_) => {}
    }
}

fn import_class(item: &UseItem, group: Option<&str>, imports: &mut HashMap<String, String>) {
    let name = item.name.value().trim_start_matches('\\');
    let fqn = match group {
        Some(group) => format!("{}\\{}", group.trim_matches('\\'), name),
        None => name.to_string(),
    };
    let key = item
        .alias
        .as_ref()
        .map_or_else(|| short_name(&fqn).to_string(), |alias| alias.identifier.value.to_string());

    imports.insert(key, fqn);
}

/// The declared name of a namespace statement; `None` for the global
/// (unnamed) namespace block.
pub(super) fn namespace_name(namespace: &Namespace) -> Option<String> {
    namespace
        .name
        .as_ref()
        .map(|ident| ident.value().trim_start_matches('\\'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
