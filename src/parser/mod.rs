/// PHP parsing and declaration extraction.
///
/// This module parses PHP source text with the mago_syntax parser and
/// extracts what the project host needs to drive the checker: the file's
/// namespace, its `use` imports, and every class-like declaration (class,
/// interface, trait, enum) with its fully-qualified name, start line and
/// `@template` parameters.
///
/// Sub-modules:
/// - [`classes`]: class-like declaration extraction
/// - [`use_statements`]: `use` statement and namespace extraction
mod classes;
mod use_statements;

use std::collections::HashMap;
use std::panic;

use bumpalo::Bump;
use mago_syntax::ast::*;
use mago_syntax::parser::parse_file_content;

/// Context for reading class docblocks.
///
/// Bundles the program's trivia (comments/whitespace) and the raw source
/// text so that extraction functions can look up the `/** ... */` comment
/// preceding any AST node.
pub(crate) struct DocblockCtx<'a> {
    pub trivias: &'a [Trivia<'a>],
    pub content: &'a str,
}

/// A class, interface, trait or enum declared in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredClass {
    /// Fully-qualified name with leading `\` (e.g. `\App\Models\User`).
    pub fqsen: String,
    /// 1-based line the declaration starts on.
    pub line: u32,
    /// `@template` parameter names from the declaration's docblock.
    pub template_params: Vec<String>,
}

/// Everything the host extracts from a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    /// The first namespace declared in the file, if any.
    pub namespace: Option<String>,
    /// `use` imports: short (or aliased) name → fully-qualified name.
    pub imports: HashMap<String, String>,
    pub classes: Vec<DeclaredClass>,
}

/// Parse PHP source text and extract its namespace, imports and
/// class-like declarations.
///
/// Returns `None` if the parser panicked on the input.
pub fn parse_file(content: &str) -> Option<ParsedFile> {
    // The mago-syntax parser contains `unreachable!()` and `.expect()`
    // calls that can panic on malformed PHP.  A panic skips the file.
    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        let arena = Bump::new();
        let file_id = mago_database::file::FileId::new("input.php");
        let program = parse_file_content(&arena, file_id, content);

        let doc_ctx = DocblockCtx {
            trivias: program.trivia.as_slice(),
            content,
        };

        let mut parsed = ParsedFile::default();
        walk_statements(program.statements.iter(), None, &doc_ctx, &mut parsed);
        parsed
    }));

    match result {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::error!("parser panicked while extracting declarations");
            None
        }
    }
}

/// Walk statements, descending into namespace bodies, and fill `parsed`.
fn walk_statements<'a>(
    statements: impl Iterator<Item = &'a Statement<'a>>,
    namespace: Option<&str>,
    doc_ctx: &DocblockCtx<'a>,
    parsed: &mut ParsedFile,
) {
    for statement in statements {
        match statement {
            Statement::Use(use_stmt) => {
                use_statements::extract_use_items(&use_stmt.items, &mut parsed.imports);
            }
            Statement::Namespace(ns) => {
                let name = use_statements::namespace_name(ns);
                if parsed.namespace.is_none() {
                    parsed.namespace = name.clone();
                }
                walk_statements(ns.statements().iter(), name.as_deref(), doc_ctx, parsed);
            }
            other => {
                if let Some(class) = classes::extract_class_like(other, namespace, doc_ctx) {
                    parsed.classes.push(class);
                }
            }
        }
    }
}
