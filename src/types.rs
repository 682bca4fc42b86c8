//! Data types shared by the inline `@var` checker.
//!
//! This module contains the "model" structs and enums that flow through
//! the analysis pipeline: scanned comments, extracted annotations,
//! classified type references, the per-class resolution context, and the
//! diagnostics handed to the issue sink.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Issue kind tag attached to every diagnostic produced by the checker.
pub const UNDECLARED_TYPE_IN_INLINE_VAR: &str = "UndeclaredTypeInInlineVar";

/// Message template for [`UNDECLARED_TYPE_IN_INLINE_VAR`].  `{CLASS}` is
/// replaced with the offending fully-qualified name.
pub const UNDECLARED_TYPE_MESSAGE: &str =
    "The classlike {CLASS} in this \"var\" statement is undeclared";

/// A single comment found in a source file.
///
/// Borrows the file content; produced and consumed within one file's
/// analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedComment<'a> {
    /// The raw comment text, including its delimiters (`/** … */`, `// …`).
    pub text: &'a str,
    /// 1-based line on which the comment starts.
    pub line: u32,
}

/// One `@var` / `@phan-var` annotation extracted from a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMatch {
    /// The union-type expression exactly as written (e.g. `\App\Thing|null`).
    pub type_text: String,
    /// The variable name WITHOUT the `$` prefix (e.g. "x").
    pub variable: String,
    /// 1-based starting line of the comment the annotation was found in.
    pub line: u32,
}

/// A classified atomic type reference.
///
/// Array suffixes have already been unwrapped, so every variant describes
/// the innermost element type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    /// A built-in type such as `int`, `string[]`'s `string`, or `array`.
    Native(String),
    /// `self` or `static`.
    SelfOrStatic,
    /// A template parameter declared on the enclosing class-like.
    TemplateParameter(String),
    /// A class, interface, trait, or enum name as written in the annotation
    /// (a leading `\` is kept when present).
    ClassLike(String),
}

/// Where a class-like declaration lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileRef {
    /// Internal, builtin, or otherwise synthetic declaration with no file
    /// on disk.
    Builtin,
    /// A real source file.
    Path(PathBuf),
}

impl FileRef {
    /// The file path, or `None` for builtin declarations.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FileRef::Builtin => None,
            FileRef::Path(path) => Some(path),
        }
    }
}

/// Reporting and name-resolution context of a class-like declaration.
///
/// `line` is the "current line" used for every diagnostic produced in this
/// context.  The checker overrides it per comment and restores it before
/// returning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    /// The file the declaration was found in.
    pub file: PathBuf,
    /// Current reporting line (1-based).
    pub line: u32,
    /// Fully-qualified name of the enclosing class-like, with leading `\`.
    pub class_fqsen: String,
    /// Declared namespace of the file (e.g. `App\Models`), if any.
    pub namespace: Option<String>,
    /// `use` imports: short (or aliased) name → fully-qualified name
    /// without leading `\`.
    pub imports: HashMap<String, String>,
    /// `@template` parameter names declared on the enclosing class-like.
    pub template_params: Vec<String>,
}

impl ResolutionContext {
    pub fn new(file: impl Into<PathBuf>, line: u32, class_fqsen: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            class_fqsen: class_fqsen.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = if namespace.is_empty() {
            None
        } else {
            Some(namespace)
        };
        self
    }

    pub fn with_import(mut self, alias: impl Into<String>, fqn: impl Into<String>) -> Self {
        let fqn = fqn.into();
        let fqn = fqn.strip_prefix('\\').map(str::to_string).unwrap_or(fqn);
        self.imports.insert(alias.into(), fqn);
        self
    }

    pub fn with_template_param(mut self, name: impl Into<String>) -> Self {
        self.template_params.push(name.into());
        self
    }
}

/// A class-like declaration as handed to the checker by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub file: FileRef,
    pub context: ResolutionContext,
}

/// Diagnostic produced for one unresolved class-like reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue kind tag (always [`UNDECLARED_TYPE_IN_INLINE_VAR`]).
    pub kind: &'static str,
    /// Message template containing a `{CLASS}` placeholder.
    pub template: &'static str,
    /// Template arguments; the first is the offending FQSEN.
    pub args: Vec<String>,
    pub file: PathBuf,
    pub line: u32,
    /// The class-like whose context the issue was detected in.
    pub class_fqsen: String,
}

impl Issue {
    pub(crate) fn undeclared_type(fqsen: String, context: &ResolutionContext) -> Self {
        Self {
            kind: UNDECLARED_TYPE_IN_INLINE_VAR,
            template: UNDECLARED_TYPE_MESSAGE,
            args: vec![fqsen],
            file: context.file.clone(),
            line: context.line,
            class_fqsen: context.class_fqsen.clone(),
        }
    }

    /// The offending fully-qualified type name.
    pub fn fqsen(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or_default()
    }

    /// The message template with its `{CLASS}` placeholder filled in.
    pub fn message(&self) -> String {
        self.template.replace("{CLASS}", self.fqsen())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} {}",
            self.file.display(),
            self.line,
            self.kind,
            self.message()
        )
    }
}

/// Receives diagnostics as they are detected.
pub trait IssueSink {
    fn emit(&mut self, issue: Issue);
}

impl IssueSink for Vec<Issue> {
    fn emit(&mut self, issue: Issue) {
        self.push(issue);
    }
}
