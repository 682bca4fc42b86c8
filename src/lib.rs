//! Detects inline `@var` PHPDoc annotations that reference class-likes the
//! code base does not declare.
//!
//! ```php
//! /** @var \App\Models\Usr $user */   // typo: reported
//! /** @var Carbon $date */            // missing `use`: reported
//! /** @var int[]|self $x */           // never reported
//! ```
//!
//! The engine is made of small pieces:
//!
//! - [`scanner`]: finds comments in a file (lexer trivia, or the whole file
//!   as a fallback).
//! - [`docblock`]: the `@var` annotation grammar and the union-type
//!   grammar.
//! - [`resolution`]: PHP class-name resolution against a [`SymbolTable`].
//! - [`checker`]: the per-declaration entry point with its analyzed-file
//!   memo and issue emission.
//!
//! The [`project`], [`parser`], [`config`], [`stubs`] and [`report`]
//! modules form a host that indexes a project on disk and drives the
//! checker; the `phpantom-inline-var` binary wraps them.

pub mod checker;
pub mod config;
pub mod docblock;
pub mod parser;
pub mod project;
pub mod report;
pub mod resolution;
pub mod scanner;
pub mod stubs;
pub mod types;
mod util;

pub use checker::{AnalysisError, AnalyzedFiles, FileModel, InlineVarChecker};
pub use resolution::SymbolTable;
pub use scanner::ScanStrategy;
pub use types::{
    AnnotationMatch, ClassDeclaration, FileRef, Issue, IssueSink, ResolutionContext,
    ScannedComment, TypeReference,
};
pub use util::normalize_fqsen;
