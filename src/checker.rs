//! Per-file inline `@var` analysis.
//!
//! [`InlineVarChecker`] is the entry point the host calls once for every
//! class-like declaration it discovers.  Because a file may declare several
//! class-likes, the checker remembers which files it has already analyzed
//! (see [`AnalyzedFiles`]) and scans each file at most once.
//!
//! For a file that has not been seen yet the pipeline is:
//!
//!   1. scan the file for comments ([`crate::scanner`]),
//!   2. extract `@var` annotations from each comment ([`crate::docblock`]),
//!   3. resolve every class-like type they mention
//!      ([`crate::resolution`]),
//!   4. emit one [`Issue`] per unresolved type.
//!
//! While a comment is processed, the declaration's reporting line is set
//! to the comment's line; the original line is restored on every exit.

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::docblock::extract_var_annotations;
use crate::resolution::{SymbolTable, missing_classes};
use crate::scanner::{ScanStrategy, scan_comments};
use crate::types::{ClassDeclaration, FileRef, Issue, IssueSink, ResolutionContext};

/// Host-side file access.
pub trait FileModel {
    /// Whether the host wants this file skipped (e.g. vendor code that is
    /// only parsed for its declarations).
    fn is_excluded_from_analysis(&self, path: &Path) -> bool;

    /// Read the file's source text.
    fn read_contents(&self, path: &Path) -> io::Result<String>;
}

/// Failure to analyze a single file.  Other files are unaffected.
#[derive(Debug)]
pub enum AnalysisError {
    /// The file could not be read (e.g. deleted after discovery).
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Read { source, .. } => Some(source),
        }
    }
}

/// The set of files that have already been analyzed.
///
/// Cloning the handle shares the underlying set, so several checkers can
/// cooperate on one table.  A freshly constructed set knows nothing about
/// files analyzed elsewhere: two independent sets (or processes) will each
/// analyze a file once, which is redundant but yields the same issues.
#[derive(Debug, Clone, Default)]
pub struct AnalyzedFiles {
    inner: Arc<Mutex<HashSet<PathBuf>>>,
}

impl AnalyzedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.inner.lock().contains(path)
    }

    /// Record `path` as analyzed.  Returns `false` if it already was.
    pub fn mark(&self, path: &Path) -> bool {
        self.inner.lock().insert(path.to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

/// Scoped override of a context's reporting line.
///
/// The original line is written back when the guard is dropped, including
/// during unwinding.
struct LineOverride<'c> {
    context: &'c mut ResolutionContext,
    original: u32,
}

impl<'c> LineOverride<'c> {
    fn new(context: &'c mut ResolutionContext) -> Self {
        let original = context.line;
        Self { context, original }
    }

    fn set(&mut self, line: u32) {
        self.context.line = line;
    }

    fn context(&self) -> &ResolutionContext {
        self.context
    }
}

impl Drop for LineOverride<'_> {
    fn drop(&mut self) {
        self.context.line = self.original;
    }
}

/// Finds inline `@var` annotations that reference undeclared class-likes.
#[derive(Debug, Clone, Default)]
pub struct InlineVarChecker {
    analyzed: AnalyzedFiles,
    strategy: ScanStrategy,
}

impl InlineVarChecker {
    /// Create a checker with its own, empty set of analyzed files.
    pub fn new(strategy: ScanStrategy) -> Self {
        Self::with_analyzed_files(AnalyzedFiles::new(), strategy)
    }

    /// Create a checker that records analyzed files in `analyzed`.
    pub fn with_analyzed_files(analyzed: AnalyzedFiles, strategy: ScanStrategy) -> Self {
        Self { analyzed, strategy }
    }

    pub fn analyzed_files(&self) -> &AnalyzedFiles {
        &self.analyzed
    }

    /// Analyze the file owning a class-like declaration, unless it is
    /// builtin, excluded, or already analyzed.
    ///
    /// Issues are handed to `sink` as they are found.  `context.line` is
    /// overridden per comment and restored before returning.
    ///
    /// A file is recorded as analyzed before it is read, so a read failure
    /// is reported once and not retried.  Excluded and builtin files are
    /// never recorded.
    pub fn analyze_class<H, S>(
        &self,
        file: &FileRef,
        context: &mut ResolutionContext,
        host: &H,
        sink: &mut S,
    ) -> Result<(), AnalysisError>
    where
        H: SymbolTable + FileModel + ?Sized,
        S: IssueSink + ?Sized,
    {
        let Some(path) = file.path() else {
            tracing::trace!(class = %context.class_fqsen, "skipping builtin declaration");
            return Ok(());
        };

        if host.is_excluded_from_analysis(path) {
            tracing::debug!(file = %path.display(), "skipping file excluded from analysis");
            return Ok(());
        }

        if !self.analyzed.mark(path) {
            tracing::trace!(file = %path.display(), "file already analyzed");
            return Ok(());
        }

        let content = host
            .read_contents(path)
            .map_err(|source| AnalysisError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(file = %path.display(), class = %context.class_fqsen, "analyzing inline @var annotations");

        let mut scope = LineOverride::new(context);
        let anchor_line = scope.original;

        for comment in scan_comments(&content, self.strategy, anchor_line) {
            scope.set(comment.line);

            for annotation in extract_var_annotations(comment.text, comment.line) {
                for fqsen in missing_classes(&annotation.type_text, scope.context(), host) {
                    sink.emit(Issue::undeclared_type(fqsen, scope.context()));
                }
            }
        }

        Ok(())
    }

    /// Analyze a declaration's file and collect its issues.
    ///
    /// Returns an empty list when the file was skipped.
    pub fn analyze_file_once<H>(
        &self,
        declaration: &mut ClassDeclaration,
        host: &H,
    ) -> Result<Vec<Issue>, AnalysisError>
    where
        H: SymbolTable + FileModel + ?Sized,
    {
        let mut issues = Vec::new();
        self.analyze_class(&declaration.file, &mut declaration.context, host, &mut issues)?;
        Ok(issues)
    }
}
