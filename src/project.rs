/// Project host: indexing and checking a PHP code base on disk.
///
/// [`Project::load`] walks the configured directories (honouring
/// `.gitignore` and friends via the `ignore` crate), parses every `.php`
/// file, and builds the symbol table from the class-likes it declares plus
/// PHP's builtin classes and any configured `known_classes`.
///
/// [`Project::check`] then hands every declaration to an
/// [`InlineVarChecker`], which analyzes each file at most once.
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::checker::{AnalysisError, FileModel, InlineVarChecker};
use crate::config::Config;
use crate::parser::{ParsedFile, parse_file};
use crate::resolution::SymbolTable;
use crate::stubs;
use crate::types::{ClassDeclaration, FileRef, Issue, ResolutionContext};
use crate::util::normalize_fqsen;

/// A parsed file of the project.
#[derive(Debug, Clone)]
struct IndexedFile {
    path: PathBuf,
    parsed: ParsedFile,
}

/// Outcome of checking a project.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub issues: Vec<Issue>,
    /// Files that could not be analyzed.  They do not stop the run.
    pub errors: Vec<AnalysisError>,
    /// Number of files that were actually scanned.
    pub files_analyzed: usize,
}

/// An indexed PHP code base.
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    config: Config,
    files: Vec<IndexedFile>,
    /// Lower-cased `\A\B` names of every known class-like.
    symbols: HashSet<String>,
}

impl Project {
    /// Create an empty project seeded with builtin and configured classes.
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        let mut symbols: HashSet<String> = stubs::builtin_fqsens()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        for name in &config.known_classes {
            symbols.insert(normalize_fqsen(name).to_ascii_lowercase());
        }

        Self {
            root: root.into(),
            config,
            files: Vec::new(),
            symbols,
        }
    }

    /// Walk the configured directories and index every PHP file found.
    pub fn load(root: impl Into<PathBuf>, config: Config) -> Self {
        let mut project = Self::new(root, config);

        let directories: Vec<PathBuf> = project
            .config
            .directories
            .iter()
            // Collecting components drops `.` segments so reported paths
            // strip cleanly against the root.
            .map(|dir| project.root.join(dir).components().collect())
            .collect();

        for dir in directories {
            for entry in WalkBuilder::new(&dir).build() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::warn!(error = %err, "skipping unreadable directory entry");
                        continue;
                    }
                };
                let path = entry.path();
                if !entry.file_type().is_some_and(|t| t.is_file())
                    || path.extension().and_then(|e| e.to_str()) != Some("php")
                {
                    continue;
                }
                match std::fs::read_to_string(path) {
                    Ok(content) => project.add_source(path, &content),
                    Err(err) => {
                        tracing::warn!(file = %path.display(), error = %err, "could not read file")
                    }
                }
            }
        }

        tracing::info!(
            files = project.files.len(),
            classes = project.symbols.len(),
            "indexed project"
        );
        project
    }

    /// Parse `content` as the file at `path` and add its declarations to
    /// the index.  Indexing the same path twice keeps both copies of its
    /// declarations but the checker still scans it once.
    pub fn add_source(&mut self, path: &Path, content: &str) {
        let Some(parsed) = parse_file(content) else {
            tracing::warn!(file = %path.display(), "skipping file the parser could not handle");
            return;
        };

        for class in &parsed.classes {
            self.symbols.insert(class.fqsen.to_ascii_lowercase());
        }
        self.files.push(IndexedFile {
            path: path.to_path_buf(),
            parsed,
        });
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every class-like declaration of the project, in file order, with
    /// the resolution context the checker needs.
    pub fn declarations(&self) -> impl Iterator<Item = ClassDeclaration> + '_ {
        self.files.iter().flat_map(|file| {
            file.parsed.classes.iter().map(move |class| {
                let mut context = ResolutionContext::new(&file.path, class.line, &class.fqsen);
                context.namespace = file.parsed.namespace.clone();
                context.imports = file.parsed.imports.clone();
                context.template_params = class.template_params.clone();

                ClassDeclaration {
                    file: FileRef::Path(file.path.clone()),
                    context,
                }
            })
        })
    }

    /// Run the checker over every declaration.
    pub fn check(&self, checker: &InlineVarChecker) -> CheckReport {
        let mut report = CheckReport::default();
        let before = checker.analyzed_files().len();

        for mut declaration in self.declarations() {
            if let Err(err) = checker.analyze_class(
                &declaration.file,
                &mut declaration.context,
                self,
                &mut report.issues,
            ) {
                tracing::warn!(error = %err, "file analysis failed");
                report.errors.push(err);
            }
        }

        report.files_analyzed = checker.analyzed_files().len().saturating_sub(before);
        tracing::info!(
            files = report.files_analyzed,
            issues = report.issues.len(),
            "inline @var check finished"
        );
        report
    }
}

impl SymbolTable for Project {
    fn has_class(&self, fqsen: &str) -> bool {
        self.symbols
            .contains(&normalize_fqsen(fqsen).to_ascii_lowercase())
    }
}

impl FileModel for Project {
    fn is_excluded_from_analysis(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.config.is_excluded(relative)
    }

    fn read_contents(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
