#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use phpantom_inline_var::{
    ClassDeclaration, FileModel, FileRef, ResolutionContext, SymbolTable, normalize_fqsen,
};

/// In-memory host: a handful of files, a set of declared classes, and an
/// exclusion list that can change between calls.
#[derive(Default)]
pub struct MemoryHost {
    files: HashMap<PathBuf, String>,
    classes: HashSet<String>,
    excluded: RefCell<HashSet<PathBuf>>,
    reads: Cell<usize>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_class(mut self, fqsen: &str) -> Self {
        self.classes
            .insert(normalize_fqsen(fqsen).to_ascii_lowercase());
        self
    }

    pub fn exclude(&self, path: &str) {
        self.excluded.borrow_mut().insert(PathBuf::from(path));
    }

    pub fn include(&self, path: &str) {
        self.excluded.borrow_mut().remove(Path::new(path));
    }

    /// Number of `read_contents` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl SymbolTable for MemoryHost {
    fn has_class(&self, fqsen: &str) -> bool {
        self.classes
            .contains(&normalize_fqsen(fqsen).to_ascii_lowercase())
    }
}

impl FileModel for MemoryHost {
    fn is_excluded_from_analysis(&self, path: &Path) -> bool {
        self.excluded.borrow().contains(path)
    }

    fn read_contents(&self, path: &Path) -> io::Result<String> {
        self.reads.set(self.reads.get() + 1);
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

/// A declaration of `fqsen` starting on `line` of `path`.
pub fn declaration(path: &str, line: u32, fqsen: &str) -> ClassDeclaration {
    ClassDeclaration {
        file: FileRef::Path(PathBuf::from(path)),
        context: ResolutionContext::new(path, line, fqsen),
    }
}

/// `(line, fqsen)` pairs of a list of issues, for compact assertions.
pub fn lines_and_names(issues: &[phpantom_inline_var::Issue]) -> Vec<(u32, String)> {
    issues
        .iter()
        .map(|i| (i.line, i.fqsen().to_string()))
        .collect()
}
