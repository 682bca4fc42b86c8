/// Project configuration.
///
/// Settings are read from `.phpantom-inline-var.toml` in the project root.
/// A missing file means "all defaults":
///
/// ```toml
/// # Directories whose PHP files are indexed into the symbol table.
/// directories = ["."]
/// # Path prefixes (relative to the root) that are indexed but not checked.
/// exclude_analysis = ["vendor/"]
/// # Extra class names to treat as declared (e.g. extension classes).
/// known_classes = ["\\Redis"]
/// # "tokenizer" or "whole-file".
/// scan_strategy = "tokenizer"
/// ```
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::scanner::ScanStrategy;

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".phpantom-inline-var.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub directories: Vec<PathBuf>,
    pub exclude_analysis: Vec<String>,
    pub known_classes: Vec<String>,
    pub scan_strategy: ScanStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directories: vec![PathBuf::from(".")],
            exclude_analysis: vec!["vendor/".to_string()],
            known_classes: Vec::new(),
            scan_strategy: ScanStrategy::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid configuration in {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the configuration for a project.
    ///
    /// An `explicit` path must exist.  Otherwise `CONFIG_FILE_NAME` in
    /// `root` is used when present, and defaults when it is not.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    tracing::debug!(root = %root.display(), "no configuration file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&text, &path)
    }

    /// Whether a path relative to the project root falls under one of the
    /// `exclude_analysis` prefixes.  Matching is per path component, so
    /// `vendor/` excludes `vendor/a.php` but not `vendored/a.php`.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let relative = relative.strip_prefix(".").unwrap_or(relative);
        self.exclude_analysis.iter().any(|prefix| {
            let prefix = Path::new(prefix.as_str());
            let prefix = prefix.strip_prefix(".").unwrap_or(prefix);
            !prefix.as_os_str().is_empty() && relative.starts_with(prefix)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("", Path::new("x.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let text = r#"
            directories = ["src", "vendor"]
            exclude_analysis = ["vendor/", "tests/fixtures"]
            known_classes = ["\\Redis"]
            scan_strategy = "whole-file"
        "#;
        let config = Config::from_toml(text, Path::new("x.toml")).unwrap();
        assert_eq!(
            config.directories,
            vec![PathBuf::from("src"), PathBuf::from("vendor")]
        );
        assert_eq!(config.known_classes, vec!["\\Redis".to_string()]);
        assert_eq!(config.scan_strategy, ScanStrategy::WholeFile);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = Config::from_toml("directory = []", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn exclusion_matches_whole_components() {
        let config = Config::default();
        assert!(config.is_excluded(Path::new("vendor/acme/lib/Foo.php")));
        assert!(config.is_excluded(Path::new("./vendor/Foo.php")));
        assert!(!config.is_excluded(Path::new("vendored/Foo.php")));
        assert!(!config.is_excluded(Path::new("src/vendor.php")));
    }
}
