/// Rendering of issues for the command line.
use std::path::Path;

use serde::Serialize;

use crate::types::Issue;

/// Output format of the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `path:line: Kind message`, one issue per line.
    #[default]
    Text,
    /// A JSON array of issue objects.
    Json,
}

#[derive(Debug, Serialize)]
struct JsonIssue<'a> {
    kind: &'a str,
    message: String,
    class: &'a str,
    file: String,
    line: u32,
    context: &'a str,
}

/// Sort issues by file, then line.  Issues on the same line keep their
/// emission order.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));
}

/// Render `issues` in `format`.  File paths are shown relative to `root`
/// when possible.
pub fn render(issues: &[Issue], format: OutputFormat, root: &Path) -> String {
    match format {
        OutputFormat::Text => issues
            .iter()
            .map(|issue| {
                format!(
                    "{}:{}: {} {}\n",
                    display_path(&issue.file, root),
                    issue.line,
                    issue.kind,
                    issue.message()
                )
            })
            .collect(),
        OutputFormat::Json => {
            let entries: Vec<JsonIssue<'_>> = issues
                .iter()
                .map(|issue| JsonIssue {
                    kind: issue.kind,
                    message: issue.message(),
                    class: issue.fqsen(),
                    file: display_path(&issue.file, root),
                    line: issue.line,
                    context: &issue.class_fqsen,
                })
                .collect();
            // Serializing plain strings and integers cannot fail.
            serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
