//! Data-driven checks: each `tests/fixtures/*.fixture` file holds a header
//! of directives, a `---` separator, and the PHP source to check.
//!
//! Header directives, one per line (`#` starts a comment):
//!
//! ```text
//! expect <line> <fqsen>     an issue that must be reported, in order
//! known <fqsen>             an extra declared class
//! strategy whole-file       scan the file without the tokenizer
//! ```
//!
//! A fixture without `expect` lines must produce no issues.

use std::path::Path;

use phpantom_inline_var::config::Config;
use phpantom_inline_var::project::Project;
use phpantom_inline_var::report;
use phpantom_inline_var::{InlineVarChecker, ScanStrategy};

struct Fixture {
    expected: Vec<(u32, String)>,
    config: Config,
    source: String,
}

fn parse_fixture(contents: &str) -> datatest_stable::Result<Fixture> {
    let (header, source) = contents
        .split_once("\n---\n")
        .ok_or("fixture is missing the `---` separator")?;

    let mut fixture = Fixture {
        expected: Vec::new(),
        config: Config::default(),
        source: source.to_string(),
    };

    for line in header.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("expect"), Some(at), Some(fqsen)) => {
                fixture.expected.push((at.parse()?, fqsen.to_string()));
            }
            (Some("known"), Some(fqsen), None) => {
                fixture.config.known_classes.push(fqsen.to_string());
            }
            (Some("strategy"), Some("whole-file"), None) => {
                fixture.config.scan_strategy = ScanStrategy::WholeFile;
            }
            _ => return Err(format!("unrecognised directive: {line}").into()),
        }
    }
    Ok(fixture)
}

fn run(path: &Path, contents: String) -> datatest_stable::Result<()> {
    let fixture = parse_fixture(&contents)?;

    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("fixture.php"), &fixture.source)?;

    let checker = InlineVarChecker::new(fixture.config.scan_strategy);
    let project = Project::load(dir.path(), fixture.config);
    let mut outcome = project.check(&checker);

    if let Some(err) = outcome.errors.first() {
        return Err(format!("{}: {err}", path.display()).into());
    }

    report::sort_issues(&mut outcome.issues);
    let actual: Vec<(u32, String)> = outcome
        .issues
        .iter()
        .map(|issue| (issue.line, issue.fqsen().to_string()))
        .collect();

    if actual != fixture.expected {
        return Err(format!(
            "{}: expected {:?}, got {:?}",
            path.display(),
            fixture.expected,
            actual
        )
        .into());
    }
    Ok(())
}

datatest_stable::harness! {
    { test = run, root = "tests/fixtures", pattern = r"^.*\.fixture$" },
}
