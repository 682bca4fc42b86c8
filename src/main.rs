use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use phpantom_inline_var::config::Config;
use phpantom_inline_var::project::Project;
use phpantom_inline_var::report::{self, OutputFormat};
use phpantom_inline_var::{InlineVarChecker, ScanStrategy};

/// Report inline `@var` annotations that reference undeclared classes.
#[derive(Debug, Parser)]
#[command(name = "phpantom-inline-var", version, about)]
struct Cli {
    /// Project root.
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to `.phpantom-inline-var.toml` in the root).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Scan each file as a whole instead of lexing its comments.
    #[arg(long)]
    no_tokenizer: bool,

    /// Additional path prefix to index but not check (repeatable).
    #[arg(long = "exclude", value_name = "PREFIX")]
    exclude: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PHPANTOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = Config::load(&cli.root, cli.config.as_deref())
        .with_context(|| format!("loading configuration for {}", cli.root.display()))?;
    config.exclude_analysis.extend(cli.exclude);
    if cli.no_tokenizer {
        config.scan_strategy = ScanStrategy::WholeFile;
    }

    let checker = InlineVarChecker::new(config.scan_strategy);
    let project = Project::load(&cli.root, config);
    let mut outcome = project.check(&checker);

    for err in &outcome.errors {
        eprintln!("warning: {}", err);
    }

    report::sort_issues(&mut outcome.issues);
    let rendered = report::render(&outcome.issues, cli.format, project.root());
    match cli.format {
        OutputFormat::Json => println!("{}", rendered),
        OutputFormat::Text => print!("{}", rendered),
    }

    Ok(if outcome.issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
