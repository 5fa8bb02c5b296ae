use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pedantic_lint::config::{Config, DEFAULT_CONFIG};
use pedantic_lint::printer::PrintedMessage;
use pedantic_lint::{Analyzer, AuditReport, RecordingPrinter, TerminalPrinter};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "pedantic.toml";

#[derive(Parser)]
#[command(
    name = "pedantic-lint",
    version,
    about = "Naming-convention audit for graph schemas and pipelines"
)]
struct Cli {
    /// Enable debug logging (overrides PEDANTIC_LOG)
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Audit a project manifest.
    Check {
        /// Project manifest (.toml or .json).
        #[arg(default_value = "pedantic-project.toml")]
        project: PathBuf,

        /// Only run a specific rule (e.g., "node-singular").
        #[arg(long)]
        rule: Option<String>,

        /// Config file path.
        #[arg(long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Human)]
        format: Format,
    },

    /// List all available rules.
    ListRules,

    /// Generate a default pedantic.toml.
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Human,
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    messages: &'a [PrintedMessage],
    report: &'a AuditReport,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Command::Check {
            project,
            rule,
            config,
            format,
        } => match run_check(&project, &config, rule.as_deref(), format).await {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
        Command::ListRules => {
            run_list_rules();
            ExitCode::SUCCESS
        }
        Command::Init => run_init(),
    }
}

/// Level from `PEDANTIC_LOG`, default `warn`; `--debug` forces `debug`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("PEDANTIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(true)` when no error-severity finding was reported.
async fn run_check(
    project: &Path,
    config_path: &Path,
    rule_filter: Option<&str>,
    format: Format,
) -> anyhow::Result<bool> {
    let config = if config_path.exists() {
        Config::from_file(config_path)?
    } else {
        debug!(path = %config_path.display(), "No config file, using defaults");
        Config::default()
    };

    let project = if project.is_absolute() {
        project.to_path_buf()
    } else {
        std::env::current_dir()
            .context("failed to get current directory")?
            .join(project)
    };

    let analyzer = Analyzer::new(project, config).with_rule_filter(rule_filter);

    let report = match format {
        Format::Human => {
            let report = analyzer.analyze(TerminalPrinter).await?;
            if !report.is_clean() {
                eprintln!("\n{}", report.summary());
            }
            report
        }
        Format::Json => {
            let mut printer = RecordingPrinter::new();
            let report = analyzer.analyze(&mut printer).await?;
            let output = JsonOutput {
                messages: printer.messages(),
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            report
        }
    };

    Ok(!report.has_errors())
}

fn run_list_rules() {
    eprintln!("Available rules:\n");
    for (name, desc) in pedantic_lint::rules::ALL_RULES {
        eprintln!("  {name}");
        eprintln!("    {desc}\n");
    }
}

fn run_init() -> ExitCode {
    let path = PathBuf::from(CONFIG_FILE);
    if path.exists() {
        eprintln!("{CONFIG_FILE} already exists");
        return ExitCode::FAILURE;
    }

    match std::fs::write(&path, DEFAULT_CONFIG) {
        Ok(()) => {
            eprintln!("Created {CONFIG_FILE}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write {CONFIG_FILE}: {e}");
            ExitCode::FAILURE
        }
    }
}
