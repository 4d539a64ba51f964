//! buildsum CLI - build report generation tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;

use buildsum::{
    console_summary, generate_report, to_html, to_markdown, ArgumentList, BuildOutcome,
    BuildRecord, BuildSettings, ReportDocument, ReportPublisher, DEFAULT_OUTPUT_DIR,
};

/// Flag names whose values are masked in reports and logs.
const SECRET_FLAGS: &[&str] = &[
    "keystoreName",
    "keystorePass",
    "keyaliasName",
    "keyaliasPass",
    "accessToken",
];

#[derive(Parser)]
#[command(name = "buildsum")]
#[command(author = "bennyght")]
#[command(version)]
#[command(about = "Render build records as Markdown and HTML reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish all report formats for a build record
    Report {
        /// Build record JSON file
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        /// Report output directory
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Echo the plain-text summary to stdout
        #[arg(long)]
        console: bool,

        /// Exit with the build outcome code (0/101/102/103)
        #[arg(long)]
        exit_with_outcome: bool,

        /// Build arguments to include in the report, e.g. `-- -buildTarget Android`
        #[arg(last = true)]
        build_args: Vec<String>,
    },

    /// Print the Markdown report to stdout
    #[command(alias = "md")]
    Markdown {
        /// Build record JSON file
        #[arg(value_name = "RECORD")]
        record: PathBuf,
    },

    /// Print the HTML report to stdout
    Html {
        /// Build record JSON file
        #[arg(value_name = "RECORD")]
        record: PathBuf,
    },
}

/// Serialized input: the build record plus the settings snapshot captured
/// by the build driver.
#[derive(Deserialize)]
struct ReportInput {
    record: BuildRecord,
    settings: BuildSettings,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report {
            record,
            output,
            console,
            exit_with_outcome,
            build_args,
        } => cmd_report(&record, &output, console, exit_with_outcome, &build_args),
        Commands::Markdown { record } => cmd_print(&record, to_markdown),
        Commands::Html { record } => cmd_print(&record, to_html),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_input(path: &Path) -> buildsum::Result<ReportInput> {
    let data = fs::read_to_string(path)?;
    let input: ReportInput = serde_json::from_str(&data)?;
    log::debug!(
        "loaded {} build record from {}",
        input.record.outcome,
        path.display()
    );
    Ok(input)
}

fn cmd_report(
    record_path: &Path,
    output: &Path,
    console: bool,
    exit_with_outcome: bool,
    build_args: &[String],
) -> buildsum::Result<()> {
    let input = load_input(record_path)?;
    let arguments = ArgumentList::parse(build_args, SECRET_FLAGS);

    let doc = generate_report(&input.record, &input.settings, &arguments);

    if console {
        println!("{}", console_summary(&doc)?);
    }

    let publisher = ReportPublisher::with_defaults(output);
    let outcomes = publisher.publish(&doc);

    let mut failed = false;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => {
                println!("{} {}", "Saved to".green(), outcome.path.display());
            }
            Err(err) => {
                eprintln!("{}: {}", "Error".red().bold(), err);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }

    if exit_with_outcome {
        std::process::exit(outcome_exit_code(input.record.outcome));
    }

    Ok(())
}

fn cmd_print(
    record_path: &Path,
    render: fn(&ReportDocument) -> buildsum::Result<String>,
) -> buildsum::Result<()> {
    let input = load_input(record_path)?;
    let doc = generate_report(&input.record, &input.settings, &ArgumentList::new());
    println!("{}", render(&doc)?);
    Ok(())
}

/// Exit codes understood by the CI pipeline driving this tool.
fn outcome_exit_code(outcome: BuildOutcome) -> i32 {
    match outcome {
        BuildOutcome::Succeeded => 0,
        BuildOutcome::Failed => 101,
        BuildOutcome::Cancelled => 102,
        BuildOutcome::Unknown => 103,
    }
}
