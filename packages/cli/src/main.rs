mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{export, init, preview, ExportArgs, InitArgs, PreviewArgs};
use tracing_subscriber::EnvFilter;

/// Pagecraft CLI - single-page site builder
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a project config and a default page
    Init(InitArgs),

    /// Export the page as static HTML or as a config record
    Export(ExportArgs),

    /// Print one interactive preview frame as JSON
    Preview(PreviewArgs),
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Preview(args) => preview(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise info. Logs go to stderr so stdout stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
