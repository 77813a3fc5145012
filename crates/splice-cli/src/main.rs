//! splice CLI
//!
//! Replaces marker-delimited blocks in text files, or rewrites them whole.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, ContentArgs, PayloadArgs};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Marker-delimited block replacement", "splice".green().bold());
            println!();
            println!("Run {} for available commands.", "splice --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Block {
            path,
            start,
            end,
            followed_by,
            payload,
        } => {
            let boundary = end.to_boundary(followed_by.as_deref())?;
            let payload = payload_text(payload)?;
            commands::run_block(&path, &start, &boundary, &payload)
        }
        Commands::Rewrite { path, content } => {
            let content = content_text(content)?;
            commands::run_rewrite(&path, &content)
        }
        Commands::Apply { plan } => commands::run_apply(&plan),
    }
}

fn payload_text(args: PayloadArgs) -> Result<String> {
    match (args.payload, args.payload_file) {
        (Some(text), _) => Ok(text),
        (None, Some(file)) => commands::read_source(&file),
        (None, None) => Err(error::CliError::user(
            "one of --payload or --payload-file is required",
        )),
    }
}

fn content_text(args: ContentArgs) -> Result<String> {
    match (args.content, args.content_file) {
        (Some(text), _) => Ok(text),
        (None, Some(file)) => commands::read_source(&file),
        (None, None) => Err(error::CliError::user(
            "one of --content or --content-file is required",
        )),
    }
}
