mod commands;
mod config;
mod diagnostics;
mod domain;
mod error;
mod extension;
mod github;
mod html;
mod markup;
mod node;
mod registry;
mod role;
mod scanner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "swocdoc", version, about = "Source-file link roles for reStructuredText")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every :swoc:git: reference in .rst files under the current directory
    Links {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Render a document's inline roles to an HTML fragment
    Render {
        /// Document to render
        file: PathBuf,
    },
    /// List registered roles
    Roles,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Links { json } => commands::links(*json, cli.verbose),
        Commands::Render { file } => commands::render(file, cli.verbose),
        Commands::Roles => commands::roles(cli.verbose).map(|()| return ExitCode::SUCCESS),
    };

    return match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}
