//! Clerkly CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "clerkly")]
#[command(version)]
#[command(about = "Draft legal documents from templates", long_about = None)]
struct Cli {
    /// Path to a clerkly.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available document types
    List,

    /// Show the input fields a document type reads
    Fields {
        /// Document type (e.g. legal-notice)
        #[arg(value_name = "TYPE")]
        type_: String,
    },

    /// Assemble a document and write it out
    Generate {
        /// Document type (e.g. legal-notice)
        #[arg(value_name = "TYPE")]
        type_: String,

        /// Field value (KEY=VALUE), may be repeated
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,

        /// JSON file with an object of field values
        #[arg(long)]
        fields_file: Option<PathBuf>,

        /// Output format (json, plain, markdown)
        #[arg(short = 't', long)]
        to: Option<String>,

        /// Write output to FILE (use '--output -' for stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Write output to DIR using the conventional file name
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "clerkly=warn" } else { "clerkly=info" };

    // Logs go to stderr so `--output -` stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cwd = std::env::current_dir()?;
    let config = config::Config::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::List => commands::list::execute(),
        Commands::Fields { type_ } => commands::fields::execute(&type_),
        Commands::Generate {
            type_,
            fields,
            fields_file,
            to,
            output,
            output_dir,
        } => commands::generate::execute(
            commands::generate::GenerateArgs {
                document_type: type_,
                fields,
                fields_file,
                to,
                output,
                output_dir,
            },
            &config,
        ),
    }
}
