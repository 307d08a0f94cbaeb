use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use jacoplan::cli::{cmd_capabilities, cmd_plan, cmd_tasks, Style};

/// jacoplan — Jacoco report-task planning for Gradle build variants.
#[derive(Parser)]
#[command(name = "jacoplan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the full report plan from a build model.
    Plan {
        /// Path to the build model JSON file.
        model: PathBuf,

        /// Output style.
        #[arg(long, value_enum, default_value = "text")]
        style: Style,
    },

    /// Show the detected build capabilities of each project.
    Capabilities {
        /// Path to the build model JSON file.
        model: PathBuf,
    },

    /// List the report tasks and their dependency edges.
    Tasks {
        /// Path to the build model JSON file.
        model: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let out = match cli.command {
        Commands::Plan { model, style } => cmd_plan(&model, &style)?,
        Commands::Capabilities { model } => cmd_capabilities(&model)?,
        Commands::Tasks { model } => cmd_tasks(&model)?,
    };
    print!("{out}");
    Ok(())
}
