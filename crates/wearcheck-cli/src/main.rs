//! Wearcheck CLI - Command-line interface for wearable budget validation
//!
//! This binary checks avatar wearables against per-slot triangle, material,
//! texture, size and skin weight limits.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use wearcheck_cli::commands;
use wearcheck_cli::commands::validate::ValidateArgs;
use wearcheck_cli::logging;

/// Wearcheck - Avatar Wearable Validation
#[derive(Parser)]
#[command(name = "wearcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate model statistics against the budget of a slot selection
    Validate {
        /// Path to the model statistics JSON
        #[arg(short, long)]
        stats: String,

        /// Slot the wearable targets (e.g. hat, upper_body)
        #[arg(short, long)]
        target: String,

        /// Slot hidden by the wearable (repeatable)
        #[arg(long = "hide")]
        hide: Vec<String>,

        /// Hands wearable replaces the base hands
        #[arg(long)]
        hand_hides_base: bool,

        /// File name to record in the report (default: stats file stem)
        #[arg(long)]
        file_name: Option<String>,

        /// Rule ID to skip (repeatable)
        #[arg(long = "disable")]
        disable: Vec<String>,

        /// Write the JSON report to this path
        #[arg(short, long)]
        output: Option<String>,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the triangle budget a slot selection resolves to
    Budget {
        /// Slot the wearable targets
        #[arg(short, long)]
        target: String,

        /// Slot hidden by the wearable (repeatable)
        #[arg(long = "hide")]
        hide: Vec<String>,

        /// Hands wearable replaces the base hands
        #[arg(long)]
        hand_hides_base: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List target slots, or hidden-slot choices for a target
    Slots {
        /// List hidden-slot choices for this target
        #[arg(short, long)]
        target: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the validation rules
    Rules {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            stats,
            target,
            hide,
            hand_hides_base,
            file_name,
            disable,
            output,
            strict,
            json,
        } => commands::validate::run(&ValidateArgs {
            stats,
            target,
            hide,
            hand_hides_base,
            file_name,
            disable,
            json,
            output,
            strict,
        }),
        Commands::Budget {
            target,
            hide,
            hand_hides_base,
            json,
        } => commands::budget::run(&target, &hide, hand_hides_base, json),
        Commands::Slots { target, json } => commands::slots::run(target.as_deref(), json),
        Commands::Rules { json } => commands::rules::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
