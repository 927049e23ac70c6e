//! Validate command implementation
//!
//! Checks a wearable's model statistics against the budget of the selected
//! slots and prints the report.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use wearcheck_lint::{RuleRegistry, RuleResult, Severity, ValidationReport};

use crate::input::{build_selection, default_file_name, load_stats};

/// Options for the validate command.
#[derive(Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Path to the model statistics JSON.
    pub stats: String,
    /// Target slot identifier.
    pub target: String,
    /// Hidden slot identifiers.
    pub hide: Vec<String>,
    /// Hands replace the base hands.
    pub hand_hides_base: bool,
    /// File name to echo in the report.
    pub file_name: Option<String>,
    /// Rule IDs to skip.
    pub disable: Vec<String>,
    /// Print JSON instead of text.
    pub json: bool,
    /// Also write the JSON report here.
    pub output: Option<String>,
    /// Treat warnings as failures for the exit code.
    pub strict: bool,
}

/// Run the validate command.
///
/// # Returns
/// Exit code: 0 if the wearable passes, 1 if any rule fails (or warns in
/// strict mode)
pub fn run(args: &ValidateArgs) -> Result<ExitCode> {
    let report = evaluate(args)?;

    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_text_output(&report, args.strict);
    }

    Ok(ExitCode::from(exit_status(report.overall, args.strict)))
}

/// Loads the inputs, validates, and writes the report file if requested.
pub fn evaluate(args: &ValidateArgs) -> Result<ValidationReport> {
    let stats_path = Path::new(&args.stats);
    let stats = load_stats(stats_path)?;
    let selection = build_selection(&args.target, &args.hide, args.hand_hides_base)?;
    let file_name = args
        .file_name
        .clone()
        .unwrap_or_else(|| default_file_name(stats_path));

    let mut registry = RuleRegistry::default_rules();
    for rule_id in &args.disable {
        if !registry.contains(rule_id) {
            tracing::warn!(rule = %rule_id, "unknown rule id passed to --disable");
        }
        registry.disable_rule(rule_id);
    }

    let report = registry.validate(&stats, &selection, &file_name);

    if let Some(output) = &args.output {
        report
            .write_json(Path::new(output))
            .with_context(|| format!("Failed to write report: {}", output))?;
        tracing::info!(path = %output, "wrote validation report");
    }

    Ok(report)
}

/// Maps the overall result to a process exit status.
pub fn exit_status(overall: Severity, strict: bool) -> u8 {
    match overall {
        Severity::Pass => 0,
        Severity::Warn if !strict => 0,
        _ => 1,
    }
}

fn print_text_output(report: &ValidationReport, strict: bool) {
    println!("{} {}", "Validating:".cyan().bold(), report.file_name);
    println!(
        "{} {} ({} triangles, {} materials, {} textures)",
        "Budget:".dimmed(),
        report.target_slot,
        report.applied_triangle_budget,
        report.max_materials,
        report.max_textures
    );

    let summary = report.model_stats.texture_summary();
    if summary.count > 0 {
        println!(
            "{} {} texture(s), largest edge {} px, {} non-square",
            "Textures:".dimmed(),
            summary.count,
            summary.largest_edge,
            summary.non_square
        );
    }

    println!();
    for result in &report.results {
        print_rule_result(result);
    }

    if !report.notes.is_empty() {
        println!("\n{}", "Notes:".blue().bold());
        for note in &report.notes {
            println!("  {} {}", "i".blue(), note);
        }
    }

    let counts = report.counts();
    let summary = format!(
        "{} passed, {} warning(s), {} failed",
        counts.pass, counts.warn, counts.fail
    );
    let verdict = match report.overall {
        Severity::Pass => "PASSED".green().bold(),
        Severity::Warn if strict => "FAILED".red().bold(),
        Severity::Warn => "PASSED WITH WARNINGS".yellow().bold(),
        Severity::Fail => "FAILED".red().bold(),
    };
    println!("\n{} {}", verdict, summary.dimmed());
}

fn print_rule_result(result: &RuleResult) {
    let marker = match result.result {
        Severity::Pass => "ok".green(),
        Severity::Warn => "!".yellow(),
        Severity::Fail => "x".red(),
    };
    println!(
        "  {} [{}] {}: actual={}, expected={}",
        marker,
        result.category.to_string().dimmed(),
        result.id.cyan(),
        result.actual,
        result.expected
    );
    if let Some(tip) = &result.tip {
        println!("    {} {}", "tip:".dimmed(), tip);
    }
}
