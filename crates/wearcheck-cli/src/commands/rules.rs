//! Rules command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use wearcheck_lint::RuleRegistry;

/// Run the rules command: list the registered rule battery.
pub fn run(json: bool) -> Result<ExitCode> {
    let metadata = RuleRegistry::default_rules().rule_metadata();

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Validation rules".cyan().bold());
    for rule in &metadata {
        println!(
            "  {:<24} {:<15} {}",
            rule.id,
            rule.category.to_string().dimmed(),
            rule.description
        );
    }
    Ok(ExitCode::SUCCESS)
}
