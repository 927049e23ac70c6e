//! Budget command implementation
//!
//! Prints the triangle budget a slot selection resolves to.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;
use wearcheck_lint::build_notes;
use wearcheck_spec::{resolve_budget, Slot, UserSelection};

use crate::input::build_selection;

/// JSON output for the budget command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOutput {
    pub target_slot: Slot,
    pub hidden_slots: Vec<Slot>,
    pub triangle_budget: u32,
    pub max_materials: u32,
    pub max_textures: u32,
    pub helmet_special_rule: bool,
    pub notes: Vec<String>,
}

impl BudgetOutput {
    pub fn from_selection(selection: &UserSelection) -> Self {
        let budget = resolve_budget(selection);
        Self {
            target_slot: budget.target_slot,
            hidden_slots: selection.hidden_slots.clone(),
            triangle_budget: budget.triangles,
            max_materials: budget.max_materials,
            max_textures: budget.max_textures,
            helmet_special_rule: budget.helmet_override,
            notes: build_notes(selection),
        }
    }
}

/// Run the budget command.
pub fn run(target: &str, hide: &[String], hand_hides_base: bool, json: bool) -> Result<ExitCode> {
    let selection = build_selection(target, hide, hand_hides_base)?;
    let output = BudgetOutput::from_selection(&selection);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Target:".cyan().bold(), output.target_slot);
    if !output.hidden_slots.is_empty() {
        let hidden: Vec<&str> = output.hidden_slots.iter().map(Slot::as_str).collect();
        println!("{} {}", "Hidden:".dimmed(), hidden.join(", "));
    }
    println!(
        "{} {} triangles, {} materials, {} textures",
        "Budget:".green().bold(),
        output.triangle_budget,
        output.max_materials,
        output.max_textures
    );
    if output.helmet_special_rule {
        println!("  {} helmet full-head package applies", "i".blue());
    }
    for note in &output.notes {
        println!("  {} {}", "i".blue(), note);
    }

    Ok(ExitCode::SUCCESS)
}
