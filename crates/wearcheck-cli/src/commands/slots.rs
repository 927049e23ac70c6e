//! Slots command implementation
//!
//! Lists target slots, or the hidden-slot choices for a target.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;
use wearcheck_spec::{
    available_hidden_slots, available_target_slots, budget_config, skin_required_hidden_slots,
    BudgetConfig, Slot,
};

/// One slot with its budget limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub slot: Slot,
    #[serde(flatten)]
    pub config: BudgetConfig,
}

/// JSON output for the slots command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_slot: Option<Slot>,
    pub slots: Vec<SlotEntry>,
    /// Slots that must be hidden for the target (skin only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_hidden_slots: Vec<Slot>,
}

impl SlotsOutput {
    pub fn for_target(target: Option<Slot>) -> Self {
        let slots = match target {
            Some(_) => available_hidden_slots(target),
            None => available_target_slots(),
        };
        let required_hidden_slots = if target == Some(Slot::Skin) {
            skin_required_hidden_slots()
        } else {
            Vec::new()
        };

        Self {
            target_slot: target,
            slots: slots
                .into_iter()
                .map(|slot| SlotEntry {
                    slot,
                    config: budget_config(slot),
                })
                .collect(),
            required_hidden_slots,
        }
    }
}

/// Run the slots command.
pub fn run(target: Option<&str>, json: bool) -> Result<ExitCode> {
    let target = target
        .map(|t| Slot::parse_target(t).with_context(|| format!("Invalid target slot: {}", t)))
        .transpose()?;
    let output = SlotsOutput::for_target(target);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    match target {
        Some(target) => println!("{} {}", "Hidden slot choices for".cyan().bold(), target),
        None => println!("{}", "Target slots".cyan().bold()),
    }
    for entry in &output.slots {
        println!(
            "  {:<12} {:>5} triangles  {} materials  {} textures",
            entry.slot.as_str(),
            entry.config.base_triangles,
            entry.config.max_materials,
            entry.config.max_textures
        );
    }
    if !output.required_hidden_slots.is_empty() {
        println!(
            "\n{} skin hides every other slot",
            "note:".yellow().bold()
        );
    }

    Ok(ExitCode::SUCCESS)
}
