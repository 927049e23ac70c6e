//! Validation entry point and advisory notes.

use crate::registry::RuleRegistry;
use crate::report::ValidationReport;
use wearcheck_spec::{
    base_triangles, is_helmet_special_rule, ModelStats, Slot, UserSelection,
    HAND_HIDES_BASE_TRIANGLES, HELMET_ALL_HEAD_HIDDEN_TRIANGLES,
};

/// Validates a wearable's statistics against the user's slot selection.
///
/// Runs the full rule battery. Pure: identical inputs give identical reports.
pub fn run_validation(
    stats: &ModelStats,
    selection: &UserSelection,
    file_name: &str,
) -> ValidationReport {
    RuleRegistry::default_rules().validate(stats, selection, file_name)
}

/// Explains how the triangle budget was derived, where that is not obvious.
pub fn build_notes(selection: &UserSelection) -> Vec<String> {
    let mut notes = Vec::new();

    if selection.target_slot == Slot::Helmet && !selection.hidden_slots.is_empty() {
        if is_helmet_special_rule(selection) {
            notes.push(format!(
                "Helmet hides the entire head region, so the fixed {} triangle helmet budget applies instead of the combined sum.",
                HELMET_ALL_HEAD_HIDDEN_TRIANGLES
            ));
        } else {
            let hidden: Vec<&str> = selection.hidden_slots.iter().map(Slot::as_str).collect();
            notes.push(format!(
                "Helmet budget combines its own {} triangles with the hidden slots ({}). Hiding every head slot switches to the fixed {} triangle helmet budget.",
                base_triangles(Slot::Helmet),
                hidden.join(", "),
                HELMET_ALL_HEAD_HIDDEN_TRIANGLES
            ));
        }
    }

    if selection.target_slot == Slot::Hands && selection.hand_hides_base {
        notes.push(format!(
            "Hands replace the base hands, so the budget is raised to {} triangles.",
            HAND_HIDES_BASE_TRIANGLES
        ));
    }

    notes
}
