//! Triangle budget resolution.
//!
//! Turns a [`UserSelection`] into the effective triangle allowance for the
//! wearable. Rules, in priority order:
//!
//! 1. A skin target always gets [`SKIN_TRIANGLES`]; hidden slots are ignored.
//! 2. A hands target that hides the base hands gets [`HAND_HIDES_BASE_TRIANGLES`].
//! 3. Otherwise the target's base allowance is summed with the base allowance
//!    of every hidden slot.
//! 4. A helmet hiding the whole [`HELMET_HEAD_HIDE_SET`] replaces that sum
//!    with [`HELMET_ALL_HEAD_HIDDEN_TRIANGLES`].

use crate::budget::{
    base_triangles, budget_config, HAND_HIDES_BASE_TRIANGLES, HELMET_ALL_HEAD_HIDDEN_TRIANGLES,
    SKIN_TRIANGLES,
};
use crate::selection::UserSelection;
use crate::slot::Slot;
use serde::{Deserialize, Serialize};

/// Head-region slots a helmet must hide for the package allowance to apply.
pub const HELMET_HEAD_HIDE_SET: [Slot; 8] = [
    Slot::Head,
    Slot::Earring,
    Slot::Eyewear,
    Slot::Tiara,
    Slot::Hat,
    Slot::FacialHair,
    Slot::Hair,
    Slot::TopHead,
];

/// Budget limits resolved for one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBudget {
    /// The target slot the limits were resolved for.
    pub target_slot: Slot,
    /// Effective triangle allowance.
    pub triangles: u32,
    /// Material cap of the target slot.
    pub max_materials: u32,
    /// Texture cap of the target slot.
    pub max_textures: u32,
    /// True when the helmet package allowance replaced the sum.
    pub helmet_override: bool,
}

/// Computes the effective triangle allowance for a selection.
///
/// Hidden slots are not deduplicated: a slot listed twice is counted twice.
/// Callers that do not want this must deduplicate before resolving.
pub fn compute_triangle_budget(selection: &UserSelection) -> u32 {
    match selection.target_slot {
        Slot::Skin => return SKIN_TRIANGLES,
        Slot::Hands if selection.hand_hides_base => return HAND_HIDES_BASE_TRIANGLES,
        _ => {}
    }

    if is_helmet_special_rule(selection) {
        return HELMET_ALL_HEAD_HIDDEN_TRIANGLES;
    }

    selection
        .hidden_slots
        .iter()
        .fold(base_triangles(selection.target_slot), |sum, slot| {
            sum.saturating_add(base_triangles(*slot))
        })
}

/// Returns true when a helmet hides every slot of the head-hide set.
///
/// Order and extra hidden slots do not matter.
pub fn is_helmet_special_rule(selection: &UserSelection) -> bool {
    selection.target_slot == Slot::Helmet
        && HELMET_HEAD_HIDE_SET
            .iter()
            .all(|slot| selection.hidden_slots.contains(slot))
}

/// Resolves the triangle allowance and the target slot's caps together.
pub fn resolve_budget(selection: &UserSelection) -> ResolvedBudget {
    let config = budget_config(selection.target_slot);
    let triangles = compute_triangle_budget(selection);
    let helmet_override = is_helmet_special_rule(selection);

    tracing::debug!(
        target_slot = %selection.target_slot,
        hidden = selection.hidden_slots.len(),
        triangles,
        helmet_override,
        "resolved triangle budget"
    );

    ResolvedBudget {
        target_slot: selection.target_slot,
        triangles,
        max_materials: config.max_materials,
        max_textures: config.max_textures,
        helmet_override,
    }
}
