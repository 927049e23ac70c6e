//! Per-slot budget table.
//!
//! Every slot has a fixed triangle allowance and material/texture caps.
//! The table is compile-time data: lookups are a `match` over [`Slot`], so
//! it is total over the enumeration and never mutated.

use crate::slot::Slot;
use serde::{Deserialize, Serialize};

/// Base triangle allowance for small accessory slots.
pub const SMALL_SLOT_TRIANGLES: u32 = 500;

/// Base triangle allowance for large garment slots.
pub const LARGE_SLOT_TRIANGLES: u32 = 1500;

/// Base triangle allowance for hands.
pub const HANDS_TRIANGLES: u32 = 1000;

/// Fixed triangle allowance for a skin target.
pub const SKIN_TRIANGLES: u32 = 5000;

/// Hands allowance when the hands wearable also hides the base hands.
pub const HAND_HIDES_BASE_TRIANGLES: u32 = 1500;

/// Package allowance for a helmet that hides the whole head region.
pub const HELMET_ALL_HEAD_HIDDEN_TRIANGLES: u32 = 4000;

/// Material cap shared by every slot.
pub const DEFAULT_MAX_MATERIALS: u32 = 2;

/// Texture cap for every slot except skin.
pub const DEFAULT_MAX_TEXTURES: u32 = 2;

/// Texture cap for skin.
pub const SKIN_MAX_TEXTURES: u32 = 5;

/// Budget limits for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetConfig {
    /// Triangle allowance before any combining rules.
    pub base_triangles: u32,
    /// Maximum number of materials (avatar skin material excluded).
    pub max_materials: u32,
    /// Maximum number of textures.
    pub max_textures: u32,
    /// Helmet-only package allowance when all head slots are hidden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helmet_all_head_hidden_triangles: Option<u32>,
}

impl BudgetConfig {
    const fn with_triangles(base_triangles: u32) -> Self {
        Self {
            base_triangles,
            max_materials: DEFAULT_MAX_MATERIALS,
            max_textures: DEFAULT_MAX_TEXTURES,
            helmet_all_head_hidden_triangles: None,
        }
    }
}

/// Returns the budget configuration for a slot.
pub const fn budget_config(slot: Slot) -> BudgetConfig {
    match slot {
        Slot::Mask
        | Slot::Eyewear
        | Slot::Earring
        | Slot::Tiara
        | Slot::TopHead
        | Slot::FacialHair
        | Slot::Head => BudgetConfig::with_triangles(SMALL_SLOT_TRIANGLES),
        Slot::Hat | Slot::UpperBody | Slot::LowerBody | Slot::Feet | Slot::Hair => {
            BudgetConfig::with_triangles(LARGE_SLOT_TRIANGLES)
        }
        Slot::Helmet => BudgetConfig {
            helmet_all_head_hidden_triangles: Some(HELMET_ALL_HEAD_HIDDEN_TRIANGLES),
            ..BudgetConfig::with_triangles(LARGE_SLOT_TRIANGLES)
        },
        Slot::Hands => BudgetConfig::with_triangles(HANDS_TRIANGLES),
        Slot::Skin => BudgetConfig {
            max_textures: SKIN_MAX_TEXTURES,
            ..BudgetConfig::with_triangles(SKIN_TRIANGLES)
        },
    }
}

/// Returns the base triangle allowance for a slot.
pub const fn base_triangles(slot: Slot) -> u32 {
    budget_config(slot).base_triangles
}

/// Returns every slot a wearable may target (all slots except `head`).
pub fn available_target_slots() -> Vec<Slot> {
    Slot::ALL.iter().copied().filter(Slot::is_target).collect()
}

/// Returns the slots that may be hidden by a wearable targeting `target`.
///
/// With no target selected there is nothing to hide.
pub fn available_hidden_slots(target: Option<Slot>) -> Vec<Slot> {
    match target {
        Some(target) => available_target_slots()
            .into_iter()
            .filter(|slot| *slot != target)
            .collect(),
        None => Vec::new(),
    }
}

/// Returns the slots a skin wearable must hide (every target slot but skin).
pub fn skin_required_hidden_slots() -> Vec<Slot> {
    available_hidden_slots(Some(Slot::Skin))
}
