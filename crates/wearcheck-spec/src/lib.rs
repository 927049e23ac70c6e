//! Wearcheck slot and budget library
//!
//! This crate provides the static budget tables, triangle budget resolution,
//! and the model statistics contract used to validate avatar wearables.
//!
//! # Example
//!
//! ```
//! use wearcheck_spec::{compute_triangle_budget, Slot, UserSelection};
//!
//! let selection = UserSelection::new(Slot::UpperBody)
//!     .hide(Slot::LowerBody)
//!     .hide(Slot::Mask);
//!
//! assert_eq!(compute_triangle_budget(&selection), 3500);
//! ```
//!
//! # Modules
//!
//! - [`slot`]: The closed set of avatar attachment slots
//! - [`budget`]: Per-slot triangle, material, and texture limits
//! - [`selection`]: The user's target and hidden slot choices
//! - [`resolver`]: Effective triangle budget computation
//! - [`stats`]: Model statistics consumed by validation
//! - [`skinning`]: Bad skin weight policy for statistics producers

pub mod budget;
pub mod error;
pub mod resolver;
pub mod selection;
pub mod skinning;
pub mod slot;
pub mod stats;

pub use budget::{
    available_hidden_slots, available_target_slots, base_triangles, budget_config,
    skin_required_hidden_slots, BudgetConfig, HAND_HIDES_BASE_TRIANGLES,
    HELMET_ALL_HEAD_HIDDEN_TRIANGLES, SKIN_TRIANGLES,
};
pub use error::{SlotError, StatsError};
pub use resolver::{
    compute_triangle_budget, is_helmet_special_rule, resolve_budget, ResolvedBudget,
    HELMET_HEAD_HIDE_SET,
};
pub use selection::UserSelection;
pub use skinning::classify_vertex_weights;
pub use slot::Slot;
pub use stats::{
    AlphaMode, BoundingBox, ModelStats, NormalStats, SkinningStats, TextureInfo, TextureSummary,
};
