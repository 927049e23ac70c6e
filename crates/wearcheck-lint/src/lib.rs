//! Validation rule engine for avatar wearables.
//!
//! Evaluates a fixed battery of threshold checks against precomputed model
//! statistics and aggregates them into a PASS/WARN/FAIL report.
//!
//! # Example
//!
//! ```
//! use wearcheck_lint::{run_validation, Severity};
//! use wearcheck_spec::{BoundingBox, ModelStats, Slot, UserSelection};
//!
//! let stats = ModelStats {
//!     triangle_count: 900,
//!     material_count_excl_avatar_skin: 1,
//!     bbox: BoundingBox::new(0.3, 0.2, 0.3),
//!     file_size_bytes: 200_000,
//!     ..Default::default()
//! };
//! let selection = UserSelection::new(Slot::Mask).hide(Slot::Eyewear);
//!
//! let report = run_validation(&stats, &selection, "mask.glb");
//! assert_eq!(report.applied_triangle_budget, 1000);
//! assert_eq!(report.overall, Severity::Pass);
//! ```

pub mod engine;
pub mod registry;
pub mod report;
pub mod rules;

pub use engine::{build_notes, run_validation};
pub use registry::{RuleMetadata, RuleRegistry};
pub use report::{
    aggregate_overall, ReportError, ResultCounts, RuleCategory, RuleResult, Severity,
    ValidationReport,
};
pub use rules::{RuleContext, ValidationRule};
