//! Bounding box dimension rule.

use crate::report::{RuleCategory, RuleResult};
use crate::rules::{RuleContext, ValidationRule};
use wearcheck_spec::BoundingBox;

/// Maximum width in meters.
pub const MAX_WIDTH_M: f64 = 2.42;

/// Maximum height in meters.
pub const MAX_HEIGHT_M: f64 = 2.42;

/// Maximum depth in meters.
pub const MAX_DEPTH_M: f64 = 1.4;

/// The model's bounding box must fit the platform's wearable volume.
pub struct DimensionsRule;

/// Largest uniform scale factor that brings `bbox` within limits.
///
/// Returns 1.0 or more when the box already fits.
pub fn fit_scale(bbox: &BoundingBox) -> f64 {
    [
        (bbox.width, MAX_WIDTH_M),
        (bbox.height, MAX_HEIGHT_M),
        (bbox.depth, MAX_DEPTH_M),
    ]
    .iter()
    .filter(|(value, _)| *value > 0.0)
    .map(|(value, limit)| limit / value)
    .fold(f64::INFINITY, f64::min)
}

impl ValidationRule for DimensionsRule {
    fn id(&self) -> &'static str {
        "dimensions"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Dimensions
    }

    fn description(&self) -> &'static str {
        "Bounding box fits within 2.42 × 2.42 × 1.4 m"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let bbox = &ctx.stats.bbox;
        let expected = format!(
            "≤ {:.2} × {:.2} × {:.2} m",
            MAX_WIDTH_M, MAX_HEIGHT_M, MAX_DEPTH_M
        );
        let actual = format!(
            "{:.2} × {:.2} × {:.2} m",
            bbox.width, bbox.height, bbox.depth
        );

        let fits =
            bbox.width <= MAX_WIDTH_M && bbox.height <= MAX_HEIGHT_M && bbox.depth <= MAX_DEPTH_M;
        if fits {
            return RuleResult::pass(self.id(), self.category(), expected, actual);
        }

        let tip = format!(
            "Scale the model down uniformly to {:.0}% or less of its current size",
            (fit_scale(bbox) * 100.0).floor()
        );
        RuleResult::fail(self.id(), self.category(), expected, actual).with_tip(tip)
    }
}
