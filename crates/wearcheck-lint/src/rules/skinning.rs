//! Skin weight rule.

use crate::report::{RuleCategory, RuleResult, Severity};
use crate::rules::{RuleContext, ValidationRule};

/// Bad-weight ratio above which the rule warns.
pub const WARN_BAD_RATIO: f64 = 0.005;

/// Bad-weight ratio above which the rule fails.
pub const FAIL_BAD_RATIO: f64 = 0.03;

/// Share of skinned vertices with invalid bone influences.
///
/// Only evaluated for skinned models; a model without skinning data has
/// nothing to check.
pub struct SkinWeightsRule;

/// Classifies a bad-weight ratio. Both thresholds are exclusive.
pub fn classify_bad_ratio(ratio: f64) -> Severity {
    if ratio > FAIL_BAD_RATIO {
        Severity::Fail
    } else if ratio > WARN_BAD_RATIO {
        Severity::Warn
    } else {
        Severity::Pass
    }
}

impl ValidationRule for SkinWeightsRule {
    fn id(&self) -> &'static str {
        "skin-weights"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::SkinWeights
    }

    fn description(&self) -> &'static str {
        "Share of vertices with invalid bone weights is low"
    }

    fn applies(&self, ctx: &RuleContext) -> bool {
        ctx.stats.skinning.is_some()
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let expected = format!("bad weights ≤ {:.1}%", WARN_BAD_RATIO * 100.0);
        let Some(skinning) = ctx.stats.skinning else {
            return RuleResult::pass(self.id(), self.category(), expected, "not skinned");
        };

        let ratio = skinning.bad_ratio();
        let severity = classify_bad_ratio(ratio);
        let actual = format!(
            "{:.2}% ({} of {} vertices)",
            ratio * 100.0,
            skinning.bad_weight_vertices,
            skinning.total_vertices
        );

        let result = RuleResult::new(self.id(), self.category(), severity, expected, actual);
        match severity {
            Severity::Pass => result,
            Severity::Warn => result.with_tip(
                "Some vertices have weights that do not sum to 1 or reference missing joints; normalize all weights",
            ),
            Severity::Fail => result.with_tip(format!(
                "More than {:.0}% of vertices have broken weights; re-bind the mesh to the avatar armature and normalize all weights",
                FAIL_BAD_RATIO * 100.0
            )),
        }
    }
}
