//! Material count rule.

use crate::report::{RuleCategory, RuleResult};
use crate::rules::{plural, RuleContext, ValidationRule};

/// Material count (avatar skin excluded) must not exceed the slot cap.
pub struct MaterialsRule;

impl ValidationRule for MaterialsRule {
    fn id(&self) -> &'static str {
        "materials"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Materials
    }

    fn description(&self) -> &'static str {
        "Material count, excluding the avatar skin material, is within the slot cap"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let actual = ctx.stats.material_count_excl_avatar_skin;
        let max = ctx.budget.max_materials;
        let expected = format!("≤ {}", plural(max, "material"));
        let actual_text = plural(actual, "material");

        if actual <= max {
            return RuleResult::pass(self.id(), self.category(), expected, actual_text);
        }

        let tip = format!(
            "Remove {} or merge them into a shared atlas",
            plural(actual - max, "material")
        );
        RuleResult::fail(self.id(), self.category(), expected, actual_text).with_tip(tip)
    }
}
