//! Triangle budget rule.

use crate::report::{RuleCategory, RuleResult};
use crate::rules::{RuleContext, ValidationRule};

/// Triangle count must not exceed the resolved budget.
pub struct TrianglesRule;

/// Percentage of `actual` that must be removed to reach `budget`, rounded up.
pub fn reduction_percent(actual: u32, budget: u32) -> u32 {
    if actual <= budget {
        return 0;
    }
    let excess = u64::from(actual - budget) * 100;
    let actual = u64::from(actual);
    // Never above 100 since excess <= actual.
    excess.div_ceil(actual) as u32
}

impl ValidationRule for TrianglesRule {
    fn id(&self) -> &'static str {
        "triangles"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Geometry
    }

    fn description(&self) -> &'static str {
        "Triangle count is within the slot's combined budget"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let actual = ctx.stats.triangle_count;
        let budget = ctx.budget.triangles;
        let expected = format!("≤ {} triangles", budget);
        let actual_text = format!("{} triangles", actual);

        if actual <= budget {
            return RuleResult::pass(self.id(), self.category(), expected, actual_text);
        }

        let tip = format!(
            "Reduce the triangle count by about {}% ({} over budget), e.g. with a decimate modifier",
            reduction_percent(actual, budget),
            actual - budget
        );
        RuleResult::fail(self.id(), self.category(), expected, actual_text).with_tip(tip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::rules::test_support::{clean_stats, hat_budget};
    use wearcheck_spec::ModelStats;

    fn run(triangles: u32) -> RuleResult {
        let stats = ModelStats {
            triangle_count: triangles,
            ..clean_stats()
        };
        TrianglesRule.evaluate(&RuleContext::new(&stats, &hat_budget()))
    }

    #[test]
    fn test_at_budget_passes() {
        let r = run(1500);
        assert_eq!(r.result, Severity::Pass);
        assert!(r.tip.is_none());
    }

    #[test]
    fn test_over_budget_fails_with_tip() {
        let r = run(1501);
        assert_eq!(r.result, Severity::Fail);
        let tip = r.tip.unwrap();
        assert!(tip.contains("1%"), "{}", tip);
        assert!(tip.contains("1 over budget"), "{}", tip);
    }

    #[test]
    fn test_reduction_percent() {
        assert_eq!(reduction_percent(1000, 1500), 0);
        assert_eq!(reduction_percent(3000, 1500), 50);
        // 500 / 2000 = 25% exactly, no rounding up.
        assert_eq!(reduction_percent(2000, 1500), 25);
        // 100 / 1600 = 6.25% -> 7%
        assert_eq!(reduction_percent(1600, 1500), 7);
        assert_eq!(reduction_percent(10, 0), 100);
    }
}
