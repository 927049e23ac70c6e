//! Validation report types for structured output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use wearcheck_spec::{ModelStats, Slot};

/// Outcome of a single rule, and of the report overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// The asset meets the constraint.
    Pass,
    /// Advisory, not blocking.
    Warn,
    /// Blocking.
    Fail,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warn => "WARN",
            Severity::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping of rules in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    Geometry,
    Materials,
    #[serde(rename = "Textures/Maps")]
    TexturesMaps,
    #[serde(rename = "Skin Weights")]
    SkinWeights,
    Dimensions,
    #[serde(rename = "File Integrity")]
    FileIntegrity,
}

impl RuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Geometry => "Geometry",
            RuleCategory::Materials => "Materials",
            RuleCategory::TexturesMaps => "Textures/Maps",
            RuleCategory::SkinWeights => "Skin Weights",
            RuleCategory::Dimensions => "Dimensions",
            RuleCategory::FileIntegrity => "File Integrity",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one rule against a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Rule identifier (e.g., "triangles", "texture-sizes").
    pub id: String,
    /// Report grouping.
    pub category: RuleCategory,
    /// Human-readable limit.
    pub expected: String,
    /// Human-readable measured value.
    pub actual: String,
    /// Outcome.
    pub result: Severity,
    /// How to fix, when the rule did not pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl RuleResult {
    /// Creates a result with required fields.
    pub fn new(
        id: impl Into<String>,
        category: RuleCategory,
        result: Severity,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            expected: expected.into(),
            actual: actual.into(),
            result,
            tip: None,
        }
    }

    /// Creates a passing result.
    pub fn pass(
        id: impl Into<String>,
        category: RuleCategory,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(id, category, Severity::Pass, expected, actual)
    }

    /// Creates an advisory result.
    pub fn warn(
        id: impl Into<String>,
        category: RuleCategory,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(id, category, Severity::Warn, expected, actual)
    }

    /// Creates a blocking result.
    pub fn fail(
        id: impl Into<String>,
        category: RuleCategory,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(id, category, Severity::Fail, expected, actual)
    }

    /// Builder method to set the tip.
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    pub fn is_pass(&self) -> bool {
        self.result == Severity::Pass
    }
}

/// Aggregates rule outcomes: the most severe result wins, PASS if none.
pub fn aggregate_overall<'a>(results: impl IntoIterator<Item = &'a RuleResult>) -> Severity {
    results
        .into_iter()
        .map(|r| r.result)
        .max()
        .unwrap_or(Severity::Pass)
}

/// Per-severity result counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCounts {
    pub pass: usize,
    pub warn: usize,
    pub fail: usize,
}

/// Errors raised while exporting a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Failed to write the report file.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the report.
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Complete validation report for one wearable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Most severe rule outcome.
    pub overall: Severity,
    /// Slot the wearable targets.
    pub target_slot: Slot,
    /// Effective triangle budget after combining rules.
    pub applied_triangle_budget: u32,
    /// Material cap of the target slot.
    pub max_materials: u32,
    /// Texture cap of the target slot.
    pub max_textures: u32,
    /// Rule outcomes in evaluation order.
    pub results: Vec<RuleResult>,
    /// Advisory notes about how the budget was derived.
    pub notes: Vec<String>,
    /// Name of the validated file.
    pub file_name: String,
    /// The statistics the report was computed from.
    pub model_stats: ModelStats,
}

impl ValidationReport {
    /// Counts results per severity.
    pub fn counts(&self) -> ResultCounts {
        self.results
            .iter()
            .fold(ResultCounts::default(), |mut counts, r| {
                match r.result {
                    Severity::Pass => counts.pass += 1,
                    Severity::Warn => counts.warn += 1,
                    Severity::Fail => counts.fail += 1,
                }
                counts
            })
    }

    /// Looks up a rule result by id.
    pub fn result(&self, id: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Returns true if any rule failed.
    pub fn has_failures(&self) -> bool {
        self.overall == Severity::Fail
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the pretty-printed JSON report to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(id: &str, severity: Severity) -> RuleResult {
        RuleResult::new(id, RuleCategory::Geometry, severity, "x", "y")
    }

    fn report(results: Vec<RuleResult>) -> ValidationReport {
        ValidationReport {
            overall: aggregate_overall(&results),
            target_slot: Slot::Hat,
            applied_triangle_budget: 1500,
            max_materials: 2,
            max_textures: 2,
            results,
            notes: vec![],
            file_name: "hat.glb".to_string(),
            model_stats: ModelStats::default(),
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Pass < Severity::Warn);
        assert!(Severity::Warn < Severity::Fail);
    }

    #[test]
    fn test_aggregate_overall() {
        assert_eq!(aggregate_overall(std::iter::empty()), Severity::Pass);
        assert_eq!(
            aggregate_overall(&[result("a", Severity::Pass), result("b", Severity::Pass)]),
            Severity::Pass
        );
        assert_eq!(
            aggregate_overall(&[result("a", Severity::Warn), result("b", Severity::Pass)]),
            Severity::Warn
        );
        assert_eq!(
            aggregate_overall(&[
                result("a", Severity::Warn),
                result("b", Severity::Fail),
                result("c", Severity::Warn)
            ]),
            Severity::Fail
        );
    }

    #[test]
    fn test_rule_result_severity_builders() {
        let pass = RuleResult::pass("materials", RuleCategory::Materials, "≤ 2", "1");
        assert_eq!(pass.result, Severity::Pass);
        assert!(pass.is_pass());
        assert!(pass.tip.is_none());

        let warn = RuleResult::warn("normal-maps", RuleCategory::TexturesMaps, "none", "present");
        assert_eq!(warn.result, Severity::Warn);
        assert_eq!(warn.id, "normal-maps");
        assert_eq!(warn.category, RuleCategory::TexturesMaps);

        let fail = RuleResult::fail("triangles", RuleCategory::Geometry, "≤ 500", "600")
            .with_tip("Reduce");
        assert_eq!(fail.result, Severity::Fail);
        assert_eq!(fail.expected, "≤ 500");
        assert_eq!(fail.actual, "600");
        assert_eq!(fail.tip.as_deref(), Some("Reduce"));
        assert_eq!(
            fail,
            RuleResult::new("triangles", RuleCategory::Geometry, Severity::Fail, "≤ 500", "600")
                .with_tip("Reduce")
        );
    }

    #[test]
    fn test_rule_result_serialization() {
        let r = RuleResult::new(
            "texture-square",
            RuleCategory::TexturesMaps,
            Severity::Warn,
            "square textures",
            "1 non-square",
        )
        .with_tip("Resize to square");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "texture-square",
                "category": "Textures/Maps",
                "expected": "square textures",
                "actual": "1 non-square",
                "result": "WARN",
                "tip": "Resize to square"
            })
        );

        let pass = result("triangles", Severity::Pass);
        let json = serde_json::to_value(&pass).unwrap();
        assert!(json.get("tip").is_none());
    }

    #[test]
    fn test_report_field_names() {
        let report = report(vec![result("triangles", Severity::Pass)]);
        let json = serde_json::to_value(&report).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "overall",
            "targetSlot",
            "appliedTriangleBudget",
            "maxMaterials",
            "maxTextures",
            "results",
            "notes",
            "fileName",
            "modelStats",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(json["targetSlot"], "hat");
        assert_eq!(json["overall"], "PASS");
    }

    #[test]
    fn test_counts_and_lookup() {
        let report = report(vec![
            result("a", Severity::Pass),
            result("b", Severity::Warn),
            result("c", Severity::Fail),
            result("d", Severity::Pass),
        ]);
        assert_eq!(
            report.counts(),
            ResultCounts {
                pass: 2,
                warn: 1,
                fail: 1
            }
        );
        assert!(report.has_failures());
        assert_eq!(report.result("b").unwrap().result, Severity::Warn);
        assert!(report.result("zzz").is_none());
    }

    #[test]
    fn test_write_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = report(vec![result("a", Severity::Warn)]);
        report.write_json(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'), "report should be pretty-printed");
        let parsed: ValidationReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
    }
}
