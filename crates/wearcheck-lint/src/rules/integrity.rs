//! File integrity and file size rules.

use crate::report::{RuleCategory, RuleResult};
use crate::rules::{RuleContext, ValidationRule};

/// One megabyte in bytes.
pub const MB: u64 = 1_048_576;

/// File size above which the rule warns.
pub const WARN_FILE_SIZE_BYTES: u64 = MB;

/// File size above which the rule fails.
pub const FAIL_FILE_SIZE_BYTES: u64 = 3 * MB;

/// The model must contain geometry and at least one material.
pub struct FileIntegrityRule;

impl ValidationRule for FileIntegrityRule {
    fn id(&self) -> &'static str {
        "file-integrity"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::FileIntegrity
    }

    fn description(&self) -> &'static str {
        "Model contains triangles and materials"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let triangles = ctx.stats.triangle_count;
        let materials = ctx.stats.material_count_excl_avatar_skin;
        let expected = "triangles > 0 and materials > 0";
        let actual = format!("{} triangles, {} materials", triangles, materials);

        if triangles > 0 && materials > 0 {
            return RuleResult::pass(self.id(), self.category(), expected, actual);
        }

        let missing = match (triangles == 0, materials == 0) {
            (true, true) => "no triangles and no materials",
            (true, false) => "no triangles",
            _ => "no materials",
        };
        let tip = format!(
            "The model has {}; this usually means the export went wrong. Re-export with meshes and materials included",
            missing
        );
        RuleResult::fail(self.id(), self.category(), expected, actual).with_tip(tip)
    }
}

/// Source file size should stay small.
pub struct FileSizeRule;

/// Formats a byte count in megabytes.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MB as f64)
}

impl ValidationRule for FileSizeRule {
    fn id(&self) -> &'static str {
        "file-size"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::FileIntegrity
    }

    fn description(&self) -> &'static str {
        "File is at most 1 MB (warns up to 3 MB)"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let size = ctx.stats.file_size_bytes;
        let expected = format!("≤ {}", format_mb(WARN_FILE_SIZE_BYTES));
        let actual = format_mb(size);

        if size <= WARN_FILE_SIZE_BYTES {
            return RuleResult::pass(self.id(), self.category(), expected, actual);
        }

        if size <= FAIL_FILE_SIZE_BYTES {
            return RuleResult::warn(self.id(), self.category(), expected, actual)
                .with_tip("Compress or downscale textures to bring the file under 1 MB");
        }

        let tip = format!(
            "Files over {} are rejected; compress textures and remove unused data",
            format_mb(FAIL_FILE_SIZE_BYTES)
        );
        RuleResult::fail(self.id(), self.category(), expected, actual).with_tip(tip)
    }
}
