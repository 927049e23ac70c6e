//! Validation rule trait and domain-specific rule modules.

use crate::report::{RuleCategory, RuleResult};
use wearcheck_spec::{ModelStats, ResolvedBudget};

pub mod dimensions;
pub mod geometry;
pub mod integrity;
pub mod materials;
pub mod skinning;
pub mod textures;

/// Inputs every rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Statistics of the wearable under validation.
    pub stats: &'a ModelStats,
    /// Limits resolved from the user's slot selection.
    pub budget: &'a ResolvedBudget,
}

impl<'a> RuleContext<'a> {
    pub fn new(stats: &'a ModelStats, budget: &'a ResolvedBudget) -> Self {
        Self { stats, budget }
    }
}

/// A single threshold check over model statistics.
///
/// Rules are pure: the same context always yields the same result.
pub trait ValidationRule: Send + Sync {
    /// Unique identifier (e.g., "triangles", "skin-weights").
    fn id(&self) -> &'static str;

    /// Report grouping.
    fn category(&self) -> RuleCategory;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Whether the rule has anything to check for this model.
    ///
    /// Rules that do not apply are left out of the report.
    fn applies(&self, _ctx: &RuleContext) -> bool {
        true
    }

    /// Run the check.
    fn evaluate(&self, ctx: &RuleContext) -> RuleResult;
}

/// Returns the full rule battery in report order.
pub fn all_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(geometry::TrianglesRule),
        Box::new(materials::MaterialsRule),
        Box::new(textures::TextureCountRule),
        Box::new(textures::TextureSizesRule),
        Box::new(textures::TextureSquareRule),
        Box::new(textures::NormalMapsRule),
        Box::new(textures::MetallicRoughnessMapsRule),
        Box::new(skinning::SkinWeightsRule),
        Box::new(dimensions::DimensionsRule),
        Box::new(integrity::FileIntegrityRule),
        Box::new(integrity::FileSizeRule),
    ]
}

/// Returns `n` followed by `noun`, pluralized with a trailing "s".
pub(crate) fn plural(n: impl Into<u64>, noun: &str) -> String {
    let n = n.into();
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use wearcheck_spec::{
        resolve_budget, BoundingBox, ModelStats, ResolvedBudget, Slot, TextureInfo, UserSelection,
    };

    /// A model that passes every rule against a hat budget.
    pub fn clean_stats() -> ModelStats {
        ModelStats {
            triangle_count: 1200,
            material_count_excl_avatar_skin: 1,
            textures: vec![TextureInfo::new("base_color", 1024, 1024)],
            used_texture_count: 1,
            bbox: BoundingBox::new(0.4, 0.3, 0.4),
            file_size_bytes: 400_000,
            ..Default::default()
        }
    }

    pub fn hat_budget() -> ResolvedBudget {
        resolve_budget(&UserSelection::new(Slot::Hat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let ids: Vec<_> = all_rules().iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                "triangles",
                "materials",
                "textures",
                "texture-sizes",
                "texture-square",
                "normal-maps",
                "metallic-roughness-maps",
                "skin-weights",
                "dimensions",
                "file-integrity",
                "file-size",
            ]
        );
    }

    #[test]
    fn test_rule_ids_unique() {
        let mut ids: Vec<_> = all_rules().iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1u32, "material"), "1 material");
        assert_eq!(plural(3u32, "material"), "3 materials");
        assert_eq!(plural(0u32, "texture"), "0 textures");
    }
}
