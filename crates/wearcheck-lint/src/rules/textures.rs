//! Texture and material map rules.
//!
//! Texture count and size limits are blocking. Non-square textures, normal
//! maps and metallic-roughness maps only warn.

use crate::report::{RuleCategory, RuleResult};
use crate::rules::{plural, RuleContext, ValidationRule};

/// Largest allowed texture edge in pixels.
pub const MAX_TEXTURE_EDGE: u32 = 1024;

/// Used texture count must not exceed the slot cap.
pub struct TextureCountRule;

impl ValidationRule for TextureCountRule {
    fn id(&self) -> &'static str {
        "textures"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::TexturesMaps
    }

    fn description(&self) -> &'static str {
        "Number of used textures is within the slot cap"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let actual = ctx.stats.used_texture_count;
        let max = ctx.budget.max_textures;
        let expected = format!("≤ {}", plural(max, "texture"));
        let actual_text = plural(actual, "texture");

        if actual <= max {
            return RuleResult::pass(self.id(), self.category(), expected, actual_text);
        }

        let tip = format!(
            "Remove {} or combine maps into one atlas",
            plural(actual - max, "texture")
        );
        RuleResult::fail(self.id(), self.category(), expected, actual_text).with_tip(tip)
    }
}

/// Every texture must fit within 1024×1024.
pub struct TextureSizesRule;

impl ValidationRule for TextureSizesRule {
    fn id(&self) -> &'static str {
        "texture-sizes"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::TexturesMaps
    }

    fn description(&self) -> &'static str {
        "No texture exceeds 1024×1024 pixels"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let expected = format!("≤ {}×{} px", MAX_TEXTURE_EDGE, MAX_TEXTURE_EDGE);
        let oversized: Vec<_> = ctx
            .stats
            .textures
            .iter()
            .filter(|t| t.width > MAX_TEXTURE_EDGE || t.height > MAX_TEXTURE_EDGE)
            .collect();

        if oversized.is_empty() {
            let summary = ctx.stats.texture_summary();
            let actual = if summary.count == 0 {
                "no textures".to_string()
            } else {
                format!("largest edge {} px", summary.largest_edge)
            };
            return RuleResult::pass(self.id(), self.category(), expected, actual);
        }

        let listed: Vec<String> = oversized
            .iter()
            .map(|t| format!("{} ({}×{})", t.name, t.width, t.height))
            .collect();
        let names: Vec<&str> = oversized.iter().map(|t| t.name.as_str()).collect();

        let tip = format!(
            "Downscale to {} px or less: {}",
            MAX_TEXTURE_EDGE,
            names.join(", ")
        );
        RuleResult::fail(self.id(), self.category(), expected, listed.join(", ")).with_tip(tip)
    }
}

/// Textures should be square.
pub struct TextureSquareRule;

impl ValidationRule for TextureSquareRule {
    fn id(&self) -> &'static str {
        "texture-square"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::TexturesMaps
    }

    fn description(&self) -> &'static str {
        "Textures are square (width equals height)"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        let expected = "width = height";
        let non_square: Vec<&str> = ctx
            .stats
            .textures
            .iter()
            .filter(|t| !t.is_square())
            .map(|t| t.name.as_str())
            .collect();

        if non_square.is_empty() {
            return RuleResult::pass(self.id(), self.category(), expected, "all square");
        }

        let actual = format!("{} non-square: {}", non_square.len(), non_square.join(", "));
        RuleResult::warn(self.id(), self.category(), expected, actual)
            .with_tip("Square power-of-two textures are recommended; this does not block upload")
    }
}

/// Normal maps are discouraged.
pub struct NormalMapsRule;

impl ValidationRule for NormalMapsRule {
    fn id(&self) -> &'static str {
        "normal-maps"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::TexturesMaps
    }

    fn description(&self) -> &'static str {
        "No material uses a normal map"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        map_presence(
            self.id(),
            self.category(),
            ctx.stats.has_normal_maps,
            "Normal maps are discouraged; bake surface detail into the base color instead",
        )
    }
}

/// Metallic-roughness maps are discouraged.
pub struct MetallicRoughnessMapsRule;

impl ValidationRule for MetallicRoughnessMapsRule {
    fn id(&self) -> &'static str {
        "metallic-roughness-maps"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::TexturesMaps
    }

    fn description(&self) -> &'static str {
        "No material uses a metallic-roughness map"
    }

    fn evaluate(&self, ctx: &RuleContext) -> RuleResult {
        map_presence(
            self.id(),
            self.category(),
            ctx.stats.has_metallic_roughness_maps,
            "Metallic-roughness maps are discouraged; use constant factors instead",
        )
    }
}

fn map_presence(id: &str, category: RuleCategory, present: bool, tip: &str) -> RuleResult {
    if present {
        RuleResult::warn(id, category, "none", "present").with_tip(tip)
    } else {
        RuleResult::pass(id, category, "none", "none")
    }
}
