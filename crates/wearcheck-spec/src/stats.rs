//! Model statistics contract.
//!
//! These are the normalized facts a mesh inspector extracts from a wearable
//! asset. The validation engine consumes them read-only and does not re-derive
//! them from geometry.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Texture entry referenced by the model's materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureInfo {
    /// Texture or image name.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TextureInfo {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Material alpha blending mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlphaMode {
    Opaque,
    Mask,
    Blend,
}

/// Axis-aligned bounding box extents in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Normal orientation statistics.
///
/// The producer currently reports zero for both ratios.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalStats {
    pub inverted_vertex_ratio: f64,
    pub inverted_face_ratio: f64,
}

/// Skin weight totals for skinned meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinningStats {
    /// Number of skinned vertices inspected.
    pub total_vertices: u32,
    /// Vertices with invalid bone influences.
    pub bad_weight_vertices: u32,
}

impl SkinningStats {
    pub fn new(total_vertices: u32, bad_weight_vertices: u32) -> Self {
        Self {
            total_vertices,
            bad_weight_vertices,
        }
    }

    /// Fraction of inspected vertices with bad weights.
    ///
    /// Zero when no vertices were inspected.
    pub fn bad_ratio(&self) -> f64 {
        if self.total_vertices == 0 {
            return 0.0;
        }
        f64::from(self.bad_weight_vertices) / f64::from(self.total_vertices)
    }
}

/// Statistics for one wearable asset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStats {
    /// Total triangles across all meshes.
    pub triangle_count: u32,
    /// Distinct materials, not counting the avatar skin material.
    pub material_count_excl_avatar_skin: u32,
    /// Textures referenced by the materials.
    pub textures: Vec<TextureInfo>,
    /// Distinct textures actually sampled by materials.
    pub used_texture_count: u32,
    /// Any material has a normal map.
    pub has_normal_maps: bool,
    /// Any material has a metallic-roughness map.
    pub has_metallic_roughness_maps: bool,
    /// Alpha mode of each material.
    pub alpha_modes: Vec<AlphaMode>,
    /// Bounding box extents in meters.
    pub bbox: BoundingBox,
    /// Normal orientation statistics.
    pub normals: NormalStats,
    /// Skin weight totals, absent for unskinned models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skinning: Option<SkinningStats>,
    /// Size of the source file in bytes.
    pub file_size_bytes: u64,
}

impl ModelStats {
    /// Parses statistics from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, StatsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads statistics from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, StatsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Summarizes the texture list.
    pub fn texture_summary(&self) -> TextureSummary {
        TextureSummary {
            count: self.textures.len(),
            largest_edge: self
                .textures
                .iter()
                .map(|t| t.width.max(t.height))
                .max()
                .unwrap_or(0),
            non_square: self.textures.iter().filter(|t| !t.is_square()).count(),
        }
    }
}

/// Aggregate view of a texture list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSummary {
    pub count: usize,
    pub largest_edge: u32,
    pub non_square: usize,
}
