//! Test fixtures for model statistics.

use std::path::PathBuf;
use tempfile::TempDir;
use wearcheck_spec::{BoundingBox, ModelStats, SkinningStats, TextureInfo};

/// Statistics that pass every rule for any target slot.
pub fn clean_stats() -> ModelStats {
    ModelStats {
        triangle_count: 400,
        material_count_excl_avatar_skin: 1,
        textures: vec![TextureInfo::new("base_color", 512, 512)],
        used_texture_count: 1,
        bbox: BoundingBox::new(0.3, 0.3, 0.3),
        file_size_bytes: 200_000,
        ..Default::default()
    }
}

/// Builder for statistics fixtures, starting from [`clean_stats`].
#[derive(Debug, Clone)]
pub struct StatsFixture {
    stats: ModelStats,
}

impl Default for StatsFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsFixture {
    pub fn new() -> Self {
        Self {
            stats: clean_stats(),
        }
    }

    pub fn triangles(mut self, count: u32) -> Self {
        self.stats.triangle_count = count;
        self
    }

    pub fn materials(mut self, count: u32) -> Self {
        self.stats.material_count_excl_avatar_skin = count;
        self
    }

    pub fn texture(mut self, name: &str, width: u32, height: u32) -> Self {
        self.stats.textures.push(TextureInfo::new(name, width, height));
        self
    }

    pub fn used_textures(mut self, count: u32) -> Self {
        self.stats.used_texture_count = count;
        self
    }

    pub fn normal_maps(mut self) -> Self {
        self.stats.has_normal_maps = true;
        self
    }

    pub fn skinning(mut self, total: u32, bad: u32) -> Self {
        self.stats.skinning = Some(SkinningStats::new(total, bad));
        self
    }

    pub fn bbox(mut self, width: f64, height: f64, depth: f64) -> Self {
        self.stats.bbox = BoundingBox::new(width, height, depth);
        self
    }

    pub fn file_size(mut self, bytes: u64) -> Self {
        self.stats.file_size_bytes = bytes;
        self
    }

    pub fn build(self) -> ModelStats {
        self.stats
    }

    /// Writes the statistics as JSON into a fresh temp directory.
    ///
    /// The directory is removed when the returned `TempDir` is dropped.
    pub fn write(self, name: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(name);
        let json = serde_json::to_string_pretty(&self.stats).expect("stats serialize");
        std::fs::write(&path, json).expect("Failed to write stats file");
        (dir, path)
    }
}
