//! Skin weight policy.
//!
//! Statistics producers use [`classify_vertex_weights`] to decide which
//! skinned vertices count as bad. A vertex is bad when any of its four
//! weights is not finite or is negative, when its weights do not sum to 1.0
//! within [`WEIGHT_SUM_TOLERANCE`], or when a joint with non-zero influence
//! is outside the skeleton.

use crate::stats::SkinningStats;

/// Allowed deviation of a vertex weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f32 = 0.01;

/// Returns true if one vertex's influences are invalid.
pub fn is_bad_vertex(joints: [u16; 4], weights: [f32; 4], joint_count: usize) -> bool {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return true;
    }

    let sum: f32 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return true;
    }

    joints
        .iter()
        .zip(weights.iter())
        .any(|(joint, weight)| *weight > 0.0 && usize::from(*joint) >= joint_count)
}

/// Counts bad vertices across a skinned mesh.
///
/// Only vertices present in both arrays are inspected.
pub fn classify_vertex_weights(
    joints: &[[u16; 4]],
    weights: &[[f32; 4]],
    joint_count: usize,
) -> SkinningStats {
    let mut stats = SkinningStats::default();
    for (j, w) in joints.iter().zip(weights.iter()) {
        stats.total_vertices += 1;
        if is_bad_vertex(*j, *w, joint_count) {
            stats.bad_weight_vertices += 1;
        }
    }
    stats
}
