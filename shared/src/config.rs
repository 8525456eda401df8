use std::default::Default;

use crate::Color;

/// Default edge feathering distance: 10 cm, in metres
pub const DEFAULT_EDGE_FEATHERING_DISTANCE: f32 = 0.1;

/// Contains Config properties used when turning surfaces into meshes
#[derive(Clone, Debug)]
pub struct MeshConfig {
    /// How far the opaque interior ring is pulled in from the transparent
    /// boundary ring. Negative values are treated as zero.
    pub edge_feathering_distance: f32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            edge_feathering_distance: DEFAULT_EDGE_FEATHERING_DISTANCE,
        }
    }
}

/// Contains Config properties used by the LocalTracker
#[derive(Clone, Debug, Default)]
pub struct TrackerConfig {
    /// Colors handed out round-robin to newly created surfaces. An empty
    /// palette tints every surface white.
    pub plane_colors: Vec<Color>,
}

impl TrackerConfig {
    pub fn with_palette(plane_colors: Vec<Color>) -> Self {
        Self { plane_colors }
    }
}
