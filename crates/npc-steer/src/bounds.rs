//! Rectangular walkable-area limits on the ground plane.

use npc_core::Vec3;

/// Axis-aligned map bounds on the XZ plane.  Y is unconstrained.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl MapBounds {
    /// A square `[-half, half]` on both axes.
    pub fn square(half: f32) -> Self {
        Self {
            min_x: -half,
            max_x: half,
            min_z: -half,
            max_z: half,
        }
    }

    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.z >= self.min_z
            && position.z <= self.max_z
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::square(10.0)
    }
}
