//! Collision-layer bit mask used to filter raycasts.

use std::ops::BitOr;

/// A bit mask over collision layers.
///
/// The framework only names the layers its steering code filters on; hosts
/// are free to use the remaining bits for their own layers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Static level geometry the avoidance fans steer around.
    pub const OBSTACLE: LayerMask = LayerMask(1 << 0);
    /// Creatures (dogs, critters, the player).
    pub const CREATURE: LayerMask = LayerMask(1 << 1);
    /// Dynamic props (fetch balls, feed piles).
    pub const PROP: LayerMask = LayerMask(1 << 2);

    /// `true` if the two masks share any layer.
    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for LayerMask {
    type Output = LayerMask;
    #[inline]
    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}
