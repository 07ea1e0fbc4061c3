//! Gameplay object tags.

use std::fmt;

/// A gameplay tag the behavior code filters world objects by.
///
/// Tags are orthogonal to [`LayerMask`][crate::LayerMask]: layers gate
/// physics queries, tags classify what an object *means* to a behavior.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// A throwable object the dog's fetch game is allowed to chase.
    Fetch,
    /// An object critters are drawn to (feed, shiny things).
    Attract,
    /// Same-species marker used for occupancy avoidance between critters.
    Flock,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Fetch => "fetch",
            Tag::Attract => "attract",
            Tag::Flock => "flock",
        };
        f.write_str(name)
    }
}
