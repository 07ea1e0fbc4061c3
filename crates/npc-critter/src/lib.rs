//! `npc-critter` — the chicken-type creature's state machine.
//!
//! One enum state per agent: roaming (pick a spot, walk there, wait),
//! escaping (flee the player at higher speed), attracted (walk to a tagged
//! object) and pecking (a counted trigger sequence paced by the animation
//! clip).  Escape has top priority and interrupts anything, including a peck
//! mid-sequence; a finished peck grants a timed immunity to attraction.
//!
//! Movement is direct transform writes at a held ground height — critters
//! are kinematic-free and never touch the physics body.  Heading conflicts
//! are resolved with the angle-stepped avoidance from `npc-steer`, which
//! also dodges flock-mates, plus a destination occupancy veto.

pub mod config;
pub mod machine;


pub use config::CritterConfig;
pub use machine::{CritterMachine, CritterState, RoamPhase};

/// Animation parameter names used by the critter.
pub mod params {
    pub const IS_WALKING: &str = "isWalking";
    pub const PECK_TRIGGER: &str = "PeckTrigger";
    pub const WALK_TRIGGER: &str = "WalkTrigger";
}
