//! `npc-dog` — the dog companion's behavior controllers.
//!
//! Three mutually-exclusive behaviors, arbitrated by [`DogBehaviorManager`]:
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`config`]  | `DogConfig` and per-behavior tunables                     |
//! | [`manager`] | `DogBehaviorManager` — arbiter + fetch-candidate tracking |
//! | [`follow`]  | `Follow` — sit/stand/move toward the player               |
//! | [`fetch`]   | `FetchGame` — chase, pick up, and carry a thrown object   |
//! | [`walk`]    | `RandomWalk` — idle roam cycle inside map bounds          |
//!
//! # Activation model
//!
//! Exactly one behavior drives motion at any tick.  The arbiter is the only
//! code that enables or disables behaviors, and it does so through one atomic
//! switch function: the outgoing behavior's `on_disable` cancels its pending
//! timed transitions synchronously before the incoming behavior's `on_enable`
//! runs.  Individual behaviors never reach across to each other.
//!
//! # Tick split
//!
//! `update` (presentation tick, variable rate) advances detection, state
//! machine transitions, and animation flags; `fixed_update` (simulation tick,
//! fixed timestep) advances physics-coupled steering, translation, and
//! rotation.

pub mod config;
pub mod fetch;
pub mod follow;
pub mod manager;
pub mod walk;


pub use config::{DogConfig, FetchConfig, FollowConfig, WalkConfig};
pub use fetch::{FetchGame, FetchStatus};
pub use follow::{Follow, FollowState};
pub use manager::{DogBehavior, DogBehaviorManager};
pub use walk::{RandomWalk, WalkPhase};

/// Animation parameter names shared by the dog behaviors.
pub mod params {
    pub const IS_WALKING: &str = "isWalking";
    pub const IS_SITTING: &str = "isSitting";
    pub const SPEED: &str = "Speed";
}
