//! `npc-sim` — tick loop harness for the rust_npc framework.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Presentation — agent.update() in spawn order: detection, state
//!                    transitions, animation parameter writes.
//!   ② Simulation   — agent.fixed_update() in spawn order: steering,
//!                    translation, rotation at the fixed timestep.
//!   ③ Clock        — advance one fixed tick.
//! ```
//!
//! Each agent owns its controller, its animation parameter sink, and its
//! deterministic RNG; the world is shared and mutated one agent at a time,
//! so a run replays exactly from a seed.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use npc_sim::{NoopObserver, SimBuilder};
//! use npc_world::{ObjectSpec, SceneWorld};
//!
//! let mut world = SceneWorld::new();
//! let player = world.spawn(ObjectSpec::creature(player_pos));
//! let dog    = world.spawn(ObjectSpec::creature(dog_pos));
//!
//! let mut sim = SimBuilder::new(world, 42)
//!     .dog(dog, player, DogConfig::default())
//!     .build()?;
//! sim.run_secs(60.0, &mut NoopObserver);
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Controller};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
