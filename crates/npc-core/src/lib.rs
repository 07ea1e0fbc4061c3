//! `npc-core` — foundational types for the `rust_npc` behavior framework.
//!
//! This crate is a dependency of every other `npc-*` crate.  It intentionally
//! has no `npc-*` dependencies and minimal external ones (only `glam`, `rand`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`ids`]   | `AgentId`, `ObjectId`                               |
//! | [`math`]  | Yaw-only rotation helpers on `glam` types           |
//! | [`time`]  | `Tick`, `SimClock`, `Frame`                         |
//! | [`rng`]   | `AgentRng` (per-agent deterministic RNG)            |
//! | [`error`] | `NpcError`, `NpcResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NpcError, NpcResult};
pub use ids::{AgentId, ObjectId};
pub use rng::AgentRng;
pub use time::{Frame, SimClock, Tick};

// The whole framework shares glam's vector/quaternion types.
pub use glam::{Quat, Vec3};
