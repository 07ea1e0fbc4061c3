//! `npc-steer` — local steering primitives shared by every movement behavior.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`bounds`]  | `MapBounds` — rectangular walkable-area limits            |
//! | [`kernel`]  | `SteeringKernel` — raycast fan + bounds-checked resample  |
//! | [`stepped`] | `AngleSteppedAvoidance` — incremental heading rotation    |
//!
//! Two avoidance policies exist because the creatures steer differently: the
//! dog abandons a blocked heading entirely and resamples a random one inside
//! the map bounds, while critters nudge their desired heading around the
//! blockage in fixed angular steps and also refuse destinations occupied by
//! flock-mates.  Both are pure functions over [`WorldQuery`] — they never
//! mutate the world.
//!
//! [`WorldQuery`]: npc_world::WorldQuery

pub mod bounds;
pub mod kernel;
pub mod stepped;


pub use bounds::MapBounds;
pub use kernel::SteeringKernel;
pub use stepped::AngleSteppedAvoidance;
