//! `npc-world` — the seam between behavior logic and the host engine.
//!
//! Behaviors never talk to an engine directly: everything they can observe
//! goes through [`WorldQuery`], everything they can change goes through
//! [`WorldWriter`], and every animation parameter write goes through
//! [`AnimSink`].  A host engine implements these traits over its own scene
//! graph; tests and the bundled harness use the in-memory [`SceneWorld`] and
//! [`AnimParams`] implementations.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`layer`] | `LayerMask` collision-layer bit mask                       |
//! | [`tag`]   | `Tag` — gameplay object tags                               |
//! | [`query`] | `WorldQuery`, `WorldWriter`, `RayHit`                      |
//! | [`anim`]  | `AnimSink` trait, `AnimParams` in-memory implementation    |
//! | [`scene`] | `SceneWorld` — AABB-based in-memory world                  |

pub mod anim;
pub mod layer;
pub mod query;
pub mod scene;
pub mod tag;


pub use anim::{AnimParams, AnimSink};
pub use layer::LayerMask;
pub use query::{RayHit, WorldQuery, WorldWriter};
pub use scene::{ObjectSpec, SceneWorld};
pub use tag::Tag;
