//! The world-query and world-writer traits — abstract physics capabilities
//! consumed by every behavior.
//!
//! # Contract
//!
//! Queries are read-only and reentrant; a behavior may issue any number of
//! them per tick.  Writers mutate exactly one agent's slice of the world per
//! call — behaviors only ever write to their own agent and to a target object
//! they have acquired (carried fetch ball), so no cross-agent locking is
//! needed.
//!
//! # Liveness
//!
//! Object handles are weak: another system may despawn or re-parent any
//! object between ticks.  Behaviors must check [`WorldQuery::is_alive`]
//! before acting on a stored handle; queries on a dead handle return inert
//! defaults (`Vec3::ZERO`, `Quat::IDENTITY`, `false`, `None`) rather than
//! panicking.

use npc_core::{ObjectId, Quat, Vec3};

use crate::{LayerMask, Tag};

/// Result of a successful raycast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// The object that was hit.
    pub object: ObjectId,
    /// Distance from the ray origin to the hit, in world units.
    pub distance: f32,
}

/// Read-only world observations.
pub trait WorldQuery {
    /// `true` while `object` exists in the world.
    fn is_alive(&self, object: ObjectId) -> bool;

    /// World-space position (resolves parenting).
    fn position(&self, object: ObjectId) -> Vec3;

    /// World-space rotation (resolves parenting).
    fn rotation(&self, object: ObjectId) -> Quat;

    /// Linear velocity of the object's physics body.
    fn linear_velocity(&self, object: ObjectId) -> Vec3;

    /// `true` if the physics body is kinematic (driven, not simulated).
    fn is_kinematic(&self, object: ObjectId) -> bool;

    /// The object's parent in the scene hierarchy, if any.
    fn parent(&self, object: ObjectId) -> Option<ObjectId>;

    /// The first live child attached to `parent` (jaw-socket lookup).
    fn child_of(&self, parent: ObjectId) -> Option<ObjectId>;

    /// `true` if `object` carries `tag`.
    fn has_tag(&self, object: ObjectId, tag: Tag) -> bool;

    /// Cast a ray and return the nearest hit on a layer in `mask`, if any.
    ///
    /// A ray starting inside a collider does not hit that collider.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;

    /// All live objects whose collider intersects the given sphere.
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<ObjectId>;
}

/// World mutations.  Everything a behavior may change about the world.
pub trait WorldWriter: WorldQuery {
    /// Teleport — direct transform write for kinematic-free motion.
    fn set_position(&mut self, object: ObjectId, position: Vec3);

    /// Direct rotation write.
    fn set_rotation(&mut self, object: ObjectId, rotation: Quat);

    /// Physics-stepped position write (`MovePosition` semantics): the host
    /// engine sweeps the body; the in-memory scene applies it directly.
    fn move_position(&mut self, object: ObjectId, position: Vec3);

    /// Physics-stepped rotation write.
    fn move_rotation(&mut self, object: ObjectId, rotation: Quat);

    fn set_linear_velocity(&mut self, object: ObjectId, velocity: Vec3);

    fn set_angular_velocity(&mut self, object: ObjectId, velocity: Vec3);

    /// Instantaneous impulse on a dynamic body (unit mass).
    fn apply_impulse(&mut self, object: ObjectId, impulse: Vec3);

    /// Switch the body between kinematic (carried) and dynamic (free).
    fn set_kinematic(&mut self, object: ObjectId, kinematic: bool);

    /// Attach to / detach from a parent.  Detaching preserves the current
    /// world pose.
    fn set_parent(&mut self, object: ObjectId, parent: Option<ObjectId>);

    /// Local pose relative to the parent (jaw-socket offset while carried).
    fn set_local_pose(&mut self, object: ObjectId, position: Vec3, rotation: Quat);

    /// Permanently disable collision between two objects' collider sets.
    fn ignore_collision(&mut self, a: ObjectId, b: ObjectId);

    /// Make the collider solid (non-trigger) and enabled, or not.
    fn set_collider_solid(&mut self, object: ObjectId, solid: bool);

    /// Show/hide the object and include/exclude it from queries.
    fn set_active(&mut self, object: ObjectId, active: bool);
}
