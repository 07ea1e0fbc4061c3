//! `SceneWorld` — an in-memory world-query/world-writer implementation.
//!
//! Objects are axis-aligned boxes with a pose, a physics-ish state (velocity,
//! kinematic flag), tags, and a collision layer.  Raycasts use the slab
//! method against those boxes; sphere overlaps use the clamped-point test.
//! There is no collision *resolution* — that is the host engine's concern —
//! so `move_position` lands exactly where asked.  Ignore-collision requests
//! are recorded and queryable, which is all the behavior contracts need.

use npc_core::{ObjectId, Quat, Vec3};
use rustc_hash::FxHashSet;

use crate::{LayerMask, RayHit, Tag, WorldQuery, WorldWriter};

// ── ObjectSpec ────────────────────────────────────────────────────────────────

/// Everything needed to spawn one scene object.
#[derive(Clone, Debug)]
pub struct ObjectSpec {
    pub position: Vec3,
    pub rotation: Quat,
    pub half_extents: Vec3,
    pub layer: LayerMask,
    pub tags: Vec<Tag>,
    pub kinematic: bool,
}

impl ObjectSpec {
    /// A creature-sized box on the creature layer.
    pub fn creature(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            half_extents: Vec3::new(0.3, 0.4, 0.3),
            layer: LayerMask::CREATURE,
            tags: vec![],
            kinematic: false,
        }
    }

    /// A small dynamic prop (fetch ball, feed pile).
    pub fn prop(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            half_extents: Vec3::splat(0.15),
            layer: LayerMask::PROP,
            tags: vec![],
            kinematic: false,
        }
    }

    /// A static obstacle block.
    pub fn obstacle(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            half_extents,
            layer: LayerMask::OBSTACLE,
            tags: vec![],
            kinematic: true,
        }
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

// ── SceneObject ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct SceneObject {
    alive: bool,
    active: bool,
    solid: bool,
    kinematic: bool,
    layer: LayerMask,
    tags: Vec<Tag>,
    half_extents: Vec3,
    /// World pose while unparented; ignored while `parent` is set.
    position: Vec3,
    rotation: Quat,
    /// Local pose relative to `parent` while attached.
    parent: Option<ObjectId>,
    local_position: Vec3,
    local_rotation: Quat,
    velocity: Vec3,
    angular_velocity: Vec3,
}

// ── SceneWorld ────────────────────────────────────────────────────────────────

/// In-memory scene used by the harness and by every behavior test.
#[derive(Default)]
pub struct SceneWorld {
    objects: Vec<SceneObject>,
    /// Normalized (low, high) pairs with collision disabled between them.
    ignored_pairs: FxHashSet<(ObjectId, ObjectId)>,
}

impl SceneWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, spec: ObjectSpec) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(SceneObject {
            alive: true,
            active: true,
            solid: true,
            kinematic: spec.kinematic,
            layer: spec.layer,
            tags: spec.tags,
            half_extents: spec.half_extents,
            position: spec.position,
            rotation: spec.rotation,
            parent: None,
            local_position: Vec3::ZERO,
            local_rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
        });
        id
    }

    /// Remove `object` from the world.  Handles held elsewhere go stale and
    /// must be re-validated via [`WorldQuery::is_alive`].
    pub fn despawn(&mut self, object: ObjectId) {
        if let Some(obj) = self.objects.get_mut(object.index()) {
            obj.alive = false;
        }
    }

    /// `true` if collision between `a` and `b` has been disabled.
    pub fn collision_ignored(&self, a: ObjectId, b: ObjectId) -> bool {
        self.ignored_pairs.contains(&normalize_pair(a, b))
    }

    /// `true` while the object is shown and included in queries.
    pub fn is_active(&self, object: ObjectId) -> bool {
        self.get(object).is_some_and(|o| o.active)
    }

    /// `true` while the collider is solid (non-trigger) and enabled.
    pub fn is_solid(&self, object: ObjectId) -> bool {
        self.get(object).is_some_and(|o| o.solid)
    }

    fn get(&self, object: ObjectId) -> Option<&SceneObject> {
        self.objects.get(object.index()).filter(|o| o.alive)
    }

    fn get_mut(&mut self, object: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(object.index()).filter(|o| o.alive)
    }

    fn world_pose(&self, object: ObjectId) -> (Vec3, Quat) {
        let Some(obj) = self.get(object) else {
            return (Vec3::ZERO, Quat::IDENTITY);
        };
        match obj.parent {
            None => (obj.position, obj.rotation),
            Some(parent) => {
                let (ppos, prot) = self.world_pose(parent);
                (ppos + prot * obj.local_position, prot * obj.local_rotation)
            }
        }
    }
}

fn normalize_pair(a: ObjectId, b: ObjectId) -> (ObjectId, ObjectId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Slab-method ray vs. AABB intersection.
///
/// Returns the entry distance, or `None` on a miss.  A ray starting inside
/// the box is treated as a miss, matching engine raycast semantics (and
/// preventing creatures from "hitting" their own collider).
fn ray_aabb(origin: Vec3, dir: Vec3, center: Vec3, half: Vec3) -> Option<f32> {
    let min = center - half;
    let max = center + half;
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let (o, d, lo, hi) = match axis {
            0 => (origin.x, dir.x, min.x, max.x),
            1 => (origin.y, dir.y, min.y, max.y),
            _ => (origin.z, dir.z, min.z, max.z),
        };
        if d.abs() < 1e-8 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let t0 = (lo - o) / d;
        let t1 = (hi - o) / d;
        let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    // Entry behind or at the origin means the origin is inside (or past) the
    // box — no hit.
    if t_near <= 0.0 { None } else { Some(t_near) }
}

impl WorldQuery for SceneWorld {
    fn is_alive(&self, object: ObjectId) -> bool {
        self.get(object).is_some()
    }

    fn position(&self, object: ObjectId) -> Vec3 {
        self.world_pose(object).0
    }

    fn rotation(&self, object: ObjectId) -> Quat {
        self.world_pose(object).1
    }

    fn linear_velocity(&self, object: ObjectId) -> Vec3 {
        self.get(object).map_or(Vec3::ZERO, |o| o.velocity)
    }

    fn is_kinematic(&self, object: ObjectId) -> bool {
        self.get(object).is_some_and(|o| o.kinematic)
    }

    fn parent(&self, object: ObjectId) -> Option<ObjectId> {
        self.get(object).and_then(|o| o.parent)
    }

    fn child_of(&self, parent: ObjectId) -> Option<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .find(|(_, o)| o.alive && o.parent == Some(parent))
            .map(|(i, _)| ObjectId(i as u32))
    }

    fn has_tag(&self, object: ObjectId, tag: Tag) -> bool {
        self.get(object).is_some_and(|o| o.tags.contains(&tag))
    }

    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }
        let mut best: Option<RayHit> = None;
        for (i, obj) in self.objects.iter().enumerate() {
            if !obj.alive || !obj.active || !obj.solid || !obj.layer.intersects(mask) {
                continue;
            }
            let id = ObjectId(i as u32);
            let (center, _) = self.world_pose(id);
            if let Some(dist) = ray_aabb(origin, dir, center, obj.half_extents) {
                if dist <= max_distance && best.is_none_or(|b| dist < b.distance) {
                    best = Some(RayHit { object: id, distance: dist });
                }
            }
        }
        best
    }

    fn overlap_sphere(&self, center: Vec3, radius: f32) -> Vec<ObjectId> {
        let mut hits = Vec::new();
        for (i, obj) in self.objects.iter().enumerate() {
            if !obj.alive || !obj.active {
                continue;
            }
            let id = ObjectId(i as u32);
            let (pos, _) = self.world_pose(id);
            let closest = center.clamp(pos - obj.half_extents, pos + obj.half_extents);
            if closest.distance_squared(center) <= radius * radius {
                hits.push(id);
            }
        }
        hits
    }
}

impl WorldWriter for SceneWorld {
    fn set_position(&mut self, object: ObjectId, position: Vec3) {
        if let Some(obj) = self.get_mut(object) {
            obj.position = position;
        }
    }

    fn set_rotation(&mut self, object: ObjectId, rotation: Quat) {
        if let Some(obj) = self.get_mut(object) {
            obj.rotation = rotation;
        }
    }

    fn move_position(&mut self, object: ObjectId, position: Vec3) {
        // No sweep in the reference scene; the host engine resolves contacts.
        self.set_position(object, position);
    }

    fn move_rotation(&mut self, object: ObjectId, rotation: Quat) {
        self.set_rotation(object, rotation);
    }

    fn set_linear_velocity(&mut self, object: ObjectId, velocity: Vec3) {
        if let Some(obj) = self.get_mut(object) {
            obj.velocity = velocity;
        }
    }

    fn set_angular_velocity(&mut self, object: ObjectId, velocity: Vec3) {
        if let Some(obj) = self.get_mut(object) {
            obj.angular_velocity = velocity;
        }
    }

    fn apply_impulse(&mut self, object: ObjectId, impulse: Vec3) {
        if let Some(obj) = self.get_mut(object) {
            if !obj.kinematic {
                obj.velocity += impulse; // unit mass
            }
        }
    }

    fn set_kinematic(&mut self, object: ObjectId, kinematic: bool) {
        if let Some(obj) = self.get_mut(object) {
            obj.kinematic = kinematic;
        }
    }

    fn set_parent(&mut self, object: ObjectId, parent: Option<ObjectId>) {
        // Detaching must preserve the world pose, so resolve it first.
        let (wpos, wrot) = self.world_pose(object);
        if let Some(obj) = self.get_mut(object) {
            obj.parent = parent;
            if parent.is_none() {
                obj.position = wpos;
                obj.rotation = wrot;
            } else {
                obj.local_position = Vec3::ZERO;
                obj.local_rotation = Quat::IDENTITY;
            }
        }
    }

    fn set_local_pose(&mut self, object: ObjectId, position: Vec3, rotation: Quat) {
        if let Some(obj) = self.get_mut(object) {
            obj.local_position = position;
            obj.local_rotation = rotation;
        }
    }

    fn ignore_collision(&mut self, a: ObjectId, b: ObjectId) {
        self.ignored_pairs.insert(normalize_pair(a, b));
    }

    fn set_collider_solid(&mut self, object: ObjectId, solid: bool) {
        if let Some(obj) = self.get_mut(object) {
            obj.solid = solid;
        }
    }

    fn set_active(&mut self, object: ObjectId, active: bool) {
        if let Some(obj) = self.get_mut(object) {
            obj.active = active;
        }
    }
}
