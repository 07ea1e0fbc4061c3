//! Angle-stepped avoidance: rotate a desired heading in fixed increments
//! until an unobstructed one is found.
//!
//! Used by the critter state machine, which (unlike the dog) must also avoid
//! *occupants* — flock-mates in its path and at its destination — via
//! tag-filtered ray and sphere probes.

use npc_core::{AgentRng, ObjectId, Vec3, math};
use npc_world::{LayerMask, Tag, WorldQuery};

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleSteppedAvoidance {
    /// Degrees to rotate the candidate heading per step (one rotation
    /// direction only).
    pub step_deg: f32,
    /// Maximum steps before giving up.  12 × 15° covers a half turn.
    pub max_steps: u32,
    /// Length of the probe rays.
    pub ray_distance: f32,
    /// Rays originate this far above ground level.
    pub eye_height: f32,
    /// Layers that count as obstacles.
    pub obstacle_mask: LayerMask,
    /// Same-species tag for occupant checks; `None` disables them.
    pub occupant_tag: Option<Tag>,
}

impl Default for AngleSteppedAvoidance {
    fn default() -> Self {
        Self {
            step_deg: 15.0,
            max_steps: 12,
            ray_distance: 2.0,
            eye_height: 0.1,
            obstacle_mask: LayerMask::OBSTACLE,
            occupant_tag: Some(Tag::Flock),
        }
    }
}

impl AngleSteppedAvoidance {
    /// Rotate `desired` in `step_deg` increments until a heading clears both
    /// the obstacle-layer ray test and the occupant ray test.
    ///
    /// If every increment is blocked, the *original* heading is returned —
    /// pushing through is preferable to freezing in place.
    pub fn adjust<W: WorldQuery>(
        &self,
        world: &W,
        me: ObjectId,
        position: Vec3,
        desired: Vec3,
    ) -> Vec3 {
        let desired = math::flatten_dir(desired);
        if desired == Vec3::ZERO {
            return desired;
        }
        let mut dir = desired;
        for _ in 0..self.max_steps {
            if !self.obstacle_ahead(world, position, dir) && !self.occupant_ahead(world, me, position, dir)
            {
                return dir;
            }
            dir = math::rotate_dir_y(dir, self.step_deg);
        }
        desired
    }

    /// Sphere probe at a candidate destination, filtered to the occupant tag
    /// and excluding `me`.  A blocked destination vetoes committing the move
    /// even when the direction itself passed the ray test.
    pub fn destination_blocked<W: WorldQuery>(
        &self,
        world: &W,
        me: ObjectId,
        candidate: Vec3,
        probe_radius: f32,
    ) -> bool {
        let Some(tag) = self.occupant_tag else {
            return false;
        };
        world
            .overlap_sphere(candidate, probe_radius)
            .into_iter()
            .any(|obj| obj != me && world.has_tag(obj, tag))
    }

    /// Random roam heading: up to 10 draws, accept the first with no
    /// obstacle-layer hit, else keep the last draw.  Occupants are
    /// deliberately not considered here — they move, obstacles don't.
    pub fn sample_clear_direction<W: WorldQuery>(
        &self,
        world: &W,
        position: Vec3,
        rng: &mut AgentRng,
    ) -> Vec3 {
        let mut dir = rng.unit_dir_xz();
        for _ in 0..10 {
            if !self.obstacle_ahead(world, position, dir) {
                break;
            }
            dir = rng.unit_dir_xz();
        }
        dir
    }

    fn obstacle_ahead<W: WorldQuery>(&self, world: &W, position: Vec3, dir: Vec3) -> bool {
        let origin = position + Vec3::Y * self.eye_height;
        world
            .raycast(origin, dir, self.ray_distance, self.obstacle_mask)
            .is_some()
    }

    fn occupant_ahead<W: WorldQuery>(
        &self,
        world: &W,
        me: ObjectId,
        position: Vec3,
        dir: Vec3,
    ) -> bool {
        let Some(tag) = self.occupant_tag else {
            return false;
        };
        let origin = position + Vec3::Y * self.eye_height;
        // Unfiltered ray, then tag check — a non-occupant body shields what's
        // behind it, same as the engine-side tag-filtered ray test.
        world
            .raycast(origin, dir, self.ray_distance, LayerMask::ALL)
            .is_some_and(|hit| hit.object != me && world.has_tag(hit.object, tag))
    }
}
