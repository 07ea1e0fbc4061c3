//! The shared obstacle-avoidance kernel: a symmetric raycast fan plus a
//! bounds-validated random resample.

use npc_core::{AgentRng, Vec3, math};
use npc_world::{LayerMask, WorldQuery};

/// Direction sampling and obstacle detection shared by movement behaviors.
///
/// The fan is centered on the agent's *facing* direction (not its movement
/// direction): an agent sliding sideways past a wall still probes where its
/// body points, which is what the collider will actually sweep through.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringKernel {
    /// Number of rays in the fan.  Must be ≥ 2.
    pub ray_count: u32,
    /// Total angular spread of the fan, degrees.
    pub spread_deg: f32,
    /// Ray length and lookahead distance for the bounds projection.
    pub probe_range: f32,
    /// Rays originate this far above ground level so they clear floor trim.
    pub eye_height: f32,
    /// Layers that count as obstacles.
    pub obstacle_mask: LayerMask,
    /// Walkable-area limits used when resampling.
    pub bounds: super::MapBounds,
    /// Resample attempts before giving up and keeping the last sample.
    pub max_resample_attempts: u32,
}

impl Default for SteeringKernel {
    fn default() -> Self {
        Self {
            ray_count: 12,
            spread_deg: 180.0,
            probe_range: 2.0,
            eye_height: 0.1,
            obstacle_mask: LayerMask::OBSTACLE,
            bounds: super::MapBounds::default(),
            max_resample_attempts: 10,
        }
    }
}

impl SteeringKernel {
    /// `true` if any ray of the fan hits an obstacle within `probe_range`.
    ///
    /// Rays sweep from `-spread/2` to `+spread/2` around `forward` in
    /// `ray_count` even steps.
    pub fn fan_blocked<W: WorldQuery>(&self, world: &W, position: Vec3, forward: Vec3) -> bool {
        let forward = math::flatten_dir(forward);
        if forward == Vec3::ZERO || self.ray_count < 2 {
            return false;
        }
        let origin = position + Vec3::Y * self.eye_height;
        let step = self.spread_deg / (self.ray_count - 1) as f32;
        for i in 0..self.ray_count {
            let angle = -self.spread_deg / 2.0 + step * i as f32;
            let ray_dir = math::rotate_dir_y(forward, angle);
            if world
                .raycast(origin, ray_dir, self.probe_range, self.obstacle_mask)
                .is_some()
            {
                return true;
            }
        }
        false
    }

    /// Draw random horizontal directions until one's projected destination
    /// (`position + dir * probe_range`) lies inside the map bounds.
    ///
    /// Gives up after `max_resample_attempts` and returns the last sample
    /// anyway — a slightly out-of-bounds heading beats a stalled agent.
    pub fn resample_direction(&self, position: Vec3, rng: &mut AgentRng) -> Vec3 {
        let mut dir = rng.unit_dir_xz();
        for _ in 0..self.max_resample_attempts {
            let projected = position + dir * self.probe_range;
            if self.bounds.contains(projected) {
                break;
            }
            dir = rng.unit_dir_xz();
        }
        dir
    }

    /// One steering decision: keep `current` unless the fan reports a
    /// blockage, in which case resample.
    pub fn steer<W: WorldQuery>(
        &self,
        world: &W,
        position: Vec3,
        forward: Vec3,
        current: Vec3,
        rng: &mut AgentRng,
    ) -> Vec3 {
        if self.fan_blocked(world, position, forward) {
            self.resample_direction(position, rng)
        } else {
            current
        }
    }
}
