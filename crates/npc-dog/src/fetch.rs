//! Fetch: run to a thrown object, pick it up, carry it in the jaw socket.
//!
//! The target handle is weak — another system may despawn, grab, or freeze
//! the object mid-chase.  Every tick re-validates it and the game abandons
//! cleanly when the target is gone, reporting the outcome to the arbiter.

use npc_core::{ObjectId, Quat, Vec3, math, time::Frame};
use npc_world::{AnimSink, WorldWriter};
use tracing::debug;

use crate::config::FetchConfig;
use crate::params;

/// Outcome of one fetch tick, consumed by the arbiter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    /// No target set.
    Inactive,
    /// Still chasing.
    Seeking,
    /// Fetch is over; `retrieved` distinguishes a pickup from an abort.
    Completed { retrieved: bool },
}

pub struct FetchGame {
    config: FetchConfig,
    agent: ObjectId,
    player: ObjectId,
    jaw_offset: Vec3,
    target: Option<ObjectId>,
}

impl FetchGame {
    pub fn new(agent: ObjectId, player: ObjectId, jaw_offset: Vec3, config: FetchConfig) -> Self {
        Self {
            config,
            agent,
            player,
            jaw_offset,
            target: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    /// Begin chasing `target`.  Collision between dog and target is disabled
    /// up front so the final approach can't bounce the object away.
    pub fn set_target<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        target: ObjectId,
    ) {
        self.target = Some(target);
        world.ignore_collision(self.agent, target);
        anim.set_bool(params::IS_SITTING, false);
        anim.set_bool(params::IS_WALKING, true);
    }

    /// Presentation tick: validate the target still exists and is still
    /// loose.  Movement happens in `fixed_update`.
    pub fn update<W: WorldWriter>(&mut self, world: &mut W) -> FetchStatus {
        let Some(target) = self.target else {
            return FetchStatus::Inactive;
        };
        if self.taken_by_other(world, target) {
            debug!(?target, "fetch target gone or grabbed; abandoning");
            self.finish(world);
            return FetchStatus::Completed { retrieved: false };
        }
        FetchStatus::Seeking
    }

    /// Simulation tick: steer toward the target, picking it up on arrival.
    pub fn fixed_update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
    ) -> FetchStatus {
        let Some(target) = self.target else {
            return FetchStatus::Inactive;
        };
        if self.taken_by_other(world, target) {
            self.finish(world);
            return FetchStatus::Completed { retrieved: false };
        }

        let pos = world.position(self.agent);
        let target_pos = world.position(target);
        if pos.distance(target_pos) <= self.config.pickup_distance {
            self.pick_up(world, target);
            anim.set_float(params::SPEED, 0.0);
            return FetchStatus::Completed { retrieved: true };
        }

        let dir = self.approach_direction(world, pos, target_pos);
        if dir != Vec3::ZERO {
            let look = math::look_rotation_flat(dir);
            let turned = math::rotate_towards(
                world.rotation(self.agent),
                look,
                self.config.rotation_speed * frame.dt_secs,
            );
            world.move_rotation(self.agent, turned);
            world.move_position(self.agent, pos + dir * self.config.move_speed * frame.dt_secs);
            anim.set_float(params::SPEED, self.config.move_speed);
        }
        FetchStatus::Seeking
    }

    /// The target is no longer fetchable: despawned, parented to someone
    /// (the player picked it up), or frozen kinematic by another system.
    fn taken_by_other<W: WorldWriter>(&self, world: &W, target: ObjectId) -> bool {
        !world.is_alive(target) || world.parent(target).is_some() || world.is_kinematic(target)
    }

    /// Straight-line heading to the target, bent sideways when it would
    /// carry the dog through the player.
    fn approach_direction<W: WorldWriter>(&self, world: &W, pos: Vec3, target_pos: Vec3) -> Vec3 {
        let dir = math::flatten_dir(target_pos - pos);
        if dir == Vec3::ZERO || !world.is_alive(self.player) {
            return dir;
        }
        let to_player = world.position(self.player) - pos;
        let player_dist = Vec3::new(to_player.x, 0.0, to_player.z).length();
        let toward_player = math::flatten_dir(to_player);
        if player_dist >= self.config.player_safety_radius
            || dir.dot(toward_player) <= self.config.avoid_heading_dot
        {
            return dir;
        }
        // Sidestep perpendicular to the player direction, on whichever side
        // already agrees with the current heading.
        let mut sidestep = Vec3::Y.cross(toward_player);
        if sidestep.dot(dir) < 0.0 {
            sidestep = -sidestep;
        }
        math::flatten_dir(dir + sidestep)
    }

    /// Freeze the object, mount it in the jaw socket, and stop the dog dead.
    fn pick_up<W: WorldWriter>(&mut self, world: &mut W, target: ObjectId) {
        world.set_linear_velocity(target, Vec3::ZERO);
        world.set_angular_velocity(target, Vec3::ZERO);
        world.set_kinematic(target, true);
        world.set_collider_solid(target, false);
        world.set_parent(target, Some(self.agent));
        world.set_local_pose(target, self.jaw_offset, Quat::IDENTITY);
        self.finish(world);
    }

    /// Zero the dog's own body and drop the handle.
    fn finish<W: WorldWriter>(&mut self, world: &mut W) {
        world.set_linear_velocity(self.agent, Vec3::ZERO);
        world.set_angular_velocity(self.agent, Vec3::ZERO);
        self.target = None;
    }
}
