//! Random walk: burst-and-pause roaming with obstacle avoidance.
//!
//! The cycle is startup delay → move for 2–5 s → pause 1 s → repeat.  Each
//! burst picks a fresh random heading; while moving, a raycast fan ahead of
//! the dog triggers a bounds-validated resample.  Activation drops any
//! carried object first, so the dog never wanders off with the fetch ball.

use npc_core::{AgentRng, ObjectId, Quat, Vec3, math, time::Frame};
use npc_timing::Countdown;
use npc_world::{AnimSink, WorldWriter};
use tracing::debug;

use crate::config::WalkConfig;
use crate::params;

/// Phase of the roam cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WalkPhase {
    /// Inactive until the next `on_enable` (player came close, or told to sit).
    Stopped,
    /// Waiting out the post-activation delay.
    Startup(Countdown),
    /// Walking along `direction` until the burst timer expires.
    Moving(Countdown),
    /// Standing still between bursts.
    Paused(Countdown),
}

pub struct RandomWalk {
    config: WalkConfig,
    agent: ObjectId,
    player: ObjectId,
    /// Player distance below which roaming stops and the dog sits.  Shared
    /// with the follow behavior so the two agree on "close".
    stop_distance: f32,
    phase: WalkPhase,
    direction: Vec3,
}

impl RandomWalk {
    pub fn new(agent: ObjectId, player: ObjectId, stop_distance: f32, config: WalkConfig) -> Self {
        Self {
            config,
            agent,
            player,
            stop_distance,
            phase: WalkPhase::Stopped,
            direction: Vec3::ZERO,
        }
    }

    pub fn phase(&self) -> WalkPhase {
        self.phase
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Drop anything carried, clear animation flags, and arm the startup
    /// delay.
    pub fn on_enable<W: WorldWriter, A: AnimSink>(&mut self, world: &mut W, anim: &mut A) {
        self.drop_carried(world);
        anim.set_bool(params::IS_SITTING, false);
        anim.set_bool(params::IS_WALKING, false);
        anim.set_playback_rate(1.0);
        self.direction = Vec3::ZERO;
        self.phase = WalkPhase::Startup(Countdown::new(self.config.startup_secs));
    }

    pub fn on_disable<A: AnimSink>(&mut self, anim: &mut A) {
        self.phase = WalkPhase::Stopped;
        self.direction = Vec3::ZERO;
        anim.set_bool(params::IS_WALKING, false);
        anim.set_playback_rate(1.0);
    }

    /// Presentation tick: interruption checks, then advance the cycle.
    pub fn update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
        rng: &mut AgentRng,
    ) {
        if self.phase == WalkPhase::Stopped {
            return;
        }
        if self.near_player(world) {
            self.stop(anim, true);
            return;
        }
        if anim.get_bool(params::IS_SITTING) {
            // Told to sit by something outside this behavior.
            self.stop(anim, false);
            return;
        }
        match &mut self.phase {
            WalkPhase::Startup(c) | WalkPhase::Paused(c) => {
                if c.tick(frame.dt_secs) {
                    self.begin_burst(anim, rng);
                }
            }
            WalkPhase::Moving(c) => {
                if c.tick(frame.dt_secs) {
                    self.direction = Vec3::ZERO;
                    anim.set_bool(params::IS_WALKING, false);
                    anim.set_playback_rate(1.0);
                    self.phase = WalkPhase::Paused(Countdown::new(self.config.pause_secs));
                }
            }
            WalkPhase::Stopped => {}
        }
    }

    /// Simulation tick: avoidance plus the actual translation.
    pub fn fixed_update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
        rng: &mut AgentRng,
    ) {
        if self.phase == WalkPhase::Stopped {
            return;
        }
        if self.near_player(world) {
            self.stop(anim, true);
            return;
        }
        if !matches!(self.phase, WalkPhase::Moving(_)) || self.direction == Vec3::ZERO {
            return;
        }

        let pos = world.position(self.agent);
        let facing = math::forward(world.rotation(self.agent));
        if self.config.kernel.fan_blocked(world, pos, facing) {
            self.direction = self.config.kernel.resample_direction(pos, rng);
            debug!(agent = ?self.agent, "walk heading resampled around obstacle");
        }

        let look = math::look_rotation_flat(self.direction);
        let turned = math::rotate_towards(
            world.rotation(self.agent),
            look,
            self.config.turn_speed * frame.dt_secs,
        );
        world.move_rotation(self.agent, turned);
        world.move_position(
            self.agent,
            pos + self.direction * self.config.move_speed * frame.dt_secs,
        );
        let rate = self.config.animation_speed * self.config.move_speed / 2.0;
        anim.set_playback_rate(rate.clamp(0.5, 3.0));
    }

    fn begin_burst<A: AnimSink>(&mut self, anim: &mut A, rng: &mut AgentRng) {
        anim.set_bool(params::IS_WALKING, true);
        self.direction = rng.unit_dir_xz();
        let secs = rng.gen_range(self.config.min_move_secs..=self.config.max_move_secs);
        self.phase = WalkPhase::Moving(Countdown::new(secs));
    }

    /// Halt the cycle.  `sit` marks the player-proximity case, where the dog
    /// also sits; outside interruptions just stop the legs.
    fn stop<A: AnimSink>(&mut self, anim: &mut A, sit: bool) {
        self.phase = WalkPhase::Stopped;
        self.direction = Vec3::ZERO;
        anim.set_bool(params::IS_WALKING, false);
        anim.set_playback_rate(1.0);
        if sit {
            anim.set_bool(params::IS_SITTING, true);
        }
    }

    fn near_player<W: WorldWriter>(&self, world: &W) -> bool {
        world.is_alive(self.player)
            && world
                .position(self.agent)
                .distance(world.position(self.player))
                <= self.stop_distance
    }

    /// Release a carried object in front of the dog with a small pop-up
    /// impulse so it visibly leaves the jaw.
    fn drop_carried<W: WorldWriter>(&self, world: &mut W) {
        let Some(carried) = world.child_of(self.agent) else {
            return;
        };
        let pos = world.position(self.agent);
        let fwd = math::forward(world.rotation(self.agent));
        world.set_parent(carried, None);
        world.set_kinematic(carried, false);
        world.set_collider_solid(carried, true);
        world.set_position(
            carried,
            pos + fwd * self.config.drop_forward + Vec3::Y * self.config.drop_up,
        );
        world.set_rotation(carried, Quat::IDENTITY);
        world.apply_impulse(carried, Vec3::Y * self.config.drop_impulse);
        world.set_active(carried, true);
        debug!(agent = ?self.agent, object = ?carried, "dropped carried object");
    }
}
