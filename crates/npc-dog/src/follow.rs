//! Follow: keep near the player, sitting when close and walking when not.
//!
//! Sit and stand transitions are animation-paced: the walking/sitting flags
//! flip on staggered timers so the blend tree crossfades instead of popping.
//! Movement itself only happens in the `Moving` state, never mid-transition.

use npc_core::{ObjectId, Vec3, math, time::Frame};
use npc_timing::TimerSet;
use npc_world::{AnimSink, WorldWriter};

use crate::config::FollowConfig;
use crate::params;

/// Externally observable follow state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FollowState {
    Sitting,
    /// Walking flag set; sitting flag clears shortly, then movement begins.
    StandingUp,
    Moving,
    /// Sitting flag set; walking flag clears shortly.
    SittingDown,
}

/// Keys for the staggered transition timers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum FollowTimer {
    /// Stand-up, step 1: clear the sitting flag.
    ClearSitting,
    /// Stand-up, step 2: settle finished, movement may begin.
    FinishStand,
    /// Sit-down: clear the walking flag and land in `Sitting`.
    ClearWalking,
}

pub struct Follow {
    config: FollowConfig,
    agent: ObjectId,
    player: ObjectId,
    state: FollowState,
    timers: TimerSet<FollowTimer>,
}

impl Follow {
    pub fn new(agent: ObjectId, player: ObjectId, config: FollowConfig) -> Self {
        Self {
            config,
            agent,
            player,
            state: FollowState::Sitting,
            timers: TimerSet::new(),
        }
    }

    pub fn state(&self) -> FollowState {
        self.state
    }

    /// Seed state from the current player distance: close starts seated,
    /// far starts walking, with no transition delay either way.
    pub fn on_enable<W: WorldWriter, A: AnimSink>(&mut self, world: &W, anim: &mut A) {
        self.timers.cancel_all();
        let dist = world
            .position(self.agent)
            .distance(world.position(self.player));
        if dist <= self.config.stop_distance {
            anim.set_bool(params::IS_WALKING, false);
            anim.set_bool(params::IS_SITTING, true);
            self.state = FollowState::Sitting;
        } else {
            anim.set_bool(params::IS_SITTING, false);
            anim.set_bool(params::IS_WALKING, true);
            self.state = FollowState::Moving;
        }
    }

    /// Cancel pending transitions so nothing fires after a behavior switch.
    /// Animation flags are left for the incoming behavior to set.
    pub fn on_disable(&mut self) {
        self.timers.cancel_all();
    }

    /// Presentation tick: run transition timers, then decide between
    /// standing up, sitting down, or facing the seated player.
    pub fn update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
    ) {
        if !world.is_alive(self.player) {
            return;
        }

        for fired in self.timers.tick(frame.dt_secs) {
            match fired {
                FollowTimer::ClearSitting => {
                    anim.set_bool(params::IS_SITTING, false);
                    self.timers
                        .start(FollowTimer::FinishStand, self.config.stand_settle_secs);
                }
                FollowTimer::FinishStand => {
                    self.state = FollowState::Moving;
                }
                FollowTimer::ClearWalking => {
                    anim.set_bool(params::IS_WALKING, false);
                    self.state = FollowState::Sitting;
                }
            }
        }

        let dist = world
            .position(self.agent)
            .distance(world.position(self.player));

        if dist > self.config.stop_distance {
            if self.state == FollowState::Sitting {
                self.begin_stand_up(anim);
            }
        } else {
            if self.state == FollowState::Moving {
                self.begin_sit_down(anim);
            }
            self.face_player(world, frame);
        }
    }

    /// Simulation tick: steer and translate toward the player while moving.
    pub fn fixed_update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
    ) {
        if self.state != FollowState::Moving || !world.is_alive(self.player) {
            return;
        }
        let pos = world.position(self.agent);
        let target = world.position(self.player);
        if pos.distance(target) <= self.config.stop_distance {
            return;
        }
        let dir = math::flatten_dir(target - pos);
        if dir == Vec3::ZERO {
            return;
        }
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

    fn begin_stand_up<A: AnimSink>(&mut self, anim: &mut A) {
        anim.set_bool(params::IS_WALKING, true);
        self.timers
            .start(FollowTimer::ClearSitting, self.config.stand_clear_sit_secs);
        self.state = FollowState::StandingUp;
    }

    fn begin_sit_down<A: AnimSink>(&mut self, anim: &mut A) {
        anim.set_bool(params::IS_SITTING, true);
        self.timers
            .start(FollowTimer::ClearWalking, self.config.sit_clear_walk_secs);
        self.state = FollowState::SittingDown;
        anim.set_float(params::SPEED, 0.0);
    }

    /// Seated facing correction, suppressed below the angle threshold so the
    /// dog doesn't micro-twitch while the player shuffles around it.
    fn face_player<W: WorldWriter>(&self, world: &mut W, frame: Frame) {
        let pos = world.position(self.agent);
        let dir = math::flatten_dir(world.position(self.player) - pos);
        if dir == Vec3::ZERO {
            return;
        }
        let rot = world.rotation(self.agent);
        if math::angle_between_flat_deg(math::forward(rot), dir)
            <= self.config.rotation_threshold_deg
        {
            return;
        }
        let look = math::look_rotation_flat(dir);
        let turned =
            math::rotate_towards(rot, look, self.config.rotation_speed * frame.dt_secs);
        world.set_rotation(self.agent, turned);
    }
}
