//! The critter state machine.
//!
//! Per-tick priority: escape entry first (interrupts everything and resets a
//! pending peck trigger), then the escape-exit hysteresis check, then
//! attraction sensing (only while roaming and not immune), then the current
//! state's own timers.  Movement runs on the fixed tick and holds the ground
//! height captured at initialization.

use npc_core::{AgentRng, NpcResult, ObjectId, Vec3, math, time::Frame};
use npc_timing::Countdown;
use npc_world::{AnimSink, Tag, WorldWriter};
use tracing::{debug, info};

use crate::config::CritterConfig;
use crate::params;

/// Phase of the roam cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RoamPhase {
    /// Random pre-roam delay after spawn (staggers a flock's first steps).
    StartDelay(Countdown),
    /// Walking toward a picked point.
    Moving { target: Vec3 },
    /// Idling between legs.
    Waiting(Countdown),
}

/// Top-level critter state.  Exactly one is active per agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CritterState {
    Roaming(RoamPhase),
    /// Fleeing the player at escape speed.
    Escaping,
    /// Walking toward an attraction-tagged object.
    Attracted { target: ObjectId },
    /// Counted trigger sequence at the attraction; each pulse waits out the
    /// current clip before the next.
    Pecking { pulses_done: u32, wait: Countdown },
}

pub struct CritterMachine {
    config: CritterConfig,
    agent: ObjectId,
    player: ObjectId,
    state: CritterState,
    /// Attraction sensing is suspended while this runs.
    immunity: Option<Countdown>,
    /// Ground height held by every position write.
    ground_y: f32,
}

impl CritterMachine {
    pub fn new(agent: ObjectId, player: ObjectId, config: CritterConfig) -> NpcResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            agent,
            player,
            state: CritterState::Roaming(RoamPhase::StartDelay(Countdown::finished())),
            immunity: None,
            ground_y: 0.0,
        })
    }

    pub fn agent(&self) -> ObjectId {
        self.agent
    }

    pub fn state(&self) -> CritterState {
        self.state
    }

    pub fn is_immune(&self) -> bool {
        self.immunity.is_some()
    }

    /// One-time setup at spawn: capture the ground height and arm a random
    /// start delay.
    pub fn initialize<W: WorldWriter>(&mut self, world: &W, rng: &mut AgentRng) {
        self.ground_y = world.position(self.agent).y;
        let delay = rng.gen_range(0.0..self.config.max_start_delay_secs.max(f32::EPSILON));
        self.state = CritterState::Roaming(RoamPhase::StartDelay(Countdown::new(delay)));
    }

    /// Presentation tick: detection, state transitions, timers, playback.
    pub fn update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
        rng: &mut AgentRng,
    ) {
        if let Some(c) = &mut self.immunity {
            if c.tick(frame.dt_secs) {
                self.immunity = None;
            }
        }

        self.check_escape_entry(world, anim);
        if self.state == CritterState::Escaping {
            self.check_escape_exit(world, anim, rng);
        }

        if matches!(self.state, CritterState::Roaming(_)) && self.immunity.is_none() {
            self.scan_for_attraction(world);
        }

        self.advance_timers(world, anim, frame, rng);
        anim.set_playback_rate(self.playback_rate());
    }

    /// Simulation tick: movement for whichever state is on the move.
    pub fn fixed_update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
        rng: &mut AgentRng,
    ) {
        match self.state {
            CritterState::Escaping => {
                if !world.is_alive(self.player) {
                    return;
                }
                let pos = world.position(self.agent);
                let away = math::flatten_dir(pos - world.position(self.player));
                self.step_along(world, away, self.config.escape_speed, frame);
            }
            CritterState::Attracted { target } => {
                if !world.is_alive(target) {
                    return; // update() resumes roaming next tick
                }
                let pos = world.position(self.agent);
                let target_pos = world.position(target);
                if pos.distance(target_pos) < self.config.reach_distance {
                    self.begin_pecking(anim);
                    return;
                }
                let toward = math::flatten_dir(target_pos - pos);
                self.step_along(world, toward, self.config.move_speed, frame);
            }
            CritterState::Roaming(RoamPhase::Moving { target }) => {
                let pos = world.position(self.agent);
                if pos.distance(target) < self.config.arrival_distance {
                    world.set_position(self.agent, target);
                    anim.set_bool(params::IS_WALKING, false);
                    let wait =
                        rng.gen_range(self.config.min_wait_secs..=self.config.max_wait_secs);
                    self.state = CritterState::Roaming(RoamPhase::Waiting(Countdown::new(wait)));
                    return;
                }
                let toward = math::flatten_dir(target - pos);
                self.step_along(world, toward, self.config.move_speed, frame);
            }
            _ => {}
        }
    }

    /// Escape preempts every other state the moment the player gets close.
    fn check_escape_entry<W: WorldWriter, A: AnimSink>(&mut self, world: &W, anim: &mut A) {
        if self.state == CritterState::Escaping || !world.is_alive(self.player) {
            return;
        }
        let dist = world
            .position(self.agent)
            .distance(world.position(self.player));
        if dist <= self.config.detection_radius {
            debug!(agent = ?self.agent, dist, "escape triggered");
            anim.reset_trigger(params::PECK_TRIGGER);
            anim.set_bool(params::IS_WALKING, false);
            self.state = CritterState::Escaping;
        }
    }

    /// Hysteresis exit: the flee ends only once the player is well outside
    /// the detection radius, then roaming resumes with a fresh leg.
    fn check_escape_exit<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &W,
        anim: &mut A,
        rng: &mut AgentRng,
    ) {
        if !world.is_alive(self.player) {
            self.begin_roam_leg(world, anim, rng);
            return;
        }
        let dist = world
            .position(self.agent)
            .distance(world.position(self.player));
        if dist > self.config.detection_radius * self.config.escape_exit_factor {
            debug!(agent = ?self.agent, dist, "escape over");
            self.begin_roam_leg(world, anim, rng);
        }
    }

    fn scan_for_attraction<W: WorldWriter>(&mut self, world: &W) {
        let pos = world.position(self.agent);
        for object in world.overlap_sphere(pos, self.config.attraction_radius) {
            if object == self.agent || !world.has_tag(object, Tag::Attract) {
                continue;
            }
            info!(agent = ?self.agent, target = ?object, "attraction latched");
            self.state = CritterState::Attracted { target: object };
            return;
        }
    }

    fn advance_timers<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &W,
        anim: &mut A,
        frame: Frame,
        rng: &mut AgentRng,
    ) {
        // Resolve the in-place mutation first; follow-up transitions that
        // need `&mut self` happen after the state borrow ends.
        let mut resume_roam = false;
        let mut peck_finished = false;
        match &mut self.state {
            CritterState::Roaming(RoamPhase::StartDelay(c))
            | CritterState::Roaming(RoamPhase::Waiting(c)) => {
                resume_roam = c.tick(frame.dt_secs);
            }
            CritterState::Attracted { target } => {
                if !world.is_alive(*target) {
                    debug!(agent = ?self.agent, "attraction vanished; resuming roam");
                    resume_roam = true;
                }
            }
            CritterState::Pecking { pulses_done, wait } => {
                if wait.tick(frame.dt_secs) {
                    if *pulses_done < self.config.pecking_count {
                        anim.set_trigger(params::PECK_TRIGGER);
                        *pulses_done += 1;
                        *wait = Countdown::new(anim.current_clip_secs());
                    } else {
                        peck_finished = true;
                    }
                }
            }
            _ => {}
        }
        if peck_finished {
            self.finish_pecking(world, anim, rng);
        } else if resume_roam {
            self.begin_roam_leg(world, anim, rng);
        }
    }

    /// Pick a validated random heading and distance; start walking.
    fn begin_roam_leg<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &W,
        anim: &mut A,
        rng: &mut AgentRng,
    ) {
        let pos = world.position(self.agent);
        let dir = self.config.avoidance.sample_clear_direction(world, pos, rng);
        let dist = rng.gen_range(self.config.min_move_distance..=self.config.max_move_distance);
        let mut target = pos + dir * dist;
        target.y = self.ground_y;
        anim.set_bool(params::IS_WALKING, true);
        self.state = CritterState::Roaming(RoamPhase::Moving { target });
    }

    /// The first pulse fires on entry; each later pulse waits out the clip.
    fn begin_pecking<A: AnimSink>(&mut self, anim: &mut A) {
        anim.set_bool(params::IS_WALKING, false);
        anim.set_trigger(params::PECK_TRIGGER);
        self.state = CritterState::Pecking {
            pulses_done: 1,
            wait: Countdown::new(anim.current_clip_secs()),
        };
    }

    fn finish_pecking<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &W,
        anim: &mut A,
        rng: &mut AgentRng,
    ) {
        info!(agent = ?self.agent, "pecking done; immune to attraction");
        anim.set_trigger(params::WALK_TRIGGER);
        self.immunity = Some(Countdown::new(self.config.immune_secs));
        self.begin_roam_leg(world, anim, rng);
    }

    /// Shared movement step: angle-stepped heading adjustment, destination
    /// occupancy veto, held ground height, smooth yaw toward the heading.
    fn step_along<W: WorldWriter>(&mut self, world: &mut W, desired: Vec3, speed: f32, frame: Frame) {
        if desired == Vec3::ZERO {
            return;
        }
        let pos = world.position(self.agent);
        let dir = self
            .config
            .avoidance
            .adjust(world, self.agent, pos, desired);
        let mut next = pos + dir * speed * frame.dt_secs;
        next.y = self.ground_y;
        if !self.config.avoidance.destination_blocked(
            world,
            self.agent,
            next,
            self.config.occupancy_probe_radius,
        ) {
            world.set_position(self.agent, next);
        }
        let look = math::look_rotation_flat(dir);
        let turned = math::rotate_towards(
            world.rotation(self.agent),
            look,
            self.config.turn_speed * frame.dt_secs,
        );
        world.set_rotation(self.agent, turned);
    }

    /// Escaping plays fast, walking plays at authored speed, idling and
    /// pecking hold the blend tree still (pecks are trigger-driven clips).
    fn playback_rate(&self) -> f32 {
        match self.state {
            CritterState::Escaping => {
                let max = self.config.escape_speed / self.config.move_speed;
                1.0 + (max - 1.0) * 0.5
            }
            CritterState::Attracted { .. } | CritterState::Roaming(RoamPhase::Moving { .. }) => 1.0,
            CritterState::Pecking { .. } => 1.0,
            CritterState::Roaming(_) => 0.0,
        }
    }
}
