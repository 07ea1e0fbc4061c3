//! The dog's behavior arbiter.
//!
//! Priority each presentation tick: an in-progress fetch runs to completion;
//! otherwise a settled thrown object (subject to the cooldown) starts a new
//! fetch; otherwise player distance picks follow (≤ switch distance) or
//! random walk.  Exactly one behavior is active at a time and all switching
//! goes through [`DogBehaviorManager::switch_to`].
//!
//! # Throw detection
//!
//! Detection is two-poll: the first time a fetchable object enters the scan
//! radius its position is recorded as a baseline.  On later polls the object
//! triggers a fetch once it has moved beyond the settle displacement *and*
//! slowed below the settle speed — i.e. it was thrown and has landed.  The
//! baseline is rewritten only when the trigger fires, so a slow arc across
//! several polls still registers.

use npc_core::{AgentRng, NpcResult, ObjectId, Vec3, time::Frame};
use npc_timing::Cooldown;
use npc_world::{AnimSink, Tag, WorldWriter};
use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::config::DogConfig;
use crate::fetch::{FetchGame, FetchStatus};
use crate::follow::Follow;
use crate::params;
use crate::walk::RandomWalk;

/// Which behavior currently drives the dog.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DogBehavior {
    RandomWalk,
    Follow,
    Fetch,
}

pub struct DogBehaviorManager {
    agent: ObjectId,
    player: ObjectId,
    config: DogConfig,
    active: DogBehavior,
    follow: Follow,
    fetch: FetchGame,
    walk: RandomWalk,
    /// First-sighting positions of fetch candidates, by object.
    baselines: FxHashMap<ObjectId, Vec3>,
    fetch_cooldown: Cooldown,
    warned_missing_player: bool,
}

impl DogBehaviorManager {
    pub fn new(agent: ObjectId, player: ObjectId, config: DogConfig) -> NpcResult<Self> {
        config.validate()?;
        let follow = Follow::new(agent, player, config.follow);
        let fetch = FetchGame::new(agent, player, config.jaw_offset, config.fetch);
        let walk = RandomWalk::new(agent, player, config.follow.stop_distance, config.walk.clone());
        let fetch_cooldown = Cooldown::new(config.fetch_cooldown_secs);
        Ok(Self {
            agent,
            player,
            config,
            active: DogBehavior::Follow,
            follow,
            fetch,
            walk,
            baselines: FxHashMap::default(),
            fetch_cooldown,
            warned_missing_player: false,
        })
    }

    pub fn agent(&self) -> ObjectId {
        self.agent
    }

    pub fn active(&self) -> DogBehavior {
        self.active
    }

    pub fn follow(&self) -> &Follow {
        &self.follow
    }

    pub fn fetch(&self) -> &FetchGame {
        &self.fetch
    }

    pub fn walk(&self) -> &RandomWalk {
        &self.walk
    }

    /// One-time setup at spawn: clean animation flags, no tracked
    /// candidates, follow active and seeded from the current distance.
    pub fn initialize<W: WorldWriter, A: AnimSink>(&mut self, world: &mut W, anim: &mut A) {
        self.baselines.clear();
        anim.set_bool(params::IS_WALKING, false);
        anim.set_bool(params::IS_SITTING, false);
        self.active = DogBehavior::Follow;
        self.follow.on_enable(world, anim);
    }

    /// Presentation tick: arbitration, detection, and the active behavior's
    /// own update.
    pub fn update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
        rng: &mut AgentRng,
    ) {
        if !self.player_present(world) {
            return;
        }

        if self.active == DogBehavior::Fetch {
            match self.fetch.update(world) {
                FetchStatus::Completed { retrieved } => {
                    self.finish_fetch(world, anim, frame, retrieved);
                }
                FetchStatus::Seeking | FetchStatus::Inactive => {}
            }
            return;
        }

        // Fetch can only start from follow: a dog roaming far from the
        // player isn't watching for throws.
        if self.active == DogBehavior::Follow && self.fetch_cooldown.ready(frame.now_secs) {
            if let Some(target) = self.detect_thrown_object(world) {
                info!(agent = ?self.agent, ?target, "starting fetch");
                self.switch_to(DogBehavior::Fetch, world, anim);
                self.fetch.set_target(world, anim, target);
                return;
            }
        }

        let dist = world
            .position(self.agent)
            .distance(world.position(self.player));
        if dist <= self.config.switch_distance {
            self.switch_to(DogBehavior::Follow, world, anim);
            self.follow.update(world, anim, frame);
        } else {
            self.switch_to(DogBehavior::RandomWalk, world, anim);
            self.walk.update(world, anim, frame, rng);
        }
    }

    /// Simulation tick: forwarded to the active behavior.
    pub fn fixed_update<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
        rng: &mut AgentRng,
    ) {
        if !self.player_present(world) {
            return;
        }
        match self.active {
            DogBehavior::Follow => self.follow.fixed_update(world, anim, frame),
            DogBehavior::RandomWalk => self.walk.fixed_update(world, anim, frame, rng),
            DogBehavior::Fetch => {
                if let FetchStatus::Completed { retrieved } =
                    self.fetch.fixed_update(world, anim, frame)
                {
                    self.finish_fetch(world, anim, frame, retrieved);
                }
            }
        }
    }

    fn player_present<W: WorldWriter>(&mut self, world: &W) -> bool {
        if world.is_alive(self.player) {
            self.warned_missing_player = false;
            return true;
        }
        if !self.warned_missing_player {
            warn!(agent = ?self.agent, player = ?self.player, "player missing; dog idle");
            self.warned_missing_player = true;
        }
        false
    }

    /// Atomic behavior switch: outgoing `on_disable` before incoming
    /// `on_enable`.  No-op when `next` is already active.
    fn switch_to<W: WorldWriter, A: AnimSink>(
        &mut self,
        next: DogBehavior,
        world: &mut W,
        anim: &mut A,
    ) {
        if self.active == next {
            return;
        }
        match self.active {
            DogBehavior::Follow => self.follow.on_disable(),
            DogBehavior::RandomWalk => self.walk.on_disable(anim),
            DogBehavior::Fetch => {}
        }
        self.active = next;
        match next {
            DogBehavior::Follow => self.follow.on_enable(world, anim),
            DogBehavior::RandomWalk => {
                self.walk.on_enable(world, anim);
                // Roaming always leaves with the walk animation running.
                anim.set_bool(params::IS_WALKING, true);
                anim.set_bool(params::IS_SITTING, false);
            }
            DogBehavior::Fetch => {}
        }
    }

    /// Post-fetch cleanup: candidates rescanned from scratch, cooldown armed,
    /// follow re-enabled.
    fn finish_fetch<W: WorldWriter, A: AnimSink>(
        &mut self,
        world: &mut W,
        anim: &mut A,
        frame: Frame,
        retrieved: bool,
    ) {
        info!(agent = ?self.agent, retrieved, "fetch finished");
        self.baselines.clear();
        self.fetch_cooldown.fire(frame.now_secs);
        anim.set_bool(params::IS_WALKING, false);
        anim.set_bool(params::IS_SITTING, false);
        self.active = DogBehavior::Follow;
        self.follow.on_enable(world, anim);
    }

    /// Two-poll thrown-object detection over the scan radius.
    ///
    /// Returns at the first unseen candidate (baseline it, check next poll)
    /// or the first tracked candidate that has displaced and settled.
    fn detect_thrown_object<W: WorldWriter>(&mut self, world: &W) -> Option<ObjectId> {
        let center = world.position(self.agent);
        for object in world.overlap_sphere(center, self.config.fetch_detection_range) {
            if object == self.agent || !world.has_tag(object, Tag::Fetch) {
                continue;
            }
            // Held objects (parented or frozen kinematic) aren't throw
            // candidates — that includes the ball in the dog's own jaw.
            if world.parent(object).is_some() || world.is_kinematic(object) {
                continue;
            }
            let pos = world.position(object);
            match self.baselines.get(&object) {
                None => {
                    self.baselines.insert(object, pos);
                    return None;
                }
                Some(&baseline) => {
                    let displaced = pos.distance(baseline) > self.config.settle_displacement;
                    let settled =
                        world.linear_velocity(object).length() <= self.config.settle_speed;
                    if displaced && settled {
                        self.baselines.insert(object, pos);
                        return Some(object);
                    }
                }
            }
        }
        None
    }
}
