//! Fluent builder for constructing a [`Sim`].

use npc_core::{AgentId, AgentRng, ObjectId, SimClock};
use npc_critter::{CritterConfig, CritterMachine};
use npc_dog::{DogBehaviorManager, DogConfig};
use npc_world::{AnimParams, WorldWriter};
use tracing::info;

use crate::agent::{Agent, Controller};
use crate::{Sim, SimError, SimResult};

enum AgentSpec {
    Dog {
        body: ObjectId,
        player: ObjectId,
        config: DogConfig,
    },
    Critter {
        body: ObjectId,
        player: ObjectId,
        config: CritterConfig,
    },
}

/// Fluent builder for [`Sim<W>`].
///
/// # Required inputs
///
/// - the world (any [`WorldWriter`]) with every body already spawned
/// - the run's global seed — each agent derives its own RNG from it
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(world, 42)
///     .fixed_dt(0.02)
///     .dog(dog_body, player, DogConfig::default())
///     .critter(hen_body, player, CritterConfig::default())
///     .build()?;
/// ```
pub struct SimBuilder<W: WorldWriter> {
    world: W,
    seed: u64,
    fixed_dt_secs: f64,
    specs: Vec<AgentSpec>,
}

impl<W: WorldWriter> SimBuilder<W> {
    pub fn new(world: W, seed: u64) -> Self {
        Self {
            world,
            seed,
            fixed_dt_secs: 0.02,
            specs: Vec::new(),
        }
    }

    /// Override the fixed timestep (default 0.02 s — 50 Hz).
    pub fn fixed_dt(mut self, secs: f64) -> Self {
        self.fixed_dt_secs = secs;
        self
    }

    /// Register a dog companion controlling `body`, following `player`.
    pub fn dog(mut self, body: ObjectId, player: ObjectId, config: DogConfig) -> Self {
        self.specs.push(AgentSpec::Dog {
            body,
            player,
            config,
        });
        self
    }

    /// Register a chicken-type critter controlling `body`, wary of `player`.
    pub fn critter(mut self, body: ObjectId, player: ObjectId, config: CritterConfig) -> Self {
        self.specs.push(AgentSpec::Critter {
            body,
            player,
            config,
        });
        self
    }

    /// Validate every registration, construct and initialize the agents, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<W>> {
        let mut world = self.world;
        let mut agents = Vec::with_capacity(self.specs.len());

        for (i, spec) in self.specs.into_iter().enumerate() {
            let id = AgentId(i as u32);
            let (body, player) = match &spec {
                AgentSpec::Dog { body, player, .. } => (*body, *player),
                AgentSpec::Critter { body, player, .. } => (*body, *player),
            };
            if !world.is_alive(body) {
                return Err(SimError::MissingBody(body));
            }
            if !world.is_alive(player) {
                return Err(SimError::MissingPlayer(player));
            }

            let controller = match spec {
                AgentSpec::Dog { body, player, config } => {
                    Controller::Dog(DogBehaviorManager::new(body, player, config)?)
                }
                AgentSpec::Critter { body, player, config } => {
                    Controller::Critter(CritterMachine::new(body, player, config)?)
                }
            };
            let mut agent = Agent {
                id,
                body,
                controller,
                anim: AnimParams::new(),
                rng: AgentRng::new(self.seed, id),
            };
            agent.initialize(&mut world);
            agents.push(agent);
        }

        info!(agents = agents.len(), seed = self.seed, "sim built");
        Ok(Sim {
            world,
            clock: SimClock::new(self.fixed_dt_secs),
            agents,
        })
    }
}
