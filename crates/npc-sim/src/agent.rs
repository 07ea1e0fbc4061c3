//! One simulated agent: a controller plus its private animation sink and RNG.

use npc_core::{AgentId, AgentRng, ObjectId, time::Frame};
use npc_critter::CritterMachine;
use npc_dog::DogBehaviorManager;
use npc_world::{AnimParams, WorldWriter};

/// The behavior controller variants the harness can drive.
pub enum Controller {
    Dog(DogBehaviorManager),
    Critter(CritterMachine),
}

/// An agent owns everything private to it — controller state, animation
/// parameters, RNG — and borrows the shared world only for the duration of
/// one tick call.
pub struct Agent {
    pub id: AgentId,
    /// The world object this agent controls.
    pub body: ObjectId,
    pub controller: Controller,
    pub anim: AnimParams,
    pub(crate) rng: AgentRng,
}

impl Agent {
    pub(crate) fn initialize<W: WorldWriter>(&mut self, world: &mut W) {
        match &mut self.controller {
            Controller::Dog(dog) => dog.initialize(world, &mut self.anim),
            Controller::Critter(critter) => critter.initialize(world, &mut self.rng),
        }
    }

    pub(crate) fn update<W: WorldWriter>(&mut self, world: &mut W, frame: Frame) {
        match &mut self.controller {
            Controller::Dog(dog) => dog.update(world, &mut self.anim, frame, &mut self.rng),
            Controller::Critter(critter) => {
                critter.update(world, &mut self.anim, frame, &mut self.rng)
            }
        }
    }

    pub(crate) fn fixed_update<W: WorldWriter>(&mut self, world: &mut W, frame: Frame) {
        match &mut self.controller {
            Controller::Dog(dog) => dog.fixed_update(world, &mut self.anim, frame, &mut self.rng),
            Controller::Critter(critter) => {
                critter.fixed_update(world, &mut self.anim, frame, &mut self.rng)
            }
        }
    }

    /// The dog controller, if this agent is a dog.
    pub fn as_dog(&self) -> Option<&DogBehaviorManager> {
        match &self.controller {
            Controller::Dog(dog) => Some(dog),
            _ => None,
        }
    }

    /// The critter controller, if this agent is a critter.
    pub fn as_critter(&self) -> Option<&CritterMachine> {
        match &self.controller {
            Controller::Critter(critter) => Some(critter),
            _ => None,
        }
    }
}
