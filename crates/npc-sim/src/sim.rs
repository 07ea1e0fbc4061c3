//! The `Sim` struct and its tick loop.

use npc_core::SimClock;
use npc_world::WorldWriter;

use crate::agent::Agent;
use crate::observer::SimObserver;

/// The simulation runner.
///
/// Holds the shared world, the canonical clock, and every agent.  Each tick
/// runs the presentation pass over all agents, then the simulation pass, in
/// spawn order — per-agent RNGs keep that ordering from perturbing any
/// individual agent's randomness.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<W: WorldWriter> {
    pub world: W,
    pub clock: SimClock,
    pub agents: Vec<Agent>,
}

impl<W: WorldWriter> Sim<W> {
    /// Advance one tick: presentation pass, simulation pass, clock.
    pub fn step(&mut self) {
        let frame = self.clock.frame();
        for agent in &mut self.agents {
            agent.update(&mut self.world, frame);
        }
        for agent in &mut self.agents {
            agent.fixed_update(&mut self.world, frame);
        }
        self.clock.advance();
    }

    /// Run exactly `n` ticks, with observer hooks at every tick boundary.
    pub fn run_ticks<O: SimObserver<W>>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let tick = self.clock.current_tick;
            observer.on_tick_start(tick);
            self.step();
            observer.on_tick_end(tick, &self.world, &self.agents);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run for `secs` of simulated time (rounded up to whole ticks).
    pub fn run_secs<O: SimObserver<W>>(&mut self, secs: f32, observer: &mut O) {
        self.run_ticks(self.clock.ticks_for_secs(secs), observer);
    }

    /// The agent with the given body object, if any.
    pub fn agent_for(&self, body: npc_core::ObjectId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.body == body)
    }
}
