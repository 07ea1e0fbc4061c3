//! Simulation observer trait for progress reporting and data collection.

use npc_core::Tick;
use npc_world::WorldQuery;

use crate::Agent;

/// Callbacks invoked by the tick loop at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — position logger
///
/// ```rust,ignore
/// struct PositionLogger;
///
/// impl<W: WorldQuery> SimObserver<W> for PositionLogger {
///     fn on_tick_end(&mut self, tick: Tick, world: &W, agents: &[Agent]) {
///         for agent in agents {
///             println!("{tick} {:?} {:?}", agent.id, world.position(agent.body));
///         }
///     }
/// }
/// ```
pub trait SimObserver<W: WorldQuery> {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with read-only access to the world and
    /// every agent, so observers can record without the sim knowing about
    /// any specific output format.
    fn on_tick_end(&mut self, _tick: Tick, _world: &W, _agents: &[Agent]) {}

    /// Called once after the final tick of a run completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to run but don't
/// want progress callbacks.
pub struct NoopObserver;

impl<W: WorldQuery> SimObserver<W> for NoopObserver {}
