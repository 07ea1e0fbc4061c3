//! `npc-timing` — the timed-transition scheduler.
//!
//! Every "wait 0.2 s then clear the walking flag" choreography in the
//! behavior crates runs on these three primitives instead of ad-hoc float
//! bookkeeping:
//!
//! | Type          | Use                                                     |
//! |---------------|----------------------------------------------------------|
//! | [`Cooldown`]  | "at most once per N seconds" gates (fetch re-trigger)    |
//! | [`Countdown`] | one-shot durations (pecking waits, immunity windows)     |
//! | [`TimerSet`]  | named concurrent timers owned by one behavior            |
//!
//! # Scheduling model
//!
//! Timers advance once per tick, at tick boundaries only — a timer can never
//! fire mid-motion-update.  Each timer fires exactly once and is then
//! removed.  A behavior's `on_disable` cancels its whole `TimerSet`
//! synchronously, so no timed phase can run after its owning behavior has
//! been switched out.

pub mod cooldown;
pub mod timer;


pub use cooldown::Cooldown;
pub use timer::{Countdown, TimerSet};
