//! Frame-driven time model.
//!
//! # Design
//!
//! The framework is cooperative and frame-driven: a fixed-rate simulation
//! tick advances physics-coupled steering and a (potentially variable-rate)
//! presentation tick advances detection and state transitions.  `SimClock`
//! tracks the canonical tick counter and the accumulated elapsed seconds;
//! every per-tick call receives a [`Frame`] so behaviors never read a global
//! clock.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// The time slice handed to every per-tick behavior call.
///
/// `dt_secs` is the step to integrate over (the fixed timestep on the
/// simulation tick, the frame delta on the presentation tick); `now_secs` is
/// seconds elapsed since simulation start, used for cooldown timestamps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub dt_secs: f32,
    pub now_secs: f64,
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and accumulated elapsed time.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by [`SimClock::advance`] each iteration.
    pub current_tick: Tick,
    /// Seconds elapsed since tick 0.
    pub elapsed_secs: f64,
    /// Duration of one fixed simulation tick, in seconds.  Held as `f64` so
    /// the accumulated elapsed time doesn't drift over long runs.
    pub fixed_dt_secs: f64,
}

impl SimClock {
    /// Create a clock at tick 0 with the given fixed timestep.
    pub fn new(fixed_dt_secs: f64) -> Self {
        Self {
            current_tick: Tick::ZERO,
            elapsed_secs: 0.0,
            fixed_dt_secs,
        }
    }

    /// Advance the clock by one fixed tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += self.fixed_dt_secs;
    }

    /// The [`Frame`] for the current tick at the fixed timestep.
    #[inline]
    pub fn frame(&self) -> Frame {
        Frame {
            dt_secs: self.fixed_dt_secs as f32,
            now_secs: self.elapsed_secs,
        }
    }

    /// How many fixed ticks span `secs` seconds (rounds up — a timed
    /// transition never fires early).
    #[inline]
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        (secs / self.fixed_dt_secs as f32).ceil() as u64
    }
}

impl Default for SimClock {
    /// 50 Hz fixed timestep — the conventional physics tick rate.
    fn default() -> Self {
        Self::new(0.02)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs)
    }
}
