//! One-shot countdowns and keyed timer sets.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Slack absorbing accumulated `f32` subtraction error, so a duration that
/// is an exact multiple of the timestep fires on its nominal tick instead of
/// one tick late.
const FIRE_EPSILON: f32 = 1e-6;

// ── Countdown ─────────────────────────────────────────────────────────────────

/// A one-shot duration that fires exactly once when it crosses zero.
///
/// Remaining time is clamped at zero (never negative).  `tick` returns
/// `true` only on the tick the countdown finishes, so callers can key a
/// transition off it without extra latching.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Countdown {
    remaining: f32,
    done: bool,
}

impl Countdown {
    pub fn new(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
            done: secs <= 0.0,
        }
    }

    /// An already-finished countdown (fires immediately on the first tick).
    pub fn finished() -> Self {
        Self {
            remaining: 0.0,
            done: false,
        }
    }

    /// Advance by `dt` seconds.  Returns `true` exactly once, on the tick
    /// the remaining time reaches zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.done {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        if self.remaining <= FIRE_EPSILON {
            self.remaining = 0.0;
            self.done = true;
            return true;
        }
        false
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    pub fn remaining_secs(&self) -> f32 {
        self.remaining
    }
}

// ── TimerSet ──────────────────────────────────────────────────────────────────

/// Named concurrent timers owned by exactly one behavior.
///
/// Keys are small behavior-local enums.  Fired keys are returned sorted so
/// downstream transition handling is deterministic regardless of hash order.
#[derive(Clone, Debug)]
pub struct TimerSet<K: Copy + Eq + Hash + Ord> {
    remaining: FxHashMap<K, f32>,
}

impl<K: Copy + Eq + Hash + Ord> TimerSet<K> {
    pub fn new() -> Self {
        Self {
            remaining: FxHashMap::default(),
        }
    }

    /// Start (or restart) the timer for `key`.
    pub fn start(&mut self, key: K, secs: f32) {
        self.remaining.insert(key, secs.max(0.0));
    }

    /// Cancel one timer.  Cancelling an absent key is a no-op.
    pub fn cancel(&mut self, key: K) {
        self.remaining.remove(&key);
    }

    /// Cancel every timer — called from a behavior's `on_disable` so nothing
    /// fires after the behavior is switched out.
    pub fn cancel_all(&mut self) {
        self.remaining.clear();
    }

    pub fn is_running(&self, key: K) -> bool {
        self.remaining.contains_key(&key)
    }

    pub fn remaining_secs(&self, key: K) -> Option<f32> {
        self.remaining.get(&key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Advance all timers by `dt`; remove and return the keys that reached
    /// zero this tick, sorted ascending.
    pub fn tick(&mut self, dt: f32) -> Vec<K> {
        let mut fired = Vec::new();
        for (key, left) in self.remaining.iter_mut() {
            *left = (*left - dt).max(0.0);
            if *left <= FIRE_EPSILON {
                fired.push(*key);
            }
        }
        for key in &fired {
            self.remaining.remove(key);
        }
        fired.sort_unstable();
        fired
    }
}

impl<K: Copy + Eq + Hash + Ord> Default for TimerSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
