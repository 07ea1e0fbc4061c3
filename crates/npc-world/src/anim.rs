//! Animation parameter sink.
//!
//! Behaviors drive presentation exclusively through this trait: boolean
//! flags, float scalars, one-shot triggers, and the playback rate.  The only
//! feedback into logic is via explicit reads (`get_bool`, `current_clip_secs`)
//! — the sink never calls back into a behavior.

use rustc_hash::{FxHashMap, FxHashSet};

/// Write-mostly animation parameter interface, one sink per agent.
pub trait AnimSink {
    fn set_bool(&mut self, param: &'static str, value: bool);

    fn get_bool(&self, param: &'static str) -> bool;

    fn set_float(&mut self, param: &'static str, value: f32);

    /// Pulse a one-shot trigger.  Pending until consumed or reset.
    fn set_trigger(&mut self, param: &'static str);

    /// Clear a pending trigger that has not been consumed yet.
    fn reset_trigger(&mut self, param: &'static str);

    /// Take a pending trigger (host-side playback).  Returns `true` if the
    /// trigger was pending.
    fn consume_trigger(&mut self, param: &'static str) -> bool;

    /// Playback speed multiplier for the current clip (1.0 = authored speed).
    fn set_playback_rate(&mut self, rate: f32);

    /// Duration of the currently playing clip, in seconds.  Timed behaviors
    /// (pecking waits) pace themselves off this.
    fn current_clip_secs(&self) -> f32;
}

/// In-memory [`AnimSink`] used by the harness and tests.
///
/// Records every parameter write so tests can assert on animation state;
/// trigger pulses are counted as well as latched, because "exactly N pulses"
/// is an observable property of the pecking sequence.
#[derive(Debug, Clone)]
pub struct AnimParams {
    bools: FxHashMap<&'static str, bool>,
    floats: FxHashMap<&'static str, f32>,
    pending: FxHashSet<&'static str>,
    pulse_counts: FxHashMap<&'static str, u32>,
    playback_rate: f32,
    /// Settable stand-in for the host animator's current clip length.
    pub clip_secs: f32,
}

impl AnimParams {
    pub fn new() -> Self {
        Self {
            bools: FxHashMap::default(),
            floats: FxHashMap::default(),
            pending: FxHashSet::default(),
            pulse_counts: FxHashMap::default(),
            playback_rate: 1.0,
            clip_secs: 0.5,
        }
    }

    /// Total pulses ever fired on `param` (including consumed/reset ones).
    pub fn pulse_count(&self, param: &'static str) -> u32 {
        self.pulse_counts.get(param).copied().unwrap_or(0)
    }

    /// Last value written to a float parameter.
    pub fn get_float(&self, param: &'static str) -> f32 {
        self.floats.get(param).copied().unwrap_or(0.0)
    }

    pub fn playback_rate(&self) -> f32 {
        self.playback_rate
    }
}

impl Default for AnimParams {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimSink for AnimParams {
    fn set_bool(&mut self, param: &'static str, value: bool) {
        self.bools.insert(param, value);
    }

    fn get_bool(&self, param: &'static str) -> bool {
        self.bools.get(param).copied().unwrap_or(false)
    }

    fn set_float(&mut self, param: &'static str, value: f32) {
        self.floats.insert(param, value);
    }

    fn set_trigger(&mut self, param: &'static str) {
        self.pending.insert(param);
        *self.pulse_counts.entry(param).or_insert(0) += 1;
    }

    fn reset_trigger(&mut self, param: &'static str) {
        self.pending.remove(param);
    }

    fn consume_trigger(&mut self, param: &'static str) -> bool {
        self.pending.remove(param)
    }

    fn set_playback_rate(&mut self, rate: f32) {
        self.playback_rate = rate;
    }

    fn current_clip_secs(&self) -> f32 {
        self.clip_secs
    }
}
