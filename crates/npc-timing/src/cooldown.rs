//! Elapsed-time cooldown gate.

/// A "ready once every `duration_secs`" gate driven by absolute time.
///
/// `last_fired` starts at 0.0, so the first window must elapse from
/// simulation start before the gate opens — a freshly spawned agent doesn't
/// get a free trigger.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cooldown {
    pub duration_secs: f32,
    last_fired: f64,
}

impl Cooldown {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            last_fired: 0.0,
        }
    }

    /// `true` once `duration_secs` have elapsed since the last [`fire`].
    ///
    /// [`fire`]: Cooldown::fire
    #[inline]
    pub fn ready(&self, now_secs: f64) -> bool {
        now_secs - self.last_fired >= self.duration_secs as f64
    }

    /// Record a firing at `now_secs`, closing the gate for another window.
    #[inline]
    pub fn fire(&mut self, now_secs: f64) {
        self.last_fired = now_secs;
    }
}
