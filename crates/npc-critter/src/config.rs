//! Critter tuning.

use npc_core::{NpcError, NpcResult};
use npc_steer::AngleSteppedAvoidance;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CritterConfig {
    /// Player distance at which the critter starts escaping.
    pub detection_radius: f32,
    /// Escape ends once the player is beyond `detection_radius` times this
    /// factor — hysteresis so the state doesn't flap at the boundary.
    pub escape_exit_factor: f32,
    /// Flee speed (roaming uses `move_speed`).
    pub escape_speed: f32,
    pub move_speed: f32,
    /// Slerp fraction per second toward the heading.
    pub turn_speed: f32,
    /// Roam legs cover a uniform random distance in this range.
    pub min_move_distance: f32,
    pub max_move_distance: f32,
    /// Distance to the roam target that counts as arrival (then snap).
    pub arrival_distance: f32,
    /// Idle wait between roam legs.
    pub min_wait_secs: f32,
    pub max_wait_secs: f32,
    /// Random delay before the first roam leg, uniform in `[0, this]`.
    pub max_start_delay_secs: f32,
    /// Scan radius for attraction-tagged objects.
    pub attraction_radius: f32,
    /// Distance to the attraction at which pecking starts.
    pub reach_distance: f32,
    /// Trigger pulses per pecking sequence.
    pub pecking_count: u32,
    /// Attraction sensing stays off this long after a finished peck.
    pub immune_secs: f32,
    /// Radius of the occupancy probe at a candidate destination.
    pub occupancy_probe_radius: f32,
    /// Obstacle/occupant heading search.
    pub avoidance: AngleSteppedAvoidance,
}

impl Default for CritterConfig {
    fn default() -> Self {
        Self {
            detection_radius: 5.0,
            escape_exit_factor: 1.5,
            escape_speed: 5.0,
            move_speed: 2.0,
            turn_speed: 2.0,
            min_move_distance: 1.0,
            max_move_distance: 3.0,
            arrival_distance: 0.1,
            min_wait_secs: 2.0,
            max_wait_secs: 4.0,
            max_start_delay_secs: 1.0,
            attraction_radius: 8.0,
            reach_distance: 0.5,
            pecking_count: 3,
            immune_secs: 5.0,
            occupancy_probe_radius: 0.5,
            avoidance: AngleSteppedAvoidance::default(),
        }
    }
}

impl CritterConfig {
    pub fn validate(&self) -> NpcResult<()> {
        if self.escape_exit_factor < 1.0 {
            return Err(NpcError::Config(format!(
                "escape_exit_factor ({}) must be at least 1.0 or escape never holds",
                self.escape_exit_factor
            )));
        }
        if self.move_speed <= 0.0 || self.escape_speed <= 0.0 {
            return Err(NpcError::Config("speeds must be positive".into()));
        }
        if self.min_move_distance > self.max_move_distance {
            return Err(NpcError::Config(format!(
                "min_move_distance ({}) exceeds max_move_distance ({})",
                self.min_move_distance, self.max_move_distance
            )));
        }
        if self.min_wait_secs > self.max_wait_secs {
            return Err(NpcError::Config(format!(
                "min_wait_secs ({}) exceeds max_wait_secs ({})",
                self.min_wait_secs, self.max_wait_secs
            )));
        }
        if self.pecking_count == 0 {
            return Err(NpcError::Config("pecking_count must be nonzero".into()));
        }
        Ok(())
    }
}
