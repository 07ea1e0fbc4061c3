//! Tunable parameters for the dog's behaviors.
//!
//! Defaults reproduce the shipped companion tuning; games override the
//! handful of fields they care about and validate once at spawn.

use npc_core::{NpcError, NpcResult, Vec3};
use npc_steer::SteeringKernel;

/// Arbiter-level tuning plus the three per-behavior blocks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DogConfig {
    /// Player distance at which the dog switches from random walk to follow.
    pub switch_distance: f32,
    /// Radius of the fetch-candidate scan around the dog.
    pub fetch_detection_range: f32,
    /// Minimum displacement from a candidate's baseline position before it
    /// counts as "was thrown".
    pub settle_displacement: f32,
    /// Maximum speed at which a displaced candidate counts as "has landed".
    pub settle_speed: f32,
    /// Minimum seconds between consecutive fetch starts.
    pub fetch_cooldown_secs: f32,
    /// Carried-object offset relative to the dog (the jaw socket).
    pub jaw_offset: Vec3,
    pub follow: FollowConfig,
    pub fetch: FetchConfig,
    pub walk: WalkConfig,
}

impl Default for DogConfig {
    fn default() -> Self {
        Self {
            switch_distance: 10.0,
            fetch_detection_range: 15.0,
            settle_displacement: 0.1,
            settle_speed: 0.1,
            fetch_cooldown_secs: 1.0,
            jaw_offset: Vec3::new(0.0, 0.3, 0.5),
            follow: FollowConfig::default(),
            fetch: FetchConfig::default(),
            walk: WalkConfig::default(),
        }
    }
}

impl DogConfig {
    /// Reject configurations that would stall or oscillate the arbiter.
    pub fn validate(&self) -> NpcResult<()> {
        if self.switch_distance <= self.follow.stop_distance {
            return Err(NpcError::Config(format!(
                "switch_distance ({}) must exceed follow stop_distance ({})",
                self.switch_distance, self.follow.stop_distance
            )));
        }
        if self.fetch_detection_range <= 0.0 {
            return Err(NpcError::Config(
                "fetch_detection_range must be positive".into(),
            ));
        }
        if self.follow.move_speed <= 0.0 || self.walk.move_speed <= 0.0 {
            return Err(NpcError::Config("move speeds must be positive".into()));
        }
        if self.walk.min_move_secs > self.walk.max_move_secs {
            return Err(NpcError::Config(format!(
                "walk min_move_secs ({}) exceeds max_move_secs ({})",
                self.walk.min_move_secs, self.walk.max_move_secs
            )));
        }
        if self.walk.kernel.ray_count < 2 {
            return Err(NpcError::Config(
                "steering kernel needs at least 2 rays".into(),
            ));
        }
        Ok(())
    }
}

/// Follow-behavior tuning.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowConfig {
    /// The dog stops (and sits) once within this distance of the player.
    pub stop_distance: f32,
    pub move_speed: f32,
    /// Slerp fraction per second toward the target heading.
    pub rotation_speed: f32,
    /// Heading error below which the seated dog stops correcting, degrees.
    pub rotation_threshold_deg: f32,
    /// Stand-up: seconds of walking before the sitting flag clears.
    pub stand_clear_sit_secs: f32,
    /// Stand-up: further settle time before movement starts.
    pub stand_settle_secs: f32,
    /// Sit-down: seconds after sitting starts before the walking flag clears.
    pub sit_clear_walk_secs: f32,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            stop_distance: 1.5,
            move_speed: 3.0,
            rotation_speed: 5.0,
            rotation_threshold_deg: 1.0,
            stand_clear_sit_secs: 0.1,
            stand_settle_secs: 0.2,
            sit_clear_walk_secs: 0.2,
        }
    }
}

/// Fetch-behavior tuning.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchConfig {
    /// Distance at which the target is considered reached and picked up.
    pub pickup_distance: f32,
    pub move_speed: f32,
    pub rotation_speed: f32,
    /// Inside this radius of the player, the approach heading is blended
    /// sideways so the dog doesn't barrel through the player.
    pub player_safety_radius: f32,
    /// Heading·to-player dot product above which avoidance kicks in.
    pub avoid_heading_dot: f32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            pickup_distance: 1.5,
            move_speed: 3.0,
            rotation_speed: 5.0,
            player_safety_radius: 3.0,
            avoid_heading_dot: 0.5,
        }
    }
}

/// Random-walk tuning.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkConfig {
    pub move_speed: f32,
    /// Slerp fraction per second toward the walk heading.
    pub turn_speed: f32,
    /// Each movement burst lasts a uniform random duration in this range.
    pub min_move_secs: f32,
    pub max_move_secs: f32,
    /// Pause between movement bursts.
    pub pause_secs: f32,
    /// Delay after activation before the first burst.
    pub startup_secs: f32,
    /// Base animation speed; playback rate scales with actual move speed.
    pub animation_speed: f32,
    /// Carried-object drop pose: forward and upward offsets from the dog.
    pub drop_forward: f32,
    pub drop_up: f32,
    /// Upward impulse applied to a dropped object.
    pub drop_impulse: f32,
    /// Obstacle-avoidance fan and bounds-resample parameters.
    pub kernel: SteeringKernel,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            turn_speed: 2.0,
            min_move_secs: 2.0,
            max_move_secs: 5.0,
            pause_secs: 1.0,
            startup_secs: 0.1,
            animation_speed: 1.0,
            drop_forward: 1.0,
            drop_up: 0.5,
            drop_impulse: 2.0,
            kernel: SteeringKernel::default(),
        }
    }
}
