//! Data-driven game balance
//!
//! All the numbers that control session difficulty live here so they can be
//! tweaked without touching simulation code. Defaults match the shipped game;
//! a JSON blob can override them for playtesting.

use serde::{Deserialize, Serialize};

/// Balance values for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Session length in seconds - survive this long to win
    pub duration: f32,
    /// Player horizontal speed (units/second)
    pub player_speed: f32,
    /// Spawn interval at elapsed = 0 (seconds between spawns)
    pub base_spawn_interval: f32,
    /// Fraction of the base interval ramped away by the end of the session (< 1)
    pub spawn_ramp: f32,
    /// Lower bound on the spawn interval
    pub min_spawn_interval: f32,
    /// Object fall speed at elapsed = 0 (units/second)
    pub base_fall_speed: f32,
    /// Extra fall speed gained by the end of the session
    pub fall_speed_gain: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            duration: 30.0,
            player_speed: 320.0,
            base_spawn_interval: 1.0,
            spawn_ramp: 0.7,
            min_spawn_interval: 0.25,
            base_fall_speed: 180.0,
            fall_speed_gain: 220.0,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from a JSON blob
    ///
    /// Missing fields fall back to defaults, so a partial override like
    /// `{"duration": 10.0}` is valid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
