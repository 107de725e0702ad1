//! Time-based object spawning
//!
//! Difficulty ramps two ways over a session: the interval between spawns
//! shrinks and the objects fall faster. Both are pure functions of elapsed
//! time so difficulty is identical for identical deltas.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::pool::ObjectPool;
use super::state::{FallingObject, ObjectColor};
use crate::consts::*;
use crate::tuning::Tuning;

/// Seconds between spawns at the given elapsed time
///
/// Strictly decreasing in `elapsed` until it hits the tuning floor, and
/// always positive.
pub fn spawn_interval(elapsed: f32, tuning: &Tuning) -> f32 {
    let t = (elapsed / tuning.duration).clamp(0.0, 1.0);
    let interval = tuning.base_spawn_interval * (1.0 - t * tuning.spawn_ramp);
    interval.max(tuning.min_spawn_interval)
}

/// Fall speed for an object spawned at the given elapsed time
pub fn fall_speed(elapsed: f32, tuning: &Tuning) -> f32 {
    let t = (elapsed / tuning.duration).clamp(0.0, 1.0);
    tuning.base_fall_speed + t * tuning.fall_speed_gain
}

/// Spawn-timer accumulator
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    /// Seconds accumulated toward the next spawn
    acc: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate `dt`; when the current interval is reached, activate one
    /// object in the pool
    ///
    /// A saturated pool drops the spawn for this interval - the accumulator
    /// still resets, so saturation does not cause a burst once slots free up.
    pub fn update(
        &mut self,
        elapsed: f32,
        dt: f32,
        pool: &mut ObjectPool,
        rng: &mut Pcg32,
        tuning: &Tuning,
    ) {
        self.acc += dt;
        if self.acc < spawn_interval(elapsed, tuning) {
            return;
        }
        self.acc = 0.0;

        let object = FallingObject {
            pos: Vec2::new(
                rng.random_range(0.0..PLAY_WIDTH - OBJECT_SIZE),
                -OBJECT_SIZE,
            ),
            speed: fall_speed(elapsed, tuning),
            color: ObjectColor::PALETTE[rng.random_range(0..ObjectColor::PALETTE.len())],
        };

        if pool.spawn(object).is_none() {
            log::trace!("spawn dropped: pool saturated");
        }
    }
}
