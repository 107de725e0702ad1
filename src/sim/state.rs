//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::pool::ObjectPool;
use super::spawn::Spawner;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Menu,
    /// Active gameplay
    Playing,
    /// Player was hit
    GameOver,
    /// Player survived the full session
    Win,
}

/// Cosmetic color tag for falling objects
///
/// Purely visual - no behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectColor {
    Red,
    Orange,
    Purple,
    Yellow,
}

impl ObjectColor {
    /// The full palette, in spawn-roll order
    pub const PALETTE: [ObjectColor; 4] = [
        ObjectColor::Red,
        ObjectColor::Orange,
        ObjectColor::Purple,
        ObjectColor::Yellow,
    ];

    /// RGBA for renderers
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            ObjectColor::Red => [255, 80, 80, 255],
            ObjectColor::Orange => [255, 180, 60, 255],
            ObjectColor::Purple => [200, 100, 255, 255],
            ObjectColor::Yellow => [255, 220, 80, 255],
        }
    }
}

/// A falling object occupying one pool slot
#[derive(Debug, Clone, Copy)]
pub struct FallingObject {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Fall speed (units/second)
    pub speed: f32,
    pub color: ObjectColor,
}

impl FallingObject {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, OBJECT_SIZE)
    }
}

/// The player's avatar
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Horizontal speed (units/second)
    pub speed: f32,
}

impl Player {
    /// A player centered horizontally, near the bottom of the play area
    pub fn spawn_centered(speed: f32) -> Self {
        Self {
            pos: Vec2::new(
                PLAY_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
                PLAY_HEIGHT - PLAYER_BOTTOM_MARGIN,
            ),
            speed,
        }
    }

    /// Apply one tick of directional input, keeping the player in bounds
    ///
    /// Holding both directions cancels out. No vertical movement exists.
    pub fn apply_input(&mut self, left: bool, right: bool, dt: f32) {
        if left {
            self.pos.x -= self.speed * dt;
        }
        if right {
            self.pos.x += self.speed * dt;
        }
        self.pos.x = self.pos.x.clamp(0.0, PLAY_WIDTH - PLAYER_SIZE);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, PLAYER_SIZE)
    }
}

/// All state scoped to one play-through
///
/// Built fresh on every Menu -> Playing transition so nothing leaks between
/// sessions.
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub pool: ObjectPool,
    /// Seconds since Playing began (monotonic within the session)
    pub elapsed: f32,
    /// Objects that reached the bottom without hitting the player
    pub score: u32,
    pub spawner: Spawner,
}

impl Session {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player: Player::spawn_centered(tuning.player_speed),
            pool: ObjectPool::new(POOL_CAPACITY),
            elapsed: 0.0,
            score: 0,
            spawner: Spawner::new(),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub session: Session,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh game in the Menu phase
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let session = Session::new(&tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            session,
            tuning,
        }
    }

    /// Rebuild the session from scratch: fresh player, empty pool, zeroed
    /// timer/score/spawn accumulator
    ///
    /// Called on every Menu -> Playing transition so nothing leaks between
    /// play-throughs. Does not touch the phase; the state machine owns that.
    pub fn reset_session(&mut self) {
        self.session = Session::new(&self.tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawns_centered_in_bounds() {
        let player = Player::spawn_centered(320.0);
        assert_eq!(player.pos.x, PLAY_WIDTH / 2.0 - PLAYER_SIZE / 2.0);
        assert_eq!(player.pos.y, PLAY_HEIGHT - PLAYER_BOTTOM_MARGIN);
    }

    #[test]
    fn test_player_clamps_at_edges() {
        let mut player = Player::spawn_centered(320.0);
        // Hold left far longer than it takes to reach the wall
        for _ in 0..600 {
            player.apply_input(true, false, SIM_DT);
        }
        assert_eq!(player.pos.x, 0.0);

        for _ in 0..600 {
            player.apply_input(false, true, SIM_DT);
        }
        assert_eq!(player.pos.x, PLAY_WIDTH - PLAYER_SIZE);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut player = Player::spawn_centered(320.0);
        let x = player.pos.x;
        player.apply_input(true, true, SIM_DT);
        assert_eq!(player.pos.x, x);
    }

    #[test]
    fn test_reset_session_zeroes_everything() {
        let mut state = GameState::new(7);
        state.session.score = 12;
        state.session.elapsed = 9.5;
        state.reset_session();
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.elapsed, 0.0);
        assert_eq!(state.session.pool.active_count(), 0);
    }
}
