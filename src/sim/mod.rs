//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable slot iteration order (lowest index first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use pool::ObjectPool;
pub use spawn::{Spawner, fall_speed, spawn_interval};
pub use state::{FallingObject, GamePhase, GameState, ObjectColor, Player, Session};
pub use tick::{TickInput, tick};
