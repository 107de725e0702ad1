//! Sky Dodge - dodge falling objects for 30 seconds
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, spawning, collisions)
//! - `platform`: Windowing/input collaborator interface
//! - `renderer`: Renderer collaborator interface + frame snapshots
//! - `app`: Frame loop gluing platform, sim and renderer together
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Side length of the player's bounding square
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Side length of a falling object's bounding square
    pub const OBJECT_SIZE: f32 = 30.0;

    /// Vertical offset of the player's top edge above the bottom of the play area
    pub const PLAYER_BOTTOM_MARGIN: f32 = 80.0;

    /// Object pool capacity - at most this many objects fall at once
    pub const POOL_CAPACITY: usize = 50;

    /// Reference timestep used by tests and the headless demo (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}
