//! Per-frame simulation tick
//!
//! One handler per phase, each returning the next phase; `tick` dispatches
//! and applies the transition. Menu, GameOver and Win do no simulation work
//! beyond listening for the confirm input.

use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
///
/// The platform layer folds the raw key set down to these three booleans, so
/// the simulation never sees key codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move left this tick (held)
    pub left: bool,
    /// Move right this tick (held)
    pub right: bool,
    /// Start/restart (pressed this frame, not held)
    pub confirm: bool,
}

/// Advance the game by one tick
///
/// `dt` is the frame delta in seconds, consumed multiplicatively; the
/// simulation makes no assumptions about wall-clock pacing.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let next = match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::Playing => tick_playing(state, input, dt),
        GamePhase::GameOver | GamePhase::Win => tick_ended(state, input),
    };

    if next != state.phase {
        log::info!("{:?} -> {:?}", state.phase, next);
        state.phase = next;
    }
}

/// Menu: wait for the start input, then begin a fresh session
fn tick_menu(state: &mut GameState, input: &TickInput) -> GamePhase {
    if input.confirm {
        state.reset_session();
        GamePhase::Playing
    } else {
        GamePhase::Menu
    }
}

/// Playing: the whole per-frame pipeline
///
/// Order matters and is pinned by tests:
/// 1. advance the timer; Win fires before anything else moves
/// 2. player movement (clamped to the play area)
/// 3. spawning
/// 4. object fall
/// 5. per object, in slot order: collision (first hit ends the tick), then
///    off-screen scoring
fn tick_playing(state: &mut GameState, input: &TickInput, dt: f32) -> GamePhase {
    let tuning = &state.tuning;
    let session = &mut state.session;

    session.elapsed += dt;
    if session.elapsed >= tuning.duration {
        return GamePhase::Win;
    }

    session.player.apply_input(input.left, input.right, dt);

    session.spawner.update(
        session.elapsed,
        dt,
        &mut session.pool,
        &mut state.rng,
        tuning,
    );

    session.pool.update(dt);

    let player_box = session.player.aabb();
    for slot in 0..session.pool.capacity() {
        let Some(object) = session.pool.get(slot) else {
            continue;
        };
        let object_box = object.aabb();

        // First hit ends the tick; later slots are not scored this tick
        if object_box.overlaps(&player_box) {
            return GamePhase::GameOver;
        }

        if object_box.past_bottom(PLAY_HEIGHT) {
            session.pool.deactivate(slot);
            session.score += 1;
        }
    }

    GamePhase::Playing
}

/// GameOver/Win: wait for the restart input, then back to the menu
fn tick_ended(state: &GameState, input: &TickInput) -> GamePhase {
    if input.confirm {
        GamePhase::Menu
    } else {
        state.phase
    }
}
