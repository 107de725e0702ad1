//! Sky Dodge entry point
//!
//! The native binary runs a headless autopilot session: the demo AI dodges
//! falling objects at a fixed 60 Hz timestep and reports how it went. Handy
//! for eyeballing balance and profiling the sim without a window.

use sky_dodge::consts::*;
use sky_dodge::renderer::{FrameSnapshot, NullRenderer, Renderer};
use sky_dodge::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xD0D6E);

    log::info!("Sky Dodge demo session starting (seed {seed})");

    let mut state = GameState::new(seed);
    let mut renderer = NullRenderer::default();

    // Leave the menu
    let start = TickInput {
        confirm: true,
        ..TickInput::default()
    };
    tick(&mut state, &start, SIM_DT);

    // One minute guard; a session ends well before this
    for _ in 0..(60 * 60) {
        let input = autopilot(&state);
        tick(&mut state, &input, SIM_DT);
        renderer.draw_frame(&FrameSnapshot::new(&state));

        match state.phase {
            GamePhase::Win => {
                println!(
                    "autopilot survived the full {:.0}s, score {}",
                    state.tuning.duration, state.session.score
                );
                return;
            }
            GamePhase::GameOver => {
                println!(
                    "autopilot hit at {:.1}s, score {}",
                    state.session.elapsed, state.session.score
                );
                return;
            }
            _ => {}
        }
    }

    log::warn!("demo session did not finish within the frame guard");
}

/// Demo AI - steer away from the most dangerous falling object
///
/// "Most dangerous" is the lowest object whose column overlaps the player's
/// (with some margin). With nothing threatening, drift back toward the
/// center so there is room to dodge both ways.
fn autopilot(state: &GameState) -> TickInput {
    let player = &state.session.player;
    let player_center = player.pos.x + PLAYER_SIZE / 2.0;
    let margin = 30.0;

    let threat = state
        .session
        .pool
        .iter_active()
        .map(|(_, o)| o)
        .filter(|o| o.pos.y + OBJECT_SIZE < player.pos.y + PLAYER_SIZE)
        .filter(|o| {
            o.pos.x < player.pos.x + PLAYER_SIZE + margin
                && o.pos.x + OBJECT_SIZE > player.pos.x - margin
        })
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut input = TickInput::default();
    if let Some(object) = threat {
        let object_center = object.pos.x + OBJECT_SIZE / 2.0;
        if object_center < player_center {
            input.right = true;
        } else {
            input.left = true;
        }
    } else if player_center < PLAY_WIDTH / 2.0 - 20.0 {
        input.right = true;
    } else if player_center > PLAY_WIDTH / 2.0 + 20.0 {
        input.left = true;
    }
    input
}
