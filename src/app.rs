//! Frame loop
//!
//! One logical tick per rendered frame: delta -> input -> tick -> draw.
//! Single-threaded and cooperative; the loop only ends when the platform
//! signals close.

use crate::platform::{Platform, poll_input};
use crate::renderer::{FrameSnapshot, Renderer};
use crate::sim::{GameState, tick};

/// Drive the game until the platform asks to close
pub fn run<P: Platform, R: Renderer>(state: &mut GameState, platform: &mut P, renderer: &mut R) {
    while !platform.should_close() {
        let dt = platform.frame_delta();
        let input = poll_input(&*platform);
        tick(state, &input, dt);
        renderer.draw_frame(&FrameSnapshot::new(state));
    }
}
