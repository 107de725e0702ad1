//! Renderer collaborator interface
//!
//! The simulation hands the renderer a read-only snapshot once per tick and
//! gets nothing back. Real backends (terminal, GPU, whatever) implement
//! `Renderer`; headless runs use `NullRenderer`.

use crate::consts::*;
use crate::sim::{FallingObject, GamePhase, GameState, Player};

/// Read-only view of one frame's worth of game state
///
/// Everything a renderer needs: phase, player, the active objects, the
/// clock and the score. Borrowing keeps the snapshot allocation-free.
pub struct FrameSnapshot<'a> {
    state: &'a GameState,
}

impl<'a> FrameSnapshot<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn player(&self) -> &Player {
        &self.state.session.player
    }

    /// Active objects in slot order
    pub fn objects(&self) -> impl Iterator<Item = &FallingObject> {
        self.state.session.pool.iter_active().map(|(_, o)| o)
    }

    /// Seconds since Playing began
    pub fn elapsed(&self) -> f32 {
        self.state.session.elapsed
    }

    /// Seconds left before the player wins (clamped at zero for the HUD)
    pub fn time_left(&self) -> f32 {
        (self.state.tuning.duration - self.state.session.elapsed).max(0.0)
    }

    /// Session progress in [0, 1] for the timer bar
    pub fn progress(&self) -> f32 {
        (self.state.session.elapsed / self.state.tuning.duration).clamp(0.0, 1.0)
    }

    pub fn score(&self) -> u32 {
        self.state.session.score
    }

    /// Play area dimensions, for renderers that scale to their own surface
    pub fn play_size(&self) -> (f32, f32) {
        (PLAY_WIDTH, PLAY_HEIGHT)
    }
}

/// Renderer collaborator
///
/// Called exactly once per tick. No feedback into simulation state.
pub trait Renderer {
    fn draw_frame(&mut self, frame: &FrameSnapshot);
}

/// Renderer that draws nothing - headless demos and tests
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    fn draw_frame(&mut self, frame: &FrameSnapshot) {
        self.frames += 1;
        log::trace!(
            "frame {}: {:?} score={} t={:.2}",
            self.frames,
            frame.phase(),
            frame.score(),
            frame.elapsed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reports_time_left_and_progress() {
        let mut state = GameState::new(3);
        state.session.elapsed = 12.0;
        let frame = FrameSnapshot::new(&state);
        assert_eq!(frame.time_left(), 18.0);
        assert!((frame.progress() - 0.4).abs() < 1e-6);

        // Past the buzzer the HUD clamps rather than going negative
        state.session.elapsed = 31.0;
        let frame = FrameSnapshot::new(&state);
        assert_eq!(frame.time_left(), 0.0);
        assert_eq!(frame.progress(), 1.0);
    }

    #[test]
    fn test_snapshot_lists_only_active_objects() {
        use crate::sim::ObjectColor;
        use glam::Vec2;

        let mut state = GameState::new(3);
        for i in 0..3 {
            state
                .session
                .pool
                .spawn(FallingObject {
                    pos: Vec2::new(i as f32 * 50.0, 0.0),
                    speed: 100.0,
                    color: ObjectColor::Yellow,
                })
                .unwrap();
        }
        state.session.pool.deactivate(1);

        let frame = FrameSnapshot::new(&state);
        assert_eq!(frame.objects().count(), 2);
    }
}
