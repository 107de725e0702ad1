//! Platform abstraction layer
//!
//! The simulation never talks to a window directly; it consumes per-frame
//! deltas and key queries through this trait. A real backend wraps whatever
//! windowing library is in use; tests and the headless demo use scripted
//! implementations.

use crate::sim::TickInput;

/// The fixed key set the game cares about
///
/// Left/A and Right/D are equivalent bindings; Space is start/restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Space,
}

/// Windowing/input collaborator
pub trait Platform {
    /// Seconds since the previous frame
    fn frame_delta(&mut self) -> f32;

    /// Is the key currently held?
    fn is_key_down(&self, key: Key) -> bool;

    /// Was the key pressed this frame (edge, not level)?
    fn was_key_pressed(&self, key: Key) -> bool;

    /// Has the user asked to close the window / end the process?
    fn should_close(&self) -> bool;
}

/// Fold raw key state into the simulation's input commands
pub fn poll_input(platform: &impl Platform) -> TickInput {
    TickInput {
        left: platform.is_key_down(Key::Left) || platform.is_key_down(Key::A),
        right: platform.is_key_down(Key::Right) || platform.is_key_down(Key::D),
        confirm: platform.was_key_pressed(Key::Space),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePlatform {
        held: Vec<Key>,
        pressed: Vec<Key>,
    }

    impl Platform for FakePlatform {
        fn frame_delta(&mut self) -> f32 {
            crate::consts::SIM_DT
        }
        fn is_key_down(&self, key: Key) -> bool {
            self.held.contains(&key)
        }
        fn was_key_pressed(&self, key: Key) -> bool {
            self.pressed.contains(&key)
        }
        fn should_close(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_either_binding_moves() {
        let p = FakePlatform {
            held: vec![Key::A],
            pressed: vec![],
        };
        let input = poll_input(&p);
        assert!(input.left);
        assert!(!input.right);

        let p = FakePlatform {
            held: vec![Key::Right],
            pressed: vec![],
        };
        assert!(poll_input(&p).right);
    }

    #[test]
    fn test_confirm_is_edge_triggered() {
        // Space held but not pressed this frame does not confirm
        let p = FakePlatform {
            held: vec![Key::Space],
            pressed: vec![],
        };
        assert!(!poll_input(&p).confirm);

        let p = FakePlatform {
            held: vec![],
            pressed: vec![Key::Space],
        };
        assert!(poll_input(&p).confirm);
    }
}
