use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
///
/// Holds "is down" information only; edge events are delivered to the
/// application directly as they arrive.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear the "down" set. Avoids stuck keys
                    // when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Released,
            repeat: false,
        }
    }

    #[test]
    fn press_and_release_edges() {
        let mut state = InputState::default();

        state.apply_event(&press(Key::ArrowLeft));
        assert!(state.key_down(Key::ArrowLeft));

        state.apply_event(&release(Key::ArrowLeft));
        assert!(!state.key_down(Key::ArrowLeft));
    }

    #[test]
    fn independent_keys() {
        let mut state = InputState::default();
        state.apply_event(&press(Key::ArrowLeft));
        state.apply_event(&press(Key::ArrowRight));
        assert!(state.key_down(Key::ArrowLeft));
        assert!(state.key_down(Key::ArrowRight));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        state.apply_event(&press(Key::ArrowRight));
        state.apply_event(&InputEvent::Focused(false));
        assert!(!state.key_down(Key::ArrowRight));
    }
}
