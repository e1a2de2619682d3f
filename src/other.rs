use std::collections::HashSet;

use sdl2::keyboard::Keycode;

use crate::window::FrameEvent;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the keys pressed or released during the previous frame. Held keys stay down.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn press(&mut self, key: Keycode) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Keycode) {
        if self.down.remove(&key) {
            self.released.insert(key);
        }
    }

    /// Whether `key` is currently held.
    pub fn is_down(&self, key: Keycode) -> bool {
        self.down.contains(&key)
    }
}

/// Context provided to the game during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub frame: FrameEvent,
}

impl<'a> UpdateContext<'a> {
    /// Creates a new `UpdateContext` from the given keyboard state and frame timing.
    pub fn new(keyboard: &'a KeyboardState, frame: FrameEvent) -> Self {
        Self { keyboard, frame }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_hold() {
        let mut keyboard = KeyboardState::default();
        keyboard.press(Keycode::Escape);
        assert!(keyboard.is_down(Keycode::Escape));
        assert!(keyboard.pressed.contains(&Keycode::Escape));

        keyboard.begin_frame();
        assert!(keyboard.is_down(Keycode::Escape));
        assert!(keyboard.pressed.is_empty());
    }

    #[test]
    fn release_is_reported_once() {
        let mut keyboard = KeyboardState::default();
        keyboard.press(Keycode::A);
        keyboard.begin_frame();
        keyboard.release(Keycode::A);
        assert!(!keyboard.is_down(Keycode::A));
        assert!(keyboard.released.contains(&Keycode::A));

        keyboard.begin_frame();
        keyboard.release(Keycode::A);
        assert!(keyboard.released.is_empty());
    }

    #[test]
    fn repeated_press_is_not_a_new_press() {
        let mut keyboard = KeyboardState::default();
        keyboard.press(Keycode::Space);
        keyboard.begin_frame();
        keyboard.press(Keycode::Space);
        assert!(keyboard.pressed.is_empty());
        assert!(keyboard.is_down(Keycode::Space));
    }
}
