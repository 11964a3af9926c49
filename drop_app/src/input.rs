use std::collections::HashMap;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Buttons

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Scancode {
    Unidentified,

    Escape,
    Enter,
    Space,

    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
}

/// NOTE: The transition count is useful if we have multiple transitions in a frame. This gives
/// us information about what state the button was before the frame started and how often it
/// switched states
#[derive(Default, Copy, Clone, Debug)]
pub struct ButtonState {
    pub is_pressed: bool,
    pub transition_count: u32,
}

impl ButtonState {
    pub fn process_press_event(&mut self) {
        if !self.is_pressed {
            self.is_pressed = true;
            self.transition_count += 1;
        }
    }

    pub fn process_release_event(&mut self) {
        if self.is_pressed {
            self.is_pressed = false;
            self.transition_count += 1;
        }
    }

    pub fn recently_pressed(&self) -> bool {
        self.is_pressed && (self.transition_count > 0)
    }

    pub fn recently_released(&self) -> bool {
        !self.is_pressed && (self.transition_count > 0)
    }

    pub fn clear_transitions(&mut self) {
        self.transition_count = 0;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Keyboard

#[derive(Default, Clone)]
pub struct KeyboardState {
    pub has_press_event: bool,
    pub has_release_event: bool,

    keys: HashMap<Scancode, ButtonState>,
}

impl KeyboardState {
    pub fn process_key_press_event(&mut self, scancode: Scancode) {
        self.keys.entry(scancode).or_default().process_press_event();
    }

    pub fn process_key_release_event(&mut self, scancode: Scancode) {
        self.keys
            .entry(scancode)
            .or_default()
            .process_release_event();
    }

    pub fn is_pressed(&self, scancode: Scancode) -> bool {
        self.keys
            .get(&scancode)
            .map(|key| key.is_pressed)
            .unwrap_or(false)
    }

    pub fn recently_pressed(&self, scancode: Scancode) -> bool {
        self.keys
            .get(&scancode)
            .map(|key| key.recently_pressed())
            .unwrap_or(false)
    }

    pub fn recently_released(&self, scancode: Scancode) -> bool {
        self.keys
            .get(&scancode)
            .map(|key| key.recently_released())
            .unwrap_or(false)
    }

    pub fn clear_transitions(&mut self) {
        self.has_press_event = false;
        self.has_release_event = false;
        for key in self.keys.values_mut() {
            key.clear_transitions();
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Input state

#[derive(Default, Clone)]
pub struct InputState {
    pub keyboard: KeyboardState,

    pub has_focus_event: bool,
    pub has_focus: bool,

    pub screen_framebuffer_width: u32,
    pub screen_framebuffer_height: u32,
    pub screen_framebuffer_dimensions_changed: bool,

    /// Measured time since last frame, snapped to the nearest common refresh rate
    pub deltatime: f32,
    pub real_world_uptime: f64,
}

impl InputState {
    pub fn new() -> InputState {
        InputState::default()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_transitions_are_counted() {
        let mut button = ButtonState::default();
        assert!(!button.is_pressed);
        assert!(!button.recently_pressed());

        button.process_press_event();
        assert!(button.is_pressed);
        assert!(button.recently_pressed());
        assert_eq!(button.transition_count, 1);

        // A repeated press event must not count as a new transition
        button.process_press_event();
        assert_eq!(button.transition_count, 1);

        button.process_release_event();
        assert!(!button.is_pressed);
        assert!(button.recently_released());
        assert_eq!(button.transition_count, 2);

        button.clear_transitions();
        assert!(!button.recently_released());
        assert!(!button.is_pressed);
    }

    #[test]
    fn keyboard_tracks_keys_by_scancode() {
        let mut keyboard = KeyboardState::default();

        keyboard.process_key_press_event(Scancode::Escape);
        assert!(keyboard.is_pressed(Scancode::Escape));
        assert!(keyboard.recently_pressed(Scancode::Escape));
        assert!(!keyboard.is_pressed(Scancode::Space));

        keyboard.process_key_release_event(Scancode::Escape);
        assert!(!keyboard.is_pressed(Scancode::Escape));
        assert!(keyboard.recently_released(Scancode::Escape));

        keyboard.clear_transitions();
        assert!(!keyboard.recently_released(Scancode::Escape));
    }

    #[test]
    fn releasing_an_unpressed_key_is_a_noop() {
        let mut keyboard = KeyboardState::default();
        keyboard.process_key_release_event(Scancode::Enter);
        assert!(!keyboard.is_pressed(Scancode::Enter));
        assert!(!keyboard.recently_released(Scancode::Enter));
    }
}
