use drop_app::input::{InputState, Scancode};
use drop_app::renderer_opengl::{Color, Renderer};
use drop_app::{AppCommand, AppLifecycle};

const COLOR_BACKGROUND: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.2,
    a: 1.0,
};

pub struct DropGame {
    screen_width: u32,
    screen_height: u32,
}

impl DropGame {
    pub fn new() -> DropGame {
        DropGame {
            screen_width: 0,
            screen_height: 0,
        }
    }
}

fn quit_requested(input: &InputState) -> bool {
    input.keyboard.recently_released(Scancode::Escape)
}

impl AppLifecycle for DropGame {
    fn create(&mut self, _renderer: &mut Renderer, input: &InputState) {
        self.screen_width = input.screen_framebuffer_width;
        self.screen_height = input.screen_framebuffer_height;
        log::info!(
            "Game created on a {}x{} screen",
            self.screen_width,
            self.screen_height
        );
    }

    fn run_tick(
        &mut self,
        renderer: &mut Renderer,
        input: &InputState,
        out_systemcommands: &mut Vec<AppCommand>,
    ) {
        renderer.clear(COLOR_BACKGROUND);

        if quit_requested(input) {
            out_systemcommands.push(AppCommand::Shutdown);
        }
    }

    fn resize(&mut self, screen_width: u32, screen_height: u32) {
        self.screen_width = screen_width;
        self.screen_height = screen_height;
    }

    fn dispose(&mut self) {
        log::info!("Game disposed");
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_release_requests_shutdown() {
        let mut input = InputState::new();
        assert!(!quit_requested(&input));

        input.keyboard.process_key_press_event(Scancode::Escape);
        assert!(!quit_requested(&input));

        input.keyboard.process_key_release_event(Scancode::Escape);
        assert!(quit_requested(&input));

        input.keyboard.clear_transitions();
        assert!(!quit_requested(&input));
    }

    #[test]
    fn other_keys_do_not_request_shutdown() {
        let mut input = InputState::new();
        input.keyboard.process_key_press_event(Scancode::Space);
        input.keyboard.process_key_release_event(Scancode::Space);
        assert!(!quit_requested(&input));
    }
}
