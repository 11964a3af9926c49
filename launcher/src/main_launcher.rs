pub const LAUNCHER_WINDOW_TITLE: &str = "Drop";
pub const LAUNCHER_WINDOW_WIDTH: u32 = 800;
pub const LAUNCHER_WINDOW_HEIGHT: u32 = 400;

mod game;

use drop_app::WindowConfig;

fn window_config() -> WindowConfig {
    WindowConfig {
        title: LAUNCHER_WINDOW_TITLE.to_owned(),
        width: LAUNCHER_WINDOW_WIDTH,
        height: LAUNCHER_WINDOW_HEIGHT,
    }
}

fn main() {
    drop_app::run_main(game::DropGame::new(), window_config());
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_wires_the_launcher_literals_through_unchanged() {
        let config = window_config();
        assert_eq!(config.title, "Drop");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 400);
    }

    #[test]
    fn window_config_satisfies_the_window_invariants() {
        assert!(window_config().is_valid());
    }
}
