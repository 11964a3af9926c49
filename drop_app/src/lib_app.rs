#[path = "platform_sdl2/sdl_app.rs"]
pub mod platform;

pub mod input;
pub mod renderer_opengl;

use input::InputState;
use renderer_opengl::Renderer;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Window configuration

/// Initial window setup the launcher hands us. Constructed once with literal values and consumed
/// before the window is created.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowConfig {
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && self.width > 0 && self.height > 0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// App lifecycle

pub enum AppCommand {
    Shutdown,
}

pub trait AppLifecycle {
    fn create(&mut self, renderer: &mut Renderer, input: &InputState);
    fn run_tick(
        &mut self,
        renderer: &mut Renderer,
        input: &InputState,
        out_systemcommands: &mut Vec<AppCommand>,
    );
    fn resize(&mut self, screen_width: u32, screen_height: u32);
    fn dispose(&mut self);
}

/// Hands the process over to the platform mainloop. Blocks until the application quits.
pub fn run_main<AppLifecycleType: 'static + AppLifecycle>(
    app: AppLifecycleType,
    config: WindowConfig,
) {
    platform::run_main(app, config);
}

fn snap_deltatime_to_nearest_common_refresh_rate(deltatime: f32) -> f32 {
    let common_refresh_rates = [30, 60, 72, 75, 85, 90, 120, 144, 240, 360];
    let index_with_smallest_distance = common_refresh_rates
        .iter()
        .map(|refresh_rate| (deltatime - 1.0 / *refresh_rate as f32).abs())
        .enumerate()
        .min_by(|(_index_a, a), (_index_b, b)| a.partial_cmp(b).unwrap())
        .unwrap()
        .0;
    1.0 / common_refresh_rates[index_with_smallest_distance] as f32
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_validity() {
        let config = WindowConfig {
            title: "Drop".to_owned(),
            width: 800,
            height: 400,
        };
        assert!(config.is_valid());

        assert!(!WindowConfig {
            title: "".to_owned(),
            width: 800,
            height: 400,
        }
        .is_valid());
        assert!(!WindowConfig {
            title: "Drop".to_owned(),
            width: 0,
            height: 400,
        }
        .is_valid());
        assert!(!WindowConfig {
            title: "Drop".to_owned(),
            width: 800,
            height: 0,
        }
        .is_valid());
    }

    #[test]
    fn deltatime_snaps_to_the_nearest_common_refresh_rate() {
        assert_eq!(
            snap_deltatime_to_nearest_common_refresh_rate(1.0 / 60.0),
            1.0 / 60.0
        );
        assert_eq!(
            snap_deltatime_to_nearest_common_refresh_rate(0.0167),
            1.0 / 60.0
        );
        assert_eq!(
            snap_deltatime_to_nearest_common_refresh_rate(1.0 / 144.0),
            1.0 / 144.0
        );
        assert_eq!(
            snap_deltatime_to_nearest_common_refresh_rate(0.03),
            1.0 / 30.0
        );
    }
}
