mod sdl_input;
mod sdl_window;

use crate::input::InputState;
use crate::{AppCommand, AppLifecycle, WindowConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////
// Configuration

const ENABLE_FRAMETIME_LOGGING: bool = false;

////////////////////////////////////////////////////////////////////////////////////////////////////
// Debugging and performance

static mut TIMER_STARTING_INSTANT: Option<std::time::Instant> = None;

fn timer_initialize() {
    unsafe {
        TIMER_STARTING_INSTANT = Some(std::time::Instant::now());
    }
}

fn timer_current_time_seconds() -> f64 {
    unsafe {
        std::time::Instant::now()
            .duration_since(
                TIMER_STARTING_INSTANT.expect("Timer needs to be initialized before use"),
            )
            .as_secs_f64()
    }
}

fn log_frametimes(_duration_frame: f64, _duration_update: f64, _duration_swap: f64) {
    if ENABLE_FRAMETIME_LOGGING {
        log::trace!(
            "frame: {:.3}ms  update: {:.3}ms  swap: {:.3}ms",
            _duration_frame * 1000.0,
            _duration_update * 1000.0,
            _duration_swap * 1000.0,
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Logging and error handling

fn init_logging(loglevel: log::Level) -> Result<(), String> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}::{}: {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(loglevel.to_level_filter())
        .chain(std::io::stdout())
        .apply()
        .map_err(|error| format!("Could not initialize logger: {}", error))?;

    log::info!("Logger initialized");

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////
// Main event loop

pub fn run_main<AppLifecycleType: 'static + AppLifecycle>(
    mut app: AppLifecycleType,
    config: WindowConfig,
) {
    timer_initialize();

    if let Err(error) = init_logging(log::Level::Trace) {
        sdl_window::Window::show_error_messagebox(&error);
    }

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("{}", panic_info);
        let backtrace = backtrace::Backtrace::new();
        log::error!("BACKTRACE:\r\n{:?}", backtrace);
    }));

    assert!(
        config.is_valid(),
        "Window configuration invalid: title '{}' with dimensions {}x{}",
        config.title,
        config.width,
        config.height
    );

    // ---------------------------------------------------------------------------------------------
    // SDL subsystems

    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context
        .video()
        .expect("Failed to initialize SDL2 video");

    // ---------------------------------------------------------------------------------------------
    // SDL Window

    let window = sdl_window::Window::new(sdl_video.clone(), &config);
    let mut renderer = window.create_renderer();

    // ---------------------------------------------------------------------------------------------
    // Input

    let mut input = InputState::new();
    let (screen_width, screen_height) = window.dimensions();
    input.screen_framebuffer_width = screen_width;
    input.screen_framebuffer_height = screen_height;
    input.screen_framebuffer_dimensions_changed = true;

    // ---------------------------------------------------------------------------------------------
    // Mainloop setup

    let mut systemcommands: Vec<AppCommand> = Vec::new();
    let mut event_pump = sdl_context
        .event_pump()
        .expect("Failed to acquire event pump");

    let app_start_time = timer_current_time_seconds();
    let mut frame_start_time = app_start_time;
    log::debug!("Startup took {:.3}ms", app_start_time * 1000.0,);

    app.create(&mut renderer, &input);

    let mut is_running = true;

    // ---------------------------------------------------------------------------------------------
    // Begin Mainloop

    while is_running {
        //--------------------------------------------------------------------------------------
        // Event loop

        use sdl2::event::Event;
        use sdl2::event::WindowEvent;
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    log::info!("Quit signal received");
                    is_running = false;
                }
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::SizeChanged(width, height) => {
                        input.screen_framebuffer_dimensions_changed = true;
                        input.screen_framebuffer_width = width as u32;
                        input.screen_framebuffer_height = height as u32;
                    }
                    WindowEvent::FocusGained => {
                        input.has_focus_event = true;
                        input.has_focus = true;
                    }
                    WindowEvent::FocusLost => {
                        input.has_focus_event = true;
                        input.has_focus = false;
                    }
                    _ => {}
                },
                Event::KeyDown {
                    scancode: Some(sdl2_scancode),
                    ..
                } => {
                    input.keyboard.has_press_event = true;
                    let scancode = sdl_input::scancode_to_our_scancode(sdl2_scancode);
                    input.keyboard.process_key_press_event(scancode);
                }
                Event::KeyUp {
                    scancode: Some(sdl2_scancode),
                    ..
                } => {
                    input.keyboard.has_release_event = true;
                    let scancode = sdl_input::scancode_to_our_scancode(sdl2_scancode);
                    input.keyboard.process_key_release_event(scancode);
                }
                _ => {}
            }
        }

        if input.screen_framebuffer_dimensions_changed {
            renderer.update_screen_dimensions(
                input.screen_framebuffer_width,
                input.screen_framebuffer_height,
            );
            app.resize(
                input.screen_framebuffer_width,
                input.screen_framebuffer_height,
            );
        }

        //--------------------------------------------------------------------------------------
        // Timings, update and drawing

        let pre_update_time = timer_current_time_seconds();

        let duration_frame = pre_update_time - frame_start_time;
        frame_start_time = pre_update_time;

        input.deltatime =
            super::snap_deltatime_to_nearest_common_refresh_rate(duration_frame as f32);
        input.real_world_uptime = frame_start_time;

        app.run_tick(&mut renderer, &input, &mut systemcommands);

        // Clear input state
        input.screen_framebuffer_dimensions_changed = false;
        input.has_focus_event = false;
        input.keyboard.clear_transitions();

        //--------------------------------------------------------------------------------------
        // System commands

        for command in &systemcommands {
            match command {
                AppCommand::Shutdown => {
                    log::info!("Received shutdown signal");
                    is_running = false;
                }
            }
        }
        systemcommands.clear();

        let post_update_time = timer_current_time_seconds();

        //--------------------------------------------------------------------------------------
        // Swap framebuffers

        window.sdl_window.gl_swap_window();

        let post_swap_time = timer_current_time_seconds();

        log_frametimes(
            duration_frame,
            post_update_time - pre_update_time,
            post_swap_time - post_update_time,
        );
    }

    //--------------------------------------------------------------------------------------
    // Mainloop stopped

    app.dispose();

    let app_uptime = timer_current_time_seconds() - app_start_time;
    log::debug!("Application uptime: {:.3}s", app_uptime);
}
