use crate::renderer_opengl::Renderer;
use crate::WindowConfig;

pub struct Window {
    _sdl_glcontext: sdl2::video::GLContext,
    pub sdl_window: sdl2::video::Window,
    sdl_video: sdl2::VideoSubsystem,
}

impl Window {
    /// Creates a centered window with the exact dimensions and title of the given configuration.
    /// The configuration must be applied before any surface exists, so this is the only place
    /// that reads it.
    pub fn new(sdl_video: sdl2::VideoSubsystem, config: &WindowConfig) -> Window {
        let gl_attr = sdl_video.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        sdl2::hint::set_video_minimize_on_focus_loss(false);

        let sdl_window = sdl_video
            .window(&config.title, config.width, config.height)
            .position_centered()
            .opengl()
            .build()
            .expect("Failed to create window");

        debug_assert_eq!(gl_attr.context_profile(), sdl2::video::GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        let sdl_glcontext = sdl_window
            .gl_create_context()
            .expect("Could not create OpenGL context");
        sdl_window
            .gl_make_current(&sdl_glcontext)
            .expect("Could not make OpenGL context current");

        if let Err(error) = sdl_video.gl_set_swap_interval(sdl2::video::SwapInterval::VSync) {
            log::warn!("Could not enable vsync: '{}'", error);
        }

        Window {
            _sdl_glcontext: sdl_glcontext,
            sdl_window,
            sdl_video,
        }
    }

    pub fn create_renderer(&self) -> Renderer {
        let context = unsafe {
            glow::Context::from_loader_function(|s| {
                self.sdl_video.gl_get_proc_address(s) as *const _
            })
        };
        Renderer::new(context)
    }

    pub fn show_error_messagebox(message: &str) {
        sdl2::messagebox::show_simple_message_box(
            sdl2::messagebox::MessageBoxFlag::ERROR,
            "Error",
            message,
            None,
        )
        .unwrap_or(());
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.sdl_window.drawable_size()
    }
}
