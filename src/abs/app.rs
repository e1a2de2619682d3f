//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::sync::Arc;

use glow::HasContext;

use crate::{error::GlError, settings::WindowSettings};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a window with a current OpenGL core context as described by `settings`.
    pub fn new(settings: &WindowSettings) -> Result<Self, GlError> {
        let sdl = sdl2::init().map_err(GlError::Context)?;
        let video_subsystem = sdl.video().map_err(GlError::Context)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(settings.gl_version.0, settings.gl_version.1);

        let mut builder = video_subsystem.window(&settings.title, settings.width, settings.height);
        builder.opengl().position_centered();
        if settings.resizable {
            builder.resizable();
        }
        let window = builder
            .build()
            .map_err(|e| GlError::Context(e.to_string()))?;

        let gl_context = window.gl_create_context().map_err(GlError::Context)?;
        window
            .gl_make_current(&gl_context)
            .map_err(GlError::Context)?;

        let swap_interval = if settings.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(swap_interval) {
            log::warn!("could not set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump().map_err(GlError::Context)?;

        unsafe {
            log::info!(
                "OpenGL {} on {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );
        }

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl: Arc::new(gl),
            event_pump,
        })
    }

    /// The size of the drawable area in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    pub fn swap_buffers(&self) {
        self.window.gl_swap_window();
    }
}
