//! The game loop.
//!
//! [`run`] drives a [`Game`] through its lifecycle: load once, then update and render every
//! frame until the window is closed or the game asks to quit, then unload once.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use sdl2::event::{Event, WindowEvent};

use crate::{
    abs::App,
    error::GlError,
    other::{KeyboardState, UpdateContext},
    settings::GameSettings,
};

/// Returned from [`Game::on_update`] to keep running or stop the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Timing information for a single update or render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEvent {
    /// Seconds since the previous call of the same kind.
    pub delta_time: f32,
}

/// Callbacks invoked by [`run`].
pub trait Game {
    /// Creates GPU resources. Called once, before the first frame.
    fn on_load(&mut self, gl: &Arc<glow::Context>) -> Result<(), GlError>;

    /// Advances the game state.
    fn on_update(&mut self, _ctx: &UpdateContext) -> Control {
        Control::Continue
    }

    /// Draws a frame. Buffers are swapped by the loop afterwards.
    fn on_render(&mut self, gl: &Arc<glow::Context>, frame: FrameEvent);

    /// Called with the new drawable size in pixels, and once after loading.
    fn on_resize(&mut self, _gl: &Arc<glow::Context>, _width: u32, _height: u32) {}

    /// Releases GPU resources. Called once, after the last frame.
    fn on_unload(&mut self, _gl: &Arc<glow::Context>) {}
}

/// Measures the time between consecutive ticks.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Returns the seconds elapsed since the previous tick and restarts the measurement.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }

    /// Time since the previous tick, without restarting.
    pub fn elapsed(&self) -> Duration {
        self.last.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether an update is due after `elapsed`, given the minimum `interval` between updates.
pub fn update_due(elapsed: Duration, interval: Option<Duration>) -> bool {
    interval.is_none_or(|interval| elapsed >= interval)
}

/// Runs `game` in the window owned by `app` until it quits.
pub fn run<G: Game>(app: &mut App, settings: &GameSettings, game: &mut G) -> Result<(), GlError> {
    game.on_load(&app.gl)?;
    log::info!("game loaded");

    let (width, height) = app.size();
    game.on_resize(&app.gl, width, height);

    let interval = settings.update_interval();
    let mut keyboard = KeyboardState::default();
    let mut update_clock = FrameClock::new();
    let mut render_clock = FrameClock::new();

    'running: loop {
        keyboard.begin_frame();

        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    log::info!("window close requested");
                    break 'running;
                }
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = app.window.drawable_size();
                    log::debug!("resized to {width}x{height}");
                    game.on_resize(&app.gl, width, height);
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => keyboard.press(keycode),
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => keyboard.release(keycode),
                _ => {}
            }
        }

        if update_due(update_clock.elapsed(), interval) {
            let frame = FrameEvent {
                delta_time: update_clock.tick(),
            };
            if game.on_update(&UpdateContext::new(&keyboard, frame)) == Control::Quit {
                log::info!("quit requested");
                break 'running;
            }
        }

        let frame = FrameEvent {
            delta_time: render_clock.tick(),
        };
        game.on_render(&app.gl, frame);
        app.swap_buffers();
    }

    game.on_unload(&app.gl);
    log::info!("game unloaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_every_frame_without_interval() {
        assert!(update_due(Duration::ZERO, None));
    }

    #[test]
    fn waits_for_interval() {
        let interval = Some(Duration::from_millis(16));
        assert!(!update_due(Duration::from_millis(10), interval));
        assert!(update_due(Duration::from_millis(16), interval));
        assert!(update_due(Duration::from_millis(40), interval));
    }

    #[test]
    fn clock_ticks_forward() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let first = clock.tick();
        assert!(first >= 0.005);
        assert!(clock.elapsed() < Duration::from_secs(1));
        assert!(clock.tick() >= 0.0);
    }
}
