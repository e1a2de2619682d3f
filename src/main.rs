use crate::{
    abs::App,
    rectangle::RectangleGame,
    settings::{GameSettings, WindowSettings},
};

mod abs;
mod error;
mod logging;
mod other;
mod rectangle;
mod settings;
mod window;

fn main() {
    if let Err(e) = logging::init(logging::default_level()) {
        eprintln!("failed to initialize logging: {e}");
    }

    let window_settings = WindowSettings::default();
    let game_settings = GameSettings::default();
    match serde_json::to_string(&window_settings) {
        Ok(json) => log::debug!("window settings: {json}"),
        Err(e) => log::warn!("could not serialize window settings: {e}"),
    }

    let mut app = match App::new(&window_settings) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut game = RectangleGame::new();
    if let Err(e) = window::run(&mut app, &game_settings, &mut game) {
        log::error!("{e}");
        // `exit` skips destructors; GL objects must go before the context.
        drop(game);
        drop(app);
        std::process::exit(1);
    }
}
