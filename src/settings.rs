//! Window and game loop settings.
//!
//! Both structs fill missing fields from their defaults when deserialized, so a partial
//! description is enough.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Native window and OpenGL context settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version as `(major, minor)`.
    pub gl_version: (u8, u8),
    pub vsync: bool,
    pub resizable: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "My First Glow".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            vsync: true,
            resizable: true,
        }
    }
}

/// Game loop timing settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Updates per second. `0.0` runs one update per rendered frame.
    pub update_rate: f64,
}

impl GameSettings {
    /// Minimum time between two updates, or `None` to update every frame.
    pub fn update_interval(&self) -> Option<Duration> {
        if self.update_rate > 0.0 {
            Some(Duration::from_secs_f64(1.0 / self.update_rate))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window() {
        let settings = WindowSettings::default();
        assert_eq!((settings.width, settings.height), (800, 600));
        assert_eq!(settings.gl_version, (3, 3));
        assert_eq!(settings.title, "My First Glow");
    }

    #[test]
    fn partial_description_uses_defaults() {
        let settings: WindowSettings =
            serde_json::from_str(r#"{ "title": "Rect", "vsync": false }"#).unwrap();
        assert_eq!(settings.title, "Rect");
        assert!(!settings.vsync);
        assert_eq!(settings.width, 800);
        assert!(settings.resizable);
    }

    #[test]
    fn unlimited_rate_has_no_interval() {
        assert_eq!(GameSettings::default().update_interval(), None);
        let negative = GameSettings { update_rate: -5.0 };
        assert_eq!(negative.update_interval(), None);
    }

    #[test]
    fn fixed_rate_interval() {
        let settings = GameSettings { update_rate: 50.0 };
        assert_eq!(settings.update_interval(), Some(Duration::from_millis(20)));
    }
}
