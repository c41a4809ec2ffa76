//! Game settings and preferences
//!
//! Read from a JSON file at start-up. Missing fields take their defaults and
//! a missing or malformed file falls back to [`Settings::default`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::renderer::Palette;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "PARALLAX_SHOOTER_SETTINGS";

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 240;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start with hitboxes and enemy lives drawn
    pub debug_overlay: bool,
    /// Fixed RNG seed; time-derived when absent
    pub seed: Option<u64>,
    /// Frame rate the host paces itself to
    pub target_fps: u32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Monochrome terminal palette
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_overlay: true,
            seed: None,
            target_fps: 60,
            show_fps: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.target_fps = settings.target_fps.clamp(MIN_FPS, MAX_FPS);
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Settings file named by `arg`, else by the environment, if any
    pub fn source(arg: Option<String>) -> Option<PathBuf> {
        arg.or_else(|| std::env::var(SETTINGS_ENV).ok())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// Load from the first command-line argument or `PARALLAX_SHOOTER_SETTINGS`
    pub fn load() -> Self {
        match Self::source(std::env::args().nth(1)) {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Wall-clock budget of one frame
    pub fn frame_duration(&self) -> Duration {
        let fps = self.target_fps.clamp(MIN_FPS, MAX_FPS);
        Duration::from_secs_f64(1.0 / fps as f64)
    }

    /// Terminal palette for these settings
    pub fn palette(&self) -> Palette {
        if self.high_contrast {
            Palette::Mono
        } else {
            Palette::Full
        }
    }
}
