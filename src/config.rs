/// Game configuration
///
/// Settings are read from a JSON file. Every field has a default, so a file
/// only needs the values it changes:
///
/// ```json
/// { "window": { "width": 1920, "height": 1080 } }
/// ```
use crate::error::InitError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_DIR_NAME: &str = "block-demo";
const CONFIG_FILE_NAME: &str = "config.json";

/// Window and playfield size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Playfield width in logical pixels
    pub width: u32,
    /// Playfield height in logical pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Block Demo".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Loop pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Target frame period (16 ms is roughly 60 FPS)
    pub frame_time_ms: u64,
    /// Pause after leaving the game-over screen
    pub input_hold_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            frame_time_ms: 16,
            input_hold_ms: 500,
        }
    }
}

impl TimingConfig {
    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_time_ms)
    }

    pub fn input_hold(&self) -> Duration {
        Duration::from_millis(self.input_hold_ms)
    }
}

/// Artwork locations, relative to the working directory unless absolute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub menu: PathBuf,
    pub digits: PathBuf,
    pub game_over: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            menu: PathBuf::from("title.bmp"),
            digits: PathBuf::from("numbermap.bmp"),
            game_over: PathBuf::from("gameover.bmp"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    pub assets: AssetPaths,
    /// Rows of the game-over artwork shown on the game-over screen
    pub game_over_height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            timing: TimingConfig::default(),
            assets: AssetPaths::default(),
            game_over_height: 75,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// `<user config dir>/block-demo/config.json`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Picks the configuration for this run.
    ///
    /// An explicit path must load. Without one, the per-user file is used
    /// when it exists, and the built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, InitError> {
        if let Some(path) = explicit {
            info!("Loading config from {}", path.display());
            return Self::load_from_file(path).map_err(|e| InitError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::load_from_file(&path).map_err(|e| InitError::Config {
                    path,
                    reason: e.to_string(),
                })
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(GameConfig::default())
            }
        }
    }
}
