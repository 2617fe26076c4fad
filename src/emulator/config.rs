// Configuration management
//
// Handles emulator configuration and settings persistence via TOML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

const CONFIG_FILE: &str = "emulator_config.toml";

/// Emulator configuration
///
/// Stores all user-configurable settings for the emulator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmulatorConfig {
    pub video: VideoConfig,
    pub hotkeys: HotkeyConfig,
}

/// Video/window settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoConfig {
    /// Window scale (1-8)
    pub scale: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Target FPS (60 for NTSC)
    pub fps: u32,
}

/// Hotkey configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotkeyConfig {
    pub reset: String,
    pub pause: String,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
                fps: 60,
            },
            hotkeys: HotkeyConfig {
                reset: "F8".to_string(),
                pause: "P".to_string(),
            },
        }
    }
}

impl EmulatorConfig {
    /// Load configuration from `emulator_config.toml`, or fall back to
    /// defaults (and attempt to persist them) if the file is missing or
    /// fails to parse.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("using default emulator config: {}", e);
            let config = Self::default();
            let _ = config.save();
            config
        })
    }

    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
