//! Startup configuration
//!
//! Every gameplay knob has a fixed default; a JSON file named by the
//! `FOGSEEK_CONFIG` environment variable can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Rejected or unreadable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("target fps must be at least 1")]
    InvalidFps,
    #[error("object count must be at least 1")]
    NoObjects,
    #[error("player size must be positive, got {0}")]
    InvalidPlayerSize(f32),
    #[error("field of view must be positive, got {0}")]
    InvalidFieldOfView(f32),
    #[error("fog radius must be positive, got {0}")]
    InvalidFogRadius(f32),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Map / window width in pixels
    pub width: f32,
    /// Map / window height in pixels
    pub height: f32,
    /// Frame-rate target for the event loop
    pub target_fps: u32,
    /// Number of discoverable objects per board
    pub object_count: usize,
    /// Number of mines per board
    pub mine_count: usize,
    /// Side length of the cursor square
    pub player_size: f32,
    /// Radius of the visibility circle around the cursor
    pub field_of_view: f32,
    /// Radius of the disc objects stay visible in when fog reclaims a spot
    pub object_reveal_radius: f32,
    /// Radius of the disc mines are re-hidden in when fog reclaims a spot;
    /// falls back to `field_of_view` when unset
    pub mine_mask_radius: Option<f32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: consts::MAP_WIDTH,
            height: consts::MAP_HEIGHT,
            target_fps: consts::TARGET_FPS,
            object_count: consts::OBJECT_COUNT,
            mine_count: consts::MINE_COUNT,
            player_size: consts::PLAYER_SIZE,
            field_of_view: consts::FIELD_OF_VIEW,
            object_reveal_radius: consts::OBJECT_REVEAL_RADIUS,
            mine_mask_radius: None,
        }
    }
}

impl GameConfig {
    /// Load configuration, preferring the file named by `FOGSEEK_CONFIG`
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("FOGSEEK_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Read and parse a JSON config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject malformed configuration before any game state is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.target_fps == 0 {
            return Err(ConfigError::InvalidFps);
        }
        if self.object_count == 0 {
            return Err(ConfigError::NoObjects);
        }
        if !(self.player_size > 0.0) {
            return Err(ConfigError::InvalidPlayerSize(self.player_size));
        }
        if !(self.field_of_view > 0.0) {
            return Err(ConfigError::InvalidFieldOfView(self.field_of_view));
        }
        if !(self.object_reveal_radius > 0.0) {
            return Err(ConfigError::InvalidFogRadius(self.object_reveal_radius));
        }
        if let Some(radius) = self.mine_mask_radius {
            if !(radius > 0.0) {
                return Err(ConfigError::InvalidFogRadius(radius));
            }
        }
        Ok(())
    }

    /// Effective mine-mask radius (falls back to the field of view)
    pub fn effective_mine_mask_radius(&self) -> f32 {
        self.mine_mask_radius.unwrap_or(self.field_of_view)
    }
}
