//! Fogseek - a fog-of-war hidden-object search minigame
//!
//! Core modules:
//! - `sim`: Deterministic simulation (placement, collisions, fog of war)
//! - `render`: Draw-command vocabulary consumed by the windowing frontend
//! - `config`: Startup configuration and validation

pub mod config;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Window / map dimensions in pixels
    pub const MAP_WIDTH: f32 = 480.0;
    pub const MAP_HEIGHT: f32 = 480.0;

    /// Frame-rate target for the event loop
    pub const TARGET_FPS: u32 = 300;

    /// Entity counts per board
    pub const OBJECT_COUNT: usize = 15;
    pub const MINE_COUNT: usize = 10;

    /// Player defaults - the cursor square and its visibility circle
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const FIELD_OF_VIEW: f32 = 30.0;

    /// Placement radius ranges (uniform random, inclusive)
    pub const OBJECT_MIN_RADIUS: f32 = 5.0;
    pub const OBJECT_MAX_RADIUS: f32 = 20.0;
    pub const MINE_MIN_RADIUS: f32 = 5.0;
    pub const MINE_MAX_RADIUS: f32 = 15.0;

    /// Radius of the disc objects stay visible in when fog reclaims a spot
    pub const OBJECT_REVEAL_RADIUS: f32 = 30.0;

    /// Cursor positions remembered before the fog starts reclaiming them
    pub const HISTORY_CAP: usize = 100;
}
