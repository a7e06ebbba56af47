//! Draw-command vocabulary
//!
//! The simulation never touches a canvas. Map and session queries append
//! `DrawCmd`s to a caller-supplied buffer, and the windowing frontend paints
//! them onto a persistent surface - a reveal stays painted until a later
//! command re-obscures it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fog / hidden map
    pub const BLACK: Color = Color::from_rgb_u8(0, 0, 0);
    /// Found objects
    pub const WHITE: Color = Color::from_rgb_u8(255, 255, 255);
    /// Objects inside the field of view
    pub const GREEN: Color = Color::from_rgb_u8(0, 255, 0);
    /// Mines inside the field of view
    pub const ORANGE: Color = Color::from_rgb_u8(255, 165, 0);
    /// Cursor marker and tripped mines
    pub const RED: Color = Color::from_rgb_u8(255, 0, 0);
    /// Visited view field
    pub const BLUE: Color = Color::from_rgb_u8(0, 0, 255);
}

/// A single paint operation on the persistent canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Reset the whole canvas to fog
    Clear,
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Filled square of side `size` centered at `center`
    Rect {
        center: Vec2,
        size: f32,
        color: Color,
    },
}
