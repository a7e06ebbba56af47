//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (placement order)
//! - No rendering or platform dependencies; drawing is expressed as commands

pub mod geometry;
pub mod map;
pub mod player;
pub mod session;

pub use geometry::{Circle, circles_overlap, dist_to_rect_edge, point_in_rect};
pub use map::{HiddenMap, PlacedEntity};
pub use player::{Player, PlayerHistory};
pub use session::{GameEvent, GameSession, InputEvent};
