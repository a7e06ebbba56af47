//! Cursor model and bounded position history

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::HISTORY_CAP;
use crate::render::{Color, DrawCmd};

/// The cursor at one input sample: a square of side `size` with a circular
/// field of view. Transient - one value per press or motion event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub field_of_view: f32,
}

impl Player {
    pub fn new(pos: Vec2, size: f32, field_of_view: f32) -> Self {
        Self {
            pos,
            size,
            field_of_view,
        }
    }

    /// The marker painted at the cursor position
    pub fn marker(&self) -> DrawCmd {
        DrawCmd::Rect {
            center: self.pos,
            size: self.size,
            color: Color::RED,
        }
    }
}

/// Sliding window of recent cursor positions
///
/// Bounded at [`HISTORY_CAP`]; the fog of war reclaims evicted positions.
#[derive(Debug, Clone, Default)]
pub struct PlayerHistory {
    positions: VecDeque<Vec2>,
}

impl PlayerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position
    pub fn push(&mut self, pos: Vec2) {
        self.positions.push_back(pos);
    }

    /// Remove and return the oldest position, but only once the window has
    /// outgrown its cap
    pub fn evict_oldest_over_cap(&mut self) -> Option<Vec2> {
        if self.positions.len() > HISTORY_CAP {
            self.positions.pop_front()
        } else {
            None
        }
    }

    /// Latest recorded position
    pub fn latest(&self) -> Option<Vec2> {
        self.positions.back().copied()
    }

    /// Position recorded just before the latest; falls back to the latest
    /// when the window holds a single entry
    pub fn previous(&self) -> Option<Vec2> {
        if self.positions.len() >= 2 {
            self.positions.get(self.positions.len() - 2).copied()
        } else {
            self.latest()
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_stays_bounded_under_eviction() {
        let mut history = PlayerHistory::new();
        for i in 0..150 {
            history.push(Vec2::new(i as f32, 0.0));
            let evicted = history.evict_oldest_over_cap();
            if i < HISTORY_CAP {
                assert!(evicted.is_none());
            } else {
                assert_eq!(evicted, Some(Vec2::new((i - HISTORY_CAP) as f32, 0.0)));
            }
            assert!(history.len() <= HISTORY_CAP);
        }
    }

    #[test]
    fn previous_falls_back_to_latest() {
        let mut history = PlayerHistory::new();
        assert_eq!(history.previous(), None);

        history.push(Vec2::new(1.0, 1.0));
        assert_eq!(history.previous(), Some(Vec2::new(1.0, 1.0)));

        history.push(Vec2::new(2.0, 2.0));
        assert_eq!(history.previous(), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(history.latest(), Some(Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn marker_is_a_red_square_at_the_cursor() {
        let player = Player::new(Vec2::new(40.0, 60.0), 20.0, 30.0);
        assert_eq!(
            player.marker(),
            DrawCmd::Rect {
                center: Vec2::new(40.0, 60.0),
                size: 20.0,
                color: Color::RED,
            }
        );
    }
}
