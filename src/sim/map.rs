//! The hidden map: entity placement, collision queries and the fog of war
//!
//! All queries append their visual side effects to a caller-supplied
//! [`DrawCmd`] buffer; nothing here touches a canvas.

use std::ops::RangeInclusive;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts;
use crate::render::{Color, DrawCmd};
use crate::sim::geometry::{self, Circle};
use crate::sim::player::{Player, PlayerHistory};

/// One hidden entity: a discoverable object or a mine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntity {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

impl PlacedEntity {
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// Field-of-view circle against an entity circle
fn view_contact(player: &Player, entity: &PlacedEntity) -> bool {
    geometry::circles_overlap(
        Circle::new(player.pos, player.field_of_view),
        entity.circle(),
    )
}

/// Cursor square against an entity circle
fn cursor_contact(player: &Player, entity: &PlacedEntity) -> bool {
    geometry::point_in_rect(entity.pos, player.pos, player.size)
        || geometry::dist_to_rect_edge(entity.pos, player.pos, player.size) <= entity.radius
}

fn entity_circle_cmd(entity: &PlacedEntity, color: Color) -> DrawCmd {
    DrawCmd::Circle {
        center: entity.pos,
        radius: entity.radius,
        color,
    }
}

/// The map engine: owns placement, the found set and the fog of war
#[derive(Debug, Clone)]
pub struct HiddenMap {
    width: f32,
    height: f32,
    object_count: usize,
    mine_count: usize,
    object_reveal_radius: f32,
    mine_mask_radius: f32,
    objects: Vec<PlacedEntity>,
    mines: Vec<PlacedEntity>,
    /// Ids of objects already found; grows monotonically until a restart
    found: Vec<u32>,
    next_id: u32,
    rng: Pcg32,
}

impl HiddenMap {
    /// Build a map with freshly placed entities
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut map = Self {
            width: config.width,
            height: config.height,
            object_count: config.object_count,
            mine_count: config.mine_count,
            object_reveal_radius: config.object_reveal_radius,
            mine_mask_radius: config.effective_mine_mask_radius(),
            objects: Vec::new(),
            mines: Vec::new(),
            found: Vec::new(),
            next_id: 1,
            rng: Pcg32::seed_from_u64(seed),
        };
        map.place_entities();
        map
    }

    /// Regenerate both entity sets, clear all progress and wipe the canvas
    pub fn restart(&mut self, draw: &mut Vec<DrawCmd>) {
        self.place_entities();
        self.found.clear();
        draw.push(DrawCmd::Clear);
        log::info!(
            "map regenerated: {} objects, {} mines",
            self.object_count,
            self.mine_count
        );
    }

    fn place_entities(&mut self) {
        self.objects = self.spawn(
            self.object_count,
            consts::OBJECT_MIN_RADIUS..=consts::OBJECT_MAX_RADIUS,
        );
        self.mines = self.spawn(
            self.mine_count,
            consts::MINE_MIN_RADIUS..=consts::MINE_MAX_RADIUS,
        );
    }

    /// Uniform random placement within the map bounds, fresh id per entity
    fn spawn(&mut self, count: usize, radius_range: RangeInclusive<f32>) -> Vec<PlacedEntity> {
        (0..count)
            .map(|_| {
                let id = self.next_id;
                self.next_id += 1;
                PlacedEntity {
                    id,
                    pos: Vec2::new(
                        self.rng.random_range(0.0..=self.width),
                        self.rng.random_range(0.0..=self.height),
                    ),
                    radius: self.rng.random_range(radius_range.clone()),
                }
            })
            .collect()
    }

    /// Cursor query against undiscovered objects
    ///
    /// Objects inside the field of view get a reveal command. The first
    /// not-yet-found object touched by the cursor square is marked found and
    /// ends the scan; an already-found object never signals again.
    pub fn object_collision(&mut self, player: &Player, draw: &mut Vec<DrawCmd>) -> bool {
        let mut newly_found = None;
        for obj in &self.objects {
            if view_contact(player, obj) {
                draw.push(entity_circle_cmd(obj, Color::GREEN));
            }
            if cursor_contact(player, obj) {
                draw.push(entity_circle_cmd(obj, Color::WHITE));
                if !self.found.contains(&obj.id) {
                    newly_found = Some(obj.id);
                    break;
                }
            }
        }
        match newly_found {
            Some(id) => {
                self.found.push(id);
                true
            }
            None => false,
        }
    }

    /// Cursor query against mines
    ///
    /// Mines inside the field of view get a warning reveal even when nothing
    /// is hit. The first mine touched by the cursor square flashes, forces a
    /// full restart and signals the loss.
    pub fn mine_collision(&mut self, player: &Player, draw: &mut Vec<DrawCmd>) -> bool {
        let mut tripped = false;
        for mine in &self.mines {
            if view_contact(player, mine) {
                draw.push(entity_circle_cmd(mine, Color::ORANGE));
            }
            if cursor_contact(player, mine) {
                draw.push(entity_circle_cmd(mine, Color::RED));
                tripped = true;
                break;
            }
        }
        if tripped {
            self.restart(draw);
        }
        tripped
    }

    /// Slide the history window and let the fog reclaim the evicted spot
    ///
    /// Objects near the spot stay revealed; mines near it go dark again,
    /// with objects around each re-hidden mine repainted on top.
    pub fn fog_of_war(
        &self,
        history: &mut PlayerHistory,
        field_of_view: f32,
        draw: &mut Vec<DrawCmd>,
    ) {
        let Some(pos) = history.evict_oldest_over_cap() else {
            return;
        };
        draw.push(DrawCmd::Circle {
            center: pos,
            radius: field_of_view,
            color: Color::BLACK,
        });
        self.show_objects_around(pos, draw);
        self.mask_mines_around(pos, draw);
    }

    fn show_objects_around(&self, pos: Vec2, draw: &mut Vec<DrawCmd>) {
        let reveal = Circle::new(pos, self.object_reveal_radius);
        for obj in &self.objects {
            if geometry::circles_overlap(reveal, obj.circle()) {
                draw.push(entity_circle_cmd(obj, Color::GREEN));
            }
        }
    }

    fn mask_mines_around(&self, pos: Vec2, draw: &mut Vec<DrawCmd>) {
        let mask = Circle::new(pos, self.mine_mask_radius);
        for mine in &self.mines {
            if geometry::circles_overlap(mask, mine.circle()) {
                draw.push(entity_circle_cmd(mine, Color::BLACK));
                self.show_objects_around(mine.pos, draw);
            }
        }
    }

    pub fn objects(&self) -> &[PlacedEntity] {
        &self.objects
    }

    pub fn mines(&self) -> &[PlacedEntity] {
        &self.mines
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn is_found(&self, id: u32) -> bool {
        self.found.contains(&id)
    }

    /// Replace the generated board with a scripted one
    #[cfg(test)]
    pub(crate) fn set_board(&mut self, objects: Vec<PlacedEntity>, mines: Vec<PlacedEntity>) {
        self.object_count = objects.len();
        self.mine_count = mines.len();
        self.objects = objects;
        self.mines = mines;
        self.found.clear();
    }
}
