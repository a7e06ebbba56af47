//! Game loop controller
//!
//! Translates input events into map queries, tracks progress and drives the
//! win/loss transitions. Output goes to caller-supplied buffers: draw
//! commands for the canvas, game events for the console.

use glam::Vec2;

use crate::config::{ConfigError, GameConfig};
use crate::render::{Color, DrawCmd};
use crate::sim::map::HiddenMap;
use crate::sim::player::{Player, PlayerHistory};

/// One discrete input sample from the frontend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerPress(Vec2),
    PointerMove(Vec2),
    Quit,
}

/// Progress reporting consumed by the console collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new object was found
    Progress { found: usize, total: usize },
    /// All objects found; carries the elapsed seconds for this board
    Won { elapsed_secs: f64 },
    /// The cursor touched a mine
    MineTripped,
    /// Progress reset after a mine hit
    Lost,
}

/// Session state driving one play loop
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    map: HiddenMap,
    history: PlayerHistory,
    found_count: usize,
    start_time: f64,
    running: bool,
}

impl GameSession {
    /// Validate the configuration and build the first board
    pub fn new(config: GameConfig, seed: u64, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let map = HiddenMap::new(&config, seed);
        log::info!(
            "session started: seed {seed}, {} objects to find, {} mines",
            config.object_count,
            config.mine_count
        );
        Ok(Self {
            config,
            map,
            history: PlayerHistory::new(),
            found_count: 0,
            start_time: now,
            running: true,
        })
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn found_count(&self) -> usize {
        self.found_count
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map(&self) -> &HiddenMap {
        &self.map
    }

    /// Feed one input event through the map queries
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        now: f64,
        draw: &mut Vec<DrawCmd>,
        events: &mut Vec<GameEvent>,
    ) {
        match event {
            InputEvent::PointerPress(pos) => self.pointer_press(pos, draw),
            InputEvent::PointerMove(pos) => self.pointer_move(pos, now, draw, events),
            InputEvent::Quit => {
                log::info!("quit requested");
                self.running = false;
            }
        }
    }

    /// A press probes for objects; it paints but never advances the counter
    fn pointer_press(&mut self, pos: Vec2, draw: &mut Vec<DrawCmd>) {
        let player = self.player_at(pos);
        draw.push(player.marker());
        self.map.object_collision(&player, draw);
    }

    fn pointer_move(
        &mut self,
        pos: Vec2,
        now: f64,
        draw: &mut Vec<DrawCmd>,
        events: &mut Vec<GameEvent>,
    ) {
        self.history.push(pos);
        self.map
            .fog_of_war(&mut self.history, self.config.field_of_view, draw);

        // Visited view field: the previous sample and the current one
        if let Some(prev) = self.history.previous() {
            draw.push(view_field_cmd(prev, self.config.field_of_view));
        }
        draw.push(view_field_cmd(pos, self.config.field_of_view));

        let player = self.player_at(pos);
        draw.push(player.marker());

        if self.map.object_collision(&player, draw) {
            self.found_count += 1;
            events.push(GameEvent::Progress {
                found: self.found_count,
                total: self.config.object_count,
            });
            if self.found_count == self.config.object_count {
                events.push(GameEvent::Won {
                    elapsed_secs: now - self.start_time,
                });
                self.map.restart(draw);
                self.history.clear();
                self.found_count = 0;
                self.start_time = now;
            }
        }

        if self.map.mine_collision(&player, draw) {
            events.push(GameEvent::MineTripped);
            events.push(GameEvent::Lost);
            self.found_count = 0;
            self.history.clear();
        }
    }

    fn player_at(&self, pos: Vec2) -> Player {
        Player::new(pos, self.config.player_size, self.config.field_of_view)
    }

    #[cfg(test)]
    pub(crate) fn map_mut(&mut self) -> &mut HiddenMap {
        &mut self.map
    }

    #[cfg(test)]
    pub(crate) fn history_len(&self) -> usize {
        self.history.len()
    }
}

fn view_field_cmd(pos: Vec2, field_of_view: f32) -> DrawCmd {
    DrawCmd::Circle {
        center: pos,
        radius: field_of_view,
        color: Color::BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;
    use crate::sim::map::PlacedEntity;

    fn session(object_count: usize, mine_count: usize) -> GameSession {
        let config = GameConfig {
            object_count,
            mine_count,
            ..GameConfig::default()
        };
        GameSession::new(config, 42, 0.0).expect("valid config")
    }

    fn entity(id: u32, x: f32, y: f32, radius: f32) -> PlacedEntity {
        PlacedEntity {
            id,
            pos: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = GameConfig {
            object_count: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameSession::new(config, 42, 0.0),
            Err(ConfigError::NoObjects)
        ));
    }

    #[test]
    fn press_reveals_but_does_not_count() {
        let mut session = session(1, 0);
        session
            .map_mut()
            .set_board(vec![entity(1, 100.0, 100.0, 10.0)], Vec::new());
        let mut draw = Vec::new();
        let mut events = Vec::new();

        session.handle_event(
            InputEvent::PointerPress(Vec2::new(100.0, 100.0)),
            1.0,
            &mut draw,
            &mut events,
        );

        assert!(events.is_empty());
        assert_eq!(session.found_count(), 0);
        assert_eq!(session.map().found_count(), 1);
        assert!(draw.iter().any(|cmd| matches!(cmd, DrawCmd::Rect { .. })));
    }

    #[test]
    fn finding_the_last_object_wins_and_resets() {
        let mut session = session(1, 0);
        session
            .map_mut()
            .set_board(vec![entity(1, 100.0, 100.0, 10.0)], Vec::new());
        let mut draw = Vec::new();
        let mut events = Vec::new();

        session.handle_event(
            InputEvent::PointerMove(Vec2::new(100.0, 100.0)),
            12.5,
            &mut draw,
            &mut events,
        );

        assert_eq!(
            events,
            vec![
                GameEvent::Progress { found: 1, total: 1 },
                GameEvent::Won { elapsed_secs: 12.5 },
            ]
        );
        // Fresh board, cleared history, counter back to zero
        assert_eq!(session.found_count(), 0);
        assert_eq!(session.history_len(), 0);
        assert_eq!(session.map().found_count(), 0);
        assert_eq!(session.map().objects().len(), 1);
        assert!(session.map().objects().iter().all(|o| o.id != 1));
        assert!(draw.contains(&DrawCmd::Clear));
    }

    #[test]
    fn win_resets_the_elapsed_time_base() {
        let mut session = session(1, 0);
        session
            .map_mut()
            .set_board(vec![entity(1, 100.0, 100.0, 10.0)], Vec::new());
        let mut draw = Vec::new();
        let mut events = Vec::new();

        session.handle_event(
            InputEvent::PointerMove(Vec2::new(100.0, 100.0)),
            10.0,
            &mut draw,
            &mut events,
        );
        assert!(events.contains(&GameEvent::Won { elapsed_secs: 10.0 }));

        // Second board times from the first win, not from startup
        session
            .map_mut()
            .set_board(vec![entity(99, 50.0, 50.0, 10.0)], Vec::new());
        events.clear();
        session.handle_event(
            InputEvent::PointerMove(Vec2::new(50.0, 50.0)),
            17.5,
            &mut draw,
            &mut events,
        );
        assert!(events.contains(&GameEvent::Won { elapsed_secs: 7.5 }));
    }

    #[test]
    fn progress_without_win_keeps_playing() {
        let mut session = session(2, 0);
        session.map_mut().set_board(
            vec![entity(1, 100.0, 100.0, 10.0), entity(2, 300.0, 300.0, 10.0)],
            Vec::new(),
        );
        let mut draw = Vec::new();
        let mut events = Vec::new();

        session.handle_event(
            InputEvent::PointerMove(Vec2::new(100.0, 100.0)),
            1.0,
            &mut draw,
            &mut events,
        );

        assert_eq!(events, vec![GameEvent::Progress { found: 1, total: 2 }]);
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn mine_hit_loses_and_resets() {
        let mut session = session(1, 1);
        session.map_mut().set_board(
            vec![entity(1, 400.0, 400.0, 10.0)],
            vec![entity(2, 200.0, 200.0, 10.0)],
        );
        let mut draw = Vec::new();
        let mut events = Vec::new();

        // Build up some progressless history first
        session.handle_event(
            InputEvent::PointerMove(Vec2::new(10.0, 10.0)),
            1.0,
            &mut draw,
            &mut events,
        );
        session.handle_event(
            InputEvent::PointerMove(Vec2::new(200.0, 200.0)),
            2.0,
            &mut draw,
            &mut events,
        );

        assert_eq!(events, vec![GameEvent::MineTripped, GameEvent::Lost]);
        assert_eq!(session.found_count(), 0);
        assert_eq!(session.history_len(), 0);
        // The map regenerated itself with the same counts
        assert_eq!(session.map().objects().len(), 1);
        assert_eq!(session.map().mines().len(), 1);
        assert!(session.map().mines().iter().all(|m| m.id != 2));
    }

    #[test]
    fn long_move_sequence_evicts_exactly_once() {
        let mut session = session(1, 0);
        // Park the only object far from the sweep so nothing is found
        session
            .map_mut()
            .set_board(vec![entity(1, 10_000.0, 10_000.0, 10.0)], Vec::new());
        let mut events = Vec::new();

        let mut evictions = Vec::new();
        for i in 0..=consts::HISTORY_CAP {
            let mut draw = Vec::new();
            session.handle_event(
                InputEvent::PointerMove(Vec2::new(i as f32, 2.0 * i as f32)),
                1.0,
                &mut draw,
                &mut events,
            );
            evictions.extend(draw.iter().filter_map(|cmd| match cmd {
                DrawCmd::Circle { center, color, .. } if *color == Color::BLACK => Some(*center),
                _ => None,
            }));
        }

        assert!(events.is_empty());
        assert_eq!(evictions, vec![Vec2::new(0.0, 0.0)]);
        assert_eq!(session.history_len(), consts::HISTORY_CAP);
    }

    #[test]
    fn quit_stops_the_session() {
        let mut session = session(1, 0);
        let mut draw = Vec::new();
        let mut events = Vec::new();

        assert!(session.running());
        session.handle_event(InputEvent::Quit, 1.0, &mut draw, &mut events);
        assert!(!session.running());
        assert!(events.is_empty());
    }
}
