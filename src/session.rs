//! Live game session.
//!
//! Owns every room plus the current-room pointer and turns raw pointer
//! events into gameplay outcomes. All mutation funnels through
//! [`Session::pointer_click`]; the model is single-threaded and
//! synchronous, so a multi-threaded host must put the whole session
//! behind one lock.

use log::{debug, info};

use crate::world::{
    build_rooms, validate_config, ConfigError, GameConfig, Hotspot, Point, ProgressTier, Room,
    RoomClickResult, RoomId,
};

/// Outcome of a pointer click, ready for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionClickResult {
    /// Nothing under the pointer; redraw without changes.
    NoHit,
    /// Re-click on a visited hotspot. `moved_to` is set when the click
    /// also changed rooms (exit hotspot in a completed room). The text is
    /// shown either way.
    AlreadyVisited {
        text: String,
        moved_to: Option<RoomId>,
    },
    /// Fresh discovery: show the text and advance the progress bar.
    /// Never changes rooms, even when it completes the room; leaving
    /// takes one more click on the exit hotspot.
    NewlyVisited {
        text: String,
        percent: u32,
        tier: ProgressTier,
    },
}

/// The live game state: all rooms plus the current room pointer.
///
/// The session starts in the first room the configuration lists.
pub struct Session {
    rooms: Vec<Room>,
    current: usize,
}

impl Session {
    /// Build a session from a configuration.
    ///
    /// The configuration is validated in full first; a dangling
    /// destination or a degenerate polygon fails construction and no
    /// partial session is produced.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        validate_config(config)?;
        let rooms = build_rooms(config);
        info!(
            "session ready: {} rooms, starting in room {}",
            rooms.len(),
            rooms[0].id()
        );
        Ok(Self { rooms, current: 0 })
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[self.current]
    }

    pub fn current_room_id(&self) -> RoomId {
        self.rooms[self.current].id()
    }

    pub fn is_room_complete(&self) -> bool {
        self.rooms[self.current].is_complete()
    }

    /// Hover query for highlight rendering. Pure; no state changes.
    pub fn pointer_move(&self, x: f32, y: f32) -> Option<&Hotspot> {
        self.rooms[self.current].find_hit(Point::new(x, y))
    }

    /// Resolve a click in the current room and apply any room transition.
    pub fn pointer_click(&mut self, x: f32, y: f32) -> SessionClickResult {
        let point = Point::new(x, y);
        match self.rooms[self.current].handle_click(point) {
            RoomClickResult::NoHit => SessionClickResult::NoHit,
            RoomClickResult::AlreadyVisited { text, destination } => {
                let moved_to = destination.and_then(|dest| self.try_transition(dest));
                SessionClickResult::AlreadyVisited { text, moved_to }
            }
            RoomClickResult::NewlyVisited {
                text,
                destination: _,
                percent,
                tier,
            } => {
                debug!(
                    "room {}: hotspot discovered, progress {}%",
                    self.current_room_id(),
                    percent
                );
                SessionClickResult::NewlyVisited { text, percent, tier }
            }
        }
    }

    /// Move to `destination` if the current room is fully explored.
    /// Returns the new room id on success.
    fn try_transition(&mut self, destination: RoomId) -> Option<RoomId> {
        if !self.rooms[self.current].is_complete() {
            debug!(
                "room {} not complete, transition to {} withheld",
                self.current_room_id(),
                destination
            );
            return None;
        }
        // Validation guarantees the destination exists.
        let index = self.rooms.iter().position(|r| r.id() == destination)?;
        info!("room {} -> room {}", self.current_room_id(), destination);
        self.current = index;
        Some(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{HotspotConfig, RoomConfig};

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn square_at(x: f32, y: f32) -> Vec<(f32, f32)> {
        vec![(x, y), (x + 10.0, y), (x + 10.0, y + 10.0), (x, y + 10.0)]
    }

    fn hotspot(x: f32, y: f32, text: &str, destination: Option<RoomId>) -> HotspotConfig {
        HotspotConfig {
            points: square_at(x, y),
            text: text.to_string(),
            destination,
        }
    }

    /// Room 1: two plain hotspots and an exit to room 2.
    fn two_room_config() -> GameConfig {
        GameConfig {
            rooms: vec![
                RoomConfig {
                    id: 1,
                    items: vec![
                        hotspot(0.0, 0.0, "a poster", None),
                        hotspot(20.0, 0.0, "a desk", None),
                        hotspot(40.0, 0.0, "a door", Some(2)),
                    ],
                },
                RoomConfig {
                    id: 2,
                    items: vec![hotspot(0.0, 0.0, "the hallway", None)],
                },
            ],
        }
    }

    #[test]
    fn test_starts_in_first_room() {
        let session = Session::new(&two_room_config()).unwrap();
        assert_eq!(session.current_room_id(), 1);
        assert!(!session.is_room_complete());
    }

    #[test]
    fn test_invalid_config_produces_no_session() {
        let mut config = two_room_config();
        config.rooms[0].items[2].destination = Some(99);
        assert!(Session::new(&config).is_err());
    }

    #[test]
    fn test_pointer_move_is_pure() {
        let session = Session::new(&two_room_config()).unwrap();
        assert_eq!(session.pointer_move(5.0, 5.0).map(|h| h.text()), Some("a poster"));
        assert_eq!(session.pointer_move(100.0, 100.0).map(|h| h.text()), None);
        // Hovering never marks anything visited.
        assert!(!session.current_room().hotspots()[0].is_visited());
    }

    #[test]
    fn test_no_hit_click_changes_nothing() {
        let mut session = Session::new(&two_room_config()).unwrap();
        assert_eq!(session.pointer_click(100.0, 100.0), SessionClickResult::NoHit);
        assert_eq!(session.current_room_id(), 1);
        assert_eq!(session.current_room().progress().0, 0);
    }

    #[test]
    fn test_exit_before_completion_shows_text_but_stays() {
        let mut session = Session::new(&two_room_config()).unwrap();

        // First click on the exit: a discovery, never a transition.
        match session.pointer_click(45.0, 5.0) {
            SessionClickResult::NewlyVisited { text, percent, tier } => {
                assert_eq!(text, "a door");
                assert_eq!(percent, 33);
                assert_eq!(tier, ProgressTier::Danger);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(session.current_room_id(), 1);

        // Re-click while the room is still incomplete: withheld.
        match session.pointer_click(45.0, 5.0) {
            SessionClickResult::AlreadyVisited { text, moved_to } => {
                assert_eq!(text, "a door");
                assert_eq!(moved_to, None);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(session.current_room_id(), 1);
    }

    #[test]
    fn test_transition_after_completion() {
        init_logs();
        let mut session = Session::new(&two_room_config()).unwrap();

        session.pointer_click(45.0, 5.0); // the door (exit)
        session.pointer_click(5.0, 5.0); // the poster
        session.pointer_click(25.0, 5.0); // the desk, completes the room
        assert!(session.is_room_complete());
        assert_eq!(session.current_room_id(), 1);

        // One more click on the now-visited exit actually moves.
        match session.pointer_click(45.0, 5.0) {
            SessionClickResult::AlreadyVisited { text, moved_to } => {
                assert_eq!(text, "a door");
                assert_eq!(moved_to, Some(2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(session.current_room_id(), 2);
        assert!(!session.is_room_complete());
    }

    #[test]
    fn test_completing_click_does_not_transition() {
        let mut session = Session::new(&two_room_config()).unwrap();

        session.pointer_click(5.0, 5.0); // the poster
        session.pointer_click(25.0, 5.0); // the desk

        // The click that completes the room lands on the exit hotspot;
        // it reports progress but stays in room 1.
        match session.pointer_click(45.0, 5.0) {
            SessionClickResult::NewlyVisited { percent, tier, .. } => {
                assert_eq!(percent, 100);
                assert_eq!(tier, ProgressTier::Success);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(session.current_room_id(), 1);
    }

    #[test]
    fn test_reclick_of_plain_hotspot_is_idempotent() {
        let mut session = Session::new(&two_room_config()).unwrap();

        session.pointer_click(5.0, 5.0);
        match session.pointer_click(5.0, 5.0) {
            SessionClickResult::AlreadyVisited { text, moved_to } => {
                assert_eq!(text, "a poster");
                assert_eq!(moved_to, None);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(session.current_room().progress().0, 33);
    }
}
