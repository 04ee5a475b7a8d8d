//! ROOMCLICK: core logic for a point-and-click room exploration game.
//!
//! A game is a sequence of rooms, each a background image overlaid with
//! invisible polygonal hotspots. Clicking a hotspot reveals its text and
//! marks it visited; once every hotspot in a room is visited, re-clicking
//! a visited exit hotspot moves the session to its destination room. A
//! progress tier (danger/warning/primary/success) tracks how much of the
//! current room has been explored.
//!
//! This crate owns the model and the interaction rules only. Drawing,
//! asset loading and event plumbing belong to the embedding UI, which
//! feeds canvas-local pointer coordinates in and renders the results it
//! gets back:
//!
//! ```
//! use roomclick::{Session, SessionClickResult, load_config_from_str};
//!
//! let config = load_config_from_str(r#"(
//!     rooms: [
//!         (id: 1, items: [
//!             (points: [(25, 100), (50, 50), (75, 100)], text: "I am a triangle"),
//!         ]),
//!     ],
//! )"#).unwrap();
//! let mut session = Session::new(&config).unwrap();
//!
//! match session.pointer_click(50.0, 80.0) {
//!     SessionClickResult::NewlyVisited { text, percent, .. } => {
//!         assert_eq!(text, "I am a triangle");
//!         assert_eq!(percent, 100);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod session;
mod world;

pub use session::{Session, SessionClickResult};
pub use world::{
    limits, load_config, load_config_from_str, point_in_polygon, validate_config, Activation,
    ConfigError, GameConfig, Hotspot, HotspotConfig, Point, ProgressTier, Room, RoomClickResult,
    RoomConfig, RoomId,
};
