//! World model: rooms, hotspots, and the geometry that binds them.
//!
//! A room is an ordered list of polygonal hotspots over a background
//! image. The order is meaningful (hit-test precedence). Hotspots carry
//! display text, an optional exit destination, and a one-way visited flag.

mod config;
mod geometry;
mod hotspot;
mod room;

pub use config::*;
pub use geometry::*;
pub use hotspot::*;
pub use room::*;

/// Identifier of a room, unique within a session.
pub type RoomId = u32;
