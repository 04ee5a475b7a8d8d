//! Game configuration loading and validation.
//!
//! Uses RON (Rusty Object Notation) for human-readable game definitions.
//! A configuration describes every room and its hotspots; it is validated
//! in full before a session is built, so gameplay never sees a dangling
//! destination or a degenerate polygon.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::hotspot::Hotspot;
use super::room::Room;
use super::RoomId;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum number of rooms in a game
    pub const MAX_ROOMS: usize = 256;
    /// Maximum hotspots per room
    pub const MAX_HOTSPOTS_PER_ROOM: usize = 64;
    /// Maximum vertices in a hotspot polygon
    pub const MAX_POLYGON_VERTICES: usize = 128;
    /// Maximum length of a hotspot's display text
    pub const MAX_TEXT_LEN: usize = 4096;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// One hotspot as authored in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotConfig {
    /// Polygon vertices as (x, y) pairs; implicitly closed.
    pub points: Vec<(f32, f32)>,
    /// Text shown when the hotspot is clicked.
    pub text: String,
    /// Room to move to when this hotspot is re-clicked in a completed room.
    #[serde(default)]
    pub destination: Option<RoomId>,
}

/// One room as authored in the configuration. Item order is kept: it
/// decides hit-test precedence for overlapping hotspots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub id: RoomId,
    pub items: Vec<HotspotConfig>,
}

/// A whole game: the room the session starts in is the first one listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub rooms: Vec<RoomConfig>,
}

/// Check if a float is valid (not NaN or Inf)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

/// Validate one hotspot entry
fn validate_hotspot(
    item: &HotspotConfig,
    context: &str,
    room_ids: &HashSet<RoomId>,
) -> Result<(), String> {
    if item.points.len() < 3 {
        return Err(format!(
            "{}: polygon needs at least 3 points, got {}",
            context,
            item.points.len()
        ));
    }
    if item.points.len() > limits::MAX_POLYGON_VERTICES {
        return Err(format!(
            "{}: too many polygon vertices ({} > {})",
            context,
            item.points.len(),
            limits::MAX_POLYGON_VERTICES
        ));
    }
    for (i, &(x, y)) in item.points.iter().enumerate() {
        if !is_valid_float(x) || !is_valid_float(y) {
            return Err(format!("{}: invalid point[{}] = ({}, {})", context, i, x, y));
        }
    }
    if item.text.len() > limits::MAX_TEXT_LEN {
        return Err(format!(
            "{}: text too long ({} > {})",
            context,
            item.text.len(),
            limits::MAX_TEXT_LEN
        ));
    }
    if let Some(dest) = item.destination {
        if !room_ids.contains(&dest) {
            return Err(format!(
                "{}: destination {} does not name a room",
                context, dest
            ));
        }
    }
    Ok(())
}

/// Validate one room entry
fn validate_room(room: &RoomConfig, room_ids: &HashSet<RoomId>) -> Result<(), String> {
    let context = format!("room[{}]", room.id);

    if room.items.is_empty() {
        return Err(format!("{}: has no hotspots", context));
    }
    if room.items.len() > limits::MAX_HOTSPOTS_PER_ROOM {
        return Err(format!(
            "{}: too many hotspots ({} > {})",
            context,
            room.items.len(),
            limits::MAX_HOTSPOTS_PER_ROOM
        ));
    }

    for (i, item) in room.items.iter().enumerate() {
        validate_hotspot(item, &format!("{} item[{}]", context, i), room_ids)?;
    }

    Ok(())
}

/// Validate an entire configuration
pub fn validate_config(config: &GameConfig) -> Result<(), ConfigError> {
    if config.rooms.is_empty() {
        return Err(ConfigError::Validation(
            "configuration has no rooms".to_string(),
        ));
    }
    if config.rooms.len() > limits::MAX_ROOMS {
        return Err(ConfigError::Validation(format!(
            "too many rooms ({} > {})",
            config.rooms.len(),
            limits::MAX_ROOMS
        )));
    }

    let mut room_ids = HashSet::new();
    for room in &config.rooms {
        if !room_ids.insert(room.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate room id {}",
                room.id
            )));
        }
    }

    for room in &config.rooms {
        validate_room(room, &room_ids).map_err(ConfigError::Validation)?;
    }

    Ok(())
}

/// Load a configuration from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load a configuration from a RON string (for embedded games or testing)
pub fn load_config_from_str(s: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = ron::from_str(s)?;
    validate_config(&config)?;
    Ok(config)
}

/// Build runtime rooms from a validated configuration, keeping item order.
pub(crate) fn build_rooms(config: &GameConfig) -> Vec<Room> {
    config
        .rooms
        .iter()
        .map(|room| {
            let hotspots = room
                .items
                .iter()
                .map(|item| {
                    let points = item.points.iter().map(|&p| Point::from(p)).collect();
                    Hotspot::new(points, item.text.clone(), item.destination)
                })
                .collect();
            Room::new(room.id, hotspots)
        })
        .collect()
}
