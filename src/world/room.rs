//! Room model: an ordered set of hotspots plus exploration progress.
//!
//! Hotspot order is meaningful: when polygons overlap, the earliest
//! declared hotspot wins every hit test, visited or not. Authors rely on
//! this to layer small hotspots over large background ones.

use super::geometry::Point;
use super::hotspot::Hotspot;
use super::RoomId;

/// Progress bands for the exploration bar. The names mirror the
/// contextual CSS classes the UI maps them onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Danger,
    Warning,
    Primary,
    Success,
}

impl ProgressTier {
    /// Map an integer percent (0..=100) to its tier.
    ///
    /// The thresholds are 34/67/100, not thirds. Historical behavior,
    /// kept as is: 33% is still "danger" and 67% already "primary".
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            p if p < 34 => Self::Danger,
            p if p < 67 => Self::Warning,
            p if p < 100 => Self::Primary,
            _ => Self::Success,
        }
    }

    /// Contextual class name for the progress bar.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Primary => "primary",
            Self::Success => "success",
        }
    }
}

/// Outcome of a click resolved against one room.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomClickResult {
    /// Click landed outside every hotspot.
    NoHit,
    /// The hotspot had been activated before; the counter is unchanged.
    AlreadyVisited {
        text: String,
        destination: Option<RoomId>,
    },
    /// First activation; progress advanced.
    NewlyVisited {
        text: String,
        destination: Option<RoomId>,
        percent: u32,
        tier: ProgressTier,
    },
}

/// A screen of the game: a background with its clickable hotspots.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    hotspots: Vec<Hotspot>,
    visited_count: usize,
}

impl Room {
    pub fn new(id: RoomId, hotspots: Vec<Hotspot>) -> Self {
        Self {
            id,
            hotspots,
            visited_count: 0,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Hotspots in declaration order, for outline rendering.
    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    /// First hotspot containing `point`, in declaration order.
    pub fn find_hit(&self, point: Point) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.hit_test(point))
    }

    /// Resolve a click: activate the hit hotspot and report the outcome.
    pub fn handle_click(&mut self, point: Point) -> RoomClickResult {
        let Some(index) = self.hotspots.iter().position(|h| h.hit_test(point)) else {
            return RoomClickResult::NoHit;
        };

        let total = self.hotspots.len();
        let hotspot = &mut self.hotspots[index];
        let activation = hotspot.activate();
        let text = hotspot.text().to_string();

        if activation.already_visited {
            RoomClickResult::AlreadyVisited {
                text,
                destination: activation.destination,
            }
        } else {
            self.visited_count += 1;
            let percent = percent_of(self.visited_count, total);
            RoomClickResult::NewlyVisited {
                text,
                destination: activation.destination,
                percent,
                tier: ProgressTier::from_percent(percent),
            }
        }
    }

    /// Have all hotspots in this room been activated?
    pub fn is_complete(&self) -> bool {
        self.visited_count == self.hotspots.len()
    }

    /// Current progress snapshot, for drawing the bar on room entry.
    pub fn progress(&self) -> (u32, ProgressTier) {
        let percent = if self.hotspots.is_empty() {
            100
        } else {
            percent_of(self.visited_count, self.hotspots.len())
        };
        (percent, ProgressTier::from_percent(percent))
    }
}

fn percent_of(visited: usize, total: usize) -> u32 {
    (visited as f32 / total as f32 * 100.0).round() as u32
}
