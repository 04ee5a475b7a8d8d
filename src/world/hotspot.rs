//! Hotspot: a clickable polygonal region of a room.

use super::geometry::{point_in_polygon, Point};
use super::RoomId;

/// A polygonal hotspot with display text, an optional exit destination,
/// and a one-way visited flag.
///
/// Shape, text and destination are fixed at construction; only the
/// visited flag mutates over a session.
#[derive(Debug, Clone)]
pub struct Hotspot {
    points: Vec<Point>,
    text: String,
    destination: Option<RoomId>,
    visited: bool,
}

/// What [`Hotspot::activate`] reports back to the owning room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    /// True when the hotspot had already been activated before this call.
    pub already_visited: bool,
    /// Exit destination, if this hotspot leads somewhere.
    pub destination: Option<RoomId>,
}

impl Hotspot {
    pub fn new(points: Vec<Point>, text: impl Into<String>, destination: Option<RoomId>) -> Self {
        Self {
            points,
            text: text.into(),
            destination,
            visited: false,
        }
    }

    /// Polygon membership test. Pure; visited hotspots stay hit-testable.
    pub fn hit_test(&self, point: Point) -> bool {
        point_in_polygon(&self.points, point)
    }

    /// One-way unvisited -> visited transition.
    ///
    /// The first call flips the flag and reports `already_visited: false`;
    /// every later call is a no-op reporting `already_visited: true`. The
    /// room uses the distinction to count progress exactly once and to
    /// gate exits on re-clicks.
    pub fn activate(&mut self) -> Activation {
        let already_visited = self.visited;
        self.visited = true;
        Activation {
            already_visited,
            destination: self.destination,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Polygon vertices, for outline rendering.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Text shown when the hotspot is clicked.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn destination(&self) -> Option<RoomId> {
        self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hotspot {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        Hotspot::new(points, "a door", Some(2))
    }

    #[test]
    fn test_hit_test_delegates_to_polygon() {
        let hotspot = sample();
        assert!(hotspot.hit_test(Point::new(5.0, 5.0)));
        assert!(!hotspot.hit_test(Point::new(15.0, 5.0)));
    }

    #[test]
    fn test_activate_is_one_way() {
        let mut hotspot = sample();
        assert!(!hotspot.is_visited());

        let first = hotspot.activate();
        assert!(!first.already_visited);
        assert_eq!(first.destination, Some(2));
        assert!(hotspot.is_visited());

        let second = hotspot.activate();
        assert!(second.already_visited);
        assert_eq!(second.destination, Some(2));
        assert!(hotspot.is_visited());
    }

    #[test]
    fn test_visited_hotspot_stays_hit_testable() {
        let mut hotspot = sample();
        hotspot.activate();
        assert!(hotspot.hit_test(Point::new(5.0, 5.0)));
    }
}
