//! Plane geometry for hotspot hit testing.
//!
//! Hotspots are arbitrary polygons in the background image's pixel space.
//! The only geometric query gameplay needs is point-in-polygon membership.

/// A 2D point in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Test whether `point` lies inside the polygon described by `vertices`.
///
/// Ray casting with the even-odd rule: a horizontal ray from the test
/// point toggles membership each time it crosses a polygon edge. The
/// vertex list is treated as implicitly closed (the last vertex connects
/// back to the first), so callers do not need to repeat the first vertex.
///
/// Points exactly on an edge have no defined membership; the caller gets
/// whatever the float comparisons produce. Fewer than 3 vertices encloses
/// nothing.
pub fn point_in_polygon(vertices: &[Point], point: Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (pi, pj) = (vertices[i], vertices[j]);
        let crosses = (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}
