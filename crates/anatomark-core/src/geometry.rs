//! Pixel-space geometry used by hit-testing and label placement.
//!
//! These are tolerance heuristics on canvas pixels, not exact computational
//! geometry. All functions are pure.

use serde::{Deserialize, Serialize};

/// Smallest hit distance, in pixels, for strokes and lines.
pub const MIN_HIT_TOLERANCE: f64 = 8.0;

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns a copy shifted by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Hit distance for a stroke or line of the given thickness.
pub fn hit_tolerance(thickness: f64) -> f64 {
    MIN_HIT_TOLERANCE.max(thickness + 4.0)
}

/// Distance from `p` to the segment `a`-`b`.
///
/// The projection parameter is clamped to the segment, so points beyond an
/// end measure to that endpoint. A zero-length segment measures to `a`.
pub fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let cx = b.x - a.x;
    let cy = b.y - a.y;
    let len_sq = cx * cx + cy * cy;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }

    let t = ((p.x - a.x) * cx + (p.y - a.y) * cy) / len_sq;
    let nearest = if t < 0.0 {
        *a
    } else if t > 1.0 {
        *b
    } else {
        Point::new(a.x + t * cx, a.y + t * cy)
    };
    p.distance_to(&nearest)
}

/// Ray-casting parity test. Polygons with fewer than 3 vertices contain nothing.
pub fn point_in_polygon(p: &Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (&polygon[i], &polygon[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Arithmetic mean of the vertices; the origin for empty input.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Shoelace area, always non-negative.
pub fn polygon_area(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        twice_area += (polygon[j].x + polygon[i].x) * (polygon[j].y - polygon[i].y);
        j = i;
    }
    (twice_area / 2.0).abs()
}
