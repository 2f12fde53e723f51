use anatomark_core::{centroid, distance_to_segment, hit_tolerance, Point, Rgba};
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, ShapeId};

/// Number of trailing samples averaged by [`smooth_path`].
pub const SMOOTHING_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    #[default]
    Pen,
    Smoothed,
}

/// An open freehand stroke. Never filled; a diagnosis only adds a glow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreehandStroke {
    pub id: ShapeId,
    pub kind: StrokeKind,
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothed_points: Option<Vec<Point>>,
    pub color: Rgba,
    pub thickness: f64,
    pub diagnosis: Option<String>,
    pub filled: bool,
}

impl FreehandStroke {
    /// Builds an unsaved stroke (id 0). Smoothed strokes get their derived path immediately.
    pub fn new(kind: StrokeKind, points: Vec<Point>, color: Rgba, thickness: f64) -> Self {
        let smoothed_points = match kind {
            StrokeKind::Smoothed => Some(smooth_path(&points)),
            StrokeKind::Pen => None,
        };
        Self {
            id: 0,
            kind,
            points,
            smoothed_points,
            color,
            thickness,
            diagnosis: None,
            filled: false,
        }
    }

    /// The path used for drawing and hit-testing: smoothed when available.
    pub fn path(&self) -> &[Point] {
        self.smoothed_points.as_deref().unwrap_or(&self.points)
    }

    /// Appends `p` unless it repeats the last sample. Returns whether it was added.
    pub fn push_point(&mut self, p: Point) -> bool {
        if self.points.last() == Some(&p) {
            return false;
        }
        self.points.push(p);
        if self.kind == StrokeKind::Smoothed {
            self.smoothed_points = Some(smooth_path(&self.points));
        }
        true
    }
}

impl AnnotationShape for FreehandStroke {
    fn contains_point(&self, p: &Point) -> bool {
        let tolerance = hit_tolerance(self.thickness);
        self.path()
            .windows(2)
            .any(|seg| distance_to_segment(p, &seg[0], &seg[1]) <= tolerance)
    }

    fn outline(&self) -> Vec<Point> {
        self.path().to_vec()
    }

    fn label_anchor(&self) -> Point {
        centroid(&self.points)
    }
}

/// Trailing moving average: sample `i` averages samples `i - w ..= i`
/// (clamped at the start) where `w = min(SMOOTHING_WINDOW, len)`.
pub fn smooth_path(points: &[Point]) -> Vec<Point> {
    let window = SMOOTHING_WINDOW.min(points.len());
    (0..points.len())
        .map(|i| {
            let start = i.saturating_sub(window);
            centroid(&points[start..=i])
        })
        .collect()
}
