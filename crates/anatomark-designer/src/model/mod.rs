use anatomark_core::{Point, Rgba};
use serde::{Deserialize, Serialize};

mod line;
mod polygon;
mod stroke;

pub use line::LineSegment;
pub use polygon::Polygon;
pub use stroke::{smooth_path, FreehandStroke, StrokeKind, SMOOTHING_WINDOW};

/// Identifier of a user-drawn shape. Allocated by the shape store, never reused.
pub type ShapeId = u64;

/// Behaviour shared by every annotation variant.
pub trait AnnotationShape {
    /// Pixel-tolerance hit test.
    fn contains_point(&self, p: &Point) -> bool;

    /// The vertices a renderer should stroke, in order.
    fn outline(&self) -> Vec<Point>;

    /// Where a diagnosis label is anchored.
    fn label_anchor(&self) -> Point;

    /// Whether the outline is implicitly closed.
    fn is_closed(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Stroke,
    Smoothed,
    Line,
    Polygon,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stroke => write!(f, "stroke"),
            Self::Smoothed => write!(f, "smoothed stroke"),
            Self::Line => write!(f, "line"),
            Self::Polygon => write!(f, "polygon"),
        }
    }
}

/// A user-drawn annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Stroke(FreehandStroke),
    Line(LineSegment),
    Polygon(Polygon),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Stroke(s) => s.id,
            Shape::Line(l) => l.id,
            Shape::Polygon(p) => p.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: ShapeId) {
        match self {
            Shape::Stroke(s) => s.id = id,
            Shape::Line(l) => l.id = id,
            Shape::Polygon(p) => p.id = id,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Stroke(s) => match s.kind {
                StrokeKind::Pen => ShapeKind::Stroke,
                StrokeKind::Smoothed => ShapeKind::Smoothed,
            },
            Shape::Line(_) => ShapeKind::Line,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Shape::Polygon(_))
    }

    pub fn diagnosis(&self) -> Option<&str> {
        match self {
            Shape::Stroke(s) => s.diagnosis.as_deref(),
            Shape::Line(l) => l.diagnosis.as_deref(),
            Shape::Polygon(p) => p.diagnosis.as_deref(),
        }
    }

    /// Lines carry no fill flag and always report `false`.
    pub fn filled(&self) -> bool {
        match self {
            Shape::Stroke(s) => s.filled,
            Shape::Line(_) => false,
            Shape::Polygon(p) => p.filled,
        }
    }

    /// Writes the diagnosis fields verbatim. `filled` is ignored for lines.
    pub(crate) fn set_diagnosis_state(&mut self, diagnosis: Option<String>, filled: bool) {
        match self {
            Shape::Stroke(s) => {
                s.diagnosis = diagnosis;
                s.filled = filled;
            }
            Shape::Line(l) => l.diagnosis = diagnosis,
            Shape::Polygon(p) => {
                p.diagnosis = diagnosis;
                p.filled = filled;
            }
        }
    }

    /// Tags the shape with `label`; only polygons become filled.
    pub(crate) fn apply_diagnosis(&mut self, label: &str) {
        let filled = self.is_polygon();
        self.set_diagnosis_state(Some(label.to_string()), filled);
    }

    pub fn color(&self) -> Rgba {
        match self {
            Shape::Stroke(s) => s.color,
            Shape::Line(l) => l.color,
            Shape::Polygon(p) => p.color,
        }
    }

    pub fn thickness(&self) -> f64 {
        match self {
            Shape::Stroke(s) => s.thickness,
            Shape::Line(l) => l.thickness,
            Shape::Polygon(p) => p.thickness,
        }
    }
}

impl AnnotationShape for Shape {
    fn contains_point(&self, p: &Point) -> bool {
        match self {
            Shape::Stroke(s) => s.contains_point(p),
            Shape::Line(l) => l.contains_point(p),
            Shape::Polygon(poly) => poly.contains_point(p),
        }
    }

    fn outline(&self) -> Vec<Point> {
        match self {
            Shape::Stroke(s) => s.outline(),
            Shape::Line(l) => l.outline(),
            Shape::Polygon(p) => p.outline(),
        }
    }

    fn label_anchor(&self) -> Point {
        match self {
            Shape::Stroke(s) => s.label_anchor(),
            Shape::Line(l) => l.label_anchor(),
            Shape::Polygon(p) => p.label_anchor(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Shape::Stroke(s) => s.is_closed(),
            Shape::Line(l) => l.is_closed(),
            Shape::Polygon(p) => p.is_closed(),
        }
    }
}

impl From<FreehandStroke> for Shape {
    fn from(s: FreehandStroke) -> Self {
        Shape::Stroke(s)
    }
}

impl From<LineSegment> for Shape {
    fn from(l: LineSegment) -> Self {
        Shape::Line(l)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
