//! Gesture capture for the drawing tools.
//!
//! A capture is the in-progress shape between the first press and the
//! commit. Finishing a capture yields a [`Draft`], which the designer state
//! turns into a stored shape plus a history entry.

use anatomark_core::{Point, Rgba};

use super::DrawingTool;
use crate::model::{FreehandStroke, LineSegment, Polygon, Shape, StrokeKind};

/// A pen stroke whose ends are closer than this becomes a polygon.
pub const AUTO_CLOSE_DISTANCE: f64 = 12.0;
/// Auto-close also requires strictly more samples than this.
pub const AUTO_CLOSE_MIN_POINTS: usize = 6;
/// A polygon-tool press this close to the first vertex closes the polygon.
pub const POLYGON_SNAP_DISTANCE: f64 = 15.0;

/// The shape being captured, exposed read-only for preview rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingCapture {
    Freehand(FreehandStroke),
    Line(LineSegment),
    Polygon {
        points: Vec<Point>,
        color: Rgba,
        thickness: f64,
    },
}

/// A finished capture that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    /// Freehand stroke left open.
    OpenStroke(FreehandStroke),
    /// Pen stroke whose ends met, converted to a polygon.
    ClosedStroke(Polygon),
    /// Line-tool drag.
    DraggedLine(LineSegment),
    /// Polygon tool finished with exactly two vertices.
    TwoPointLine(LineSegment),
    /// Polygon tool finished with three or more vertices.
    Polygon(Polygon),
}

impl Draft {
    /// Whether the auto-fill rules apply on commit.
    pub fn auto_fills(&self) -> bool {
        matches!(
            self,
            Draft::ClosedStroke(_) | Draft::TwoPointLine(_) | Draft::Polygon(_)
        )
    }

    /// Whether committing this draft ends a polygon-tool session.
    pub fn from_polygon_tool(&self) -> bool {
        matches!(self, Draft::TwoPointLine(_) | Draft::Polygon(_))
    }

    pub fn status_message(&self) -> &'static str {
        match self {
            Draft::OpenStroke(_) => "Freehand stroke created",
            Draft::ClosedStroke(_) => "Closed freehand stroke converted to polygon",
            Draft::DraggedLine(_) | Draft::TwoPointLine(_) => "Line created",
            Draft::Polygon(_) => "Polygon created",
        }
    }

    pub fn into_shape(self) -> Shape {
        match self {
            Draft::OpenStroke(s) => s.into(),
            Draft::ClosedStroke(p) | Draft::Polygon(p) => p.into(),
            Draft::DraggedLine(l) | Draft::TwoPointLine(l) => l.into(),
        }
    }
}

/// Idle when `pending` is `None`, capturing otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Capture {
    pending: Option<PendingCapture>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingCapture> {
        self.pending.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Number of vertices placed by the polygon tool so far.
    pub fn polygon_vertex_count(&self) -> Option<usize> {
        match &self.pending {
            Some(PendingCapture::Polygon { points, .. }) => Some(points.len()),
            _ => None,
        }
    }

    /// Handles a press. Only a polygon-tool press near the first vertex finishes a draft.
    pub fn press(&mut self, tool: DrawingTool, p: Point, color: Rgba, thickness: f64) -> Option<Draft> {
        match tool {
            DrawingTool::Pen | DrawingTool::Smoothed => {
                let kind = if tool == DrawingTool::Smoothed {
                    StrokeKind::Smoothed
                } else {
                    StrokeKind::Pen
                };
                self.pending = Some(PendingCapture::Freehand(FreehandStroke::new(
                    kind,
                    vec![p],
                    color,
                    thickness,
                )));
                None
            }
            DrawingTool::Line => {
                self.pending = Some(PendingCapture::Line(LineSegment::new(p, p, color, thickness)));
                None
            }
            DrawingTool::Polygon => {
                if let Some(PendingCapture::Polygon { points, .. }) = &mut self.pending {
                    let closes = points.len() > 2
                        && points
                            .first()
                            .is_some_and(|first| first.distance_to(&p) < POLYGON_SNAP_DISTANCE);
                    if closes {
                        return self.finish();
                    }
                    points.push(p);
                    return None;
                }
                self.pending = Some(PendingCapture::Polygon {
                    points: vec![p],
                    color,
                    thickness,
                });
                None
            }
        }
    }

    /// Handles pointer movement while capturing. Returns whether the preview changed.
    pub fn drag(&mut self, p: Point) -> bool {
        match &mut self.pending {
            Some(PendingCapture::Freehand(stroke)) => stroke.push_point(p),
            Some(PendingCapture::Line(line)) => {
                line.b = p;
                true
            }
            Some(PendingCapture::Polygon { .. }) | None => false,
        }
    }

    /// Handles a release. Polygon captures survive releases.
    pub fn release(&mut self) -> Option<Draft> {
        match self.pending.take() {
            Some(PendingCapture::Freehand(stroke)) => {
                if stroke.points.len() < 2 {
                    tracing::debug!("Discarding freehand stroke with a single point");
                    return None;
                }
                Some(finalize_freehand(stroke))
            }
            Some(PendingCapture::Line(line)) => Some(Draft::DraggedLine(line)),
            polygon @ Some(PendingCapture::Polygon { .. }) => {
                self.pending = polygon;
                None
            }
            None => None,
        }
    }

    /// Finishes the polygon tool. Fewer than two vertices cancels.
    pub fn finish(&mut self) -> Option<Draft> {
        let Some(PendingCapture::Polygon {
            mut points,
            color,
            thickness,
        }) = self.pending.take()
        else {
            return None;
        };

        match points.len() {
            0 | 1 => None,
            2 => {
                let b = points.pop()?;
                let a = points.pop()?;
                Some(Draft::TwoPointLine(LineSegment::new(a, b, color, thickness)))
            }
            _ => Some(Draft::Polygon(Polygon::new(points, color, thickness))),
        }
    }

    /// Abandons the capture without producing anything.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

fn finalize_freehand(stroke: FreehandStroke) -> Draft {
    let closes = stroke.kind == StrokeKind::Pen
        && stroke.points.len() > AUTO_CLOSE_MIN_POINTS
        && match (stroke.points.first(), stroke.points.last()) {
            (Some(first), Some(last)) => first.distance_to(last) < AUTO_CLOSE_DISTANCE,
            _ => false,
        };

    if closes {
        Draft::ClosedStroke(Polygon::new(stroke.points, stroke.color, stroke.thickness))
    } else {
        Draft::OpenStroke(stroke)
    }
}
