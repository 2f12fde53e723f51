use anatomark_core::{distance_to_segment, hit_tolerance, Point, Rgba};
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, ShapeId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub id: ShapeId,
    pub a: Point,
    pub b: Point,
    pub color: Rgba,
    pub thickness: f64,
    pub diagnosis: Option<String>,
}

impl LineSegment {
    pub fn new(a: Point, b: Point, color: Rgba, thickness: f64) -> Self {
        Self {
            id: 0,
            a,
            b,
            color,
            thickness,
            diagnosis: None,
        }
    }

    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }
}

impl AnnotationShape for LineSegment {
    fn contains_point(&self, p: &Point) -> bool {
        distance_to_segment(p, &self.a, &self.b) <= hit_tolerance(self.thickness)
    }

    fn outline(&self) -> Vec<Point> {
        vec![self.a, self.b]
    }

    fn label_anchor(&self) -> Point {
        self.a.midpoint(&self.b)
    }
}
