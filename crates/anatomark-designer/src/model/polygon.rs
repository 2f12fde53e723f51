use anatomark_core::{centroid, point_in_polygon, polygon_area, Point, Rgba};
use serde::{Deserialize, Serialize};

use super::{AnnotationShape, ShapeId};

/// A closed polygon. Hit-testing is by containment only, the edge has no tolerance band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: ShapeId,
    pub points: Vec<Point>,
    pub color: Rgba,
    pub thickness: f64,
    pub diagnosis: Option<String>,
    pub filled: bool,
}

impl Polygon {
    pub fn new(points: Vec<Point>, color: Rgba, thickness: f64) -> Self {
        Self {
            id: 0,
            points,
            color,
            thickness,
            diagnosis: None,
            filled: false,
        }
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }
}

impl AnnotationShape for Polygon {
    fn contains_point(&self, p: &Point) -> bool {
        point_in_polygon(p, &self.points)
    }

    fn outline(&self) -> Vec<Point> {
        self.points.clone()
    }

    fn label_anchor(&self) -> Point {
        centroid(&self.points)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
