//! Draw-ordered storage for user shapes.

use anatomark_core::Point;

use crate::model::{AnnotationShape, Shape, ShapeId};

/// Owns every live shape in draw order (index 0 is drawn first) and the id counter.
///
/// The counter only moves forward: removing a shape, undoing its creation or
/// clearing the store never hands its id out again.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The id the next call to [`generate_id`](Self::generate_id) will return.
    pub fn peek_next_id(&self) -> ShapeId {
        self.next_id
    }

    /// Assigns a fresh id to `shape`, appends it on top and returns the id.
    pub fn add_shape(&mut self, mut shape: Shape) -> ShapeId {
        let id = self.generate_id();
        shape.set_id(id);
        self.shapes.push(shape);
        id
    }

    /// Re-appends a shape that already carries an id (redo of a creation).
    pub(crate) fn push_existing(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Inserts a shape at `index`, clamped to the current length.
    pub(crate) fn insert_at(&mut self, index: usize, shape: Shape) {
        let index = index.min(self.shapes.len());
        self.shapes.insert(index, shape);
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.remove_with_index(id).map(|(_, shape)| shape)
    }

    /// Removes the shape and reports the draw-order slot it occupied.
    pub fn remove_with_index(&mut self, id: ShapeId) -> Option<(usize, Shape)> {
        let index = self.index_of(id)?;
        Some((index, self.shapes.remove(index)))
    }

    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    pub fn find_by_id(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    /// Topmost shape under `p`: the last one in draw order whose hit test passes.
    pub fn find_at_point(&self, p: &Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.contains_point(p))
            .map(Shape::id)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drops every shape. The id counter is left alone.
    pub(crate) fn clear(&mut self) {
        self.shapes.clear();
    }
}
