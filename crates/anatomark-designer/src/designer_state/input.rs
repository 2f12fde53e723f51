//! Pointer gestures and canvas clicks.

use anatomark_core::Point;

use super::DesignerState;
use crate::canvas::{Draft, DrawingTool, EditorMode};
use crate::diagnosis_styles::OTHER_DIAGNOSIS;
use crate::model::{Shape, ShapeId};

impl DesignerState {
    /// Pointer press. Returns the id of a shape committed by the press (polygon snap-close).
    pub fn pointer_down(&mut self, p: Point) -> Option<ShapeId> {
        if self.canvas.mode() != EditorMode::Draw {
            tracing::debug!("Ignoring press outside draw mode");
            return None;
        }
        let tool = self.canvas.tool();
        let draft = self.canvas.capture.press(
            tool,
            p,
            self.tool_settings.color,
            self.tool_settings.thickness,
        );
        if let Some(draft) = draft {
            return Some(self.commit_draft(draft));
        }
        if let Some(count) = self.canvas.capture.polygon_vertex_count() {
            self.set_status(format!("Polygon: {count} points (finish to close)"));
        }
        None
    }

    /// Pointer movement. Returns whether the preview changed.
    pub fn pointer_move(&mut self, p: Point) -> bool {
        if self.canvas.mode() != EditorMode::Draw {
            return false;
        }
        self.canvas.capture.drag(p)
    }

    /// Pointer release. Returns the id of the committed shape, if any.
    pub fn pointer_up(&mut self) -> Option<ShapeId> {
        if self.canvas.mode() != EditorMode::Draw {
            return None;
        }
        let draft = self.canvas.capture.release()?;
        Some(self.commit_draft(draft))
    }

    /// Finishes the polygon tool (double click or secondary click).
    pub fn finish_polygon(&mut self) -> Option<ShapeId> {
        if self.canvas.mode() != EditorMode::Draw || self.canvas.tool() != DrawingTool::Polygon {
            return None;
        }
        let had_vertices = self.canvas.capture.polygon_vertex_count().is_some();
        match self.canvas.capture.finish() {
            Some(draft) => Some(self.commit_draft(draft)),
            None => {
                if had_vertices {
                    self.set_status("Polygon cancelled");
                }
                None
            }
        }
    }

    /// Stores a finished capture, applies auto-fill and records the creation.
    fn commit_draft(&mut self, draft: Draft) -> ShapeId {
        let auto_fills = draft.auto_fills();
        let ends_polygon_tool = draft.from_polygon_tool();
        let message = draft.status_message();

        let mut shape = draft.into_shape();
        if auto_fills {
            self.auto_fill(&mut shape);
        }
        let id = self.canvas.shape_store.add_shape(shape);
        self.record_add(id);

        if ends_polygon_tool {
            self.canvas.set_tool(DrawingTool::Pen);
        }
        self.set_status(message);
        id
    }

    fn auto_fill(&self, shape: &mut Shape) {
        if self.tool_settings.fill_mode_auto {
            if let Some(label) = &self.pending_diagnosis {
                shape.apply_diagnosis(label);
            }
        } else {
            shape.apply_diagnosis(OTHER_DIAGNOSIS);
        }
    }

    /// Canvas click.
    ///
    /// In draw mode toggles the topmost shape under `p`, or clears the shape
    /// selection on empty space. In region mode toggles the first region under
    /// `p`, or clears all selection on empty space.
    pub fn click(&mut self, p: Point) {
        match self.canvas.mode() {
            EditorMode::Draw => match self.canvas.shape_at(&p) {
                Some(id) => {
                    self.canvas.selection_manager.toggle_shape(id);
                }
                None => self.canvas.selection_manager.clear_shapes(),
            },
            EditorMode::Region => match self.regions.find_at(&p).map(|r| r.name.clone()) {
                Some(name) => {
                    self.canvas.selection_manager.toggle_region(&name);
                }
                None => self.canvas.selection_manager.clear_all(),
            },
        }
        self.canvas.selection_manager.sync_active();
    }
}
