//! Selection operations for DesignerState.

use super::DesignerState;
use crate::model::ShapeId;

impl DesignerState {
    /// Toggles a shape. Unknown ids are ignored.
    pub fn toggle_shape_selection(&mut self, id: ShapeId) -> bool {
        if !self.canvas.shape_store.contains(id) {
            tracing::debug!("Ignoring selection of unknown shape {}", id);
            return false;
        }
        let selected = self.canvas.selection_manager.toggle_shape(id);
        self.canvas.selection_manager.sync_active();
        selected
    }

    /// Toggles a region. Names missing from the region table are ignored.
    pub fn toggle_region_selection(&mut self, name: &str) -> bool {
        if !self.regions.contains(name) {
            tracing::debug!("Ignoring selection of unknown region {}", name);
            return false;
        }
        let selected = self.canvas.selection_manager.toggle_region(name);
        self.canvas.selection_manager.sync_active();
        selected
    }

    pub fn deselect_all(&mut self) {
        self.canvas.selection_manager.clear_all();
    }
}
