//! Canvas holding the editable annotation state.

mod capture;
mod types;

pub use capture::{
    Capture, Draft, PendingCapture, AUTO_CLOSE_DISTANCE, AUTO_CLOSE_MIN_POINTS,
    POLYGON_SNAP_DISTANCE,
};
pub use types::{DrawingTool, EditorMode};

use anatomark_core::Point;

use crate::model::{Shape, ShapeId};
use crate::regions::RegionDiagnoses;
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;

/// Canvas state: shapes, region diagnoses, selection and the active gesture.
///
/// Everything is readable from outside the crate; mutation goes through
/// [`DesignerState`](crate::DesignerState) so every change is recorded in history.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    pub(crate) shape_store: ShapeStore,
    pub(crate) selection_manager: SelectionManager,
    pub(crate) region_diagnoses: RegionDiagnoses,
    pub(crate) capture: Capture,
    mode: EditorMode,
    tool: DrawingTool,
}

impl Canvas {
    /// Creates an empty canvas in region mode with the pen tool.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn tool(&self) -> DrawingTool {
        self.tool
    }

    pub(crate) fn set_tool(&mut self, tool: DrawingTool) {
        self.tool = tool;
    }

    pub fn shape_store(&self) -> &ShapeStore {
        &self.shape_store
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shape_store.iter()
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shape_store.find_by_id(id)
    }

    pub fn shape_at(&self, p: &Point) -> Option<ShapeId> {
        self.shape_store.find_at_point(p)
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection_manager
    }

    pub fn region_diagnoses(&self) -> &RegionDiagnoses {
        &self.region_diagnoses
    }

    pub fn region_diagnosis(&self, name: &str) -> Option<&str> {
        self.region_diagnoses.get(name)
    }

    /// The in-progress gesture, if any.
    pub fn pending_capture(&self) -> Option<&PendingCapture> {
        self.capture.pending()
    }

    /// Drops selected ids whose shapes are gone.
    pub(crate) fn prune_selection(&mut self) {
        let store = &self.shape_store;
        self.selection_manager.retain_shapes(|id| store.contains(id));
    }
}
