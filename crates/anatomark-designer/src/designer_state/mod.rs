//! Designer state manager for UI integration.
//! Owns the canvas, the region table and the history stacks, and handles UI callbacks.
//!
//! This module is split into submodules:
//! - `history`: Undo/redo and the history stacks
//! - `input`: Pointer gestures and canvas clicks
//! - `selection`: Shape and region selection toggles
//! - `diagnosis`: Diagnosis assignment and the clear action

mod diagnosis;
mod history;
mod input;
mod selection;

pub use diagnosis::resolve_diagnosis_choice;

use anatomark_core::Rgba;

use crate::canvas::{Canvas, DrawingTool, EditorMode};
use crate::commands::DesignerCommand;
use crate::regions::RegionTable;

/// Drawing settings applied to newly captured shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolSettings {
    pub color: Rgba,
    pub thickness: f64,
    /// When off, every auto-filled commit is tagged "Other".
    pub fill_mode_auto: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Rgba::RED,
            thickness: 4.0,
            fill_mode_auto: true,
        }
    }
}

/// Designer state for UI integration
#[derive(Clone, Debug)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub regions: RegionTable,
    pub tool_settings: ToolSettings,
    pending_diagnosis: Option<String>,
    pub(crate) undo_stack: Vec<DesignerCommand>,
    pub(crate) redo_stack: Vec<DesignerCommand>,
    /// Maximum undo depth; 0 keeps every entry.
    history_limit: usize,
    status: Option<String>,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// Creates a new designer state with no regions.
    pub fn new() -> Self {
        Self::with_regions(RegionTable::empty())
    }

    pub fn with_regions(regions: RegionTable) -> Self {
        Self {
            canvas: Canvas::new(),
            regions,
            tool_settings: ToolSettings::default(),
            pending_diagnosis: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            history_limit: 0,
            status: None,
        }
    }

    pub fn with_tool_settings(mut self, settings: ToolSettings) -> Self {
        self.tool_settings = settings;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn mode(&self) -> EditorMode {
        self.canvas.mode()
    }

    /// Switches between region and draw mode.
    ///
    /// Leaving draw mode abandons any pending capture and returns the tool to the pen.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.canvas.mode() == mode {
            return;
        }
        if mode != EditorMode::Draw {
            if !self.canvas.capture.is_idle() {
                tracing::debug!("Abandoning pending capture on mode switch");
            }
            self.canvas.capture.cancel();
            self.canvas.set_tool(DrawingTool::Pen);
        }
        self.canvas.set_mode(mode);
        tracing::debug!("Editor mode: {}", mode);
    }

    pub fn tool(&self) -> DrawingTool {
        self.canvas.tool()
    }

    /// Selects the drawing tool. A capture started with another tool is abandoned.
    pub fn set_tool(&mut self, tool: DrawingTool) {
        if self.canvas.tool() == tool {
            return;
        }
        self.canvas.capture.cancel();
        self.canvas.set_tool(tool);
    }

    /// Flips between automatic and manual fill mode and returns the new state.
    pub fn toggle_fill_mode(&mut self) -> bool {
        self.tool_settings.fill_mode_auto = !self.tool_settings.fill_mode_auto;
        let label = if self.tool_settings.fill_mode_auto {
            "AUTO"
        } else {
            "MANUAL"
        };
        self.set_status(format!("Fill mode: {label}"));
        self.tool_settings.fill_mode_auto
    }

    /// Clears shapes, pending capture, selection, region diagnoses and history.
    ///
    /// Not undoable. The id counter keeps counting.
    pub fn reset(&mut self) {
        self.canvas.shape_store.clear();
        self.canvas.capture.cancel();
        self.canvas.selection_manager.clear_all();
        self.canvas.region_diagnoses.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.set_status("Reset all performed");
    }

    /// The last status message.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        self.status = Some(message);
    }
}
