//! Scripted editing sessions.
//!
//! A session is a JSON array of UI events replayed against a
//! [`DesignerState`], for headless use and regression fixtures:
//!
//! ```json
//! [
//!   { "event": "set-mode", "mode": "draw" },
//!   { "event": "set-tool", "tool": "line" },
//!   { "event": "press", "x": 0, "y": 0 },
//!   { "event": "move", "x": 100, "y": 0 },
//!   { "event": "release" },
//!   { "event": "click", "x": 50, "y": 2 },
//!   { "event": "assign", "label": "Stricture" }
//! ]
//! ```

use std::path::Path;

use anatomark_core::{Point, Result};
use anatomark_designer::{
    DesignerState, DrawingTool, EditorMode, RegionDiagnoses, Shape, ShapeId,
};
use serde::{Deserialize, Serialize};

/// One UI event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ScriptEvent {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
    /// Double click or secondary click with the polygon tool.
    Finish,
    Click { x: f64, y: f64 },
    SelectShape { id: ShapeId },
    SelectRegion { name: String },
    DeselectAll,
    /// Picker choice; `other` is the free text used with "Other".
    Choose {
        choice: String,
        #[serde(default)]
        other: String,
    },
    Assign { label: String },
    Clear,
    Undo,
    Redo,
    Reset,
    SetTool { tool: DrawingTool },
    SetMode { mode: EditorMode },
    ToggleFill,
}

impl ScriptEvent {
    /// Applies the event. Returns the id of a shape committed by it.
    pub fn apply(&self, state: &mut DesignerState) -> Option<ShapeId> {
        match self {
            ScriptEvent::Press { x, y } => return state.pointer_down(Point::new(*x, *y)),
            ScriptEvent::Move { x, y } => {
                state.pointer_move(Point::new(*x, *y));
            }
            ScriptEvent::Release => return state.pointer_up(),
            ScriptEvent::Finish => return state.finish_polygon(),
            ScriptEvent::Click { x, y } => state.click(Point::new(*x, *y)),
            ScriptEvent::SelectShape { id } => {
                state.toggle_shape_selection(*id);
            }
            ScriptEvent::SelectRegion { name } => {
                state.toggle_region_selection(name);
            }
            ScriptEvent::DeselectAll => state.deselect_all(),
            ScriptEvent::Choose { choice, other } => state.choose_diagnosis(choice, other),
            ScriptEvent::Assign { label } => {
                state.assign_diagnosis(label);
            }
            ScriptEvent::Clear => state.clear_selected(),
            ScriptEvent::Undo => {
                state.undo();
            }
            ScriptEvent::Redo => {
                state.redo();
            }
            ScriptEvent::Reset => state.reset(),
            ScriptEvent::SetTool { tool } => state.set_tool(*tool),
            ScriptEvent::SetMode { mode } => state.set_mode(*mode),
            ScriptEvent::ToggleFill => {
                state.toggle_fill_mode();
            }
        }
        None
    }
}

/// An ordered list of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    pub events: Vec<ScriptEvent>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Replays every event in order and returns the ids of committed shapes.
    pub fn replay(&self, state: &mut DesignerState) -> Vec<ShapeId> {
        let committed: Vec<ShapeId> = self
            .events
            .iter()
            .filter_map(|event| event.apply(state))
            .collect();
        tracing::info!(
            "Replayed {} events, {} shapes committed",
            self.events.len(),
            committed.len()
        );
        committed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSummary {
    pub shapes: Vec<ShapeId>,
    pub regions: Vec<String>,
    pub active_shape: Option<ShapeId>,
    pub active_region: Option<String>,
}

/// Serializable view of the editor after a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub mode: EditorMode,
    pub tool: DrawingTool,
    pub fill_mode_auto: bool,
    pub pending_diagnosis: Option<String>,
    pub shapes: Vec<Shape>,
    pub region_diagnoses: RegionDiagnoses,
    pub selection: SelectionSummary,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub status: Option<String>,
}

impl SessionSummary {
    pub fn of(state: &DesignerState) -> Self {
        let selection = state.canvas.selection();
        Self {
            mode: state.mode(),
            tool: state.tool(),
            fill_mode_auto: state.tool_settings.fill_mode_auto,
            pending_diagnosis: state.pending_diagnosis().map(str::to_string),
            shapes: state.canvas.shapes().cloned().collect(),
            region_diagnoses: state.canvas.region_diagnoses().clone(),
            selection: SelectionSummary {
                shapes: selection.selected_shapes().to_vec(),
                regions: selection.selected_regions().to_vec(),
                active_shape: selection.active_shape(),
                active_region: selection.active_region().map(str::to_string),
            },
            undo_depth: state.undo_depth(),
            redo_depth: state.redo_depth(),
            status: state.status().map(str::to_string),
        }
    }
}
