//! History entries and their inverse operations.

use serde::Serialize;

use crate::canvas::Canvas;
use crate::model::{Shape, ShapeId};

/// Diagnosis state of one shape at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeDiagnosis {
    pub id: ShapeId,
    pub diagnosis: Option<String>,
    pub filled: bool,
}

/// Diagnosis state of one region at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionDiagnosis {
    pub name: String,
    pub diagnosis: Option<String>,
}

/// Diagnosis state of a set of shapes and regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiagnosisSnapshot {
    pub shapes: Vec<ShapeDiagnosis>,
    pub regions: Vec<RegionDiagnosis>,
}

impl DiagnosisSnapshot {
    /// Records the current diagnoses of the selected shapes (in draw order) and
    /// the selected regions (in selection order).
    pub fn of_selection(canvas: &Canvas) -> Self {
        let selection = canvas.selection();
        let shapes = canvas
            .shapes()
            .filter(|s| selection.is_shape_selected(s.id()))
            .map(|s| ShapeDiagnosis {
                id: s.id(),
                diagnosis: s.diagnosis().map(str::to_string),
                filled: s.filled(),
            })
            .collect();
        let regions = selection
            .selected_regions()
            .iter()
            .map(|name| RegionDiagnosis {
                name: name.clone(),
                diagnosis: canvas.region_diagnosis(name).map(str::to_string),
            })
            .collect();
        Self { shapes, regions }
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.regions.is_empty()
    }

    /// Writes the recorded values back. Shapes that no longer exist are skipped.
    pub(crate) fn restore(&self, canvas: &mut Canvas) {
        for entry in &self.shapes {
            match canvas.shape_store.find_by_id_mut(entry.id) {
                Some(shape) => shape.set_diagnosis_state(entry.diagnosis.clone(), entry.filled),
                None => tracing::debug!("Shape {} missing while restoring diagnosis", entry.id),
            }
        }
        for entry in &self.regions {
            canvas
                .region_diagnoses
                .set(&entry.name, entry.diagnosis.clone());
        }
    }
}

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum DesignerCommand {
    AddShape(AddShape),
    DeleteShape(DeleteShape),
    DiagnosisChange(DiagnosisChange),
}

#[derive(Debug, Clone)]
pub struct AddShape {
    pub id: ShapeId,
    pub object: Option<Shape>, // None while on the canvas, Some when undone
}

impl AddShape {
    pub fn new(id: ShapeId) -> Self {
        Self { id, object: None }
    }
}

#[derive(Debug, Clone)]
pub struct DeleteShape {
    pub id: ShapeId,
    pub index: usize,
    pub object: Option<Shape>, // Some while removed, None when undone
}

impl DeleteShape {
    pub fn new(id: ShapeId) -> Self {
        Self {
            id,
            index: 0,
            object: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosisChange {
    pub before: DiagnosisSnapshot,
    pub after: DiagnosisSnapshot,
}

impl DesignerCommand {
    /// Performs (or re-performs) the change.
    pub fn apply(&mut self, canvas: &mut Canvas) {
        match self {
            DesignerCommand::AddShape(cmd) => {
                if let Some(shape) = cmd.object.take() {
                    canvas.shape_store.push_existing(shape);
                }
            }
            DesignerCommand::DeleteShape(cmd) => {
                if let Some((index, shape)) = canvas.shape_store.remove_with_index(cmd.id) {
                    cmd.index = index;
                    cmd.object = Some(shape);
                }
            }
            DesignerCommand::DiagnosisChange(cmd) => cmd.after.restore(canvas),
        }
    }

    /// Reverts the change.
    pub fn undo(&mut self, canvas: &mut Canvas) {
        match self {
            DesignerCommand::AddShape(cmd) => {
                if let Some(shape) = canvas.shape_store.remove_shape(cmd.id) {
                    cmd.object = Some(shape);
                }
            }
            DesignerCommand::DeleteShape(cmd) => {
                if let Some(shape) = cmd.object.take() {
                    canvas.shape_store.insert_at(cmd.index, shape);
                }
            }
            DesignerCommand::DiagnosisChange(cmd) => cmd.before.restore(canvas),
        }
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            DesignerCommand::AddShape(_) => "Add Shape",
            DesignerCommand::DeleteShape(_) => "Delete Shape",
            DesignerCommand::DiagnosisChange(_) => "Diagnosis Change",
        }
    }
}
