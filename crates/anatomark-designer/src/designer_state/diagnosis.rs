//! Diagnosis assignment and the clear action.

use super::DesignerState;
use crate::commands::{DiagnosisSnapshot, RegionDiagnosis};
use crate::diagnosis_styles::OTHER_DIAGNOSIS;
use crate::model::ShapeId;

/// Turns a picker choice plus the "Other" free-text box into a diagnosis.
///
/// A blank choice means nothing is chosen. "Other" resolves to the trimmed
/// free text, or to "Other" itself when the text is blank.
pub fn resolve_diagnosis_choice(choice: &str, other_text: &str) -> Option<String> {
    let choice = choice.trim();
    if choice.is_empty() {
        return None;
    }
    if choice == OTHER_DIAGNOSIS {
        let text = other_text.trim();
        return Some(if text.is_empty() { OTHER_DIAGNOSIS } else { text }.to_string());
    }
    Some(choice.to_string())
}

impl DesignerState {
    /// The diagnosis currently chosen in the panel, used by auto-fill.
    pub fn pending_diagnosis(&self) -> Option<&str> {
        self.pending_diagnosis.as_deref()
    }

    pub fn set_pending_diagnosis(&mut self, diagnosis: Option<String>) {
        self.pending_diagnosis = diagnosis.filter(|d| !d.trim().is_empty());
    }

    /// Sets the pending diagnosis from a picker choice and free text.
    pub fn choose_diagnosis(&mut self, choice: &str, other_text: &str) {
        self.pending_diagnosis = resolve_diagnosis_choice(choice, other_text);
    }

    /// Tags every selected shape and region with `label` as one undoable step.
    ///
    /// Blank labels are ignored. The selection and the pending diagnosis are
    /// cleared afterwards even if nothing was selected. Returns whether a
    /// history entry was recorded.
    pub fn assign_diagnosis(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            tracing::debug!("Ignoring blank diagnosis");
            return false;
        }

        let before = DiagnosisSnapshot::of_selection(&self.canvas);

        let shape_ids: Vec<ShapeId> = before.shapes.iter().map(|s| s.id).collect();
        for id in &shape_ids {
            if let Some(shape) = self.canvas.shape_store.find_by_id_mut(*id) {
                shape.apply_diagnosis(label);
            }
        }
        for region in &before.regions {
            self.canvas
                .region_diagnoses
                .set(&region.name, Some(label.to_string()));
        }

        let after = DiagnosisSnapshot::of_selection(&self.canvas);
        let recorded = !before.is_empty();
        if recorded {
            let message = format!(
                "Diagnosis \"{}\" assigned to {} shape(s) and {} region(s)",
                label,
                before.shapes.len(),
                before.regions.len()
            );
            self.record_diagnosis_change(before, after);
            self.set_status(message);
        }

        self.canvas.selection_manager.clear_all();
        self.pending_diagnosis = None;
        recorded
    }

    /// The clear action.
    ///
    /// With shapes selected, deletes each one (one history entry per shape).
    /// Otherwise, with exactly one region selected, removes its diagnosis and
    /// records the change if it had one. Otherwise does nothing.
    pub fn clear_selected(&mut self) {
        let selected: Vec<ShapeId> = self
            .canvas
            .shapes()
            .map(|s| s.id())
            .filter(|id| self.canvas.selection_manager.is_shape_selected(*id))
            .collect();

        if !selected.is_empty() {
            let deleted = selected
                .into_iter()
                .filter(|id| self.record_delete(*id))
                .count();
            self.canvas.selection_manager.clear_shapes();
            self.set_status(format!("Deleted {deleted} shape(s)"));
            return;
        }

        let name = match self.canvas.selection_manager.selected_regions() {
            [only] => only.clone(),
            _ => {
                tracing::debug!("Nothing to clear");
                return;
            }
        };

        if let Some(previous) = self.canvas.region_diagnosis(&name).map(str::to_string) {
            let before = DiagnosisSnapshot {
                shapes: Vec::new(),
                regions: vec![RegionDiagnosis {
                    name: name.clone(),
                    diagnosis: Some(previous),
                }],
            };
            let after = DiagnosisSnapshot {
                shapes: Vec::new(),
                regions: vec![RegionDiagnosis {
                    name: name.clone(),
                    diagnosis: None,
                }],
            };
            self.record_diagnosis_change(before, after);
        }
        self.canvas.region_diagnoses.set(&name, None);
        self.canvas.selection_manager.clear_regions();
        self.set_status(format!("Cleared diagnosis for {name}"));
    }
}
