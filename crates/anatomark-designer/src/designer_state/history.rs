//! Undo/redo functionality for DesignerState.

use super::DesignerState;
use crate::commands::{AddShape, DeleteShape, DesignerCommand, DiagnosisChange, DiagnosisSnapshot};
use crate::model::ShapeId;

impl DesignerState {
    /// Applies a command and records it.
    pub(crate) fn push_command(&mut self, mut cmd: DesignerCommand) {
        cmd.apply(&mut self.canvas);
        self.record(cmd);
    }

    /// Records a change that has already been made.
    fn record(&mut self, cmd: DesignerCommand) {
        tracing::debug!("History: {}", cmd.name());
        self.undo_stack.push(cmd);
        self.redo_stack.clear();
        if self.history_limit > 0 && self.undo_stack.len() > self.history_limit {
            let excess = self.undo_stack.len() - self.history_limit;
            self.undo_stack.drain(..excess);
        }
    }

    /// Records the creation of a shape already in the store.
    pub(crate) fn record_add(&mut self, id: ShapeId) {
        self.record(DesignerCommand::AddShape(AddShape::new(id)));
    }

    /// Removes a shape and records the deletion. Returns false if the shape is unknown.
    pub(crate) fn record_delete(&mut self, id: ShapeId) -> bool {
        if !self.canvas.shape_store.contains(id) {
            return false;
        }
        self.push_command(DesignerCommand::DeleteShape(DeleteShape::new(id)));
        true
    }

    pub(crate) fn record_diagnosis_change(&mut self, before: DiagnosisSnapshot, after: DiagnosisSnapshot) {
        self.record(DesignerCommand::DiagnosisChange(DiagnosisChange { before, after }));
    }

    /// Undo last change. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(mut cmd) = self.undo_stack.pop() else {
            tracing::debug!("Nothing to undo");
            return false;
        };
        cmd.undo(&mut self.canvas);
        self.canvas.prune_selection();
        self.set_status(format!("Undo: {}", cmd.name()));
        self.redo_stack.push(cmd);
        true
    }

    /// Redo last undo. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(mut cmd) = self.redo_stack.pop() else {
            tracing::debug!("Nothing to redo");
            return false;
        };
        cmd.apply(&mut self.canvas);
        self.canvas.prune_selection();
        self.set_status(format!("Redo: {}", cmd.name()));
        self.undo_stack.push(cmd);
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Names of the undoable entries, oldest first.
    pub fn undo_history(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.undo_stack.iter().map(DesignerCommand::name)
    }
}
