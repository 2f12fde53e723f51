use crate::model::ShapeId;

/// What the diagnosis panel is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTarget<'a> {
    Shape(ShapeId),
    Region(&'a str),
}

/// Manages shape and region selection.
///
/// `SelectionManager` is responsible for:
/// - Tracking the selected shape ids and selected region names, each in insertion order
/// - Tracking which member of each set is "active" (drives the diagnosis panel)
/// - Keeping the two kinds of selection mutually exclusive
///
/// # Selection Model
///
/// - **Shape toggle**: adds or removes a shape id and always clears the region selection
/// - **Region toggle**: adds or removes a region name and always clears the shape selection
/// - **Active shape**: the most recently added shape, cleared when that shape is toggled off
/// - **Active region**: the last member of the region set, or none when the set is empty
///
/// # Active region retention
///
/// [`sync_active`](Self::sync_active) keeps a stale `active_region` when the
/// region set is empty and no shape is active. The diagnosis panel stays on
/// the last region between related operations instead of closing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    shapes: Vec<ShapeId>,
    regions: Vec<String>,
    active_shape: Option<ShapeId>,
    active_region: Option<String>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use anatomark_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// assert_eq!(manager.active_shape(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Mixed selection that the toggles cannot produce.
    #[cfg(test)]
    pub(crate) fn from_parts(shapes: Vec<ShapeId>, regions: Vec<String>) -> Self {
        Self {
            active_shape: shapes.last().copied(),
            active_region: regions.last().cloned(),
            shapes,
            regions,
        }
    }

    /// Selected shape ids in the order they were selected.
    pub fn selected_shapes(&self) -> &[ShapeId] {
        &self.shapes
    }

    /// Selected region names in the order they were selected.
    pub fn selected_regions(&self) -> &[String] {
        &self.regions
    }

    pub fn active_shape(&self) -> Option<ShapeId> {
        self.active_shape
    }

    pub fn active_region(&self) -> Option<&str> {
        self.active_region.as_deref()
    }

    pub fn is_shape_selected(&self, id: ShapeId) -> bool {
        self.shapes.contains(&id)
    }

    pub fn is_region_selected(&self, name: &str) -> bool {
        self.regions.iter().any(|r| r == name)
    }

    /// True when neither a shape nor a region is selected.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.regions.is_empty()
    }

    /// Toggles a shape in or out of the selection.
    ///
    /// # Arguments
    ///
    /// * `id` - The shape to toggle
    ///
    /// # Returns
    ///
    /// `true` if the shape is selected afterwards.
    ///
    /// The region selection is cleared in both cases.
    pub fn toggle_shape(&mut self, id: ShapeId) -> bool {
        let selected = if let Some(pos) = self.shapes.iter().position(|s| *s == id) {
            self.shapes.remove(pos);
            if self.active_shape == Some(id) {
                self.active_shape = None;
            }
            false
        } else {
            self.shapes.push(id);
            self.active_shape = Some(id);
            true
        };
        self.clear_regions();
        selected
    }

    /// Toggles a region in or out of the selection.
    ///
    /// # Returns
    ///
    /// `true` if the region is selected afterwards.
    ///
    /// The active region becomes the last member of the region set and the
    /// shape selection is cleared.
    pub fn toggle_region(&mut self, name: &str) -> bool {
        let selected = if let Some(pos) = self.regions.iter().position(|r| r == name) {
            self.regions.remove(pos);
            false
        } else {
            self.regions.push(name.to_string());
            true
        };
        self.active_region = self.regions.last().cloned();
        self.clear_shapes();
        selected
    }

    /// Empties both sets and both active pointers.
    pub fn clear_all(&mut self) {
        self.clear_shapes();
        self.clear_regions();
    }

    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
        self.active_shape = None;
    }

    pub fn clear_regions(&mut self) {
        self.regions.clear();
        self.active_region = None;
    }

    /// Re-resolves the active region after the region set changed.
    ///
    /// A single selected region becomes active. With no regions selected the
    /// active region survives only while no shape is active.
    pub fn sync_active(&mut self) {
        match self.regions.as_slice() {
            [only] => self.active_region = Some(only.clone()),
            [] if self.active_shape.is_some() => self.active_region = None,
            _ => {}
        }
    }

    /// Drops selected shapes for which `keep` returns false.
    pub fn retain_shapes(&mut self, mut keep: impl FnMut(ShapeId) -> bool) {
        self.shapes.retain(|id| keep(*id));
        if let Some(active) = self.active_shape {
            if !self.shapes.contains(&active) {
                self.active_shape = None;
            }
        }
    }

    /// The object the diagnosis panel edits: the active shape first, then the active region.
    pub fn panel_target(&self) -> Option<PanelTarget<'_>> {
        if let Some(id) = self.active_shape {
            return Some(PanelTarget::Shape(id));
        }
        self.active_region.as_deref().map(PanelTarget::Region)
    }
}
