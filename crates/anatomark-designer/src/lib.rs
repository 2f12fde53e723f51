//! # Anatomark Designer
//!
//! This crate provides the annotation state engine: freehand strokes, lines and
//! polygons drawn over an anatomical diagram, diagnosis tags on shapes and on
//! predefined regions, and an undo/redo history covering both.
//!
//! ## Core Components
//!
//! ### Annotation Model
//! - **Shapes**: Freehand strokes (pen or smoothed), line segments and polygons
//! - **Shape Store**: Draw-ordered storage with a monotonic id counter
//! - **Regions**: Named predefined outlines and their diagnosis table
//! - **Selection**: Mutually exclusive shape or region selection with an active member
//!
//! ### Editing
//! - **Drawing Tools**: Press/drag/release capture with auto-close and polygon snapping
//! - **Diagnosis Assignment**: Batch tagging of the selection as one undoable step
//! - **History**: Undo/redo of shape creation, deletion and diagnosis changes
//!
//! ### Presentation
//! - **Diagnosis Styles**: Label to fill/glow lookup with a `__DEFAULT__` fallback
//! - **Render Scene**: Display list with smart label placement
//! - **Renderer**: tiny-skia raster preview
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── Canvas
//!   │     ├── ShapeStore (shapes in draw order)
//!   │     ├── SelectionManager
//!   │     ├── RegionDiagnoses
//!   │     └── Capture (pending gesture)
//!   ├── RegionTable (read-only geometry)
//!   └── History (undo/redo stacks of DesignerCommand)
//!
//! RenderScene (display list) ── Renderer (Pixmap)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use anatomark_core::Point;
//! use anatomark_designer::{DesignerState, DrawingTool, EditorMode};
//!
//! let mut state = DesignerState::new();
//! state.set_mode(EditorMode::Draw);
//! state.set_tool(DrawingTool::Line);
//! state.pointer_down(Point::new(0.0, 0.0));
//! state.pointer_move(Point::new(100.0, 0.0));
//! let id = state.pointer_up().unwrap();
//!
//! state.toggle_shape_selection(id);
//! state.assign_diagnosis("Stricture");
//! assert_eq!(state.canvas.get_shape(id).unwrap().diagnosis(), Some("Stricture"));
//!
//! state.undo();
//! assert_eq!(state.canvas.get_shape(id).unwrap().diagnosis(), None);
//! ```

pub mod canvas;
pub mod commands;
pub mod designer_state;
pub mod diagnosis_styles;
pub mod model;
pub mod regions;
pub mod render_scene;
pub mod renderer;
pub mod selection_manager;
pub mod shape_store;

pub use canvas::{Canvas, Draft, DrawingTool, EditorMode, PendingCapture};
pub use commands::{DesignerCommand, DiagnosisSnapshot, RegionDiagnosis, ShapeDiagnosis};
pub use designer_state::{resolve_diagnosis_choice, DesignerState, ToolSettings};
pub use diagnosis_styles::{
    DiagnosisStyle, DiagnosisStyles, FillKind, DEFAULT_STYLE_KEY, DIAGNOSIS_LIST, OTHER_DIAGNOSIS,
};
pub use model::{
    smooth_path, AnnotationShape, FreehandStroke, LineSegment, Polygon, Shape, ShapeId, ShapeKind,
    StrokeKind,
};
pub use regions::{Region, RegionDiagnoses, RegionTable};
pub use render_scene::{DrawItem, FillPaint, Label, LabelKind, RenderOptions, RenderScene, StrokeRole};
pub use renderer::rasterize;
pub use selection_manager::{PanelTarget, SelectionManager};
pub use shape_store::ShapeStore;
