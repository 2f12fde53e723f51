//! # Anatomark
//!
//! Diagnosis annotation editor for anatomical diagrams:
//! - Freehand (pen and smoothed), line and polygon markup with auto-close and snapping
//! - Diagnosis tags on shapes and on predefined organ regions
//! - Undo/redo of creation, deletion and tagging
//! - Display list and raster preview with diagnosis fills and glows
//!
//! ## Architecture
//!
//! Anatomark is organized as a workspace with multiple crates:
//!
//! 1. **anatomark-core** - Geometry, colors and the shared error type
//! 2. **anatomark-designer** - Annotation state engine, styles and rendering
//! 3. **anatomark-settings** - Editor configuration
//! 4. **anatomark** - Session replay and the command line binary

pub mod cli;
pub mod session;

pub use anatomark_designer as designer;

pub use anatomark_core::{Error, Point, Result, Rgba};
pub use anatomark_designer::{
    rasterize, DesignerState, DiagnosisStyles, DrawingTool, EditorMode, RegionTable,
    RenderOptions, RenderScene, Shape, ShapeId, ToolSettings,
};
pub use anatomark_settings::{Config, SettingsError};
pub use session::{ScriptEvent, Session, SessionSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so JSON summaries on stdout stay clean
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
