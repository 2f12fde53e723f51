use serde::{Deserialize, Serialize};
use std::fmt;

/// What a canvas click selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Clicks toggle predefined regions. Pointer gestures are ignored.
    #[default]
    Region,
    /// Pointer gestures draw with the current tool and clicks toggle shapes.
    Draw,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region => write!(f, "region"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingTool {
    #[default]
    Pen,
    Smoothed,
    Line,
    Polygon,
}

impl DrawingTool {
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pen | Self::Smoothed)
    }
}

impl fmt::Display for DrawingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pen => write!(f, "pen"),
            Self::Smoothed => write!(f, "smoothed"),
            Self::Line => write!(f, "line"),
            Self::Polygon => write!(f, "polygon"),
        }
    }
}
