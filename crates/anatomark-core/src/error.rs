//! Error handling for Anatomark
//!
//! The editor core itself never fails: invalid input is declined silently.
//! Errors only arise at the edges, when external tables (region geometry,
//! diagnosis style catalogs) or colors are loaded and validated.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Region geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegionError {
    /// A region polygon has too few vertices to enclose an area
    #[error("Region '{name}' has {vertices} vertices, at least 3 are required")]
    TooFewVertices {
        /// The region name.
        name: String,
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// The same region name was supplied twice
    #[error("Duplicate region '{name}'")]
    Duplicate {
        /// The region name.
        name: String,
    },

    /// A region name is empty
    #[error("Region name must not be empty")]
    EmptyName,
}

/// Diagnosis style catalog error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// The catalog lacks the mandatory fallback entry
    #[error("Style catalog has no '{key}' fallback entry")]
    MissingDefault {
        /// The fallback key that was expected.
        key: String,
    },

    /// A style entry needs a fill value for its fill kind
    #[error("Style '{label}' uses fill kind '{kind}' but has no fill value")]
    MissingFillValue {
        /// The diagnosis label.
        label: String,
        /// The fill kind name.
        kind: String,
    },
}

/// Color parsing error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The color string is not in a recognized notation
    #[error("Unrecognized color notation: {0}")]
    Unrecognized(String),

    /// A color component could not be parsed or was out of range
    #[error("Invalid color component '{component}' in {input}")]
    InvalidComponent {
        /// The full input string.
        input: String,
        /// The offending component.
        component: String,
    },
}

/// Main error type for Anatomark
///
/// A unified error type that can represent any error from loading the
/// external tables the editor consumes.
#[derive(Error, Debug)]
pub enum Error {
    /// Region geometry error
    #[error(transparent)]
    Region(#[from] RegionError),

    /// Style catalog error
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Color error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a region geometry error
    pub fn is_region_error(&self) -> bool {
        matches!(self, Error::Region(_))
    }

    /// Check if this is a style catalog error
    pub fn is_style_error(&self) -> bool {
        matches!(self, Error::Style(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
