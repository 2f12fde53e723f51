//! # Anatomark Core
//!
//! Core types shared by the Anatomark crates:
//! - [`Point`] and the pixel-tolerance geometry used for hit-testing and label placement
//! - [`Rgba`] color parsing for the CSS-style colors found in style catalogs
//! - The unified [`Error`] type for loading external tables

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Rgba;
pub use error::{ColorError, Error, RegionError, Result, StyleError};
pub use geometry::{
    centroid, distance_to_segment, hit_tolerance, point_in_polygon, polygon_area, Point,
    MIN_HIT_TOLERANCE,
};
