//! Predefined anatomical regions and their diagnosis table.
//!
//! Region geometry is supplied from outside (a JSON array of
//! `{ "name": ..., "points": [{ "x": .., "y": .. }, ..] }`) and never changes at
//! runtime. Diagnoses attached to regions live in [`RegionDiagnoses`], which is
//! part of the editable canvas state.

use std::collections::BTreeMap;
use std::path::Path;

use anatomark_core::{centroid, point_in_polygon, polygon_area, Point, RegionError, Result};
use serde::{Deserialize, Serialize};

/// A named closed outline on the base diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub points: Vec<Point>,
}

impl Region {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        point_in_polygon(p, &self.points)
    }

    pub fn centroid(&self) -> Point {
        centroid(&self.points)
    }

    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }
}

/// Ordered, read-only collection of regions. Lookup by point returns the first
/// region in table order that contains it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl RegionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table, rejecting blank names, duplicates and outlines with fewer than 3 vertices.
    pub fn from_regions(regions: Vec<Region>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for region in &regions {
            if region.name.trim().is_empty() {
                return Err(RegionError::EmptyName.into());
            }
            if region.points.len() < 3 {
                return Err(RegionError::TooFewVertices {
                    name: region.name.clone(),
                    vertices: region.points.len(),
                }
                .into());
            }
            if !seen.insert(region.name.as_str()) {
                return Err(RegionError::Duplicate {
                    name: region.name.clone(),
                }
                .into());
            }
        }
        Ok(Self { regions })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let regions: Vec<Region> = serde_json::from_str(json)?;
        let table = Self::from_regions(regions)?;
        tracing::debug!("Loaded {} regions", table.len());
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn find_at(&self, p: &Point) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains_point(p))
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Region name to diagnosis. An absent key means the region has no diagnosis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionDiagnoses {
    entries: BTreeMap<String, String>,
}

impl RegionDiagnoses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// `None` removes the entry.
    pub(crate) fn set(&mut self, name: &str, diagnosis: Option<String>) {
        match diagnosis {
            Some(d) => {
                self.entries.insert(name.to_string(), d);
            }
            None => {
                self.entries.remove(name);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
