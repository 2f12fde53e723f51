//! Diagnosis style catalog.
//!
//! Maps a diagnosis label to how it is drawn: a fill kind with its parameter
//! (gradient name, pattern name or color) and the glow color used around
//! diagnosed strokes and lines. Unknown labels fall back to the mandatory
//! `__DEFAULT__` entry.
//!
//! Catalogs load from JSON objects keyed by label:
//!
//! ```json
//! {
//!   "Polyp": { "fillType": "pattern", "fillValue": "PATTERN_POLYP_STRAWBERRY", "glowColor": "rgba(180,100,180,0.9)" },
//!   "__DEFAULT__": { "fillType": "color", "fillValue": "rgba(160,160,160,0.25)", "glowColor": "rgba(160,160,160,0.5)" }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anatomark_core::{Result, Rgba, StyleError};
use serde::{Deserialize, Serialize};

/// Label for free-text diagnoses and for shapes committed in manual fill mode.
pub const OTHER_DIAGNOSIS: &str = "Other";

/// Catalog key of the fallback style.
pub const DEFAULT_STYLE_KEY: &str = "__DEFAULT__";

/// Clinical diagnoses offered by the picker, in display order. "Other" is appended separately.
pub const DIAGNOSIS_LIST: [&str; 21] = [
    "Ascites",
    "Barrett’s mucosa",
    "Bleeding",
    "Bruit",
    "Diverticulosis",
    "Fistula",
    "Hepatomegaly",
    "Hemorrhoids",
    "Hernia",
    "Inflammation",
    "Nodular",
    "Palpable mass",
    "Polyp",
    "Scar",
    "Splenomegaly",
    "Stones",
    "Stricture",
    "Tenderness",
    "Ulcer",
    "Varices",
    "Vascular abnormality",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    Gradient,
    Pattern,
    Color,
    Default,
}

impl FillKind {
    fn requires_value(self) -> bool {
        matches!(self, FillKind::Gradient | FillKind::Pattern | FillKind::Color)
    }
}

impl std::fmt::Display for FillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillKind::Gradient => write!(f, "gradient"),
            FillKind::Pattern => write!(f, "pattern"),
            FillKind::Color => write!(f, "color"),
            FillKind::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisStyle {
    pub fill_type: FillKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow_color: Option<Rgba>,
}

impl DiagnosisStyle {
    fn new(fill_type: FillKind, fill_value: Option<&str>, glow: Rgba) -> Self {
        Self {
            fill_type,
            fill_value: fill_value.map(str::to_string),
            glow_color: Some(glow),
        }
    }

    /// The plain fill color for `color`/`default` kinds whose value parses as a color.
    pub fn fill_color(&self) -> Option<Rgba> {
        match self.fill_type {
            FillKind::Color | FillKind::Default => self.fill_value.as_deref()?.parse().ok(),
            FillKind::Gradient | FillKind::Pattern => None,
        }
    }

    fn validate(&self, label: &str) -> Result<()> {
        if self.fill_type.requires_value() && self.fill_value.is_none() {
            return Err(StyleError::MissingFillValue {
                label: label.to_string(),
                kind: self.fill_type.to_string(),
            }
            .into());
        }
        if self.fill_type == FillKind::Color {
            if let Some(value) = &self.fill_value {
                value.parse::<Rgba>()?;
            }
        }
        Ok(())
    }
}

/// Label to style lookup with a guaranteed fallback entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisStyles {
    entries: BTreeMap<String, DiagnosisStyle>,
    fallback: DiagnosisStyle,
    list: Vec<String>,
}

impl Default for DiagnosisStyles {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DiagnosisStyles {
    /// The catalog shipped with the editor.
    pub fn builtin() -> Self {
        use FillKind::*;

        let rgba = |r, g, b, a: f64| Rgba::new(r, g, b, (a * 255.0).round() as u8);
        let table = [
            ("Inflammation", Gradient, Some("red_glow_gradient_inflammation"), rgba(255, 80, 60, 0.9)),
            ("Tenderness", Gradient, Some("red_glow_gradient_tenderness"), rgba(255, 70, 120, 0.9)),
            ("Nodular", Pattern, Some("PATTERN_NODULAR"), rgba(150, 100, 80, 0.9)),
            ("Stones", Pattern, Some("PATTERN_STONES"), rgba(255, 212, 64, 0.95)),
            ("Palpable mass", Pattern, Some("PATTERN_MASS_SOLID_FILL"), rgba(200, 120, 100, 0.9)),
            ("Polyp", Pattern, Some("PATTERN_POLYP_STRAWBERRY"), rgba(180, 100, 180, 0.9)),
            ("Diverticulosis", Pattern, Some("PATTERN_DIVERTICULA_ELLIPSE"), rgba(230, 160, 80, 0.9)),
            ("Varices", Pattern, Some("PATTERN_BLUE_VENOUS_VERTICAL"), rgba(80, 140, 255, 0.9)),
            ("Hemorrhoids", Pattern, Some("PATTERN_BLUE_VENOUS_VERTICAL"), rgba(80, 140, 255, 0.9)),
            ("Bleeding", Pattern, Some("PATTERN_BLEEDING_FOUNTAIN_RED"), rgba(255, 60, 60, 0.9)),
            ("Vascular abnormality", Pattern, Some("PATTERN_VASC_COBWEB"), rgba(255, 120, 120, 0.9)),
            ("Barrett’s mucosa", Pattern, Some("PATTERN_BARRETTS_SMOOTH"), rgba(255, 170, 160, 0.9)),
            ("Stricture", Pattern, Some("PATTERN_STRICTURE_HOURGLASS_SINGLE"), rgba(255, 130, 100, 0.9)),
            ("Ulcer", Pattern, Some("PATTERN_ULCER_YELLOW_BASE"), rgba(255, 140, 80, 0.9)),
            ("Bruit", Pattern, Some("PATTERN_BRUIT_SPEAKER_ICON"), rgba(255, 200, 80, 0.9)),
            ("Fistula", Pattern, Some("PATTERN_FISTULA_CURLY_TUBE"), rgba(255, 180, 100, 0.9)),
            ("Scar", Pattern, Some("PATTERN_SCAR_BARK"), rgba(150, 100, 60, 0.9)),
            ("Ascites", Color, Some("rgba(140,180,220,0.55)"), rgba(140, 180, 220, 0.9)),
            ("Hernia", Color, Some("rgba(222,184,135,0.6)"), rgba(222, 184, 135, 0.9)),
            ("Hepatomegaly", Default, None, rgba(255, 210, 80, 0.9)),
            ("Splenomegaly", Default, None, rgba(255, 210, 80, 0.9)),
            (OTHER_DIAGNOSIS, Default, None, rgba(255, 170, 0, 0.9)),
        ];

        let entries = table
            .into_iter()
            .map(|(label, kind, value, glow)| (label.to_string(), DiagnosisStyle::new(kind, value, glow)))
            .collect();

        Self {
            entries,
            fallback: DiagnosisStyle::new(
                Color,
                Some("rgba(160,160,160,0.25)"),
                rgba(160, 160, 160, 0.5),
            ),
            list: DIAGNOSIS_LIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parses a catalog. The `__DEFAULT__` entry is required and every entry is validated.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut entries: BTreeMap<String, DiagnosisStyle> = serde_json::from_str(json)?;
        let fallback = entries
            .remove(DEFAULT_STYLE_KEY)
            .ok_or_else(|| StyleError::MissingDefault {
                key: DEFAULT_STYLE_KEY.to_string(),
            })?;
        fallback.validate(DEFAULT_STYLE_KEY)?;
        for (label, style) in &entries {
            style.validate(label)?;
        }

        let list = entries
            .keys()
            .filter(|k| k.as_str() != OTHER_DIAGNOSIS)
            .cloned()
            .collect();
        tracing::debug!("Loaded {} diagnosis styles", entries.len());

        Ok(Self {
            entries,
            fallback,
            list,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Style for `label`, or the fallback when the catalog has none.
    pub fn lookup(&self, label: &str) -> &DiagnosisStyle {
        self.entries.get(label).unwrap_or(&self.fallback)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn fallback(&self) -> &DiagnosisStyle {
        &self.fallback
    }

    /// Glow color for `label`: its own, else the fallback's.
    pub fn glow_color(&self, label: &str) -> Option<Rgba> {
        self.entries
            .get(label)
            .and_then(|s| s.glow_color)
            .or(self.fallback.glow_color)
    }

    /// Picker entries: the catalog's diagnoses followed by "Other".
    pub fn diagnosis_list(&self) -> Vec<&str> {
        self.list
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(OTHER_DIAGNOSIS))
            .collect()
    }

    /// Whether `label` is one of the catalog's named diagnoses (not free text).
    pub fn is_listed(&self, label: &str) -> bool {
        self.list.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
