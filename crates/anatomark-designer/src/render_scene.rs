//! Display list for drawing the annotation state.
//!
//! [`RenderScene::build`] flattens the designer state into ordered draw items
//! that a front end (or [`crate::renderer::rasterize`]) paints back to front:
//!
//! 1. Region fills for diagnosed regions, then region outlines
//! 2. Shapes in draw order: glow behind diagnosed strokes and lines, diagnosis
//!    fill for filled polygons, then the shape itself
//! 3. Labels
//! 4. Selection halos
//! 5. Pending-capture preview

use anatomark_core::{point_in_polygon, Point, Rgba};
use serde::Serialize;

use crate::canvas::PendingCapture;
use crate::designer_state::DesignerState;
use crate::diagnosis_styles::{DiagnosisStyles, FillKind};
use crate::model::{AnnotationShape, Shape};
use crate::regions::RegionTable;

/// Fill used when no style applies.
pub const DEFAULT_FILL: Rgba = Rgba::new(255, 220, 60, 115);
/// Glow used when neither the style nor the fallback has one.
pub const DEFAULT_GLOW: Rgba = Rgba::new(255, 220, 60, 230);
/// Regions smaller than this place their label outside the outline.
pub const SMALL_REGION_AREA: f64 = 2500.0;

const GLOW_EXTRA_WIDTH: f64 = 8.0;
const HALO_EXTRA_WIDTH: f64 = 6.0;
const HALO_COLOR: Rgba = Rgba::new(30, 130, 255, 230);
const REGION_HALO_FILL: Rgba = Rgba::new(180, 220, 255, 31);
const REGION_OUTLINE: Rgba = Rgba::new(20, 30, 60, 46);
const POLYGON_OUTLINE: Rgba = Rgba::new(0, 0, 0, 166);
const POLYGON_OUTLINE_WIDTH: f64 = 2.0;
const PREVIEW_OUTLINE: Rgba = Rgba::new(0, 0, 0, 51);
const DIAGNOSIS_LABEL_GAP: f64 = 22.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    /// Opacity applied to diagnosis fills, `0.0..=1.0`.
    pub fill_opacity: f64,
    /// Opacity applied to labels, `0.0..=1.0`.
    pub label_opacity: f64,
    pub show_outlines: bool,
    pub show_halo: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fill_opacity: 0.6,
            label_opacity: 0.9,
            show_outlines: true,
            show_halo: true,
        }
    }
}

/// How a diagnosed area is painted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FillPaint {
    /// Radial gradient centered on the shape.
    Gradient { name: String, center: Point, color: Rgba },
    /// Repeating tile pattern.
    Pattern { name: String, color: Rgba },
    Solid { color: Rgba },
}

impl FillPaint {
    /// A single color standing in for the paint.
    pub fn approximate_color(&self) -> Rgba {
        match self {
            FillPaint::Gradient { color, .. }
            | FillPaint::Pattern { color, .. }
            | FillPaint::Solid { color } => *color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeRole {
    RegionOutline,
    Glow,
    Shape,
    Halo,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    RegionName,
    RegionDiagnosis,
    ShapeDiagnosis,
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub kind: LabelKind,
    pub text: String,
    /// Center of the text baseline.
    pub position: Point,
    pub background: LabelBox,
    pub background_color: Rgba,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum DrawItem {
    Fill {
        points: Vec<Point>,
        paint: FillPaint,
        opacity: f64,
    },
    Stroke {
        role: StrokeRole,
        points: Vec<Point>,
        closed: bool,
        color: Rgba,
        width: f64,
    },
    Label(Label),
    Vertex {
        at: Point,
        radius: f64,
        color: Rgba,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderScene {
    pub items: Vec<DrawItem>,
}

impl RenderScene {
    /// Builds the display list for `state`.
    ///
    /// Without a style catalog, fills use the shape color (or the default
    /// yellow for regions) and glows use the shape color.
    pub fn build(
        state: &DesignerState,
        regions: &RegionTable,
        styles: Option<&DiagnosisStyles>,
        options: &RenderOptions,
    ) -> Self {
        let mut scene = SceneBuilder {
            items: Vec::new(),
            styles,
            options,
        };
        scene.regions(state, regions);
        scene.shapes(state);
        scene.labels(state, regions);
        if options.show_halo {
            scene.halos(state, regions);
        }
        if let Some(pending) = state.canvas.pending_capture() {
            scene.preview(pending);
        }
        Self { items: scene.items }
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Label(label) => Some(label),
            _ => None,
        })
    }

    pub fn strokes_with_role(&self, role: StrokeRole) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, DrawItem::Stroke { role: r, .. } if *r == role))
            .count()
    }

    pub fn fills(&self) -> impl Iterator<Item = (&[Point], &FillPaint)> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Fill { points, paint, .. } => Some((points.as_slice(), paint)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

struct SceneBuilder<'a> {
    items: Vec<DrawItem>,
    styles: Option<&'a DiagnosisStyles>,
    options: &'a RenderOptions,
}

impl SceneBuilder<'_> {
    fn paint_for(&self, diagnosis: &str, center: Point, base: Option<Rgba>) -> FillPaint {
        let Some(styles) = self.styles else {
            return FillPaint::Solid {
                color: base.unwrap_or(DEFAULT_FILL),
            };
        };
        let style = styles.lookup(diagnosis);
        let accent = style.glow_color.unwrap_or(DEFAULT_GLOW);
        match (style.fill_type, style.fill_value.as_deref()) {
            (FillKind::Gradient, Some(name)) => FillPaint::Gradient {
                name: name.to_string(),
                center,
                color: accent,
            },
            (FillKind::Pattern, Some(name)) => FillPaint::Pattern {
                name: name.to_string(),
                color: accent,
            },
            _ => FillPaint::Solid {
                color: style.fill_color().unwrap_or(DEFAULT_FILL),
            },
        }
    }

    fn glow_for(&self, diagnosis: &str, base: Rgba) -> Rgba {
        self.styles
            .and_then(|s| s.glow_color(diagnosis))
            .unwrap_or(base)
    }

    fn regions(&mut self, state: &DesignerState, regions: &RegionTable) {
        for region in regions.iter() {
            if let Some(diagnosis) = state.canvas.region_diagnosis(&region.name) {
                let paint = self.paint_for(diagnosis, region.centroid(), None);
                self.items.push(DrawItem::Fill {
                    points: region.points.clone(),
                    paint,
                    opacity: self.options.fill_opacity,
                });
            }
            if self.options.show_outlines {
                self.items.push(DrawItem::Stroke {
                    role: StrokeRole::RegionOutline,
                    points: region.points.clone(),
                    closed: true,
                    color: REGION_OUTLINE,
                    width: 1.0,
                });
            }
        }
    }

    fn shapes(&mut self, state: &DesignerState) {
        for shape in state.canvas.shapes() {
            match shape {
                Shape::Polygon(poly) => {
                    if let (Some(diagnosis), true) = (poly.diagnosis.as_deref(), poly.filled) {
                        let paint = self.paint_for(diagnosis, poly.label_anchor(), Some(poly.color));
                        self.items.push(DrawItem::Fill {
                            points: poly.points.clone(),
                            paint,
                            opacity: self.options.fill_opacity,
                        });
                    }
                    self.items.push(DrawItem::Stroke {
                        role: StrokeRole::Shape,
                        points: poly.points.clone(),
                        closed: true,
                        color: POLYGON_OUTLINE,
                        width: POLYGON_OUTLINE_WIDTH,
                    });
                }
                Shape::Stroke(_) | Shape::Line(_) => {
                    let outline = shape.outline();
                    if let Some(diagnosis) = shape.diagnosis() {
                        if outline.len() >= 2 {
                            self.items.push(DrawItem::Stroke {
                                role: StrokeRole::Glow,
                                points: outline.clone(),
                                closed: false,
                                color: self.glow_for(diagnosis, shape.color()),
                                width: shape.thickness() + GLOW_EXTRA_WIDTH,
                            });
                        }
                    }
                    self.items.push(DrawItem::Stroke {
                        role: StrokeRole::Shape,
                        points: outline,
                        closed: false,
                        color: shape.color(),
                        width: shape.thickness(),
                    });
                }
            }
        }
    }

    fn label(&mut self, kind: LabelKind, text: &str, position: Point, background: LabelBox, alpha: f64) {
        self.items.push(DrawItem::Label(Label {
            kind,
            text: text.to_string(),
            position,
            background,
            background_color: Rgba::BLACK.with_alpha_factor(alpha),
            opacity: self.options.label_opacity,
        }));
    }

    fn labels(&mut self, state: &DesignerState, regions: &RegionTable) {
        let selection = state.canvas.selection();
        for region in regions.iter() {
            let diagnosis = state.canvas.region_diagnosis(&region.name);
            if diagnosis.is_none() && !selection.is_region_selected(&region.name) {
                continue;
            }
            let at = region_label_position(&region.points, region.centroid(), region.area());
            self.label(
                LabelKind::RegionName,
                &region.name,
                at,
                centered_box(at, 120.0, 20.0),
                0.10,
            );
            if let Some(diagnosis) = diagnosis {
                let below = at.offset(0.0, DIAGNOSIS_LABEL_GAP);
                self.label(
                    LabelKind::RegionDiagnosis,
                    diagnosis,
                    below,
                    centered_box(below, 120.0, 20.0),
                    0.08,
                );
            }
        }

        for shape in state.canvas.shapes() {
            let Some(diagnosis) = shape.diagnosis() else {
                continue;
            };
            let anchor = shape.label_anchor();
            let background = LabelBox {
                x: anchor.x - 45.0,
                y: anchor.y - 20.0,
                width: 90.0,
                height: 26.0,
            };
            self.label(
                LabelKind::ShapeDiagnosis,
                diagnosis,
                anchor.offset(0.0, -4.0),
                background,
                0.08,
            );
        }
    }

    fn halos(&mut self, state: &DesignerState, regions: &RegionTable) {
        let selection = state.canvas.selection();
        for id in selection.selected_shapes() {
            let Some(shape) = state.canvas.get_shape(*id) else {
                continue;
            };
            self.items.push(DrawItem::Stroke {
                role: StrokeRole::Halo,
                points: shape.outline(),
                closed: shape.is_closed(),
                color: HALO_COLOR,
                width: shape.thickness() + HALO_EXTRA_WIDTH,
            });
        }
        for name in selection.selected_regions() {
            if let Some(region) = regions.get(name) {
                self.items.push(DrawItem::Fill {
                    points: region.points.clone(),
                    paint: FillPaint::Solid {
                        color: REGION_HALO_FILL,
                    },
                    opacity: 1.0,
                });
            }
        }
    }

    fn preview(&mut self, pending: &PendingCapture) {
        match pending {
            PendingCapture::Polygon { points, .. } => {
                self.items.push(DrawItem::Stroke {
                    role: StrokeRole::Preview,
                    points: points.clone(),
                    closed: false,
                    color: PREVIEW_OUTLINE,
                    width: 2.0,
                });
                for p in points {
                    self.items.push(DrawItem::Vertex {
                        at: *p,
                        radius: 3.0,
                        color: Rgba::BLACK,
                    });
                }
            }
            PendingCapture::Line(line) => self.items.push(DrawItem::Stroke {
                role: StrokeRole::Preview,
                points: vec![line.a, line.b],
                closed: false,
                color: line.color,
                width: line.thickness,
            }),
            PendingCapture::Freehand(stroke) => self.items.push(DrawItem::Stroke {
                role: StrokeRole::Preview,
                points: stroke.path().to_vec(),
                closed: false,
                color: stroke.color,
                width: stroke.thickness,
            }),
        }
    }
}

/// Where a region's name label goes.
///
/// Large regions label their centroid. Small regions try above, right, left
/// and below the centroid and take the first candidate outside the outline,
/// falling back to the first candidate.
pub fn region_label_position(points: &[Point], centroid: Point, area: f64) -> Point {
    if area >= SMALL_REGION_AREA {
        return centroid;
    }
    let candidates = [
        centroid.offset(0.0, -40.0),
        centroid.offset(60.0, 0.0),
        centroid.offset(-60.0, 0.0),
        centroid.offset(0.0, 40.0),
    ];
    candidates
        .iter()
        .copied()
        .find(|c| !point_in_polygon(c, points))
        .unwrap_or(candidates[0])
}

fn centered_box(at: Point, width: f64, height: f64) -> LabelBox {
    LabelBox {
        x: at.x - width / 2.0,
        y: at.y - height / 2.0,
        width,
        height,
    }
}
