//! Raster preview of a [`RenderScene`] using tiny-skia.
//!
//! Features:
//! - Anti-aliased fills and strokes with round joins
//! - Gradients and patterns approximated by their descriptor color
//! - Label backgrounds only; text is left to the front end

use anatomark_core::{Point, Rgba};
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::render_scene::{DrawItem, RenderScene};

fn bg_color() -> Color {
    Color::TRANSPARENT
}

fn paint_for(color: Rgba, opacity: f64) -> Paint<'static> {
    let c = color.with_alpha_factor(opacity);
    let mut paint = Paint::default();
    paint.set_color(Color::from_rgba8(c.r, c.g, c.b, c.a));
    paint.anti_alias = true;
    paint
}

fn build_path(points: &[Point], closed: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

/// Paints the display list into a new `width` x `height` pixmap.
///
/// Returns `None` when either dimension is zero.
pub fn rasterize(scene: &RenderScene, width: u32, height: u32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)?;
    pixmap.fill(bg_color());
    let transform = Transform::identity();

    for item in &scene.items {
        match item {
            DrawItem::Fill {
                points,
                paint,
                opacity,
            } => {
                if points.len() < 3 {
                    continue;
                }
                if let Some(path) = build_path(points, true) {
                    let paint = paint_for(paint.approximate_color(), *opacity);
                    pixmap.fill_path(&path, &paint, FillRule::EvenOdd, transform, None);
                }
            }
            DrawItem::Stroke {
                points,
                closed,
                color,
                width,
                ..
            } => {
                if points.len() < 2 {
                    continue;
                }
                if let Some(path) = build_path(points, *closed) {
                    let stroke = Stroke {
                        width: *width as f32,
                        line_cap: LineCap::Round,
                        line_join: LineJoin::Round,
                        ..Default::default()
                    };
                    pixmap.stroke_path(&path, &paint_for(*color, 1.0), &stroke, transform, None);
                }
            }
            DrawItem::Label(label) => {
                let b = label.background;
                if let Some(rect) =
                    Rect::from_xywh(b.x as f32, b.y as f32, b.width as f32, b.height as f32)
                {
                    let paint = paint_for(label.background_color, label.opacity);
                    pixmap.fill_rect(rect, &paint, transform, None);
                }
            }
            DrawItem::Vertex { at, radius, color } => {
                if let Some(path) = PathBuilder::from_circle(at.x as f32, at.y as f32, *radius as f32) {
                    pixmap.fill_path(&path, &paint_for(*color, 1.0), FillRule::Winding, transform, None);
                }
            }
        }
    }

    Some(pixmap)
}
