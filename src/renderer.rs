// src/renderer.rs
use egui::{Color32, Painter, Pos2, Shape};

use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::preview::ToolPreview;
use crate::sketchpad::Sketchpad;
use crate::stroke::Stroke;
use crate::viewport::CanvasViewport;

/// Offset that puts integer canvas coordinates on pixel centres
const PIXEL_CENTER: f32 = 0.5;

/// Width of the preview ring in canvas pixels
const PREVIEW_LINE_WIDTH: f32 = 1.0;

/// Replays the whole sketch onto a painter.
///
/// Rendering holds no state of its own: the same sketch and viewport always
/// produce the same shapes, so it is fine to redraw every frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    stroke_color: Color32,
    background: Color32,
    preview_color: Color32,
}

impl Renderer {
    /// Resolves the configured colours once up front
    pub fn new(config: &SketchConfig) -> SketchResult<Self> {
        let stroke_color = config.stroke_color()?;
        Ok(Self {
            stroke_color,
            background: config.background_color()?,
            preview_color: stroke_color.gamma_multiply(config.preview_opacity),
        })
    }

    /// Clears the canvas area and draws the sketch on top
    pub fn render(&self, painter: &Painter, viewport: &CanvasViewport, sketchpad: &Sketchpad) {
        painter.extend(self.shapes(viewport, sketchpad));
    }

    /// Builds the shapes for one full redraw.
    ///
    /// Order: background, every visible stroke oldest first, then the tool
    /// preview when the pointer hovers without drawing.
    pub fn shapes(&self, viewport: &CanvasViewport, sketchpad: &Sketchpad) -> Vec<Shape> {
        let mut shapes = vec![Shape::rect_filled(viewport.rect(), 0.0, self.background)];

        for stroke in sketchpad.history().strokes() {
            self.stroke_shapes(stroke, viewport, &mut shapes);
        }

        if !sketchpad.is_drawing() {
            if let Some(preview) = sketchpad.preview() {
                shapes.push(self.preview_shape(preview, viewport));
            }
        }

        shapes
    }

    fn stroke_shapes(&self, stroke: &Stroke, viewport: &CanvasViewport, shapes: &mut Vec<Shape>) {
        if !stroke.is_drawable() {
            return;
        }

        let width = viewport.scale_length(stroke.thickness().get() as f32);
        let points: Vec<Pos2> = stroke
            .points()
            .iter()
            .map(|p| viewport.to_screen(p.x as f32 + PIXEL_CENTER, p.y as f32 + PIXEL_CENTER))
            .collect();

        // egui joins path segments with miters; discs on every vertex give the
        // round caps and joins of a marker.
        let radius = width / 2.0;
        let joints: Vec<Shape> = points
            .iter()
            .map(|&p| Shape::circle_filled(p, radius, self.stroke_color))
            .collect();

        shapes.push(Shape::line(points, egui::Stroke::new(width, self.stroke_color)));
        shapes.extend(joints);
    }

    fn preview_shape(&self, preview: &ToolPreview, viewport: &CanvasViewport) -> Shape {
        let center = preview.center();
        Shape::circle_stroke(
            viewport.to_screen(center.x as f32, center.y as f32),
            viewport.scale_length(preview.radius() as f32),
            egui::Stroke::new(viewport.scale_length(PREVIEW_LINE_WIDTH), self.preview_color),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Thickness;
    use egui::{Rect, pos2, vec2};

    fn renderer() -> Renderer {
        Renderer::new(&SketchConfig::default()).unwrap()
    }

    fn viewport(scale: f32) -> CanvasViewport {
        CanvasViewport::new(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(256.0 * scale, 256.0 * scale)),
            vec2(256.0, 256.0),
        )
    }

    fn paths(shapes: &[Shape]) -> Vec<&egui::epaint::PathShape> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Path(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn rings(shapes: &[Shape]) -> Vec<&egui::epaint::CircleShape> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Circle(circle) if circle.fill == Color32::TRANSPARENT => Some(circle),
                _ => None,
            })
            .collect()
    }

    fn discs(shapes: &[Shape]) -> Vec<&egui::epaint::CircleShape> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Circle(circle) if circle.fill == Color32::BLACK => Some(circle),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_sketch_only_clears() {
        let shapes = renderer().shapes(&viewport(1.0), &Sketchpad::default());
        assert_eq!(shapes.len(), 1);
        assert!(matches!(&shapes[0], Shape::Rect(rect) if rect.fill == Color32::WHITE));
    }

    #[test]
    fn test_strokes_are_offset_to_pixel_centers() {
        let mut pad = Sketchpad::default();
        pad.begin_stroke(10.0, 10.0, Thickness::THIN);
        pad.extend_stroke(20.0, 10.0);
        pad.end_stroke();

        let shapes = renderer().shapes(&viewport(1.0), &pad);
        let paths = paths(&shapes);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].points, vec![pos2(10.5, 10.5), pos2(20.5, 10.5)]);
        assert_eq!(paths[0].stroke.width, 2.0);
    }

    #[test]
    fn test_each_stroke_keeps_its_own_width() {
        let mut pad = Sketchpad::default();
        pad.begin_stroke(0.0, 0.0, Thickness::THIN);
        pad.extend_stroke(5.0, 5.0);
        pad.end_stroke();
        pad.begin_stroke(0.0, 10.0, Thickness::THICK);
        pad.extend_stroke(5.0, 10.0);
        pad.end_stroke();

        let shapes = renderer().shapes(&viewport(2.0), &pad);
        let widths: Vec<f32> = paths(&shapes).iter().map(|p| p.stroke.width).collect();
        assert_eq!(widths, vec![4.0, 12.0]);
    }

    #[test]
    fn test_every_vertex_gets_a_round_disc() {
        let mut pad = Sketchpad::default();
        pad.begin_stroke(0.0, 0.0, Thickness::THICK);
        pad.extend_stroke(5.0, 0.0);
        pad.extend_stroke(5.0, 5.0);
        pad.end_stroke();

        let shapes = renderer().shapes(&viewport(2.0), &pad);
        let found = discs(&shapes);
        assert_eq!(found.len(), 3);
        let centers: Vec<Pos2> = found.iter().map(|disc| disc.center).collect();
        assert_eq!(centers, vec![pos2(1.0, 1.0), pos2(11.0, 1.0), pos2(11.0, 11.0)]);
        assert!(found.iter().all(|disc| disc.radius == 6.0));
    }

    #[test]
    fn test_single_point_stroke_draws_nothing() {
        let mut pad = Sketchpad::default();
        pad.pointer_down(3.0, 3.0);
        pad.pointer_up();

        let shapes = renderer().shapes(&viewport(1.0), &pad);
        assert_eq!(shapes.len(), 1);
        assert!(discs(&shapes).is_empty());
    }

    #[test]
    fn test_preview_shown_only_while_idle() {
        let mut pad = Sketchpad::new(Thickness::THICK);
        pad.pointer_move(30.0, 40.0);

        let shapes = renderer().shapes(&viewport(1.0), &pad);
        let found = rings(&shapes);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].center, pos2(30.0, 40.0));
        assert_eq!(found[0].radius, 3.0);
        assert!(found[0].stroke.color.a() < 255);

        pad.pointer_down(30.0, 40.0);
        pad.pointer_move(35.0, 40.0);
        let shapes = renderer().shapes(&viewport(1.0), &pad);
        assert!(rings(&shapes).is_empty());
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut pad = Sketchpad::default();
        pad.pointer_down(1.0, 1.0);
        pad.pointer_move(9.0, 4.0);
        pad.pointer_up();
        pad.pointer_move(50.0, 50.0);

        let renderer = renderer();
        assert_eq!(
            renderer.shapes(&viewport(2.0), &pad),
            renderer.shapes(&viewport(2.0), &pad)
        );
    }
}
