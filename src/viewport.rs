use egui::{Pos2, Rect, Vec2};

/// Maps between screen positions and canvas pixels for a canvas shown
/// stretched over `rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasViewport {
    rect: Rect,
    canvas_size: Vec2,
}

impl CanvasViewport {
    pub fn new(rect: Rect, canvas_size: Vec2) -> Self {
        Self { rect, canvas_size }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Screen points per canvas pixel along each axis
    pub fn scale(&self) -> Vec2 {
        self.rect.size() / self.canvas_size
    }

    /// Screen length of `pixels` canvas pixels; uses the smaller axis so
    /// widths never overshoot on a non-square stretch.
    pub fn scale_length(&self, pixels: f32) -> f32 {
        let scale = self.scale();
        pixels * scale.x.min(scale.y)
    }

    /// Screen position to unrounded canvas coordinates
    pub fn to_canvas(&self, pos: Pos2) -> (f32, f32) {
        let canvas = (pos - self.rect.min) / self.scale();
        (canvas.x, canvas.y)
    }

    pub fn to_screen(&self, x: f32, y: f32) -> Pos2 {
        self.rect.min + egui::vec2(x, y) * self.scale()
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rect.contains(pos)
    }
}
