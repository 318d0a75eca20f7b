use crate::stroke::{Point, Thickness};

/// Hover hint showing how wide the selected marker will draw.
///
/// Rebuilt on every idle pointer move and dropped when drawing starts or the
/// pointer leaves the canvas. It is only ever painted as an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPreview {
    center: Point,
    radius: u32,
}

impl ToolPreview {
    /// Ring for `thickness` centred on the pointer
    pub fn new(x: f32, y: f32, thickness: Thickness) -> Self {
        Self {
            center: Point::rounded(x, y),
            radius: Self::radius_for(thickness),
        }
    }

    /// `max(1, round(thickness / 2))`, with halves rounding up
    pub fn radius_for(thickness: Thickness) -> u32 {
        thickness.get().div_ceil(2).max(1)
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thickness(pixels: u32) -> Thickness {
        Thickness::new(pixels).unwrap()
    }

    #[test]
    fn test_radius_is_half_the_thickness() {
        assert_eq!(ToolPreview::radius_for(thickness(1)), 1);
        assert_eq!(ToolPreview::radius_for(thickness(2)), 1);
        assert_eq!(ToolPreview::radius_for(thickness(3)), 2);
        assert_eq!(ToolPreview::radius_for(thickness(6)), 3);
    }

    #[test]
    fn test_preview_centers_on_rounded_pointer() {
        let preview = ToolPreview::new(40.5, 12.2, Thickness::THICK);
        assert_eq!(preview.center(), Point::new(41, 12));
        assert_eq!(preview.radius(), 3);
    }
}
