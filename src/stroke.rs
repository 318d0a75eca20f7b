use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SketchError;

/// Rounds the way the browser's `Math.round` does: halves go up, towards
/// positive infinity, so `-2.5` becomes `-2`.
pub fn round_half_up(value: f32) -> i32 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i32 + 1
    } else {
        floor as i32
    }
}

/// A point on the canvas, in whole canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap raw pointer coordinates to the pixel grid
    pub fn rounded(x: f32, y: f32) -> Self {
        Self::new(round_half_up(x), round_half_up(y))
    }
}

/// Marker width in canvas pixels. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Thickness(NonZeroU32);

impl Thickness {
    pub const THIN: Self = Self(NonZeroU32::MIN.saturating_add(1));
    pub const THICK: Self = Self(NonZeroU32::MIN.saturating_add(5));

    pub fn new(pixels: u32) -> Result<Self, SketchError> {
        NonZeroU32::new(pixels)
            .map(Self)
            .ok_or(SketchError::ZeroThickness)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Thickness {
    fn default() -> Self {
        Self::THIN
    }
}

impl TryFrom<u32> for Thickness {
    type Error = SketchError;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        Self::new(pixels)
    }
}

impl From<Thickness> for u32 {
    fn from(thickness: Thickness) -> Self {
        thickness.get()
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Identity of a stroke across the visible and undone lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeId(Uuid);

impl StrokeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One continuous marker line, from pointer-down to pointer-up.
///
/// Points are kept in drawing order. The thickness is fixed when the stroke
/// starts; switching markers mid-stroke doesn't affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
    thickness: Thickness,
}

impl Stroke {
    /// Start a stroke seeded with a single point
    pub fn new(x: f32, y: f32, thickness: Thickness) -> Self {
        Self {
            id: StrokeId::new(),
            points: vec![Point::rounded(x, y)],
            thickness,
        }
    }

    /// Extend the stroke to a new pointer position
    pub fn drag(&mut self, x: f32, y: f32) {
        self.points.push(Point::rounded(x, y));
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    /// A lone point has no segment to stroke, so only strokes with at least
    /// two points leave a mark.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_matches_browser() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn test_stroke_points_are_rounded_in_order() {
        let mut stroke = Stroke::new(10.4, 9.6, Thickness::THIN);
        stroke.drag(20.5, 10.0);
        stroke.drag(20.5, 10.0);

        assert_eq!(
            stroke.points(),
            &[Point::new(10, 10), Point::new(21, 10), Point::new(21, 10)]
        );
        assert_eq!(stroke.thickness().get(), 2);
    }

    #[test]
    fn test_single_point_stroke_is_not_drawable() {
        let mut stroke = Stroke::new(0.0, 0.0, Thickness::THICK);
        assert!(!stroke.is_drawable());
        stroke.drag(1.0, 1.0);
        assert!(stroke.is_drawable());
    }

    #[test]
    fn test_thickness_rejects_zero() {
        assert!(matches!(Thickness::new(0), Err(SketchError::ZeroThickness)));
        assert_eq!(Thickness::new(6).unwrap(), Thickness::THICK);
        assert_eq!(Thickness::THIN.to_string(), "2px");
    }

    #[test]
    fn test_thickness_deserializes_from_integer() {
        let thickness: Thickness = serde_json::from_str("4").unwrap();
        assert_eq!(thickness.get(), 4);
        assert!(serde_json::from_str::<Thickness>("0").is_err());
    }
}
