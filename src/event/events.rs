use crate::stroke::Point;

/// Notifications emitted by the sketchpad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// Strokes or the tool preview changed; the surface needs a redraw.
    /// Emitted once per mutating operation.
    DrawingChanged,
    /// The pointer moved over the canvas while not drawing
    ToolMoved { position: Point },
}
