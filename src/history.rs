use log::{debug, info, trace};

use crate::stroke::{Stroke, Thickness};

/// The stroke model: visible strokes plus the strokes undone since the last
/// new stroke, forming a linear undo/redo history.
///
/// Every mutating method returns `true` when it changed something, which is
/// what callers use to decide whether the drawing needs a redraw.
#[derive(Debug, Default)]
pub struct StrokeHistory {
    /// Committed strokes, in drawing order
    strokes: Vec<Stroke>,
    /// Undone strokes; the last entry is the next to redo
    redo_stack: Vec<Stroke>,
    /// Whether the last entry of `strokes` is still being drawn
    active: bool,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke. Drops any redo history.
    pub fn begin_stroke(&mut self, x: f32, y: f32, thickness: Thickness) -> bool {
        let stroke = Stroke::new(x, y, thickness);
        debug!(
            "Began stroke {} at {:?} with thickness {}",
            stroke.id(),
            stroke.points()[0],
            thickness
        );

        if !self.redo_stack.is_empty() {
            debug!("Discarding {} undone strokes", self.redo_stack.len());
            self.redo_stack.clear();
        }
        self.strokes.push(stroke);
        self.active = true;
        true
    }

    /// Append a point to the stroke being drawn, if there is one
    pub fn extend_stroke(&mut self, x: f32, y: f32) -> bool {
        match self.active_stroke_mut() {
            Some(stroke) => {
                stroke.drag(x, y);
                trace!("Extended stroke {} to {} points", stroke.id(), stroke.points().len());
                true
            }
            None => false,
        }
    }

    /// Stop accepting points for the current stroke. The history itself is
    /// untouched.
    pub fn end_stroke(&mut self) {
        if self.active {
            if let Some(stroke) = self.strokes.last() {
                debug!("Finished stroke {} with {} points", stroke.id(), stroke.points().len());
            }
        }
        self.active = false;
    }

    /// Move the most recent stroke onto the redo stack
    pub fn undo(&mut self) -> bool {
        let Some(stroke) = self.strokes.pop() else {
            return false;
        };
        debug!("Undid stroke {}", stroke.id());
        // An undone stroke must not keep receiving points.
        self.active = false;
        self.redo_stack.push(stroke);
        true
    }

    /// Bring back the most recently undone stroke
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.redo_stack.pop() else {
            return false;
        };
        debug!("Redid stroke {}", stroke.id());
        self.strokes.push(stroke);
        true
    }

    /// Wipe everything. Always reports a change, even on an empty history,
    /// so the surface gets cleared regardless.
    pub fn clear(&mut self) -> bool {
        info!(
            "Clearing {} strokes and {} undone strokes",
            self.strokes.len(),
            self.redo_stack.len()
        );
        self.strokes.clear();
        self.redo_stack.clear();
        self.active = false;
        true
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo_stack
    }

    pub fn is_drawing(&self) -> bool {
        self.active
    }

    /// The stroke currently receiving points
    pub fn active_stroke(&self) -> Option<&Stroke> {
        if self.active { self.strokes.last() } else { None }
    }

    fn active_stroke_mut(&mut self) -> Option<&mut Stroke> {
        if self.active { self.strokes.last_mut() } else { None }
    }

    /// Returns true if there are strokes that can be undone
    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    /// Returns true if there are strokes that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
