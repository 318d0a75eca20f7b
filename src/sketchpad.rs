//! The sketchpad controller.
//!
//! [`Sketchpad`] owns everything the drawing depends on: the stroke history,
//! the selected marker thickness and the tool preview. UI code feeds it
//! pointer and button input and subscribes to its [`SketchEvent`]s to learn
//! when the surface needs redrawing.

use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::history::StrokeHistory;
use crate::input::PointerEvent;
use crate::preview::ToolPreview;
use crate::stroke::Thickness;

#[derive(Debug, Default)]
pub struct Sketchpad {
    history: StrokeHistory,
    thickness: Thickness,
    preview: Option<ToolPreview>,
    events: EventBus,
}

impl Sketchpad {
    pub fn new(thickness: Thickness) -> Self {
        Self {
            thickness,
            ..Default::default()
        }
    }

    /// Subscribe a handler to drawing notifications
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// Dispatch a translated pointer event
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// Idle -> Drawing: start a stroke with the selected marker
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.preview = None;
        self.begin_stroke(x, y, self.thickness);
    }

    /// Extend the stroke while drawing, otherwise move the preview
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.history.is_drawing() {
            self.extend_stroke(x, y);
            return;
        }

        let preview = ToolPreview::new(x, y, self.thickness);
        self.preview = Some(preview);
        self.events.emit(SketchEvent::ToolMoved {
            position: preview.center(),
        });
        self.drawing_changed();
    }

    /// Drawing -> Idle
    pub fn pointer_up(&mut self) {
        self.end_stroke();
    }

    /// Finishes any stroke and hides the preview
    pub fn pointer_leave(&mut self) {
        self.end_stroke();
        self.preview = None;
        self.drawing_changed();
    }

    /// Takes effect from the next stroke on; an existing preview keeps its
    /// size until the pointer moves.
    pub fn select_thickness(&mut self, thickness: Thickness) {
        log::debug!("Selected marker thickness {thickness}");
        self.thickness = thickness;
    }

    pub fn click_undo(&mut self) {
        self.undo();
    }

    pub fn click_redo(&mut self) {
        self.redo();
    }

    pub fn click_clear(&mut self) {
        self.clear();
    }

    pub fn begin_stroke(&mut self, x: f32, y: f32, thickness: Thickness) {
        if self.history.begin_stroke(x, y, thickness) {
            self.drawing_changed();
        }
    }

    pub fn extend_stroke(&mut self, x: f32, y: f32) {
        if self.history.extend_stroke(x, y) {
            self.drawing_changed();
        }
    }

    pub fn end_stroke(&mut self) {
        self.history.end_stroke();
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.drawing_changed();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.drawing_changed();
        }
    }

    pub fn clear(&mut self) {
        if self.history.clear() {
            self.drawing_changed();
        }
    }

    fn drawing_changed(&self) {
        self.events.emit(SketchEvent::DrawingChanged);
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.history.is_drawing()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
