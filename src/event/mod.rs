mod bus;
mod events;

pub use bus::EventBus;
pub use events::SketchEvent;

/// Receives notifications about changes to the sketch
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &SketchEvent);
}

/// Asks egui for a new frame whenever the drawing changes
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintOnChange {
    fn handle_event(&mut self, event: &SketchEvent) {
        if matches!(event, SketchEvent::DrawingChanged) {
            self.ctx.request_repaint();
        }
    }
}
