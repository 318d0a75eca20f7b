use egui::{Context, Pos2};

use crate::viewport::CanvasViewport;

/// Pointer input already translated into canvas pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed over the canvas
    Down { x: f32, y: f32 },
    /// Pointer moved over the canvas, with or without the button held
    Move { x: f32, y: f32 },
    /// Primary button released anywhere
    Up,
    /// Pointer left the canvas
    Leave,
}

/// What the host reported about the pointer for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Hover position, `None` once the pointer has left the window
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerSample {
    /// Read the primary button and hover position from egui
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            position: input.pointer.hover_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Turns per-frame pointer samples into canvas `PointerEvent`s.
///
/// egui reports pointer state rather than DOM-style events, so enter/leave and
/// movement are recovered by remembering the last position seen.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_position: Option<Pos2>,
    inside: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_input(&mut self, ctx: &Context, viewport: &CanvasViewport) -> Vec<PointerEvent> {
        self.process_sample(PointerSample::from_egui(ctx), viewport)
    }

    pub fn process_sample(&mut self, sample: PointerSample, viewport: &CanvasViewport) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let inside = sample.position.is_some_and(|pos| viewport.contains(pos));

        if let Some(pos) = sample.position.filter(|_| inside) {
            let (x, y) = viewport.to_canvas(pos);
            if sample.pressed {
                events.push(PointerEvent::Down { x, y });
            } else if !self.inside || self.last_position != Some(pos) {
                events.push(PointerEvent::Move { x, y });
            }
        }

        if sample.released {
            events.push(PointerEvent::Up);
        }

        if self.inside && !inside {
            events.push(PointerEvent::Leave);
        }

        self.last_position = sample.position;
        self.inside = inside;
        events
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }
}
