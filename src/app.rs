use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::SketchConfig;
use crate::error::{SketchError, SketchResult};
use crate::event::RepaintOnChange;
use crate::input::{PointerEvent, PointerTracker};
use crate::panels;
use crate::renderer::Renderer;
use crate::sketchpad::Sketchpad;
use crate::viewport::CanvasViewport;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The sketchpad window: title, canvas and controls.
///
/// Nothing is persisted; closing the app discards the drawing.
#[derive(Debug)]
pub struct SketchpadApp {
    config: SketchConfig,
    sketchpad: Sketchpad,
    renderer: Renderer,
    pointer: PointerTracker,
}

impl SketchpadApp {
    /// Called once before the first frame.
    ///
    /// Fails when the host has no drawing surface for us.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> SketchResult<Self> {
        if cc.gl.is_none() {
            return Err(SketchError::SurfaceUnavailable(
                "no OpenGL context was created".to_owned(),
            ));
        }

        let app = Self::with_config(config)?;
        app.sketchpad
            .subscribe(Box::new(RepaintOnChange::new(cc.egui_ctx.clone())));
        Ok(app)
    }

    /// Builds the app state without touching any window or GPU resources
    pub fn with_config(config: SketchConfig) -> SketchResult<Self> {
        config.validate()?;
        let renderer = Renderer::new(&config)?;
        let sketchpad = Sketchpad::new(config.thin_thickness);

        Ok(Self {
            config,
            sketchpad,
            renderer,
            pointer: PointerTracker::new(),
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Pointer events for this frame, in canvas pixels
    pub fn pointer_events(&mut self, ctx: &egui::Context, viewport: &CanvasViewport) -> Vec<PointerEvent> {
        self.pointer.process_input(ctx, viewport)
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Check the shifted chord first, it also matches plain Cmd+Z otherwise.
        let (redo, undo) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT);
            let undo = !redo && input.consume_shortcut(&UNDO);
            (redo, undo)
        });

        if redo {
            self.sketchpad.redo();
        } else if undo {
            self.sketchpad.undo();
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sticker Sketchpad");
            panels::canvas_panel(self, ui);
            ui.add_space(8.0);
            panels::controls_panel(self, ui);
        });
    }
}
