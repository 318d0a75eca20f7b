use crate::SketchpadApp;
use crate::viewport::CanvasViewport;

/// Allocates the drawing surface, feeds it pointer input and paints the sketch
pub fn canvas_panel(app: &mut SketchpadApp, ui: &mut egui::Ui) {
    let canvas_size = app.config().canvas_size();
    let display_size = canvas_size * app.config().display_scale;
    let (response, painter) = ui.allocate_painter(display_size, egui::Sense::click_and_drag());
    let viewport = CanvasViewport::new(response.rect, canvas_size);

    for event in app.pointer_events(ui.ctx(), &viewport) {
        app.sketchpad_mut().handle_pointer(event);
    }

    app.renderer().render(&painter, &viewport, app.sketchpad());
}
