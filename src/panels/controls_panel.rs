use crate::SketchpadApp;
use crate::components::MarkerButton;

/// Undo / Redo / Clear row, followed by the marker choice
pub fn controls_panel(app: &mut SketchpadApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let can_undo = app.sketchpad().can_undo();
        let can_redo = app.sketchpad().can_redo();

        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            app.sketchpad_mut().click_undo();
        }
        if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
            app.sketchpad_mut().click_redo();
        }
        if ui.button("Clear").clicked() {
            app.sketchpad_mut().click_clear();
        }
    });

    ui.horizontal(|ui| {
        let markers = [
            ("Thin", app.config().thin_thickness),
            ("Thick", app.config().thick_thickness),
        ];
        let current = app.sketchpad().thickness();

        for (label, thickness) in markers {
            if MarkerButton::new(label, thickness, current == thickness).show(ui).clicked() {
                log::info!("Marker selected from UI: {label}");
                app.sketchpad_mut().select_thickness(thickness);
            }
        }
    });

    let history = app.sketchpad().history();
    ui.label(format!(
        "{} strokes, {} undone",
        history.strokes().len(),
        history.redo_stack().len()
    ));
}
