use eframe::egui;
use crate::stroke::Thickness;

/// Toggle button for one marker: a dot of the marker's width next to its name
pub struct MarkerButton {
    pub label: &'static str,
    pub thickness: Thickness,
    pub selected: bool,
}

impl MarkerButton {
    pub fn new(label: &'static str, thickness: Thickness, selected: bool) -> Self {
        Self {
            label,
            thickness,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(72.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            ui.painter().rect(rect, 4.0, visuals.weak_bg_fill, visuals.bg_stroke);

            let dot_center = egui::pos2(rect.left() + 14.0, rect.center().y);
            let dot_radius = (self.thickness.get() as f32 / 2.0).clamp(1.0, 8.0);
            ui.painter().circle_filled(dot_center, dot_radius, visuals.text_color());

            ui.painter().text(
                egui::pos2(rect.left() + 28.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.label,
                egui::FontId::proportional(14.0),
                visuals.text_color(),
            );
        }

        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::SelectableLabel, true, self.selected, self.label)
        });
        response
    }
}
