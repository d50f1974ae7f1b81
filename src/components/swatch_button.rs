use eframe::egui;

use crate::tool::MarkerColor;

/// Round palette button
pub struct SwatchButton {
    pub color: MarkerColor,
    pub selected: bool,
}

impl SwatchButton {
    pub const SIZE: f32 = 30.0;

    pub fn new(color: MarkerColor, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::Vec2::splat(Self::SIZE);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = Self::SIZE / 2.0;

            painter.circle_filled(center, radius, self.color.color32());

            // Contrast outline so black stays visible on a dark theme
            if self.color == MarkerColor::Black {
                painter.circle_stroke(center, radius, egui::Stroke::new(1.0, egui::Color32::WHITE));
            }

            if self.selected {
                painter.circle_stroke(
                    center,
                    radius + 2.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            } else if response.hovered() {
                painter.circle_stroke(
                    center,
                    radius + 1.0,
                    egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
                );
            }
        }

        response.on_hover_text(self.color.name())
    }
}
