use eframe::egui;

use crate::tools::ActiveTool;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(40.0, 40.0);

/// Square toolbar button showing a tool's icon
pub struct ToolButton {
    pub tool: ActiveTool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: ActiveTool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(99, 102, 241)
            } else if response.hovered() {
                egui::Color32::from_gray(60)
            } else {
                egui::Color32::from_gray(40)
            };
            ui.painter().rect_filled(rect, 6.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(210)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    6.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(165, 180, 252)),
                );
            }
        }

        response.on_hover_text(self.tool.name())
    }
}
