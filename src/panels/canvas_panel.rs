use crate::StickerBuilderApp;

const CANVAS_BORDER: egui::Color32 = egui::Color32::from_gray(75);

pub fn canvas_panel(app: &mut StickerBuilderApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.session().canvas_size();

        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click());
            let canvas_rect = response.rect;

            let primitives = app.session().render();
            app.renderer().paint(&painter, canvas_rect, &primitives);
            painter.rect_stroke(canvas_rect, 4.0, egui::Stroke::new(4.0, CANVAS_BORDER));

            if response.clicked() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    // canvas coordinates have their origin at the top-left corner
                    let pos = pointer - canvas_rect.min.to_vec2();
                    app.session_mut().click_at(pos);
                }
            }

            ui.add_space(8.0);
            let session = app.session();
            ui.weak(format!(
                "{} elements · {}×{} px",
                session.document().len(),
                canvas_size.x,
                canvas_size.y
            ));
            if let Some(error) = app.last_error() {
                ui.colored_label(egui::Color32::from_rgb(248, 113, 113), error);
            }
        });
    });
}
