use crate::StickerBuilderApp;
use crate::components::ToolButton;
use crate::tools::ActiveTool;

pub fn toolbar_panel(app: &mut StickerBuilderApp, ctx: &egui::Context) {
    egui::SidePanel::left("toolbar_panel")
        .resizable(false)
        .exact_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.session().active_tool();
            ui.horizontal_wrapped(|ui| {
                for tool in ActiveTool::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool);
                        app.select_tool(tool);
                    }
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.session().history().can_undo();
                let can_redo = app.session().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("⟲ Undo")).clicked() {
                    app.session_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("⟳ Redo")).clicked() {
                    app.session_mut().redo();
                }
            });

            ui.separator();

            let history = app.session().history();
            ui.label(format!(
                "History: step {} of {}",
                history.cursor() + 1,
                history.len()
            ));
            egui::ScrollArea::vertical()
                .id_salt("history_list")
                .show(ui, |ui| {
                    for (index, snapshot) in history.entries().iter().enumerate() {
                        let text = format!("{}. {}", index + 1, snapshot.label);
                        if index == history.cursor() {
                            ui.strong(text);
                        } else if index > history.cursor() {
                            ui.weak(text);
                        } else {
                            ui.label(text);
                        }
                    }
                });
        });
}
