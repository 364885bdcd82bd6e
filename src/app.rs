use log::{debug, error, info};

use crate::clipart::{ClipartItem, ALL_CATEGORIES};
use crate::config::StickerConfig;
use crate::panels::{canvas_panel, properties_panel, toolbar_panel};
use crate::product::CartEntry;
use crate::renderer::Renderer;
use crate::state::EditorSession;
use crate::tools::ActiveTool;

/// Category and search term of the clipart picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipartFilter {
    pub category: String,
    pub search: String,
}

impl Default for ClipartFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_owned(),
            search: String::new(),
        }
    }
}

#[derive(Debug)]
pub struct StickerBuilderApp {
    session: EditorSession,
    renderer: Renderer,
    pub clipart_filter: ClipartFilter,
    cart: Option<CartEntry>,
    /// Last failure, shown under the canvas until the next successful action
    last_error: Option<String>,
}

impl Default for StickerBuilderApp {
    fn default() -> Self {
        Self::with_config(StickerConfig::default())
    }
}

impl StickerBuilderApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: StickerConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: StickerConfig) -> Self {
        Self {
            session: EditorSession::new(config),
            renderer: Renderer::new(),
            clipart_filter: ClipartFilter::default(),
            cart: None,
            last_error: None,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn cart(&self) -> Option<&CartEntry> {
        self.cart.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn select_tool(&mut self, tool: ActiveTool) {
        match self.session.select_tool(tool) {
            Ok(_) => self.last_error = None,
            Err(err) => {
                error!("❌ Failed to use tool {}: {}", tool, err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub fn pick_clipart(&mut self, item: &ClipartItem) {
        match self.session.pick_clipart(item) {
            Ok(_) => {
                self.last_error = None;
                self.clipart_filter = ClipartFilter::default();
            }
            Err(err) => {
                error!("❌ Failed to place clipart {:?}: {}", item.name, err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub fn add_to_cart(&mut self) {
        self.cart = Some(self.session.add_to_cart());
    }

    pub fn copy_design_json(&mut self, ctx: &egui::Context) {
        match self.session.export_json() {
            Ok(json) => {
                ctx.copy_text(json);
                info!("📋 Copied design JSON to clipboard");
            }
            Err(err) => {
                error!("❌ Failed to export design: {}", err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Records previewed property edits once the drag or text entry is over
    pub fn settle_edits(&mut self, ctx: &egui::Context) {
        let interacting = ctx.input(|i| i.pointer.any_down()) || ctx.wants_keyboard_input();
        if !interacting && self.session.commit_edits() {
            debug!("Committed property edits");
        }
    }

    /// Ctrl/Cmd+Z undoes, Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z redo, Delete removes the selection
    pub fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let redo_alt = egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            egui::Key::Z,
        );
        let redo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Y);
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);

        // the shift variant has to be consumed first, plain Cmd+Z would match it too
        let (redo_pressed, undo_pressed) = ctx.input_mut(|i| {
            let redo_pressed = i.consume_shortcut(&redo_alt) || i.consume_shortcut(&redo);
            (redo_pressed, i.consume_shortcut(&undo))
        });

        if redo_pressed {
            self.session.redo();
        }
        if undo_pressed {
            self.session.undo();
        }

        // Delete/Backspace belong to the text field while one has focus
        let delete_pressed = !ctx.wants_keyboard_input()
            && ctx.input(|i| i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace));
        if delete_pressed && self.session.delete_selected() {
            info!("🗑️ Deleted selection from keyboard");
        }
    }
}

impl eframe::App for StickerBuilderApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        toolbar_panel(self, ctx);
        properties_panel(self, ctx);
        canvas_panel(self, ctx);

        self.settle_edits(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementPatch;
    use crate::state::PropertiesTab;

    fn key_press(key: egui::Key, modifiers: egui::Modifiers) -> egui::RawInput {
        egui::RawInput {
            modifiers,
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_undo_redo_shortcuts() {
        let mut app = StickerBuilderApp::default();
        app.select_tool(ActiveTool::Shape);
        assert_eq!(app.session().document().len(), 1);

        let ctx = egui::Context::default();
        let _ = ctx.run(key_press(egui::Key::Z, egui::Modifiers::COMMAND), |ctx| {
            app.handle_shortcuts(ctx);
        });
        assert_eq!(app.session().document().len(), 0);

        let _ = ctx.run(key_press(egui::Key::Y, egui::Modifiers::COMMAND), |ctx| {
            app.handle_shortcuts(ctx);
        });
        assert_eq!(app.session().document().len(), 1);
    }

    #[test]
    fn test_pick_clipart_resets_picker() {
        let mut app = StickerBuilderApp::default();
        app.select_tool(ActiveTool::Clipart);
        app.clipart_filter.search = "heart".into();
        assert_eq!(app.session().properties_tab(), PropertiesTab::Clipart);

        let item = app.session().clipart_catalog().search(None, "heart")[0].clone();
        app.pick_clipart(&item);

        assert_eq!(app.session().active_tool(), ActiveTool::Select);
        assert_eq!(app.session().properties_tab(), PropertiesTab::Element);
        assert_eq!(app.clipart_filter, ClipartFilter::default());
        assert!(app.last_error().is_none());
    }

    #[test]
    fn test_panels_render_every_tab() {
        let mut app = StickerBuilderApp::default();
        let ctx = egui::Context::default();
        let frame = |app: &mut StickerBuilderApp| {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                toolbar_panel(app, ctx);
                properties_panel(app, ctx);
                canvas_panel(app, ctx);
            });
        };

        frame(&mut app);
        app.select_tool(ActiveTool::Text);
        frame(&mut app);
        app.select_tool(ActiveTool::Shape);
        frame(&mut app);
        app.select_tool(ActiveTool::Clipart);
        frame(&mut app);
        app.select_tool(ActiveTool::Upload);
        frame(&mut app);

        app.add_to_cart();
        assert_eq!(app.cart().map(|entry| entry.elements.len()), Some(2));
    }

    #[test]
    fn test_edits_settle_after_pointer_release() {
        let mut app = StickerBuilderApp::default();
        app.select_tool(ActiveTool::Shape);
        let id = app.session().selected_element_id().unwrap();
        let steps = app.session().history().len();

        let ctx = egui::Context::default();
        let press = |pressed: bool| egui::RawInput {
            events: vec![
                egui::Event::PointerMoved(egui::pos2(5.0, 5.0)),
                egui::Event::PointerButton {
                    pos: egui::pos2(5.0, 5.0),
                    button: egui::PointerButton::Primary,
                    pressed,
                    modifiers: egui::Modifiers::NONE,
                },
            ],
            ..Default::default()
        };

        // a drag in progress previews every frame but records nothing
        for x in [10.0, 20.0, 30.0] {
            app.session_mut()
                .preview_element(id, &ElementPatch::position(egui::pos2(x, 0.0)));
            let _ = ctx.run(press(true), |ctx| app.settle_edits(ctx));
            assert_eq!(app.session().history().len(), steps);
        }

        let _ = ctx.run(press(false), |ctx| app.settle_edits(ctx));
        assert_eq!(app.session().history().len(), steps + 1);
        assert!(!app.session().has_pending_edits());
    }

    #[test]
    fn test_delete_key_removes_selection() {
        let mut app = StickerBuilderApp::default();
        app.select_tool(ActiveTool::Text);
        let ctx = egui::Context::default();

        let _ = ctx.run(key_press(egui::Key::Delete, egui::Modifiers::NONE), |ctx| {
            app.handle_shortcuts(ctx);
        });
        assert!(app.session().document().is_empty());
        assert_eq!(app.session().selected_element_id(), None);

        // nothing selected, nothing recorded
        let steps = app.session().history().len();
        let _ = ctx.run(key_press(egui::Key::Delete, egui::Modifiers::NONE), |ctx| {
            app.handle_shortcuts(ctx);
        });
        assert_eq!(app.session().history().len(), steps);
    }
}
