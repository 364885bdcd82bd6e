//! Selection and tool state of the sticker editor.
//!
//! The two pieces of state are independent: clicking the canvas changes the
//! selection but never the tool, and choosing a tool never touches the
//! selection. Neither participates in history.

use log::info;

use crate::id_generator::ElementId;
use crate::tools::ActiveTool;

/// Which form the properties panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertiesTab {
    /// Fields of the selected element
    Element,
    /// Clipart picker
    Clipart,
    /// Upload placeholder
    Upload,
    /// Product options and price
    Sticker,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    selected: Option<ElementId>,
    active_tool: ActiveTool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    pub fn select(&mut self, id: ElementId) {
        if self.selected != Some(id) {
            info!("🎯 Selected element {}", id);
        }
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        if let Some(id) = self.selected.take() {
            info!("Deselected element {}", id);
        }
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.active_tool
    }

    pub fn set_active_tool(&mut self, tool: ActiveTool) {
        if self.active_tool != tool {
            info!("🛠️ Active tool: {} -> {}", self.active_tool, tool);
            self.active_tool = tool;
        }
    }

    /// Picker tools take precedence over the selected element
    pub fn properties_tab(&self) -> PropertiesTab {
        match (self.active_tool, self.selected) {
            (ActiveTool::Clipart, _) => PropertiesTab::Clipart,
            (ActiveTool::Upload, _) => PropertiesTab::Upload,
            (_, Some(_)) => PropertiesTab::Element,
            (_, None) => PropertiesTab::Sticker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;

    #[test]
    fn test_selection_and_tool_are_independent() {
        let mut state = EditorState::new();
        let id = generate_id();

        state.set_active_tool(ActiveTool::Clipart);
        state.select(id);
        assert_eq!(state.active_tool(), ActiveTool::Clipart);
        assert!(state.is_selected(id));

        state.clear_selection();
        assert_eq!(state.selected_element_id(), None);
        assert_eq!(state.active_tool(), ActiveTool::Clipart);
    }

    #[test]
    fn test_properties_tab() {
        let mut state = EditorState::new();
        assert_eq!(state.properties_tab(), PropertiesTab::Sticker);

        state.select(generate_id());
        assert_eq!(state.properties_tab(), PropertiesTab::Element);

        state.set_active_tool(ActiveTool::Upload);
        assert_eq!(state.properties_tab(), PropertiesTab::Upload);

        state.set_active_tool(ActiveTool::Clipart);
        assert_eq!(state.properties_tab(), PropertiesTab::Clipart);
    }
}
