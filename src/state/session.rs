//! The editor session: the one owner of all sticker-builder state.
//!
//! Views receive the session by reference and go through its operations;
//! nothing mutates the document, history, selection or product details
//! behind its back. Every store mutation records exactly one history step
//! and re-prices the design.

use egui::{Pos2, Vec2};
use log::{debug, info};

use super::{EditorState, PropertiesTab};
use crate::clipart::{ClipartCatalog, ClipartItem};
use crate::command::{Command, CommandHistory, CommandOutcome};
use crate::config::StickerConfig;
use crate::document::{Document, ReorderDirection};
use crate::element::{DesignElement, ElementFactory, ElementPatch, ElementType};
use crate::error::EditorError;
use crate::geometry::hit_test;
use crate::id_generator::ElementId;
use crate::pricing::PricingCalculator;
use crate::product::{CartEntry, DetailsPatch, StickerFinalDetails};
use crate::renderer::{render_scene, svg, Primitive};
use crate::tools::ActiveTool;

/// History label of committed property edits
const EDIT_STEP_LABEL: &str = "Edit element";

#[derive(Debug, Clone)]
pub struct EditorSession {
    config: StickerConfig,
    document: Document,
    history: CommandHistory,
    state: EditorState,
    details: StickerFinalDetails,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(StickerConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: StickerConfig) -> Self {
        let details = StickerFinalDetails::initial(&config.sticker_product_options);
        let mut session = Self {
            config,
            document: Document::new(),
            history: CommandHistory::new(),
            state: EditorState::new(),
            details,
        };
        session.refresh_price();
        session
    }

    pub fn config(&self) -> &StickerConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn details(&self) -> &StickerFinalDetails {
        &self.details
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.state.active_tool()
    }

    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.state.selected_element_id()
    }

    pub fn selected_element(&self) -> Option<&DesignElement> {
        self.selected_element_id()
            .and_then(|id| self.document.find_element_by_id(id))
    }

    pub fn properties_tab(&self) -> PropertiesTab {
        self.state.properties_tab()
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.config.canvas_size()
    }

    /// Midpoint of the canvas, where new elements are placed
    pub fn canvas_center(&self) -> Pos2 {
        (self.canvas_size() / 2.0).to_pos2()
    }

    pub fn clipart_catalog(&self) -> ClipartCatalog<'_> {
        ClipartCatalog::new(&self.config.clipart_categories)
    }

    /// Switches tools; `text` and `shape` create an element right away and fall back to `select`
    pub fn select_tool(&mut self, tool: ActiveTool) -> Result<Option<ElementId>, EditorError> {
        match tool.creates() {
            Some(element_type) => {
                self.state.set_active_tool(ActiveTool::Select);
                let id = self.add_element(element_type, &ElementPatch::default())?;
                Ok(Some(id))
            }
            None => {
                self.state.set_active_tool(tool);
                Ok(None)
            }
        }
    }

    /// Creates an element centered on the canvas, adds it and selects it
    pub fn add_element(
        &mut self,
        element_type: ElementType,
        overrides: &ElementPatch,
    ) -> Result<ElementId, EditorError> {
        let element =
            ElementFactory::new(&self.config).create(element_type, overrides, self.canvas_center())?;
        self.insert(element)
    }

    /// Places the picked clipart item and returns to the select tool
    pub fn pick_clipart(&mut self, item: &ClipartItem) -> Result<ElementId, EditorError> {
        let element =
            ElementFactory::new(&self.config).create_clipart(item, self.canvas_center())?;
        let id = self.insert(element)?;
        self.state.set_active_tool(ActiveTool::Select);
        info!("✨ Placed clipart {:?}", item.name);
        Ok(id)
    }

    fn insert(&mut self, element: DesignElement) -> Result<ElementId, EditorError> {
        let id = element.id();
        self.apply(Command::AddElement { element })?;
        self.state.select(id);
        Ok(id)
    }

    /// Merges `patch` into the element; no history step when nothing changed
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> bool {
        self.apply_infallible(Command::UpdateElement {
            element_id: id,
            patch,
        })
        .is_change()
    }

    /// Applies `patch` right away without recording a history step.
    ///
    /// Continuous edits (dragging a value, typing) go through here every
    /// frame; [`Self::commit_edits`] later records them as a single step.
    pub fn preview_element(&mut self, id: ElementId, patch: &ElementPatch) -> bool {
        self.document.update(id, patch)
    }

    /// Records previewed edits as one history step; false when nothing is pending
    pub fn commit_edits(&mut self) -> bool {
        if !self.has_pending_edits() {
            return false;
        }
        self.history.record(self.document.snapshot(), EDIT_STEP_LABEL);
        true
    }

    pub fn has_pending_edits(&self) -> bool {
        self.document.elements() != self.history.current()
    }

    /// Deletes the element, clearing the selection only if it was selected
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        let outcome = self.apply_infallible(Command::RemoveElement { element_id: id });
        if outcome.is_change() && self.state.is_selected(id) {
            self.state.clear_selection();
        }
        outcome.is_change()
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selected_element_id() {
            Some(id) => self.delete_element(id),
            None => false,
        }
    }

    /// Copies the element on top of the design and selects the copy
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        match self.apply_infallible(Command::DuplicateElement { element_id: id }) {
            CommandOutcome::Created(new_id) => {
                self.state.select(new_id);
                Some(new_id)
            }
            _ => None,
        }
    }

    pub fn bring_forward(&mut self, id: ElementId) -> bool {
        self.reorder(id, ReorderDirection::Forward)
    }

    pub fn send_backward(&mut self, id: ElementId) -> bool {
        self.reorder(id, ReorderDirection::Backward)
    }

    fn reorder(&mut self, id: ElementId, direction: ReorderDirection) -> bool {
        self.apply_infallible(Command::ReorderElement {
            element_id: id,
            direction,
        })
        .is_change()
    }

    /// Restores the previous snapshot and clears the selection
    pub fn undo(&mut self) -> bool {
        self.commit_edits();
        match self.history.undo() {
            Some(elements) => {
                self.restore(elements);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot and clears the selection
    pub fn redo(&mut self) -> bool {
        if self.commit_edits() {
            // the previewed edit just discarded the redo branch
            return false;
        }
        match self.history.redo() {
            Some(elements) => {
                self.restore(elements);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, elements: crate::document::ElementSequence) {
        self.document.restore(elements);
        self.state.clear_selection();
        self.refresh_price();
    }

    /// Clicking empty canvas clears the selection but keeps the tool
    pub fn click_canvas(&mut self) {
        self.state.clear_selection();
    }

    /// Clicking an element selects it whatever the active tool
    pub fn click_element(&mut self, id: ElementId) {
        if self.document.contains(id) {
            self.state.select(id);
        }
    }

    /// Delegates a click at canvas coordinates to the topmost element under it
    pub fn click_at(&mut self, pos: Pos2) -> Option<ElementId> {
        match hit_test(self.document.iter(), pos) {
            Some(id) => {
                self.click_element(id);
                Some(id)
            }
            None => {
                self.click_canvas();
                None
            }
        }
    }

    /// Single entry point for product option changes
    pub fn update_details(&mut self, patch: &DetailsPatch) -> bool {
        let changed = patch.apply_to(&mut self.details, &self.config.sticker_product_options);
        if changed {
            self.refresh_price();
        }
        changed
    }

    /// Recomputes the estimated price from the element count and product options
    pub fn refresh_price(&mut self) {
        let calculator = PricingCalculator::new(&self.config.sticker_product_options);
        self.details.estimated_price = calculator.estimate(self.document.len(), &self.details);
    }

    pub fn add_to_cart(&self) -> CartEntry {
        let entry = CartEntry {
            elements: self.document.iter().cloned().collect(),
            details: self.details.clone(),
        };
        info!(
            "🛒 Added to cart: {} elements, {} x {} ({})",
            entry.elements.len(),
            entry.details.quantity,
            entry.details.material,
            entry.details.formatted_price()
        );
        entry
    }

    pub fn export_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(&self.add_to_cart())?)
    }

    pub fn render(&self) -> Vec<Primitive> {
        render_scene(self.document.iter(), self.selected_element_id())
    }

    pub fn to_svg(&self) -> String {
        let size = self.canvas_size();
        // exported designs never carry the selection outline
        svg::to_svg(size.x, size.y, &render_scene(self.document.iter(), None))
    }

    fn apply(&mut self, command: Command) -> Result<CommandOutcome, EditorError> {
        self.commit_edits();
        let outcome = self.history.execute(command, &mut self.document)?;
        if outcome.is_change() {
            self.refresh_price();
        }
        Ok(outcome)
    }

    /// Runs a command that can only fail on add, treating errors as no change
    fn apply_infallible(&mut self, command: Command) -> CommandOutcome {
        match self.apply(command) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("Command failed: {}", err);
                CommandOutcome::Unchanged
            }
        }
    }
}
