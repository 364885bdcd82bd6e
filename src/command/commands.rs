use log::warn;

use super::{CommandOutcome, CommandResult};
use crate::document::{Document, ReorderDirection};
use crate::element::{DesignElement, ElementPatch};
use crate::error::EditorError;
use crate::id_generator::ElementId;

/// Mutations of the design element store.
///
/// Every command that changes the document is followed by exactly one
/// history snapshot, so undo granularity is one user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a new element on top of the design
    AddElement { element: DesignElement },

    /// Merge partial fields into an existing element
    UpdateElement {
        element_id: ElementId,
        patch: ElementPatch,
    },

    /// Delete an element
    RemoveElement { element_id: ElementId },

    /// Copy an element under a fresh id, offset and on top
    DuplicateElement { element_id: ElementId },

    /// Move an element one step in z-order
    ReorderElement {
        element_id: ElementId,
        direction: ReorderDirection,
    },
}

impl Command {
    /// Execute the command against `document`
    pub fn execute(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddElement { element } => {
                document.add(element.clone())?;
                Ok(CommandOutcome::Created(element.id()))
            }
            Command::UpdateElement { element_id, patch } => {
                if document.update(*element_id, patch) {
                    Ok(CommandOutcome::Changed)
                } else {
                    Ok(CommandOutcome::Unchanged)
                }
            }
            Command::RemoveElement { element_id } => Ok(document
                .remove(*element_id)
                .map_or(CommandOutcome::Unchanged, |removed| {
                    CommandOutcome::Removed(removed.id())
                })),
            Command::DuplicateElement { element_id } => match document.duplicate(*element_id) {
                Ok(new_id) => Ok(CommandOutcome::Created(new_id)),
                Err(EditorError::ElementNotFound(id)) => {
                    warn!("Cannot duplicate missing element {}", id);
                    Ok(CommandOutcome::Unchanged)
                }
                Err(err) => Err(err),
            },
            Command::ReorderElement {
                element_id,
                direction,
            } => {
                if document.reorder(*element_id, *direction) {
                    Ok(CommandOutcome::Changed)
                } else {
                    Ok(CommandOutcome::Unchanged)
                }
            }
        }
    }

    /// Short description shown in the history list
    pub fn label(&self) -> String {
        match self {
            Command::AddElement { element } => format!("Add {}", element.element_type()),
            Command::UpdateElement { .. } => "Edit element".to_owned(),
            Command::RemoveElement { .. } => "Delete element".to_owned(),
            Command::DuplicateElement { .. } => "Duplicate element".to_owned(),
            Command::ReorderElement { direction, .. } => match direction {
                ReorderDirection::Forward => "Bring forward".to_owned(),
                ReorderDirection::Backward => "Send backward".to_owned(),
            },
        }
    }
}
