mod commands;
mod history;

use crate::error::EditorError;
use crate::id_generator::ElementId;

pub use commands::Command;
pub use history::{CommandHistory, Snapshot, INITIAL_SNAPSHOT_LABEL};

/// Result type for command operations
pub type CommandResult = Result<CommandOutcome, EditorError>;

/// What a successfully executed command did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing changed (unknown id, boundary reorder, identical values)
    Unchanged,
    /// An existing element was modified or moved
    Changed,
    /// A new element was appended
    Created(ElementId),
    /// An element was deleted
    Removed(ElementId),
}

impl CommandOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, CommandOutcome::Unchanged)
    }
}
