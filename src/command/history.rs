use im::Vector;
use log::{debug, info};

use super::{Command, CommandResult};
use crate::document::{Document, ElementSequence};

pub const INITIAL_SNAPSHOT_LABEL: &str = "Start";

/// Immutable copy of the element sequence at one point in edit history
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub elements: ElementSequence,
    pub label: String,
}

/// Linear undo/redo log over full snapshots of the element sequence.
///
/// Snapshots at or before the cursor are the undo-able past, snapshots after
/// it the redo-able future. Recording truncates the future before appending.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Starts with a single empty snapshot at cursor 0
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot {
                elements: Vector::new(),
                label: INITIAL_SNAPSHOT_LABEL.to_owned(),
            }],
            cursor: 0,
        }
    }

    /// Execute a command and snapshot the document if it changed
    pub fn execute(&mut self, command: Command, document: &mut Document) -> CommandResult {
        let outcome = command.execute(document)?;
        if outcome.is_change() {
            self.record(document.snapshot(), command.label());
        } else {
            debug!("Command {:?} left the document unchanged", command.label());
        }
        Ok(outcome)
    }

    /// Drops every snapshot after the cursor, then appends `elements`
    pub fn record(&mut self, elements: ElementSequence, label: impl Into<String>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Snapshot {
            elements,
            label: label.into(),
        });
        self.cursor = self.snapshots.len() - 1;
        info!(
            "📚 Recorded history step {} ({} steps)",
            self.cursor,
            self.snapshots.len()
        );
    }

    /// Steps back, returning the snapshot to restore; `None` at the first step
    pub fn undo(&mut self) -> Option<ElementSequence> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        info!("↩️ Undo to step {}", self.cursor);
        Some(self.current().clone())
    }

    /// Steps forward, returning the snapshot to restore; `None` at the last step
    pub fn redo(&mut self) -> Option<ElementSequence> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        info!("↪️ Redo to step {}", self.cursor);
        Some(self.current().clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Sequence at the cursor
    pub fn current(&self) -> &ElementSequence {
        &self.snapshots[self.cursor].elements
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in order, oldest first
    pub fn entries(&self) -> &[Snapshot] {
        &self.snapshots
    }
}
