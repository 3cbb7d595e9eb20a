// CommandHistory - Last-in-first-out record of applied commands

use crate::command::state::ValueState;
use crate::command::trait_def::UndoableCommand;

/// Stack of commands that have been applied and can be undone
///
/// The history does not own the state it works on: both undoable variants
/// hand it their `ValueState` on every call. It only knows about changes made
/// through `execute`, so a value written any other way is invisible to it and
/// the next `undo` works from stale assumptions.
///
/// There is no size limit. Every executed command stays until undone or
/// until `clear` is called.
#[derive(Default)]
pub struct CommandHistory {
    /// Most recent command at the back
    commands: Vec<Box<dyn UndoableCommand>>,
}

impl CommandHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command to the state and record it
    pub fn execute(&mut self, mut command: Box<dyn UndoableCommand>, state: &mut ValueState) {
        command.apply(state);
        tracing::debug!(
            command = %command.description(),
            value = state.value(),
            depth = self.commands.len() + 1,
            "executed"
        );
        self.commands.push(command);
    }

    /// Undo the most recent command
    ///
    /// Returns the description of the undone command, or `None` when the
    /// history is empty, in which case the state is left untouched.
    pub fn undo(&mut self, state: &mut ValueState) -> Option<String> {
        let Some(mut command) = self.commands.pop() else {
            tracing::trace!("undo on empty history ignored");
            return None;
        };

        command.undo(state);
        let description = command.description();
        tracing::debug!(
            command = %description,
            value = state.value(),
            depth = self.commands.len(),
            "undone"
        );

        Some(description)
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Get a description of the command that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.commands.last().map(|cmd| cmd.description())
    }

    /// Descriptions of all recorded commands, oldest first
    pub fn descriptions(&self) -> Vec<String> {
        self.commands.iter().map(|cmd| cmd.description()).collect()
    }

    /// Drop all recorded commands without touching any state
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.descriptions()).finish()
    }
}
