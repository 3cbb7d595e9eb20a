// ExtendedUndoState - Undoable state that *is* a ValueState
//
// Derefs to its base, so the whole mutable surface of ValueState is reachable,
// including set_value. Writing through that path skips the history.

use crate::command::history::CommandHistory;
use crate::command::state::{ReadState, ValueState};
use crate::command::trait_def::UndoableCommand;
use std::ops::{Deref, DerefMut};

/// Undoable state built by extension
///
/// Anything that can call `ValueState::set_value` can call it here too:
///
/// ```
/// use undo_state::command::SetCommand;
/// use undo_state::undoable::ExtendedUndoState;
///
/// let mut state = ExtendedUndoState::new();
/// state.execute(Box::new(SetCommand::new(3, "player1")));
/// state.execute(Box::new(SetCommand::new(6, "player2")));
/// state.set_value(20); // not recorded anywhere
/// state.undo();
/// assert_eq!(state.value(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ExtendedUndoState {
    base: ValueState,
    history: CommandHistory,
}

impl ExtendedUndoState {
    /// Create a new state holding 0 with an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command and record it
    pub fn execute(&mut self, command: Box<dyn UndoableCommand>) {
        self.history.execute(command, &mut self.base);
    }

    /// Undo the most recent command; no-op on an empty history
    pub fn undo(&mut self) -> Option<String> {
        self.history.undo(&mut self.base)
    }

    /// Commands recorded so far
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

impl Deref for ExtendedUndoState {
    type Target = ValueState;

    fn deref(&self) -> &ValueState {
        &self.base
    }
}

impl DerefMut for ExtendedUndoState {
    fn deref_mut(&mut self) -> &mut ValueState {
        &mut self.base
    }
}

impl ReadState for ExtendedUndoState {
    fn value(&self) -> i32 {
        self.base.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::commands::{MagicCommand, SetCommand};

    #[test]
    fn test_execute_and_undo() {
        let mut state = ExtendedUndoState::new();
        state.execute(Box::new(SetCommand::new(2, "player1")));
        state.execute(Box::new(SetCommand::new(4, "player2")));
        assert_eq!(state.value(), 4);

        assert_eq!(state.undo().as_deref(), Some("Set value to 4 (player2)"));
        assert_eq!(state.value(), 2);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_magic_after_undo() {
        let mut state = ExtendedUndoState::new();
        state.execute(Box::new(SetCommand::new(2, "player1")));
        state.execute(Box::new(SetCommand::new(4, "player2")));
        state.undo();
        state.execute(Box::new(MagicCommand::new("player2")));

        assert_eq!(state.value(), 4);
    }

    #[test]
    fn test_direct_write_bypasses_history() {
        let mut state = ExtendedUndoState::new();
        state.execute(Box::new(SetCommand::new(3, "player1")));
        state.execute(Box::new(SetCommand::new(6, "player2")));

        state.set_value(20);
        assert_eq!(state.value(), 20);
        assert_eq!(state.history().len(), 2);

        // Undo restores what SetCommand(6) saw on apply, not anything about 20
        state.undo();
        assert_eq!(state.value(), 3);
    }

    #[test]
    fn test_direct_write_breaks_magic_undo() {
        let mut state = ExtendedUndoState::new();
        state.execute(Box::new(SetCommand::new(3, "player1")));
        state.execute(Box::new(MagicCommand::new("player2")));

        state.set_value(50);
        state.undo();

        assert_eq!(state.value(), 7);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut state = ExtendedUndoState::new();
        state.set_value(5);

        assert_eq!(state.undo(), None);
        assert_eq!(state.value(), 5);
    }

    #[test]
    fn test_usable_where_value_state_expected() {
        fn read_base(state: &ValueState) -> i32 {
            state.value()
        }

        let mut state = ExtendedUndoState::new();
        state.execute(Box::new(SetCommand::new(9, "player1")));
        assert_eq!(read_base(&state), 9);
    }
}
