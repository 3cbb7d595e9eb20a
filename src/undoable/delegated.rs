// DelegatedUndoState - Undoable state that *has* a ValueState
//
// The base is private. Only execute, undo and a forwarded value() are exposed,
// so every change goes through the history.

use crate::command::history::CommandHistory;
use crate::command::state::{ReadState, ValueState};
use crate::command::trait_def::UndoableCommand;

/// Undoable state built by delegation
///
/// There is no way to write the value except through a command:
///
/// ```compile_fail
/// use undo_state::command::SetCommand;
/// use undo_state::undoable::DelegatedUndoState;
///
/// let mut state = DelegatedUndoState::new();
/// state.execute(Box::new(SetCommand::new(3, "player1")));
/// state.set_value(20);
/// ```
#[derive(Debug, Default)]
pub struct DelegatedUndoState {
    state: ValueState,
    history: CommandHistory,
}

impl DelegatedUndoState {
    /// Create a new state holding 0 with an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command to the inner state and record it
    pub fn execute(&mut self, command: Box<dyn UndoableCommand>) {
        self.history.execute(command, &mut self.state);
    }

    /// Undo the most recent command; no-op on an empty history
    pub fn undo(&mut self) -> Option<String> {
        self.history.undo(&mut self.state)
    }

    /// Current value of the inner state
    pub fn value(&self) -> i32 {
        self.state.value()
    }

    /// Commands recorded so far
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

impl ReadState for DelegatedUndoState {
    fn value(&self) -> i32 {
        self.state.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::commands::{MagicCommand, SetCommand};

    #[test]
    fn test_execute_undo_then_magic() {
        let mut state = DelegatedUndoState::new();
        state.execute(Box::new(SetCommand::new(2, "player1")));
        state.execute(Box::new(SetCommand::new(4, "player2")));
        state.undo();
        assert_eq!(state.value(), 2);

        state.execute(Box::new(MagicCommand::new("player2")));
        assert_eq!(state.value(), 4);
    }

    #[test]
    fn test_undo_without_bypass() {
        let mut state = DelegatedUndoState::new();
        state.execute(Box::new(SetCommand::new(3, "player1")));
        state.execute(Box::new(SetCommand::new(6, "player2")));

        state.undo();
        assert_eq!(state.value(), 3);
    }

    #[test]
    fn test_undo_all_restores_initial() {
        let mut state = DelegatedUndoState::new();
        state.execute(Box::new(SetCommand::new(5, "player1")));
        state.execute(Box::new(MagicCommand::new("player2")));
        state.execute(Box::new(SetCommand::new(-8, "player1")));

        while state.undo().is_some() {}
        assert_eq!(state.value(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_undo_empty_history() {
        let mut state = DelegatedUndoState::new();
        assert_eq!(state.undo(), None);
        assert_eq!(state.value(), 0);
    }

    #[test]
    fn test_read_capability() {
        let mut state = DelegatedUndoState::new();
        state.execute(Box::new(SetCommand::new(12, "player1")));

        let readable: &dyn ReadState = &state;
        assert_eq!(readable.value(), 12);
    }
}
