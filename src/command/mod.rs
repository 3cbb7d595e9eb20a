// Command Pattern for undo
//
// Architecture:
// - ValueState: the single integer commands operate on
// - ReadState trait: read-only capability over any state
// - UndoableCommand trait: apply(), undo(), description()
// - CommandHistory: LIFO stack of applied commands
// - Concrete commands: SetCommand, MagicCommand
//
// The history never owns the state. The undoable variants in `crate::undoable`
// decide how much of the state they expose next to it.

pub mod commands;
pub mod history;
pub mod state;
pub mod trait_def;

pub use commands::{MagicCommand, SetCommand};
pub use history::CommandHistory;
pub use state::{ReadState, ValueState};
pub use trait_def::UndoableCommand;
