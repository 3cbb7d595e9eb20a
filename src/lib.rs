// undo_state - Library exports for the demo binary, tests and benchmarks

pub mod command;
pub mod scenario;
pub mod ui;
pub mod undoable;

// Re-export commonly used types for convenience
pub use command::{
    CommandHistory, MagicCommand, ReadState, SetCommand, UndoableCommand, ValueState,
};
pub use scenario::{Scenario, ScenarioError, ScenarioReport, Step, Variant};
pub use ui::Viewer;
pub use undoable::{DelegatedUndoState, ExtendedUndoState};
