// Undoable states
//
// Two ways of putting a CommandHistory next to a ValueState:
// - extended: is-a ValueState (Deref/DerefMut), full mutable surface exposed
// - delegated: has-a private ValueState, only execute/undo/value exposed

pub mod delegated;
pub mod extended;

pub use delegated::DelegatedUndoState;
pub use extended::ExtendedUndoState;
