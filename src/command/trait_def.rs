// UndoableCommand trait definition

use crate::command::state::ValueState;

/// Trait for reversible operations over a `ValueState`
///
/// A command keeps whatever private data it needs to reverse itself. Neither
/// `apply` nor `undo` can fail: a command that was never applied, or whose
/// state was changed behind its back, simply produces whatever value its
/// undo rule computes.
///
/// # Example
/// ```
/// use undo_state::command::state::ValueState;
/// use undo_state::command::trait_def::UndoableCommand;
///
/// struct AddOneCommand {
///     author: String,
/// }
///
/// impl UndoableCommand for AddOneCommand {
///     fn apply(&mut self, state: &mut ValueState) {
///         state.set_value(state.value() + 1);
///     }
///
///     fn undo(&mut self, state: &mut ValueState) {
///         state.set_value(state.value() - 1);
///     }
///
///     fn description(&self) -> String {
///         format!("Add one ({})", self.author)
///     }
///
///     fn author(&self) -> &str {
///         &self.author
///     }
/// }
///
/// let mut state = ValueState::new();
/// let mut cmd = AddOneCommand { author: "player1".into() };
/// cmd.apply(&mut state);
/// assert_eq!(state.value(), 1);
/// cmd.undo(&mut state);
/// assert_eq!(state.value(), 0);
/// ```
pub trait UndoableCommand {
    /// Apply the command to the state
    ///
    /// Should capture anything needed by `undo` at this point.
    fn apply(&mut self, state: &mut ValueState);

    /// Reverse the effect of the last `apply`
    fn undo(&mut self, state: &mut ValueState);

    /// Human-readable description, e.g. "Set value to 4 (player2)"
    fn description(&self) -> String;

    /// Who issued the command. Informational only.
    fn author(&self) -> &str;
}
