// Concrete command implementations

use crate::command::state::ValueState;
use crate::command::trait_def::UndoableCommand;

/// Command to set the value
///
/// Stores the value seen at apply time so undo can put it back.
/// Undo does not consume that value: undoing twice restores it twice.
#[derive(Debug, Clone)]
pub struct SetCommand {
    new_value: i32,
    previous_value: Option<i32>,
    author: String,
}

impl SetCommand {
    /// Create a new SetCommand
    ///
    /// # Arguments
    /// * `value` - The value to assign on apply
    /// * `author` - Who issued the command
    pub fn new(value: i32, author: impl Into<String>) -> Self {
        Self {
            new_value: value,
            previous_value: None,
            author: author.into(),
        }
    }

    /// Value assigned by `apply`
    pub fn new_value(&self) -> i32 {
        self.new_value
    }

    /// Value captured by the last `apply`, if any
    pub fn previous_value(&self) -> Option<i32> {
        self.previous_value
    }
}

impl UndoableCommand for SetCommand {
    fn apply(&mut self, state: &mut ValueState) {
        self.previous_value = Some(state.value());
        state.set_value(self.new_value);
    }

    fn undo(&mut self, state: &mut ValueState) {
        match self.previous_value {
            Some(previous) => state.set_value(previous),
            None => tracing::warn!(
                command = %self.description(),
                "undo called before apply, state left unchanged"
            ),
        }
    }

    fn description(&self) -> String {
        format!("Set value to {} ({})", self.new_value, self.author)
    }

    fn author(&self) -> &str {
        &self.author
    }
}

/// Command that squares the value
///
/// Keeps no previous value: undo takes the integer square root of whatever
/// the state holds at that point. Negative pre-images, overflowed squares and
/// values changed in between are not recovered.
#[derive(Debug, Clone)]
pub struct MagicCommand {
    author: String,
}

impl MagicCommand {
    /// Create a new MagicCommand
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
        }
    }
}

impl UndoableCommand for MagicCommand {
    fn apply(&mut self, state: &mut ValueState) {
        let value = state.value();
        state.set_value(value.wrapping_mul(value));
    }

    fn undo(&mut self, state: &mut ValueState) {
        state.set_value(floor_sqrt(state.value()));
    }

    fn description(&self) -> String {
        format!("Square value ({})", self.author)
    }

    fn author(&self) -> &str {
        &self.author
    }
}

/// `floor(sqrt(value))`, with negative inputs mapping to 0
fn floor_sqrt(value: i32) -> i32 {
    if value < 0 { 0 } else { value.isqrt() }
}
