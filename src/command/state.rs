// ValueState - The minimal mutable state that commands operate on
//
// Holds a single integer. Commands receive `&mut ValueState`; everything else
// that only needs to look at the value should go through `ReadState`.

/// Read-only capability over a state
///
/// Anything that must observe a value without being able to change it
/// (the viewer, for instance) takes `&dyn ReadState` instead of a concrete
/// state type. `ValueState` and both undoable variants implement it.
pub trait ReadState {
    /// Current value
    fn value(&self) -> i32;
}

/// Single mutable integer, zero by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueState {
    value: i32,
}

impl ValueState {
    /// Create a new ValueState holding 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Overwrite the current value
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl ReadState for ValueState {
    fn value(&self) -> i32 {
        self.value
    }
}
