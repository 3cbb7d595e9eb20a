// Types describing a scripted run over one state

use serde::{Deserialize, Serialize};

/// Which kind of state a scenario drives
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Variant {
    /// Bare ValueState, no history
    Plain,
    /// ExtendedUndoState, setter reachable
    Extended,
    /// DelegatedUndoState, setter hidden
    Delegated,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Variant::Plain => "plain",
            Variant::Extended => "extended",
            Variant::Delegated => "delegated",
        };
        f.write_str(name)
    }
}

/// One step of a scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Step {
    /// Execute a SetCommand
    Set { value: i32, author: String },
    /// Execute a MagicCommand
    Magic { author: String },
    /// Undo the most recent command
    Undo,
    /// Write the value directly, skipping any history
    Overwrite { value: i32 },
    /// Show the current value through the viewer
    Display,
}

impl Step {
    /// Short name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Set { .. } => "Set",
            Step::Magic { .. } => "Magic",
            Step::Undo => "Undo",
            Step::Overwrite { .. } => "Overwrite",
            Step::Display => "Display",
        }
    }

    /// Whether a state of the given variant can perform this step
    pub fn supported_by(&self, variant: Variant) -> bool {
        match (variant, self) {
            (Variant::Plain, Step::Overwrite { .. } | Step::Display) => true,
            (Variant::Plain, _) => false,
            (Variant::Delegated, Step::Overwrite { .. }) => false,
            (Variant::Delegated, _) => true,
            (Variant::Extended, _) => true,
        }
    }
}

/// A named sequence of steps against one fresh state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub variant: Variant,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, variant: Variant, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            variant,
            steps,
        }
    }
}

/// Outcome of running a scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub name: String,
    /// Values shown by each Display step, in order
    pub displayed: Vec<i32>,
    pub final_value: i32,
    /// Commands still on the history at the end (0 for plain states)
    pub history_len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_supports_only_direct_steps() {
        assert!(Step::Overwrite { value: 1 }.supported_by(Variant::Plain));
        assert!(Step::Display.supported_by(Variant::Plain));
        assert!(!Step::Undo.supported_by(Variant::Plain));
        assert!(!Step::Magic { author: "a".into() }.supported_by(Variant::Plain));
    }

    #[test]
    fn test_delegated_rejects_overwrite() {
        assert!(!Step::Overwrite { value: 1 }.supported_by(Variant::Delegated));
        assert!(Step::Undo.supported_by(Variant::Delegated));
        assert!(
            Step::Set {
                value: 1,
                author: "a".into()
            }
            .supported_by(Variant::Delegated)
        );
    }

    #[test]
    fn test_extended_supports_everything() {
        for step in [
            Step::Set {
                value: 1,
                author: "a".into(),
            },
            Step::Magic { author: "a".into() },
            Step::Undo,
            Step::Overwrite { value: 2 },
            Step::Display,
        ] {
            assert!(step.supported_by(Variant::Extended), "{}", step.kind());
        }
    }

    #[test]
    fn test_ron_format() {
        let text = r#"(
            name: "hazard",
            variant: Extended,
            steps: [
                Set(value: 3, author: "player1"),
                Overwrite(value: 20),
                Undo,
                Display,
            ],
        )"#;
        let scenario: Scenario = ron::from_str(text).unwrap();

        assert_eq!(scenario.variant, Variant::Extended);
        assert_eq!(scenario.steps.len(), 4);
        assert_eq!(scenario.steps[1], Step::Overwrite { value: 20 });
    }

    #[test]
    fn test_json_format() {
        let text = r#"{
            "name": "plain",
            "variant": "Plain",
            "steps": [{ "Overwrite": { "value": 8 } }, "Display"]
        }"#;
        let scenario: Scenario = serde_json::from_str(text).unwrap();

        assert_eq!(scenario.variant, Variant::Plain);
        assert_eq!(scenario.steps, vec![Step::Overwrite { value: 8 }, Step::Display]);
    }
}
