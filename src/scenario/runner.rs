// Scenario runner

use crate::command::commands::{MagicCommand, SetCommand};
use crate::command::state::{ReadState, ValueState};
use crate::command::trait_def::UndoableCommand;
use crate::scenario::types::{Scenario, ScenarioReport, Step, Variant};
use crate::scenario::{ScenarioError, ScenarioResult};
use crate::ui::viewer::Viewer;
use crate::undoable::{DelegatedUndoState, ExtendedUndoState};
use std::io::Write;

impl Scenario {
    /// Check every step against the scenario's variant
    ///
    /// # Errors
    /// Returns `UnsupportedStep` for the first step the variant cannot
    /// perform, e.g. an `Overwrite` on a delegated state.
    pub fn validate(&self) -> ScenarioResult<()> {
        match self
            .steps
            .iter()
            .enumerate()
            .find(|(_, step)| !step.supported_by(self.variant))
        {
            Some((index, step)) => Err(ScenarioError::UnsupportedStep {
                scenario: self.name.clone(),
                index,
                step: step.kind(),
                variant: self.variant,
            }),
            None => Ok(()),
        }
    }
}

/// The three state kinds behind one interface for the runner
///
/// Each arm only calls what its concrete type really offers.
enum Target {
    Plain(ValueState),
    Extended(ExtendedUndoState),
    Delegated(DelegatedUndoState),
}

impl Target {
    fn new(variant: Variant) -> Self {
        match variant {
            Variant::Plain => Target::Plain(ValueState::new()),
            Variant::Extended => Target::Extended(ExtendedUndoState::new()),
            Variant::Delegated => Target::Delegated(DelegatedUndoState::new()),
        }
    }

    fn readable(&self) -> &dyn ReadState {
        match self {
            Target::Plain(state) => state,
            Target::Extended(state) => state,
            Target::Delegated(state) => state,
        }
    }

    fn history_len(&self) -> usize {
        match self {
            Target::Plain(_) => 0,
            Target::Extended(state) => state.history().len(),
            Target::Delegated(state) => state.history().len(),
        }
    }

    /// Returns false when the state has no way to perform the step
    fn apply(&mut self, step: &Step) -> bool {
        match (self, step) {
            (Target::Plain(state), Step::Overwrite { value }) => state.set_value(*value),
            (Target::Extended(state), Step::Overwrite { value }) => state.set_value(*value),
            (Target::Extended(state), Step::Undo) => {
                state.undo();
            }
            (Target::Delegated(state), Step::Undo) => {
                state.undo();
            }
            (Target::Extended(state), step) => match command_for(step) {
                Some(command) => state.execute(command),
                None => return false,
            },
            (Target::Delegated(state), step) => match command_for(step) {
                Some(command) => state.execute(command),
                None => return false,
            },
            (Target::Plain(_), _) => return false,
        }
        true
    }
}

fn command_for(step: &Step) -> Option<Box<dyn UndoableCommand>> {
    match step {
        Step::Set { value, author } => Some(Box::new(SetCommand::new(*value, author.clone()))),
        Step::Magic { author } => Some(Box::new(MagicCommand::new(author.clone()))),
        _ => None,
    }
}

/// Run a scenario against a fresh state, displaying through `viewer`
///
/// The scenario is validated first; nothing is displayed if it fails.
///
/// # Errors
/// - `UnsupportedStep` if validation fails
/// - `Io` if the viewer cannot write
pub fn run<W: Write>(scenario: &Scenario, viewer: &mut Viewer<W>) -> ScenarioResult<ScenarioReport> {
    scenario.validate()?;
    tracing::info!(
        scenario = %scenario.name,
        variant = %scenario.variant,
        steps = scenario.steps.len(),
        "running scenario"
    );

    let mut target = Target::new(scenario.variant);
    let mut displayed = Vec::new();

    for (index, step) in scenario.steps.iter().enumerate() {
        if let Step::Display = step {
            viewer.display(target.readable())?;
            displayed.push(target.readable().value());
            continue;
        }

        if !target.apply(step) {
            // validate() already ruled this out
            return Err(ScenarioError::UnsupportedStep {
                scenario: scenario.name.clone(),
                index,
                step: step.kind(),
                variant: scenario.variant,
            });
        }
    }

    Ok(ScenarioReport {
        name: scenario.name.clone(),
        displayed,
        final_value: target.readable().value(),
        history_len: target.history_len(),
    })
}
