// Scripted scenarios
//
// A scenario is a fixed sequence of steps against one fresh state. The demo
// binary runs the builtin ones, or whatever it is pointed at on disk.

pub mod builtin;
pub mod loader;
pub mod runner;
pub mod types;

pub use loader::{load_scenarios, parse_scenarios, ScenarioFormat};
pub use runner::run;
pub use types::{Scenario, ScenarioReport, Step, Variant};

use thiserror::Error;

/// Scenario error types
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported scenario file format: {0}")]
    UnsupportedFormat(String),

    #[error("Scenario '{scenario}': step {index} ({step}) is not available on a {variant} state")]
    UnsupportedStep {
        scenario: String,
        index: usize,
        step: &'static str,
        variant: Variant,
    },
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
