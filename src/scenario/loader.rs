// Loading scenarios from RON or JSON files

use crate::scenario::types::Scenario;
use crate::scenario::{ScenarioError, ScenarioResult};
use std::path::Path;

/// On-disk formats for scenario files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Ron,
    Json,
}

impl ScenarioFormat {
    /// Pick the format from a file extension (`.ron` or `.json`)
    pub fn from_path(path: &Path) -> ScenarioResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(ScenarioFormat::Ron),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ScenarioFormat::Json),
            _ => Err(ScenarioError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a list of scenarios
///
/// The document is a sequence of scenarios in either format. Each scenario
/// is validated against its variant.
pub fn parse_scenarios(text: &str, format: ScenarioFormat) -> ScenarioResult<Vec<Scenario>> {
    let scenarios: Vec<Scenario> = match format {
        ScenarioFormat::Ron => ron::from_str(text)?,
        ScenarioFormat::Json => serde_json::from_str(text)?,
    };

    for scenario in &scenarios {
        scenario.validate()?;
    }

    Ok(scenarios)
}

/// Load and validate the scenarios in a file
///
/// # Errors
/// - `UnsupportedFormat` if the extension is neither `.ron` nor `.json`
/// - `Io`, `Ron` or `Json` if the file cannot be read or parsed
/// - `UnsupportedStep` if a scenario uses a step its variant lacks
pub fn load_scenarios(path: &Path) -> ScenarioResult<Vec<Scenario>> {
    let format = ScenarioFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)?;
    let scenarios = parse_scenarios(&text, format)?;

    tracing::debug!(
        path = %path.display(),
        count = scenarios.len(),
        "loaded scenarios"
    );

    Ok(scenarios)
}
