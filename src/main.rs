use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use undo_state::scenario::{self, builtin, load_scenarios};
use undo_state::{Scenario, ScenarioError, Viewer};

// Log verbosity when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    // Logs go to stderr; stdout only carries displayed values
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    let result = if paths.is_empty() {
        run_all(&builtin::inheritance()).and_then(|()| run_all(&builtin::delegation()))
    } else {
        paths
            .iter()
            .try_for_each(|path| load_scenarios(path).and_then(|scenarios| run_all(&scenarios)))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_all(scenarios: &[Scenario]) -> Result<(), ScenarioError> {
    let mut viewer = Viewer::stdout();
    for scenario in scenarios {
        let report = scenario::run(scenario, &mut viewer)?;
        tracing::info!(
            scenario = %report.name,
            final_value = report.final_value,
            history = report.history_len,
            "scenario finished"
        );
    }
    Ok(())
}
