use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Start the CLI
///
/// Parses the command line, initializes logging and returns the action to run.
///
/// # Errors
///
/// Returns an error if argument parsing or telemetry setup fails.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = matches.get_one::<u8>("verbosity").map_or(0, |&v| v);

    telemetry::init(verbosity)?;

    dispatch::handler(&matches)
}
