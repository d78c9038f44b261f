use crate::cli::actions::{server, Action};
use anyhow::{Context, Result};

/// Map parsed arguments to an action.
///
/// # Errors
///
/// Returns an error if a required argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    let user_pool_id = matches
        .get_one::<String>("user-pool-id")
        .cloned()
        .context("missing required argument: --user-pool-id")?;

    let client_id = matches
        .get_one::<String>("client-id")
        .cloned()
        .context("missing required argument: --client-id")?;

    let provider_url = matches
        .get_one::<String>("provider-url")
        .cloned()
        .context("missing required argument: --provider-url")?;

    Ok(Action::Server(server::Args {
        port,
        user_pool_id,
        client_id,
        provider_url,
    }))
}
