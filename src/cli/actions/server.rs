use crate::{
    api,
    provider::{userpool::UserPoolClient, Config, IdentityProvider},
};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub user_pool_id: String,
    pub client_id: String,
    pub provider_url: String,
}

/// Execute the server action.
///
/// Builds the immutable provider configuration and a single shared provider
/// handle, then hands both to the HTTP layer.
///
/// # Errors
///
/// Returns an error if the provider URL is invalid, the HTTP client cannot be
/// built, or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        port = args.port,
        user_pool_id = %args.user_pool_id,
        client_id = %args.client_id,
        provider_url = %args.provider_url,
        "Starting user pool gateway"
    );

    let config = Config::new(args.user_pool_id, args.client_id, &args.provider_url)?;

    let provider: Arc<dyn IdentityProvider> = Arc::new(UserPoolClient::new(config)?);

    api::serve(args.port, provider).await
}
