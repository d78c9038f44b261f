//! Identity provider interface.
//!
//! The provider owns all account and session state. The gateway only holds an
//! immutable [`Config`] and a shared connection handle, both created once at
//! process start and safe to use across concurrent requests.

pub mod userpool;

use anyhow::Result;
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;
use url::Url;

/// Immutable provider configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    pub user_pool_id: String,
    pub client_id: String,
    pub endpoint: Url,
}

impl Config {
    /// Build a configuration, validating the provider endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn new(user_pool_id: String, client_id: String, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;

        Ok(Self {
            user_pool_id,
            client_id,
            endpoint,
        })
    }
}

/// Operations the gateway needs from the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register an account with a temporary credential, suppressing the
    /// provider's default invitation message and requesting email delivery for
    /// further provider communications. Returns the raw provider user record.
    async fn create_user(&self, email: &str, temporary_password: &SecretString) -> Result<Value>;

    /// Validate credentials and obtain session tokens. Returns only the
    /// authentication result (tokens and expiry), not the provider envelope.
    async fn authenticate(&self, email: &str, password: &SecretString) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_valid_endpoint() {
        let config = Config::new(
            "us-east-1_9AbCdEfGh".to_string(),
            "4client2id0example".to_string(),
            "https://cognito-idp.us-east-1.amazonaws.com",
        )
        .expect("config should build");

        assert_eq!(config.user_pool_id, "us-east-1_9AbCdEfGh");
        assert_eq!(config.client_id, "4client2id0example");
        assert_eq!(config.endpoint.scheme(), "https");
    }

    #[test]
    fn test_config_invalid_endpoint() {
        let result = Config::new(
            "us-east-1_9AbCdEfGh".to_string(),
            "4client2id0example".to_string(),
            "not a url",
        );

        assert!(result.is_err());
    }
}
