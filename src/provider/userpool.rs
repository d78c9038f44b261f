//! Cognito-compatible user pool client.
//!
//! Speaks the `x-amz-json-1.1` target-header protocol: every operation is a
//! `POST` to the provider endpoint with an `X-Amz-Target` header naming the
//! operation and a JSON body carrying its parameters. Request signing, when
//! required, is expected to be handled by the deployment (sidecar or
//! provider-compatible local endpoint).

use crate::{
    provider::{Config, IdentityProvider},
    APP_USER_AGENT,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use tracing::{debug, instrument};

const TARGET_CREATE_USER: &str = "AWSCognitoIdentityProviderService.AdminCreateUser";
const TARGET_INITIATE_AUTH: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Shared, stateless handle to the user pool. Cheap to clone, safe to share
/// across concurrent requests.
#[derive(Debug, Clone)]
pub struct UserPoolClient {
    config: Config,
    http: Client,
}

impl UserPoolClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let http = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self { config, http })
    }

    async fn call(&self, target: &str, params: &Value) -> Result<Value> {
        let response = self
            .http
            .post(self.config.endpoint.clone())
            .header("X-Amz-Target", target)
            .header(CONTENT_TYPE, AMZ_JSON)
            .json(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let json_response: Value = response.json().await.unwrap_or_default();

            return Err(anyhow!(
                "{} - {}, {}",
                target,
                status,
                json_response["message"]
                    .as_str()
                    .or_else(|| json_response["__type"].as_str())
                    .unwrap_or("")
            ));
        }

        Ok(response.json().await?)
    }
}

// Parameter builders are free functions so the wire shapes stay testable
// without a provider in the loop.

fn create_user_params(config: &Config, email: &str, temporary_password: &SecretString) -> Value {
    json!({
        "UserPoolId": config.user_pool_id,
        "Username": email,
        "TemporaryPassword": temporary_password.expose_secret(),
        "MessageAction": "SUPPRESS",
        "DesiredDeliveryMediums": ["EMAIL"],
        "UserAttributes": [{ "Name": "email", "Value": email }],
    })
}

fn initiate_auth_params(config: &Config, email: &str, password: &SecretString) -> Value {
    json!({
        "AuthFlow": "USER_PASSWORD_AUTH",
        "ClientId": config.client_id,
        "AuthParameters": {
            "USERNAME": email,
            "PASSWORD": password.expose_secret(),
        },
    })
}

#[async_trait]
impl IdentityProvider for UserPoolClient {
    #[instrument(skip(self, temporary_password), fields(user_pool_id = %self.config.user_pool_id))]
    async fn create_user(&self, email: &str, temporary_password: &SecretString) -> Result<Value> {
        debug!("Registering user: {email}");

        let params = create_user_params(&self.config, email, temporary_password);
        let result = self.call(TARGET_CREATE_USER, &params).await?;

        debug!("Provider register response: {result}");

        Ok(result)
    }

    #[instrument(skip(self, password), fields(client_id = %self.config.client_id))]
    async fn authenticate(&self, email: &str, password: &SecretString) -> Result<Value> {
        debug!("Logging in user: {email}");

        let params = initiate_auth_params(&self.config, email, password);
        let result = self.call(TARGET_INITIATE_AUTH, &params).await?;

        // Tokens stay out of the logs.
        debug!("Provider login response received");

        result
            .get("AuthenticationResult")
            .cloned()
            .ok_or_else(|| anyhow!("Error parsing provider response: no AuthenticationResult found"))
    }
}
