//! Environment-driven configuration.

use tracing::debug;

use crate::endpoint::DOTCOM_API_ENDPOINT;
use crate::errors::{HubApiConfigError, HubApiResult};
use crate::types::Credential;

/// User agent sent with every request so the remote can identify the client.
pub const USER_AGENT: &str = "hub-api/0.1";

/// Environment variable holding the access token.
pub const TOKEN_VAR: &str = "HUB_API_TOKEN";

/// Environment variable overriding the API endpoint.
pub const ENDPOINT_VAR: &str = "HUB_API_ENDPOINT";

impl Credential {
    /// Reads a credential from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// `HUB_API_ENDPOINT` defaults to the public API endpoint.
    pub fn from_env() -> HubApiResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> HubApiResult<Self> {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(HubApiConfigError::MissingToken)?;

        let endpoint = lookup(ENDPOINT_VAR)
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DOTCOM_API_ENDPOINT.to_string());

        Ok(Credential { token, endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HubApiError;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn endpoint_defaults_to_dotcom() {
        let c = Credential::from_lookup(lookup(&[(TOKEN_VAR, "abc")])).unwrap();
        assert_eq!(c.token, "abc");
        assert_eq!(c.endpoint, DOTCOM_API_ENDPOINT);
    }

    #[test]
    fn endpoint_override() {
        let c = Credential::from_lookup(lookup(&[
            (TOKEN_VAR, " abc "),
            (ENDPOINT_VAR, "https://ghe.corp/api/v3"),
        ]))
        .unwrap();
        assert_eq!(c.token, "abc");
        assert_eq!(c.endpoint, "https://ghe.corp/api/v3");
    }

    #[test]
    fn blank_token_is_missing() {
        let err = Credential::from_lookup(lookup(&[(TOKEN_VAR, "  ")])).unwrap_err();
        assert!(matches!(
            err,
            HubApiError::Config(HubApiConfigError::MissingToken)
        ));
    }
}
