//! Errors returned by the API client, the transport and the endpoint helpers.

use thiserror::Error;

/// Result type used throughout hub-api.
pub type HubApiResult<T> = Result<T, HubApiError>;

/// Every fallible operation in this crate fails with one of these.
#[derive(Debug, Error)]
pub enum HubApiError {
    /// The request reached (or tried to reach) the API and failed.
    #[error(transparent)]
    Provider(#[from] HubApiProviderError),

    /// Bad local input: no token, or an endpoint that is not a URL.
    #[error(transparent)]
    Config(#[from] HubApiConfigError),
}

/// Why a REST call failed, classified from the reqwest error.
#[derive(Debug, Error)]
pub enum HubApiProviderError {
    /// 401: token missing, expired or revoked.
    #[error("unauthorized")]
    Unauthorized,

    /// 403: token lacks the scope, or the resource is hidden from it.
    #[error("forbidden")]
    Forbidden,

    /// 404: unknown owner, repository, commit or path.
    #[error("not found")]
    NotFound,

    /// Rate limited (HTTP 429). Reported only, never retried.
    #[error("rate limited")]
    RateLimited,

    /// Any 5xx answer.
    #[error("server error: status {0}")]
    Server(u16),

    /// Remaining non-2xx statuses, e.g. 422 for an unprocessable sha.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// The request did not complete in time.
    #[error("timeout")]
    Timeout,

    /// No HTTP status at all: DNS, connect or TLS failure, reset stream.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx body that is not the expected JSON shape, or a page link
    /// pointing outside the endpoint.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Problems with the credential or endpoint handed to this crate.
#[derive(Debug, Error)]
pub enum HubApiConfigError {
    /// `HUB_API_TOKEN` unset or blank.
    #[error("missing api token")]
    MissingToken,

    /// Endpoint string is not an absolute URL with a host.
    #[error("invalid base api url: {0}")]
    InvalidBaseUrl(String),
}

// ===== `?` conversions =====

impl From<reqwest::Error> for HubApiError {
    fn from(e: reqwest::Error) -> Self {
        HubApiError::Provider(HubApiProviderError::from(e))
    }
}

impl From<serde_json::Error> for HubApiError {
    fn from(e: serde_json::Error) -> Self {
        HubApiError::Provider(HubApiProviderError::InvalidResponse(e.to_string()))
    }
}

// ===== reqwest::Error classification =====

impl From<reqwest::Error> for HubApiProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return HubApiProviderError::Timeout;
        }

        if let Some(status) = e.status() {
            return HubApiProviderError::from_status(status.as_u16());
        }

        if e.is_decode() {
            return HubApiProviderError::InvalidResponse(e.to_string());
        }

        HubApiProviderError::Network(e.to_string())
    }
}

impl HubApiProviderError {
    /// Classifies a non-2xx HTTP status code.
    pub fn from_status(code: u16) -> Self {
        match code {
            401 => HubApiProviderError::Unauthorized,
            403 => HubApiProviderError::Forbidden,
            404 => HubApiProviderError::NotFound,
            429 => HubApiProviderError::RateLimited,
            500..=599 => HubApiProviderError::Server(code),
            _ => HubApiProviderError::HttpStatus(code),
        }
    }
}
