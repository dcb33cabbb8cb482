//! Pure helpers mapping API endpoints to web URLs and to stored credentials.

use reqwest::Url;

use crate::errors::{HubApiConfigError, HubApiResult};
use crate::types::Credential;

/// API base of the public hosted service.
pub const DOTCOM_API_ENDPOINT: &str = "https://api.github.com";

/// Web front end of the public hosted service. Only the public service
/// serves its API and web UI from different hosts.
pub const DOTCOM_HTML_URL: &str = "https://github.com";

/// Returns the API base of the public hosted service.
pub fn get_dotcom_api_endpoint() -> &'static str {
    DOTCOM_API_ENDPOINT
}

/// Derives the browser-facing URL for an API endpoint.
///
/// The public endpoint maps to [`DOTCOM_HTML_URL`]. Any other endpoint is a
/// self-hosted deployment sharing its host with the web UI, so only
/// `{scheme}://{hostname}` is kept (path, query and port are dropped).
///
/// Returns `InvalidBaseUrl` when `endpoint` does not parse as an absolute
/// URL with a host.
pub fn get_html_url(endpoint: &str) -> HubApiResult<String> {
    if endpoint == DOTCOM_API_ENDPOINT {
        return Ok(DOTCOM_HTML_URL.to_string());
    }

    let (scheme, host) = scheme_and_host(endpoint)?;
    Ok(format!("{scheme}://{host}"))
}

/// Builds the REST base of a self-hosted deployment from any URL on its host.
pub fn get_enterprise_api_url(endpoint: &str) -> HubApiResult<String> {
    let (scheme, host) = scheme_and_host(endpoint)?;
    Ok(format!("{scheme}://{host}/api/v3"))
}

/// Picks the first credential whose endpoint equals `endpoint` exactly.
pub fn get_user_for_endpoint<'a>(
    credentials: &'a [Credential],
    endpoint: &str,
) -> Option<&'a Credential> {
    credentials.iter().find(|c| c.endpoint == endpoint)
}

fn scheme_and_host(endpoint: &str) -> HubApiResult<(String, String)> {
    let invalid = || HubApiConfigError::InvalidBaseUrl(endpoint.to_string());

    let url = Url::parse(endpoint).map_err(|_| invalid())?;
    let host = url.host_str().ok_or_else(invalid)?;

    Ok((url.scheme().to_string(), host.to_string()))
}
