//! Minimal authenticated client for the hosted source-control REST API.
//!
//! * [`ApiClient`] lists and fetches repositories, commits and users for
//!   one bound [`Credential`].
//! * [`endpoint`] maps API endpoints to web URLs and picks the credential
//!   matching an endpoint.
//!
//! HTTP specifics sit behind [`RestTransport`], so the client can run over
//! any transport that authenticates, decodes JSON and follows page links.

mod client;
mod config;
pub mod endpoint;
mod errors;
pub mod transport;
mod types;

pub use client::ApiClient;
pub use config::{ENDPOINT_VAR, TOKEN_VAR, USER_AGENT};
pub use endpoint::{
    DOTCOM_API_ENDPOINT, DOTCOM_HTML_URL, get_dotcom_api_endpoint, get_enterprise_api_url,
    get_html_url, get_user_for_endpoint,
};
pub use errors::{HubApiConfigError, HubApiError, HubApiProviderError, HubApiResult};
pub use transport::{Page, ReqwestTransport, RestTransport, next_page_link};
pub use types::{Commit, Credential, Repository, SearchResults, UserKind, UserSummary};
