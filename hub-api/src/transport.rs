//! REST transport boundary and its reqwest-backed implementation.
//!
//! The API client only depends on [`RestTransport`]; everything that knows
//! about HTTP headers, authentication and the `Link` page chain lives here.

use std::fmt;
use std::future::Future;

use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{HubApiProviderError, HubApiResult};
use crate::types::Credential;

/// One batch of a paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Link to the following batch; `None` on the last page.
    pub next: Option<String>,
}

/// Authenticated, JSON-decoding access to the REST API.
///
/// `path` / `link` is either a resource path relative to the bound endpoint
/// (leading `/`) or an absolute URL previously handed out as [`Page::next`].
pub trait RestTransport {
    /// Fetches a single resource.
    fn get_json<T>(&self, path: &str) -> impl Future<Output = HubApiResult<T>> + Send
    where
        T: DeserializeOwned + Send;

    /// Fetches one page of a list resource together with its next link.
    fn get_page<T>(&self, link: &str) -> impl Future<Output = HubApiResult<Page<T>>> + Send
    where
        T: DeserializeOwned + Send;
}

/// Transport bound to one credential for its whole lifetime.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
    base_api: String, // "https://api.github.com", no trailing slash
    token: String,
}

impl ReqwestTransport {
    /// Wraps a shared HTTP instance with the credential's endpoint and token.
    pub fn new(http: Client, credential: &Credential) -> Self {
        debug!(
            "Creating ReqwestTransport with base_api={}",
            credential.endpoint
        );
        Self {
            http,
            base_api: credential.endpoint.trim_end_matches('/').to_string(),
            token: credential.token.clone(),
        }
    }

    /// Turns a path or page link into a full URL.
    ///
    /// Absolute links must share scheme, host and port with the endpoint;
    /// the token is never sent anywhere else.
    fn resolve(&self, link: &str) -> HubApiResult<String> {
        if !(link.starts_with("http://") || link.starts_with("https://")) {
            return Ok(format!("{}/{}", self.base_api, link.trim_start_matches('/')));
        }

        let same_origin = match (Url::parse(link), Url::parse(&self.base_api)) {
            (Ok(l), Ok(b)) => {
                l.scheme() == b.scheme()
                    && l.host_str() == b.host_str()
                    && l.port_or_known_default() == b.port_or_known_default()
            }
            _ => false,
        };

        if !same_origin {
            return Err(HubApiProviderError::InvalidResponse(format!(
                "page link {} is outside endpoint {}",
                link, self.base_api
            ))
            .into());
        }

        Ok(link.to_string())
    }

    fn request(&self, link: &str) -> HubApiResult<RequestBuilder> {
        let url = self.resolve(link)?;
        debug!("GET {}", url);

        Ok(self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/vnd.github+json"))
    }

    async fn send(&self, link: &str) -> HubApiResult<Response> {
        let resp = self.request(link)?.send().await?.error_for_status()?;
        Ok(resp)
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_api", &self.base_api)
            .finish_non_exhaustive()
    }
}

impl RestTransport for ReqwestTransport {
    async fn get_json<T>(&self, path: &str) -> HubApiResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let resp = self.send(path).await?;
        Ok(resp.json().await?)
    }

    async fn get_page<T>(&self, link: &str) -> HubApiResult<Page<T>>
    where
        T: DeserializeOwned + Send,
    {
        let resp = self.send(link).await?;
        read_page(resp).await
    }
}

/// Decodes a list body and picks the next link from its `Link` header.
async fn read_page<T: DeserializeOwned>(resp: Response) -> HubApiResult<Page<T>> {
    let next = resp
        .headers()
        .get(LINK)
        .and_then(|h| h.to_str().ok())
        .and_then(next_page_link);

    let items: Vec<T> = resp.json().await?;
    debug!("page: items={}, has_next={}", items.len(), next.is_some());

    Ok(Page { items, next })
}

/// Extracts the `rel="next"` target from a `Link` header.
///
/// Headers look like:
/// `<https://api.github.com/user/repos?page=2>; rel="next", <https://api.github.com/user/repos?page=5>; rel="last"`
pub fn next_page_link(link_header: &str) -> Option<String> {
    for part in link_header.split(',') {
        let mut url = None;
        let mut is_next = false;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(rel) = segment.strip_prefix("rel=") {
                // rel may carry several space-separated values
                is_next = rel.trim_matches('"').split_whitespace().any(|r| r == "next");
            }
        }

        if let (Some(url), true) = (url, is_next) {
            if !url.is_empty() {
                return Some(url.to_string());
            }
        }
    }

    None
}
