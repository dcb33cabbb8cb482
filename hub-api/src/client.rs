//! Authenticated API client (REST v3) for repositories, commits and users.
//!
//! Endpoints used:
//!   * GET /user
//!   * GET /user/repos (paginated through `Link` headers)
//!   * GET /repos/{owner}/{repo}
//!   * GET /repos/{owner}/{repo}/commits/{sha}
//!   * GET /search/users?q={email} in:email type:user

use reqwest::Client;
use tracing::debug;

use crate::config::USER_AGENT;
use crate::errors::HubApiResult;
use crate::transport::{ReqwestTransport, RestTransport};
use crate::types::{Commit, Credential, Repository, SearchResults, UserSummary};

/// Client bound to a single credential.
///
/// Every operation is independent and only reads the bound transport, so a
/// cloned client can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Builds a reqwest-backed client for `credential`.
    pub fn new(credential: &Credential) -> HubApiResult<Self> {
        debug!("Initializing api client: endpoint={}", credential.endpoint);

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self::with_transport(ReqwestTransport::new(http, credential)))
    }
}

impl<T: RestTransport> ApiClient<T> {
    /// Wraps an already authenticated transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Fetches the account the credential belongs to.
    pub async fn fetch_user(&self) -> HubApiResult<UserSummary> {
        self.transport.get_json("/user").await
    }

    /// Lists every repository the account can see, personal and
    /// organization, public and private.
    ///
    /// Pages are requested strictly one after another, following the next
    /// link until a page carries none. Any failing page fails the whole call.
    pub async fn fetch_repos(&self) -> HubApiResult<Vec<Repository>> {
        let mut repos = Vec::new();
        let mut link = Some(String::from("/user/repos"));

        while let Some(l) = link {
            debug!("fetch_repos page: {}", l);

            let page = self.transport.get_page::<Repository>(&l).await?;
            repos.extend(page.items);

            link = page.next;
        }

        debug!("fetch_repos done: count={}", repos.len());
        Ok(repos)
    }

    /// Fetches one repository. Remote errors (including not found) propagate.
    pub async fn fetch_repository(&self, owner: &str, name: &str) -> HubApiResult<Repository> {
        let path = format!("/repos/{}/{}", owner, name);
        debug!("fetch_repository: {}", path);

        self.transport.get_json(&path).await
    }

    /// Fetches one commit by full or abbreviated sha.
    ///
    /// Returns `None` on any failure; callers treat the commit as unknown.
    pub async fn fetch_commit(&self, owner: &str, name: &str, sha: &str) -> Option<Commit> {
        let path = format!("/repos/{}/{}/commits/{}", owner, name, sha);
        debug!("fetch_commit: {}", path);

        match self.transport.get_json(&path).await {
            Ok(commit) => Some(commit),
            Err(err) => {
                debug!(%err, "fetch_commit failed, treating as missing");
                None
            }
        }
    }

    /// Finds the best matching user account for a public email address.
    ///
    /// Organizations are excluded by the query. Returns `None` when the
    /// search fails or matches nothing.
    pub async fn search_for_user_with_email(&self, email: &str) -> Option<UserSummary> {
        let query = format!("{} in:email type:user", email);
        let path = format!("/search/users?q={}", urlencoding::encode(&query));
        debug!("search_for_user_with_email: {}", path);

        match self
            .transport
            .get_json::<SearchResults<UserSummary>>(&path)
            .await
        {
            Ok(results) => results.items.into_iter().next(),
            Err(err) => {
                debug!(%err, "user search failed, treating as no match");
                None
            }
        }
    }
}
