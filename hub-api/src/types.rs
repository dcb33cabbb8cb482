//! Read-only projections of remote API entities plus the bound credential.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Access token paired with the API endpoint it is valid for.
///
/// Owned by the credential store; this crate only reads them, apart from
/// `Credential::from_env` in the config module.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    /// API base, e.g. "https://api.github.com" or "https://ghe.corp/api/v3".
    pub endpoint: String,
}

impl Credential {
    pub fn new(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: endpoint.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Account flavour of a [`UserSummary`].
///
/// The remote also reports `Bot`, `Mannequin` and similar individual
/// account types; everything that is not an organization reads as `User`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum UserKind {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "org")]
    Org,
}

impl<'de> Deserialize<'de> for UserKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "org" | "Organization" => UserKind::Org,
            _ => UserKind::User,
        })
    }
}

/// Minimal projection of an individual or organization account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    #[serde(rename = "type")]
    pub kind: UserKind,
    pub login: String,
    pub avatar_url: String,
    /// Only present when the account exposes a public email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Repository as returned by the repos endpoints (subset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub clone_url: String,
    pub html_url: String,
    pub name: String,
    pub owner: UserSummary,
    pub private: bool,
    pub fork: bool,
    pub stargazers_count: u64,
}

/// A single commit; `author` is the platform account linked to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    pub sha: String,
    pub author: UserSummary,
}

/// Envelope of the search endpoints; items come best match first.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults<T> {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<T>,
}
