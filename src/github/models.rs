//! # GitHub API Models
//!
//! Response shapes for the two endpoints Octoscope calls. Only the fields the
//! panels display are deserialized; everything else in the payload is ignored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A GitHub user profile from `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

impl Profile {
    /// The name to headline the profile card with, falling back to the login
    /// when the name is missing or empty.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    /// Kept verbatim; see [`Repository::updated`].
    pub updated_at: String,
}

impl Repository {
    /// Parse `updated_at` as calendar time.
    ///
    /// Accepts RFC 3339 timestamps (what the API sends) and bare `YYYY-MM-DD`
    /// dates, which are taken as midnight UTC.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.updated_at) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.updated_at, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

/// Everything one successful search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub profile: Profile,
    /// In the order the API returned them.
    pub repositories: Vec<Repository>,
}
