//! # GitHub Module
//!
//! Everything that knows about the GitHub REST API: the response models, the
//! HTTP gateway, the failure taxonomy, and the projections that filter and
//! sort a fetched repository list.
//!
//! ## Data Flow
//!
//! ```text
//! username ──> client::search ──> SearchResult ──> projection ──> ui::panels
//!                  │
//!                  └──> FetchError ──> user_message()
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod projection;

pub use client::{
    classify_profile_status, classify_repositories_status, search, Gateway, GitHubClient,
    DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use error::{FetchError, FetchResult};
pub use models::{Profile, Repository, SearchResult};
pub use projection::{distinct_languages, filter_and_sort, RepoView, SortKey};
