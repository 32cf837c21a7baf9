//! # Repository Projection
//!
//! Derives what the repositories panel shows from the fetched sequence: the
//! set of languages to offer in the filter, and the filtered + sorted list.
//! Nothing here mutates its input; every call returns a fresh `Vec`.

use crate::github::models::Repository;
use std::cmp::Ordering;
use std::fmt;

/// Order in which repositories are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Most recently updated first.
    #[default]
    Updated,
    /// Most starred first.
    Stars,
    /// Most forked first.
    Forks,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Updated => "Recently Updated",
            SortKey::Stars => "Most Starred",
            SortKey::Forks => "Most Forked",
        }
    }

    /// The next key in cycle order (wraps around).
    pub fn next(self) -> Self {
        match self {
            SortKey::Updated => SortKey::Stars,
            SortKey::Stars => SortKey::Forks,
            SortKey::Forks => SortKey::Updated,
        }
    }

    /// The previous key in cycle order (wraps around).
    pub fn previous(self) -> Self {
        match self {
            SortKey::Updated => SortKey::Forks,
            SortKey::Stars => SortKey::Updated,
            SortKey::Forks => SortKey::Stars,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The filter/sort selection the repositories panel is rendered with.
///
/// A fresh search always starts from `RepoView::default()`: all languages,
/// most recently updated first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoView {
    /// `None` means "All Languages".
    pub language: Option<String>,
    pub sort: SortKey,
}

impl RepoView {
    pub fn new(language: Option<String>, sort: SortKey) -> Self {
        Self { language, sort }
    }

    /// Apply this view to a fetched sequence.
    pub fn project(&self, repos: &[Repository]) -> Vec<Repository> {
        filter_and_sort(repos, self.language.as_deref(), self.sort)
    }
}

/// Distinct non-null languages, in order of first appearance.
pub fn distinct_languages(repos: &[Repository]) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
        if !languages.iter().any(|l| l == lang) {
            languages.push(lang.to_string());
        }
    }
    languages
}

/// Filter by exact language (when given) and sort descending by `sort`.
///
/// The sort is stable, so repositories that tie keep their input order.
/// Repositories whose timestamp does not parse sort after all others.
pub fn filter_and_sort(
    repos: &[Repository],
    language: Option<&str>,
    sort: SortKey,
) -> Vec<Repository> {
    let mut projected: Vec<Repository> = match language {
        Some(lang) => repos
            .iter()
            .filter(|r| r.language.as_deref() == Some(lang))
            .cloned()
            .collect(),
        None => repos.to_vec(),
    };

    match sort {
        SortKey::Stars => projected.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count)),
        SortKey::Forks => projected.sort_by(|a, b| b.forks_count.cmp(&a.forks_count)),
        SortKey::Updated => projected.sort_by(|a, b| match (a.updated(), b.updated()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }

    projected
}
