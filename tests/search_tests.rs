//! Search sequencing tests
//!
//! Drives `github::search` with an in-memory gateway to check call ordering
//! and how each stage's failures surface.

use octoscope::github::{self, FetchError, FetchResult, Gateway, Profile, Repository};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway that answers from canned results and counts calls
struct StubGateway {
    profile: FetchResult<Profile>,
    repositories: FetchResult<Vec<Repository>>,
    profile_calls: AtomicUsize,
    repository_calls: AtomicUsize,
}

impl StubGateway {
    fn new(profile: FetchResult<Profile>, repositories: FetchResult<Vec<Repository>>) -> Self {
        Self {
            profile,
            repositories,
            profile_calls: AtomicUsize::new(0),
            repository_calls: AtomicUsize::new(0),
        }
    }
}

impl Gateway for StubGateway {
    async fn fetch_profile(&self, username: &str) -> FetchResult<Profile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profile.clone().map(|mut p| {
            p.login = username.to_string();
            p
        })
    }

    async fn fetch_repositories(&self, _username: &str) -> FetchResult<Vec<Repository>> {
        self.repository_calls.fetch_add(1, Ordering::SeqCst);
        self.repositories.clone()
    }
}

fn profile() -> Profile {
    Profile {
        login: String::new(),
        name: Some("Mona".to_string()),
        avatar_url: "https://avatars.example.com/mona".to_string(),
        bio: Some("Octo enthusiast".to_string()),
        public_repos: 1,
        followers: 2,
        following: 3,
    }
}

fn repo(name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        html_url: format!("https://github.com/mona/{name}"),
        description: Some("demo".to_string()),
        language: Some("Rust".to_string()),
        stargazers_count: 1,
        forks_count: 0,
        updated_at: "2024-02-02T00:00:00Z".to_string(),
    }
}

#[tokio::test]
async fn test_search_returns_profile_and_repositories_in_api_order() {
    let gateway = StubGateway::new(Ok(profile()), Ok(vec![repo("z"), repo("a")]));

    let result = github::search(&gateway, "mona").await.expect("search succeeds");

    assert_eq!(result.profile.login, "mona");
    let names: Vec<&str> = result.repositories.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a"]);
    assert_eq!(gateway.profile_calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.repository_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_profile_failure_skips_repositories_request() {
    let gateway = StubGateway::new(Err(FetchError::NotFound { status: 404 }), Ok(vec![repo("a")]));

    let err = github::search(&gateway, "ghost").await.expect_err("search fails");

    assert_eq!(err, FetchError::NotFound { status: 404 });
    assert_eq!(gateway.repository_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_repositories_failure_surfaces_after_profile() {
    let gateway = StubGateway::new(
        Ok(profile()),
        Err(FetchError::RepositoriesFetch { status: 500 }),
    );

    let err = github::search(&gateway, "mona").await.expect_err("search fails");

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "Repositories fetch error: 500");
    assert_eq!(gateway.profile_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_repository_list_is_not_an_error() {
    let gateway = StubGateway::new(Ok(profile()), Ok(Vec::new()));

    let result = github::search(&gateway, "newbie").await.expect("search succeeds");

    assert!(result.repositories.is_empty());
}

#[tokio::test]
async fn test_transport_failure_is_unexpected() {
    let gateway = StubGateway::new(
        Err(FetchError::Unexpected("error sending request".to_string())),
        Ok(Vec::new()),
    );

    let err = github::search(&gateway, "mona").await.expect_err("search fails");

    assert_eq!(err.status(), None);
    assert_eq!(err.user_message(), "error sending request");
}

#[tokio::test]
async fn test_real_client_reports_connection_failure_as_unexpected() {
    // Nothing listens on port 9 of the loopback interface in CI
    let client = github::GitHubClient::new("http://127.0.0.1:9", 12).expect("client");

    let err = github::search(&client, "mona").await.expect_err("connection fails");

    assert!(matches!(err, FetchError::Unexpected(_)));
    assert!(!err.user_message().is_empty());
}
