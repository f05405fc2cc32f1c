use std::time::Duration;

use census_engine::{FailureKind, FetchSettings, ProfileFetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer) -> ReqwestFetcher {
    let base = format!("{}/users/", server.uri());
    ReqwestFetcher::new(base, FetchSettings::default()).expect("fetcher")
}

#[tokio::test]
async fn fetch_returns_typed_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "alice",
            "created_at": "2020-01-01T00:00:00Z",
            "public_repos": 5,
        })))
        .mount(&server)
        .await;

    let profile = fetcher_for(&server)
        .fetch_profile("alice")
        .await
        .expect("fetch ok");
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.date_made, "2020-01-01T00:00:00Z");
    assert_eq!(profile.num_repos, 5);
}

#[tokio::test]
async fn fetch_ignores_unrelated_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "bob",
            "id": 42,
            "avatar_url": "https://example.com/bob.png",
            "created_at": "2019-05-05T00:00:00Z",
            "public_repos": 12,
            "followers": 7,
        })))
        .mount(&server)
        .await;

    let profile = fetcher_for(&server)
        .fetch_profile("bob")
        .await
        .expect("fetch ok");
    assert_eq!(profile.username, "bob");
    assert_eq!(profile.num_repos, 12);
}

#[tokio::test]
async fn fetch_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_profile("missing")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn non_json_body_is_a_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>rate limited</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_profile("alice")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidJson);
}

#[tokio::test]
async fn error_shaped_body_is_a_lookup_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": "https://example.com/docs",
        })))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_profile("nobody")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MissingField);
    assert!(err.message.contains("login"));
}

#[tokio::test]
async fn fetch_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher =
        ReqwestFetcher::new(format!("{}/users/", server.uri()), settings).expect("fetcher");

    let err = fetcher.fetch_profile("slow").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}
