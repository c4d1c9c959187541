//! スキャン作成から完了待ちまでの流れ（wiremock）

use serde_json::json;
use std::time::Duration;
use trust_wedo::client::ApiClient;
use trust_wedo::error::TrustWedoError;
use trust_wedo::scan;
use trust_wedo_common::{CancelToken, Language, PollPolicy, ScanStatus};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_policy() -> PollPolicy {
    PollPolicy {
        initial_interval: Duration::from_millis(10),
        max_interval: Duration::from_millis(10),
        error_retry: Duration::from_millis(10),
        ..PollPolicy::default()
    }
}

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), "secret-token").expect("client");
    (server, client)
}

#[tokio::test]
async fn test_submit_and_wait_polls_returned_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/scans"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "job-42",
            "url": "https://example.com",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // 先にマウントしたモックが優先され、1回使うと次へ落ちる
    Mock::given(method("GET"))
        .and(path("/api/scans/job-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job-42",
            "url": "https://example.com",
            "status": "processing",
            "progress_stage": "crawling"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/scans/job-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job-42",
            "url": "https://example.com",
            "status": "completed"
        })))
        .mount(&server)
        .await;

    let job = scan::submit_and_wait(
        &client,
        "example.com",
        fast_policy(),
        &CancelToken::new(),
        Language::English,
        false,
    )
    .await
    .expect("scan");

    assert_eq!(job.id, "job-42");
    assert_eq!(job.status, ScanStatus::Completed);

    let requests = server.received_requests().await.expect("recorded requests");
    let posts: Vec<_> = requests
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .collect();
    let gets: Vec<_> = requests
        .iter()
        .filter(|r| r.method.as_str() == "GET")
        .collect();

    assert_eq!(posts.len(), 1);
    assert_eq!(requests[0].method.as_str(), "POST");
    assert_eq!(gets.len(), 2);
    assert!(gets.iter().all(|r| r.url.path() == "/api/scans/job-42"));
}

#[tokio::test]
async fn test_submit_and_wait_surfaces_failure_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/scans"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "job-7",
            "url": "https://example.com",
            "status": "pending"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/scans/job-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job-7",
            "url": "https://example.com",
            "status": "failed",
            "error_message": "site unreachable"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = scan::submit_and_wait(
        &client,
        "example.com",
        fast_policy(),
        &CancelToken::new(),
        Language::English,
        false,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TrustWedoError::ScanFailed(ref m) if m == "site unreachable"));
}

#[tokio::test]
async fn test_invalid_url_sends_nothing() {
    let (server, client) = setup().await;

    for url in ["", "   ", "ftp://example.com"] {
        let err = scan::submit(&client, url).await.unwrap_err();
        assert!(matches!(err, TrustWedoError::Client(_)), "{url:?}: {err}");
    }

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty());
}
