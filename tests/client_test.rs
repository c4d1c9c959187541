//! HTTPクライアントのテスト（wiremock）
//!
//! マッチしないリクエストは wiremock が404を返すので、ヘッダやボディの
//! 検証はマッチャー側で行う。

use serde_json::json;
use trust_wedo::client::{ApiClient, AuthClient};
use trust_wedo_common::{
    AuthEndpoints, AuthOutcome, CreateScanRequest, Error, PasswordCredentials, ScanStatus,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), "secret-token").expect("client");
    (server, client)
}

async fn setup_auth() -> (MockServer, AuthClient) {
    let server = MockServer::start().await;
    let client = AuthClient::new(AuthEndpoints::new(&server.uri(), "anon-key")).expect("client");
    (server, client)
}

#[tokio::test]
async fn test_get_scan_sends_bearer_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/scans/job-1"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "job-1",
            "url": "https://example.com/",
            "status": "processing",
            "created_at": "2026-01-05T10:00:00Z",
            "progress_stage": "正在分析 AI 識別特徵..."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let job = client.get_scan("job-1").await.expect("get_scan");
    assert_eq!(job.status, ScanStatus::Processing);
    assert_eq!(job.progress_stage.as_deref(), Some("正在分析 AI 識別特徵..."));
}

#[tokio::test]
async fn test_create_scan_posts_normalized_url() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/scans"))
        .and(body_json(json!({ "url": "https://example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "job-2",
            "url": "https://example.com/",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateScanRequest::new("example.com").expect("request");
    let job = client.create_scan(&request).await.expect("create_scan");
    assert_eq!(job.id, "job-2");
    assert_eq!(job.status, ScanStatus::Pending);
}

#[tokio::test]
async fn test_list_scans() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/scans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "b", "url": "https://b.example/", "status": "completed" },
            { "id": "a", "url": "https://a.example/", "status": "failed", "error_message": "timeout" }
        ])))
        .mount(&server)
        .await;

    let scans = client.list_scans().await.expect("list_scans");
    assert_eq!(scans.len(), 2);
    assert_eq!(scans[1].error_message.as_deref(), Some("timeout"));
}

#[tokio::test]
async fn test_get_dimensions() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/reports/job-3/dimensions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_score": 71.5,
            "grade": "B",
            "dimensions": {
                "social": { "name": "social", "score": 5, "max": 20, "percentage": 25, "items": [] }
            },
            "quick_wins": []
        })))
        .mount(&server)
        .await;

    let agg = client.get_dimensions("job-3").await.expect("get_dimensions");
    assert_eq!(agg.grade, "B");
    assert_eq!(agg.dimensions["social"].max, 20.0);
}

/// 非2xxは `detail` をメッセージにした `Error::Api`
#[tokio::test]
async fn test_api_error_uses_detail() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/reports/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Scan not found" })),
        )
        .mount(&server)
        .await;

    let result = client.get_report("missing").await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Scan not found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

/// `detail` が無ければステータスの理由句
#[tokio::test]
async fn test_api_error_without_detail() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/scans"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let err = client.list_scans().await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 500, .. }));
    assert_eq!(err.user_message(), "Internal Server Error");
}

/// 接続できなければ `Error::Transport`
#[tokio::test]
async fn test_connection_refused_is_transport() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}"), "t").expect("client");
    let err = client.list_scans().await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got: {err:?}");
}

#[tokio::test]
async fn test_sign_in_builds_session() {
    let (server, auth) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "anon-key"))
        .and(body_json(json!({ "email": "owner@example.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at",
            "refresh_token": "rt",
            "expires_in": 3600,
            "user": { "id": "u1", "email": "owner@example.com" }
        })))
        .mount(&server)
        .await;

    let credentials = PasswordCredentials::new("owner@example.com", "pw").expect("credentials");
    let session = auth.sign_in(&credentials, 1_000).await.expect("sign_in");

    assert_eq!(session.access_token, "at");
    assert_eq!(session.expires_at, 4_600);
    assert_eq!(session.email(), "owner@example.com");
}

/// トークン無しのサインアップ応答はメール確認待ち
#[tokio::test]
async fn test_sign_up_requires_confirmation() {
    let (server, auth) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u2",
            "email": "new@example.com",
            "confirmation_sent_at": "2026-01-05T10:00:00Z"
        })))
        .mount(&server)
        .await;

    let credentials = PasswordCredentials::new("new@example.com", "pw").expect("credentials");
    let outcome = auth.sign_up(&credentials, 0).await.expect("sign_up");
    assert_eq!(outcome, AuthOutcome::ConfirmationRequired);
}

#[tokio::test]
async fn test_sign_in_error_message() {
    let (server, auth) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let credentials = PasswordCredentials::new("owner@example.com", "wrong").expect("credentials");
    let err = auth.sign_in(&credentials, 0).await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid login credentials");
}

#[tokio::test]
async fn test_sign_out_revokes_token() {
    let (server, auth) = setup_auth().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer at"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    auth.sign_out("at").await.expect("sign_out");
}
