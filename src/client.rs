//! バックエンドAPI・認証APIのHTTPクライアント
//!
//! 返すエラーは共通ライブラリの `Error`。接続失敗・タイムアウトは
//! `Error::Transport`（ポーリングでは再試行対象）になる。

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use trust_wedo_common::api::{api_error, bearer, parse_body};
use trust_wedo_common::session::{auth_error, TokenResponse};
use trust_wedo_common::{
    ApiEndpoints, AuthEndpoints, AuthOutcome, CreateScanRequest, DimensionAggregate, Error,
    JobStatusSource, PasswordCredentials, Report, Result, ScanJob, Session,
};

const USER_AGENT: &str = concat!("trust-wedo-cli/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}

async fn send(request: RequestBuilder) -> Result<Response> {
    request.send().await.map_err(transport)
}

/// 2xxなら本文をJSONとして読み、それ以外は `Error::Api`
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    if !status.is_success() {
        let fallback = status.canonical_reason().unwrap_or("request failed");
        return Err(api_error(status.as_u16(), &body, fallback));
    }
    parse_body(&body)
}

/// スキャン・レポートAPI
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: ApiEndpoints,
    authorization: String,
}

impl ApiClient {
    pub fn new(base_url: &str, access_token: &str) -> crate::error::Result<Self> {
        Ok(Self {
            http: http_client()?,
            endpoints: ApiEndpoints::new(base_url),
            authorization: bearer(access_token),
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let resp = send(
            self.http
                .get(url)
                .header(reqwest::header::AUTHORIZATION, &self.authorization),
        )
        .await?;
        read_json(resp).await
    }

    /// `POST /api/scans`
    pub async fn create_scan(&self, request: &CreateScanRequest) -> Result<ScanJob> {
        let url = self.endpoints.scans();
        tracing::debug!("POST {} url={}", url, request.url);
        let resp = send(
            self.http
                .post(&url)
                .header(reqwest::header::AUTHORIZATION, &self.authorization)
                .json(request),
        )
        .await?;
        read_json(resp).await
    }

    pub async fn list_scans(&self) -> Result<Vec<ScanJob>> {
        self.get(&self.endpoints.scans()).await
    }

    pub async fn get_scan(&self, job_id: &str) -> Result<ScanJob> {
        self.get(&self.endpoints.scan(job_id)).await
    }

    pub async fn get_report(&self, job_id: &str) -> Result<Report> {
        self.get(&self.endpoints.report(job_id)).await
    }

    pub async fn get_dimensions(&self, job_id: &str) -> Result<DimensionAggregate> {
        self.get(&self.endpoints.dimensions(job_id)).await
    }
}

impl JobStatusSource for ApiClient {
    async fn fetch_job(&self, job_id: &str) -> Result<ScanJob> {
        self.get_scan(job_id).await
    }
}

/// 認証API（GoTrue互換）
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: Client,
    endpoints: AuthEndpoints,
}

impl AuthClient {
    pub fn new(endpoints: AuthEndpoints) -> crate::error::Result<Self> {
        Ok(Self {
            http: http_client()?,
            endpoints,
        })
    }

    async fn post_credentials(
        &self,
        url: &str,
        credentials: &PasswordCredentials,
        now: i64,
    ) -> Result<AuthOutcome> {
        tracing::debug!("POST {}", url);
        let resp = send(
            self.http
                .post(url)
                .header("apikey", self.endpoints.anon_key())
                .json(credentials),
        )
        .await?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(auth_error(status.as_u16(), &body));
        }
        let token: TokenResponse = parse_body(&body)?;
        token.into_outcome(now)
    }

    pub async fn sign_in(&self, credentials: &PasswordCredentials, now: i64) -> Result<Session> {
        match self
            .post_credentials(&self.endpoints.password_grant(), credentials, now)
            .await?
        {
            AuthOutcome::SignedIn(session) => Ok(session),
            AuthOutcome::ConfirmationRequired => {
                Err(Error::InvalidInput("no access token in response".into()))
            }
        }
    }

    pub async fn sign_up(
        &self,
        credentials: &PasswordCredentials,
        now: i64,
    ) -> Result<AuthOutcome> {
        self.post_credentials(&self.endpoints.signup(), credentials, now)
            .await
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let resp = send(
            self.http
                .post(self.endpoints.logout())
                .header("apikey", self.endpoints.anon_key())
                .header(reqwest::header::AUTHORIZATION, bearer(access_token)),
        )
        .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.map_err(transport)?;
        Err(auth_error(status.as_u16(), &body))
    }
}
