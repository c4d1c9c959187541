//! スキャン・レポートAPI

use super::http::{read_json, send};
use trust_wedo_common::api::bearer;
use trust_wedo_common::{
    ApiEndpoints, CreateScanRequest, DimensionAggregate, JobStatusSource, Report, Result, ScanJob,
};

/// 認証付きAPIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoints: ApiEndpoints,
    authorization: String,
}

impl ApiClient {
    pub fn new(access_token: &str) -> Self {
        Self {
            endpoints: ApiEndpoints::new(super::api_base()),
            authorization: bearer(access_token),
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = send("GET", url, &[("Authorization", self.authorization.as_str())], None).await?;
        read_json(resp).await
    }

    /// `POST /api/scans`
    pub async fn create_scan(&self, request: &CreateScanRequest) -> Result<ScanJob> {
        let body = serde_json::to_string(request)?;
        let resp = send(
            "POST",
            &self.endpoints.scans(),
            &[("Authorization", self.authorization.as_str())],
            Some(&body),
        )
        .await?;
        read_json(resp).await
    }

    /// `GET /api/scans`（新しい順）
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
