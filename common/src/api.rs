//! バックエンドAPIのエンドポイントとリクエスト
//!
//! HTTPクライアントはCLI(reqwest)とWASM(fetch)で別実装。
//! ここではURLの組み立て、送信前の入力検証、エラーボディの解釈を共有する。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 既定のAPIベースURL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// APIエンドポイント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `POST` で作成、`GET` で一覧
    pub fn scans(&self) -> String {
        format!("{}/api/scans", self.base)
    }

    pub fn scan(&self, job_id: &str) -> String {
        format!("{}/api/scans/{}", self.base, job_id)
    }

    pub fn report(&self, job_id: &str) -> String {
        format!("{}/api/reports/{}", self.base, job_id)
    }

    pub fn dimensions(&self, job_id: &str) -> String {
        format!("{}/api/reports/{}/dimensions", self.base, job_id)
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// `Authorization` ヘッダ値
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// スキャン作成リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateScanRequest {
    pub url: String,
}

impl CreateScanRequest {
    /// 入力URLを検証して作る
    pub fn new(input: &str) -> Result<Self> {
        Ok(Self {
            url: normalize_scan_url(input)?,
        })
    }
}

/// 入力URLの正規化
///
/// - 空文字はエラー
/// - スキームが無ければ `https://` を補う
/// - http/https とホストが必須
///
/// 検証に通ったら入力どおりの文字列を返す（末尾 `/` などは付け足さない）。
pub fn normalize_scan_url(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidUrl("URL is empty".into()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = url::Url::parse(&candidate)
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", trimmed, e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::InvalidUrl(format!("unsupported scheme: {}", other)));
        }
    }

    if parsed.host_str().map_or(true, |h| h.is_empty()) {
        return Err(Error::InvalidUrl(format!("{}: missing host", trimmed)));
    }

    Ok(candidate)
}

/// FastAPI形式のエラーボディ `{ "detail": ... }`
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// 非2xxレスポンスからエラーを作る
///
/// `detail` が文字列ならそれを、配列（検証エラー）なら各 `msg` を連結する。
/// 解釈できなければ `fallback` を使う。
pub fn api_error(status: u16, body: &str, fallback: &str) -> Error {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| match b.detail {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Array(items) => {
                let msgs: Vec<String> = items
                    .iter()
                    .filter_map(|i| i.get("msg").and_then(|m| m.as_str()).map(str::to_string))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        })
        .unwrap_or_else(|| fallback.to_string());

    Error::Api { status, message }
}

/// レスポンス本文をパース（ステータスは呼び出し側で確認済み）
pub fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanJob;

    #[test]
    fn test_endpoints() {
        let api = ApiEndpoints::new("https://api.trust-wedo.dev/");
        assert_eq!(api.scans(), "https://api.trust-wedo.dev/api/scans");
        assert_eq!(api.scan("j1"), "https://api.trust-wedo.dev/api/scans/j1");
        assert_eq!(api.report("j1"), "https://api.trust-wedo.dev/api/reports/j1");
        assert_eq!(
            api.dimensions("j1"),
            "https://api.trust-wedo.dev/api/reports/j1/dimensions"
        );
        assert_eq!(ApiEndpoints::default().base(), "http://localhost:8000");
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("tok"), "Bearer tok");
    }

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize_scan_url(" example.com ").unwrap(), "https://example.com");
        assert_eq!(
            normalize_scan_url("http://example.com/blog?a=1").unwrap(),
            "http://example.com/blog?a=1"
        );
    }

    #[test]
    fn test_normalize_keeps_url_as_typed() {
        assert_eq!(
            normalize_scan_url("https://example.com").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            normalize_scan_url("https://Example.com/About/").unwrap(),
            "https://Example.com/About/"
        );
    }

    #[test]
    fn test_normalize_rejects_bad_input() {
        assert!(matches!(normalize_scan_url("   "), Err(Error::InvalidUrl(_))));
        assert!(matches!(normalize_scan_url("ftp://example.com"), Err(Error::InvalidUrl(_))));
        assert!(matches!(normalize_scan_url("https://"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_create_scan_request_body() {
        let req = CreateScanRequest::new("example.com").unwrap();
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"url":"https://example.com"}"#
        );
        assert!(CreateScanRequest::new("").is_err());
    }

    #[test]
    fn test_api_error_detail_string() {
        let err = api_error(404, r#"{"detail": "Scan job not found"}"#, "fallback");
        assert!(matches!(err, Error::Api { status: 404, ref message } if message == "Scan job not found"));
    }

    #[test]
    fn test_api_error_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "url"], "msg": "invalid or missing URL scheme"}]}"#;
        let err = api_error(422, body, "fallback");
        assert_eq!(err.user_message(), "invalid or missing URL scheme");
    }

    #[test]
    fn test_api_error_fallback() {
        let err = api_error(500, "<html>Internal Server Error</html>", "建立健檢失敗");
        assert_eq!(err.user_message(), "建立健檢失敗");
    }

    #[test]
    fn test_parse_body() {
        let job: ScanJob = parse_body(r#"{"id": "j1", "url": "https://a.b", "status": "pending"}"#).unwrap();
        assert_eq!(job.id, "j1");
        assert!(parse_body::<ScanJob>("not json").is_err());
    }
}
