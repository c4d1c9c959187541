//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// APIが非2xxを返した（`detail`があればそれをメッセージにする）
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Session expired")]
    SessionExpired,
}

impl Error {
    /// 画面表示用のメッセージ
    ///
    /// API エラーはバックエンドの文言をそのまま見せる
    pub fn user_message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// 通信レベルの失敗か（ポーリングの再試行対象）
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_api() {
        let error = Error::Api { status: 404, message: "Scan job not found".to_string() };
        assert_eq!(format!("{}", error), "API error (HTTP 404): Scan job not found");
        assert_eq!(error.user_message(), "Scan job not found");
    }

    #[test]
    fn test_error_display_session() {
        assert_eq!(Error::SessionExpired.to_string(), "Session expired");
        assert_eq!(Error::SessionExpired.user_message(), "Session expired");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(!error.is_transport());
    }

    #[test]
    fn test_transport_is_retryable() {
        let error = Error::Transport("connection refused".to_string());
        assert!(error.is_transport());
    }
}
