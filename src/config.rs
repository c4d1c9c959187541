//! CLI設定（`~/.config/trust-wedo/config.json`）
//!
//! 接続先、表示言語・テーマ、ログインセッションを保持する。
//! `TRUST_WEDO_CONFIG` で設定ファイルの場所を、`TRUST_WEDO_API_URL` で
//! 接続先を上書きできる。

use crate::error::{Result, TrustWedoError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trust_wedo_common::prefs::{LANGUAGE_KEY, THEME_KEY};
use trust_wedo_common::{
    AuthEndpoints, Language, PreferenceStore, Preferences, Session, Theme, DEFAULT_API_URL,
};

pub const CONFIG_ENV: &str = "TRUST_WEDO_CONFIG";
pub const API_URL_ENV: &str = "TRUST_WEDO_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    /// 認証APIのベースURL（未設定なら `api_url`）
    pub auth_url: Option<String>,
    /// 認証APIの `apikey`
    pub anon_key: Option<String>,
    pub language: Language,
    pub theme: Theme,
    pub session: Option<Session>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    /// 指定パスから読む（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| TrustWedoError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("trust-wedo").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            auth_url: None,
            anon_key: None,
            language: Language::default(),
            theme: Theme::default(),
            session: None,
        }
    }

    /// 接続先（環境変数を優先）
    pub fn api_url(&self) -> String {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.api_url.clone(),
        }
    }

    pub fn auth_endpoints(&self) -> AuthEndpoints {
        let base = self.auth_url.clone().unwrap_or_else(|| self.api_url());
        AuthEndpoints::new(&base, self.anon_key.as_deref().unwrap_or(""))
    }

    pub fn preferences(&self) -> Preferences {
        Preferences::load(self)
    }

    /// 有効なアクセストークン
    pub fn access_token(&self, now: i64) -> Result<String> {
        let session = self.session.as_ref().ok_or(TrustWedoError::NotLoggedIn)?;
        if session.is_expired(now) {
            return Err(TrustWedoError::SessionExpired);
        }
        Ok(session.access_token.clone())
    }
}

/// 設定ファイルを表示設定の保存先として使う
impl PreferenceStore for Config {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            LANGUAGE_KEY => Some(self.language.code().to_string()),
            THEME_KEY => Some(self.theme.as_str().to_string()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            LANGUAGE_KEY => {
                if let Some(lang) = Language::from_code(value) {
                    self.language = lang;
                }
            }
            THEME_KEY => {
                if let Ok(theme) = value.parse() {
                    self.theme = theme;
                }
            }
            _ => tracing::debug!("unknown preference key: {}", key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.language, Language::TraditionalChinese);
        assert!(config.session.is_none());
    }

    #[test]
    fn test_access_token_requires_session() {
        let config = Config::default();
        assert!(matches!(config.access_token(0), Err(TrustWedoError::NotLoggedIn)));
    }

    #[test]
    fn test_preference_store_round_trip() {
        let mut config = Config::default();
        let mut prefs = config.preferences();
        prefs.toggle_language(&mut config);
        prefs.toggle_theme(&mut config);

        assert_eq!(config.language, Language::English);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.preferences(), prefs);
    }

    #[test]
    fn test_auth_endpoints_use_auth_url() {
        let config = Config {
            api_url: "https://api.example.com".into(),
            auth_url: Some("https://auth.example.com".into()),
            anon_key: Some("anon".into()),
            ..Config::default()
        };
        assert_eq!(
            config.auth_endpoints().signup(),
            "https://auth.example.com/auth/v1/signup"
        );
        assert_eq!(config.auth_endpoints().anon_key(), "anon");
    }
}
