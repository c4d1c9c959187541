//! 認証セッション（GoTrue互換 REST）
//!
//! パスワード認証・サインアップ・ログアウトのURLとボディ、
//! トークン応答からのセッション生成を扱う。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// ログイン中のユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// 認証セッション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 失効時刻（UNIX秒）
    pub expires_at: i64,
    pub user: SessionUser,
}

impl Session {
    /// `now`（UNIX秒）の時点で失効しているか
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    pub fn email(&self) -> &str {
        self.user.email.as_deref().unwrap_or("")
    }
}

/// `/token` と `/signup` の応答
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// トークン応答の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// セッション確立
    SignedIn(Session),
    /// サインアップ済みだがメール確認待ち（トークン無し）
    ConfirmationRequired,
}

impl TokenResponse {
    /// セッションへ変換。`expires_at` が無ければ `now + expires_in`
    pub fn into_outcome(self, now: i64) -> Result<AuthOutcome> {
        let Some(access_token) = self.access_token else {
            return Ok(AuthOutcome::ConfirmationRequired);
        };
        let user = self
            .user
            .ok_or_else(|| Error::InvalidInput("token response has no user".into()))?;
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now + secs))
            .unwrap_or(now + DEFAULT_EXPIRES_IN);

        Ok(AuthOutcome::SignedIn(Session {
            access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user,
        }))
    }
}

/// 応答に有効期限が無い場合の既定（秒）
const DEFAULT_EXPIRES_IN: i64 = 3600;

/// メール・パスワード
#[derive(Debug, Clone, Serialize)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

impl PasswordCredentials {
    pub fn new(email: &str, password: &str) -> Result<Self> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::InvalidInput(format!("invalid email: {}", email)));
        }
        if password.is_empty() {
            return Err(Error::InvalidInput("password is empty".into()));
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// 認証エンドポイント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoints {
    base: String,
    anon_key: String,
}

impl AuthEndpoints {
    pub fn new(base: &str, anon_key: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// `apikey` ヘッダ値
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn password_grant(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base)
    }

    pub fn signup(&self) -> String {
        format!("{}/auth/v1/signup", self.base)
    }

    pub fn logout(&self) -> String {
        format!("{}/auth/v1/logout", self.base)
    }
}

/// GoTrue のエラーボディ（版によってフィールド名が違う）
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// 非2xxの認証応答からエラーを作る
pub fn auth_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<AuthErrorBody>(body)
        .ok()
        .and_then(|b| b.error_description.or(b.msg).or(b.message))
        .unwrap_or_else(|| format!("authentication failed ({})", status));
    Error::Api { status, message }
}
