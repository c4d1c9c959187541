//! 認証API（GoTrue互換）

use super::http::{expect_ok, read_json, read_text, send};
use trust_wedo_common::api::bearer;
use trust_wedo_common::session::{auth_error, TokenResponse};
use trust_wedo_common::{AuthOutcome, Error, PasswordCredentials, Result, Session};

async fn post_credentials(url: &str, credentials: &PasswordCredentials) -> Result<AuthOutcome> {
    let endpoints = super::auth_endpoints();
    let body = serde_json::to_string(credentials)?;
    let resp = send("POST", url, &[("apikey", endpoints.anon_key())], Some(&body)).await?;

    if !resp.ok() {
        let text = read_text(&resp).await.unwrap_or_default();
        return Err(auth_error(resp.status(), &text));
    }

    let token: TokenResponse = read_json(resp).await?;
    token.into_outcome(crate::store::now_secs())
}

/// メール・パスワードでログイン
pub async fn sign_in(credentials: &PasswordCredentials) -> Result<Session> {
    let url = super::auth_endpoints().password_grant();
    match post_credentials(&url, credentials).await? {
        AuthOutcome::SignedIn(session) => Ok(session),
        AuthOutcome::ConfirmationRequired => {
            Err(Error::InvalidInput("no access token in response".into()))
        }
    }
}

/// アカウント作成（メール確認が必要な場合はセッション無し）
pub async fn sign_up(credentials: &PasswordCredentials) -> Result<AuthOutcome> {
    let url = super::auth_endpoints().signup();
    post_credentials(&url, credentials).await
}

/// トークンを失効させる
pub async fn sign_out(access_token: &str) -> Result<()> {
    let endpoints = super::auth_endpoints();
    let authorization = bearer(access_token);
    let resp = send(
        "POST",
        &endpoints.logout(),
        &[("apikey", endpoints.anon_key()), ("Authorization", authorization.as_str())],
        None,
    )
    .await?;
    expect_ok(resp).await
}
