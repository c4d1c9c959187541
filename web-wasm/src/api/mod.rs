//! バックエンドAPI・認証APIの呼び出し
//!
//! 接続先はビルド時の環境変数で決まる:
//! - `TRUST_WEDO_API_URL`: スキャンAPI
//! - `TRUST_WEDO_AUTH_URL`: 認証API（未指定ならスキャンAPIと同じ）
//! - `TRUST_WEDO_ANON_KEY`: 認証APIの `apikey`

mod http;
pub mod auth;
pub mod scans;

pub use scans::ApiClient;

use trust_wedo_common::{AuthEndpoints, DEFAULT_API_URL};

pub fn api_base() -> &'static str {
    option_env!("TRUST_WEDO_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn auth_endpoints() -> AuthEndpoints {
    AuthEndpoints::new(
        option_env!("TRUST_WEDO_AUTH_URL").unwrap_or(api_base()),
        option_env!("TRUST_WEDO_ANON_KEY").unwrap_or(""),
    )
}
