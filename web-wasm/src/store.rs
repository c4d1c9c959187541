//! localStorage への保存
//!
//! 表示設定は i18next と同じ生文字列で、セッションは JSON で保存する。

use gloo::storage::{LocalStorage, Storage};
use trust_wedo_common::{PreferenceStore, Preferences, Session};

const SESSION_KEY: &str = "trust-wedo.session";

/// localStorage を `PreferenceStore` として使う
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            crate::log::warn(&format!("localStorage に保存できません: {}", key));
        }
    }
}

pub fn load_preferences() -> Preferences {
    Preferences::load(&LocalStore)
}

/// 保存済みセッション（壊れていれば None）
pub fn load_session() -> Option<Session> {
    LocalStorage::get(SESSION_KEY).ok()
}

pub fn save_session(session: &Session) {
    if let Err(e) = LocalStorage::set(SESSION_KEY, session) {
        crate::log::warn(&format!("セッションを保存できません: {}", e));
    }
}

pub fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}

/// 現在時刻（UNIX秒）
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}
