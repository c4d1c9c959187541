//! localStorage 永続化のブラウザテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行する。

use trust_wedo_common::prefs::{LANGUAGE_KEY, THEME_KEY};
use trust_wedo_common::session::SessionUser;
use trust_wedo_common::{Language, PreferenceStore, Session, Theme};
use trust_wedo_web::store::{self, LocalStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn reset() {
    let mut local = LocalStore;
    local.set(LANGUAGE_KEY, "zh-TW");
    local.set(THEME_KEY, "light");
    store::clear_session();
}

#[wasm_bindgen_test]
fn test_preferences_survive_reload() {
    reset();
    let mut prefs = store::load_preferences();
    assert_eq!(prefs.language, Language::TraditionalChinese);

    prefs.toggle_language(&mut LocalStore);
    prefs.toggle_theme(&mut LocalStore);

    let reloaded = store::load_preferences();
    assert_eq!(reloaded.language, Language::English);
    assert_eq!(reloaded.theme, Theme::Dark);
    // i18next と同じ生文字列で保存される
    assert_eq!(LocalStore.get(LANGUAGE_KEY).as_deref(), Some("en"));
    reset();
}

#[wasm_bindgen_test]
fn test_session_round_trip() {
    reset();
    assert!(store::load_session().is_none());

    let session = Session {
        access_token: "token".to_string(),
        refresh_token: None,
        expires_at: store::now_secs() + 3600,
        user: SessionUser {
            id: "u1".to_string(),
            email: Some("a@b.co".to_string()),
        },
    };
    store::save_session(&session);
    assert_eq!(store::load_session(), Some(session));

    store::clear_session();
    assert!(store::load_session().is_none());
}
