//! メインアプリケーションコンポーネント

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFound,
    pdf_report::PdfReportPage, placeholder::PlaceholderPage, report::ReportPage,
    scans::ScansPage, signup::SignupPage,
};
use crate::store::{self, LocalStore};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use trust_wedo_common::{t, Error, Language, Preferences, Session};

/// アプリ全体の状態（コンテキストで配る）
#[derive(Clone, Copy)]
pub struct AppContext {
    pub prefs: RwSignal<Preferences>,
    pub session: RwSignal<Option<Session>>,
}

impl AppContext {
    pub fn lang(&self) -> Language {
        self.prefs.get().language
    }

    /// 現在の言語で文言を引く（リアクティブ）
    pub fn tr(&self, key: &'static str) -> &'static str {
        t(self.lang(), key)
    }

    /// 非同期処理の中から引く用（追跡しない）
    pub fn tr_untracked(&self, key: &'static str) -> &'static str {
        t(self.prefs.get_untracked().language, key)
    }

    pub fn toggle_language(&self) {
        self.prefs.update(|p| {
            p.toggle_language(&mut LocalStore);
        });
    }

    pub fn toggle_theme(&self) {
        self.prefs.update(|p| {
            p.toggle_theme(&mut LocalStore);
        });
    }

    /// 有効なセッションがあるか（リアクティブ）
    pub fn is_signed_in(&self) -> bool {
        self.session
            .get()
            .is_some_and(|s| !s.is_expired(store::now_secs()))
    }

    /// 有効なアクセストークン。失効していればエラー
    pub fn access_token(&self) -> Result<String, Error> {
        self.session
            .get_untracked()
            .filter(|s| !s.is_expired(store::now_secs()))
            .map(|s| s.access_token)
            .ok_or(Error::SessionExpired)
    }

    pub fn sign_in(&self, session: Session) {
        store::save_session(&session);
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        store::clear_session();
        self.session.set(None);
    }

    /// エラーを画面表示用の文言にする
    ///
    /// バックエンドのメッセージがあればそれを、なければ `fallback_key` の文言を使う。
    pub fn error_text(&self, error: &Error, fallback_key: &'static str) -> String {
        let lang = self.prefs.get_untracked().language;
        match error {
            Error::SessionExpired => t(lang, "auth.sessionExpired").to_string(),
            Error::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => t(lang, fallback_key).to_string(),
        }
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// `<html>` に言語とテーマを反映
fn apply_document_prefs(prefs: &Preferences) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", prefs.language.code());
    let _ = root.set_attribute("data-theme", prefs.theme.as_str());
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext {
        prefs: RwSignal::new(store::load_preferences()),
        session: RwSignal::new(store::load_session()),
    };
    provide_context(ctx);

    Effect::new(move |_| {
        apply_document_prefs(&ctx.prefs.get());
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/docs") view=PlaceholderPage />
                <Route path=path!("/pricing") view=PlaceholderPage />
                <Route path=path!("/playground") view=PlaceholderPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/dashboard/scans") view=ScansPage />
                <Route path=path!("/dashboard/reports") view=PlaceholderPage />
                <Route path=path!("/dashboard/settings") view=PlaceholderPage />
                <Route path=path!("/dashboard/reports/:job_id") view=ReportPage />
                <Route path=path!("/dashboard/reports/:job_id/print") view=PdfReportPage />
            </Routes>
        </Router>
    }
}
