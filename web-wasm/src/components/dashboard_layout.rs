//! ダッシュボードの共通レイアウト
//!
//! サイドバーとログアウトを持ち、ログイン必須のルートでセッションが無ければ
//! `/login` へ送る。

use crate::api::auth;
use crate::app::use_app;
use crate::components::navigation::Navigation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use trust_wedo_common::AppRoute;

const SIDEBAR: [(AppRoute, &str); 4] = [
    (AppRoute::Dashboard, "dashboard.nav.overview"),
    (AppRoute::Scans, "dashboard.nav.scans"),
    (AppRoute::Reports, "dashboard.nav.reports"),
    (AppRoute::Settings, "dashboard.nav.settings"),
];

/// サイドバーで強調する項目（レポート詳細は「レポート」扱い）
fn section_of(route: AppRoute) -> AppRoute {
    match route {
        AppRoute::Report { .. } | AppRoute::ReportPrint { .. } => AppRoute::Reports,
        other => other,
    }
}

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let route = AppRoute::parse(&pathname.get());
            if route.requires_session() && !ctx.is_signed_in() {
                navigate(&AppRoute::Login.path(), Default::default());
            }
        }
    });

    let on_logout = move |_| {
        let token = ctx.session.get_untracked().map(|s| s.access_token);
        ctx.sign_out();
        if let Some(token) = token {
            spawn_local(async move {
                if let Err(e) = auth::sign_out(&token).await {
                    crate::log::warn(&format!("logout: {}", e));
                }
            });
        }
        navigate(&AppRoute::Home.path(), Default::default());
    };

    let sidebar = SIDEBAR
        .into_iter()
        .map(|(route, key)| {
            let href = route.path();
            let is_active = move || section_of(AppRoute::parse(&pathname.get())) == route;
            view! {
                <a
                    href=href
                    class=move || if is_active() { "sidebar-link active" } else { "sidebar-link" }
                >
                    {move || ctx.tr(key)}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <Navigation />
            <div class="dashboard-body">
                <aside class="sidebar">
                    {sidebar}
                    <button class="btn btn-tertiary sidebar-logout" on:click=on_logout>
                        {move || ctx.tr("dashboard.nav.logout")}
                    </button>
                </aside>
                <main class="dashboard-main">{children()}</main>
            </div>
        </div>
    }
}
