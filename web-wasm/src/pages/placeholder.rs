//! 未実装のルート
//!
//! 公開側（/docs など）はランディングページを、ダッシュボード側は
//! 「準備中」パネルを出す。

use crate::app::use_app;
use crate::components::dashboard_layout::DashboardLayout;
use crate::pages::{home::HomePage, not_found::NotFound};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use trust_wedo_common::AppRoute;

#[component]
pub fn PlaceholderPage() -> impl IntoView {
    let ctx = use_app();
    let route = AppRoute::parse(&use_location().pathname.get_untracked());

    if !route.is_placeholder() {
        return view! { <NotFound /> }.into_any();
    }
    if !route.requires_session() {
        return view! { <HomePage /> }.into_any();
    }

    view! {
        <DashboardLayout>
            <div class="card placeholder">
                <h2>"🚧 " {move || ctx.tr("placeholder.title")}</h2>
                <p class="text-muted">{move || ctx.tr("placeholder.desc")}</p>
            </div>
        </DashboardLayout>
    }
    .into_any()
}
