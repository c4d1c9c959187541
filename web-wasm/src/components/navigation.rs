//! ナビゲーションバー

use crate::app::use_app;
use leptos::prelude::*;

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = use_app();

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">"Trust WEDO"</a>

            <div class="navbar-links">
                <a href="/docs">{move || ctx.tr("nav.docs")}</a>
                <a href="/pricing">{move || ctx.tr("nav.pricing")}</a>
                <a href="/playground">{move || ctx.tr("nav.playground")}</a>
            </div>

            <div class="navbar-actions">
                <button
                    class="btn btn-ghost btn-small"
                    on:click=move |_| ctx.toggle_language()
                >
                    {move || ctx.lang().toggled().short_label()}
                </button>
                <button
                    class="btn btn-ghost btn-small"
                    title=move || {
                        if ctx.prefs.get().theme.is_dark() {
                            ctx.tr("nav.lightMode")
                        } else {
                            ctx.tr("nav.darkMode")
                        }
                    }
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || if ctx.prefs.get().theme.is_dark() { "☀️" } else { "🌙" }}
                </button>
                <Show
                    when=move || ctx.is_signed_in()
                    fallback=move || view! {
                        <a href="/login" class="btn btn-secondary btn-small">
                            {move || ctx.tr("nav.login")}
                        </a>
                        <a href="/signup" class="btn btn-primary btn-small">
                            {move || ctx.tr("nav.signup")}
                        </a>
                    }
                >
                    <a href="/dashboard" class="btn btn-primary btn-small">
                        {move || ctx.tr("nav.dashboard")}
                    </a>
                </Show>
            </div>
        </nav>
    }
}
