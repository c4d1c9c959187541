//! ヒーローセクション
//!
//! URLを入力するとダッシュボードの入力欄に引き継ぐ。

use crate::app::use_app;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let (url, set_url) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = url.get_untracked();
        let target = if input.trim().is_empty() {
            "/dashboard".to_string()
        } else {
            format!(
                "/dashboard?url={}",
                String::from(js_sys::encode_uri_component(input.trim()))
            )
        };
        navigate(&target, Default::default());
    };

    view! {
        <section class="hero">
            <span class="hero-badge">{move || ctx.tr("hero.badge")}</span>
            <h1 class="hero-title">{move || ctx.tr("hero.title")}</h1>
            <p class="hero-subtitle">{move || ctx.tr("hero.subtitle")}</p>

            <form class="hero-form" on:submit=on_submit>
                <input
                    type="text"
                    class="hero-input"
                    placeholder=move || ctx.tr("hero.placeholder")
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">
                    {move || ctx.tr("hero.cta")}
                </button>
            </form>
        </section>
    }
}
