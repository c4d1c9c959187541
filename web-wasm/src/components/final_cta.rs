//! 最後の行動喚起

use crate::app::use_app;
use leptos::prelude::*;

#[component]
pub fn FinalCta() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="section final-cta">
            <h2>{move || ctx.tr("cta.title")}</h2>
            <a href="/dashboard" class="btn btn-primary btn-large">
                {move || ctx.tr("cta.button")}
            </a>
        </section>
    }
}
