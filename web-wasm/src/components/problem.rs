//! 課題提起セクション

use crate::app::use_app;
use leptos::prelude::*;

#[component]
pub fn Problem() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="section problem">
            <h2>{move || ctx.tr("problem.title")}</h2>
            <p class="text-muted">{move || ctx.tr("problem.desc")}</p>
        </section>
    }
}
