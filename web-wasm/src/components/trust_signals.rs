//! 信頼シグナルの紹介

use crate::app::use_app;
use leptos::prelude::*;

const SIGNALS: [(&str, &str); 4] = [
    ("🧩", "trust.structured"),
    ("🪪", "trust.identity"),
    ("⚙️", "trust.technical"),
    ("🔗", "trust.social"),
];

#[component]
pub fn TrustSignals() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="section trust-signals">
            <h2>{move || ctx.tr("trust.title")}</h2>
            <ul class="signal-grid">
                {SIGNALS
                    .into_iter()
                    .map(|(icon, key)| view! {
                        <li class="signal-card">
                            <span class="signal-icon">{icon}</span>
                            <span>{move || ctx.tr(key)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
