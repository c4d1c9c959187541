//! 料金（ベータプラン）

use crate::app::use_app;
use leptos::prelude::*;

#[component]
pub fn Pricing() -> impl IntoView {
    let ctx = use_app();
    let features = ["pricing.beta.feature1", "pricing.beta.feature2", "pricing.beta.feature3"];

    view! {
        <section class="section pricing" id="pricing">
            <h2>{move || ctx.tr("pricing.title")}</h2>
            <div class="pricing-card">
                <h3>{move || ctx.tr("pricing.beta.title")}</h3>
                <p class="pricing-price">
                    <span class="price">{move || ctx.tr("pricing.beta.price")}</span>
                    <span class="period">{move || ctx.tr("pricing.beta.period")}</span>
                </p>
                <p class="text-muted">{move || ctx.tr("pricing.beta.description")}</p>
                <ul class="pricing-features">
                    {features
                        .into_iter()
                        .map(|key| view! { <li>"✓ " {move || ctx.tr(key)}</li> })
                        .collect_view()}
                </ul>
                <a href="/signup" class="btn btn-primary">
                    {move || ctx.tr("pricing.beta.cta")}
                </a>
            </div>
        </section>
    }
}
