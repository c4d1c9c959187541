//! 使い方（3ステップ）

use crate::app::use_app;
use leptos::prelude::*;

const STEPS: [(&str, &str, &str); 3] = [
    ("1", "howItWorks.step1.title", "howItWorks.step1.desc"),
    ("2", "howItWorks.step2.title", "howItWorks.step2.desc"),
    ("3", "howItWorks.step3.title", "howItWorks.step3.desc"),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="section how-it-works">
            <h2>{move || ctx.tr("howItWorks.title")}</h2>
            <div class="steps">
                {STEPS
                    .into_iter()
                    .map(|(number, title, desc)| view! {
                        <div class="step-card">
                            <span class="step-number">{number}</span>
                            <h3>{move || ctx.tr(title)}</h3>
                            <p class="text-muted">{move || ctx.tr(desc)}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
