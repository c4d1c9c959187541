//! 解析中モーダル

use crate::app::use_app;
use leptos::prelude::*;
use trust_wedo_common::ProgressPhase;

#[component]
pub fn ProgressModal(stage: ReadSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app();
    let phase = move || ProgressPhase::from_stage(stage.get().as_deref());

    let steps = ProgressPhase::STEPS
        .into_iter()
        .map(|step| {
            let class = move || {
                let current = phase();
                if current.has_passed(step) {
                    "progress-step done"
                } else if current.is_at(step) {
                    "progress-step active"
                } else {
                    "progress-step"
                }
            };
            let mark = move || if phase().has_passed(step) { "✓" } else { "•" };
            view! {
                <li class=class>
                    <span class="progress-mark">{mark}</span>
                    {move || ctx.tr(step.message_key())}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="modal-backdrop">
            <div class="modal progress-modal">
                <div class="spinner" />
                <h3>{move || ctx.tr("dashboard.analyzing")}</h3>
                <p class="progress-text">
                    {move || ctx.tr("dashboard.stageLabel")} " "
                    {move || match stage.get() {
                        Some(text) if !text.is_empty() => text,
                        _ => ctx.tr("dashboard.stage.initializing").to_string(),
                    }}
                </p>
                <ul class="progress-steps">{steps}</ul>
                <p class="text-muted">{move || ctx.tr("dashboard.eta")}</p>
            </div>
        </div>
    }
}
