//! 難サイト警告
//!
//! 推定値はすべてバックエンドが出したもの。ここでは表示だけ行う。

use crate::app::use_app;
use leptos::prelude::*;
use std::collections::BTreeMap;
use trust_wedo_common::i18n::dimension_name;
use trust_wedo_common::types::DifficultSiteInfo;
use trust_wedo_common::Language;

#[component]
pub fn DifficultSiteWarning(
    info: DifficultSiteInfo,
    detection_message: Option<String>,
    estimated_dimensions: Option<BTreeMap<String, f64>>,
) -> impl IntoView {
    let ctx = use_app();

    let DifficultSiteInfo {
        name,
        name_zh,
        reason,
        estimated_score,
        estimated_grade,
        note,
    } = info;
    let reason = if reason.is_empty() {
        detection_message.unwrap_or_default()
    } else {
        reason
    };
    let site_name = move || match ctx.lang() {
        Language::TraditionalChinese if !name_zh.is_empty() => name_zh.clone(),
        _ => name.clone(),
    };

    let breakdown = estimated_dimensions.filter(|d| !d.is_empty()).map(|dims| {
        let rows = dims
            .into_iter()
            .map(|(key, score)| view! {
                <li>
                    <span>{move || dimension_name(ctx.lang(), &key).to_string()}</span>
                    <span class="estimate-value">{format!("{:.0}", score)}</span>
                </li>
            })
            .collect_view();
        view! {
            <details class="estimate-breakdown">
                <summary>{move || ctx.tr("report.difficult.breakdown")}</summary>
                <ul>{rows}</ul>
            </details>
        }
    });

    view! {
        <section class="card warning-card">
            <h3>"⚠️ " {move || ctx.tr("report.difficult.title")} " · " {site_name}</h3>
            <p>{reason}</p>
            <p class="estimate">
                {move || ctx.tr("report.difficult.estimated")} ": "
                <strong>{format!("{:.0}", estimated_score)}</strong>
                {format!(" ({})", estimated_grade)}
            </p>
            {(!note.is_empty()).then(|| view! { <p class="text-muted">{note}</p> })}
            {breakdown}
        </section>
    }
}
