//! 総合スコアのカード
//!
//! 難サイトのときは実測値ではなくバックエンドの推定値を出し、推定バッジを付ける。

use crate::app::use_app;
use leptos::prelude::*;
use trust_wedo_common::i18n::dimension_name;
use trust_wedo_common::report::{grade_class, headline_score, percentage, worst_dimension};
use trust_wedo_common::{DimensionAggregate, Report};

#[component]
pub fn SummaryCard(report: Report, aggregate: Option<DimensionAggregate>) -> impl IntoView {
    let ctx = use_app();

    let headline = aggregate.as_ref().map(headline_score);
    let grade = headline
        .as_ref()
        .map(|h| h.grade.clone())
        .or_else(|| report.summary.as_ref().map(|s| s.grade.clone()))
        .unwrap_or_default();
    let score = headline.as_ref().map(|h| format!("{:.0}", h.score));
    let estimated = headline.as_ref().is_some_and(|h| h.estimated);

    let worst = aggregate.as_ref().and_then(|agg| {
        worst_dimension(&agg.dimensions)
            .map(|(key, dim)| (key.to_string(), percentage(dim.score, dim.max)))
    });

    let conclusion = report.conclusion().to_string();
    let grade_badge = format!("grade-badge {}", grade_class(&grade));

    view! {
        <section class="card summary-card">
            <div class="summary-score">
                {score.map(|s| view! {
                    <div class="score-value">
                        <span class="score-number">{s}</span>
                        <span class="score-unit">"/100"</span>
                    </div>
                })}
                <span class=grade_badge>{grade}</span>
                <Show when=move || estimated>
                    <span class="badge badge-estimated">{move || ctx.tr("report.estimatedBadge")}</span>
                </Show>
            </div>

            <p class="summary-conclusion">{conclusion}</p>

            {worst.map(|(key, pct)| view! {
                <p class="summary-worst">
                    {move || ctx.tr("report.worst")} ": "
                    <strong>{move || dimension_name(ctx.lang(), &key).to_string()}</strong>
                    {format!(" ({}%)", pct)}
                </p>
            })}
        </section>
    }
}
