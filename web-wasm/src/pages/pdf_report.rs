//! 印刷用レポート
//!
//! ブラウザの印刷機能でPDFに保存する前提のレイアウト。
//! スコア帯の色は画面より厳しめ（60未満が赤）。

use crate::api::ApiClient;
use crate::app::use_app;
use futures::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use trust_wedo_common::i18n::dimension_name;
use trust_wedo_common::report::{
    grade_hex, headline_score, percentage, print_quick_wins, scored_dimensions, short_scan_id,
    trust_gaps, ScoreBand,
};
use trust_wedo_common::{DimensionAggregate, Report};

#[derive(Debug, Clone)]
enum PrintState {
    Loading,
    Ready(Box<(Report, Option<DimensionAggregate>)>),
    Failed(String),
}

fn open_print_dialog() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.print() {
            crate::log::warn(&format!("print: {:?}", e));
        }
    }
}

/// 今日の日付（YYYY-MM-DD）
fn today() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
        .chars()
        .take(10)
        .collect()
}

#[component]
pub fn PdfReportPage() -> impl IntoView {
    let ctx = use_app();
    let params = use_params_map();
    let job_id = params.read_untracked().get("job_id").unwrap_or_default();
    let (state, set_state) = signal(PrintState::Loading);

    match ctx.access_token() {
        Ok(token) => {
            let id = job_id.clone();
            spawn_local(async move {
                let client = ApiClient::new(&token);
                let (report, aggregate) =
                    join(client.get_report(&id), client.get_dimensions(&id)).await;
                match report {
                    Ok(report) => {
                        let aggregate = aggregate
                            .map_err(|e| crate::log::error(&format!("dimensions {}: {}", id, e)))
                            .ok();
                        set_state.set(PrintState::Ready(Box::new((report, aggregate))));
                    }
                    Err(e) => {
                        set_state.set(PrintState::Failed(ctx.error_text(&e, "report.loadFailed")));
                    }
                }
            });
        }
        Err(e) => set_state.set(PrintState::Failed(ctx.error_text(&e, "report.loadFailed"))),
    }

    let scan_id = short_scan_id(&job_id).to_string();

    let body = move || match state.get() {
        PrintState::Loading => view! { <p>{move || ctx.tr("print.loading")}</p> }.into_any(),
        PrintState::Failed(message) => view! { <p class="form-error">{message}</p> }.into_any(),
        PrintState::Ready(data) => {
            let (report, aggregate) = *data;
            let headline = aggregate.as_ref().map(headline_score);
            let grade = headline
                .as_ref()
                .map(|h| h.grade.clone())
                .or_else(|| report.summary.as_ref().map(|s| s.grade.clone()))
                .unwrap_or_default();
            let score = headline.as_ref().map(|h| format!("{:.0}", h.score)).unwrap_or_default();
            let conclusion = Some(report.conclusion().to_string()).filter(|c| !c.is_empty());

            let dimension_rows = aggregate
                .as_ref()
                .map(|agg| {
                    scored_dimensions(&agg.dimensions)
                        .map(|(key, dim)| {
                            let key = key.clone();
                            let pct = percentage(dim.score, dim.max);
                            let color = ScoreBand::for_print(pct as f64).hex();
                            view! {
                                <tr>
                                    <td>{move || dimension_name(ctx.lang(), &key).to_string()}</td>
                                    <td style=format!("color: {}", color)>{format!("{}%", pct)}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                });

            let quick_wins = aggregate
                .as_ref()
                .map(|agg| print_quick_wins(&agg.quick_wins).to_vec())
                .unwrap_or_default()
                .into_iter()
                .map(|win| view! {
                    <li>
                        <strong>{win.title}</strong>
                        <p>{win.instructions}</p>
                    </li>
                })
                .collect_view();

            let gaps = trust_gaps(&report)
                .into_iter()
                .map(|gap| view! { <li>{move || ctx.tr(gap.message_key())}</li> })
                .collect_view();

            view! {
                <header class="print-header">
                    <h1>"Trust WEDO"</h1>
                    <p>{move || ctx.tr("print.subtitle")}</p>
                    <p class="print-url">{report.url.clone()}</p>
                    <p class="print-meta">
                        {move || ctx.tr("print.scanId")} ": " {scan_id.clone()} " · " {today()}
                    </p>
                </header>

                <section class="print-score">
                    <span class="print-score-value" style=format!("color: {}", grade_hex(&grade))>
                        {score}
                    </span>
                    <span class="print-grade" style=format!("background: {}", grade_hex(&grade))>
                        {grade.clone()}
                    </span>
                    <p>
                        {move || conclusion.clone().unwrap_or_else(|| {
                            ctx.tr("print.defaultConclusion").to_string()
                        })}
                    </p>
                </section>

                <section>
                    <h2>{move || ctx.tr("print.dimensions")}</h2>
                    <table class="print-table">{dimension_rows}</table>
                </section>

                <section>
                    <h2>{move || ctx.tr("print.quickWins")}</h2>
                    <ol>{quick_wins}</ol>
                </section>

                <section>
                    <h2>{move || ctx.tr("print.gaps")}</h2>
                    <ul>{gaps}</ul>
                </section>

                <footer class="print-footer">
                    {move || ctx.tr("print.engine")} " "
                    {report.report_version.clone().unwrap_or_default()}
                </footer>
            }
            .into_any()
        }
    };

    view! {
        <div class="print-page">
            <button class="btn btn-primary no-print" on:click=move |_| open_print_dialog()>
                {move || ctx.tr("print.print")}
            </button>
            {body}
        </div>
    }
}
