//! レポート画面
//!
//! レポートと維度集計は別々に取得する。レポートの取得失敗はエラー表示、
//! 維度集計の失敗はログだけ残して該当セクションを省く。
//! 表示中に `:job_id` が変わったら、前のジョブの応答は捨てる。

use crate::api::ApiClient;
use crate::app::use_app;
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::report::{
    difficult_site_warning::DifficultSiteWarning,
    dimension_bars::DimensionBars,
    issue_list::{IssueList, SuggestionList},
    quick_wins::QuickWins,
    radar_chart::RadarChart,
    summary_card::SummaryCard,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use trust_wedo_common::report::difficult_site;
use trust_wedo_common::{AppRoute, DimensionAggregate, Generation, Report};

/// レポート取得の状態
#[derive(Debug, Clone)]
pub(crate) enum ReportState {
    Loading,
    Loaded(Box<Report>),
    Failed(String),
}

#[component]
pub fn ReportPage() -> impl IntoView {
    let ctx = use_app();
    let params = use_params_map();
    let job_id = move || params.read().get("job_id").unwrap_or_default();

    let (report, set_report) = signal(ReportState::Loading);
    let (aggregate, set_aggregate) = signal(None::<DimensionAggregate>);

    let generation = Generation::new();

    Effect::new(move |_| {
        let id = job_id();
        let ticket = generation.begin();
        set_report.set(ReportState::Loading);
        set_aggregate.set(None);

        let token = match ctx.access_token() {
            Ok(t) => t,
            Err(e) => {
                set_report.set(ReportState::Failed(ctx.error_text(&e, "report.loadFailed")));
                return;
            }
        };
        let client = ApiClient::new(&token);

        {
            let client = client.clone();
            let id = id.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = client.get_report(&id).await;
                if !generation.is_current(ticket) {
                    return;
                }
                match result {
                    Ok(r) => set_report.set(ReportState::Loaded(Box::new(r))),
                    Err(e) => {
                        crate::log::error(&format!("report {}: {}", id, e));
                        set_report.set(ReportState::Failed(ctx.error_text(&e, "report.loadFailed")));
                    }
                }
            });
        }

        let generation = generation.clone();
        spawn_local(async move {
            let result = client.get_dimensions(&id).await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(agg) => set_aggregate.set(Some(agg)),
                Err(e) => crate::log::error(&format!("dimensions {}: {}", id, e)),
            }
        });
    });

    let body = move || match report.get() {
        ReportState::Loading => view! {
            <p class="loading">{move || ctx.tr("report.loading")}</p>
        }
        .into_any(),
        ReportState::Failed(message) => view! {
            <div class="card error-card">
                <p class="form-error">{message}</p>
                <a href="/dashboard" class="btn btn-secondary">{move || ctx.tr("report.back")}</a>
            </div>
        }
        .into_any(),
        ReportState::Loaded(report) => {
            let report = *report;
            let aggregate = aggregate.get();
            let print_href = AppRoute::ReportPrint { job_id: job_id() }.path();
            let signals_json = serde_json::to_string_pretty(&report.signals).unwrap_or_default();

            let warning = aggregate.as_ref().and_then(|agg| {
                difficult_site(agg).cloned().map(|info| view! {
                    <DifficultSiteWarning
                        info=info
                        detection_message=agg.detection_message.clone()
                        estimated_dimensions=agg.estimated_dimensions.clone()
                    />
                })
            });
            let charts = aggregate.as_ref().map(|agg| {
                let quick_wins = agg.quick_wins.clone();
                view! {
                    <RadarChart dimensions=agg.dimensions.clone() />
                    <DimensionBars dimensions=agg.dimensions.clone() />
                    {(!quick_wins.is_empty()).then(|| view! { <QuickWins quick_wins=quick_wins /> })}
                }
            });

            view! {
                <div class="report-header">
                    <a href="/dashboard" class="back-link">"← " {move || ctx.tr("report.back")}</a>
                    <h1>{report.url.clone()}</h1>
                    {report.site_type.clone().map(|site| view! {
                        <span class="badge">{move || ctx.tr("report.siteType")} ": " {site}</span>
                    })}
                    <a href=print_href class="btn btn-secondary">{move || ctx.tr("report.exportPdf")}</a>
                </div>

                <SummaryCard report=report.clone() aggregate=aggregate.clone() />
                {warning}
                {charts}
                <IssueList issues=report.issues.clone() />
                <SuggestionList suggestions=report.suggestions.clone() />

                <details class="card advanced">
                    <summary>{move || ctx.tr("report.advanced")}</summary>
                    <pre class="raw-signals">{signals_json}</pre>
                </details>
            }
            .into_any()
        }
    };

    view! {
        <DashboardLayout>
            <div class="report">{body}</div>
        </DashboardLayout>
    }
}
