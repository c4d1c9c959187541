//! ダッシュボード（URL送信とジョブのポーリング）
//!
//! 送信するとジョブを作成し、終端状態まで状態をポーリングする。
//! 完了したらレポート画面へ移動する。画面を離れたらポーリングを止める。

use crate::api::ApiClient;
use crate::app::{use_app, AppContext};
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::progress_modal::ProgressModal;
use crate::components::scan_list::ScanList;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use trust_wedo_common::routes::report_path;
use trust_wedo_common::{
    poll_until_terminal, CancelToken, CreateScanRequest, Error, PollOutcome, PollPolicy, ScanJob,
};

/// ダッシュボードに出す履歴の件数
const RECENT_SCANS: usize = 5;

/// 最近のスキャンを読み込む
pub(crate) fn load_scans(ctx: AppContext, set_scans: WriteSignal<Vec<ScanJob>>) {
    let Ok(token) = ctx.access_token() else {
        return;
    };
    spawn_local(async move {
        match ApiClient::new(&token).list_scans().await {
            Ok(scans) => set_scans.set(scans),
            Err(e) => crate::log::warn(&format!("scan list: {}", e)),
        }
    });
}

/// 入力エラーの文言
pub(crate) fn url_error_text(ctx: AppContext, input: &str, error: &Error) -> String {
    if input.trim().is_empty() {
        ctx.tr_untracked("dashboard.error.emptyUrl").to_string()
    } else {
        ctx.error_text(error, "dashboard.error.invalidUrl")
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let query = use_query_map();

    // ランディングから来た場合はURLを引き継ぐ
    let initial_url = query.read_untracked().get("url").unwrap_or_default();
    let (url, set_url) = signal(initial_url);
    let (error, set_error) = signal(None::<String>);
    let (polling, set_polling) = signal(false);
    let (stage, set_stage) = signal(None::<String>);
    let (recent, set_recent) = signal(Vec::<ScanJob>::new());

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    load_scans(ctx, set_recent);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if polling.get_untracked() {
            return;
        }
        set_error.set(None);

        let input = url.get_untracked();
        let request = match CreateScanRequest::new(&input) {
            Ok(r) => r,
            Err(e) => {
                set_error.set(Some(url_error_text(ctx, &input, &e)));
                return;
            }
        };
        let token = match ctx.access_token() {
            Ok(t) => t,
            Err(e) => {
                set_error.set(Some(ctx.error_text(&e, "auth.sessionExpired")));
                return;
            }
        };

        set_stage.set(None);
        set_polling.set(true);
        let cancel = cancel.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            let client = ApiClient::new(&token);
            let job = match client.create_scan(&request).await {
                Ok(job) => job,
                Err(e) => {
                    crate::log::error(&format!("create scan: {}", e));
                    set_polling.set(false);
                    set_error.set(Some(ctx.error_text(&e, "dashboard.error.createFailed")));
                    return;
                }
            };
            crate::log::info(&format!("scan {} created for {}", job.id, job.url));

            let outcome = poll_until_terminal(
                &client,
                &job.id,
                PollPolicy::default(),
                &cancel,
                crate::timer::sleep,
                |update| set_stage.set(update.progress_stage.clone()),
            )
            .await;

            // 画面を離れた後はシグナルに触らない
            if matches!(outcome, PollOutcome::Cancelled) {
                return;
            }
            set_polling.set(false);

            match outcome {
                PollOutcome::Completed(_) => {
                    navigate(&report_path(&job.id), Default::default());
                }
                PollOutcome::Failed(message) => {
                    let text = message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| ctx.tr_untracked("dashboard.error.failed").to_string());
                    set_error.set(Some(text));
                    load_scans(ctx, set_recent);
                }
                PollOutcome::TimedOut => {
                    set_error.set(Some(ctx.tr_untracked("dashboard.error.timeout").to_string()));
                    load_scans(ctx, set_recent);
                }
                PollOutcome::Cancelled => {}
            }
        });
    };

    view! {
        <DashboardLayout>
            <div class="dashboard-header">
                <h1>{move || ctx.tr("dashboard.title")}</h1>
                <p class="text-muted">{move || ctx.tr("dashboard.subtitle")}</p>
            </div>

            <form class="card scan-form" on:submit=on_submit>
                <label for="scan-url">{move || ctx.tr("dashboard.urlLabel")}</label>
                <div class="scan-form-row">
                    <input
                        type="text"
                        id="scan-url"
                        placeholder="https://example.com"
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary" disabled=move || polling.get()>
                        {move || ctx.tr("dashboard.submit")}
                    </button>
                </div>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            </form>

            <section class="card">
                <h2>{move || ctx.tr("dashboard.history")}</h2>
                <ScanList scans=recent limit=RECENT_SCANS />
            </section>

            <Show when=move || polling.get()>
                <ProgressModal stage=stage />
            </Show>
        </DashboardLayout>
    }
}
