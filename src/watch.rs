//! ジョブの監視（スピナー表示付き）
//!
//! ポーリング自体は共通ライブラリの `poll_until_terminal` に任せ、
//! ここでは tokio のタイマーと Ctrl-C を繋ぐ。

use crate::error::{Result, TrustWedoError};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use trust_wedo_common::{
    poll_until_terminal, t, CancelToken, JobStatusSource, Language, PollOutcome, PollPolicy,
    ProgressPhase, ScanJob, ScanStatus,
};

/// キャンセル確認の間隔
const CANCEL_CHECK: Duration = Duration::from_millis(200);

/// キャンセルされたら途中で戻るスリープ
pub async fn cancellable_sleep(duration: Duration, cancel: &CancelToken) {
    let deadline = Instant::now() + duration;
    while !cancel.is_cancelled() {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        sleep((deadline - now).min(CANCEL_CHECK)).await;
    }
}

/// Ctrl-C を待つ（ハンドラを登録できなければ完了しない）
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// `interrupt` が先に完了したら `task` を打ち切って `Cancelled` を返す
///
/// `task` は途中で破棄されるので、ポーリング後のレポート取得なども含めて中断できる。
pub async fn interruptible<T, F, I>(task: F, interrupt: I, cancel: &CancelToken) -> Result<T>
where
    F: Future<Output = Result<T>>,
    I: Future<Output = ()>,
{
    tokio::select! {
        result = task => result,
        _ = interrupt => {
            tracing::info!("interrupted");
            cancel.cancel();
            Err(TrustWedoError::Cancelled)
        }
    }
}

/// スピナーに出す進捗文言
pub fn stage_message(job: &ScanJob, lang: Language) -> String {
    match job.progress_stage.as_deref() {
        Some(stage) if !stage.is_empty() => stage.to_string(),
        _ if job.status == ScanStatus::Pending => t(lang, "dashboard.stage.queued").to_string(),
        _ => t(lang, ProgressPhase::from_stage(None).message_key()).to_string(),
    }
}

fn spinner(show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// 終端状態まで監視する
pub async fn watch_job<S: JobStatusSource>(
    source: &S,
    job_id: &str,
    policy: PollPolicy,
    cancel: &CancelToken,
    lang: Language,
    show_progress: bool,
) -> PollOutcome {
    let pb = spinner(show_progress);
    pb.set_message(t(lang, "dashboard.stage.initializing").to_string());

    let outcome = poll_until_terminal(
        source,
        job_id,
        policy,
        cancel,
        |delay| {
            tracing::debug!("next poll in {} ms", delay.as_millis());
            cancellable_sleep(delay, cancel)
        },
        |job: &ScanJob| {
            tracing::debug!("job {} is {}", job.id, job.status);
            pb.set_message(stage_message(job, lang));
        },
    )
    .await;

    pb.finish_and_clear();
    outcome
}
