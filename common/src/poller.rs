//! ジョブ状態のポーリング
//!
//! 状態取得の結果を受け取り、次に何をするか（待機・完了・失敗・タイムアウト）を
//! 決める純粋な状態機械 `JobPoller` と、それを回す非同期ドライバ
//! `poll_until_terminal` を提供する。
//!
//! ドライバはランタイム非依存: スリープ関数を外から渡すので、
//! CLIでは `tokio::time::sleep`、WASMでは gloo のタイマーで動く。

use crate::error::Result;
use crate::types::{ScanJob, ScanStatus};
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// ポーリング方針
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollPolicy {
    /// 最初の待機間隔
    pub initial_interval: Duration,
    /// 非終端レスポンスごとの間隔倍率
    pub backoff_factor: f64,
    /// 間隔の上限
    pub max_interval: Duration,
    /// 状態レスポンスの最大回数
    pub max_attempts: u32,
    /// 通信エラー時の固定待機
    pub error_retry: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(2000),
            backoff_factor: 1.5,
            max_interval: Duration::from_millis(10_000),
            max_attempts: 30,
            error_retry: Duration::from_millis(5000),
        }
    }
}

/// 状態機械が返す次の一手
#[derive(Debug, Clone, PartialEq)]
pub enum PollStep {
    /// 指定時間待ってから再取得
    Retry(Duration),
    Completed,
    /// 失敗（バックエンドのエラーメッセージがあれば保持）
    Failed(Option<String>),
    TimedOut,
}

/// ポーリングの状態機械
#[derive(Debug, Clone)]
pub struct JobPoller {
    policy: PollPolicy,
    attempts: u32,
    interval: Duration,
}

impl JobPoller {
    pub fn new(policy: PollPolicy) -> Self {
        Self {
            interval: policy.initial_interval,
            policy,
            attempts: 0,
        }
    }

    /// 受け取った状態レスポンスの数
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// 状態レスポンスを受け取った
    pub fn on_status(&mut self, status: ScanStatus, error_message: Option<&str>) -> PollStep {
        self.attempts += 1;

        match status {
            ScanStatus::Completed => PollStep::Completed,
            ScanStatus::Failed => PollStep::Failed(
                error_message
                    .filter(|m| !m.trim().is_empty())
                    .map(str::to_string),
            ),
            _ if self.attempts >= self.policy.max_attempts => PollStep::TimedOut,
            _ => {
                let delay = self.interval;
                self.interval = self.next_interval();
                PollStep::Retry(delay)
            }
        }
    }

    /// 通信エラー: 固定時間後に再試行（間隔・回数は変えない）
    pub fn on_transport_error(&mut self) -> PollStep {
        PollStep::Retry(self.policy.error_retry)
    }

    fn next_interval(&self) -> Duration {
        let next_ms = self.interval.as_millis() as f64 * self.policy.backoff_factor;
        let cap_ms = self.policy.max_interval.as_millis() as f64;
        Duration::from_millis(next_ms.min(cap_ms).round() as u64)
    }
}

/// 進捗モーダルの段階
///
/// バックエンドの `progress_stage` 文言からキーワードで判定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProgressPhase {
    Starting,
    Reading,
    Analyzing,
    Reporting,
    Done,
}

impl ProgressPhase {
    /// 表示する3段階
    pub const STEPS: [ProgressPhase; 3] = [
        ProgressPhase::Reading,
        ProgressPhase::Analyzing,
        ProgressPhase::Reporting,
    ];

    pub fn from_stage(stage: Option<&str>) -> Self {
        let Some(stage) = stage else {
            return ProgressPhase::Starting;
        };
        let lower = stage.to_lowercase();
        let has = |zh: &str, en: &str| stage.contains(zh) || lower.contains(en);

        if has("完成", "complete") {
            ProgressPhase::Done
        } else if has("報告", "report") {
            ProgressPhase::Reporting
        } else if has("分析", "analy") {
            ProgressPhase::Analyzing
        } else if has("讀取", "read") {
            ProgressPhase::Reading
        } else {
            ProgressPhase::Starting
        }
    }

    /// 段階 `step` を終えたか
    pub fn has_passed(&self, step: ProgressPhase) -> bool {
        *self > step
    }

    /// 段階 `step` の最中か
    pub fn is_at(&self, step: ProgressPhase) -> bool {
        *self == step
    }

    /// i18nキー
    pub fn message_key(&self) -> &'static str {
        match self {
            ProgressPhase::Starting => "dashboard.stage.initializing",
            ProgressPhase::Reading => "dashboard.stage.reading",
            ProgressPhase::Analyzing => "dashboard.stage.analyzing",
            ProgressPhase::Reporting | ProgressPhase::Done => "dashboard.stage.reporting",
        }
    }
}

/// キャンセル用トークン
///
/// クローンは同じフラグを共有する。画面離脱時やCtrl-Cで `cancel()` する。
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// 取得要求の世代
///
/// 画面の対象が変わるたびに `begin()` で世代を進める。応答が返った時点で
/// `is_current()` が偽なら、その結果は古いので捨てる。
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい世代を始め、その番号を返す
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

/// ジョブ状態の取得元
///
/// WASMのfetchはSendでないので、Send境界は付けない。
#[allow(async_fn_in_trait)]
pub trait JobStatusSource {
    async fn fetch_job(&self, job_id: &str) -> Result<ScanJob>;
}

/// ポーリングの最終結果
#[derive(Debug, Clone)]
pub enum PollOutcome {
    Completed(ScanJob),
    Failed(Option<String>),
    TimedOut,
    Cancelled,
}

/// 終端状態までポーリングする
///
/// 1回目の取得は即座に行う。`on_update` は取得に成功するたびに呼ばれる
/// （進捗段階の表示用）。通信エラーは固定間隔で再試行し、APIエラーや
/// 不正なレスポンスは非終端の応答として回数に数える。
pub async fn poll_until_terminal<S, F, Fut, U>(
    source: &S,
    job_id: &str,
    policy: PollPolicy,
    cancel: &CancelToken,
    sleep: F,
    mut on_update: U,
) -> PollOutcome
where
    S: JobStatusSource,
    F: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
    U: FnMut(&ScanJob),
{
    let mut poller = JobPoller::new(policy);

    loop {
        if cancel.is_cancelled() {
            return PollOutcome::Cancelled;
        }

        let (step, job) = match source.fetch_job(job_id).await {
            Ok(job) => {
                on_update(&job);
                let step = poller.on_status(job.status, job.error_message.as_deref());
                (step, Some(job))
            }
            Err(e) if e.is_transport() => (poller.on_transport_error(), None),
            Err(_) => (poller.on_status(ScanStatus::Unknown, None), None),
        };

        match step {
            PollStep::Completed => {
                return PollOutcome::Completed(job.unwrap_or_default());
            }
            PollStep::Failed(message) => return PollOutcome::Failed(message),
            PollStep::TimedOut => return PollOutcome::TimedOut,
            PollStep::Retry(delay) => {
                sleep(delay).await;
            }
        }
    }
}
