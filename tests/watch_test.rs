//! ジョブ監視テスト
//!
//! 仮想時間（`start_paused`）で待機を一瞬で進める。

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;
use trust_wedo::error::TrustWedoError;
use trust_wedo::watch::{cancellable_sleep, interruptible, watch_job};
use trust_wedo_common::{
    CancelToken, Error, JobStatusSource, Language, PollOutcome, PollPolicy, Result, ScanJob,
    ScanStatus,
};

/// 決められた応答を順に返し、尽きたら `fallback` を返し続ける
struct FakeSource {
    responses: RefCell<VecDeque<Result<ScanJob>>>,
    fallback: ScanStatus,
    calls: Cell<u32>,
}

impl FakeSource {
    fn new(responses: Vec<Result<ScanJob>>, fallback: ScanStatus) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            fallback,
            calls: Cell::new(0),
        }
    }
}

impl JobStatusSource for FakeSource {
    async fn fetch_job(&self, job_id: &str) -> Result<ScanJob> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(job(job_id, self.fallback)))
    }
}

fn job(id: &str, status: ScanStatus) -> ScanJob {
    ScanJob {
        id: id.to_string(),
        url: "https://example.com/".to_string(),
        status,
        ..Default::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_watch_until_completed() {
    let source = FakeSource::new(
        vec![
            Ok(job("job-1", ScanStatus::Pending)),
            Err(Error::Transport("connection reset".into())),
            Ok(job("job-1", ScanStatus::Processing)),
        ],
        ScanStatus::Completed,
    );
    let cancel = CancelToken::new();

    let outcome = watch_job(
        &source,
        "job-1",
        PollPolicy::default(),
        &cancel,
        Language::English,
        false,
    )
    .await;

    match outcome {
        PollOutcome::Completed(job) => assert_eq!(job.id, "job-1"),
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(source.calls.get(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_watch_reports_failure_message() {
    let mut failed = job("job-2", ScanStatus::Failed);
    failed.error_message = Some("site unreachable".to_string());
    let source = FakeSource::new(vec![Ok(failed)], ScanStatus::Failed);
    let cancel = CancelToken::new();

    let outcome = watch_job(
        &source,
        "job-2",
        PollPolicy::default(),
        &cancel,
        Language::English,
        false,
    )
    .await;

    assert!(matches!(outcome, PollOutcome::Failed(Some(ref m)) if m == "site unreachable"));
}

/// 30回の非終端応答でタイムアウト
#[tokio::test(start_paused = true)]
async fn test_watch_times_out() {
    let source = FakeSource::new(vec![], ScanStatus::Processing);
    let cancel = CancelToken::new();

    let outcome = watch_job(
        &source,
        "job-3",
        PollPolicy::default(),
        &cancel,
        Language::English,
        false,
    )
    .await;

    assert!(matches!(outcome, PollOutcome::TimedOut));
    assert_eq!(source.calls.get(), 30);
}

/// 待機中にキャンセルされたら次の取得をしない
#[tokio::test(start_paused = true)]
async fn test_watch_cancelled_while_waiting() {
    let source = FakeSource::new(vec![], ScanStatus::Processing);
    let cancel = CancelToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        trigger.cancel();
    });

    let outcome = watch_job(
        &source,
        "job-4",
        PollPolicy::default(),
        &cancel,
        Language::English,
        false,
    )
    .await;

    assert!(matches!(outcome, PollOutcome::Cancelled));
    assert_eq!(source.calls.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cancellable_sleep_waits_full_duration() {
    let cancel = CancelToken::new();
    let started = tokio::time::Instant::now();
    cancellable_sleep(Duration::from_secs(3), &cancel).await;
    assert!(started.elapsed() >= Duration::from_secs(3));
}

/// 割り込みが先ならタスクを捨ててキャンセル扱い
#[tokio::test(start_paused = true)]
async fn test_interrupt_stops_pending_task() {
    let cancel = CancelToken::new();
    let task = async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok::<_, TrustWedoError>("report")
    };
    let interrupt = tokio::time::sleep(Duration::from_secs(1));

    let started = tokio::time::Instant::now();
    let result = interruptible(task, interrupt, &cancel).await;

    assert!(matches!(result, Err(TrustWedoError::Cancelled)));
    assert!(cancel.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn test_task_finishing_first_is_returned() {
    let cancel = CancelToken::new();
    let task = async { Ok::<_, TrustWedoError>(7) };

    let result = interruptible(task, std::future::pending(), &cancel).await;

    assert!(matches!(result, Ok(7)));
    assert!(!cancel.is_cancelled());
}

/// 監視が終わった後の遅い処理（レポート取得など）も割り込みで止まる
#[tokio::test(start_paused = true)]
async fn test_interrupt_after_watch_completes() {
    let source = FakeSource::new(vec![], ScanStatus::Completed);
    let cancel = CancelToken::new();
    let fetched_report = Cell::new(false);

    let task = async {
        let outcome = watch_job(
            &source,
            "job-5",
            PollPolicy::default(),
            &cancel,
            Language::English,
            false,
        )
        .await;
        assert!(matches!(outcome, PollOutcome::Completed(_)));
        tokio::time::sleep(Duration::from_secs(60)).await;
        fetched_report.set(true);
        Ok::<_, TrustWedoError>(())
    };
    let interrupt = tokio::time::sleep(Duration::from_secs(1));

    let result = interruptible(task, interrupt, &cancel).await;

    assert!(matches!(result, Err(TrustWedoError::Cancelled)));
    assert_eq!(source.calls.get(), 1);
    assert!(!fetched_report.get());
}
