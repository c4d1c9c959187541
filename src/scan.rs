//! スキャンの作成と完了待ち

use crate::client::ApiClient;
use crate::error::{Result, TrustWedoError};
use crate::watch::watch_job;
use trust_wedo_common::{
    t, CancelToken, CreateScanRequest, JobStatusSource, Language, PollOutcome, PollPolicy,
    ScanJob,
};

/// 監視結果をコマンドの結果にする
pub fn outcome_to_result(outcome: PollOutcome, job_id: &str, lang: Language) -> Result<ScanJob> {
    match outcome {
        PollOutcome::Completed(job) => Ok(job),
        PollOutcome::Failed(message) => Err(TrustWedoError::ScanFailed(
            message.unwrap_or_else(|| t(lang, "dashboard.error.retryLater").to_string()),
        )),
        PollOutcome::TimedOut => Err(TrustWedoError::TimedOut(job_id.to_string())),
        PollOutcome::Cancelled => Err(TrustWedoError::Cancelled),
    }
}

/// 既存ジョブを完了まで待つ
pub async fn wait_for<S: JobStatusSource>(
    source: &S,
    job_id: &str,
    policy: PollPolicy,
    cancel: &CancelToken,
    lang: Language,
    show_progress: bool,
) -> Result<ScanJob> {
    let outcome = watch_job(source, job_id, policy, cancel, lang, show_progress).await;
    let job = outcome_to_result(outcome, job_id, lang)?;
    if show_progress {
        println!("✔ {}", t(lang, "scans.status.completed"));
    }
    Ok(job)
}

/// URLを検証してジョブを1件作る（不正なURLならリクエストしない）
pub async fn submit(client: &ApiClient, url: &str) -> Result<ScanJob> {
    let request = CreateScanRequest::new(url)?;
    let job = client.create_scan(&request).await?;
    tracing::info!("created job {} for {}", job.id, request.url);
    Ok(job)
}

/// ジョブを作り、返ってきたIDで完了まで待つ
pub async fn submit_and_wait(
    client: &ApiClient,
    url: &str,
    policy: PollPolicy,
    cancel: &CancelToken,
    lang: Language,
    show_progress: bool,
) -> Result<ScanJob> {
    let job = submit(client, url).await?;
    if show_progress {
        println!("🆔 {}", job.id);
    }
    wait_for(client, &job.id, policy, cancel, lang, show_progress).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use trust_wedo_common::ScanStatus;

    #[test]
    fn test_outcome_completed() {
        let job = ScanJob {
            id: "j1".to_string(),
            status: ScanStatus::Completed,
            ..Default::default()
        };
        let result = outcome_to_result(PollOutcome::Completed(job), "j1", Language::English);
        assert_eq!(result.expect("completed").id, "j1");
    }

    #[test]
    fn test_outcome_failed_falls_back_to_generic_message() {
        let err = outcome_to_result(PollOutcome::Failed(None), "j1", Language::English)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Scan failed: Analysis failed, please try again later"
        );

        let err = outcome_to_result(
            PollOutcome::Failed(Some("site unreachable".to_string())),
            "j1",
            Language::English,
        )
        .unwrap_err();
        assert!(matches!(err, TrustWedoError::ScanFailed(ref m) if m == "site unreachable"));
    }

    #[test]
    fn test_outcome_timeout_keeps_job_id() {
        let err = outcome_to_result(PollOutcome::TimedOut, "j9", Language::English).unwrap_err();
        assert!(matches!(err, TrustWedoError::TimedOut(ref id) if id == "j9"));
        assert!(matches!(
            outcome_to_result(PollOutcome::Cancelled, "j9", Language::English),
            Err(TrustWedoError::Cancelled)
        ));
    }
}
