//! APIレスポンスの型定義
//!
//! CLIとWeb(WASM)で共有されるDTO:
//! - ScanJob: スキャンジョブ（`/api/scans`）
//! - Report: 規則エンジンのレポート（`/api/reports/:id`）
//! - DimensionAggregate: 維度スコアの集計（`/api/reports/:id/dimensions`）
//!
//! どれもバックエンドが所有するデータで、クライアント側では読むだけ。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ジョブの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    /// 未知の状態文字列（非終端として扱う）
    #[serde(other)]
    Unknown,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Pending => "pending",
            ScanStatus::Processing => "processing",
            ScanStatus::Completed => "completed",
            ScanStatus::Failed => "failed",
            ScanStatus::Unknown => "unknown",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanStatus::Completed | ScanStatus::Failed)
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// スキャンジョブ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanJob {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub status: ScanStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// 進捗段階（例: "讀取網站中..."）
    #[serde(default)]
    pub progress_stage: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ScanJob {
    /// 一覧表示用の短縮ID（最初の `-` まで）
    pub fn short_id(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }
}

/// レポートの問題点
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub severity: String,
    pub title: String,
    pub description: String,
    pub why: Option<String>,
}

/// 改善提案
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    pub priority: String,
    pub effort: String,
    pub impact: String,
    pub action: String,
    pub impact_desc: Option<String>,
    pub how_to: Vec<String>,
}

/// レポート概要
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSummary {
    pub conclusion: String,
    pub grade: String,
    pub total_issues: Option<u32>,
}

/// 規則エンジンのレポート
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    pub job_id: String,
    pub url: String,
    pub status: Option<ScanStatus>,
    pub summary: Option<ReportSummary>,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    /// 抽出されたシグナル（キーはバックエンド次第なのでMapのまま持つ）
    pub signals: serde_json::Map<String, serde_json::Value>,
    pub site_type: Option<String>,
    pub site_type_confidence: Option<f64>,
    pub report_version: Option<String>,
    pub rules_fired: Vec<String>,
}

impl Report {
    /// シグナルの真偽値（なければ `false`）
    pub fn signal_flag(&self, key: &str) -> bool {
        self.signals
            .get(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    /// 一言結論（概要がなければ空文字）
    pub fn conclusion(&self) -> &str {
        self.summary.as_ref().map(|s| s.conclusion.as_str()).unwrap_or("")
    }
}

/// 明細項目の判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pass,
    Fail,
    Partial,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ItemStatus {
    pub fn mark(&self) -> &'static str {
        match self {
            ItemStatus::Pass => "✅",
            ItemStatus::Partial => "⚠️",
            ItemStatus::Fail | ItemStatus::Unknown => "❌",
        }
    }

    /// 改善提案を表示すべき状態か
    pub fn wants_suggestion(&self) -> bool {
        matches!(self, ItemStatus::Fail | ItemStatus::Partial)
    }
}

/// 維度の明細項目
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionItem {
    pub name: String,
    pub score: f64,
    pub max: f64,
    pub status: ItemStatus,
    pub details: Option<String>,
    pub suggestion: Option<String>,
}

/// 1つの維度のスコア
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionScore {
    pub name: String,
    pub score: f64,
    pub max: f64,
    pub percentage: f64,
    pub items: Vec<DimensionItem>,
}

/// クイックウィン（低コスト・高効果の改善策）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickWin {
    pub title: String,
    pub impact: String,
    pub effort: String,
    pub dimension: String,
    pub instructions: String,
    pub code_snippet: Option<String>,
    pub priority: i32,
}

/// 難サイト情報（バックエンドが推定スコアを付けてくる）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultSiteInfo {
    pub name: String,
    pub name_zh: String,
    pub reason: String,
    pub estimated_score: f64,
    pub estimated_grade: String,
    pub note: String,
}

/// 維度スコアの集計
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionAggregate {
    pub total_score: f64,
    pub grade: String,
    /// 維度ID → スコア（キー順で反復）
    pub dimensions: BTreeMap<String, DimensionScore>,
    pub quick_wins: Vec<QuickWin>,
    pub is_difficult_site: bool,
    #[serde(alias = "difficult_site")]
    pub difficult_site_info: Option<DifficultSiteInfo>,
    pub estimated_dimensions: Option<BTreeMap<String, f64>>,
    pub detection_message: Option<String>,
}
