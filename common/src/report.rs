//! レポート表示用のロジック（CLI/WASM共通）
//!
//! スコアの計算はすべてバックエンドが行う。ここにあるのは表示のための
//! 並べ替え・抽出・色分けだけ。

use crate::types::{DimensionAggregate, DimensionScore, QuickWin, Report};
use std::collections::BTreeMap;

/// 印刷用レポートに載せるクイックウィンの数
pub const PRINT_QUICK_WINS: usize = 3;
/// 印刷用レポートに載せる信頼ギャップの上限
pub const MAX_TRUST_GAPS: usize = 5;

/// 得点率（0.0〜1.0）。`max` が0以下なら None
pub fn ratio(score: f64, max: f64) -> Option<f64> {
    if max > 0.0 {
        Some(score / max)
    } else {
        None
    }
}

/// 表示用のパーセンテージ（四捨五入）
pub fn percentage(score: f64, max: f64) -> u32 {
    ratio(score, max)
        .map(|r| (r * 100.0).round().clamp(0.0, 100.0) as u32)
        .unwrap_or(0)
}

/// 最も得点率の低い維度
///
/// `max > 0` の維度だけを比較する。同率ならマップの反復順で先に来たもの
/// （BTreeMapなのでキーの辞書順）を採る。
pub fn worst_dimension(
    dimensions: &BTreeMap<String, DimensionScore>,
) -> Option<(&str, &DimensionScore)> {
    let mut worst: Option<(&str, &DimensionScore, f64)> = None;

    for (key, dim) in dimensions {
        let Some(r) = ratio(dim.score, dim.max) else {
            continue;
        };
        match worst {
            Some((_, _, best)) if r >= best => {}
            _ => worst = Some((key.as_str(), dim, r)),
        }
    }

    worst.map(|(key, dim, _)| (key, dim))
}

/// バー表示の対象となる維度（`max > 0`）
pub fn scored_dimensions(
    dimensions: &BTreeMap<String, DimensionScore>,
) -> impl Iterator<Item = (&String, &DimensionScore)> {
    dimensions.iter().filter(|(_, dim)| dim.max > 0.0)
}

/// スコアの色帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    /// 画面の進捗バー: 80以上 / 50以上 / それ未満
    pub fn for_bar(percentage: f64) -> Self {
        Self::with_thresholds(percentage, 80.0, 50.0)
    }

    /// 印刷用レポート: 80以上 / 60以上 / それ未満
    pub fn for_print(percentage: f64) -> Self {
        Self::with_thresholds(percentage, 80.0, 60.0)
    }

    fn with_thresholds(percentage: f64, good: f64, fair: f64) -> Self {
        if percentage >= good {
            ScoreBand::Good
        } else if percentage >= fair {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    /// CSSクラス名の接尾辞
    pub fn class_suffix(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            ScoreBand::Good => "#22c55e",
            ScoreBand::Fair => "#f59e0b",
            ScoreBand::Poor => "#ef4444",
        }
    }
}

/// 等級の色
pub fn grade_hex(grade: &str) -> &'static str {
    match grade {
        "A" => "#22c55e",
        "B" => "#3b82f6",
        "C" => "#f59e0b",
        "D" => "#ef4444",
        "F" => "#dc2626",
        _ => "#6b7280",
    }
}

/// 等級バッジのCSSクラス
pub fn grade_class(grade: &str) -> &'static str {
    match grade {
        "A" => "grade-a",
        "B" => "grade-b",
        "C" => "grade-c",
        "D" | "F" => "grade-d",
        _ => "grade-unknown",
    }
}

/// サマリーカードに出す総合点
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineScore {
    pub score: f64,
    pub grade: String,
    /// 難サイトの推定値を出しているか
    pub estimated: bool,
}

/// 総合点を決める: 難サイトならバックエンドの推定値、そうでなければ実測値
pub fn headline_score(aggregate: &DimensionAggregate) -> HeadlineScore {
    match difficult_site(aggregate) {
        Some(info) => HeadlineScore {
            score: info.estimated_score,
            grade: info.estimated_grade.clone(),
            estimated: true,
        },
        None => HeadlineScore {
            score: aggregate.total_score,
            grade: aggregate.grade.clone(),
            estimated: false,
        },
    }
}

/// 難サイト情報（フラグと情報の両方が揃っているときだけ）
pub fn difficult_site(aggregate: &DimensionAggregate) -> Option<&crate::types::DifficultSiteInfo> {
    if aggregate.is_difficult_site {
        aggregate.difficult_site_info.as_ref()
    } else {
        None
    }
}

/// 印刷用のクイックウィン（先頭から最大3件）
pub fn print_quick_wins(quick_wins: &[QuickWin]) -> &[QuickWin] {
    &quick_wins[..quick_wins.len().min(PRINT_QUICK_WINS)]
}

/// 信頼ギャップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustGap {
    MissingTitle,
    MissingDescription,
    MissingSchema,
    MissingAuthorOrOrganization,
    WeakSocialProof,
}

impl TrustGap {
    /// i18nキー
    pub fn message_key(&self) -> &'static str {
        match self {
            TrustGap::MissingTitle => "gaps.title",
            TrustGap::MissingDescription => "gaps.description",
            TrustGap::MissingSchema => "gaps.schema",
            TrustGap::MissingAuthorOrOrganization => "gaps.author",
            TrustGap::WeakSocialProof => "gaps.social",
        }
    }
}

/// シグナルから信頼ギャップを抽出（最大5件）
pub fn trust_gaps(report: &Report) -> Vec<TrustGap> {
    let mut gaps = Vec::new();

    if !report.signal_flag("has_title") {
        gaps.push(TrustGap::MissingTitle);
    }
    if !report.signal_flag("has_description") {
        gaps.push(TrustGap::MissingDescription);
    }
    if !report.signal_flag("has_schema") && schema_count(report) == 0 {
        gaps.push(TrustGap::MissingSchema);
    }
    if !report.signal_flag("has_author") && !report.signal_flag("has_organization") {
        gaps.push(TrustGap::MissingAuthorOrOrganization);
    }
    if !report.signal_flag("has_social_links") {
        gaps.push(TrustGap::WeakSocialProof);
    }

    gaps.truncate(MAX_TRUST_GAPS);
    gaps
}

fn schema_count(report: &Report) -> u64 {
    report
        .signals
        .get("schema_count")
        .and_then(|v| v.as_u64())
        .unwrap_or(0)
}

/// 掃描編號の短縮表示（先頭8文字）
pub fn short_scan_id(job_id: &str) -> &str {
    match job_id.char_indices().nth(8) {
        Some((idx, _)) => &job_id[..idx],
        None => job_id,
    }
}
