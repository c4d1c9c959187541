//! 端末向けのテキスト整形
//!
//! 画面版と同じく、スコアはバックエンドの値をそのまま使い、
//! 並べ替えや色帯の判定は共通ライブラリの `report` に任せる。

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt::Display;
use trust_wedo_common::i18n::{dimension_name, item_name, status_label};
use trust_wedo_common::report::{
    difficult_site, headline_score, percentage, scored_dimensions, short_scan_id,
    worst_dimension, ScoreBand,
};
use trust_wedo_common::{t, DimensionAggregate, Language, Report, ScanJob};

const BAR_WIDTH: usize = 20;

/// 日時を表示用に整形（ローカル時刻）
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// 日時を指定タイムゾーンで整形
///
/// タイムゾーン無しの値はそのまま時刻として扱い、解釈できなければ元の文字列を返す。
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// テキストの進捗バー
pub fn bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn band_mark(percent: u32) -> &'static str {
    match ScoreBand::for_bar(percent as f64) {
        ScoreBand::Good => "🟢",
        ScoreBand::Fair => "🟡",
        ScoreBand::Poor => "🔴",
    }
}

/// 1件のジョブ状態
pub fn render_job(job: &ScanJob, lang: Language) -> String {
    let mut lines = vec![
        format!("🆔 {}", job.id),
        format!("🌐 {}", job.url),
        format!("📌 {}", status_label(lang, job.status)),
    ];
    if !job.created_at.is_empty() {
        lines.push(format!("🕒 {}", format_timestamp(&job.created_at)));
    }
    // 終端状態では進捗段階は古い情報なので出さない
    if !job.status.is_terminal() {
        if let Some(stage) = job.progress_stage.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("⏳ {}", stage));
        }
    }
    if let Some(message) = job.error_message.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("❌ {}", message));
    }
    lines.join("\n")
}

/// ジョブ一覧（表形式）
pub fn render_scan_list(scans: &[ScanJob], lang: Language) -> String {
    if scans.is_empty() {
        return t(lang, "scans.empty").to_string();
    }

    let mut lines = vec![format!(
        "{:<10} {:<12} {:<17} URL",
        "ID", "STATUS", "CREATED"
    )];
    for job in scans {
        lines.push(format!(
            "{:<10} {:<12} {:<17} {}",
            job.short_id(),
            status_label(lang, job.status),
            format_timestamp(&job.created_at),
            job.url
        ));
    }
    lines.join("\n")
}

/// レポート全体
///
/// 維度スコアが取れなかった場合は規則エンジンの結果だけを出す。
pub fn render_report(
    report: &Report,
    aggregate: Option<&DimensionAggregate>,
    lang: Language,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("🔎 {}", report.url));
    lines.push(format!(
        "   {}: {}",
        t(lang, "print.scanId"),
        short_scan_id(&report.job_id)
    ));
    let conclusion = report.conclusion();
    if !conclusion.is_empty() {
        lines.push(format!("   {}", conclusion));
    }

    if let Some(aggregate) = aggregate {
        render_aggregate(&mut lines, aggregate, lang);
    } else if let Some(summary) = &report.summary {
        if !summary.grade.is_empty() {
            lines.push(format!("   {}: {}", t(lang, "report.grade"), summary.grade));
        }
    }

    if !report.issues.is_empty() {
        lines.push(String::new());
        lines.push(format!("## {}", t(lang, "report.issues")));
        for issue in &report.issues {
            lines.push(format!("  [{}] {}", issue.severity, issue.title));
            if !issue.description.is_empty() {
                lines.push(format!("      {}", issue.description));
            }
        }
    }

    if !report.suggestions.is_empty() {
        lines.push(String::new());
        lines.push(format!("## {}", t(lang, "report.suggestions")));
        for (i, s) in report.suggestions.iter().enumerate() {
            lines.push(format!(
                "  {}. {} ({}: {} / {}: {} / {}: {})",
                i + 1,
                s.action,
                t(lang, "report.priority"),
                s.priority,
                t(lang, "report.impact"),
                s.impact,
                t(lang, "report.effort"),
                s.effort
            ));
            for step in &s.how_to {
                lines.push(format!("     - {}", step));
            }
        }
    }

    lines.join("\n")
}

fn render_aggregate(lines: &mut Vec<String>, aggregate: &DimensionAggregate, lang: Language) {
    let headline = headline_score(aggregate);
    let badge = if headline.estimated {
        format!(" ({})", t(lang, "report.estimatedBadge"))
    } else {
        String::new()
    };
    lines.push(format!(
        "   {}: {:.0}/100  {}: {}{}",
        t(lang, "report.score"),
        headline.score,
        t(lang, "report.grade"),
        headline.grade,
        badge
    ));

    if let Some((key, dim)) = worst_dimension(&aggregate.dimensions) {
        lines.push(format!(
            "   {}: {} ({}%)",
            t(lang, "report.worst"),
            dimension_name(lang, key),
            percentage(dim.score, dim.max)
        ));
    }

    if let Some(info) = difficult_site(aggregate) {
        lines.push(String::new());
        lines.push(t(lang, "report.difficult.title").to_string());
        let name = match lang {
            Language::TraditionalChinese if !info.name_zh.is_empty() => &info.name_zh,
            _ => &info.name,
        };
        lines.push(format!("   {} : {}", name, info.reason));
        if !info.note.is_empty() {
            lines.push(format!("   {}", info.note));
        }
        if let Some(estimated) = &aggregate.estimated_dimensions {
            lines.push(format!("   {}:", t(lang, "report.difficult.breakdown")));
            for (key, value) in estimated {
                lines.push(format!("     {}: {:.0}", dimension_name(lang, key), value));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("## {}", t(lang, "report.dimensions")));
    for (key, dim) in scored_dimensions(&aggregate.dimensions) {
        let pct = percentage(dim.score, dim.max);
        lines.push(format!(
            "  {} {:<24} {} {:>3}%  ({}/{})",
            band_mark(pct),
            dimension_name(lang, key),
            bar(pct),
            pct,
            dim.score,
            dim.max
        ));
        for item in &dim.items {
            lines.push(format!(
                "      {} {} {}/{}",
                item.status.mark(),
                item_name(lang, &item.name),
                item.score,
                item.max
            ));
            if item.status.wants_suggestion() {
                if let Some(suggestion) = item.suggestion.as_deref().filter(|s| !s.is_empty()) {
                    lines.push(format!("         → {}", suggestion));
                }
            }
        }
    }

    if !aggregate.quick_wins.is_empty() {
        lines.push(String::new());
        lines.push(format!("## {}", t(lang, "report.quickWins.title")));
        for (i, win) in aggregate.quick_wins.iter().enumerate() {
            lines.push(format!(
                "  {}. {} ({}: {} / {}: {})",
                i + 1,
                win.title,
                t(lang, "report.impact"),
                win.impact,
                t(lang, "report.effort"),
                win.effort
            ));
            if !win.instructions.is_empty() {
                lines.push(format!("     {}", win.instructions));
            }
            if let Some(snippet) = win.code_snippet.as_deref().filter(|s| !s.is_empty()) {
                for code_line in snippet.lines() {
                    lines.push(format!("     | {}", code_line));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use trust_wedo_common::types::{DifficultSiteInfo, DimensionItem, ItemStatus};
    use trust_wedo_common::{DimensionScore, QuickWin, ScanStatus};

    fn aggregate() -> DimensionAggregate {
        let mut dimensions = BTreeMap::new();
        dimensions.insert(
            "discoverability".to_string(),
            DimensionScore {
                name: "discoverability".to_string(),
                score: 20.0,
                max: 25.0,
                percentage: 80.0,
                items: vec![DimensionItem {
                    name: "title".to_string(),
                    score: 5.0,
                    max: 5.0,
                    status: ItemStatus::Pass,
                    ..Default::default()
                }],
            },
        );
        dimensions.insert(
            "structure".to_string(),
            DimensionScore {
                name: "structure".to_string(),
                score: 4.0,
                max: 20.0,
                percentage: 20.0,
                items: vec![DimensionItem {
                    name: "has_jsonld".to_string(),
                    score: 0.0,
                    max: 10.0,
                    status: ItemStatus::Fail,
                    suggestion: Some("Add JSON-LD".to_string()),
                    ..Default::default()
                }],
            },
        );
        DimensionAggregate {
            total_score: 62.0,
            grade: "C".to_string(),
            dimensions,
            quick_wins: vec![QuickWin {
                title: "Add a meta description".to_string(),
                impact: "high".to_string(),
                effort: "low".to_string(),
                instructions: "Write 150 characters".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn report() -> Report {
        Report {
            job_id: "3f1c2a9e-1111-2222-3333-444455556666".to_string(),
            url: "https://example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0), "░".repeat(BAR_WIDTH));
        assert_eq!(bar(100), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(50).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(bar(250).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_format_timestamp_variants() {
        assert_eq!(
            format_timestamp_in("2026-01-05T10:00:00+09:00", &Utc),
            "2026-01-05 01:00"
        );
        assert_eq!(
            format_timestamp_in("2026-01-05T10:00:00.123456", &Utc),
            "2026-01-05 10:00"
        );
        assert_eq!(format_timestamp_in("yesterday", &Utc), "yesterday");
    }

    #[test]
    fn test_render_report_with_dimensions() {
        let agg = aggregate();
        let text = render_report(&report(), Some(&agg), Language::English);

        assert!(text.contains("Score: 62/100  Grade: C"));
        assert!(text.contains("Fix first: Content structure (20%)"));
        assert!(text.contains("→ Add JSON-LD"));
        assert!(text.contains("1. Add a meta description"));
        assert!(text.contains("Scan ID: 3f1c2a9e"));
        assert!(!text.contains("Estimated"));
    }

    #[test]
    fn test_render_report_difficult_site_uses_estimate() {
        let mut agg = aggregate();
        agg.is_difficult_site = true;
        agg.difficult_site_info = Some(DifficultSiteInfo {
            name: "Facebook".to_string(),
            name_zh: "臉書".to_string(),
            reason: "blocks crawlers".to_string(),
            estimated_score: 85.0,
            estimated_grade: "A".to_string(),
            note: String::new(),
        });

        let text = render_report(&report(), Some(&agg), Language::TraditionalChinese);
        assert!(text.contains("85/100"));
        assert!(text.contains("預估"));
        assert!(text.contains("臉書 : blocks crawlers"));
    }

    #[test]
    fn test_render_report_without_dimensions() {
        let text = render_report(&report(), None, Language::English);
        assert!(text.starts_with("🔎 https://example.com"));
        assert!(!text.contains("Dimension details"));
    }

    #[test]
    fn test_render_job_hides_stage_once_finished() {
        let mut job = ScanJob {
            id: "job-1".to_string(),
            url: "https://example.com".to_string(),
            status: ScanStatus::Processing,
            progress_stage: Some("讀取網站中...".to_string()),
            ..Default::default()
        };
        assert!(render_job(&job, Language::English).contains("⏳ 讀取網站中..."));

        job.status = ScanStatus::Completed;
        let text = render_job(&job, Language::English);
        assert!(!text.contains("⏳"));
        assert!(text.contains("Completed"));
    }

    #[test]
    fn test_render_scan_list() {
        let jobs = vec![ScanJob {
            id: "abcd1234-0000".to_string(),
            url: "https://example.com".to_string(),
            status: ScanStatus::Completed,
            created_at: "2026-01-05T10:00:00.5".to_string(),
            ..Default::default()
        }];
        let text = render_scan_list(&jobs, Language::English);
        let row = text.lines().nth(1).expect("row");
        assert!(row.starts_with("abcd1234"));
        assert!(row.contains("Completed"));
        assert!(row.contains("2026-01-05 10:00"));

        assert_eq!(render_scan_list(&[], Language::English), "No scans yet.");
    }
}
