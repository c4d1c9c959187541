//! 表示文言の多言語化
//!
//! 英語と繁体字中国語（既定）の2言語。キーは `"dashboard.nav.scans"` のような
//! ドット区切りで、見つからないキーはキー文字列をそのまま返す。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 表示言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[default]
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::TraditionalChinese];

    /// 言語コード（localStorageに保存する値）
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::TraditionalChinese => "zh-TW",
        }
    }

    /// 言語コードから解決（`zh`, `zh-Hant` なども中国語扱い）
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        if code.starts_with("zh") {
            Some(Language::TraditionalChinese)
        } else if code.starts_with("en") {
            Some(Language::English)
        } else {
            None
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::TraditionalChinese,
            Language::TraditionalChinese => Language::English,
        }
    }

    /// ナビゲーションに出す短縮表記
    pub fn short_label(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::TraditionalChinese => "ZH",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "English",
            Language::TraditionalChinese => "繁體中文",
        })
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| format!("Unknown language: {}. Use en or zh-TW", s))
    }
}

/// 配色テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}. Use light or dark", s)),
        }
    }
}

/// (キー, 英語, 繁体字中国語)
const MESSAGES: &[(&str, &str, &str)] = &[
    // ナビゲーション
    ("nav.login", "Log in", "登入"),
    ("nav.signup", "Sign up", "註冊"),
    ("nav.dashboard", "Dashboard", "控制台"),
    ("nav.docs", "Docs", "文件"),
    ("nav.pricing", "Pricing", "方案價格"),
    ("nav.playground", "Playground", "體驗場"),
    ("nav.lightMode", "Light Mode", "淺色模式"),
    ("nav.darkMode", "Dark Mode", "深色模式"),
    // ランディング
    ("hero.badge", "AI trust check, now in beta", "AI 可信度健檢 Beta 上線"),
    ("hero.title", "Can AI trust your website?", "AI 信任你的網站嗎？"),
    ("hero.subtitle", "Find out how search engines and AI assistants see your brand, and what to fix first.", "了解搜尋引擎與 AI 助理如何看待你的品牌，以及該優先修正什麼。"),
    ("hero.placeholder", "https://your-brand-website.com", "https://your-brand-website.com"),
    ("hero.cta", "Check my site", "免費健檢"),
    ("problem.title", "AI answers only cite sources it can trust", "AI 只會引用它信任的來源"),
    ("problem.desc", "Missing identity, structure and citations make your site invisible to AI assistants.", "缺少身份、結構與引用，讓你的網站在 AI 助理眼中形同隱形。"),
    ("howItWorks.title", "How it works", "運作方式"),
    ("howItWorks.step1.title", "Enter your URL", "輸入網址"),
    ("howItWorks.step1.desc", "No installation, no code changes.", "無需安裝，無需修改程式碼。"),
    ("howItWorks.step2.title", "We read your site like an AI", "以 AI 的視角讀取網站"),
    ("howItWorks.step2.desc", "Structure, identity, technical health and social proof are checked.", "檢查結構、身份、技術體質與社群證明。"),
    ("howItWorks.step3.title", "Get a scored report", "取得評分報告"),
    ("howItWorks.step3.desc", "A grade, the weakest dimension and quick wins you can apply today.", "等級、最弱維度，以及今天就能做的快速改善。"),
    ("trust.title", "Signals we check", "我們檢查的訊號"),
    ("trust.structured", "Structured data", "結構化資料"),
    ("trust.identity", "Site identity", "網站身份"),
    ("trust.technical", "Technical health", "技術體質"),
    ("trust.social", "Social proof", "社群證明"),
    ("pricing.title", "Simple pricing", "簡單透明的方案"),
    ("pricing.beta.title", "Beta", "Beta 方案"),
    ("pricing.beta.price", "$0", "$0"),
    ("pricing.beta.period", "/month", "/月"),
    ("pricing.beta.description", "Free while in beta. Full reports, unlimited rescans.", "Beta 期間免費，完整報告，無限次重新檢查。"),
    ("pricing.beta.feature1", "Five-dimension trust score", "五大維度可信度評分"),
    ("pricing.beta.feature2", "Quick wins with code snippets", "附程式碼範例的快速改善建議"),
    ("pricing.beta.feature3", "Printable PDF report", "可列印的 PDF 報告"),
    ("pricing.beta.cta", "Start free", "免費開始"),
    ("cta.title", "Ready to be cited by AI?", "準備好被 AI 引用了嗎？"),
    ("cta.button", "Start your free check", "開始免費健檢"),
    ("footer.rights", "All rights reserved.", "版權所有。"),
    ("footer.product", "Product", "產品"),
    ("footer.company", "Company", "公司"),
    ("placeholder.title", "Coming soon", "即將推出"),
    ("placeholder.desc", "This page is not available yet.", "此頁面尚未開放。"),
    ("notFound.title", "Page not found", "找不到頁面"),
    ("notFound.back", "Back to home", "回到首頁"),
    // 認証
    ("auth.login.title", "Welcome back", "歡迎回來"),
    ("auth.login.email", "Email", "電子郵件"),
    ("auth.login.password", "Password", "密碼"),
    ("auth.login.submit", "Log in", "登入"),
    ("auth.login.loading", "Logging in...", "登入中..."),
    ("auth.login.noAccount", "Don't have an account?", "還沒有帳號？"),
    ("auth.login.signupLink", "Sign up", "註冊"),
    ("auth.login.failed", "Invalid email or password", "電子郵件或密碼錯誤"),
    ("auth.signup.title", "Create your account", "建立帳號"),
    ("auth.signup.submit", "Sign up", "註冊"),
    ("auth.signup.loading", "Creating account...", "建立中..."),
    ("auth.signup.hasAccount", "Already have an account?", "已經有帳號？"),
    ("auth.signup.loginLink", "Log in", "登入"),
    ("auth.signup.confirm", "Check your inbox to confirm your email.", "請至信箱確認電子郵件。"),
    ("auth.signup.failed", "Sign up failed", "註冊失敗"),
    ("auth.sessionExpired", "Session expired", "登入已過期"),
    // ダッシュボード
    ("dashboard.nav.overview", "Overview", "總覽"),
    ("dashboard.nav.scans", "Scans", "健檢任務"),
    ("dashboard.nav.reports", "Reports", "報告"),
    ("dashboard.nav.settings", "Settings", "設定"),
    ("dashboard.nav.logout", "Log out", "登出"),
    ("dashboard.title", "Run a website trust check", "開始一次網站可信度健檢"),
    ("dashboard.subtitle", "For creators, marketers and brand sites. Enter a URL and let AI tell you how to look more authoritative.", "適合內容創作者、行銷人、品牌網站。輸入網址，讓 AI 告訴你如何提升權威感。"),
    ("dashboard.urlLabel", "Website to check", "你要檢查的網站網址"),
    ("dashboard.submit", "Start analysis", "立即開始分析"),
    ("dashboard.history", "Recent checks", "歷史檢查記錄"),
    ("dashboard.historyEmpty", "No checks yet.", "尚未有檢查記錄。"),
    ("dashboard.analyzing", "Analyzing...", "正在分析中..."),
    ("dashboard.stageLabel", "Now", "正在進行"),
    ("dashboard.eta", "Usually takes 30-60 seconds.", "預計需要 30-60 秒。"),
    ("dashboard.stage.initializing", "Initializing...", "正在初始化..."),
    ("dashboard.stage.queued", "Queued...", "排隊中..."),
    ("dashboard.stage.reading", "Reading the website", "讀取網站中內容"),
    ("dashboard.stage.analyzing", "Analyzing AI signals", "分析 AI 識別特徵"),
    ("dashboard.stage.reporting", "Generating the trust report", "產生成信度報告"),
    ("dashboard.error.createFailed", "Could not create the check", "建立健檢失敗"),
    ("dashboard.error.failed", "Analysis failed", "分析失敗"),
    ("dashboard.error.retryLater", "Analysis failed, please try again later", "分析失敗，請稍後再試"),
    ("dashboard.error.timeout", "Analysis timed out, check the result in your history later", "分析超時，請稍後在歷史記錄中查看結果"),
    ("dashboard.error.emptyUrl", "Please enter a website URL", "請輸入網站網址"),
    ("dashboard.error.invalidUrl", "Please enter a valid website URL", "請輸入有效的網址"),
    // スキャン一覧
    ("scans.subtitle", "Create and monitor website checks.", "建立並追蹤網站健檢任務。"),
    ("scans.newScan", "New scan", "新增健檢"),
    ("scans.create", "Create", "建立"),
    ("scans.creating", "Creating...", "建立中..."),
    ("scans.recent", "Recent scans", "最近的健檢"),
    ("scans.loading", "Loading scans...", "載入中..."),
    ("scans.empty", "No scans yet.", "尚無健檢任務。"),
    ("scans.status.pending", "Pending", "等待中"),
    ("scans.status.processing", "Processing", "分析中"),
    ("scans.status.completed", "Completed", "已完成"),
    ("scans.status.failed", "Failed", "失敗"),
    ("scans.status.unknown", "Unknown", "未知"),
    // レポート
    ("report.loading", "Generating the trust report...", "正在產生成信度報告..."),
    ("report.loadFailed", "Could not load the report", "無法載入報告"),
    ("report.back", "← Back to checks", "← 返回健檢列表"),
    ("report.overall", "Overall AI trust score", "AI 信任度總體評分"),
    ("report.grade", "Grade", "等級"),
    ("report.worst", "Fix first", "最需優先改善"),
    ("report.estimatedBadge", "Estimated", "預估"),
    ("report.radarTitle", "Five-dimension overview", "五大維度總覽"),
    ("report.radarHint", "Higher percentage means a stronger dimension", "百分比愈高代表該維度表現愈好"),
    ("report.dimensions", "Dimension details", "維度明細"),
    ("report.issues", "Current trust gaps", "目前的信任缺口"),
    ("report.suggestions", "Recommended actions", "建議採取的行動"),
    ("report.priority", "Priority", "優先級"),
    ("report.impact", "Impact", "影響"),
    ("report.effort", "Effort", "難度"),
    ("report.advanced", "Advanced technical data", "進階技術分析資料"),
    ("report.exportPdf", "Export PDF report", "匯出 PDF 報告"),
    ("report.siteType", "Site type", "網站類型"),
    ("report.score", "Score", "分數"),
    ("report.quickWins.title", "🚀 Quick wins - results in 3 minutes", "🚀 快速提升分數 - 3 分鐘見效"),
    ("report.quickWins.desc", "The easiest items to improve; apply them now to raise your score", "以下是最容易改善的項目，立即實施即可看到分數提升"),
    ("report.quickWins.copy", "📋 Copy", "📋 複製"),
    ("report.quickWins.copied", "✓ Copied", "✓ 已複製"),
    ("report.difficult.title", "⚠️ Score may be inaccurate", "⚠️ 評分可能不準確"),
    ("report.difficult.estimated", "Estimated score (based on site type)", "預估分數 (基於網站類型)"),
    ("report.difficult.breakdown", "Estimated dimension breakdown", "預估維度明細"),
    // 印刷用レポート
    ("print.subtitle", "AI trust check report", "AI 信任度健檢報告"),
    ("print.dimensions", "Five-dimension analysis", "五大維度分析"),
    ("print.quickWins", "Quick wins (top 3)", "快速提升建議 (Top 3)"),
    ("print.gaps", "Trust gap summary", "信任缺口摘要"),
    ("print.engine", "Engine version", "引擎版本"),
    ("print.scanId", "Scan ID", "掃描編號"),
    ("print.page", "Page 1 of 1", "第 1 頁 / 共 1 頁"),
    ("print.loading", "Loading...", "載入中..."),
    ("print.defaultConclusion", "Analysis complete", "分析完成"),
    ("print.print", "Print", "列印"),
    // 信頼ギャップ
    ("gaps.title", "Missing site title", "缺少網站標題"),
    ("gaps.description", "Missing site description", "缺少網站描述"),
    ("gaps.schema", "Missing structured data", "缺少結構化資料"),
    ("gaps.author", "Missing author / organization info", "缺少作者/組織資訊"),
    ("gaps.social", "Weak social proof", "社群證明不足"),
    // 維度名
    ("dimension.discoverability", "AI discoverability", "AI 可發現性"),
    ("dimension.identity", "Identity credibility", "身分可信度"),
    ("dimension.structure", "Content structure", "內容結構化"),
    ("dimension.social", "Social trust", "社群信任"),
    ("dimension.trust", "Trust signals", "信任訊號"),
    ("dimension.technical", "Technical foundation", "技術基礎"),
    // 明細項目名
    ("item.title", "Site title", "網站標題"),
    ("item.description", "Site description", "網站描述"),
    ("item.favicon", "Favicon", "網站圖示"),
    ("item.https", "HTTPS", "HTTPS 加密連線"),
    ("item.performance", "Page load speed", "頁面載入速度"),
    ("item.mobile_friendly", "Mobile friendly", "行動裝置適配"),
    ("item.basic_usability", "Basic usability", "基礎可用性"),
    ("item.identity_page", "About / contact page", "關於/聯繫頁面"),
    ("item.social_presence", "Social links", "社群連結"),
    ("item.schema_missing", "Schema.org structured data", "Schema.org 結構化資料"),
    ("item.basic_schema", "Basic schema setup", "基礎 Schema 設定"),
    ("item.schema_detail", "Schema depth", "Schema 深度分析"),
    ("item.organization", "Organization info", "組織資訊"),
    ("item.author", "Author info", "作者資訊"),
    ("item.contact", "Contact info", "聯絡資訊"),
    ("item.has_jsonld", "Schema.org structured data", "Schema.org 結構化資料"),
    // 共通
    ("common.unknownError", "Something went wrong", "發生未知錯誤"),
];

/// 文言を引く（見つからなければキーをそのまま返す）
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    MESSAGES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, zh)| match lang {
            Language::English => *en,
            Language::TraditionalChinese => *zh,
        })
        .unwrap_or(key)
}

/// プレフィックス付きで引き、無ければ生の名前を返す
fn lookup_or_raw<'a>(lang: Language, prefix: &str, name: &'a str) -> &'a str {
    let key = format!("{}.{}", prefix, name);
    MESSAGES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, zh)| match lang {
            Language::English => *en,
            Language::TraditionalChinese => *zh,
        })
        .unwrap_or(name)
}

/// 維度IDの表示名
pub fn dimension_name(lang: Language, dimension: &str) -> &str {
    lookup_or_raw(lang, "dimension", dimension)
}

/// 明細項目名の表示名
pub fn item_name(lang: Language, item: &str) -> &str {
    lookup_or_raw(lang, "item", item)
}

/// ジョブ状態の表示名
pub fn status_label(lang: Language, status: crate::types::ScanStatus) -> &'static str {
    let key = match status {
        crate::types::ScanStatus::Pending => "scans.status.pending",
        crate::types::ScanStatus::Processing => "scans.status.processing",
        crate::types::ScanStatus::Completed => "scans.status.completed",
        crate::types::ScanStatus::Failed => "scans.status.failed",
        crate::types::ScanStatus::Unknown => "scans.status.unknown",
    };
    t(lang, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanStatus;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_both_languages() {
        assert_eq!(t(Language::English, "dashboard.nav.scans"), "Scans");
        assert_eq!(t(Language::TraditionalChinese, "dashboard.nav.scans"), "健檢任務");
    }

    #[test]
    fn test_unknown_key_echoes_key() {
        assert_eq!(t(Language::English, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_table_is_complete_and_unique() {
        let mut seen = HashSet::new();
        for (key, en, zh) in MESSAGES {
            assert!(seen.insert(*key), "duplicated key: {}", key);
            assert!(!en.is_empty(), "missing English text for {}", key);
            assert!(!zh.is_empty(), "missing Chinese text for {}", key);
        }
    }

    #[test]
    fn test_dimension_and_item_names() {
        assert_eq!(dimension_name(Language::TraditionalChinese, "discoverability"), "AI 可發現性");
        assert_eq!(dimension_name(Language::English, "custom_dim"), "custom_dim");
        assert_eq!(item_name(Language::TraditionalChinese, "https"), "HTTPS 加密連線");
        assert_eq!(item_name(Language::English, "llms_txt"), "llms_txt");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(Language::English, ScanStatus::Failed), "Failed");
        assert_eq!(status_label(Language::TraditionalChinese, ScanStatus::Completed), "已完成");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("zh-TW"), Some(Language::TraditionalChinese));
        assert_eq!(Language::from_code("zh-Hant"), Some(Language::TraditionalChinese));
        assert_eq!(Language::from_code("en-US"), Some(Language::English));
        assert_eq!(Language::from_code("ja"), None);
        assert_eq!(Language::English.toggled().code(), "zh-TW");
        assert_eq!(Language::default(), Language::TraditionalChinese);
    }

    #[test]
    fn test_language_serde_uses_codes() {
        let json = serde_json::to_string(&Language::TraditionalChinese).unwrap();
        assert_eq!(json, "\"zh-TW\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("blue".parse::<Theme>().is_err());
        assert!(Theme::Light.toggled().is_dark());
    }
}
