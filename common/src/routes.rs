//! 画面ルート
//!
//! パスとルートの相互変換。Webはこれでナビゲーション先を組み立て、
//! 未実装のルートは `is_placeholder` で判定する。

/// アプリのルート
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Signup,
    Dashboard,
    Scans,
    Report { job_id: String },
    ReportPrint { job_id: String },
    Reports,
    Settings,
    Docs,
    Pricing,
    Playground,
    NotFound(String),
}

impl AppRoute {
    /// パスを解析（末尾スラッシュ・クエリは無視）
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppRoute::Home,
            ["login"] => AppRoute::Login,
            ["signup"] => AppRoute::Signup,
            ["docs"] => AppRoute::Docs,
            ["pricing"] => AppRoute::Pricing,
            ["playground"] => AppRoute::Playground,
            ["dashboard"] => AppRoute::Dashboard,
            ["dashboard", "scans"] => AppRoute::Scans,
            ["dashboard", "settings"] => AppRoute::Settings,
            ["dashboard", "reports"] => AppRoute::Reports,
            ["dashboard", "reports", id] => AppRoute::Report { job_id: id.to_string() },
            ["dashboard", "reports", id, "print"] => AppRoute::ReportPrint { job_id: id.to_string() },
            _ => AppRoute::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Signup => "/signup".to_string(),
            AppRoute::Dashboard => "/dashboard".to_string(),
            AppRoute::Scans => "/dashboard/scans".to_string(),
            AppRoute::Report { job_id } => format!("/dashboard/reports/{}", job_id),
            AppRoute::ReportPrint { job_id } => format!("/dashboard/reports/{}/print", job_id),
            AppRoute::Reports => "/dashboard/reports".to_string(),
            AppRoute::Settings => "/dashboard/settings".to_string(),
            AppRoute::Docs => "/docs".to_string(),
            AppRoute::Pricing => "/pricing".to_string(),
            AppRoute::Playground => "/playground".to_string(),
            AppRoute::NotFound(path) => path.clone(),
        }
    }

    /// ログインが必要なルートか
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            AppRoute::Dashboard
                | AppRoute::Scans
                | AppRoute::Report { .. }
                | AppRoute::ReportPrint { .. }
                | AppRoute::Reports
                | AppRoute::Settings
        )
    }

    /// 未実装（プレースホルダ）のルートか
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            AppRoute::Docs
                | AppRoute::Pricing
                | AppRoute::Playground
                | AppRoute::Reports
                | AppRoute::Settings
        )
    }
}

/// レポート画面へのパス
pub fn report_path(job_id: &str) -> String {
    AppRoute::Report { job_id: job_id.to_string() }.path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(AppRoute::parse("/"), AppRoute::Home);
        assert_eq!(AppRoute::parse(""), AppRoute::Home);
        assert_eq!(AppRoute::parse("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::parse("/dashboard/scans?page=2"), AppRoute::Scans);
        assert_eq!(
            AppRoute::parse("/dashboard/reports/abc-123"),
            AppRoute::Report { job_id: "abc-123".to_string() }
        );
        assert_eq!(
            AppRoute::parse("/dashboard/reports/abc-123/print"),
            AppRoute::ReportPrint { job_id: "abc-123".to_string() }
        );
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(
            AppRoute::parse("/dashboard/billing"),
            AppRoute::NotFound("/dashboard/billing".to_string())
        );
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::Dashboard,
            AppRoute::Scans,
            AppRoute::Report { job_id: "j1".to_string() },
            AppRoute::ReportPrint { job_id: "j1".to_string() },
            AppRoute::Reports,
            AppRoute::Settings,
            AppRoute::Docs,
            AppRoute::Pricing,
            AppRoute::Playground,
        ];
        for route in routes {
            assert_eq!(AppRoute::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_guards_and_placeholders() {
        assert!(AppRoute::Dashboard.requires_session());
        assert!(!AppRoute::Login.requires_session());
        assert!(AppRoute::Docs.is_placeholder());
        assert!(AppRoute::Settings.is_placeholder());
        assert!(!AppRoute::Scans.is_placeholder());
        assert_eq!(report_path("xyz"), "/dashboard/reports/xyz");
    }

    /// 公開側のプレースホルダはログイン不要、ダッシュボード側は必要
    #[test]
    fn test_placeholder_paths_split_by_session() {
        for path in ["/docs", "/pricing", "/playground"] {
            let route = AppRoute::parse(path);
            assert!(route.is_placeholder(), "{}", path);
            assert!(!route.requires_session(), "{}", path);
        }
        for path in ["/dashboard/reports", "/dashboard/settings"] {
            let route = AppRoute::parse(path);
            assert!(route.is_placeholder(), "{}", path);
            assert!(route.requires_session(), "{}", path);
        }
        assert!(!AppRoute::parse("/dashboard/billing").is_placeholder());
        assert!(AppRoute::parse("/dashboard/reports/j1/print").requires_session());
    }
}
