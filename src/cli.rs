use clap::{Parser, Subcommand};
use trust_wedo_common::{Language, Theme};

#[derive(Parser)]
#[command(name = "trust-wedo")]
#[command(about = "Trust WEDO: AIから見たウェブサイトの信頼度を診断する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メールアドレスとパスワードでログイン
    Login {
        /// メールアドレス（省略時は対話入力）
        #[arg(short, long)]
        email: Option<String>,
    },

    /// アカウントを作成
    Signup {
        /// メールアドレス（省略時は対話入力）
        #[arg(short, long)]
        email: Option<String>,
    },

    /// ログアウト（保存済みセッションを破棄）
    Logout,

    /// 診断ジョブを作成し、完了まで待ってレポートを表示
    Scan {
        /// 診断するURL（スキーム省略時は https）
        #[arg(required = true)]
        url: String,

        /// 作成だけして待たない
        #[arg(long)]
        no_wait: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ジョブの状態を1回だけ取得
    Status {
        #[arg(required = true)]
        job_id: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 既存ジョブを完了まで監視
    Watch {
        #[arg(required = true)]
        job_id: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 自分のジョブ一覧
    Scans {
        /// 表示件数
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 完了したジョブのレポートを表示
    Report {
        #[arg(required = true)]
        job_id: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定の表示・変更
    Config {
        /// APIのベースURL
        #[arg(long)]
        api_url: Option<String>,

        /// 表示言語 (en/zh-TW)
        #[arg(long)]
        lang: Option<Language>,

        /// テーマ (light/dark)
        #[arg(long)]
        theme: Option<Theme>,

        /// 言語を切り替え
        #[arg(long, conflicts_with = "lang")]
        toggle_lang: bool,

        /// テーマを切り替え
        #[arg(long, conflicts_with = "theme")]
        toggle_theme: bool,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

impl Commands {
    /// 端末から入力を読むコマンドか（パスワードは常に対話入力）
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Login { .. } | Commands::Signup { .. })
    }
}
