use anyhow::Context;
use clap::Parser;
use dialoguer::{Input, Password};
use std::path::Path;
use trust_wedo::{cli, client, config, error, render, scan, watch};
use cli::{Cli, Commands};
use client::{ApiClient, AuthClient};
use config::Config;
use error::{Result, TrustWedoError};
use tracing_subscriber::EnvFilter;
use trust_wedo_common::{
    t, AuthOutcome, CancelToken, Language, PasswordCredentials, PollPolicy, ScanJob,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = Config::config_path()?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;

    // 対話入力中はCtrl-Cを奪わない（端末の既定動作で終了させる）
    let cancel = CancelToken::new();
    if cli.command.is_interactive() {
        run(cli.command, config, &config_path, &cancel).await?;
    } else {
        let task = run(cli.command, config, &config_path, &cancel);
        watch::interruptible(task, watch::ctrl_c(), &cancel).await?;
    }
    Ok(())
}

/// ログは標準エラーへ（`RUST_LOG` があればそちらを優先）
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

async fn run(
    command: Commands,
    mut config: Config,
    config_path: &Path,
    cancel: &CancelToken,
) -> Result<()> {
    let lang = config.language;

    match command {
        Commands::Login { email } => {
            let email = prompt_email(email)?;
            let password = Password::new()
                .with_prompt(t(lang, "auth.login.password"))
                .interact()
                .map_err(|e| TrustWedoError::Prompt(e.to_string()))?;
            let credentials = PasswordCredentials::new(&email, &password)?;

            println!("🔑 {}", t(lang, "auth.login.loading"));
            let auth = AuthClient::new(config.auth_endpoints())?;
            let session = auth.sign_in(&credentials, now()).await?;
            println!("✔ {}", session.email());

            config.session = Some(session);
            config.save_to(config_path)?;
        }

        Commands::Signup { email } => {
            let email = prompt_email(email)?;
            let password = Password::new()
                .with_prompt(t(lang, "auth.login.password"))
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| TrustWedoError::Prompt(e.to_string()))?;
            let credentials = PasswordCredentials::new(&email, &password)?;

            println!("📝 {}", t(lang, "auth.signup.loading"));
            let auth = AuthClient::new(config.auth_endpoints())?;
            match auth.sign_up(&credentials, now()).await? {
                AuthOutcome::SignedIn(session) => {
                    println!("✔ {}", session.email());
                    config.session = Some(session);
                    config.save_to(config_path)?;
                }
                AuthOutcome::ConfirmationRequired => {
                    println!("📧 {}", t(lang, "auth.signup.confirm"));
                }
            }
        }

        Commands::Logout => match config.session.take() {
            Some(session) => {
                let auth = AuthClient::new(config.auth_endpoints())?;
                // サーバ側の失効に失敗してもローカルのセッションは消す
                if let Err(e) = auth.sign_out(&session.access_token).await {
                    tracing::warn!("server sign-out failed: {}", e);
                }
                config.save_to(config_path)?;
                println!("✔ {}", t(lang, "dashboard.nav.logout"));
            }
            None => println!("Not logged in"),
        },

        Commands::Scan { url, no_wait, json } => {
            let client = api_client(&config)?;
            if !json {
                println!("🔎 {}", url.trim());
            }

            if no_wait {
                let job = scan::submit(&client, &url).await?;
                print_job(&job, lang, json)?;
                return Ok(());
            }

            let job =
                scan::submit_and_wait(&client, &url, PollPolicy::default(), cancel, lang, !json)
                    .await?;
            show_report(&client, &job.id, lang, json).await?;
        }

        Commands::Status { job_id, json } => {
            let client = api_client(&config)?;
            let job = client.get_scan(&job_id).await?;
            print_job(&job, lang, json)?;
        }

        Commands::Watch { job_id, json } => {
            let client = api_client(&config)?;
            let job =
                scan::wait_for(&client, &job_id, PollPolicy::default(), cancel, lang, !json)
                    .await?;
            show_report(&client, &job.id, lang, json).await?;
        }

        Commands::Scans { limit, json } => {
            let client = api_client(&config)?;
            let mut scans = client.list_scans().await?;
            scans.truncate(limit);
            if json {
                println!("{}", serde_json::to_string_pretty(&scans)?);
            } else {
                println!("{}", render::render_scan_list(&scans, lang));
            }
        }

        Commands::Report { job_id, json } => {
            let client = api_client(&config)?;
            show_report(&client, &job_id, lang, json).await?;
        }

        Commands::Config { api_url, lang: new_lang, theme, toggle_lang, toggle_theme, show } => {
            let mut changed = false;
            if let Some(url) = api_url {
                config.api_url = trust_wedo_common::ApiEndpoints::new(&url).base().to_string();
                changed = true;
            }

            let mut prefs = config.preferences();
            if let Some(new_lang) = new_lang {
                prefs.language = new_lang;
                changed = true;
            }
            if let Some(theme) = theme {
                prefs.theme = theme;
                changed = true;
            }
            if toggle_lang {
                prefs.toggle_language(&mut config);
                changed = true;
            }
            if toggle_theme {
                prefs.toggle_theme(&mut config);
                changed = true;
            }

            if changed {
                prefs.save(&mut config);
                config.save_to(config_path)?;
                println!("✔ {}", config_path.display());
            }
            if show || !changed {
                print_config(&config, config_path);
            }
        }
    }

    Ok(())
}

fn prompt_email(email: Option<String>) -> Result<String> {
    match email {
        Some(email) => Ok(email),
        None => Input::<String>::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| TrustWedoError::Prompt(e.to_string())),
    }
}

fn api_client(config: &Config) -> Result<ApiClient> {
    let token = config.access_token(now())?;
    ApiClient::new(&config.api_url(), &token)
}

fn print_job(job: &ScanJob, lang: Language, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(job)?);
    } else {
        println!("{}", render::render_job(job, lang));
    }
    Ok(())
}

fn print_config(config: &Config, path: &Path) {
    println!("📁 {}", path.display());
    println!("  api_url : {}", config.api_url());
    println!(
        "  auth_url: {}",
        config.auth_url.as_deref().unwrap_or("(api_url)")
    );
    println!("  language: {}", config.language.code());
    println!("  theme   : {}", config.theme.as_str());
    match &config.session {
        Some(session) if !session.is_expired(now()) => println!("  session : {}", session.email()),
        Some(_) => println!("  session : expired"),
        None => println!("  session : -"),
    }
}

/// レポートと維度スコアを並行して取得して表示
async fn show_report(client: &ApiClient, job_id: &str, lang: Language, json: bool) -> Result<()> {
    let (report, dimensions) = tokio::join!(client.get_report(job_id), client.get_dimensions(job_id));
    let report = report?;
    let dimensions = match dimensions {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::warn!("dimension scores unavailable: {}", e);
            None
        }
    };

    if json {
        let value = serde_json::json!({
            "report": report,
            "dimensions": dimensions,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render::render_report(&report, dimensions.as_ref(), lang));
    }
    Ok(())
}
