use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use creator_dashboard::{
    analytics::MockDataSource,
    gui::{
        config_manager::{AppConfig, ConfigManager},
        utils::{self, DebugLevel},
        AppContext, MainWindow,
    },
    io::read_csv_file,
};
use dioxus::prelude::*;

/// ルートコンポーネントに渡すコンテキスト（起動前に一度だけ設定）
static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// クリエイター向けダッシュボード
#[derive(Debug, Parser)]
#[command(name = "creator-dashboard", version, about)]
struct Args {
    /// ログレベル（RUST_LOGが設定されている場合はそちらが優先）
    #[arg(long, value_enum)]
    log_level: Option<DebugLevel>,

    /// JSON形式でログを出力
    #[arg(long)]
    json_logs: bool,

    /// 設定ファイルのパス（省略時はXDG設定ディレクトリ）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 起動時にプレビューへ読み込むCSVファイル
    #[arg(long)]
    csv: Option<PathBuf>,

    /// モックデータを乱数で生成する際のシード
    #[arg(long)]
    seed: Option<u64>,

    /// 乱数生成時の日数
    #[arg(long, default_value_t = 30)]
    days: usize,

    /// サインアップ画面のクエリ文字列（例: "?redirect=%2Fanalytics"）
    #[arg(long, default_value = "")]
    sign_up_query: String,
}

fn app() -> Element {
    let context = APP_CONTEXT.get().cloned().unwrap_or_default();
    use_context_provider(move || context);

    rsx! {
        MainWindow {}
    }
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new()?,
    };
    manager.load_config()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 設定読み込み（失敗時はデフォルト）はログ初期化より前に行う
    let config_result = load_config(&args);
    let mut config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };
    if let Some(level) = args.log_level {
        config.log.log_level = level.as_filter().to_string();
    }
    if args.json_logs {
        config.log.json_output = true;
    }

    utils::init_logging(&config.log)?;

    if let Err(e) = &config_result {
        utils::log_error_with_context(e, "設定読み込みエラー、デフォルト設定を使用");
    }

    tracing::info!("🎬 Starting creator-dashboard");

    let data_source = match args.seed {
        Some(seed) => {
            tracing::info!(seed, days = args.days, "🎲 Using generated mock data");
            MockDataSource::random(seed, args.days)
        }
        None => MockDataSource::sample(),
    };

    let mut context = AppContext::new(config.clone())
        .with_data_source(Arc::new(data_source))
        .with_sign_up_query(args.sign_up_query.clone());

    if let Some(path) = &args.csv {
        let text = read_csv_file(path)
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        context = context.with_initial_csv(filename, text);
    }

    if APP_CONTEXT.set(context).is_err() {
        tracing::warn!("⚠️ Application context was already initialized");
    }

    tracing::info!(
        "🪟 ウィンドウ設定: {}x{}, 最大化: {}",
        config.window.width,
        config.window.height,
        config.window.maximized
    );

    // LaunchBuilderを使用してウィンドウ設定を適用
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::tao::window::WindowBuilder::new()
                    .with_title("Creator Dashboard")
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(
                        f64::from(config.window.width),
                        f64::from(config.window.height),
                    ))
                    .with_maximized(config.window.maximized)
                    .with_resizable(true),
            ),
        )
        .launch(app);

    tracing::info!("👋 creator-dashboard shutting down");
    Ok(())
}
