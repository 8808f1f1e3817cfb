// GUI用ユーティリティ関数

use crate::gui::config_manager::LogConfig;
use tracing::{debug, error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// デバッグレベル設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DebugLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl DebugLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            DebugLevel::Off => "off",
            DebugLevel::Error => "error",
            DebugLevel::Warn => "warn",
            DebugLevel::Info => "info",
            DebugLevel::Debug => "debug",
            DebugLevel::Trace => "trace",
        }
    }
}

/// ログ初期化
///
/// `RUST_LOG` が設定されていればそれを優先し、無ければ設定ファイルのレベルを使う。
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_output {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}

/// UI更新のパフォーマンス測定
pub struct UiUpdateTimer {
    start: std::time::Instant,
    context: String,
}

impl UiUpdateTimer {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            start: std::time::Instant::now(),
            context: context.into(),
        }
    }
}

impl Drop for UiUpdateTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        if duration.as_millis() > 16 {
            // 60fps以下の場合警告
            warn!(
                context = %self.context,
                duration_ms = duration.as_millis(),
                "⚠️ Slow UI update detected"
            );
        } else {
            debug!(
                context = %self.context,
                duration_us = duration.as_micros(),
                "✅ UI update completed"
            );
        }
    }
}

/// エラー詳細のログ
pub fn log_error_with_context(error: &anyhow::Error, context: &str) {
    error!(
        context = context,
        error = %error,
        error_chain = ?error.chain().map(|e| e.to_string()).collect::<Vec<_>>(),
        "❌ Error occurred"
    );
}

/// 金額・数値の表示用フォーマット（整数なら小数部を省略）
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
