use std::path::PathBuf;

use chrono::Utc;
use dioxus::prelude::*;

use crate::analytics::{
    analytics_summary, write_export, AnalyticsExport, CategorySlice, DataSource, RevenuePoint,
};
use crate::error::DashboardResult;
use crate::gui::{
    app_context::use_app_context,
    components::{AnalyticsChartSet, AnalyticsSummaryCards, ConfigurationScreen, SignUpForm},
    models::ActiveTab,
    styles::theme::{get_button_class, get_embedded_css, get_tab_class, CssClasses},
};

/// チャートの上に表示する期間
///
/// 先頭と末尾の日付を入力順のまま使う。
pub fn period_caption(data: &[RevenuePoint]) -> String {
    match (data.first(), data.last()) {
        (Some(first), Some(last)) if first.date != last.date => {
            format!("{} – {}", first.date, last.date)
        }
        (Some(first), _) => first.date.clone(),
        _ => String::new(),
    }
}

/// メインウィンドウコンポーネント
#[component]
pub fn MainWindow() -> Element {
    let mut active_tab = use_signal(ActiveTab::default);
    // 画面遷移後も表示しておくお知らせ（サインアップ完了など）
    let mut notice = use_signal(|| None::<String>);

    tracing::debug!(
        "🖥️ MainWindow: Rendering with active_tab={:?}",
        active_tab()
    );

    rsx! {
        // CSSスタイルをdocument headに注入
        document::Style {
            {get_embedded_css()}
        }

        div {
            class: CssClasses::APP,

            nav {
                class: CssClasses::TAB_NAV,
                for tab in ActiveTab::ALL {
                    button {
                        key: "{tab:?}",
                        r#type: "button",
                        class: get_tab_class(tab == active_tab()),
                        onclick: move |_| {
                            notice.set(None);
                            active_tab.set(tab);
                        },
                        span { "{tab.icon()}" }
                        span { "{tab.label()}" }
                    }
                }
            }

            if let Some(message) = notice() {
                div {
                    class: CssClasses::SUCCESS_MESSAGE,
                    role: "status",
                    style: "max-width: 1100px; margin: 0 auto 8px; display: flex; justify-content: space-between; gap: 8px; box-sizing: border-box;",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: get_button_class("outline", false),
                        "aria-label": "Dismiss",
                        onclick: move |_| notice.set(None),
                        "×"
                    }
                }
            }

            {match active_tab() {
                ActiveTab::Workflow => rsx! { ConfigurationScreen {} },
                ActiveTab::Analytics => rsx! { AnalyticsTab {} },
                ActiveTab::SignUp => rsx! {
                    SignUpForm {
                        on_navigate: move |(tab, message): (ActiveTab, String)| {
                            tracing::info!(tab = ?tab, "🧭 Navigating after sign-up");
                            notice.set(Some(message));
                            active_tab.set(tab);
                        },
                    }
                },
            }}
        }
    }
}

/// 分析タブ（データソースから読み込んでチャートに渡す）
#[component]
fn AnalyticsTab() -> Element {
    let context = use_app_context();
    let chart_config = context.config.charts.clone();
    let data_source = context.data_source.clone();
    let mut export_status = use_signal(|| None::<Result<String, String>>);

    let analytics = use_resource(move || {
        let data_source = data_source.clone();
        async move {
            let result = load_analytics(data_source.as_ref()).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "❌ Failed to load analytics data");
            }
            result
        }
    });

    let loaded = match &*analytics.read() {
        None => None,
        Some(Ok(data)) => Some(Ok(data.clone())),
        Some(Err(e)) => Some(Err(e.to_string())),
    };

    match loaded {
        None => rsx! {
            p { style: "padding: 24px;", "Loading analytics…" }
        },
        Some(Err(message)) => rsx! {
            p { class: CssClasses::ERROR_MESSAGE, style: "padding: 24px;", "{message}" }
        },
        Some(Ok((revenue, categories))) => {
            let selected_period = period_caption(&revenue);
            let summary = analytics_summary(&revenue);
            let export_source = (revenue.clone(), categories.clone());

            rsx! {
                div {
                    class: CssClasses::CONFIG_SCREEN,
                    div {
                        class: CssClasses::TOOLBAR,
                        h2 { style: "margin: 0;", "Analytics" }
                        button {
                            r#type: "button",
                            class: get_button_class("outline", false),
                            onclick: move |_| {
                                let (revenue, categories) = &export_source;
                                let export = AnalyticsExport::new(revenue, categories, Utc::now());
                                spawn(async move {
                                    let Some(path) = pick_export_path(&export.file_name()).await else {
                                        return;
                                    };
                                    match write_export(&path, &export) {
                                        Ok(()) => export_status
                                            .set(Some(Ok(format!("Exported to {}", path.display())))),
                                        Err(e) => {
                                            tracing::error!(path = %path.display(), error = %e, "❌ Failed to export analytics");
                                            export_status.set(Some(Err(e.to_string())));
                                        }
                                    }
                                });
                            },
                            "Export"
                        }
                    }

                    {match export_status() {
                        Some(Ok(message)) => rsx! {
                            p { class: CssClasses::SUCCESS_MESSAGE, role: "status", "{message}" }
                        },
                        Some(Err(message)) => rsx! {
                            p { class: CssClasses::ERROR_MESSAGE, role: "alert", "{message}" }
                        },
                        None => rsx! {},
                    }}

                    AnalyticsSummaryCards { summary }

                    AnalyticsChartSet {
                        revenue,
                        categories,
                        selected_period,
                        config: chart_config,
                    }
                }
            }
        }
    }
}

/// エクスポート先の選択ダイアログを開く
async fn pick_export_path(default_name: &str) -> Option<PathBuf> {
    match rfd::AsyncFileDialog::new()
        .set_title("エクスポート先を選択")
        .add_filter("JSON", &["json"])
        .set_file_name(default_name)
        .save_file()
        .await
    {
        Some(file_handle) => Some(file_handle.path().to_path_buf()),
        None => {
            tracing::debug!("📁 Export dialog cancelled");
            None
        }
    }
}

/// 収益推移とカテゴリ内訳をまとめて取得する
pub async fn load_analytics(
    data_source: &dyn DataSource,
) -> DashboardResult<(Vec<RevenuePoint>, Vec<CategorySlice>)> {
    let revenue = data_source.revenue_series().await?;
    let categories = data_source.category_breakdown().await?;
    tracing::info!(
        revenue_points = revenue.len(),
        categories = categories.len(),
        "📥 Analytics data loaded"
    );
    Ok((revenue, categories))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_caption() {
        assert_eq!(period_caption(&[]), "");
        assert_eq!(
            period_caption(&[RevenuePoint::new("2024-01-10", 1.0, 1)]),
            "2024-01-10"
        );
        assert_eq!(
            period_caption(&[
                RevenuePoint::new("2024-01-10", 1.0, 1),
                RevenuePoint::new("2024-01-16", 2.0, 1),
            ]),
            "2024-01-10 – 2024-01-16"
        );
    }

    struct UnavailableSource;

    #[async_trait::async_trait]
    impl DataSource for UnavailableSource {
        async fn revenue_series(&self) -> DashboardResult<Vec<RevenuePoint>> {
            Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "offline").into())
        }

        async fn category_breakdown(&self) -> DashboardResult<Vec<CategorySlice>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_load_analytics_propagates_source_error() {
        let err = load_analytics(&UnavailableSource).await.unwrap_err();
        assert!(err.to_string().contains("offline"));
    }

    #[tokio::test]
    async fn test_sample_export_summary() {
        let source = crate::analytics::MockDataSource::sample();
        let (revenue, categories) = load_analytics(&source).await.unwrap();
        let export = AnalyticsExport::new(&revenue, &categories, Utc::now());
        assert_eq!(export.summary.days, 7);
        assert_eq!(export.summary.total_executions, 249);
        assert_eq!(export.categories.len(), 4);
    }

    #[tokio::test]
    async fn test_load_analytics_from_sample_source() {
        let source = crate::analytics::MockDataSource::sample();
        let (revenue, categories) = load_analytics(&source).await.unwrap();
        assert_eq!(revenue.len(), 7);
        assert_eq!(categories.len(), 4);
        assert_eq!(period_caption(&revenue), "2024-01-10 – 2024-01-16");
    }
}
