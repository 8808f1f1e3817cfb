//! 期間サマリーのカード表示

use crate::analytics::AnalyticsSummary;
use crate::gui::styles::theme::CssClasses;
use crate::gui::utils::format_number;
use dioxus::prelude::*;

/// サマリーカード1枚分
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStat {
    pub label: &'static str,
    pub value: String,
}

/// カードに並べる項目と表示値
pub fn summary_stats(summary: &AnalyticsSummary) -> Vec<SummaryStat> {
    vec![
        SummaryStat {
            label: "Total executions",
            value: summary.total_executions.to_string(),
        },
        SummaryStat {
            label: "Total revenue",
            value: format_number(summary.total_revenue),
        },
        SummaryStat {
            label: "Avg executions / day",
            value: format!("{:.1}", summary.average_daily_executions),
        },
        SummaryStat {
            label: "Avg revenue / day",
            value: format_number(summary.average_daily_revenue),
        },
    ]
}

/// 期間サマリー
#[component]
pub fn AnalyticsSummaryCards(summary: AnalyticsSummary) -> Element {
    let stats = summary_stats(&summary);

    rsx! {
        div {
            class: CssClasses::STAT_GRID,
            for stat in stats {
                div {
                    key: "{stat.label}",
                    class: CssClasses::STAT_CARD,
                    p { class: CssClasses::STAT_LABEL, "{stat.label}" }
                    p { class: CssClasses::STAT_VALUE, "{stat.value}" }
                }
            }
        }
    }
}
