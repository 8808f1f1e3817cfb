//! 期間サマリー
//!
//! 日別の収益時系列から合計・1日あたり平均を求める。

use super::RevenuePoint;
use serde::{Deserialize, Serialize};

/// 表示中の期間の集計値
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// 集計対象の日数（データ点の数）
    pub days: usize,
    pub total_executions: u64,
    pub total_revenue: f64,
    pub average_daily_executions: f64,
    pub average_daily_revenue: f64,
}

impl AnalyticsSummary {
    pub fn is_empty(&self) -> bool {
        self.days == 0
    }
}

/// 収益時系列を集計する
///
/// 非有限の収益は0として扱う。空の入力では全て0になる。
pub fn analytics_summary(data: &[RevenuePoint]) -> AnalyticsSummary {
    let days = data.len();
    if days == 0 {
        return AnalyticsSummary::default();
    }

    let total_executions = data
        .iter()
        .fold(0u64, |sum, p| sum.saturating_add(p.executions));
    let total_revenue: f64 = data
        .iter()
        .map(|p| if p.revenue.is_finite() { p.revenue } else { 0.0 })
        .sum();

    AnalyticsSummary {
        days,
        total_executions,
        total_revenue,
        average_daily_executions: total_executions as f64 / days as f64,
        average_daily_revenue: total_revenue / days as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = analytics_summary(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total_executions, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.average_daily_revenue, 0.0);
    }

    #[test]
    fn test_totals_and_averages() {
        let summary = analytics_summary(&[
            RevenuePoint::new("2024-01-10", 100.0, 20),
            RevenuePoint::new("2024-01-11", 50.0, 10),
        ]);
        assert_eq!(summary.days, 2);
        assert_eq!(summary.total_executions, 30);
        assert_eq!(summary.total_revenue, 150.0);
        assert_eq!(summary.average_daily_executions, 15.0);
        assert_eq!(summary.average_daily_revenue, 75.0);
    }

    #[test]
    fn test_non_finite_revenue_counts_as_zero() {
        let summary = analytics_summary(&[
            RevenuePoint::new("d1", f64::NAN, 1),
            RevenuePoint::new("d2", 10.0, 1),
        ]);
        assert_eq!(summary.total_revenue, 10.0);
    }
}
