//! 分析データのJSONエクスポート

use super::{analytics_summary, AnalyticsSummary, CategorySlice, RevenuePoint};
use crate::error::DashboardResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// エクスポートファイルの内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsExport {
    pub summary: AnalyticsSummary,
    pub daily_revenue: Vec<RevenuePoint>,
    pub categories: Vec<CategorySlice>,
    pub export_date: DateTime<Utc>,
}

impl AnalyticsExport {
    pub fn new(
        revenue: &[RevenuePoint],
        categories: &[CategorySlice],
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            summary: analytics_summary(revenue),
            daily_revenue: revenue.to_vec(),
            categories: categories.to_vec(),
            export_date: exported_at,
        }
    }

    /// 整形済みJSON
    pub fn to_json(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 既定のファイル名（`analytics-<日数>d-<日付>.json`）
    pub fn file_name(&self) -> String {
        format!(
            "analytics-{}d-{}.json",
            self.summary.days,
            self.export_date.format("%Y-%m-%d")
        )
    }
}

/// エクスポートをファイルに書き出す
pub fn write_export(path: &Path, export: &AnalyticsExport) -> DashboardResult<()> {
    let json = export.to_json()?;
    std::fs::write(path, json)?;
    tracing::info!(
        path = %path.display(),
        days = export.summary.days,
        "💾 Analytics exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn exported_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_export_payload_shape() {
        let export = AnalyticsExport::new(
            &[
                RevenuePoint::new("2024-01-10", 100.0, 20),
                RevenuePoint::new("2024-01-11", 50.0, 10),
            ],
            &[CategorySlice::new("GPT-4", 45.0, "#3B82F6")],
            exported_at(),
        );
        let value: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(value["summary"]["totalExecutions"], 30);
        assert_eq!(value["summary"]["totalRevenue"], 150.0);
        assert_eq!(value["dailyRevenue"][1]["date"], "2024-01-11");
        assert_eq!(value["categories"][0]["name"], "GPT-4");
        assert_eq!(value["exportDate"], "2024-01-17T09:30:00Z");
        assert_eq!(export.file_name(), "analytics-2d-2024-01-17.json");
    }

    #[test]
    fn test_empty_export() {
        let export = AnalyticsExport::new(&[], &[], exported_at());
        let value: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();

        assert_eq!(value["summary"]["days"], 0);
        assert_eq!(value["summary"]["averageDailyRevenue"], 0.0);
        assert!(value["dailyRevenue"].as_array().unwrap().is_empty());
        assert!(value["categories"].as_array().unwrap().is_empty());
        assert_eq!(export.file_name(), "analytics-0d-2024-01-17.json");
    }

    #[test]
    fn test_write_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analytics.json");
        let export = AnalyticsExport::new(
            &[RevenuePoint::new("2024-01-10", 1.5, 3)],
            &[],
            exported_at(),
        );

        write_export(&path, &export).unwrap();

        let loaded: AnalyticsExport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, export);
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let export = AnalyticsExport::new(&[], &[], exported_at());
        let err = write_export(Path::new("/definitely/not/here/a.json"), &export).unwrap_err();
        assert!(matches!(err, crate::error::DashboardError::Io(_)));
    }
}
