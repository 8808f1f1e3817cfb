//! 分析データモデル
//!
//! データ層から受け取る集計済みデータの型。並び順は呼び出し側が決めたものを
//! そのまま保持し、このクレート内で並べ替えや集約は行わない。

pub mod data_source;
pub mod export;
pub mod summary;

pub use data_source::*;
pub use export::{write_export, AnalyticsExport};
pub use summary::{analytics_summary, AnalyticsSummary};

use serde::{Deserialize, Serialize};

/// 収益の時系列データ点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    pub revenue: f64,
    /// 実行回数（グラフには描画せずツールチップで表示）
    pub executions: u64,
}

impl RevenuePoint {
    pub fn new(date: impl Into<String>, revenue: f64, executions: u64) -> Self {
        Self {
            date: date.into(),
            revenue,
            executions,
        }
    }
}

/// カテゴリ内訳の1要素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
    /// 呼び出し側が指定する表示色（CSSカラー文字列）
    pub color: String,
}

impl CategorySlice {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_point_json_shape() {
        let point: RevenuePoint =
            serde_json::from_str(r#"{"date":"2024-01-01","revenue":100,"executions":5}"#)
                .unwrap();
        assert_eq!(point, RevenuePoint::new("2024-01-01", 100.0, 5));
    }

    #[test]
    fn test_category_slice_json_shape() {
        let slices: Vec<CategorySlice> = serde_json::from_str(
            r##"[{"name":"A","value":3,"color":"#111"},{"name":"B","value":1,"color":"#222"}]"##,
        )
        .unwrap();
        assert_eq!(slices[0], CategorySlice::new("A", 3.0, "#111"));
        assert_eq!(slices[1].color, "#222");
    }
}
