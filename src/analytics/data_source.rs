//! データソース
//!
//! 収益・カテゴリのデータセットを供給する外部データ層の抽象と、
//! 開発用のモック実装。

use super::{CategorySlice, RevenuePoint};
use crate::error::DashboardResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// 集計済みデータを供給するインタフェース
#[async_trait]
pub trait DataSource: Send + Sync {
    /// 日付順の収益時系列
    async fn revenue_series(&self) -> DashboardResult<Vec<RevenuePoint>>;

    /// カテゴリ別の内訳
    async fn category_breakdown(&self) -> DashboardResult<Vec<CategorySlice>>;
}

const SAMPLE_CATEGORIES: [(&str, &str); 4] = [
    ("GPT-4", "#3B82F6"),
    ("Claude 3", "#10B981"),
    ("GPT-3.5", "#F59E0B"),
    ("Gemini Pro", "#8B5CF6"),
];

/// モックデータの生成方法
#[derive(Debug, Clone, PartialEq)]
enum MockMode {
    Sample,
    Random { seed: u64, days: usize },
}

/// 開発用データソース
#[derive(Debug, Clone, PartialEq)]
pub struct MockDataSource {
    mode: MockMode,
    start: NaiveDate,
}

impl MockDataSource {
    /// 固定の1週間分サンプル
    pub fn sample() -> Self {
        Self {
            mode: MockMode::Sample,
            start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
        }
    }

    /// シード付き乱数で `days` 日分を生成
    pub fn random(seed: u64, days: usize) -> Self {
        Self {
            mode: MockMode::Random { seed, days },
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }

    fn dates(&self, days: usize) -> impl Iterator<Item = String> {
        self.start
            .iter_days()
            .take(days)
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    fn build_revenue(&self) -> Vec<RevenuePoint> {
        match self.mode {
            MockMode::Sample => {
                let values = [
                    (115.0, 23),
                    (155.0, 31),
                    (90.0, 18),
                    (210.0, 42),
                    (190.0, 38),
                    (225.0, 45),
                    (260.0, 52),
                ];
                self.dates(values.len())
                    .zip(values)
                    .map(|(date, (revenue, executions))| {
                        RevenuePoint::new(date, revenue, executions)
                    })
                    .collect()
            }
            MockMode::Random { seed, days } => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.dates(days)
                    .map(|date| {
                        let executions: u64 = rng.gen_range(10..60);
                        let unit_price: f64 = rng.gen_range(1.5..4.0);
                        let revenue = (executions as f64 * unit_price * 100.0).round() / 100.0;
                        RevenuePoint::new(date, revenue, executions)
                    })
                    .collect()
            }
        }
    }

    fn build_categories(&self) -> Vec<CategorySlice> {
        match self.mode {
            MockMode::Sample => {
                let values = [45.0, 32.0, 28.0, 18.0];
                SAMPLE_CATEGORIES
                    .iter()
                    .zip(values)
                    .map(|((name, color), value)| CategorySlice::new(*name, value, *color))
                    .collect()
            }
            MockMode::Random { seed, .. } => {
                // 収益系列とは別系列の乱数を使う
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
                SAMPLE_CATEGORIES
                    .iter()
                    .map(|(name, color)| {
                        CategorySlice::new(*name, rng.gen_range(5..50) as f64, *color)
                    })
                    .collect()
            }
        }
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::sample()
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn revenue_series(&self) -> DashboardResult<Vec<RevenuePoint>> {
        let series = self.build_revenue();
        tracing::debug!(points = series.len(), "📈 Mock revenue series generated");
        Ok(series)
    }

    async fn category_breakdown(&self) -> DashboardResult<Vec<CategorySlice>> {
        let slices = self.build_categories();
        tracing::debug!(slices = slices.len(), "🍩 Mock category breakdown generated");
        Ok(slices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_series_is_chronological_week() {
        let series = tokio_test::block_on(MockDataSource::sample().revenue_series()).unwrap();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, "2024-01-10");
        assert_eq!(series[6].date, "2024-01-16");
        assert_eq!(series[3], RevenuePoint::new("2024-01-13", 210.0, 42));
    }

    #[test]
    fn test_sample_categories_keep_colors() {
        let slices = tokio_test::block_on(MockDataSource::sample().category_breakdown()).unwrap();
        let names: Vec<_> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["GPT-4", "Claude 3", "GPT-3.5", "Gemini Pro"]);
        assert_eq!(slices[1].color, "#10B981");
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let a = MockDataSource::random(42, 30);
        let b = MockDataSource::random(42, 30);
        let c = MockDataSource::random(7, 30);

        let series_a = tokio_test::block_on(a.revenue_series()).unwrap();
        let series_b = tokio_test::block_on(b.revenue_series()).unwrap();
        let series_c = tokio_test::block_on(c.revenue_series()).unwrap();

        assert_eq!(series_a.len(), 30);
        assert_eq!(series_a, series_b);
        assert_ne!(series_a, series_c);
        assert_eq!(series_a[29].date, "2024-01-30");
    }

    #[test]
    fn test_random_zero_days_is_empty() {
        let series =
            tokio_test::block_on(MockDataSource::random(1, 0).revenue_series()).unwrap();
        assert!(series.is_empty());
    }
}
