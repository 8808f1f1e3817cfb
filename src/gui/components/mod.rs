// Dioxus GUI Components Module

pub mod analytics_charts; // 収益推移・カテゴリ内訳チャート
pub mod analytics_summary;
pub mod configuration_screen;
pub mod csv_preview;
pub mod feature_toggle;
pub mod main_window;
pub mod preview_panel;
pub mod selection_chip_group;
pub mod sign_up_form;

// Re-exports for convenience
pub use analytics_charts::{AnalyticsChartSet, CategoryBreakdownChart, RevenueChart};
pub use analytics_summary::{summary_stats, AnalyticsSummaryCards, SummaryStat};
pub use configuration_screen::ConfigurationScreen;
pub use csv_preview::CsvPreview;
pub use feature_toggle::{toggle_description, FeatureToggle};
pub use main_window::MainWindow;
pub use preview_panel::{preview_footer, PreviewFooter, PreviewPanel};
pub use selection_chip_group::{next_selection, SelectionChipGroup};
pub use sign_up_form::{submit_sign_up, SignUpFeedback, SignUpForm};
