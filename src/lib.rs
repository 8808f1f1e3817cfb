pub mod analytics;
pub mod api;
pub mod error;
pub mod gui;
pub mod io;

// Re-export the main error types for convenience
pub use error::{AuthError, DashboardError, DashboardResult};

// Re-export collaborator interfaces
pub use analytics::{CategorySlice, DataSource, MockDataSource, RevenuePoint};
pub use api::auth::{AuthService, MockAuthService};

// Re-export the panel components
pub use gui::components::{
    AnalyticsChartSet, FeatureToggle, PreviewPanel, SelectionChipGroup,
};
