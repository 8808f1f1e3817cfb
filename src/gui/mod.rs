// Core modules
pub mod app_context; // 共有コンテキスト（設定・データソース・認証）
pub mod chart_geometry; // チャートの座標計算
pub mod config_manager; // 設定管理モジュール
pub mod models;
pub mod utils;

// Dioxus UI components
pub mod components;
pub mod styles;

pub use app_context::{use_app_context, AppContext, InitialCsv};
pub use components::MainWindow;
pub use models::{ActiveTab, ConfigurationState};
