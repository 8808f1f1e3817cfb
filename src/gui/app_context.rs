//! アプリケーションコンテキスト
//!
//! 起動時に一度だけ組み立て、ルートコンポーネントで `use_context_provider`
//! により配下へ共有する。外部との境界（データソース・認証）はトレイト
//! オブジェクトで保持し、テストやモックと差し替えられるようにする。

use std::sync::Arc;

use dioxus::prelude::*;

use crate::analytics::{DataSource, MockDataSource};
use crate::api::auth::{AuthService, MockAuthService};
use crate::gui::config_manager::AppConfig;

/// 起動時に読み込むCSVファイル
#[derive(Debug, Clone, PartialEq)]
pub struct InitialCsv {
    pub filename: String,
    pub text: String,
}

/// アプリケーション全体で共有するコンテキスト
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub data_source: Arc<dyn DataSource>,
    pub auth: Arc<dyn AuthService>,
    /// 起動引数で渡されたCSV
    pub initial_csv: Option<InitialCsv>,
    /// サインアップ画面のクエリ文字列（`redirect=...`）
    pub sign_up_query: String,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            data_source: Arc::new(MockDataSource::sample()),
            auth: Arc::new(MockAuthService::new()),
            initial_csv: None,
            sign_up_query: String::new(),
        }
    }

    pub fn with_data_source(mut self, data_source: Arc<dyn DataSource>) -> Self {
        self.data_source = data_source;
        self
    }

    pub fn with_auth(mut self, auth: Arc<dyn AuthService>) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_initial_csv(mut self, filename: impl Into<String>, text: impl Into<String>) -> Self {
        self.initial_csv = Some(InitialCsv {
            filename: filename.into(),
            text: text.into(),
        });
        self
    }

    pub fn with_sign_up_query(mut self, query: impl Into<String>) -> Self {
        self.sign_up_query = query.into();
        self
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

/// コンテキストを取得するフック
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
