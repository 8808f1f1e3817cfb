//! クレート共通のエラー型

use thiserror::Error;

pub use crate::api::auth::AuthError;

/// ダッシュボード全体のエラー型
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("認証エラー: {0}")]
    Auth(#[from] AuthError),

    #[error("ファイルサイズが上限を超えています: {size} bytes (上限 {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("JSON変換エラー: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
