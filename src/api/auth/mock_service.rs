//! 開発用の認証サービス
//!
//! 登録済みメールアドレスをメモリ上に保持するだけの実装。

use super::{AuthError, AuthService};
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::Mutex;

/// パスワードの最小文字数
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// メモリ上で動作する認証サービス
#[derive(Debug, Default)]
pub struct MockAuthService {
    registered: Mutex<HashSet<String>>,
    latency: Duration,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 応答までの擬似的な遅延を設定
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// 既に登録済みのアカウントを追加
    pub fn with_existing_account(mut self, email: &str) -> Self {
        self.registered
            .get_mut()
            .insert(email.trim().to_lowercase());
        self
    }

    pub async fn is_registered(&self, email: &str) -> bool {
        self.registered
            .lock()
            .await
            .contains(&email.trim().to_lowercase())
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let email = email.trim().to_lowercase();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LENGTH));
        }

        let mut registered = self.registered.lock().await;
        if !registered.insert(email.clone()) {
            return Err(AuthError::rejected("User already registered"));
        }

        tracing::info!(email = %email, "👤 Mock account created");
        Ok(())
    }
}
