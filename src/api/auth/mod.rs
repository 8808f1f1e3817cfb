//! 認証モジュール
//!
//! サインアップ処理は外部の認証サービスに委譲します。このモジュールは
//! サービスの抽象インタフェースと、フォーム側で必要になる補助関数
//! （エラーメッセージの整形、リダイレクト先の解析）を提供します。

mod mock_service;

pub use mock_service::MockAuthService;

use async_trait::async_trait;

/// エラーメッセージが空だった場合に表示する文言
pub const SIGN_UP_FAILED_MESSAGE: &str = "Sign-up failed";

/// サインアップ成功時に表示する文言
pub const SIGN_UP_SUCCESS_MESSAGE: &str =
    "Account created! Please check your email for a confirmation link to complete setup.";

/// リダイレクト先が指定されていない場合の遷移先
pub const DEFAULT_REDIRECT: &str = "/";

/// 認証関連のエラー型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// 認証サービスが返したエラー（メッセージはそのまま表示する）
    #[error("{0}")]
    Rejected(String),

    /// メールアドレスの形式が不正
    #[error("Unable to validate email address: invalid format")]
    InvalidEmail,

    /// パスワードが短すぎる
    #[error("Password should be at least {0} characters")]
    WeakPassword(usize),
}

impl AuthError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// フォームに表示するメッセージ
    ///
    /// サービスのメッセージをそのまま使い、空の場合のみ汎用文言に置き換える。
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            SIGN_UP_FAILED_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// 認証サービスの抽象インタフェース
#[async_trait]
pub trait AuthService: Send + Sync {
    /// 新規アカウントを作成
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// クエリ文字列から `redirect` パラメータを取り出す
///
/// 先頭の `?` は省略可能。値はパーセントデコードされ、`+` は空白として扱う。
/// パラメータが無い・空・デコード不能な場合は [`DEFAULT_REDIRECT`] を返す。
pub fn redirect_target(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);

    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "redirect")
        .map(|(_, value)| value);

    let Some(raw) = raw else {
        return DEFAULT_REDIRECT.to_string();
    };

    match urlencoding::decode(&raw.replace('+', " ")) {
        Ok(decoded) if !decoded.is_empty() => decoded.into_owned(),
        Ok(_) => DEFAULT_REDIRECT.to_string(),
        Err(e) => {
            tracing::warn!(redirect = raw, error = %e, "⚠️ Undecodable redirect parameter");
            DEFAULT_REDIRECT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_defaults_to_root() {
        assert_eq!(redirect_target(""), "/");
        assert_eq!(redirect_target("?"), "/");
        assert_eq!(redirect_target("?next=/foo"), "/");
    }

    #[test]
    fn test_redirect_is_decoded() {
        assert_eq!(redirect_target("?redirect=%2Fflows%2Frun"), "/flows/run");
        assert_eq!(redirect_target("mode=x&redirect=/analytics"), "/analytics");
    }

    #[test]
    fn test_redirect_empty_value_falls_back() {
        assert_eq!(redirect_target("?redirect="), "/");
        assert_eq!(redirect_target("?redirect"), "/");
    }

    #[test]
    fn test_redirect_first_occurrence_wins() {
        assert_eq!(redirect_target("?redirect=/a&redirect=/b"), "/a");
    }

    #[test]
    fn test_user_message_is_verbatim() {
        let err = AuthError::rejected("User already registered");
        assert_eq!(err.user_message(), "User already registered");
    }

    #[test]
    fn test_user_message_falls_back_when_empty() {
        assert_eq!(AuthError::rejected("").user_message(), SIGN_UP_FAILED_MESSAGE);
        assert_eq!(AuthError::rejected("   ").user_message(), SIGN_UP_FAILED_MESSAGE);
    }
}
