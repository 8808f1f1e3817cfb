use crate::api::auth::{redirect_target, AuthService, SIGN_UP_SUCCESS_MESSAGE};
use crate::gui::app_context::use_app_context;
use crate::gui::models::ActiveTab;
use crate::gui::styles::theme::{get_button_class, CssClasses};
use dioxus::prelude::*;

/// サインアップ結果として画面に出す内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpFeedback {
    /// フォームに残して表示するエラー
    Error(String),
    /// 成功メッセージと遷移先
    Success { message: String, redirect: String },
}

impl SignUpFeedback {
    /// 成功時の遷移先タブと、遷移先で表示するメッセージ
    pub fn navigation(&self) -> Option<(ActiveTab, String)> {
        match self {
            Self::Success { message, redirect } => {
                Some((ActiveTab::from_route(redirect), message.clone()))
            }
            Self::Error(_) => None,
        }
    }
}

/// サインアップを実行し、表示内容を決める
///
/// 失敗時はサービスのメッセージをそのまま（空なら既定文言）返し、遷移しない。
pub async fn submit_sign_up(
    auth: &dyn AuthService,
    email: &str,
    password: &str,
    query: &str,
) -> SignUpFeedback {
    match auth.sign_up(email, password).await {
        Ok(()) => {
            let redirect = redirect_target(query);
            tracing::info!(redirect = %redirect, "✅ Sign-up succeeded");
            SignUpFeedback::Success {
                message: SIGN_UP_SUCCESS_MESSAGE.to_string(),
                redirect,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "❌ Sign-up failed");
            SignUpFeedback::Error(e.user_message())
        }
    }
}

/// サインアップフォーム
///
/// 成功すると遷移先タブと成功メッセージを `on_navigate` で親に渡す。
/// フォームは遷移でアンマウントされるため、メッセージの表示は親が行う。
#[component]
pub fn SignUpForm(on_navigate: EventHandler<(ActiveTab, String)>) -> Element {
    let context = use_app_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut feedback = use_signal(|| None::<SignUpFeedback>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }

        let auth = context.auth.clone();
        let query = context.sign_up_query.clone();
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();

        loading.set(true);
        feedback.set(None);

        spawn(async move {
            let result = submit_sign_up(auth.as_ref(), &email_value, &password_value, &query).await;
            let navigation = result.navigation();
            feedback.set(Some(result));
            loading.set(false);
            if let Some(navigation) = navigation {
                on_navigate.call(navigation);
            }
        });
    };

    rsx! {
        div {
            class: CssClasses::SECTION,
            style: "max-width: 420px; margin: 24px auto;",
            h2 { "Create an account" }

            form {
                onsubmit: on_submit,
                style: "display: flex; flex-direction: column; gap: 12px;",

                div {
                    label { class: CssClasses::FORM_LABEL, r#for: "sign-up-email", "Email" }
                    input {
                        id: "sign-up-email",
                        class: CssClasses::FORM_INPUT,
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div {
                    label { class: CssClasses::FORM_LABEL, r#for: "sign-up-password", "Password" }
                    input {
                        id: "sign-up-password",
                        class: CssClasses::FORM_INPUT,
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                {match feedback() {
                    Some(SignUpFeedback::Error(message)) => rsx! {
                        p { class: CssClasses::ERROR_MESSAGE, role: "alert", "{message}" }
                    },
                    Some(SignUpFeedback::Success { message, .. }) => rsx! {
                        p { class: CssClasses::SUCCESS_MESSAGE, "{message}" }
                    },
                    None => rsx! {},
                }}

                button {
                    r#type: "submit",
                    class: get_button_class("primary", loading()),
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::{AuthError, MockAuthService, SIGN_UP_FAILED_MESSAGE};
    use async_trait::async_trait;

    struct FailingAuth(AuthError);

    #[async_trait]
    impl AuthService for FailingAuth {
        async fn sign_up(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
            Err(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_success_uses_redirect_parameter() {
        let auth = MockAuthService::new();
        let feedback =
            submit_sign_up(&auth, "new@example.com", "secret123", "?redirect=%2Fanalytics").await;
        assert_eq!(
            feedback,
            SignUpFeedback::Success {
                message: SIGN_UP_SUCCESS_MESSAGE.to_string(),
                redirect: "/analytics".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_default_redirect_carries_message_to_workflow_tab() {
        let auth = MockAuthService::new();
        let feedback = submit_sign_up(&auth, "new@example.com", "secret123", "").await;
        assert_eq!(
            feedback.navigation(),
            Some((ActiveTab::Workflow, SIGN_UP_SUCCESS_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_error_does_not_navigate() {
        assert_eq!(SignUpFeedback::Error("nope".to_string()).navigation(), None);
    }

    #[tokio::test]
    async fn test_service_message_is_shown_verbatim() {
        let auth = MockAuthService::new().with_existing_account("taken@example.com");
        let feedback = submit_sign_up(&auth, "taken@example.com", "secret123", "").await;
        assert_eq!(
            feedback,
            SignUpFeedback::Error("User already registered".to_string())
        );
    }

    #[tokio::test]
    async fn test_blank_message_falls_back() {
        let auth = FailingAuth(AuthError::rejected("  "));
        let feedback = submit_sign_up(&auth, "a@example.com", "secret123", "").await;
        assert_eq!(feedback, SignUpFeedback::Error(SIGN_UP_FAILED_MESSAGE.to_string()));
    }
}
