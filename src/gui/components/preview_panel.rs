use crate::gui::styles::theme::{get_button_class, CssClasses};
use dioxus::prelude::*;

/// プレビュー下部に表示する要素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFooter {
    /// `✓ ファイル名` の表示テキスト
    pub filename_label: Option<String>,
    /// 「Upload new」ボタンを出すか
    pub show_upload_action: bool,
}

impl PreviewFooter {
    pub fn is_empty(&self) -> bool {
        self.filename_label.is_none() && !self.show_upload_action
    }
}

/// フッターの内容を決める
///
/// ファイル名の表示とアップロードボタンは互いに独立している。
/// 空文字のファイル名は未読み込みとして扱う。
pub fn preview_footer(filename: Option<&str>, has_upload_handler: bool) -> PreviewFooter {
    PreviewFooter {
        filename_label: filename
            .filter(|name| !name.is_empty())
            .map(|name| format!("✓ {name}")),
        show_upload_action: has_upload_handler,
    }
}

/// プレビューパネル
#[component]
pub fn PreviewPanel(
    #[props(into, default = "Preview".to_string())] title: String,
    #[props(default)] filename: Option<String>,
    #[props(default)] on_upload_new: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let footer = preview_footer(filename.as_deref(), on_upload_new.is_some());

    rsx! {
        div {
            class: CssClasses::PREVIEW_PANEL,
            div { class: CssClasses::PREVIEW_TITLE, "{title}" }
            div { class: CssClasses::PREVIEW_CONTENT, {children} }

            if !footer.is_empty() {
                div {
                    class: CssClasses::PREVIEW_FOOTER,
                    if let Some(label) = footer.filename_label.clone() {
                        span { class: CssClasses::PREVIEW_FILENAME, title: "{label}", "{label}" }
                    } else {
                        span {}
                    }
                    if let Some(handler) = on_upload_new {
                        button {
                            r#type: "button",
                            class: get_button_class("outline", false),
                            onclick: move |_| {
                                tracing::debug!("📤 Upload new requested from preview");
                                handler.call(());
                            },
                            "Upload new"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_without_filename_or_handler() {
        let footer = preview_footer(None, false);
        assert_eq!(footer.filename_label, None);
        assert!(!footer.show_upload_action);
        assert!(footer.is_empty());
    }

    #[test]
    fn test_filename_and_upload_are_independent() {
        let only_name = preview_footer(Some("leads.csv"), false);
        assert_eq!(only_name.filename_label.as_deref(), Some("✓ leads.csv"));
        assert!(!only_name.show_upload_action);

        let only_upload = preview_footer(None, true);
        assert_eq!(only_upload.filename_label, None);
        assert!(only_upload.show_upload_action);
    }

    #[test]
    fn test_empty_filename_is_treated_as_absent() {
        assert_eq!(preview_footer(Some(""), true).filename_label, None);
    }
}
