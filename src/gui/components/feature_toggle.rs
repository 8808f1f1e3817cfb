use crate::gui::styles::theme::{get_switch_class, CssClasses};
use dioxus::prelude::*;

/// キーワードモード時の既定の説明文
pub const DEFAULT_KEYWORD_MODE_DESCRIPTION: &str = "Enhanced company research";
/// 通常時の既定の説明文
pub const DEFAULT_DESCRIPTION: &str = "Optional web enrichment";

/// 表示する説明文を選ぶ
///
/// モードのみで決まり、トグルの状態には依存しない。
pub fn toggle_description<'a>(
    is_keyword_mode: bool,
    keyword_mode_description: &'a str,
    default_description: &'a str,
) -> &'a str {
    if is_keyword_mode {
        keyword_mode_description
    } else {
        default_description
    }
}

/// Web補強などのオン・オフを切り替えるスイッチ
///
/// 完全な制御コンポーネントで、クリック時は `!checked` を通知するだけ。
#[component]
pub fn FeatureToggle(
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(into, default = DEFAULT_KEYWORD_MODE_DESCRIPTION.to_string())]
    keyword_mode_description: String,
    #[props(into, default = DEFAULT_DESCRIPTION.to_string())] default_description: String,
    #[props(default = false)] is_keyword_mode: bool,
    #[props(into, default = "Google Search".to_string())] label: String,
) -> Element {
    let description = toggle_description(
        is_keyword_mode,
        &keyword_mode_description,
        &default_description,
    )
    .to_string();

    rsx! {
        div {
            class: CssClasses::FEATURE_TOGGLE,
            button {
                r#type: "button",
                role: "switch",
                class: get_switch_class(checked),
                "aria-checked": checked,
                "aria-label": "{label}",
                onclick: move |_| {
                    tracing::debug!(from = checked, to = !checked, "🔀 Feature toggle clicked");
                    on_change.call(!checked);
                },
                span { class: CssClasses::SWITCH_THUMB }
            }
            div {
                label { class: CssClasses::FORM_LABEL, "{label}" }
                p { class: "feature-toggle-description", "{description}" }
            }
        }
    }
}
