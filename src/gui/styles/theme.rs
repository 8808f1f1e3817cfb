//! テーマとスタイルヘルパー

/// CSS クラス名の定数
pub struct CssClasses;

impl CssClasses {
    // アプリケーション
    pub const APP: &'static str = "app";
    pub const CONFIG_SCREEN: &'static str = "config-screen";
    pub const SECTION: &'static str = "section";
    pub const FORM_LABEL: &'static str = "form-label";
    pub const FORM_INPUT: &'static str = "form-input";

    // タブ
    pub const TAB_NAV: &'static str = "tab-nav";
    pub const TAB_BUTTON: &'static str = "tab-button";
    pub const TAB_ACTIVE: &'static str = "tab-active";

    // ボタン
    pub const BTN: &'static str = "btn";
    pub const BTN_PRIMARY: &'static str = "btn-primary";
    pub const BTN_OUTLINE: &'static str = "btn-outline";

    // チップ
    pub const CHIP_GROUP: &'static str = "chip-group";
    pub const CHIP: &'static str = "chip";
    pub const CHIP_SELECTED: &'static str = "chip-selected";

    // トグル
    pub const FEATURE_TOGGLE: &'static str = "feature-toggle";
    pub const SWITCH: &'static str = "switch";
    pub const SWITCH_CHECKED: &'static str = "switch-checked";
    pub const SWITCH_THUMB: &'static str = "switch-thumb";

    // プレビュー
    pub const PREVIEW_PANEL: &'static str = "preview-panel";
    pub const PREVIEW_TITLE: &'static str = "preview-title";
    pub const PREVIEW_CONTENT: &'static str = "preview-content";
    pub const PREVIEW_FOOTER: &'static str = "preview-footer";
    pub const PREVIEW_FILENAME: &'static str = "preview-filename";
    pub const CSV_TABLE: &'static str = "csv-table";

    // チャート
    pub const CHART: &'static str = "chart";
    pub const CHART_MARK: &'static str = "chart-mark";
    pub const CHART_TOOLTIP: &'static str = "chart-tooltip";
    pub const CHART_HIT: &'static str = "chart-hit";
    pub const CHART_EMPTY: &'static str = "chart-empty";

    // サマリー
    pub const STAT_GRID: &'static str = "stat-grid";
    pub const STAT_CARD: &'static str = "stat-card";
    pub const STAT_LABEL: &'static str = "stat-label";
    pub const STAT_VALUE: &'static str = "stat-value";
    pub const TOOLBAR: &'static str = "toolbar";

    // メッセージ
    pub const ERROR_MESSAGE: &'static str = "error-message";
    pub const SUCCESS_MESSAGE: &'static str = "success-message";
}

/// タブの選択状態に応じたCSSクラスを取得
pub fn get_tab_class(active: bool) -> String {
    if active {
        format!("{} {}", CssClasses::TAB_BUTTON, CssClasses::TAB_ACTIVE)
    } else {
        CssClasses::TAB_BUTTON.to_string()
    }
}

/// チップの選択状態に応じたCSSクラスを取得
pub fn get_chip_class(selected: bool) -> String {
    if selected {
        format!("{} {}", CssClasses::CHIP, CssClasses::CHIP_SELECTED)
    } else {
        CssClasses::CHIP.to_string()
    }
}

/// スイッチの状態に応じたCSSクラスを取得
pub fn get_switch_class(checked: bool) -> String {
    if checked {
        format!("{} {}", CssClasses::SWITCH, CssClasses::SWITCH_CHECKED)
    } else {
        CssClasses::SWITCH.to_string()
    }
}

/// ボタンの状態に応じたCSSクラスを取得
pub fn get_button_class(variant: &str, disabled: bool) -> String {
    let base_class = CssClasses::BTN;
    let variant_class = match variant {
        "outline" => CssClasses::BTN_OUTLINE,
        _ => CssClasses::BTN_PRIMARY,
    };

    let mut classes = format!("{} {}", base_class, variant_class);
    if disabled {
        classes.push_str(" disabled");
    }
    classes
}

/// CSSの埋め込み用ヘルパー
pub fn get_embedded_css() -> &'static str {
    include_str!("theme.css")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_class() {
        assert_eq!(get_chip_class(false), "chip");
        assert_eq!(get_chip_class(true), "chip chip-selected");
    }

    #[test]
    fn test_tab_class() {
        assert_eq!(get_tab_class(false), "tab-button");
        assert_eq!(get_tab_class(true), "tab-button tab-active");
    }

    #[test]
    fn test_button_class() {
        assert_eq!(get_button_class("outline", false), "btn btn-outline");
        assert_eq!(get_button_class("primary", true), "btn btn-primary disabled");
    }

    #[test]
    fn test_embedded_css_defines_tooltip_hover() {
        let css = get_embedded_css();
        assert!(css.contains(".chart-mark:hover .chart-tooltip"));
        assert!(css.contains(".chart-mark:focus-visible .chart-hit"));
        assert!(css.contains(".chip-selected"));
    }
}
