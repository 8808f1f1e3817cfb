//! ワークフロー設定画面
//!
//! 列選択・Web補強トグル・CSVプレビューの状態を一か所（`Signal`）で持ち、
//! 各子コンポーネントにはスナップショットを渡してイベントで更新を受け取る。

use std::path::PathBuf;

use crate::gui::app_context::use_app_context;
use crate::gui::components::{CsvPreview, FeatureToggle, PreviewPanel, SelectionChipGroup};
use crate::gui::components::feature_toggle::{DEFAULT_DESCRIPTION, DEFAULT_KEYWORD_MODE_DESCRIPTION};
use crate::gui::models::ConfigurationState;
use crate::gui::styles::theme::{get_button_class, CssClasses};
use crate::io::csv_preview::read_csv_file;
use dioxus::prelude::*;

/// 選択内容の要約
pub fn selection_summary(state: &ConfigurationState) -> String {
    format!(
        "{} of {} columns selected · Web enrichment {}",
        state.selected_columns.len(),
        state.headers.len(),
        if state.enrichment_enabled { "on" } else { "off" }
    )
}

/// ワークフロー設定画面
#[component]
pub fn ConfigurationScreen() -> Element {
    let context = use_app_context();
    let enrichment = context.config.enrichment.clone();

    let mut state = use_signal(|| {
        let mut state = ConfigurationState::new(enrichment.enabled_by_default);
        if let Some(csv) = context.initial_csv.clone() {
            state.load_file(csv.filename, csv.text);
        }
        state
    });
    let mut upload_error = use_signal(|| None::<String>);

    let upload = move || {
        spawn(async move {
            let Some(path) = pick_csv_file().await else {
                return;
            };
            match read_csv_file(&path) {
                Ok(text) => {
                    let filename = path
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_default();
                    upload_error.set(None);
                    state.write().load_file(filename, text);
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "❌ Failed to load CSV");
                    upload_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let snapshot = state.read().clone();
    let summary = selection_summary(&snapshot);
    let preview = snapshot.preview();

    let keyword_mode_description = enrichment
        .keyword_mode_description
        .clone()
        .unwrap_or_else(|| DEFAULT_KEYWORD_MODE_DESCRIPTION.to_string());
    let default_description = enrichment
        .default_description
        .clone()
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    rsx! {
        div {
            class: CssClasses::CONFIG_SCREEN,

            // 入力
            div {
                class: CssClasses::SECTION,
                h3 { "Input" }

                div {
                    label { class: CssClasses::FORM_LABEL, r#for: "csv-input", "CSV data" }
                    textarea {
                        id: "csv-input",
                        class: CssClasses::FORM_INPUT,
                        placeholder: "name,url\nAcme,acme.com",
                        value: "{snapshot.csv_text}",
                        oninput: move |evt| state.write().set_csv_text(evt.value()),
                    }
                }

                div {
                    style: "display: flex; gap: 8px; align-items: center;",
                    button {
                        r#type: "button",
                        class: get_button_class("outline", false),
                        onclick: move |_| upload(),
                        "Upload CSV"
                    }
                    if snapshot.uploaded_filename.is_some() {
                        button {
                            r#type: "button",
                            class: get_button_class("outline", false),
                            onclick: move |_| {
                                upload_error.set(None);
                                state.write().clear_file();
                            },
                            "Clear"
                        }
                    }
                    label {
                        style: "display: flex; gap: 6px; align-items: center; font-size: 0.875rem;",
                        input {
                            r#type: "checkbox",
                            checked: snapshot.keyword_mode,
                            onchange: move |evt| state.write().set_keyword_mode(evt.checked()),
                        }
                        "Keyword mode"
                    }
                }

                if let Some(message) = upload_error() {
                    p { class: CssClasses::ERROR_MESSAGE, role: "alert", "{message}" }
                }

                PreviewPanel {
                    filename: snapshot.uploaded_filename.clone(),
                    on_upload_new: move |_| upload(),
                    CsvPreview { table: preview, raw_text: snapshot.csv_text.clone() }
                }
            }

            // 設定
            div {
                class: CssClasses::SECTION,
                h3 { "Configuration" }

                if snapshot.headers.is_empty() {
                    p { class: "feature-toggle-description", "Add CSV data to choose columns." }
                } else {
                    SelectionChipGroup {
                        candidates: snapshot.headers.clone(),
                        selected: snapshot.selected_columns.clone(),
                        on_toggle: move |(item, next): (String, Vec<String>)| {
                            tracing::debug!(item = %item, "🏷️ Committing column selection");
                            state.write().commit_selection(next);
                        },
                    }
                }

                FeatureToggle {
                    checked: snapshot.enrichment_enabled,
                    on_change: move |enabled: bool| {
                        tracing::info!(enabled, "🔍 Web enrichment toggled");
                        state.write().set_enrichment(enabled);
                    },
                    keyword_mode_description,
                    default_description,
                    is_keyword_mode: snapshot.keyword_mode,
                }

                p { class: "feature-toggle-description", "{summary}" }
            }
        }
    }
}

/// CSVファイル選択ダイアログを開く
async fn pick_csv_file() -> Option<PathBuf> {
    match rfd::AsyncFileDialog::new()
        .set_title("CSVファイルを選択")
        .add_filter("CSV ファイル", &["csv"])
        .add_filter("テキストファイル", &["txt"])
        .pick_file()
        .await
    {
        Some(file_handle) => {
            let path = file_handle.path().to_path_buf();
            tracing::info!("📁 Selected CSV file: {}", path.display());
            Some(path)
        }
        None => {
            tracing::debug!("📁 CSV file dialog cancelled");
            None
        }
    }
}
