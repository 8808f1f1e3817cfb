use crate::io::csv_preview::{shorten, CsvPreviewTable, CELL_DISPLAY_LIMIT, HEADER_DISPLAY_LIMIT};
use crate::gui::styles::theme::CssClasses;
use dioxus::prelude::*;

/// CSVプレビューのテーブル表示
///
/// テーブルが無ければ入力テキストをそのまま表示する。
#[component]
pub fn CsvPreview(table: Option<CsvPreviewTable>, #[props(into, default)] raw_text: String) -> Element {
    let Some(table) = table else {
        return rsx! {
            if raw_text.trim().is_empty() {
                p { "Paste CSV or upload a file to see a preview." }
            } else {
                pre { style: "white-space: pre-wrap; margin: 0;", "{raw_text}" }
            }
        };
    };

    let summary = table.summary();
    let columns = table.header.len();

    rsx! {
        table {
            class: CssClasses::CSV_TABLE,
            thead {
                tr {
                    for (index, header) in table.header.iter().enumerate() {
                        th { key: "{index}", title: "{header}", {shorten(header, HEADER_DISPLAY_LIMIT)} }
                    }
                }
            }
            tbody {
                for row in 0..table.rows.len() {
                    tr {
                        key: "{row}",
                        for column in 0..columns {
                            td {
                                key: "{column}",
                                {shorten(table.cell(row, column), CELL_DISPLAY_LIMIT)}
                            }
                        }
                    }
                }
            }
        }
        p { style: "margin: 8px 0 0; font-size: 0.75rem;", "{summary}" }
    }
}
