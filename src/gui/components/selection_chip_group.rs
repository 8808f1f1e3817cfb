use crate::gui::styles::theme::{get_chip_class, CssClasses};
use dioxus::prelude::*;

/// チップをクリックした後の選択状態を計算する
///
/// 選択済みなら最初の1件だけを取り除き（残りの順序は維持）、
/// 未選択なら末尾に追加する。入力は変更せず常に新しい列を返す。
pub fn next_selection(selected: &[String], item: &str) -> Vec<String> {
    match selected.iter().position(|s| s == item) {
        Some(index) => {
            let mut next = selected.to_vec();
            next.remove(index);
            next
        }
        None => {
            let mut next = Vec::with_capacity(selected.len() + 1);
            next.extend_from_slice(selected);
            next.push(item.to_string());
            next
        }
    }
}

/// 列選択チップグループ
///
/// 候補を表示順のまま1つずつチップにする。選択状態は親が持ち、
/// クリック時は `(項目, 次の選択)` を1回だけ通知する。
#[component]
pub fn SelectionChipGroup(
    candidates: Vec<String>,
    selected: Vec<String>,
    on_toggle: EventHandler<(String, Vec<String>)>,
    #[props(into, default = "Columns to include".to_string())] label: String,
) -> Element {
    rsx! {
        div {
            label { class: CssClasses::FORM_LABEL, "{label}" }
            div {
                class: CssClasses::CHIP_GROUP,
                role: "group",
                "aria-label": "{label}",

                for item in candidates.iter().cloned() {
                    button {
                        key: "{item}",
                        r#type: "button",
                        class: get_chip_class(selected.contains(&item)),
                        "aria-pressed": selected.contains(&item),
                        onclick: {
                            let selected = selected.clone();
                            let item = item.clone();
                            move |_| {
                                let next = next_selection(&selected, &item);
                                tracing::debug!(
                                    item = %item,
                                    selected = next.len(),
                                    "🏷️ Column chip toggled"
                                );
                                on_toggle.call((item.clone(), next));
                            }
                        },
                        "{item}"
                    }
                }
            }
        }
    }
}
