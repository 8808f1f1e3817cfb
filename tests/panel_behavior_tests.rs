//! 設定パネルの振る舞いテスト
//!
//! 列選択チップ・トグル・プレビュー・チャートの表示ロジックを
//! レンダラーを使わずに確認する。

use creator_dashboard::analytics::{CategorySlice, RevenuePoint};
use creator_dashboard::gui::chart_geometry::{
    layout_donut, layout_revenue_chart, PlotArea, DONUT_ANCHOR_DEG, DONUT_PADDING_ANGLE_DEG,
};
use creator_dashboard::gui::components::analytics_charts::revenue_mark_views;
use creator_dashboard::gui::components::feature_toggle::{
    DEFAULT_DESCRIPTION, DEFAULT_KEYWORD_MODE_DESCRIPTION,
};
use creator_dashboard::gui::components::{next_selection, preview_footer, toggle_description};
use creator_dashboard::gui::models::ConfigurationState;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn candidates() -> Vec<String> {
    ["company", "url", "industry", "employees", "country", "notes"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// 候補からランダムな部分集合（順序もランダム）を作る
fn random_selection(rng: &mut StdRng, candidates: &[String]) -> Vec<String> {
    let mut selection: Vec<String> = candidates
        .iter()
        .filter(|_| rng.gen_bool(0.5))
        .cloned()
        .collect();
    selection.shuffle(rng);
    selection
}

#[cfg(test)]
mod selection_chip_tests {
    use super::*;

    /// 未選択の項目は末尾に1回だけ追加される
    #[test]
    fn test_toggle_unselected_appends_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = candidates();

        for _ in 0..200 {
            let selected = random_selection(&mut rng, &candidates);
            for item in candidates.iter().filter(|c| !selected.contains(c)) {
                let next = next_selection(&selected, item);
                assert_eq!(next.len(), selected.len() + 1);
                assert_eq!(&next[..selected.len()], &selected[..]);
                assert_eq!(next.last(), Some(item));
            }
        }
    }

    /// 選択済みの項目は1件だけ取り除かれ、残りの順序は維持される
    #[test]
    fn test_toggle_selected_removes_and_keeps_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = candidates();

        for _ in 0..200 {
            let selected = random_selection(&mut rng, &candidates);
            for item in &selected {
                let next = next_selection(&selected, item);
                let expected: Vec<String> =
                    selected.iter().filter(|s| *s != item).cloned().collect();
                assert_eq!(next, expected);
            }
        }
    }

    /// 同じ項目を2回トグルすると集合として元に戻る
    #[test]
    fn test_toggle_pair_restores_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates = candidates();

        for _ in 0..200 {
            let selected = random_selection(&mut rng, &candidates);
            for item in &candidates {
                let once = next_selection(&selected, item);
                let twice = next_selection(&once, item);
                let before: HashSet<&String> = selected.iter().collect();
                let after: HashSet<&String> = twice.iter().collect();
                assert_eq!(before, after);
            }
        }
    }

    /// 親が確定した選択は常に表示中の候補の部分集合
    #[test]
    fn test_committed_selection_is_subset_of_headers() {
        let mut state = ConfigurationState::new(false);
        state.set_csv_text("company,url,industry\nAcme,acme.com,tools".to_string());

        let mut proposal = state.selected_columns.clone();
        for item in ["url", "industry", "url", "company"] {
            proposal = next_selection(&proposal, item);
            state.commit_selection(proposal.clone());
            assert!(state
                .selected_columns
                .iter()
                .all(|column| state.headers.contains(column)));
        }
        // [company, url, industry] → url外す → industry外す → url追加 → company外す
        assert_eq!(state.selected_columns, ["url"]);
    }
}

#[cfg(test)]
mod feature_toggle_tests {
    use super::*;

    /// 説明文はモードのみで決まる
    #[test]
    fn test_description_depends_only_on_mode() {
        for is_keyword_mode in [true, false] {
            let expected = if is_keyword_mode {
                "Enhanced company research"
            } else {
                "Optional web enrichment"
            };
            assert_eq!(
                toggle_description(
                    is_keyword_mode,
                    DEFAULT_KEYWORD_MODE_DESCRIPTION,
                    DEFAULT_DESCRIPTION
                ),
                expected
            );
        }
    }

    /// 親側でトグル結果を反映すると状態が反転する
    #[test]
    fn test_enrichment_toggle_round_trip() {
        let mut state = ConfigurationState::new(false);
        state.set_enrichment(!state.enrichment_enabled);
        assert!(state.enrichment_enabled);
        state.set_enrichment(!state.enrichment_enabled);
        assert!(!state.enrichment_enabled);
    }
}

#[cfg(test)]
mod preview_panel_tests {
    use super::*;

    /// ファイル名表示とアップロードボタンは独立して切り替わる
    #[test]
    fn test_footer_conditions_are_independent() {
        for filename in [None, Some("leads.csv")] {
            for has_handler in [false, true] {
                let footer = preview_footer(filename, has_handler);
                assert_eq!(footer.filename_label.is_some(), filename.is_some());
                assert_eq!(footer.show_upload_action, has_handler);
            }
        }
    }
}

#[cfg(test)]
mod chart_tests {
    use super::*;

    #[test]
    fn test_empty_revenue_chart() {
        let layout = layout_revenue_chart(&[], PlotArea::new(600.0, 300.0));
        assert!(layout.points.is_empty());
        assert!(revenue_mark_views(&layout).is_empty());
    }

    #[test]
    fn test_single_revenue_point() {
        let data = vec![RevenuePoint::new("2024-01-01", 100.0, 5)];
        let layout = layout_revenue_chart(&data, PlotArea::new(600.0, 300.0));
        assert_eq!(layout.points.len(), 1);
        assert_eq!(layout.points[0].date, "2024-01-01");
        assert_eq!(layout.points[0].revenue, 100.0);

        let marks = revenue_mark_views(&layout);
        assert_eq!(marks[0].revenue_label, "revenue : 100");
    }

    #[test]
    fn test_category_proportions() {
        let data = vec![
            CategorySlice::new("A", 3.0, "#111"),
            CategorySlice::new("B", 1.0, "#222"),
        ];
        let segments = layout_donut(&data);
        assert_eq!(segments[0].name, "A");
        assert_eq!(segments[1].name, "B");
        assert!((segments[0].fraction - 0.75).abs() < 1e-9);
        assert!((segments[1].fraction - 0.25).abs() < 1e-9);
        assert!((segments[0].start_deg - DONUT_ANCHOR_DEG).abs() < 1e-9);
        assert!(segments[1].start_deg > segments[0].end_deg);

        let drawable = 360.0 - 2.0 * DONUT_PADDING_ANGLE_DEG;
        assert!((segments[0].sweep_deg() - drawable * 0.75).abs() < 1e-9);
        assert!((segments[1].sweep_deg() - drawable * 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_categories() {
        let segments = layout_donut(&[CategorySlice::new("A", 0.0, "#111")]);
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_visible());
    }

    /// 割合は毎回入力から計算される
    #[test]
    fn test_proportions_follow_current_input() {
        let first = layout_donut(&[
            CategorySlice::new("A", 1.0, "#111"),
            CategorySlice::new("B", 1.0, "#222"),
        ]);
        let second = layout_donut(&[
            CategorySlice::new("A", 1.0, "#111"),
            CategorySlice::new("B", 3.0, "#222"),
        ]);
        assert!((first[0].fraction - 0.5).abs() < 1e-9);
        assert!((second[0].fraction - 0.25).abs() < 1e-9);
    }
}
