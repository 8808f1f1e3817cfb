//! 収益推移・カテゴリ内訳のチャート
//!
//! どちらもSVGで描画する状態を持たないコンポーネント。ツールチップは
//! `.chart-mark` のホバー/フォーカスでCSSのみで表示する。

use crate::analytics::{CategorySlice, RevenuePoint};
use crate::gui::chart_geometry::{
    layout_donut, layout_revenue_chart, DonutSegment, LineChartLayout, PlotArea,
    DONUT_INNER_RADIUS, DONUT_OUTER_RADIUS,
};
use crate::gui::config_manager::ChartConfig;
use crate::gui::styles::theme::CssClasses;
use crate::gui::utils::{format_number, UiUpdateTimer};
use dioxus::prelude::*;

/// SVGの論理幅（viewBox）
pub const CHART_WIDTH: f64 = 600.0;
/// X軸ラベルの最大表示数
pub const MAX_X_LABELS: usize = 12;

const TOOLTIP_WIDTH: f64 = 150.0;
const TOOLTIP_HEIGHT: f64 = 54.0;
const TOOLTIP_GAP: f64 = 10.0;
const DOT_RADIUS: f64 = 4.0;
/// ホバー判定とフォーカス枠に使う円の半径
const HIT_RADIUS: f64 = 8.0;

/// 収益グラフの1点分の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueMarkView {
    pub x: f64,
    pub y: f64,
    pub date: String,
    pub revenue_label: String,
    pub executions_label: String,
    pub tooltip_x: f64,
    pub tooltip_y: f64,
    pub show_x_label: bool,
}

/// X軸ラベルを何点おきに表示するか
pub fn x_label_stride(count: usize) -> usize {
    count.div_ceil(MAX_X_LABELS).max(1)
}

/// レイアウト済みの点から描画用の表示内容を作る
///
/// ツールチップはSVGの外にはみ出さないよう位置を補正する。
pub fn revenue_mark_views(layout: &LineChartLayout) -> Vec<RevenueMarkView> {
    let stride = x_label_stride(layout.points.len());
    let max_x = (layout.area.width - TOOLTIP_WIDTH).max(0.0);

    layout
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let tooltip_x = (point.x - TOOLTIP_WIDTH / 2.0).clamp(0.0, max_x);
            let above = point.y - TOOLTIP_HEIGHT - TOOLTIP_GAP;
            let tooltip_y = if above < 0.0 {
                point.y + TOOLTIP_GAP
            } else {
                above
            };
            RevenueMarkView {
                x: point.x,
                y: point.y,
                date: point.date.clone(),
                revenue_label: format!("revenue : {}", format_number(point.revenue)),
                executions_label: format!("executions : {}", point.executions),
                tooltip_x,
                tooltip_y,
                show_x_label: index % stride == 0,
            }
        })
        .collect()
}

/// 収益推移の折れ線グラフ
///
/// 入力順のまま描画し、並べ替えや集計は行わない。
#[component]
pub fn RevenueChart(
    data: Vec<RevenuePoint>,
    #[props(into, default)] selected_period: String,
    #[props(default = 300)] height: u32,
    #[props(into, default = "#10a37f".to_string())] line_color: String,
) -> Element {
    let _timer = UiUpdateTimer::new("RevenueChart");

    let area = PlotArea::new(CHART_WIDTH, f64::from(height));
    let layout = layout_revenue_chart(&data, area);
    let marks = revenue_mark_views(&layout);
    let polyline = layout.polyline_points();
    let view_box = format!("0 0 {} {}", area.width, area.height);

    rsx! {
        div {
            class: CssClasses::CHART,
            if !selected_period.is_empty() {
                p { class: "feature-toggle-description", "{selected_period}" }
            }
            svg {
                width: "100%",
                height: "{height}",
                "viewBox": "{view_box}",
                "role": "img",
                "aria-label": "Revenue over time",

                // グリッドとY軸目盛り
                for (index, tick) in layout.y_ticks.iter().enumerate() {
                    g {
                        key: "{index}",
                        line {
                            x1: "{area.left()}",
                            x2: "{area.right()}",
                            y1: "{tick.position}",
                            y2: "{tick.position}",
                            stroke: "#e5e7eb",
                            "stroke-dasharray": "3 3",
                        }
                        text {
                            x: "{area.left() - 8.0}",
                            y: "{tick.position}",
                            "text-anchor": "end",
                            "dominant-baseline": "middle",
                            "font-size": "11",
                            fill: "#6b7280",
                            "{tick.label}"
                        }
                    }
                }

                line {
                    x1: "{area.left()}",
                    x2: "{area.right()}",
                    y1: "{area.bottom()}",
                    y2: "{area.bottom()}",
                    stroke: "#9ca3af",
                }

                if marks.is_empty() {
                    text {
                        class: CssClasses::CHART_EMPTY,
                        x: "{area.left() + area.inner_width() / 2.0}",
                        y: "{area.top() + area.inner_height() / 2.0}",
                        "text-anchor": "middle",
                        "No data"
                    }
                } else {
                    polyline {
                        points: "{polyline}",
                        fill: "none",
                        stroke: "{line_color}",
                        "stroke-width": "2",
                    }
                }

                // X軸ラベルと点
                for (index, mark) in marks.iter().enumerate() {
                    g {
                        key: "{index}",
                        if mark.show_x_label {
                            text {
                                x: "{mark.x}",
                                y: "{area.bottom() + 18.0}",
                                "text-anchor": "middle",
                                "font-size": "11",
                                fill: "#6b7280",
                                "{mark.date}"
                            }
                        }
                        circle {
                            cx: "{mark.x}",
                            cy: "{mark.y}",
                            r: "{DOT_RADIUS}",
                            fill: "{line_color}",
                        }
                    }
                }

                // ツールチップは他の要素より後に描いて前面に出す
                for (index, mark) in marks.iter().enumerate() {
                    g {
                        key: "{index}",
                        class: CssClasses::CHART_MARK,
                        "tabindex": "0",
                        "aria-label": "{mark.date} {mark.revenue_label}",
                        circle {
                            class: CssClasses::CHART_HIT,
                            cx: "{mark.x}",
                            cy: "{mark.y}",
                            r: "{HIT_RADIUS}",
                            fill: "transparent",
                        }
                        g {
                            class: CssClasses::CHART_TOOLTIP,
                            rect {
                                x: "{mark.tooltip_x}",
                                y: "{mark.tooltip_y}",
                                width: "{TOOLTIP_WIDTH}",
                                height: "{TOOLTIP_HEIGHT}",
                                rx: "4",
                                fill: "white",
                                stroke: "#e5e7eb",
                            }
                            text {
                                x: "{mark.tooltip_x + 10.0}",
                                y: "{mark.tooltip_y + 17.0}",
                                "font-size": "12",
                                fill: "#111827",
                                "{mark.date}"
                            }
                            text {
                                x: "{mark.tooltip_x + 10.0}",
                                y: "{mark.tooltip_y + 32.0}",
                                "font-size": "12",
                                fill: "{line_color}",
                                "{mark.revenue_label}"
                            }
                            text {
                                x: "{mark.tooltip_x + 10.0}",
                                y: "{mark.tooltip_y + 47.0}",
                                "font-size": "11",
                                fill: "#6b7280",
                                "{mark.executions_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// ドーナツの中央に出すツールチップ文言
pub fn slice_tooltip(segment: &DonutSegment) -> String {
    format!("{} : {}", segment.name, format_number(segment.value))
}

/// 凡例の1行
pub fn legend_label(segment: &DonutSegment) -> String {
    format!("{} ({})", segment.name, segment.percent_label())
}

/// カテゴリ内訳のドーナツグラフ
///
/// 割合は描画のたびに入力から計算する。値が全て0なら空の円環になる。
#[component]
pub fn CategoryBreakdownChart(
    data: Vec<CategorySlice>,
    #[props(default = 200)] height: u32,
) -> Element {
    let _timer = UiUpdateTimer::new("CategoryBreakdownChart");

    let segments = layout_donut(&data);
    let size = f64::from(height).max(DONUT_OUTER_RADIUS * 2.0 + 8.0);
    let center = size / 2.0;
    let ring_width = DONUT_OUTER_RADIUS - DONUT_INNER_RADIUS;
    let ring_radius = DONUT_INNER_RADIUS + ring_width / 2.0;
    let view_box = format!("0 0 {size} {size}");
    let has_visible = segments.iter().any(DonutSegment::is_visible);

    rsx! {
        div {
            class: CssClasses::CHART,
            style: "display: flex; align-items: center; gap: 16px;",
            svg {
                width: "{size}",
                height: "{size}",
                "viewBox": "{view_box}",
                "role": "img",
                "aria-label": "Category breakdown",

                // 背景の円環
                circle {
                    cx: "{center}",
                    cy: "{center}",
                    r: "{ring_radius}",
                    fill: "none",
                    stroke: "#f3f4f6",
                    "stroke-width": "{ring_width}",
                }

                if !has_visible {
                    text {
                        class: CssClasses::CHART_EMPTY,
                        x: "{center}",
                        y: "{center}",
                        "text-anchor": "middle",
                        "dominant-baseline": "middle",
                        "No data"
                    }
                }

                for (index, segment) in segments.iter().filter(|s| s.is_visible()).enumerate() {
                    g {
                        key: "{index}",
                        class: CssClasses::CHART_MARK,
                        "tabindex": "0",
                        path {
                            class: CssClasses::CHART_HIT,
                            d: segment.arc_path(center, center),
                            fill: "{segment.color}",
                        }
                        g {
                            class: CssClasses::CHART_TOOLTIP,
                            circle {
                                cx: "{center}",
                                cy: "{center}",
                                r: "{DONUT_INNER_RADIUS - 2.0}",
                                fill: "white",
                            }
                            text {
                                x: "{center}",
                                y: "{center}",
                                "text-anchor": "middle",
                                "dominant-baseline": "middle",
                                "font-size": "10",
                                fill: "#111827",
                                {slice_tooltip(segment)}
                            }
                        }
                    }
                }
            }

            ul {
                style: "list-style: none; padding: 0; margin: 0; font-size: 0.8rem;",
                for (index, segment) in segments.iter().enumerate() {
                    li {
                        key: "{index}",
                        style: "display: flex; align-items: center; gap: 6px; margin-bottom: 4px;",
                        span {
                            style: "width: 10px; height: 10px; border-radius: 2px; background: {segment.color};",
                        }
                        {legend_label(segment)}
                    }
                }
            }
        }
    }
}

/// 収益推移とカテゴリ内訳をまとめたセット
#[component]
pub fn AnalyticsChartSet(
    revenue: Vec<RevenuePoint>,
    categories: Vec<CategorySlice>,
    #[props(into, default)] selected_period: String,
    #[props(default)] config: ChartConfig,
) -> Element {
    tracing::debug!(
        revenue_points = revenue.len(),
        categories = categories.len(),
        "📊 Rendering analytics charts"
    );

    rsx! {
        div {
            class: CssClasses::CONFIG_SCREEN,
            div {
                class: CssClasses::SECTION,
                h3 { "Revenue" }
                RevenueChart {
                    data: revenue,
                    selected_period,
                    height: config.revenue_height,
                    line_color: config.line_color.clone(),
                }
            }
            div {
                class: CssClasses::SECTION,
                h3 { "Usage by model" }
                CategoryBreakdownChart {
                    data: categories,
                    height: config.category_height,
                }
            }
        }
    }
}
