//! チャート描画用の幾何計算
//!
//! SVG描画に必要な座標・角度の計算をコンポーネントから切り離したもの。
//! 入力は毎回の描画時に渡されたデータのみを使い、合計値などを保持しない。

use crate::analytics::{CategorySlice, RevenuePoint};

/// ドーナツの内径
pub const DONUT_INNER_RADIUS: f64 = 40.0;
/// ドーナツの外径
pub const DONUT_OUTER_RADIUS: f64 = 80.0;
/// 隣接スライス間の隙間（度）
pub const DONUT_PADDING_ANGLE_DEG: f64 = 5.0;
/// 最初のスライスの開始角（12時方向を0度とし時計回り）
pub const DONUT_ANCHOR_DEG: f64 = 0.0;

/// 折れ線グラフの描画領域
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl PlotArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding_left: 56.0,
            padding_right: 16.0,
            padding_top: 16.0,
            padding_bottom: 40.0,
        }
    }

    pub fn left(&self) -> f64 {
        self.padding_left
    }

    pub fn right(&self) -> f64 {
        (self.width - self.padding_right).max(self.padding_left)
    }

    pub fn top(&self) -> f64 {
        self.padding_top
    }

    pub fn bottom(&self) -> f64 {
        (self.height - self.padding_bottom).max(self.padding_top)
    }

    pub fn inner_width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn inner_height(&self) -> f64 {
        self.bottom() - self.top()
    }
}

/// 描画位置が決まったデータ点
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub date: String,
    pub revenue: f64,
    pub executions: u64,
}

/// Y軸の目盛り
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// 収益折れ線グラフのレイアウト結果
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    pub area: PlotArea,
    pub points: Vec<PlotPoint>,
    pub y_min: f64,
    pub y_max: f64,
    pub y_ticks: Vec<AxisTick>,
}

impl LineChartLayout {
    /// `<polyline points=...>` 用の座標列
    pub fn polyline_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const Y_TICK_COUNT: usize = 5;

/// 収益データを描画座標に変換する
///
/// データ点の順序は入力のまま。1点のみの場合は横方向の中央に置く。
pub fn layout_revenue_chart(data: &[RevenuePoint], area: PlotArea) -> LineChartLayout {
    let finite = |v: f64| if v.is_finite() { v } else { 0.0 };

    let data_min = data.iter().map(|p| finite(p.revenue)).fold(0.0, f64::min);
    let data_max = data.iter().map(|p| finite(p.revenue)).fold(0.0, f64::max);

    let y_min = if data_min < 0.0 {
        -nice_ceiling(-data_min)
    } else {
        0.0
    };
    let mut y_max = nice_ceiling(data_max);
    if y_max <= y_min {
        y_max = y_min + 1.0;
    }

    let project_y = |value: f64| {
        let ratio = (finite(value) - y_min) / (y_max - y_min);
        area.bottom() - ratio * area.inner_height()
    };

    let count = data.len();
    let points = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if count <= 1 {
                area.left() + area.inner_width() / 2.0
            } else {
                area.left() + area.inner_width() * index as f64 / (count - 1) as f64
            };
            PlotPoint {
                x,
                y: project_y(point.revenue),
                date: point.date.clone(),
                revenue: point.revenue,
                executions: point.executions,
            }
        })
        .collect();

    let tick_step = (y_max - y_min) / (Y_TICK_COUNT - 1) as f64;
    let decimals = axis_decimals(tick_step);
    let y_ticks = (0..Y_TICK_COUNT)
        .map(|i| {
            let value = y_min + tick_step * i as f64;
            AxisTick {
                position: project_y(value),
                label: format!("{:.*}", decimals, value),
            }
        })
        .collect();

    LineChartLayout {
        area,
        points,
        y_min,
        y_max,
        y_ticks,
    }
}

/// 軸の上限として切りの良い値に切り上げる
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let step = magnitude / 2.0;
    (value / step).ceil() * step
}

/// 目盛り間隔を区別できる小数桁数
///
/// 間隔の最上位桁まで表示する（例: 0.0025 → 3桁、25 → 0桁）。
pub fn axis_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (-step.log10().floor()).clamp(0.0, 12.0) as usize
}

/// ドーナツチャートの1スライス
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// 全体に対する割合（0.0〜1.0）
    pub fraction: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl DonutSegment {
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn is_visible(&self) -> bool {
        self.sweep_deg() > 0.0
    }

    /// 割合のパーセント表記
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.fraction * 100.0)
    }

    /// 円環状の扇形を表すSVGパス
    pub fn arc_path(&self, cx: f64, cy: f64) -> String {
        annular_sector_path(
            cx,
            cy,
            DONUT_INNER_RADIUS,
            DONUT_OUTER_RADIUS,
            self.start_deg,
            self.end_deg,
        )
    }
}

/// カテゴリ内訳からスライスの角度を計算する
///
/// 各スライスの角度は全体合計に対する割合に比例し、入力順に時計回りで並ぶ。
/// 値が0以下・非有限のスライスは角度0となり隙間も取らない。
/// 合計が0の場合は全スライスが角度0になる（空の円環として描画される）。
pub fn layout_donut(data: &[CategorySlice]) -> Vec<DonutSegment> {
    let weight = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };

    // 巨大な値の合計が無限大にならないよう最大値で正規化してから足す
    let max_weight = data.iter().map(|s| weight(s.value)).fold(0.0, f64::max);
    let scaled = |v: f64| {
        if max_weight > 0.0 {
            weight(v) / max_weight
        } else {
            0.0
        }
    };
    let total: f64 = data.iter().map(|s| scaled(s.value)).sum();
    let visible = data.iter().filter(|s| weight(s.value) > 0.0).count();

    let padding = if visible > 1 {
        DONUT_PADDING_ANGLE_DEG
    } else {
        0.0
    };
    let available = 360.0 - padding * visible as f64;

    let mut cursor = DONUT_ANCHOR_DEG;
    data.iter()
        .map(|slice| {
            let fraction = if total > 0.0 {
                scaled(slice.value) / total
            } else {
                0.0
            };
            let sweep = available * fraction;
            let start_deg = cursor;
            let end_deg = start_deg + sweep;
            if sweep > 0.0 {
                cursor = end_deg + padding;
            }
            DonutSegment {
                name: slice.name.clone(),
                value: slice.value,
                color: slice.color.clone(),
                fraction,
                start_deg,
                end_deg,
            }
        })
        .collect()
}

/// 12時方向を0度とした時計回りの角度から座標を求める
pub fn polar_point(cx: f64, cy: f64, radius: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + radius * rad.sin(), cy - radius * rad.cos())
}

/// 円環状の扇形パス
///
/// 360度ちょうどの円弧はSVGで描けないため、わずかに手前で止める。
pub fn annular_sector_path(
    cx: f64,
    cy: f64,
    inner: f64,
    outer: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    let end_deg = end_deg.min(start_deg + 359.999);
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };

    let (ox1, oy1) = polar_point(cx, cy, outer, start_deg);
    let (ox2, oy2) = polar_point(cx, cy, outer, end_deg);
    let (ix2, iy2) = polar_point(cx, cy, inner, end_deg);
    let (ix1, iy1) = polar_point(cx, cy, inner, start_deg);

    format!(
        "M {ox1:.3} {oy1:.3} A {outer} {outer} 0 {large_arc} 1 {ox2:.3} {oy2:.3} \
         L {ix2:.3} {iy2:.3} A {inner} {inner} 0 {large_arc} 0 {ix1:.3} {iy1:.3} Z"
    )
}
