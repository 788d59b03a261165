use crate::models::{ChartPoint, HistoryPoint};
use crate::ui::escape;
use crate::view::{scope_color, window_history, HistoryWindow};
use std::f64::consts::PI;
use std::fmt::Write;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PAD_X: f64 = 48.0;
const PAD_Y: f64 = 34.0;
const TOP: f64 = 20.0;
const MAX_X_LABELS: usize = 8;

pub fn history_chart(
    series: &[HistoryPoint],
    window: HistoryWindow,
    toggle_href: impl Fn(HistoryWindow) -> String,
) -> String {
    if series.is_empty() {
        return r#"<div class="card placeholder history-empty"><p>No historical data available</p></div>"#
            .to_string();
    }

    let tabs: String = HistoryWindow::ALL
        .iter()
        .map(|&option| {
            let class = if option == window { "tab active" } else { "tab" };
            format!(
                r#"<a class="{class}" href="{}">{}</a>"#,
                escape(&toggle_href(option)),
                option.label()
            )
        })
        .collect();

    format!(
        r#"<div class="card history-chart" data-window="{}">
  <div class="chart-header">
    <h3>Emission Trends</h3>
    <div class="tabs" role="tablist">{tabs}</div>
  </div>
  {}
</div>"#,
        window.key(),
        area_svg(window_history(series, window))
    )
}

fn area_svg(points: &[HistoryPoint]) -> String {
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    let mut min = values.iter().copied().fold(0.0_f64, f64::min);
    let mut max = values.iter().copied().fold(0.0_f64, f64::max);
    if min == max {
        min -= 1.0;
        max += 1.0;
    }

    let range = max - min;
    let x_step = if points.len() > 1 {
        (WIDTH - PAD_X * 2.0) / (points.len() - 1) as f64
    } else {
        0.0
    };
    let scale_y = (HEIGHT - TOP - PAD_Y) / range;
    let x = |index: usize| PAD_X + index as f64 * x_step;
    let y = |value: f64| HEIGHT - PAD_Y - (value - min) * scale_y;

    let mut line = String::new();
    for (index, value) in values.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        let _ = write!(line, "{command} {:.2} {:.2} ", x(index), y(*value));
    }
    let base = y(min.max(0.0).min(max));
    let area = format!(
        "{line}L {:.2} {base:.2} L {:.2} {base:.2} Z",
        x(points.len() - 1),
        x(0)
    );

    let mut grid = String::new();
    const TICKS: usize = 4;
    for tick in 0..=TICKS {
        let value = min + range * tick as f64 / TICKS as f64;
        let y_pos = y(value);
        let _ = write!(
            grid,
            r#"<line class="chart-grid" x1="{PAD_X}" y1="{y_pos:.2}" x2="{}" y2="{y_pos:.2}" /><text class="chart-label" x="{}" y="{:.2}" text-anchor="end">{}</text>"#,
            WIDTH - PAD_X,
            PAD_X - 10.0,
            y_pos + 4.0,
            axis_value(value)
        );
    }

    let label_every = points.len().div_ceil(MAX_X_LABELS).max(1);
    let mut labels = String::new();
    for (index, point) in points.iter().enumerate().step_by(label_every) {
        let _ = write!(
            labels,
            r#"<text class="chart-label" x="{:.2}" y="{}" text-anchor="middle">{}</text>"#,
            x(index),
            HEIGHT - PAD_Y + 18.0,
            escape(short_date(&point.date))
        );
    }

    format!(
        r##"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Emission history">
    <defs>
      <linearGradient id="colorValue" x1="0" y1="0" x2="0" y2="1">
        <stop offset="5%" stop-color="#10b981" stop-opacity="0.3" />
        <stop offset="95%" stop-color="#10b981" stop-opacity="0" />
      </linearGradient>
    </defs>
    {grid}
    <path class="chart-area" d="{area}" fill="url(#colorValue)" />
    <path class="chart-line" d="{}" />
    {labels}
  </svg>"##,
        line.trim_end()
    )
}

/// `2026-10-16` reads as `10-16` on the axis.
fn short_date(date: &str) -> &str {
    if date.len() == 10 && date.as_bytes()[4] == b'-' {
        &date[5..]
    } else {
        date
    }
}

fn axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

const DONUT_CENTER: f64 = 130.0;
const DONUT_RADIUS: f64 = 100.0;
const DONUT_WIDTH: f64 = 40.0;
const SEGMENT_GAP: f64 = 5.0;

pub fn scope_chart(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return r#"<div class="card placeholder scope-empty"><div class="pulse-dot"></div><p>No emission data to visualize</p></div>"#
            .to_string();
    }

    let total: f64 = points.iter().map(|point| point.value.max(0.0)).sum();
    let circumference = 2.0 * PI * DONUT_RADIUS;
    let gap = if points.len() > 1 { SEGMENT_GAP } else { 0.0 };

    let mut segments = String::new();
    let mut offset = 0.0;
    if total > 0.0 {
        for (index, point) in points.iter().enumerate() {
            let share = point.value.max(0.0) / total * circumference;
            let visible = (share - gap).max(0.0);
            let _ = write!(
                segments,
                r#"<circle class="donut-segment" cx="{DONUT_CENTER}" cy="{DONUT_CENTER}" r="{DONUT_RADIUS}" stroke="{}" stroke-width="{DONUT_WIDTH}" stroke-dasharray="{visible:.3} {:.3}" stroke-dashoffset="{:.3}"><title>{}: {:.2}</title></circle>"#,
                scope_color(index),
                circumference - visible,
                -offset,
                escape(&point.name),
                point.value
            );
            offset += share;
        }
    }

    let legend: String = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            format!(
                r#"<li><span class="swatch" style="background:{}"></span>{}</li>"#,
                scope_color(index),
                escape(&point.name)
            )
        })
        .collect();

    format!(
        r#"<div class="card scope-chart">
  <h3 class="chart-title"><span>Emission Breakdown</span><span class="chip">By Scope</span></h3>
  <svg class="donut" viewBox="0 0 260 260" role="img" aria-label="Emission breakdown">
    <circle cx="{DONUT_CENTER}" cy="{DONUT_CENTER}" r="{DONUT_RADIUS}" fill="none" stroke="rgba(255,255,255,0.04)" stroke-width="{DONUT_WIDTH}" />
    <g transform="rotate(-90 {DONUT_CENTER} {DONUT_CENTER})" fill="none">{segments}</g>
  </svg>
  <ul class="legend">{legend}</ul>
</div>"#
    )
}
