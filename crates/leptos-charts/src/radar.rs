//! Radar chart: one spoke per label, one polygon per series.

use leptos::prelude::*;

use crate::data::{polar, polygon_points, ChartData};
use crate::NoData;

#[component]
pub fn RadarChart(
    #[prop(into)] data: Signal<ChartData>,
    #[prop(default = 300)] size: u32,
    /// Fixed axis maximum; falls back to the data maximum when absent
    #[prop(optional)] max: Option<f64>,
) -> impl IntoView {
    move || {
        let data = data.get();
        if data.is_empty() {
            return view! { <NoData /> }.into_any();
        }

        let s = size as f64;
        let (cx, cy) = (s / 2.0, s / 2.0);
        let r = s / 2.0 - 30.0;
        let n = data.labels.len();

        let data_max = data
            .series
            .iter()
            .flat_map(|sr| sr.values.iter().copied())
            .fold(f64::MIN, f64::max);
        let scale = max.unwrap_or(if data_max > 0.0 { data_max } else { 1.0 });

        let rings = (1..=4)
            .map(|i| {
                let ring_r = r * i as f64 / 4.0;
                let pts = (0..n)
                    .map(|k| {
                        let (x, y) = polar(cx, cy, ring_r, k as f64 / n as f64);
                        format!("{x:.2},{y:.2}")
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                view! {
                    <polygon points=pts fill="none" stroke="#ccc" stroke-width="0.5" />
                }
            })
            .collect_view();

        let spokes = data
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let (x, y) = polar(cx, cy, r, i as f64 / n as f64);
                let (lx, ly) = polar(cx, cy, r + 14.0, i as f64 / n as f64);
                view! {
                    <g>
                        <line x1={cx} y1={cy} x2={x} y2={y} stroke="#ccc" stroke-width="0.5" />
                        <text x={lx} y={ly} text-anchor="middle" font-size="10" fill="#888">
                            {label.clone()}
                        </text>
                    </g>
                }
            })
            .collect_view();

        let polygons = data
            .series
            .iter()
            .map(|series| {
                let pts = polygon_points(cx, cy, r, &series.values, scale);
                view! {
                    <polygon points=pts fill=series.color.clone() fill-opacity="0.2"
                        stroke=series.color.clone() stroke-width="2" />
                }
            })
            .collect_view();

        let legend = data
            .series
            .iter()
            .map(|series| {
                view! {
                    <span class="chart-legend-item">
                        <span class="chart-legend-dot" style:background-color=series.color.clone()></span>
                        {series.name.clone()}
                    </span>
                }
            })
            .collect_view();

        view! {
            <div class="chart chart-radar">
                <svg viewBox=format!("0 0 {size} {size}") preserveAspectRatio="xMidYMid meet">
                    {rings}
                    {spokes}
                    {polygons}
                </svg>
                <div class="chart-legend">{legend}</div>
            </div>
        }
        .into_any()
    }
}
