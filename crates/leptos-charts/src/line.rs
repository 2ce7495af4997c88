//! Multi-series line chart.

use leptos::prelude::*;

use crate::data::{map_y, value_ceiling, ChartData};
use crate::NoData;

#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<ChartData>,
    #[prop(default = 600)] width: u32,
    #[prop(default = 300)] height: u32,
) -> impl IntoView {
    move || {
        let data = data.get();
        if data.is_empty() {
            return view! { <NoData /> }.into_any();
        }

        let pad = 40.0;
        let w = width as f64;
        let h = height as f64;
        let (top, bottom) = (pad, h - pad);
        let (left, right) = (pad, w - pad);

        let ceiling = value_ceiling(&data.series);
        let n = data.labels.len();
        let step = if n > 1 {
            (right - left) / (n - 1) as f64
        } else {
            0.0
        };

        let grid = (0..=4)
            .map(|i| {
                let y = top + (i as f64 / 4.0) * (bottom - top);
                let value = ceiling * (1.0 - i as f64 / 4.0);
                view! {
                    <g>
                        <line x1={left} y1={y} x2={right} y2={y}
                            stroke="#ccc" stroke-width="0.5" stroke-dasharray="4,4" />
                        <text x={left - 6.0} y={y + 4.0} text-anchor="end" font-size="10" fill="#888">
                            {format!("{value:.0}")}
                        </text>
                    </g>
                }
            })
            .collect_view();

        // Thin the x labels so long ranges stay readable
        let label_every = (n / 8).max(1);
        let labels = data
            .labels
            .iter()
            .enumerate()
            .filter(|(i, _)| i % label_every == 0)
            .map(|(i, label)| {
                let x = if n > 1 { left + i as f64 * step } else { (left + right) / 2.0 };
                view! {
                    <text x={x} y={bottom + 16.0} text-anchor="middle" font-size="10" fill="#888">
                        {label.clone()}
                    </text>
                }
            })
            .collect_view();

        let lines = data
            .series
            .iter()
            .map(|series| {
                let points = series
                    .values
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(i, v)| {
                        let x = if n > 1 { left + i as f64 * step } else { (left + right) / 2.0 };
                        let y = map_y(v, ceiling, top, bottom);
                        format!("{x:.2},{y:.2}")
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                view! {
                    <polyline points=points fill="none"
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
            <div class="chart chart-line">
                <svg viewBox=format!("0 0 {width} {height}") preserveAspectRatio="xMidYMid meet">
                    <g class="grid">{grid}</g>
                    {lines}
                    {labels}
                    <line x1={left} y1={bottom} x2={right} y2={bottom} stroke="#888" stroke-width="1" />
                </svg>
                <div class="chart-legend">{legend}</div>
            </div>
        }
        .into_any()
    }
}
