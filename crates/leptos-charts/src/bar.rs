//! Grouped vertical bar chart.

use leptos::prelude::*;

use crate::data::{map_y, value_ceiling, ChartData};
use crate::NoData;

#[component]
pub fn BarChart(
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
        let slot = (right - left) / data.labels.len() as f64;
        let bar_w = slot * 0.8 / data.series.len().max(1) as f64;

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

        let labels = data
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let x = left + (i as f64 + 0.5) * slot;
                view! {
                    <text x={x} y={bottom + 16.0} text-anchor="middle" font-size="10" fill="#888">
                        {label.clone()}
                    </text>
                }
            })
            .collect_view();

        let bars = data
            .series
            .iter()
            .enumerate()
            .flat_map(|(si, series)| {
                let color = series.color.clone();
                series
                    .values
                    .iter()
                    .copied()
                    .enumerate()
                    .map(move |(li, value)| {
                        let x = left + li as f64 * slot + slot * 0.1 + si as f64 * bar_w;
                        let y = map_y(value, ceiling, top, bottom);
                        view! {
                            <rect x={x} y={y} width={bar_w * 0.9} height={bottom - y}
                                fill=color.clone() rx="2" />
                        }
                    })
                    .collect::<Vec<_>>()
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
            <div class="chart chart-bar">
                <svg viewBox=format!("0 0 {width} {height}") preserveAspectRatio="xMidYMid meet">
                    <g class="grid">{grid}</g>
                    {bars}
                    {labels}
                    <line x1={left} y1={bottom} x2={right} y2={bottom} stroke="#888" stroke-width="1" />
                </svg>
                <div class="chart-legend">{legend}</div>
            </div>
        }
        .into_any()
    }
}
