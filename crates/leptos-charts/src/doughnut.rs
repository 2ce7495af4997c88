//! Doughnut chart over the first series. Slice colors come from the
//! series palette assignment done by the caller, one color per label.

use leptos::prelude::*;

use crate::data::{arc_path, ChartData};
use crate::NoData;

#[component]
pub fn DoughnutChart(
    #[prop(into)] data: Signal<ChartData>,
    #[prop(default = 300)] size: u32,
    /// Inner radius as a fraction of the outer; 0.0 draws a pie
    #[prop(default = 0.6)] cutout: f64,
) -> impl IntoView {
    move || {
        let data = data.get();
        let Some(series) = data.series.first().cloned() else {
            return view! { <NoData /> }.into_any();
        };
        let total: f64 = series.values.iter().map(|v| v.max(0.0)).sum();
        if data.is_empty() || total <= 0.0 {
            return view! { <NoData /> }.into_any();
        }

        let s = size as f64;
        let (cx, cy) = (s / 2.0, s / 2.0);
        let outer = s / 2.0 - 10.0;
        let inner = outer * cutout;

        let mut start = 0.0f64;
        let slices = series
            .values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| *v > 0.0)
            .map(|(i, value)| {
                let frac = value / total;
                // keep a full circle drawable as a single slice
                let end = (start + frac).min(start + 0.9999);
                let d = arc_path(cx, cy, outer, inner, start, end);
                start += frac;
                view! {
                    <path d=d fill=data.slice_color(i) stroke="#fff" stroke-width="1" />
                }
            })
            .collect_view();

        let legend = data
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                view! {
                    <span class="chart-legend-item">
                        <span class="chart-legend-dot" style:background-color=data.slice_color(i)></span>
                        {label.clone()}
                    </span>
                }
            })
            .collect_view();

        view! {
            <div class="chart chart-doughnut">
                <svg viewBox=format!("0 0 {size} {size}") preserveAspectRatio="xMidYMid meet">
                    {slices}
                </svg>
                <div class="chart-legend chart-legend-right">{legend}</div>
            </div>
        }
        .into_any()
    }
}
