//! Leptos Chart Components
//!
//! Declarative SVG charts (bar, line, doughnut, radar) for report pages.
//! Components re-render from a `Signal<ChartData>`, so a canvas slot can
//! never hold more than one live chart. Empty data renders an explicit
//! "no data" placeholder instead of empty axes.

mod bar;
mod data;
mod doughnut;
mod line;
mod palette;
mod radar;

pub use bar::BarChart;
pub use data::{ChartData, ChartSeries};
pub use doughnut::DoughnutChart;
pub use line::LineChart;
pub use palette::{color_at, DEFAULT_PALETTE};
pub use radar::RadarChart;

use leptos::prelude::*;

/// Placeholder shown when a chart has nothing to draw
#[component]
pub fn NoData() -> impl IntoView {
    view! {
        <div class="chart-empty">"No data available"</div>
    }
}
