//! Filtered-Report Registry
//!
//! One generic controller replaces the per-report scripts of the old
//! admin UI: every report is a `ReportKind` plus declarative slots for
//! its filters, charts, table columns and summary cards. The panel
//! component drives `refresh()` against this data.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos_charts::{color_at, ChartData, ChartSeries};
use serde_json::Value;

use crate::format::status_label;
use crate::models::ReportEnvelope;

/// Report selector tag, one per admin report page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Workload,
    Cost,
    Efficiency,
    Capacity,
    Productivity,
    ShadowWork,
    TimeTracking,
    Utilization,
    TeamPerformance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Radar,
}

/// Where a chart slot's series come from inside its payload
#[derive(Debug, Clone, Copy)]
pub enum SeriesSource {
    /// `{labels, values, colors?}`: one series with the given name
    Values(&'static str),
    /// `{labels, datasets: [{label?, values|data}]}`, fallback names by index
    Datasets(&'static [&'static str]),
    /// Named value arrays next to `labels`: `(field key, series name)`
    Named(&'static [(&'static str, &'static str)]),
    /// Grouped metric objects: `{<group>: {<spoke>: value}}`
    MetricGroups {
        spokes: &'static [&'static str],
        groups: &'static [(&'static str, &'static str)],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct ChartSlot {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub series: SeriesSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    Number,
    Hours,
    Currency,
    Percent,
    /// Clamped progress bar; label shows the unclamped percentage
    Progress,
    Badge,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub format: CellFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Number,
    Hours,
    Currency,
    Percent,
}

#[derive(Debug, Clone, Copy)]
pub struct SummaryCard {
    pub key: &'static str,
    pub label: &'static str,
    pub format: SummaryFormat,
}

/// Filter controls a report shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    DateRange,
    Team,
    Project,
    CostType,
    Metric,
    Category,
}

macro_rules! cols {
    ($(($key:expr, $label:expr, $fmt:ident)),* $(,)?) => {
        &[$(Column { key: $key, label: $label, format: CellFormat::$fmt }),*]
    };
}

macro_rules! cards {
    ($(($key:expr, $label:expr, $fmt:ident)),* $(,)?) => {
        &[$(SummaryCard { key: $key, label: $label, format: SummaryFormat::$fmt }),*]
    };
}

impl ReportKind {
    pub const ALL: [ReportKind; 9] = [
        ReportKind::Workload,
        ReportKind::Cost,
        ReportKind::Efficiency,
        ReportKind::Capacity,
        ReportKind::Productivity,
        ReportKind::ShadowWork,
        ReportKind::TimeTracking,
        ReportKind::Utilization,
        ReportKind::TeamPerformance,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ReportKind::Workload => "workload",
            ReportKind::Cost => "cost",
            ReportKind::Efficiency => "efficiency",
            ReportKind::Capacity => "capacity",
            ReportKind::Productivity => "productivity",
            ReportKind::ShadowWork => "shadow-work",
            ReportKind::TimeTracking => "time-tracking",
            ReportKind::Utilization => "utilization",
            ReportKind::TeamPerformance => "team-performance",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Workload => "Workload",
            ReportKind::Cost => "Cost",
            ReportKind::Efficiency => "Efficiency",
            ReportKind::Capacity => "Capacity",
            ReportKind::Productivity => "Productivity",
            ReportKind::ShadowWork => "Shadow Work",
            ReportKind::TimeTracking => "Time Tracking",
            ReportKind::Utilization => "Utilization",
            ReportKind::TeamPerformance => "Team Performance",
        }
    }

    pub fn data_url(self) -> String {
        format!("/admin/reports/{}/data", self.slug())
    }

    pub fn export_url(self) -> String {
        format!("/admin/reports/{}/export", self.slug())
    }

    /// Only the workload report refuses to refresh without a date range
    pub fn date_range_required(self) -> bool {
        matches!(self, ReportKind::Workload)
    }

    pub fn filters(self) -> &'static [FilterField] {
        use FilterField::*;
        match self {
            ReportKind::Workload => &[DateRange, Team, Project],
            ReportKind::Cost => &[DateRange, Team, CostType],
            ReportKind::Efficiency => &[DateRange, Team, Metric],
            ReportKind::Capacity => &[DateRange, Team],
            ReportKind::Productivity => &[DateRange, Team, Project],
            ReportKind::ShadowWork => &[DateRange, Team, Category],
            ReportKind::TimeTracking => &[DateRange, Team],
            ReportKind::Utilization => &[DateRange, Team],
            ReportKind::TeamPerformance => &[DateRange, Team],
        }
    }

    pub fn charts(self) -> &'static [ChartSlot] {
        match self {
            ReportKind::Workload => &[
                ChartSlot {
                    key: "team_workload",
                    title: "Team Workload",
                    kind: ChartKind::Bar,
                    series: SeriesSource::Datasets(&["Hours"]),
                },
                ChartSlot {
                    key: "user_workload",
                    title: "User Workload",
                    kind: ChartKind::Bar,
                    series: SeriesSource::Datasets(&["Hours"]),
                },
            ],
            ReportKind::Cost => &[
                ChartSlot {
                    key: "trend",
                    title: "Cost Trend",
                    kind: ChartKind::Line,
                    series: SeriesSource::Named(&[
                        ("costs", "Total Cost"),
                        ("revenue", "Revenue"),
                        ("profit", "Profit"),
                    ]),
                },
                ChartSlot {
                    key: "distribution",
                    title: "Cost Distribution",
                    kind: ChartKind::Doughnut,
                    series: SeriesSource::Values("Cost"),
                },
            ],
            ReportKind::Efficiency => &[
                ChartSlot {
                    key: "trend",
                    title: "Efficiency Trend",
                    kind: ChartKind::Line,
                    series: SeriesSource::Datasets(&[
                        "Time Efficiency",
                        "Cost Efficiency",
                        "Resource Efficiency",
                    ]),
                },
                ChartSlot {
                    key: "team_comparison",
                    title: "Team Comparison",
                    kind: ChartKind::Radar,
                    series: SeriesSource::Values("Team Efficiency"),
                },
            ],
            ReportKind::Capacity => &[
                ChartSlot {
                    key: "trend",
                    title: "Capacity Trend",
                    kind: ChartKind::Line,
                    series: SeriesSource::Datasets(&[
                        "Total Capacity",
                        "Allocated Capacity",
                        "Available Capacity",
                    ]),
                },
                ChartSlot {
                    key: "distribution",
                    title: "Resource Distribution",
                    kind: ChartKind::Doughnut,
                    series: SeriesSource::Values("Capacity"),
                },
            ],
            ReportKind::Productivity => &[
                ChartSlot {
                    key: "trend",
                    title: "Productivity Trend",
                    kind: ChartKind::Line,
                    series: SeriesSource::Values("Productivity Score"),
                },
                ChartSlot {
                    key: "team_comparison",
                    title: "Team Comparison",
                    kind: ChartKind::Bar,
                    series: SeriesSource::Values("Team Productivity"),
                },
            ],
            ReportKind::ShadowWork => &[
                ChartSlot {
                    key: "distribution",
                    title: "Shadow Work Distribution",
                    kind: ChartKind::Doughnut,
                    series: SeriesSource::Values("Shadow Hours"),
                },
                ChartSlot {
                    key: "trend",
                    title: "Shadow Work Trend",
                    kind: ChartKind::Line,
                    series: SeriesSource::Named(&[
                        ("shadow_hours", "Shadow Hours"),
                        ("regular_hours", "Regular Hours"),
                    ]),
                },
            ],
            ReportKind::TimeTracking => &[
                ChartSlot {
                    key: "distribution",
                    title: "Time Distribution",
                    kind: ChartKind::Doughnut,
                    series: SeriesSource::Values("Hours"),
                },
                ChartSlot {
                    key: "trend",
                    title: "Logged Hours",
                    kind: ChartKind::Line,
                    series: SeriesSource::Named(&[
                        ("total_hours", "Total Hours"),
                        ("billable_hours", "Billable Hours"),
                    ]),
                },
            ],
            ReportKind::Utilization => &[
                ChartSlot {
                    key: "trend",
                    title: "Utilization Trend",
                    kind: ChartKind::Line,
                    series: SeriesSource::Named(&[
                        ("utilization", "Average Utilization"),
                        ("target", "Target Utilization"),
                    ]),
                },
                ChartSlot {
                    key: "distribution",
                    title: "Resource Utilization",
                    kind: ChartKind::Bar,
                    series: SeriesSource::Values("Resource Utilization"),
                },
            ],
            ReportKind::TeamPerformance => &[
                ChartSlot {
                    key: "metrics",
                    title: "Performance Metrics",
                    kind: ChartKind::Radar,
                    series: SeriesSource::MetricGroups {
                        spokes: &["productivity", "quality", "delivery", "collaboration"],
                        groups: &[("current", "Current Period"), ("previous", "Previous Period")],
                    },
                },
                ChartSlot {
                    key: "team_comparison",
                    title: "Team Comparison",
                    kind: ChartKind::Bar,
                    series: SeriesSource::Values("Performance Score"),
                },
            ],
        }
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            ReportKind::Workload => cols![
                ("name", "Name", Text),
                ("total_hours", "Total Hours", Hours),
                ("projects_count", "Projects", Number),
                ("avg_daily_hours", "Avg Daily Hours", Hours),
                ("utilization", "Utilization", Progress),
            ],
            ReportKind::Cost => cols![
                ("name", "Name", Text),
                ("team", "Team", Text),
                ("hours", "Hours", Hours),
                ("rate", "Rate", Currency),
                ("total_cost", "Total Cost", Currency),
            ],
            ReportKind::Efficiency => cols![
                ("name", "Name", Text),
                ("team", "Team", Text),
                ("tasks_completed", "Tasks Completed", Number),
                ("avg_completion_time", "Avg Completion (h)", Hours),
                ("efficiency", "Efficiency", Percent),
            ],
            ReportKind::Capacity => cols![
                ("name", "Name", Text),
                ("capacity", "Capacity (h)", Hours),
                ("allocated", "Allocated (h)", Hours),
                ("available", "Available (h)", Hours),
                ("utilization", "Utilization", Progress),
            ],
            ReportKind::Productivity => cols![
                ("name", "Name", Text),
                ("team", "Team", Text),
                ("tasks_completed", "Tasks Completed", Number),
                ("hours_logged", "Hours Logged", Hours),
                ("productivity_score", "Score", Percent),
            ],
            ReportKind::ShadowWork => cols![
                ("name", "Name", Text),
                ("category", "Category", Badge),
                ("shadow_hours", "Shadow Hours", Hours),
                ("percentage", "Share", Percent),
                ("cost_impact", "Cost Impact", Currency),
            ],
            ReportKind::TimeTracking => cols![
                ("name", "Name", Text),
                ("project", "Project", Text),
                ("total_hours", "Total Hours", Hours),
                ("billable_hours", "Billable Hours", Hours),
                ("billable_rate", "Billable Rate", Percent),
            ],
            ReportKind::Utilization => cols![
                ("name", "Name", Text),
                ("team", "Team", Text),
                ("utilization", "Utilization", Progress),
                ("target", "Target", Percent),
                ("status", "Status", Badge),
            ],
            ReportKind::TeamPerformance => cols![
                ("team", "Team", Text),
                ("productivity", "Productivity", Percent),
                ("quality", "Quality", Percent),
                ("delivery", "Delivery", Percent),
                ("collaboration", "Collaboration", Percent),
                ("overall_score", "Overall", Percent),
            ],
        }
    }

    pub fn summary_cards(self) -> &'static [SummaryCard] {
        match self {
            ReportKind::Workload => cards![
                ("total_hours", "Total Hours", Hours),
                ("active_users", "Active Users", Number),
                ("avg_daily_hours", "Avg Daily Hours", Hours),
            ],
            ReportKind::Cost => cards![
                ("total_cost", "Total Cost", Currency),
                ("total_revenue", "Total Revenue", Currency),
                ("profit_margin", "Profit Margin", Percent),
                ("cost_per_resource", "Cost per Resource", Currency),
            ],
            ReportKind::Efficiency => cards![
                ("average", "Average Efficiency", Percent),
                ("top_performer", "Top Performer", Text),
                ("improvement_areas", "Improvement Areas", Text),
            ],
            ReportKind::Capacity => cards![
                ("total_capacity", "Total Capacity (h)", Hours),
                ("available_capacity", "Available Capacity (h)", Hours),
                ("utilization_rate", "Utilization Rate", Percent),
                ("resource_count", "Resources", Number),
            ],
            ReportKind::Productivity => cards![],
            ReportKind::ShadowWork => cards![
                ("total_shadow_hours", "Total Shadow Hours", Hours),
                ("shadow_work_percentage", "Shadow Work Share", Percent),
                ("most_common_category", "Most Common Category", Text),
                ("cost_impact", "Cost Impact", Currency),
            ],
            ReportKind::TimeTracking => cards![
                ("total_hours", "Total Hours", Hours),
                ("billable_hours", "Billable Hours", Hours),
                ("billable_rate", "Billable Rate", Percent),
                ("avg_daily_hours", "Avg Daily Hours", Hours),
            ],
            ReportKind::Utilization => cards![
                ("average", "Average Utilization", Percent),
                ("peak", "Peak Utilization", Percent),
                ("underutilized", "Underutilized", Number),
                ("overutilized", "Overutilized", Number),
            ],
            ReportKind::TeamPerformance => cards![
                ("overall_score", "Overall Score", Percent),
                ("top_team", "Top Team", Text),
                ("avg_team_size", "Avg Team Size", Number),
                ("improvement_areas", "Improvement Areas", Text),
            ],
        }
    }
}

// ========================
// Payload Decoding
// ========================

fn string_vec(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn number_vec(value: Option<&Value>) -> Vec<f64> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(crate::format::value_number).collect())
        .unwrap_or_default()
}

/// Decode one chart slot's payload into drawable data. Colors fall back
/// to the fixed palette, cycled by series index.
pub fn chart_data_from_payload(slot: &ChartSlot, payload: &Value) -> ChartData {
    let labels = string_vec(payload.get("labels"));
    match slot.series {
        SeriesSource::Values(name) => {
            let values = number_vec(payload.get("values"));
            let colors = string_vec(payload.get("colors"));
            let series = ChartSeries {
                name: name.to_string(),
                values,
                color: colors
                    .first()
                    .cloned()
                    .unwrap_or_else(|| color_at(0).to_string()),
            };
            ChartData::new(labels, vec![series]).with_slice_colors(colors)
        }
        SeriesSource::Datasets(fallback_names) => {
            let series = payload
                .get("datasets")
                .and_then(Value::as_array)
                .map(|datasets| {
                    datasets
                        .iter()
                        .enumerate()
                        .map(|(i, dataset)| ChartSeries {
                            name: dataset
                                .get("label")
                                .and_then(Value::as_str)
                                .map(str::to_string)
                                .or_else(|| fallback_names.get(i).map(|n| n.to_string()))
                                .unwrap_or_else(|| format!("Series {}", i + 1)),
                            values: number_vec(
                                dataset.get("values").or_else(|| dataset.get("data")),
                            ),
                            color: dataset
                                .get("color")
                                .and_then(Value::as_str)
                                .map(str::to_string)
                                .unwrap_or_else(|| color_at(i).to_string()),
                        })
                        .collect()
                })
                .unwrap_or_default();
            ChartData::new(labels, series)
        }
        SeriesSource::Named(fields) => {
            let series = fields
                .iter()
                .enumerate()
                .map(|(i, (field, name))| ChartSeries {
                    name: name.to_string(),
                    values: number_vec(payload.get(*field)),
                    color: color_at(i).to_string(),
                })
                .collect();
            ChartData::new(labels, series)
        }
        SeriesSource::MetricGroups { spokes, groups } => {
            let labels = spokes.iter().map(|s| status_label(s)).collect();
            let series = groups
                .iter()
                .enumerate()
                .map(|(i, (group, name))| ChartSeries {
                    name: name.to_string(),
                    values: spokes
                        .iter()
                        .map(|spoke| {
                            payload
                                .get(*group)
                                .and_then(|g| g.get(*spoke))
                                .map(crate::format::value_number)
                                .unwrap_or(0.0)
                        })
                        .collect(),
                    color: color_at(i).to_string(),
                })
                .collect();
            ChartData::new(labels, series)
        }
    }
}

/// Render one summary scalar per its card's declared format
pub fn format_summary_value(value: &Value, format: SummaryFormat) -> String {
    use crate::format::{format_currency, format_hours, format_percent, value_number, value_text};
    match format {
        SummaryFormat::Text => value_text(value),
        SummaryFormat::Number => {
            let n = value_number(value);
            if n.fract() == 0.0 {
                format!("{n:.0}")
            } else {
                format!("{n:.1}")
            }
        }
        SummaryFormat::Hours => format_hours(value_number(value)),
        SummaryFormat::Currency => format_currency(value_number(value)),
        SummaryFormat::Percent => format_percent(value_number(value)),
    }
}

/// Everything a report panel renders, built from one envelope
#[derive(Debug, Clone, Default)]
pub struct ReportView {
    pub summary: HashMap<String, Value>,
    pub rows: Vec<HashMap<String, Value>>,
    /// Parallel to `kind.charts()`
    pub charts: Vec<ChartData>,
}

pub fn view_from_envelope(kind: ReportKind, envelope: &ReportEnvelope) -> ReportView {
    let charts = kind
        .charts()
        .iter()
        .map(|slot| {
            envelope
                .charts
                .get(slot.key)
                .map(|payload| chart_data_from_payload(slot, payload))
                .unwrap_or_default()
        })
        .collect();
    ReportView {
        summary: envelope.summary.clone(),
        rows: envelope.rows(),
        charts,
    }
}

// ========================
// Refresh Sequencing
// ========================

/// Generation counter that makes overlapping refreshes safe: a response
/// may only commit while its generation is still the newest issued, so
/// "last issued wins" instead of "last to resolve wins".
#[derive(Debug, Default)]
pub struct RefreshSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RefreshSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new request
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// True when this response is still current and may be rendered
    pub fn try_commit(&self, generation: u64) -> bool {
        if generation == self.issued.load(Ordering::Relaxed)
            && generation > self.applied.load(Ordering::Relaxed)
        {
            self.applied.store(generation, Ordering::Relaxed);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_report_has_consistent_registry_entries() {
        for kind in ReportKind::ALL {
            assert!(kind.data_url().starts_with("/admin/reports/"));
            assert!(kind.data_url().ends_with("/data"));
            assert!(!kind.charts().is_empty());
            assert!(!kind.columns().is_empty());
            assert!(kind.filters().contains(&FilterField::DateRange));
        }
        assert!(ReportKind::Workload.date_range_required());
        assert!(!ReportKind::Cost.date_range_required());
    }

    #[test]
    fn values_payload_decodes_with_server_colors() {
        let slot = &ReportKind::Cost.charts()[1];
        let payload = json!({
            "labels": ["Dev", "QA"],
            "values": [300, 120],
            "colors": ["#111111", "#222222"]
        });
        let data = chart_data_from_payload(slot, &payload);
        assert_eq!(data.labels, vec!["Dev", "QA"]);
        assert_eq!(data.series[0].values, vec![300.0, 120.0]);
        assert_eq!(data.slice_color(0), "#111111");
        assert_eq!(data.slice_color(1), "#222222");
    }

    #[test]
    fn datasets_payload_uses_fallback_names_and_palette() {
        let slot = &ReportKind::Capacity.charts()[0];
        let payload = json!({
            "labels": ["W1", "W2"],
            "datasets": [
                {"values": [40, 42]},
                {"values": [30, 36]},
                {"values": [10, 6]}
            ]
        });
        let data = chart_data_from_payload(slot, &payload);
        assert_eq!(data.series.len(), 3);
        assert_eq!(data.series[0].name, "Total Capacity");
        assert_eq!(data.series[2].name, "Available Capacity");
        assert_eq!(data.series[1].color, color_at(1));
    }

    #[test]
    fn named_payload_pulls_value_arrays_by_field() {
        let slot = &ReportKind::Utilization.charts()[0];
        let payload = json!({
            "labels": ["Jan", "Feb"],
            "utilization": [81.0, 92.5],
            "target": [85, 85]
        });
        let data = chart_data_from_payload(slot, &payload);
        assert_eq!(data.series[0].name, "Average Utilization");
        assert_eq!(data.series[0].values, vec![81.0, 92.5]);
        assert_eq!(data.series[1].values, vec![85.0, 85.0]);
    }

    #[test]
    fn metric_groups_become_radar_series() {
        let slot = &ReportKind::TeamPerformance.charts()[0];
        let payload = json!({
            "current": {"productivity": 82, "quality": 91, "delivery": 75, "collaboration": 88},
            "previous": {"productivity": 78, "quality": 89, "delivery": 80, "collaboration": 84}
        });
        let data = chart_data_from_payload(slot, &payload);
        assert_eq!(
            data.labels,
            vec!["Productivity", "Quality", "Delivery", "Collaboration"]
        );
        assert_eq!(data.series[0].values, vec![82.0, 91.0, 75.0, 88.0]);
        assert_eq!(data.series[1].name, "Previous Period");
    }

    #[test]
    fn missing_chart_payloads_render_as_empty() {
        let envelope: ReportEnvelope =
            serde_json::from_str(r#"{"summary": {"total_cost": 10}}"#).unwrap();
        let view = view_from_envelope(ReportKind::Cost, &envelope);
        assert_eq!(view.charts.len(), 2);
        assert!(view.charts[0].is_empty());
        assert!(view.rows.is_empty());
    }

    #[test]
    fn summary_values_follow_their_card_format() {
        assert_eq!(
            format_summary_value(&json!(1234.5), SummaryFormat::Currency),
            "$1,234.50"
        );
        assert_eq!(format_summary_value(&json!(14), SummaryFormat::Number), "14");
        assert_eq!(
            format_summary_value(&json!(3.6667), SummaryFormat::Number),
            "3.7"
        );
        assert_eq!(
            format_summary_value(&json!(87.25), SummaryFormat::Percent),
            "87.3%"
        );
        assert_eq!(
            format_summary_value(&json!("Platform"), SummaryFormat::Text),
            "Platform"
        );
    }

    #[test]
    fn superseded_responses_are_discarded() {
        // Two overlapping refreshes: the first-issued response resolves
        // after the second. The stale one must not render.
        let seq = RefreshSequencer::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(seq.try_commit(second));
        assert!(!seq.try_commit(first));
        // A response can only commit once
        assert!(!seq.try_commit(second));
    }

    #[test]
    fn single_refresh_commits_normally() {
        let seq = RefreshSequencer::new();
        let only = seq.begin();
        assert!(seq.try_commit(only));
        let next = seq.begin();
        assert!(seq.try_commit(next));
    }
}
