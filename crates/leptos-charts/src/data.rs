//! Chart data model and SVG geometry helpers.

/// One named series of values, parallel to the chart's labels
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
    /// CSS color, e.g. "rgb(255, 99, 132)"
    pub color: String,
}

/// Labels plus one or more series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Per-label colors for sliced charts; empty falls back to the palette
    pub slice_colors: Vec<String>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, series: Vec<ChartSeries>) -> Self {
        Self {
            labels,
            series,
            slice_colors: Vec::new(),
        }
    }

    pub fn with_slice_colors(mut self, colors: Vec<String>) -> Self {
        self.slice_colors = colors;
        self
    }

    /// Color for slice `i`: server-supplied when present, palette otherwise
    pub fn slice_color(&self, i: usize) -> String {
        self.slice_colors
            .get(i)
            .cloned()
            .unwrap_or_else(|| crate::palette::color_at(i).to_string())
    }

    /// True when there is nothing to draw (renders the placeholder)
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.values.is_empty())
    }
}

/// Upper bound for the value axis. Axes begin at zero; a chart with no
/// positive values still gets a non-degenerate scale.
pub(crate) fn value_ceiling(series: &[ChartSeries]) -> f64 {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(f64::MIN, f64::max);
    if max <= 0.0 || !max.is_finite() {
        1.0
    } else {
        max * 1.05
    }
}

/// Map a value onto the vertical pixel range [top, bottom]
pub(crate) fn map_y(value: f64, ceiling: f64, top: f64, bottom: f64) -> f64 {
    let clamped = value.max(0.0).min(ceiling);
    bottom - (clamped / ceiling) * (bottom - top)
}

/// Point on a circle; angle 0.0 is 12 o'clock, fractions go clockwise
pub(crate) fn polar(cx: f64, cy: f64, r: f64, frac: f64) -> (f64, f64) {
    let angle = frac * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for one doughnut segment covering [start, end] as fractions of
/// the full turn. `inner` of 0.0 degenerates to a pie slice.
pub(crate) fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let (ox1, oy1) = polar(cx, cy, outer, start);
    let (ox2, oy2) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, start);
    let (ix2, iy2) = polar(cx, cy, inner, end);
    let large = if end - start > 0.5 { 1 } else { 0 };
    if inner > 0.0 {
        format!(
            "M {ox1:.2} {oy1:.2} A {outer:.2} {outer:.2} 0 {large} 1 {ox2:.2} {oy2:.2} \
             L {ix2:.2} {iy2:.2} A {inner:.2} {inner:.2} 0 {large} 0 {ix1:.2} {iy1:.2} Z"
        )
    } else {
        format!(
            "M {cx:.2} {cy:.2} L {ox1:.2} {oy1:.2} \
             A {outer:.2} {outer:.2} 0 {large} 1 {ox2:.2} {oy2:.2} Z"
        )
    }
}

/// Points attribute for a radar polygon: one vertex per value, scaled
/// against `max`, spokes clockwise from 12 o'clock
pub(crate) fn polygon_points(cx: f64, cy: f64, r: f64, values: &[f64], max: f64) -> String {
    let n = values.len();
    if n == 0 || max <= 0.0 {
        return String::new();
    }
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let scaled = r * (v.max(0.0).min(max) / max);
            let (x, y) = polar(cx, cy, scaled, i as f64 / n as f64);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> ChartSeries {
        ChartSeries {
            name: "s".into(),
            values: values.to_vec(),
            color: "rgb(0, 0, 0)".into(),
        }
    }

    #[test]
    fn empty_labels_mean_empty_chart() {
        let data = ChartData::new(vec![], vec![series(&[1.0])]);
        assert!(data.is_empty());
        let data = ChartData::new(vec!["a".into()], vec![series(&[])]);
        assert!(data.is_empty());
        let data = ChartData::new(vec!["a".into()], vec![series(&[1.0])]);
        assert!(!data.is_empty());
    }

    #[test]
    fn ceiling_pads_the_max_and_never_degenerates() {
        let c = value_ceiling(&[series(&[4.0, 10.0, 2.0])]);
        assert!((c - 10.5).abs() < 1e-9);
        assert_eq!(value_ceiling(&[series(&[0.0, 0.0])]), 1.0);
        assert_eq!(value_ceiling(&[]), 1.0);
    }

    #[test]
    fn map_y_is_linear_and_clamped() {
        // bottom of the range at 0, top at the ceiling
        assert_eq!(map_y(0.0, 10.0, 40.0, 260.0), 260.0);
        assert_eq!(map_y(10.0, 10.0, 40.0, 260.0), 40.0);
        assert_eq!(map_y(5.0, 10.0, 40.0, 260.0), 150.0);
        // values past the ceiling stay on the chart
        assert_eq!(map_y(25.0, 10.0, 40.0, 260.0), 40.0);
    }

    #[test]
    fn polar_starts_at_twelve_oclock() {
        let (x, y) = polar(100.0, 100.0, 50.0, 0.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
        // quarter turn lands at 3 o'clock
        let (x, y) = polar(100.0, 100.0, 50.0, 0.25);
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn arc_path_uses_large_arc_flag_past_half_turn() {
        let small = arc_path(100.0, 100.0, 50.0, 25.0, 0.0, 0.25);
        assert!(small.contains(" 0 0 1 "));
        let large = arc_path(100.0, 100.0, 50.0, 25.0, 0.0, 0.75);
        assert!(large.contains(" 0 1 1 "));
    }

    #[test]
    fn slice_colors_prefer_server_values_then_cycle_the_palette() {
        let data = ChartData::new(vec!["a".into(), "b".into()], vec![series(&[1.0, 2.0])])
            .with_slice_colors(vec!["#123456".into()]);
        assert_eq!(data.slice_color(0), "#123456");
        assert_eq!(data.slice_color(1), crate::palette::color_at(1));
    }

    #[test]
    fn radar_polygon_has_one_vertex_per_value() {
        let pts = polygon_points(100.0, 100.0, 50.0, &[1.0, 2.0, 3.0, 4.0], 4.0);
        assert_eq!(pts.split(' ').count(), 4);
        assert!(polygon_points(100.0, 100.0, 50.0, &[], 4.0).is_empty());
    }
}
