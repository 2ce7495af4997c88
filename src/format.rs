//! Display Formatting
//!
//! Currency, hours, percentages, progress bars and status badges used by
//! the table and summary renderers. Locale is fixed to en-US/USD.

use serde_json::Value;

/// "$1,234.50" with a leading minus for negatives
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!(
        "{}${grouped}.{fraction:02}",
        if negative { "-" } else { "" }
    )
}

pub fn format_hours(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Progress bar width for a utilization ratio, clamped to [0, 100]
pub fn progress_width(ratio: f64) -> f64 {
    (ratio * 100.0).clamp(0.0, 100.0)
}

/// Progress bar label: the unclamped percentage
pub fn progress_label(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Bootstrap contextual class for a utilization percentage
pub fn utilization_class(percent: f64) -> &'static str {
    if percent < 80.0 {
        "success"
    } else if percent < 100.0 {
        "warning"
    } else {
        "danger"
    }
}

const STATUS_BADGES: &[(&str, &str)] = &[
    ("active", "badge bg-success"),
    ("completed", "badge bg-primary"),
    ("on_hold", "badge bg-warning"),
    ("pending", "badge bg-warning"),
    ("inactive", "badge bg-secondary"),
    ("cancelled", "badge bg-danger"),
    ("overdue", "badge bg-danger"),
];

/// CSS class for a status label; unknown labels get the neutral badge
pub fn badge_class(status: &str) -> &'static str {
    let status = status.to_ascii_lowercase();
    STATUS_BADGES
        .iter()
        .find(|(label, _)| *label == status)
        .map(|(_, class)| *class)
        .unwrap_or("badge bg-secondary")
}

/// Human label for a status value: "on_hold" -> "On Hold"
pub fn status_label(status: &str) -> String {
    status
        .split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A raw JSON cell value as display text (numbers, strings, bools)
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
        Value::Null => "—".to_string(),
        other => other.to_string(),
    }
}

/// A raw JSON cell value as f64, tolerating numeric strings
pub fn value_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(987654.321), "$987,654.32");
        assert_eq!(format_currency(-42.0), "-$42.00");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn progress_width_is_clamped_but_label_is_not() {
        assert_eq!(progress_width(1.25), 100.0);
        assert_eq!(progress_label(1.25), "125%");
        assert_eq!(progress_width(0.62), 62.0);
        assert_eq!(progress_label(0.62), "62%");
        assert_eq!(progress_width(-0.5), 0.0);
    }

    #[test]
    fn utilization_class_thresholds() {
        assert_eq!(utilization_class(42.0), "success");
        assert_eq!(utilization_class(80.0), "warning");
        assert_eq!(utilization_class(99.9), "warning");
        assert_eq!(utilization_class(100.0), "danger");
    }

    #[test]
    fn badge_lookup_falls_back_to_neutral() {
        assert_eq!(badge_class("Active"), "badge bg-success");
        assert_eq!(badge_class("mystery"), "badge bg-secondary");
        assert_eq!(status_label("on_hold"), "On Hold");
    }

    #[test]
    fn cell_values_tolerate_mixed_types() {
        assert_eq!(value_text(&json!("Platform")), "Platform");
        assert_eq!(value_text(&json!(12.5)), "12.5");
        assert_eq!(value_text(&json!(null)), "—");
        assert_eq!(value_number(&json!(3.5)), 3.5);
        assert_eq!(value_number(&json!("7.25")), 7.25);
        assert_eq!(value_number(&json!(null)), 0.0);
    }
}
