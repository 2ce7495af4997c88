//! Filter State
//!
//! The current values of a report's filter controls, serialized to query
//! parameters. Read fresh on every refresh; empty values are omitted.

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Unreserved characters stay literal, everything else is escaped
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Named filter values bound for the query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pairs: Vec<(String, String)>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter; empty values are dropped, matching the observed
    /// "absent keys are omitted from the request" behavior
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.pairs.push((key.to_string(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY),
                    utf8_percent_encode(v, QUERY)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A date-range control value: two ISO dates joined by " - "
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse the picker's `YYYY-MM-DD - YYYY-MM-DD` string
    pub fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err("date range is empty".to_string());
        }
        let (start, end) = raw
            .split_once(" - ")
            .ok_or_else(|| format!("'{raw}' is not a date range"))?;
        let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")
            .map_err(|_| format!("'{}' is not a valid date", start.trim()))?;
        let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")
            .map_err(|_| format!("'{}' is not a valid date", end.trim()))?;
        if end < start {
            return Err("end date cannot be earlier than start date".to_string());
        }
        Ok(Self { start, end })
    }

    /// Back to the wire form the server expects
    pub fn to_param(self) -> String {
        format!(
            "{} - {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_omitted() {
        let mut filters = FilterSet::new();
        filters.push("team_id", "7");
        filters.push("project_id", "");
        filters.push("category", "   ");
        assert_eq!(filters.to_query_string(), "team_id=7");
        assert_eq!(filters.get("project_id"), None);
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut filters = FilterSet::new();
        filters.push("date_range", "2024-01-01 - 2024-01-31");
        assert_eq!(
            filters.to_query_string(),
            "date_range=2024-01-01%20-%202024-01-31"
        );
    }

    #[test]
    fn date_range_round_trips() {
        let range = DateRange::parse("2024-01-01 - 2024-01-31").unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(range.to_param(), "2024-01-01 - 2024-01-31");
    }

    #[test]
    fn date_range_rejects_garbage_and_reversed_order() {
        assert!(DateRange::parse("").is_err());
        assert!(DateRange::parse("2024-01-01").is_err());
        assert!(DateRange::parse("yesterday - today").is_err());
        assert!(DateRange::parse("2024-02-01 - 2024-01-01").is_err());
    }
}
