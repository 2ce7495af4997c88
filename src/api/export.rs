//! Export trigger: navigate the browser to the server-driven download.

use crate::filters::FilterSet;
use crate::report::ReportKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

pub const EXPORT_FORMATS: [ExportFormat; 3] =
    [ExportFormat::Csv, ExportFormat::Excel, ExportFormat::Pdf];

impl ExportFormat {
    pub fn as_param(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// The current filters plus the `format` parameter
pub fn export_url(kind: ReportKind, filters: &FilterSet, format: ExportFormat) -> String {
    let mut filters = filters.clone();
    filters.push("format", format.as_param());
    format!("{}?{}", kind.export_url(), filters.to_query_string())
}

/// Navigate to the export URL; the server answers with the artifact
pub fn trigger_export(kind: ReportKind, filters: &FilterSet, format: ExportFormat) {
    let url = export_url(kind, filters, format);
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().assign(&url) {
            leptos::logging::error!("Error starting export: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_carries_filters_and_format() {
        let mut filters = FilterSet::new();
        filters.push("team_id", "7");
        filters.push("date_range", "2024-01-01 - 2024-01-31");
        let url = export_url(ReportKind::Workload, &filters, ExportFormat::Excel);
        assert!(url.starts_with("/admin/reports/workload/export?"));
        assert!(url.contains("team_id=7"));
        assert!(url.contains("format=excel"));
    }

    #[test]
    fn format_params_are_stable() {
        assert_eq!(ExportFormat::Csv.as_param(), "csv");
        assert_eq!(ExportFormat::Excel.as_param(), "excel");
        assert_eq!(ExportFormat::Pdf.as_param(), "pdf");
    }
}
