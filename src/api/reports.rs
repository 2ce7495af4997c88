//! Report data endpoint.

use super::http::{self, ApiError};
use crate::filters::FilterSet;
use crate::models::ReportEnvelope;
use crate::report::ReportKind;

/// GET the report envelope for the current filters. A 2xx body that is
/// error-shaped still fails, as `Application`.
pub async fn fetch_report(
    kind: ReportKind,
    filters: &FilterSet,
) -> Result<ReportEnvelope, ApiError> {
    let query = filters.to_query_string();
    let url = if query.is_empty() {
        kind.data_url()
    } else {
        format!("{}?{query}", kind.data_url())
    };
    let envelope: ReportEnvelope = http::fetch_json(http::get_plan(url)).await?;
    if let Some(message) = envelope.error_message() {
        return Err(ApiError::Application(message));
    }
    Ok(envelope)
}
