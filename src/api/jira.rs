//! JIRA integration triggers.

use serde::Deserialize;

use super::http::{self, ApiError, Method};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

pub async fn sync_jira() -> Result<JiraStatus, ApiError> {
    post_action("/admin/jira/sync").await
}

pub async fn test_jira_connection() -> Result<JiraStatus, ApiError> {
    post_action("/admin/jira/test-connection").await
}

async fn post_action(url: &str) -> Result<JiraStatus, ApiError> {
    let plan = http::mutating_plan(Method::Post, url.to_string(), None, http::csrf_token())?;
    let status: JiraStatus = http::fetch_json(plan).await?;
    if status.status.as_deref() == Some("error") {
        return Err(ApiError::Application(
            status
                .message
                .clone()
                .unwrap_or_else(|| "JIRA operation failed".to_string()),
        ));
    }
    Ok(status)
}
