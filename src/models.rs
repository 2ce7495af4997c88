//! View Models
//!
//! Data structures matching the server's JSON contract. Entities are
//! ephemeral copies: fetched to populate a form, discarded when the modal
//! closes. The server stays the source of truth.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role entity (matches server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Shortened role reference carried inside a user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub leader_id: Option<u32>,
    #[serde(default)]
    pub member_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub team_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manager_id: Option<u32>,
    #[serde(default)]
    pub project_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worklog {
    pub id: u32,
    pub user_id: u32,
    pub project_id: u32,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub description: String,
}

// ========================
// Form Payloads
// ========================
//
// The JSON bodies for create/update. Each doubles as the modal's form
// state, so `From<&Entity>` is exactly the "open(id) populates the form"
// step of the CRUD cycle.

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RolePayload {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl From<&Role> for RolePayload {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
            permissions: role.permissions.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub is_active: bool,
    pub roles: Vec<u32>,
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            is_active: user.is_active,
            roles: user.roles.iter().map(|r| r.id).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamPayload {
    pub name: String,
    pub description: String,
    pub leader_id: Option<u32>,
    pub member_ids: Vec<u32>,
}

impl From<&Team> for TeamPayload {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            description: team.description.clone(),
            leader_id: team.leader_id,
            member_ids: team.member_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub team_id: Option<u32>,
}

impl From<&Project> for ProjectPayload {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            start_date: project.start_date,
            end_date: project.end_date,
            status: project.status.clone(),
            team_id: project.team_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioPayload {
    pub name: String,
    pub description: String,
    pub manager_id: Option<u32>,
    pub project_ids: Vec<u32>,
}

impl From<&Portfolio> for PortfolioPayload {
    fn from(portfolio: &Portfolio) -> Self {
        Self {
            name: portfolio.name.clone(),
            description: portfolio.description.clone(),
            manager_id: portfolio.manager_id,
            project_ids: portfolio.project_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorklogPayload {
    pub user_id: Option<u32>,
    pub project_id: Option<u32>,
    pub date: Option<NaiveDate>,
    pub hours: f64,
    pub description: String,
}

impl Default for WorklogPayload {
    fn default() -> Self {
        Self {
            user_id: None,
            project_id: None,
            date: None,
            hours: 0.0,
            description: String::new(),
        }
    }
}

impl From<&Worklog> for WorklogPayload {
    fn from(worklog: &Worklog) -> Self {
        Self {
            user_id: Some(worklog.user_id),
            project_id: Some(worklog.project_id),
            date: Some(worklog.date),
            hours: worklog.hours,
            description: worklog.description.clone(),
        }
    }
}

// ========================
// Server Responses
// ========================

/// Body of a create/update response. Field-level validation errors ride
/// on non-2xx responses and surface as `ApiError::Http`, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Id of the entity the server created or updated
    #[serde(default)]
    pub id: Option<u32>,
}

/// The report endpoints' `{summary, <named chart payloads>, details|data}`
/// envelope. Chart payloads stay raw JSON here; the report registry knows
/// which keys to decode and how.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub summary: HashMap<String, Value>,
    #[serde(default)]
    pub details: Vec<HashMap<String, Value>>,
    #[serde(flatten)]
    pub charts: HashMap<String, Value>,
}

impl ReportEnvelope {
    /// Table rows. Older endpoints ship them under `data` instead of
    /// `details`; the alias lands in the flattened map and is recovered
    /// here.
    pub fn rows(&self) -> Vec<HashMap<String, Value>> {
        if !self.details.is_empty() {
            return self.details.clone();
        }
        self.charts
            .get("data")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }

    /// An error-shaped body: `{error: ...}` or `{status: "error", message}`
    pub fn error_message(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.status.as_deref() == Some("error") {
            return Some(
                self.message
                    .clone()
                    .unwrap_or_else(|| "The server reported an error".to_string()),
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_form_state_reproduces_fetched_fields() {
        let user = User {
            id: 9,
            username: "jkowalski".into(),
            email: "jk@example.com".into(),
            display_name: Some("Jan Kowalski".into()),
            is_active: true,
            roles: vec![
                RoleRef { id: 2, name: "manager".into() },
                RoleRef { id: 5, name: "reporter".into() },
            ],
        };
        let form = UserPayload::from(&user);
        assert_eq!(form.username, "jkowalski");
        assert_eq!(form.email, "jk@example.com");
        assert_eq!(form.display_name.as_deref(), Some("Jan Kowalski"));
        assert!(form.is_active);
        assert_eq!(form.roles, vec![2, 5]);
    }

    #[test]
    fn team_form_state_keeps_relationship_ids() {
        let team = Team {
            id: 3,
            name: "Platform".into(),
            description: String::new(),
            leader_id: Some(7),
            member_ids: vec![7, 11, 12],
        };
        let form = TeamPayload::from(&team);
        assert_eq!(form.leader_id, Some(7));
        assert_eq!(form.member_ids, vec![7, 11, 12]);
    }

    #[test]
    fn envelope_collects_named_chart_payloads() {
        let body = r#"{
            "summary": {"total_cost": 1200.5, "profit_margin": 21.0},
            "trend": {"labels": ["Jan", "Feb"], "costs": [100, 200]},
            "distribution": {"labels": ["Dev"], "values": [300]},
            "details": [{"name": "Platform", "total_cost": 1200.5}]
        }"#;
        let envelope: ReportEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.error_message().is_none());
        assert_eq!(envelope.summary.len(), 2);
        assert_eq!(envelope.details.len(), 1);
        assert!(envelope.charts.contains_key("trend"));
        assert!(envelope.charts.contains_key("distribution"));
    }

    #[test]
    fn envelope_accepts_the_data_alias_for_details() {
        let body = r#"{"summary": {}, "data": [{"name": "a"}, {"name": "b"}]}"#;
        let envelope: ReportEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.details.is_empty());
        assert_eq!(envelope.rows().len(), 2);
    }

    #[test]
    fn error_shaped_bodies_are_detected() {
        let body = r#"{"status": "error", "message": "bad filters"}"#;
        let envelope: ReportEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error_message().as_deref(), Some("bad filters"));

        let body = r#"{"error": "boom"}"#;
        let envelope: ReportEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error_message().as_deref(), Some("boom"));
    }
}
