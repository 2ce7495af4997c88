//! Client-side Form Validation
//!
//! Advisory checks run before a save request. The server is the
//! authority and may still reject with its own validation errors.

use chrono::NaiveDate;

use crate::api::ApiError;
use crate::models::{PortfolioPayload, TeamPayload, WorklogPayload};

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

/// A team must have a leader if it has members
pub fn validate_team(team: &TeamPayload) -> Result<(), ApiError> {
    if team.name.trim().is_empty() {
        return Err(invalid("Team name is required"));
    }
    if team.leader_id.is_none() && !team.member_ids.is_empty() {
        return Err(invalid("Team must have a leader if it has members"));
    }
    Ok(())
}

/// A portfolio must have a manager if it contains projects
pub fn validate_portfolio(portfolio: &PortfolioPayload) -> Result<(), ApiError> {
    if portfolio.name.trim().is_empty() {
        return Err(invalid("Portfolio name is required"));
    }
    if portfolio.manager_id.is_none() && !portfolio.project_ids.is_empty() {
        return Err(invalid("Portfolio must have a manager if it contains projects"));
    }
    Ok(())
}

/// End date cannot be earlier than start date
pub fn validate_project_dates(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), ApiError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(invalid("End date cannot be earlier than start date"));
        }
    }
    Ok(())
}

/// Hours must be between 0 and 24
pub fn validate_worklog(worklog: &WorklogPayload) -> Result<(), ApiError> {
    if worklog.user_id.is_none() || worklog.project_id.is_none() || worklog.date.is_none() {
        return Err(invalid("User, project and date are required"));
    }
    if worklog.hours <= 0.0 || worklog.hours > 24.0 {
        return Err(invalid("Hours must be between 0 and 24"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_without_leader_may_not_have_members() {
        let team = TeamPayload {
            name: "Platform".into(),
            member_ids: vec![1, 2],
            ..Default::default()
        };
        assert!(validate_team(&team).is_err());

        let team = TeamPayload {
            name: "Platform".into(),
            leader_id: Some(1),
            member_ids: vec![1, 2],
            ..Default::default()
        };
        assert!(validate_team(&team).is_ok());
    }

    #[test]
    fn portfolio_without_manager_may_not_hold_projects() {
        let portfolio = PortfolioPayload {
            name: "Q3".into(),
            project_ids: vec![4],
            ..Default::default()
        };
        assert!(validate_portfolio(&portfolio).is_err());
    }

    #[test]
    fn project_dates_must_be_ordered() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1);
        let end = NaiveDate::from_ymd_opt(2024, 2, 1);
        assert!(validate_project_dates(start, end).is_err());
        assert!(validate_project_dates(end, start).is_ok());
        assert!(validate_project_dates(start, None).is_ok());
    }

    #[test]
    fn worklog_hours_are_bounded() {
        let mut worklog = WorklogPayload {
            user_id: Some(1),
            project_id: Some(2),
            date: NaiveDate::from_ymd_opt(2024, 5, 6),
            hours: 8.0,
            description: String::new(),
        };
        assert!(validate_worklog(&worklog).is_ok());
        worklog.hours = 0.0;
        assert!(validate_worklog(&worklog).is_err());
        worklog.hours = 24.5;
        assert!(validate_worklog(&worklog).is_err());
        worklog.hours = 24.0;
        assert!(validate_worklog(&worklog).is_ok());
    }
}
