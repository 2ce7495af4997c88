//! Team endpoints.

use super::http::{self, ApiError};
use crate::models::{SaveResponse, Team, TeamPayload};

const RESOURCE: &str = "teams";

pub async fn list_teams() -> Result<Vec<Team>, ApiError> {
    http::fetch_json(http::get_plan(http::collection_url(RESOURCE))).await
}

pub async fn get_team(id: u32) -> Result<Team, ApiError> {
    http::fetch_json(http::get_plan(http::item_url(RESOURCE, id))).await
}

pub async fn save_team(id: Option<u32>, payload: &TeamPayload) -> Result<SaveResponse, ApiError> {
    http::fetch_json(http::save_plan(RESOURCE, id, payload, http::csrf_token())?).await
}

pub async fn delete_team(id: u32) -> Result<(), ApiError> {
    http::send(http::delete_plan(RESOURCE, id, http::csrf_token())?).await
}
