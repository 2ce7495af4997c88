//! Project endpoints.

use super::http::{self, ApiError};
use crate::models::{Project, ProjectPayload, SaveResponse};

const RESOURCE: &str = "projects";

pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    http::fetch_json(http::get_plan(http::collection_url(RESOURCE))).await
}

pub async fn get_project(id: u32) -> Result<Project, ApiError> {
    http::fetch_json(http::get_plan(http::item_url(RESOURCE, id))).await
}

pub async fn save_project(
    id: Option<u32>,
    payload: &ProjectPayload,
) -> Result<SaveResponse, ApiError> {
    http::fetch_json(http::save_plan(RESOURCE, id, payload, http::csrf_token())?).await
}

pub async fn delete_project(id: u32) -> Result<(), ApiError> {
    http::send(http::delete_plan(RESOURCE, id, http::csrf_token())?).await
}
