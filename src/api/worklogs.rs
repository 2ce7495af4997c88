//! Worklog endpoints.

use super::http::{self, ApiError};
use crate::models::{SaveResponse, Worklog, WorklogPayload};

const RESOURCE: &str = "worklogs";

pub async fn list_worklogs() -> Result<Vec<Worklog>, ApiError> {
    http::fetch_json(http::get_plan(http::collection_url(RESOURCE))).await
}

pub async fn get_worklog(id: u32) -> Result<Worklog, ApiError> {
    http::fetch_json(http::get_plan(http::item_url(RESOURCE, id))).await
}

pub async fn save_worklog(
    id: Option<u32>,
    payload: &WorklogPayload,
) -> Result<SaveResponse, ApiError> {
    http::fetch_json(http::save_plan(RESOURCE, id, payload, http::csrf_token())?).await
}

pub async fn delete_worklog(id: u32) -> Result<(), ApiError> {
    http::send(http::delete_plan(RESOURCE, id, http::csrf_token())?).await
}
