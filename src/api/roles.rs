//! Role endpoints.

use super::http::{self, ApiError};
use crate::models::{Role, RolePayload, SaveResponse};

const RESOURCE: &str = "roles";

pub async fn list_roles() -> Result<Vec<Role>, ApiError> {
    http::fetch_json(http::get_plan(http::collection_url(RESOURCE))).await
}

pub async fn get_role(id: u32) -> Result<Role, ApiError> {
    http::fetch_json(http::get_plan(http::item_url(RESOURCE, id))).await
}

/// POST without an id, PUT with one
pub async fn save_role(id: Option<u32>, payload: &RolePayload) -> Result<SaveResponse, ApiError> {
    http::fetch_json(http::save_plan(RESOURCE, id, payload, http::csrf_token())?).await
}

pub async fn delete_role(id: u32) -> Result<(), ApiError> {
    http::send(http::delete_plan(RESOURCE, id, http::csrf_token())?).await
}
