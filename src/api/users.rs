//! User endpoints.

use super::http::{self, ApiError};
use crate::models::{SaveResponse, User, UserPayload};

const RESOURCE: &str = "users";

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    http::fetch_json(http::get_plan(http::collection_url(RESOURCE))).await
}

pub async fn get_user(id: u32) -> Result<User, ApiError> {
    http::fetch_json(http::get_plan(http::item_url(RESOURCE, id))).await
}

pub async fn save_user(id: Option<u32>, payload: &UserPayload) -> Result<SaveResponse, ApiError> {
    http::fetch_json(http::save_plan(RESOURCE, id, payload, http::csrf_token())?).await
}

pub async fn delete_user(id: u32) -> Result<(), ApiError> {
    http::send(http::delete_plan(RESOURCE, id, http::csrf_token())?).await
}
