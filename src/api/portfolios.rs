//! Portfolio endpoints.

use super::http::{self, ApiError};
use crate::models::{Portfolio, PortfolioPayload, SaveResponse};

const RESOURCE: &str = "portfolios";

pub async fn list_portfolios() -> Result<Vec<Portfolio>, ApiError> {
    http::fetch_json(http::get_plan(http::collection_url(RESOURCE))).await
}

pub async fn get_portfolio(id: u32) -> Result<Portfolio, ApiError> {
    http::fetch_json(http::get_plan(http::item_url(RESOURCE, id))).await
}

pub async fn save_portfolio(
    id: Option<u32>,
    payload: &PortfolioPayload,
) -> Result<SaveResponse, ApiError> {
    http::fetch_json(http::save_plan(RESOURCE, id, payload, http::csrf_token())?).await
}

pub async fn delete_portfolio(id: u32) -> Result<(), ApiError> {
    http::send(http::delete_plan(RESOURCE, id, http::csrf_token())?).await
}
