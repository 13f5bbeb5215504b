// storefront/src/services/search.rs
use crate::api::ApiClient;
use crate::errors::{AppError, Result as AppResult};
use crate::models::Book;
use serde::Deserialize;
use tracing::instrument;

#[derive(Debug, Deserialize)]
struct SearchResponse {
  #[serde(default)]
  results: Vec<Book>,
}

#[instrument(skip(api))]
pub async fn search(api: &ApiClient, query: &str, limit: u32) -> AppResult<Vec<Book>> {
  let query = query.trim();
  if query.is_empty() {
    return Err(AppError::Validation("search query is empty".to_string()));
  }
  let response: SearchResponse = api
    .get("search/", &[("q", query.to_string()), ("limit", limit.to_string())])
    .await?;
  Ok(response.results)
}
