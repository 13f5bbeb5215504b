// storefront/src/services/likes.rs
use crate::api::ApiClient;
use crate::errors::Result as AppResult;
use crate::models::Like;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewLike {
  member_id: i64,
  book_id: i64,
}

fn like_path(member_id: i64, book_id: i64) -> String {
  format!("members/{}/likes/{}/", member_id, book_id)
}

#[instrument(skip(api))]
pub async fn list_likes(api: &ApiClient, member_id: i64) -> AppResult<Vec<Like>> {
  api.get(&format!("members/{}/likes/", member_id), &[]).await
}

#[instrument(skip(api))]
pub async fn like(api: &ApiClient, member_id: i64, book_id: i64) -> AppResult<Like> {
  api
    .post(&format!("members/{}/likes/", member_id), &NewLike { member_id, book_id })
    .await
}

#[instrument(skip(api))]
pub async fn unlike(api: &ApiClient, member_id: i64, book_id: i64) -> AppResult<()> {
  api.delete(&like_path(member_id, book_id)).await
}

#[instrument(skip(api))]
pub async fn is_liked(api: &ApiClient, member_id: i64, book_id: i64) -> AppResult<bool> {
  let found: Option<Like> = api.get_optional(&like_path(member_id, book_id), &[]).await?;
  Ok(found.is_some())
}
