// storefront/src/services/members.rs
use crate::api::ApiClient;
use crate::errors::Result as AppResult;
use crate::models::{Member, MemberUpdate, Page};
use tracing::instrument;

#[instrument(skip(api))]
pub async fn get_member(api: &ApiClient, member_id: i64) -> AppResult<Option<Member>> {
  api.get_optional(&format!("members/{}/", member_id), &[]).await
}

// --- Admin ---

#[instrument(skip(api))]
pub async fn list_members(api: &ApiClient, page: u32) -> AppResult<Page<Member>> {
  api.get("members/", &[("page", page.max(1).to_string())]).await
}

#[instrument(skip(api, update))]
pub async fn update_member(api: &ApiClient, member_id: i64, update: &MemberUpdate) -> AppResult<Member> {
  api.put(&format!("members/{}/", member_id), update).await
}
