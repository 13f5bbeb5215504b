// storefront/src/services/check_in.rs
use crate::api::ApiClient;
use crate::errors::Result as AppResult;
use crate::models::CheckInStatus;
use serde_json::json;
use tracing::{info, instrument};

/// `None` for members that never checked in.
#[instrument(skip(api))]
pub async fn get_status(api: &ApiClient, member_id: i64) -> AppResult<Option<CheckInStatus>> {
  api.get_optional(&format!("members/{}/check-in/", member_id), &[]).await
}

/// Records today's check-in. The backend decides the reward.
#[instrument(skip(api))]
pub async fn check_in(api: &ApiClient, member_id: i64) -> AppResult<CheckInStatus> {
  let status: CheckInStatus = api
    .post(&format!("members/{}/check-in/", member_id), &json!({}))
    .await?;
  info!(
    streak_days = status.streak_days,
    reward_points = status.reward_points,
    "Member checked in."
  );
  Ok(status)
}
