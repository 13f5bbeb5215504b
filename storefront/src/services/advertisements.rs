// storefront/src/services/advertisements.rs
use crate::api::ApiClient;
use crate::errors::Result as AppResult;
use crate::models::{Advertisement, AdvertisementInput};
use tracing::{info, instrument};

#[instrument(skip(api))]
pub async fn list_active(api: &ApiClient) -> AppResult<Vec<Advertisement>> {
  api.get("advertisements/", &[("active", "true".to_string())]).await
}

#[instrument(skip(api))]
pub async fn get(api: &ApiClient, ad_id: i64) -> AppResult<Option<Advertisement>> {
  api.get_optional(&format!("advertisements/{}/", ad_id), &[]).await
}

// --- Admin ---

#[instrument(skip(api, input), fields(title = %input.title))]
pub async fn create(api: &ApiClient, input: &AdvertisementInput) -> AppResult<Advertisement> {
  let created: Advertisement = api.post("advertisements/", input).await?;
  info!(ad_id = created.id, "Advertisement created.");
  Ok(created)
}

#[instrument(skip(api, input))]
pub async fn update(api: &ApiClient, ad_id: i64, input: &AdvertisementInput) -> AppResult<Advertisement> {
  api.put(&format!("advertisements/{}/", ad_id), input).await
}

#[instrument(skip(api))]
pub async fn delete(api: &ApiClient, ad_id: i64) -> AppResult<()> {
  api.delete(&format!("advertisements/{}/", ad_id)).await?;
  info!("Advertisement deleted.");
  Ok(())
}
