// storefront/src/services/reviews.rs
use crate::api::ApiClient;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{NewReview, Review};
use tracing::instrument;

#[instrument(skip(api))]
pub async fn list_for_book(api: &ApiClient, book_id: i64) -> AppResult<Vec<Review>> {
  api.get(&format!("books/{}/reviews/", book_id), &[]).await
}

#[instrument(skip(api, review), fields(member_id = review.member_id, rating = review.rating))]
pub async fn create_review(api: &ApiClient, book_id: i64, review: &NewReview) -> AppResult<Review> {
  if !(1..=5).contains(&review.rating) {
    return Err(AppError::Validation(format!("rating must be 1 to 5, got {}", review.rating)));
  }
  api.post(&format!("books/{}/reviews/", book_id), review).await
}

#[instrument(skip(api))]
pub async fn delete_review(api: &ApiClient, review_id: i64) -> AppResult<()> {
  api.delete(&format!("reviews/{}/", review_id)).await
}
