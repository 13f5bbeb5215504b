// storefront/src/services/books.rs
use crate::api::ApiClient;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{Book, Page};
use tracing::instrument;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// `None` when the backend has no book with this id.
#[instrument(skip(api))]
pub async fn get_book(api: &ApiClient, book_id: i64) -> AppResult<Option<Book>> {
  api.get_optional(&format!("books/{}/", book_id), &[]).await
}

#[instrument(skip(api))]
pub async fn list_books(api: &ApiClient, page: u32, page_size: u32) -> AppResult<Page<Book>> {
  if page == 0 || page_size == 0 {
    return Err(AppError::Validation("page and page size start at 1".to_string()));
  }
  api
    .get(
      "books/",
      &[("page", page.to_string()), ("page_size", page_size.to_string())],
    )
    .await
}
