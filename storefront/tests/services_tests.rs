// tests/services_tests.rs
mod common;

use booknest::checkout::build_order_payload;
use common::*;
use reqwest::Method;
use serde_json::json;
use serial_test::serial;
use storefront::models::{AdvertisementInput, MemberUpdate, NewReview};
use storefront::services::{
  advertisements, cart, check_in, likes, members, payment_history, payments, reviews, search,
};
use storefront::AppError;

#[tokio::test]
#[serial]
async fn test_cart_line_items_feed_the_order_payload() {
  setup_tracing();
  let (api, transport) = client();
  transport.respond(Method::GET, "members/7/cart/", 200, wire_cart(7));

  let cart = cart::get_cart(&api, 7).await.unwrap();
  let items = cart.line_items();

  assert_eq!(items.len(), 3);
  assert!(items[2].product.is_none(), "entry without a book has no product");
  let payload = build_order_payload(&items, None).unwrap();
  assert_eq!(payload.total(), "24.48");
  assert_eq!(payload.item_count(), 2);
}

#[tokio::test]
#[serial]
async fn test_cart_quantity_is_validated_before_sending() {
  setup_tracing();
  let (api, transport) = client();

  let err = cart::add_item(&api, 7, 1, 0).await.unwrap_err();

  assert!(matches!(err, AppError::Validation(_)));
  assert!(transport.requests().is_empty());
}

#[tokio::test]
#[serial]
async fn test_like_status_follows_lookup() {
  setup_tracing();
  let (api, transport) = client();
  transport.respond(
    Method::GET,
    "members/7/likes/1/",
    200,
    json!({ "member_id": 7, "book_id": 1, "created_at": "2024-02-02T08:00:00Z" }),
  );

  assert!(likes::is_liked(&api, 7, 1).await.unwrap());
  assert!(!likes::is_liked(&api, 7, 2).await.unwrap());
}

#[tokio::test]
#[serial]
async fn test_like_and_unlike() {
  setup_tracing();
  let (api, transport) = client();
  transport.respond(Method::POST, "members/7/likes/", 201, json!({ "member_id": 7, "book_id": 4 }));
  transport.respond_raw(Method::DELETE, "members/7/likes/4/", 204, "");

  let like = likes::like(&api, 7, 4).await.unwrap();
  assert_eq!(like.book_id, 4);
  likes::unlike(&api, 7, 4).await.unwrap();

  let sent = transport.requests_to(Method::POST, "members/7/likes/");
  assert_eq!(sent[0].body, Some(json!({ "member_id": 7, "book_id": 4 })));
}

#[tokio::test]
#[serial]
async fn test_check_in_status_and_claim() {
  setup_tracing();
  let (api, transport) = client();
  assert_eq!(check_in::get_status(&api, 7).await.unwrap(), None);

  transport.respond(
    Method::POST,
    "members/7/check-in/",
    200,
    json!({ "member_id": 7, "checked_in_today": true, "streak_days": 3, "reward_points": 30 }),
  );
  let status = check_in::check_in(&api, 7).await.unwrap();
  assert!(status.checked_in_today);
  assert_eq!(status.streak_days, 3);
}

#[tokio::test]
#[serial]
async fn test_search_rejects_blank_query_without_a_request() {
  setup_tracing();
  let (api, transport) = client();

  assert!(matches!(search::search(&api, "  ", 10).await, Err(AppError::Validation(_))));
  assert!(transport.requests().is_empty());

  transport.respond(Method::GET, "search/", 200, json!({ "results": [wire_book(5, "7.00")] }));
  let found = search::search(&api, "rust", 10).await.unwrap();
  assert_eq!(found[0].id, 5);
  assert_eq!(transport.requests()[0].url.query(), Some("q=rust&limit=10"));
}

#[tokio::test]
#[serial]
async fn test_reviews_validate_rating() {
  setup_tracing();
  let (api, transport) = client();
  let review = NewReview {
    member_id: 7,
    rating: 6,
    comment: None,
  };

  assert!(matches!(
    reviews::create_review(&api, 1, &review).await,
    Err(AppError::Validation(_))
  ));

  transport.respond(
    Method::POST,
    "books/1/reviews/",
    201,
    json!({ "id": 11, "book_id": 1, "member_id": 7, "rating": 4, "comment": "Great" }),
  );
  let review = NewReview {
    member_id: 7,
    rating: 4,
    comment: Some("Great".to_string()),
  };
  let created = reviews::create_review(&api, 1, &review).await.unwrap();
  assert_eq!(created.id, 11);
  let sent = transport.requests_to(Method::POST, "books/1/reviews/");
  assert_eq!(sent[0].body, Some(json!({ "member_id": 7, "rating": 4, "comment": "Great" })));
}

#[tokio::test]
#[serial]
async fn test_admin_advertisement_and_member_updates() {
  setup_tracing();
  let (api, transport) = client();
  let ad = json!({ "id": 3, "title": "Spring sale", "image_url": "https://img.test/ad.png", "is_active": true });
  transport.respond(Method::POST, "advertisements/", 201, ad.clone());
  transport.respond(
    Method::PUT,
    "members/9/",
    200,
    json!({ "id": 9, "username": "reader", "email": "r@test", "display_name": "Reader", "is_admin": false }),
  );

  let input = AdvertisementInput {
    title: "Spring sale".to_string(),
    image_url: "https://img.test/ad.png".to_string(),
    link_url: None,
    is_active: true,
    starts_at: None,
    ends_at: None,
  };
  let created = advertisements::create(&api, &input).await.unwrap();
  assert_eq!(created.id, 3);
  let sent = transport.requests_to(Method::POST, "advertisements/");
  assert_eq!(
    sent[0].body,
    Some(json!({ "title": "Spring sale", "image_url": "https://img.test/ad.png", "is_active": true }))
  );

  let update = MemberUpdate {
    display_name: Some("Reader".to_string()),
    ..Default::default()
  };
  let member = members::update_member(&api, 9, &update).await.unwrap();
  assert_eq!(member.display_name.as_deref(), Some("Reader"));
  let sent = transport.requests_to(Method::PUT, "members/9/");
  assert_eq!(sent[0].body, Some(json!({ "display_name": "Reader" })));
}

#[tokio::test]
#[serial]
async fn test_payment_history_lookup() {
  setup_tracing();
  let (api, transport) = client();
  transport.respond(
    Method::GET,
    "members/7/payments/",
    200,
    json!([{ "id": 1, "member_id": 7, "order_id": "ORD-1", "amount": "24.48", "currency": "USD", "status": "COMPLETED" }]),
  );

  let history = payment_history::list_for_member(&api, 7).await.unwrap();
  assert_eq!(history[0].order_id, "ORD-1");
  assert_eq!(history[0].amount.to_string(), "24.48");
  assert_eq!(payment_history::get_payment(&api, 404).await.unwrap(), None);
}

#[tokio::test]
#[serial]
async fn test_payment_order_create_and_capture() {
  setup_tracing();
  let (api, transport) = client();
  transport.respond(Method::GET, "members/7/cart/", 200, wire_cart(7));
  transport.respond(Method::POST, "payments/paypal/orders/", 201, json!({ "id": "PAY-1", "status": "CREATED" }));
  transport.respond(
    Method::POST,
    "payments/paypal/orders/PAY-1/capture/",
    200,
    json!({ "order_id": "PAY-1", "status": "COMPLETED", "payer_email": "buyer@test" }),
  );

  let items = cart::get_cart(&api, 7).await.unwrap().line_items();
  let payload = build_order_payload(&items, Some("USD")).unwrap();
  let order_id = payments::create_paypal_order(&api, &payload).await.unwrap();
  assert_eq!(order_id, "PAY-1");

  let sent = transport.requests_to(Method::POST, "payments/paypal/orders/");
  let body = sent[0].body.clone().unwrap();
  assert_eq!(body["intent"], "CAPTURE");
  assert_eq!(body["purchase_units"][0]["amount"]["value"], "24.48");
  assert_eq!(body["purchase_units"][0]["amount"]["breakdown"]["item_total"]["currency_code"], "USD");
  assert_eq!(body["purchase_units"][0]["items"][0]["unit_amount"]["value"], "9.99");

  let details = payments::capture_paypal_order(&api, "PAY-1").await.unwrap();
  assert_eq!(details.status, "COMPLETED");
  assert_eq!(details.payer_email.as_deref(), Some("buyer@test"));
}

#[tokio::test]
#[serial]
async fn test_capture_keeps_order_id_inside_the_orders_path() {
  setup_tracing();
  let (api, transport) = client();

  let err = payments::capture_paypal_order(&api, "../../members/1").await.unwrap_err();
  assert!(err.is_not_found());
  let sent = transport.requests();
  assert_eq!(sent.len(), 1);
  assert_eq!(sent[0].url.path(), "/api/payments/paypal/orders/..%2F..%2Fmembers%2F1/capture/");

  let err = payments::capture_paypal_order(&api, "..").await.unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
  assert_eq!(transport.requests().len(), 1);
}
