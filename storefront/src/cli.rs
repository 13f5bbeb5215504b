// storefront/src/cli.rs

//! Command-line front-end over the resource wrappers. Every command resolves
//! to a JSON value that the binary prints on stdout.

use crate::api::ApiClient;
use crate::errors::{AppError, Result as AppResult};
use crate::services::{
  advertisements, books, cart, check_in, likes, members, payment_history, payments, reviews, search,
};
use crate::state::AppState;
use booknest::checkout::{build_order_payload, LineItem};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, instrument};

#[derive(Debug, Parser)]
#[command(name = "booknest", version, about = "Command-line client for the BookNest bookstore backend")]
pub struct Cli {
  /// Emit logs as JSON lines on stderr.
  #[arg(long, global = true)]
  pub json_logs: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Show a single book.
  Book { id: i64 },
  /// List active advertisements, or show one by id.
  Ads {
    #[arg(long)]
    id: Option<i64>,
  },
  /// Search the catalog.
  Search {
    query: String,
    #[arg(long, default_value_t = 20)]
    limit: u32,
  },
  /// List the reviews of a book.
  Reviews { book_id: i64 },
  /// List the books a member liked.
  Likes { member_id: i64 },
  /// Show a member's check-in status, or check in with `--claim`.
  CheckIn {
    member_id: i64,
    #[arg(long)]
    claim: bool,
  },
  /// Show a member's cart.
  Cart { member_id: i64 },
  /// List a member's past payments.
  History { member_id: i64 },
  /// Show a member profile.
  Member { id: i64 },
  /// Create a payment order from a member's cart or from explicit items.
  Checkout {
    /// Take the line items from this member's cart.
    #[arg(long, conflicts_with = "items")]
    member: Option<i64>,
    /// A line item as `BOOK_ID[:QUANTITY]`. Repeatable.
    #[arg(long = "item", value_parser = parse_item_spec)]
    items: Vec<ItemSpec>,
    /// Print the wire payload instead of creating the order.
    #[arg(long)]
    dry_run: bool,
  },
  /// Capture an approved payment order.
  Capture { order_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
  pub book_id: i64,
  pub quantity: i64,
}

/// Parses `BOOK_ID[:QUANTITY]`; the quantity defaults to 1.
pub fn parse_item_spec(raw: &str) -> Result<ItemSpec, String> {
  let (id, quantity) = match raw.split_once(':') {
    Some((id, quantity)) => (id, quantity),
    None => (raw, "1"),
  };
  let book_id = id
    .trim()
    .parse::<i64>()
    .map_err(|_| format!("invalid book id '{}'", id))?;
  let quantity = quantity
    .trim()
    .parse::<i64>()
    .map_err(|_| format!("invalid quantity '{}'", quantity))?;
  Ok(ItemSpec { book_id, quantity })
}

fn to_json<T: Serialize>(value: &T) -> AppResult<Value> {
  Ok(serde_json::to_value(value)?)
}

fn found<T: Serialize>(value: Option<T>, what: String) -> AppResult<Value> {
  match value {
    Some(value) => to_json(&value),
    None => Err(AppError::NotFound(what)),
  }
}

pub async fn run(command: Command, state: &AppState) -> AppResult<Value> {
  let api = &state.api;
  match command {
    Command::Book { id } => found(books::get_book(api, id).await?, format!("book {}", id)),
    Command::Ads { id: Some(id) } => found(advertisements::get(api, id).await?, format!("advertisement {}", id)),
    Command::Ads { id: None } => to_json(&advertisements::list_active(api).await?),
    Command::Search { query, limit } => to_json(&search::search(api, &query, limit).await?),
    Command::Reviews { book_id } => to_json(&reviews::list_for_book(api, book_id).await?),
    Command::Likes { member_id } => to_json(&likes::list_likes(api, member_id).await?),
    Command::CheckIn { member_id, claim: true } => to_json(&check_in::check_in(api, member_id).await?),
    Command::CheckIn { member_id, claim: false } => match check_in::get_status(api, member_id).await? {
      Some(status) => to_json(&status),
      None => Ok(json!({ "memberId": member_id, "checkedInToday": false })),
    },
    Command::Cart { member_id } => to_json(&cart::get_cart(api, member_id).await?),
    Command::History { member_id } => to_json(&payment_history::list_for_member(api, member_id).await?),
    Command::Member { id } => found(members::get_member(api, id).await?, format!("member {}", id)),
    Command::Checkout { member, items, dry_run } => checkout(state, member, &items, dry_run).await,
    Command::Capture { order_id } => to_json(&payments::capture_paypal_order(api, &order_id).await?),
  }
}

#[instrument(skip(state, items), fields(num_specs = items.len()))]
async fn checkout(state: &AppState, member: Option<i64>, items: &[ItemSpec], dry_run: bool) -> AppResult<Value> {
  // Settings problems surface before any request is made.
  let sdk_options = if dry_run {
    None
  } else {
    Some(state.config.sdk_options()?)
  };

  let line_items = collect_line_items(&state.api, member, items).await?;
  let payload = build_order_payload(&line_items, Some(state.config.currency.as_str()))?;
  if dry_run {
    return Ok(json!({ "payload": payload.to_wire()? }));
  }

  let order_id = payments::create_paypal_order(&state.api, &payload).await?;
  info!(order_id = %order_id, "Checkout order ready for approval.");
  let mut output = json!({
    "orderId": order_id,
    "total": payload.total(),
    "currency": payload.currency(),
  });
  if let Some(options) = sdk_options {
    output["sdkScript"] = Value::String(options.script_url()?.to_string());
  }
  Ok(output)
}

/// Line items from the member's cart, or from the given specs with each book
/// looked up for its current price.
pub async fn collect_line_items(api: &ApiClient, member: Option<i64>, items: &[ItemSpec]) -> AppResult<Vec<LineItem>> {
  if let Some(member_id) = member {
    return Ok(cart::get_cart(api, member_id).await?.line_items());
  }
  if items.is_empty() {
    return Err(AppError::Validation("pass --member or at least one --item".to_string()));
  }
  let mut line_items = Vec::with_capacity(items.len());
  for spec in items {
    let book = books::get_book(api, spec.book_id)
      .await?
      .ok_or_else(|| AppError::NotFound(format!("book {}", spec.book_id)))?;
    line_items.push(LineItem::new(book.product_ref(), spec.quantity));
  }
  Ok(line_items)
}
