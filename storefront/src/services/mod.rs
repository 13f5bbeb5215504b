// storefront/src/services/mod.rs

//! Thin wrappers over the backend endpoints, one module per resource.
//! Paths are relative to the configured API base URL.

pub mod advertisements;
pub mod books;
pub mod cart;
pub mod check_in;
pub mod likes;
pub mod members;
pub mod payment_history;
pub mod payments;
pub mod reviews;
pub mod search;

pub use payments::PaymentsBackend;
