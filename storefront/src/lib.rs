// storefront/src/lib.rs

//! BookNest storefront client: configuration, the backend REST client with
//! its resource wrappers, domain models and the `booknest` CLI commands.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
