// storefront/src/errors.rs

use booknest::CheckoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// Any non-2xx answer other than 404. `message` is the backend's `detail`
  /// when it sent one.
  #[error("Backend Error ({status}): {message}")]
  Backend { status: u16, message: String },

  #[error("Transport Error: {0}")]
  Transport(String),

  #[error("Serialization Error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Checkout Error: {source}")]
  Checkout {
    #[from]
    source: CheckoutError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl AppError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, AppError::NotFound(_))
  }

  /// Process exit code used by the CLI.
  pub fn exit_code(&self) -> u8 {
    match self {
      AppError::Validation(_) | AppError::Config(_) => 2,
      AppError::NotFound(_) => 3,
      AppError::Backend { .. } | AppError::Transport(_) => 4,
      AppError::Checkout { .. } => 5,
      AppError::Serialization(_) | AppError::Url(_) | AppError::Internal(_) => 1,
    }
  }
}

// Seams that speak anyhow (the order backend) hand AppErrors back through it.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<AppError>() {
      Ok(app_err) => app_err,
      Err(other) => match other.downcast::<CheckoutError>() {
        Ok(source) => AppError::Checkout { source },
        Err(other) => AppError::Internal(format!("{:#}", other)),
      },
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
