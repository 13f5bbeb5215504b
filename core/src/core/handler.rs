// booknest-core/src/core/handler.rs

use super::{ContextData, PipelineControl};
use std::future::Future;
use std::pin::Pin;

/// A boxed async step handler.
///
/// Handlers receive their own clone of the run's `ContextData`, lock it for
/// short synchronous sections, and resolve to a `PipelineControl` or the
/// pipeline's error type.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;
