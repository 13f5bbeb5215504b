// booknest-core/src/core/control.rs

//! Flow-control signals returned by handlers and the outcome of a run.

/// Returned by every handler to tell the pipeline whether to go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineControl {
  Continue,
  /// Halt immediately. Remaining handlers of this step and all later steps
  /// are not executed. Checkout handlers use this when their work became stale.
  Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every step ran (or was skipped by its condition).
  Completed,
  /// A handler returned `PipelineControl::Stop`.
  Stopped,
}
