// booknest-core/src/pipeline/definition.rs

//! `Pipeline<TData, Err>` and its structural queries.

use crate::core::handler::Handler;
use crate::core::step::StepDef;
use crate::error::PipelineError;
use std::collections::HashMap;

/// The three phases a step runs through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Before,
  On,
  After,
}

impl Phase {
  pub const ALL: [Phase; 3] = [Phase::Before, Phase::On, Phase::After];

  pub fn as_str(self) -> &'static str {
    match self {
      Phase::Before => "before",
      Phase::On => "on",
      Phase::After => "after",
    }
  }
}

pub(crate) struct StepHandlers<TData: Send + Sync + 'static, Err> {
  pub(crate) before: Vec<Handler<TData, Err>>,
  pub(crate) on: Vec<Handler<TData, Err>>,
  pub(crate) after: Vec<Handler<TData, Err>>,
}

impl<TData: Send + Sync + 'static, Err> Default for StepHandlers<TData, Err> {
  fn default() -> Self {
    Self {
      before: Vec::new(),
      on: Vec::new(),
      after: Vec::new(),
    }
  }
}

impl<TData: Send + Sync + 'static, Err> StepHandlers<TData, Err> {
  pub(crate) fn phase(&self, phase: Phase) -> &[Handler<TData, Err>] {
    match phase {
      Phase::Before => &self.before,
      Phase::On => &self.on,
      Phase::After => &self.after,
    }
  }

  pub(crate) fn phase_mut(&mut self, phase: Phase) -> &mut Vec<Handler<TData, Err>> {
    match phase {
      Phase::Before => &mut self.before,
      Phase::On => &mut self.on,
      Phase::After => &mut self.after,
    }
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.before.is_empty() && self.on.is_empty() && self.after.is_empty()
  }
}

/// An ordered list of named steps over a shared context `TData`.
///
/// Handler errors are the pipeline's `Err`; framework failures such as a
/// required step without handlers are converted through `From<PipelineError>`.
pub struct Pipeline<TData, Err>
where
  TData: Send + Sync + 'static,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef<TData>>,
  pub(crate) handlers: HashMap<String, StepHandlers<TData, Err>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: Send + Sync + 'static,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub fn new(steps: Vec<StepDef<TData>>) -> Self {
    Self {
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  /// Panics on an unknown step name: that is a typo in the pipeline's setup
  /// code, not a runtime condition.
  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!("Pipeline setup error: step '{}' is not defined.", step_name);
    }
  }

  pub(crate) fn handlers_for(&self, step_name: &str) -> Option<&StepHandlers<TData, Err>> {
    self.handlers.get(step_name)
  }
}
