// booknest-core/src/checkout/liveness.rs

//! Liveness tokens: the guard every async continuation checks before it
//! writes session state or touches the mount.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug)]
pub struct Liveness {
  generation: AtomicU64,
  mounted: AtomicBool,
}

impl Liveness {
  pub fn new() -> Arc<Self> {
    Arc::new(Self {
      generation: AtomicU64::new(0),
      mounted: AtomicBool::new(true),
    })
  }

  /// Starts a new render cycle. Tokens from earlier cycles go stale.
  pub fn renew(self: &Arc<Self>) -> LivenessToken {
    let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
    LivenessToken {
      liveness: Arc::clone(self),
      generation,
    }
  }

  pub fn current(self: &Arc<Self>) -> LivenessToken {
    LivenessToken {
      liveness: Arc::clone(self),
      generation: self.generation.load(Ordering::SeqCst),
    }
  }

  /// Permanent: once unmounted, no token is live again.
  pub fn unmount(&self) {
    self.mounted.store(false, Ordering::SeqCst);
  }

  pub fn is_mounted(&self) -> bool {
    self.mounted.load(Ordering::SeqCst)
  }
}

#[derive(Debug, Clone)]
pub struct LivenessToken {
  liveness: Arc<Liveness>,
  generation: u64,
}

impl LivenessToken {
  pub fn is_live(&self) -> bool {
    self.liveness.is_mounted() && self.liveness.generation.load(Ordering::SeqCst) == self.generation
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }
}
