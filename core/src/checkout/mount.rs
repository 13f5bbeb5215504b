// booknest-core/src/checkout/mount.rs

use parking_lot::Mutex;

/// The container the payment widget renders its buttons into.
///
/// Exactly one session owns a mount. It is cleared and re-populated on every
/// dependency change; `writes()` counts both kinds of write.
#[derive(Debug)]
pub struct ButtonMount {
  selector: String,
  state: Mutex<MountState>,
}

#[derive(Debug, Default)]
struct MountState {
  children: Vec<String>,
  writes: u64,
}

impl ButtonMount {
  pub fn new(selector: impl Into<String>) -> Self {
    Self {
      selector: selector.into(),
      state: Mutex::new(MountState::default()),
    }
  }

  pub fn selector(&self) -> &str {
    &self.selector
  }

  pub fn clear(&self) {
    let mut state = self.state.lock();
    state.children.clear();
    state.writes += 1;
  }

  pub fn attach(&self, markup: impl Into<String>) {
    let mut state = self.state.lock();
    state.children.push(markup.into());
    state.writes += 1;
  }

  pub fn contents(&self) -> Vec<String> {
    self.state.lock().children.clone()
  }

  pub fn is_empty(&self) -> bool {
    self.state.lock().children.is_empty()
  }

  pub fn writes(&self) -> u64 {
    self.state.lock().writes
  }
}
