//! Edge-triggered focus request

/// Fires once when validity goes from false to true.
///
/// Staying valid does not fire again; validity has to be lost first.
#[derive(Debug, Clone, Default)]
pub struct FocusLatch {
    was_valid: bool,
}

impl FocusLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest validity; true when focus should move to submit
    pub fn update(&mut self, is_valid: bool) -> bool {
        let fire = !self.was_valid && is_valid;
        self.was_valid = is_valid;
        fire
    }

    pub fn reset(&mut self) {
        self.was_valid = false;
    }
}
