use serde::{Deserialize, Serialize};

/// Tracks which logical page the host is executing, across activations.
///
/// The host resolves a stable page-identity string however it likes (URL,
/// script context); this type only compares the identity of the current
/// activation against the one recorded at the end of the previous
/// activation. `finish_activation` must run at the bottom of every page,
/// before the host may navigate away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageNavigation {
    previous: String,
    current: String,
}

impl PageNavigation {
    /// Start tracking on the first activation. Previous is seeded with the
    /// current identity so the first run is never a transition.
    pub fn new(page_id: impl Into<String>) -> Self {
        let id = page_id.into();
        Self { previous: id.clone(), current: id }
    }

    /// Record the identity the host resolved for this activation.
    pub fn begin_activation(&mut self, page_id: impl Into<String>) {
        self.current = page_id.into();
    }

    /// True when this activation landed on a different page than the last.
    pub fn page_changed(&self) -> bool {
        self.current != self.previous
    }

    /// Fold current into previous; call at the bottom of every activation.
    pub fn finish_activation(&mut self) {
        self.previous = self.current.clone();
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }
}
