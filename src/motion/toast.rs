//! Toast notification bookkeeping
//!
//! Every `show` bumps a generation number. The hide timer captures the
//! generation it was scheduled for and only hides the toast if no newer
//! toast has been shown since.

#[derive(Debug, Default)]
pub struct ToastState {
    generation: u64,
    visible: bool,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new toast; returns the token its hide timer must present
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.generation
    }

    /// Hide if `token` belongs to the most recent toast. Returns whether
    /// the toast should actually be hidden.
    pub fn hide(&mut self, token: u64) -> bool {
        if token != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_timer_does_not_hide_newer_toast() {
        let mut t = ToastState::new();
        let first = t.show();
        let second = t.show();

        assert!(!t.hide(first));
        assert!(t.is_visible());

        assert!(t.hide(second));
        assert!(!t.is_visible());
        assert!(!t.hide(second));
    }
}
