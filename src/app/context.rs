//! Shared view mode context.
//!
//! A single explicit value read by every renderer through [`ViewContext::mode`]
//! and changed only through [`ViewContext::set`].

use super::modes::ViewMode;

/// Holder of the session's current [`ViewMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewContext {
    mode: ViewMode,
}

impl ViewContext {
    #[must_use]
    pub const fn new(mode: ViewMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Sets the view mode. Returns `true` if it changed.
    pub fn set(&mut self, mode: ViewMode) -> bool {
        if self.mode == mode {
            return false;
        }
        tracing::debug!(from = %self.mode, to = %mode, "view mode changed");
        self.mode = mode;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_change_only_once() {
        let mut ctx = ViewContext::default();
        assert_eq!(ctx.mode(), ViewMode::Grid);

        assert!(ctx.set(ViewMode::Table));
        assert!(!ctx.set(ViewMode::Table));
        assert_eq!(ctx.mode(), ViewMode::Table);
    }
}
