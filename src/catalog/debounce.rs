//! Cancelable debounce timer handle.
//!
//! Zellij timers (`set_timeout`) cannot be canceled once issued and arrive as
//! anonymous `Timer` events. With a single fixed delay they expire in the order
//! they were issued, so the [`Debouncer`] keeps a FIFO of issued handles plus
//! the one currently armed. Arming a new handle cancels the previous one; an
//! expiry only counts when the handle it belongs to is still armed.
//!
//! ```text
//! keystroke a → issue #1 (armed #1)
//! keystroke b → issue #2 (armed #2, #1 canceled)
//! expiry      → pop #1, stale, ignored
//! expiry      → pop #2, armed, fires
//! ```

use std::collections::VecDeque;
use std::time::Duration;

/// Default debounce interval for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Identifier of one issued timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceHandle(u64);

/// Explicit debounce timer state.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    next_handle: u64,
    armed: Option<DebounceHandle>,
    issued: VecDeque<DebounceHandle>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_handle: 0,
            armed: None,
            issued: VecDeque::new(),
        }
    }

    /// The fixed delay every issued timer uses.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Issues a new timer handle, replacing (and thereby canceling) any armed one.
    ///
    /// The caller is responsible for actually starting a host timer of
    /// [`delay`](Self::delay) for the returned handle.
    pub fn schedule(&mut self) -> DebounceHandle {
        let handle = DebounceHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);

        if let Some(previous) = self.armed.replace(handle) {
            tracing::trace!(canceled = previous.0, armed = handle.0, "debounce re-armed");
        }
        self.issued.push_back(handle);
        handle
    }

    /// Cancels the armed handle. Timers already issued still expire but are ignored.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Whether an armed handle is waiting to expire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.armed.is_some()
    }

    /// Consumes one timer expiry.
    ///
    /// Returns `true` when the expiring timer is the armed one, which disarms it.
    /// Expiries of canceled handles, or with nothing issued, return `false`.
    pub fn on_expiry(&mut self) -> bool {
        let Some(expired) = self.issued.pop_front() else {
            return false;
        };

        if self.armed == Some(expired) {
            self.armed = None;
            true
        } else {
            tracing::trace!(handle = expired.0, "ignoring stale debounce expiry");
            false
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_scheduled_timer_fires() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule();
        debouncer.schedule();
        debouncer.schedule();

        assert!(!debouncer.on_expiry());
        assert!(!debouncer.on_expiry());
        assert!(debouncer.on_expiry());
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn single_timer_fires() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule();
        assert!(debouncer.is_pending());
        assert!(debouncer.on_expiry());
    }

    #[test]
    fn canceled_timer_is_ignored() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule();
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert!(!debouncer.on_expiry());
    }

    #[test]
    fn rescheduling_after_expiry_starts_fresh() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule();
        assert!(debouncer.on_expiry());

        debouncer.schedule();
        assert!(debouncer.on_expiry());
    }

    #[test]
    fn spurious_expiry_is_harmless() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        assert!(!debouncer.on_expiry());
        assert_eq!(debouncer.delay(), Duration::from_millis(10));
    }
}
